use std::sync::OnceLock;

use color_eyre::eyre::{eyre, Result};

use crate::geocode::{ForwardResolver, ReverseResolver};
use crate::transport::NaverTransport;

pub static REQWEST: OnceLock<reqwest::Client> = OnceLock::new();
pub static FORWARD: OnceLock<ForwardResolver<NaverTransport>> = OnceLock::new();
pub static REVERSE: OnceLock<ReverseResolver<NaverTransport>> = OnceLock::new();

pub fn get_reqwest_client() -> Result<&'static reqwest::Client> {
    REQWEST.get().ok_or(eyre!("Failed to get reqwest client"))
}

pub fn get_forward_resolver() -> Result<&'static ForwardResolver<NaverTransport>> {
    FORWARD.get().ok_or(eyre!("Failed to get forward resolver"))
}

pub fn get_reverse_resolver() -> Result<&'static ReverseResolver<NaverTransport>> {
    REVERSE.get().ok_or(eyre!("Failed to get reverse resolver"))
}
