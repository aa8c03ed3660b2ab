//! Forward and reverse address resolution over a [`GeocodingTransport`].
//!
//! Both resolvers recover every failure into a `Failed` outcome, so callers
//! match on the result instead of propagating errors.
//!
//! [`GeocodingTransport`]: crate::transport::GeocodingTransport

pub mod forward;
pub mod query;
pub mod reverse;

use axum::http::StatusCode;
use tracing::warn;

pub use forward::ForwardResolver;
pub use reverse::ReverseResolver;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("empty query")]
    EmptyInput,

    #[error("network exception: {0}")]
    Transport(String),

    #[error("HTTP {code} {message}{}", excerpt_suffix(.excerpt))]
    Http {
        code: u16,
        message: String,
        excerpt: Option<String>,
    },

    #[error("HTTP {code} but body is null")]
    EmptyBody { code: u16 },

    #[error("0 results (query={query})")]
    NoResults { query: String },

    #[error("0 reverse results")]
    NoReverseResults,

    #[error("latitude parse failed")]
    LatitudeParse,

    #[error("longitude parse failed")]
    LongitudeParse,
}

/// Outcome of a forward lookup
#[derive(Debug, Clone, PartialEq)]
pub enum ForwardResult {
    Resolved {
        resolved_address: String,
        latitude: f64,
        longitude: f64,
    },
    Failed(ResolveError),
}

impl ForwardResult {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ForwardResult::Resolved { .. })
    }

    pub fn reason(&self) -> Option<String> {
        match self {
            ForwardResult::Resolved { .. } => None,
            ForwardResult::Failed(err) => Some(err.to_string()),
        }
    }
}

/// Outcome of a reverse lookup
#[derive(Debug, Clone, PartialEq)]
pub enum ReverseResult {
    Resolved { address: String },
    Failed(ResolveError),
}

impl ReverseResult {
    pub fn reason(&self) -> Option<String> {
        match self {
            ReverseResult::Resolved { .. } => None,
            ReverseResult::Failed(err) => Some(err.to_string()),
        }
    }
}

/// Builds the failure for a non-success status and logs the full body.
fn http_failure(status: StatusCode, error_body: Option<&str>, excerpt_chars: usize) -> ResolveError {
    warn!(
        code = status.as_u16(),
        body = error_body.unwrap_or_default(),
        "geocoding provider returned an error status"
    );
    ResolveError::Http {
        code: status.as_u16(),
        message: status.canonical_reason().unwrap_or_default().to_string(),
        excerpt: error_body
            .map(str::trim)
            .filter(|body| !body.is_empty())
            .map(|body| excerpt(body, excerpt_chars)),
    }
}

fn excerpt_suffix(excerpt: &Option<String>) -> String {
    excerpt
        .as_deref()
        .map(|body| format!(" - {body}"))
        .unwrap_or_default()
}

/// First `max_chars` characters of `text`
fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Joins the non-blank parts with single spaces
fn join_non_blank<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
