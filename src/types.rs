pub mod dto;
pub mod naver;
