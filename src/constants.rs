//! Application constants and configuration

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/quotes";
pub const API_URL_ENV: &str = "INSPIREME_API_URL";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
