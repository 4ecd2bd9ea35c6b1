//! Build-time configuration.
//!
//! The backend base URL is baked in at compile time from
//! `PORTFOLIO_API_URL`; a static bundle has no runtime environment to read.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use session::api::DEFAULT_API_URL;

/// Base URL every request is resolved against.
pub fn api_base_url() -> &'static str {
    resolve_api_url(option_env!("PORTFOLIO_API_URL"))
}

fn resolve_api_url(configured: Option<&'static str>) -> &'static str {
    configured.map(str::trim).filter(|url| !url.is_empty()).unwrap_or(DEFAULT_API_URL)
}
