//! Build-time Configuration
//!
//! The wasm bundle has no process environment, so settings are baked in
//! from environment variables at compile time.

use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("CHECKOUT_API_URL `{value}` is not a valid URL: {reason}")]
    InvalidApiUrl { value: String, reason: String },

    #[error("CHECKOUT_API_URL must use http or https, got `{0}`")]
    UnsupportedScheme(String),

    #[error("CHECKOUT_LOG must not be empty")]
    EmptyLogFilter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Checkout service base URL, always ending in `/`
    pub api_base: Url,
    /// `tracing` filter directives
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = option_env!("CHECKOUT_API_URL").unwrap_or(DEFAULT_API_URL);
        let log_filter = option_env!("CHECKOUT_LOG").unwrap_or(DEFAULT_LOG_FILTER);
        Self::new(api_url, log_filter)
    }

    pub fn new(api_url: &str, log_filter: &str) -> Result<Self, ConfigError> {
        let mut api_base = Url::parse(api_url.trim()).map_err(|e| ConfigError::InvalidApiUrl {
            value: api_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(api_base.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(api_base.scheme().to_string()));
        }

        // Url::join replaces the last segment unless the base is a "directory"
        if !api_base.path().ends_with('/') {
            let path = format!("{}/", api_base.path());
            api_base.set_path(&path);
        }

        let log_filter = log_filter.trim();
        if log_filter.is_empty() {
            return Err(ConfigError::EmptyLogFilter);
        }

        Ok(Self { api_base, log_filter: log_filter.to_string() })
    }
}
