//! Runtime configuration loaded from the environment.
//!
//! `.env` is loaded by the binary before this runs, so both real environment
//! variables and dotenv entries are honored.

use std::time::Duration;

/// Default catalog base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default per-call timeout for catalog requests.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const API_URL_VAR: &str = "POKEDEX_API_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "POKEDEX_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive number of seconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must be an http(s) URL, got '{value}'")]
    InvalidUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog base URL without trailing slash
    pub api_base_url: String,
    /// Upper bound for a single catalog call, and therefore for a batch
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_VAR) {
            let url = url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl {
                    var: API_URL_VAR,
                    value: url.to_string(),
                });
            }
            config.api_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup(REQUEST_TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout {
                    var: REQUEST_TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
