//! Runtime configuration from environment variables
//!
//! Read once at startup and passed into the app explicitly so nothing past
//! `main` touches ambient environment state.

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_APP_TITLE};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub app_title: String,
}

impl Config {
    /// Load from `API_BASE_URL` and `APP_TITLE`, falling back to defaults for
    /// unset or empty values.
    pub fn from_env() -> Self {
        let config = Self::from_values(
            std::env::var("API_BASE_URL").ok(),
            std::env::var("APP_TITLE").ok(),
        );
        debug!(
            api_base_url = %config.api_base_url,
            app_title = %config.app_title,
            "Configuration loaded"
        );
        config
    }

    fn from_values(api_base_url: Option<String>, app_title: Option<String>) -> Self {
        Self {
            api_base_url: api_base_url
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            app_title: app_title
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_APP_TITLE.to_string()),
        }
    }

    /// Endpoint for the quote fetch. Tolerates a trailing slash on the base URL.
    pub fn quote_url(&self) -> String {
        format!("{}/quote", self.api_base_url.trim_end_matches('/'))
    }
}
