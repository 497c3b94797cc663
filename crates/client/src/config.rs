//! Runtime configuration for the API client.

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV_VAR: &str = "KNIGHTS_API_BASE_URL";

/// Configuration for [`HttpKnightsApi`](crate::HttpKnightsApi).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create a config with an explicit base URL (trailing slash trimmed).
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a config from the environment.
    ///
    /// Uses `KNIGHTS_API_BASE_URL`, falling back to the default if not set.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    /// Returns the configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
