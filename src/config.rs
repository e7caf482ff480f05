//! Configuration options for the HomeBox client

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable selecting the backend base URL
pub const API_URL_ENV: &str = "HOMEBOX_API_URL";

/// Base URL used when `HOMEBOX_API_URL` is unset
pub const DEFAULT_API_URL: &str = "http://localhost:7745/api/v1";

/// Configuration options for the HomeBox client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the backend API, without a trailing slash
    pub base_url: String,

    /// Per-request timeout applied to the underlying HTTP client
    pub request_timeout: Option<Duration>,

    /// Path of the file holding the persisted session token.
    /// `None` keeps the token in memory only.
    pub token_file: Option<PathBuf>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        let base_url = env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self {
            base_url: normalize_base_url(&base_url),
            request_timeout: Some(Duration::from_secs(30)),
            token_file: None,
        }
    }
}

impl ClientOptions {
    /// Set the backend base URL
    pub fn with_base_url(mut self, value: &str) -> Self {
        self.base_url = normalize_base_url(value);
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Persist the session token to the given file
    pub fn with_token_file(mut self, value: impl Into<PathBuf>) -> Self {
        self.token_file = Some(value.into());
        self
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let options = ClientOptions::default().with_base_url("http://example.com/api/v1/");
        assert_eq!(options.base_url, "http://example.com/api/v1");
    }
}
