use std::time::Duration;

/// Default collection URL of the character store in local development.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/characters";

/// Connection settings for [`HttpCharacterStore`](crate::HttpCharacterStore).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Collection URL, e.g. `http://localhost:3000/characters`.
    pub api_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                              |
    /// |------------------------|--------------------------------------|
    /// | `CHARACTERS_API_URL`   | `http://localhost:3000/characters`   |
    /// | `REQUEST_TIMEOUT_SECS` | unset (no timeout)                   |
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("CHARACTERS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());

        let request_timeout = std::env::var("REQUEST_TIMEOUT_SECS").ok().map(|secs| {
            Duration::from_secs(
                secs.trim()
                    .parse()
                    .expect("REQUEST_TIMEOUT_SECS must be a valid u64"),
            )
        });

        Self {
            api_url,
            request_timeout,
        }
    }

    /// Build a config for the given collection URL with no timeout.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }
}
