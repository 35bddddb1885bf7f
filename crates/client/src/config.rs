use eyre::{eyre, Result};
use std::env;
use std::time::Duration;

/// Connection settings for the booking backend.
///
/// The board talks to the backend over authenticated HTTPS; authentication
/// itself is handled elsewhere, the token simply arrives through the
/// environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the booking backend (required)
    pub api_base_url: String,
    /// Bearer token attached to every request (required)
    pub api_token: String,
    /// Per-request timeout in seconds (defaults to 30)
    pub request_timeout: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("TIDYSCHED_API_BASE_URL")
            .map_err(|_| eyre!("TIDYSCHED_API_BASE_URL environment variable not set"))?;

        let api_token = env::var("TIDYSCHED_API_TOKEN")
            .map_err(|_| eyre!("TIDYSCHED_API_TOKEN environment variable not set"))?;

        let request_timeout = env::var("TIDYSCHED_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        Ok(Self {
            api_base_url,
            api_token,
            request_timeout,
        })
    }

    /// Per-request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}
