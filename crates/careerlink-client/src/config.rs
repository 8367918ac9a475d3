//! Gateway configuration.
//!
//! Configuration priority: explicit constructor > environment variables >
//! defaults.

use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the REST gateway.
///
/// The timeout bounds each HTTP round-trip at the transport level; it is
/// not operation-level cancellation (an operation whose request times out
/// resolves as a rejected transition like any other failure).
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GatewayConfig {
    /// Creates a config pointing at the given base URL with the default
    /// timeout. A trailing slash on the URL is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// Reads `CAREERLINK_API_URL` and `CAREERLINK_API_TIMEOUT_SECS`,
    /// falling back to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let base_url =
            env::var("CAREERLINK_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = env::var("CAREERLINK_API_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        Self { base_url, timeout }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
