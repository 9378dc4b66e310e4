//! Runtime settings for the HTTP service.

use std::time::Duration;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_PING_MESSAGE: &str = "ping";
/// Request bodies larger than this are rejected with 413.
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Service configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Message returned by `/api/ping`
    pub ping_message: String,
    /// OAuth client id embedded in the authorize URL
    pub github_client_id: String,
    /// Artificial delay before classification and code selection
    pub simulated_latency: Duration,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            ping_message: DEFAULT_PING_MESSAGE.to_string(),
            github_client_id: String::new(),
            simulated_latency: Duration::ZERO,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    pub fn with_ping_message(mut self, message: &str) -> Self {
        self.ping_message = message.to_string();
        self
    }

    pub fn with_github_client_id(mut self, client_id: &str) -> Self {
        self.github_client_id = client_id.to_string();
        self
    }

    pub fn with_simulated_latency_ms(mut self, millis: u64) -> Self {
        self.simulated_latency = Duration::from_millis(millis);
        self
    }

    pub fn with_max_body_bytes(mut self, bytes: usize) -> Self {
        self.max_body_bytes = bytes;
        self
    }
}
