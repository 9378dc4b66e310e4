//! GitHub client configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// GitHub configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// REST API base URL, without trailing slash
    pub api_url: String,
    /// OAuth application client id (may be empty in demos)
    pub client_id: String,
    /// Token used when the caller does not supply one
    pub token: Option<String>,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        GitHubConfig {
            api_url: std::env::var("GITHUB_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            client_id: std::env::var("GITHUB_CLIENT_ID").unwrap_or_default(),
            token: std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GitHubConfig {
    /// Create a new config from environment variables
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create config for a specific API endpoint, ignoring the environment
    pub fn new(api_url: &str) -> Self {
        GitHubConfig {
            api_url: api_url.trim_end_matches('/').to_string(),
            client_id: String::new(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn with_client_id(mut self, client_id: &str) -> Self {
        self.client_id = client_id.to_string();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new_trims_trailing_slash() {
        let config = GitHubConfig::new("https://ghe.example.com/api/v3/");
        assert_eq!(config.api_url, "https://ghe.example.com/api/v3");
        assert!(config.token.is_none());
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_config_builders() {
        let config = GitHubConfig::new(DEFAULT_API_URL)
            .with_token("secret-token")
            .with_client_id("abc123")
            .with_timeout_secs(2);
        assert_eq!(config.token, Some("secret-token".to_string()));
        assert_eq!(config.client_id, "abc123");
        assert_eq!(config.timeout_secs, 2);
    }

    #[test]
    fn test_config_default_has_api_url() {
        let config = GitHubConfig::default();
        assert!(!config.api_url.is_empty());
        assert!(!config.api_url.ends_with('/'));
    }
}
