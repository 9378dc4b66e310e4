//! Error types for testgen-github

use thiserror::Error;

/// Errors that can occur while talking to GitHub.
///
/// Read operations never surface these to callers; they are logged and
/// answered from fixtures instead.
#[derive(Error, Debug)]
pub enum GitHubError {
    /// No token was supplied and none is configured
    #[error("no GitHub token available")]
    MissingToken,

    /// OAuth callback arrived without a code
    #[error("Authorization code required")]
    MissingAuthorizationCode,

    /// GitHub answered with a non-success status
    #[error("GitHub API returned {status} for {url}")]
    Status { status: u16, url: String },

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// File content was not valid base64 or not UTF-8
    #[error("content decode error: {0}")]
    Decode(String),

    /// Repository reference was not `owner/name`
    #[error("invalid repository reference: {0}")]
    InvalidRepoRef(String),
}

impl From<reqwest::Error> for GitHubError {
    fn from(err: reqwest::Error) -> Self {
        GitHubError::Http(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_url() {
        let err = GitHubError::Status {
            status: 401,
            url: "https://api.github.com/user/repos".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("/user/repos"));
    }

    #[test]
    fn missing_code_message_matches_api_error() {
        assert_eq!(
            GitHubError::MissingAuthorizationCode.to_string(),
            "Authorization code required"
        );
    }
}
