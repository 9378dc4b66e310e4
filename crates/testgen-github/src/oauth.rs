//! OAuth stub.
//!
//! Builds the authorize URL a browser would be sent to and hands back a
//! fixed demo token for any non-empty code. No token exchange happens.

use serde::{Deserialize, Serialize};

use crate::error::GitHubError;
use crate::Result;

pub const AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
pub const MOCK_ACCESS_TOKEN: &str = "mock_token";

/// Token response handed to the browser after the OAuth callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    pub token_type: String,
    pub scope: String,
}

pub fn authorize_url(client_id: &str) -> String {
    format!("{AUTHORIZE_URL}?client_id={client_id}&scope=repo")
}

/// Trade an authorization code for the demo token.
pub fn exchange_code(code: &str) -> Result<AuthToken> {
    if code.trim().is_empty() {
        return Err(GitHubError::MissingAuthorizationCode);
    }
    tracing::info!("issuing demo token for OAuth callback");
    Ok(AuthToken {
        access_token: MOCK_ACCESS_TOKEN.to_string(),
        token_type: "bearer".to_string(),
        scope: "repo".to_string(),
    })
}

/// Extract the token from an `Authorization` header value.
///
/// Accepts `Bearer <t>` and `token <t>` (scheme is case-insensitive) as
/// well as a bare token. Returns `None` for an empty value.
pub fn bearer_token(header: &str) -> Option<&str> {
    let header = header.trim();
    let token = match header.split_once(' ') {
        Some((scheme, rest))
            if scheme.eq_ignore_ascii_case("bearer") || scheme.eq_ignore_ascii_case("token") =>
        {
            rest.trim()
        }
        _ => header,
    };
    (!token.is_empty()).then_some(token)
}
