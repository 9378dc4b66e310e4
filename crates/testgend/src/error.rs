//! Error types for testgend

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use testgen_core::TestGenError;
use testgen_github::GitHubError;
use thiserror::Error;

/// Errors returned by route handlers, rendered as `{ "error": <message> }`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Authorization header required")]
    Unauthorized,

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    /// Map a body decode failure onto the route's usage message.
    ///
    /// Oversized bodies keep their 413; everything else becomes a 400 with
    /// `message`, matching what a missing field would produce.
    pub fn from_rejection(rejection: JsonRejection, message: &str) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            tracing::debug!(reason = %rejection.body_text(), "rejected request body");
            ApiError::bad_request(message)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TestGenError> for ApiError {
    fn from(err: TestGenError) -> Self {
        match err {
            TestGenError::InvalidInput(reason) => ApiError::BadRequest(reason),
        }
    }
}

impl From<GitHubError> for ApiError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::MissingAuthorizationCode | GitHubError::InvalidRepoRef(_) => {
                ApiError::BadRequest(err.to_string())
            }
            GitHubError::MissingToken => ApiError::Unauthorized,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result type for route handlers
pub type Result<T> = std::result::Result<T, ApiError>;
