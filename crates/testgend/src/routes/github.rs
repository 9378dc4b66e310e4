//! GitHub passthrough endpoints.
//!
//! Reads go through the configured `RepositorySource`; every response
//! names the path that answered in `x-testgen-source`. OAuth and pull
//! requests are simulated.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use testgen_github::{
    authorize_url, bearer_token, exchange_code, simulate_pull_request, AuthToken, PullRequest,
    PullRequestDraft, Sourced,
};

use crate::error::{ApiError, Result};
use crate::AppState;

pub const SOURCE_HEADER: &str = "x-testgen-source";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUrlResponse {
    pub auth_url: String,
}

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
}

/// File body as the contents API would return it.
#[derive(Debug, Serialize)]
pub struct EncodedFile {
    pub name: String,
    pub path: String,
    pub content: String,
    pub encoding: &'static str,
}

/// Caller's token from the `Authorization` header; 401 when absent.
fn require_token(headers: &HeaderMap) -> Result<String> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token)
        .map(str::to_string)
        .ok_or(ApiError::Unauthorized)
}

fn sourced_json<T: Serialize>(sourced: Sourced<T>) -> Response {
    ([(SOURCE_HEADER, sourced.source.as_str())], Json(sourced.value)).into_response()
}

/// `GET /api/github/auth`
pub async fn auth(State(state): State<AppState>) -> Json<AuthUrlResponse> {
    Json(AuthUrlResponse {
        auth_url: authorize_url(&state.config.github_client_id),
    })
}

/// `POST /api/github/callback?code=`
pub async fn callback(Query(params): Query<CallbackParams>) -> Result<Json<AuthToken>> {
    let token = exchange_code(params.code.as_deref().unwrap_or_default())?;
    Ok(Json(token))
}

/// `GET /api/github/repositories`
pub async fn repositories(State(state): State<AppState>, headers: HeaderMap) -> Result<Response> {
    let token = require_token(&headers)?;
    let repos = state.source.list_repositories(Some(&token)).await;
    Ok(sourced_json(repos))
}

/// `GET /api/github/repos/:owner/:repo/contents`
pub async fn repository_files(
    State(state): State<AppState>,
    Path((owner, repo)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Response> {
    let token = require_token(&headers)?;
    let listing = state
        .source
        .list_contents(&owner, &repo, "", Some(&token))
        .await;
    Ok(sourced_json(listing))
}

/// `GET /api/github/repos/:owner/:repo/contents/*path`
pub async fn file_content(
    State(state): State<AppState>,
    Path((owner, repo, path)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> Result<Response> {
    let token = require_token(&headers)?;
    let file = state
        .source
        .file_content(&owner, &repo, &path, Some(&token))
        .await;
    Ok(sourced_json(file.map(|f| EncodedFile {
        name: f.name,
        path: f.path,
        content: STANDARD.encode(f.content.as_bytes()),
        encoding: "base64",
    })))
}

/// `POST /api/github/repos/:owner/:repo/pulls`
pub async fn create_pull_request(
    Path((owner, repo)): Path<(String, String)>,
    headers: HeaderMap,
    payload: std::result::Result<Json<PullRequestDraft>, JsonRejection>,
) -> Result<Json<PullRequest>> {
    require_token(&headers)?;
    let Json(draft) =
        payload.map_err(|r| ApiError::from_rejection(r, "Invalid pull request body"))?;
    Ok(Json(simulate_pull_request(&owner, &repo, &draft)))
}
