//! testgend: HTTP service for TestGen
//!
//! Serves the JSON API the browser front end talks to:
//! test plan proposals, canned test code, and GitHub repository access
//! with fixture fallback.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use testgen_github::RepositorySource;

pub use config::ServerConfig;
pub use error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub source: Arc<dyn RepositorySource>,
}

impl AppState {
    pub fn new(config: ServerConfig, source: Arc<dyn RepositorySource>) -> Self {
        AppState {
            config: Arc::new(config),
            source,
        }
    }

    /// Sleep for the configured simulated latency, if any.
    pub async fn simulate_latency(&self) {
        let delay = self.config.simulated_latency;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Build the service router with all routes and layers attached.
pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .route("/api/ping", get(routes::health::ping))
        .route("/api/github/auth", get(routes::github::auth))
        .route("/api/github/callback", post(routes::github::callback))
        .route("/api/github/repositories", get(routes::github::repositories))
        .route(
            "/api/github/repos/:owner/:repo/contents",
            get(routes::github::repository_files),
        )
        .route(
            "/api/github/repos/:owner/:repo/contents/*path",
            get(routes::github::file_content),
        )
        .route(
            "/api/github/repos/:owner/:repo/pulls",
            post(routes::github::create_pull_request),
        )
        .route(
            "/api/ai/generate-summaries",
            post(routes::ai::generate_summaries),
        )
        .route("/api/ai/generate-code", post(routes::ai::generate_code))
        .fallback(routes::not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(axum::middleware::from_fn(middleware::cors_middleware))
        .layer(axum::middleware::from_fn(
            middleware::request_tracing_middleware,
        ))
        .with_state(state)
}
