//! testgen-github: GitHub integration for TestGen
//!
//! Thin passthrough to the GitHub REST API for repository listings and file
//! contents. When GitHub cannot answer, reads fall back to built-in fixture
//! data and the result is tagged so callers can tell the two apart.
//!
//! OAuth and pull request creation are simulated; nothing is ever written
//! to GitHub.

pub mod client;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod oauth;
pub mod pulls;
pub mod source;

pub use client::GitHubClient;
pub use config::GitHubConfig;
pub use error::GitHubError;
pub use model::{EntryKind, FileContent, GitHubFile, GitHubRepo, RepoRef, Source, Sourced};
pub use oauth::{authorize_url, bearer_token, exchange_code, AuthToken};
pub use pulls::{simulate_pull_request, DraftFile, PullRequest, PullRequestDraft, PullRequestState};
pub use source::{FixtureSource, RepositorySource};

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, GitHubError>;
