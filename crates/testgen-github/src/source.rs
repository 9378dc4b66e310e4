//! Storage-agnostic interface over repository data.

use async_trait::async_trait;

use crate::fixtures;
use crate::model::{FileContent, GitHubFile, GitHubRepo, Sourced};

/// Read-only access to a user's repositories.
///
/// Implementations never fail: when the real backend is unavailable they
/// answer from fixtures and tag the result [`crate::Source::Fallback`].
/// `token` is the caller's bearer token, if any.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn list_repositories(&self, token: Option<&str>) -> Sourced<Vec<GitHubRepo>>;

    /// List entries under `path` (empty for the repository root).
    async fn list_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        token: Option<&str>,
    ) -> Sourced<Vec<GitHubFile>>;

    async fn file_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        token: Option<&str>,
    ) -> Sourced<FileContent>;
}

/// Source that always answers from fixtures. Useful offline and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

#[async_trait]
impl RepositorySource for FixtureSource {
    async fn list_repositories(&self, _token: Option<&str>) -> Sourced<Vec<GitHubRepo>> {
        Sourced::fallback(fixtures::repositories())
    }

    async fn list_contents(
        &self,
        _owner: &str,
        repo: &str,
        path: &str,
        _token: Option<&str>,
    ) -> Sourced<Vec<GitHubFile>> {
        Sourced::fallback(fixtures::contents(repo, path))
    }

    async fn file_content(
        &self,
        _owner: &str,
        _repo: &str,
        path: &str,
        _token: Option<&str>,
    ) -> Sourced<FileContent> {
        Sourced::fallback(fixtures::file_content(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_source_tags_everything_as_fallback() {
        let source = FixtureSource;
        assert!(source.list_repositories(None).await.is_fallback());

        let listing = source
            .list_contents("user", "my-react-app", "", None)
            .await;
        assert!(listing.is_fallback());
        assert!(!listing.value.is_empty());

        let file = source
            .file_content("user", "my-react-app", "src/App.tsx", Some("t"))
            .await;
        assert!(file.is_fallback());
        assert_eq!(file.value.path, "src/App.tsx");
    }
}
