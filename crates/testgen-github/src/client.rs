//! GitHub REST client with fixture fallback.
//!
//! Every read first goes to the configured API. Any failure (no token,
//! transport error, non-success status, undecodable body) is logged and
//! answered from [`crate::fixtures`] with a `Fallback` source tag.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use testgen_core::{emit_source_fallback, METRICS};
use tracing::debug;

use crate::config::GitHubConfig;
use crate::error::GitHubError;
use crate::fixtures;
use crate::model::{FileContent, GitHubFile, GitHubRepo, Sourced};
use crate::source::RepositorySource;
use crate::Result;

const ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("testgen-github/", env!("CARGO_PKG_VERSION"));

/// Raw single-file payload from the contents API.
#[derive(Deserialize)]
struct ContentsFile {
    name: String,
    path: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    encoding: String,
}

/// GitHub client for repository reads
pub struct GitHubClient {
    config: GitHubConfig,
    http_client: reqwest::Client,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(GitHubClient {
            config,
            http_client,
        })
    }

    /// Create client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(GitHubConfig::from_env())
    }

    pub fn config(&self) -> &GitHubConfig {
        &self.config
    }

    fn resolve_token<'a>(&'a self, token: Option<&'a str>) -> Result<&'a str> {
        token
            .filter(|t| !t.is_empty())
            .or(self.config.token.as_deref())
            .ok_or(GitHubError::MissingToken)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T> {
        let token = self.resolve_token(token)?;
        let url = format!("{}{}", self.config.api_url, path);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(reqwest::header::ACCEPT, ACCEPT)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `GET /user/repos`
    pub async fn fetch_repositories(&self, token: Option<&str>) -> Result<Vec<GitHubRepo>> {
        self.get_json("/user/repos", token).await
    }

    /// `GET /repos/{owner}/{repo}/contents/{path}` for a directory
    pub async fn fetch_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        token: Option<&str>,
    ) -> Result<Vec<GitHubFile>> {
        self.get_json(&contents_path(owner, repo, path), token)
            .await
    }

    /// `GET /repos/{owner}/{repo}/contents/{path}` for a file, decoded to text
    pub async fn fetch_file_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        token: Option<&str>,
    ) -> Result<FileContent> {
        let raw: ContentsFile = self
            .get_json(&contents_path(owner, repo, path), token)
            .await?;
        let content = decode_content(&raw.content, &raw.encoding)?;
        Ok(FileContent {
            name: raw.name,
            path: raw.path,
            content,
        })
    }
}

fn contents_path(owner: &str, repo: &str, path: &str) -> String {
    let path = path.trim_matches('/');
    if path.is_empty() {
        format!("/repos/{owner}/{repo}/contents")
    } else {
        format!("/repos/{owner}/{repo}/contents/{path}")
    }
}

/// Decode a contents payload. GitHub wraps base64 at 60 columns.
fn decode_content(content: &str, encoding: &str) -> Result<String> {
    match encoding {
        "base64" => {
            let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
            let bytes = STANDARD
                .decode(compact)
                .map_err(|e| GitHubError::Decode(e.to_string()))?;
            String::from_utf8(bytes).map_err(|e| GitHubError::Decode(e.to_string()))
        }
        "" | "utf-8" => Ok(content.to_string()),
        other => Err(GitHubError::Decode(format!("unsupported encoding {other}"))),
    }
}

fn live_or_fallback<T>(operation: &str, result: Result<T>, fallback: impl FnOnce() -> T) -> Sourced<T> {
    match result {
        Ok(value) => Sourced::live(value),
        Err(err) => {
            emit_source_fallback(operation, &err);
            METRICS.inc_source_fallbacks();
            Sourced::fallback(fallback())
        }
    }
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn list_repositories(&self, token: Option<&str>) -> Sourced<Vec<GitHubRepo>> {
        let result = self.fetch_repositories(token).await;
        live_or_fallback("list_repositories", result, fixtures::repositories)
    }

    async fn list_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        token: Option<&str>,
    ) -> Sourced<Vec<GitHubFile>> {
        let result = self.fetch_contents(owner, repo, path, token).await;
        live_or_fallback("list_contents", result, || fixtures::contents(repo, path))
    }

    async fn file_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        token: Option<&str>,
    ) -> Sourced<FileContent> {
        let result = self.fetch_file_content(owner, repo, path, token).await;
        live_or_fallback("file_content", result, || fixtures::file_content(path))
    }
}
