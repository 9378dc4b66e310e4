//! GitHub payloads and the live/fallback source tag.

use serde::{Deserialize, Serialize};
use testgen_core::SubmittedFile;

use crate::error::GitHubError;

/// Where a piece of repository data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Answered by the GitHub REST API
    Live,
    /// Answered from built-in fixture data
    Fallback,
}

impl Source {
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Live => "live",
            Source::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value tagged with the source that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sourced<T> {
    pub source: Source,
    pub value: T,
}

impl<T> Sourced<T> {
    pub fn live(value: T) -> Self {
        Self {
            source: Source::Live,
            value,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            source: Source::Fallback,
            value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == Source::Fallback
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        Sourced {
            source: self.source,
            value: f(self.value),
        }
    }
}

/// Repository summary as returned by `GET /user/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub private: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
}

/// One entry of a contents listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubFile {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl GitHubFile {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Decoded text of a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    pub name: String,
    pub path: String,
    pub content: String,
}

impl From<FileContent> for SubmittedFile {
    fn from(file: FileContent) -> Self {
        SubmittedFile::new(file.path, file.content).with_detected_language()
    }
}

/// `owner/name` reference to a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl std::str::FromStr for RepoRef {
    type Err = GitHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(RepoRef::new(owner, name))
            }
            _ => Err(GitHubError::InvalidRepoRef(s.to_string())),
        }
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_ref_parses_owner_and_name() {
        let r: RepoRef = "user/my-react-app".parse().unwrap();
        assert_eq!(r.owner, "user");
        assert_eq!(r.name, "my-react-app");
        assert_eq!(r.to_string(), "user/my-react-app");
    }

    #[test]
    fn repo_ref_rejects_malformed_input() {
        for bad in ["", "user", "/repo", "user/", "a/b/c"] {
            assert!(bad.parse::<RepoRef>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn contents_entry_uses_type_field() {
        let entry: GitHubFile = serde_json::from_str(
            r#"{"name":"src","path":"src","type":"dir","sha":"abc","download_url":null}"#,
        )
        .unwrap();
        assert_eq!(entry.kind, EntryKind::Dir);
        assert!(!entry.is_file());
        assert!(entry.download_url.is_none());
    }

    #[test]
    fn sourced_map_keeps_source() {
        let s = Sourced::fallback(vec![1, 2, 3]).map(|v| v.len());
        assert!(s.is_fallback());
        assert_eq!(s.value, 3);
    }

    #[test]
    fn fetched_file_is_submitted_with_detected_language() {
        let file = SubmittedFile::from(FileContent {
            name: "main.py".to_string(),
            path: "app/main.py".to_string(),
            content: "import flask".to_string(),
        });
        assert_eq!(file.path, "app/main.py");
        assert_eq!(file.content, "import flask");
        assert_eq!(file.language.as_deref(), Some("Python"));
    }
}
