//! Simulated pull request creation.
//!
//! No branch, commit or PR is created on GitHub. The draft is recorded in
//! the log and a plausible `PullRequest` is returned.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// A file the pull request would add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftFile {
    pub path: String,
    pub content: String,
}

/// Pull request as submitted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub head: String,
    #[serde(default)]
    pub base: String,
    #[serde(default)]
    pub files: Vec<DraftFile>,
}

impl PullRequestDraft {
    /// Draft that adds a single generated test file on `feature/generated-tests`.
    pub fn for_generated_tests(filename: &str, code: &str) -> Self {
        let stamp = Utc::now().timestamp_millis();
        let stem = filename.strip_suffix(".test.tsx").unwrap_or(filename);
        PullRequestDraft {
            title: "Add generated test cases".to_string(),
            body: "This PR adds automatically generated test cases using TestGen.".to_string(),
            head: "feature/generated-tests".to_string(),
            base: "main".to_string(),
            files: vec![DraftFile {
                path: format!("tests/{stem}-{stamp}.test.tsx"),
                content: code.to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestState {
    Open,
    Closed,
    Merged,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub id: i64,
    pub number: u32,
    pub title: String,
    pub body: String,
    pub html_url: String,
    pub state: PullRequestState,
    pub created_at: DateTime<Utc>,
}

/// Build the pull request GitHub would have returned for `draft`.
pub fn simulate_pull_request(owner: &str, repo: &str, draft: &PullRequestDraft) -> PullRequest {
    let created_at = Utc::now();
    let number = (Uuid::new_v4().as_u128() % 1000) as u32 + 1;

    info!(
        owner = %owner,
        repo = %repo,
        head = %draft.head,
        base = %draft.base,
        files = draft.files.len(),
        number,
        "simulated pull request"
    );

    PullRequest {
        id: created_at.timestamp_millis(),
        number,
        title: draft.title.clone(),
        body: draft.body.clone(),
        html_url: format!("https://github.com/{owner}/{repo}/pull/{number}"),
        state: PullRequestState::Open,
        created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_pr_echoes_draft_and_links_to_repo() {
        let draft = PullRequestDraft {
            title: "Add tests".to_string(),
            body: "generated".to_string(),
            head: "feature/x".to_string(),
            base: "main".to_string(),
            files: vec![],
        };
        let pr = simulate_pull_request("user", "my-react-app", &draft);
        assert_eq!(pr.title, "Add tests");
        assert_eq!(pr.body, "generated");
        assert_eq!(pr.state, PullRequestState::Open);
        assert!((1..=1000).contains(&pr.number));
        assert_eq!(
            pr.html_url,
            format!("https://github.com/user/my-react-app/pull/{}", pr.number)
        );
    }

    #[test]
    fn draft_decodes_with_missing_fields() {
        let draft: PullRequestDraft = serde_json::from_str(r#"{"title":"t"}"#).unwrap();
        assert_eq!(draft.title, "t");
        assert!(draft.files.is_empty());
    }

    #[test]
    fn generated_tests_draft_names_file_under_tests() {
        let draft = PullRequestDraft::for_generated_tests("hookstests.test.tsx", "code");
        assert_eq!(draft.head, "feature/generated-tests");
        assert_eq!(draft.files.len(), 1);
        assert!(draft.files[0].path.starts_with("tests/hookstests-"));
        assert!(draft.files[0].path.ends_with(".test.tsx"));
        assert_eq!(draft.files[0].content, "code");
    }

    #[test]
    fn state_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PullRequestState::Open).unwrap(),
            "\"open\""
        );
    }
}
