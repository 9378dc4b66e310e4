use serde::{Deserialize, Serialize};

/// Generated test source plus the framework and filename it targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeArtifact {
    pub code: String,
    pub framework: String,
    pub filename: String,
}
