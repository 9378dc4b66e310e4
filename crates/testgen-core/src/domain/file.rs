//! Files submitted for classification.

use serde::{Deserialize, Deserializer, Serialize};

use crate::language::language_from_path;

/// A source file handed to the classifier by the caller.
///
/// Only `path` and `content` take part in classification. Extra fields the
/// browser sends along (`name`, `type`, `selected`) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedFile {
    pub path: String,
    /// Empty when the caller could not fetch the file body. An explicit
    /// `null` decodes as empty too.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl SubmittedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            language: None,
        }
    }

    /// A file whose body is unknown; it can still match path predicates.
    pub fn path_only(path: impl Into<String>) -> Self {
        Self::new(path, String::new())
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Fill `language` from the file extension when the caller left it out.
    pub fn with_detected_language(mut self) -> Self {
        if self.language.is_none() {
            self.language = Some(language_from_path(&self.path).to_string());
        }
        self
    }

    /// Declared language, or the one guessed from the file extension.
    pub fn effective_language(&self) -> &str {
        self.language
            .as_deref()
            .unwrap_or_else(|| language_from_path(&self.path))
    }

    pub(crate) fn path_contains(&self, needle: &str) -> bool {
        self.path.contains(needle)
    }

    pub(crate) fn content_contains(&self, needle: &str) -> bool {
        self.content.contains(needle)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
