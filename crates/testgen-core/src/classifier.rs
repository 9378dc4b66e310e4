//! Rule-based test plan classification.
//!
//! Each catalog entry pairs a summary kind with a batch-level trigger and a
//! per-file scope. Entries are evaluated independently, in catalog order,
//! so the output ordering is fixed. All matching is literal and
//! case-sensitive.

use crate::domain::{Result, SubmittedFile, SummaryKind, TestGenError, TestPlanSummary};

/// Batch size above which end-to-end tests are proposed.
pub const E2E_MIN_EXCLUSIVE: usize = 3;
/// Batch size above which performance tests are proposed.
pub const PERFORMANCE_MIN_EXCLUSIVE: usize = 5;

/// Which of the submitted paths a summary covers.
#[derive(Clone, Copy)]
pub enum Scope {
    All,
    Matching(fn(&SubmittedFile) -> bool),
}

/// One row of the classification catalog.
#[derive(Clone, Copy)]
pub struct Category {
    pub kind: SummaryKind,
    pub trigger: fn(&[SubmittedFile]) -> bool,
    pub scope: Scope,
}

impl Category {
    fn summarize(&self, files: &[SubmittedFile]) -> Option<TestPlanSummary> {
        if !(self.trigger)(files) {
            return None;
        }
        let paths = files
            .iter()
            .filter(|file| match self.scope {
                Scope::All => true,
                Scope::Matching(matches) => matches(file),
            })
            .map(|file| file.path.clone())
            .collect();
        Some(TestPlanSummary::new(self.kind, paths))
    }
}

/// The catalog, in emission order.
pub const CATALOG: [Category; 7] = [
    Category {
        kind: SummaryKind::ReactComponents,
        trigger: has_react_components,
        scope: Scope::Matching(is_component_file),
    },
    Category {
        kind: SummaryKind::ComponentIntegration,
        trigger: has_react_components,
        scope: Scope::All,
    },
    Category {
        kind: SummaryKind::ApiTests,
        trigger: has_api_code,
        scope: Scope::Matching(is_api_path),
    },
    // "lib" paths trigger utility tests but are not part of their scope.
    Category {
        kind: SummaryKind::UtilityTests,
        trigger: has_utility_code,
        scope: Scope::Matching(is_utility_path),
    },
    Category {
        kind: SummaryKind::HooksTests,
        trigger: has_hooks,
        scope: Scope::Matching(is_hook_path),
    },
    Category {
        kind: SummaryKind::E2eTests,
        trigger: has_e2e_scale,
        scope: Scope::All,
    },
    Category {
        kind: SummaryKind::PerformanceTests,
        trigger: has_performance_scale,
        scope: Scope::All,
    },
];

/// Propose test plans for a batch of files.
///
/// Returns an empty list when no category applies. An empty batch is a
/// usage error.
pub fn classify_summaries(files: &[SubmittedFile]) -> Result<Vec<TestPlanSummary>> {
    if files.is_empty() {
        return Err(TestGenError::invalid_input("files array is required"));
    }

    let summaries: Vec<TestPlanSummary> = CATALOG
        .iter()
        .filter_map(|category| category.summarize(files))
        .collect();

    tracing::debug!(
        files = files.len(),
        summaries = summaries.len(),
        "classified file batch"
    );
    Ok(summaries)
}

fn is_component_file(file: &SubmittedFile) -> bool {
    file.path.ends_with(".tsx") || file.path.ends_with(".jsx")
}

fn mentions_react(file: &SubmittedFile) -> bool {
    file.content_contains("React") || file.content_contains("component")
}

fn has_react_components(files: &[SubmittedFile]) -> bool {
    files
        .iter()
        .any(|file| is_component_file(file) || mentions_react(file))
}

fn is_api_path(file: &SubmittedFile) -> bool {
    file.path_contains("api") || file.path_contains("service")
}

fn calls_network(file: &SubmittedFile) -> bool {
    file.content_contains("fetch") || file.content_contains("axios")
}

fn has_api_code(files: &[SubmittedFile]) -> bool {
    files
        .iter()
        .any(|file| is_api_path(file) || calls_network(file))
}

fn is_utility_path(file: &SubmittedFile) -> bool {
    file.path_contains("utils") || file.path_contains("helpers")
}

fn has_utility_code(files: &[SubmittedFile]) -> bool {
    files
        .iter()
        .any(|file| is_utility_path(file) || file.path_contains("lib"))
}

fn is_hook_path(file: &SubmittedFile) -> bool {
    file.path_contains("hooks") || file.path_contains("use")
}

fn uses_hook_api(file: &SubmittedFile) -> bool {
    file.content_contains("useState") || file.content_contains("useEffect")
}

fn has_hooks(files: &[SubmittedFile]) -> bool {
    files
        .iter()
        .any(|file| is_hook_path(file) || uses_hook_api(file))
}

fn has_e2e_scale(files: &[SubmittedFile]) -> bool {
    files.len() > E2E_MIN_EXCLUSIVE
}

fn has_performance_scale(files: &[SubmittedFile]) -> bool {
    files.len() > PERFORMANCE_MIN_EXCLUSIVE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(summaries: &[TestPlanSummary]) -> Vec<SummaryKind> {
        summaries.iter().map(|s| s.id).collect()
    }

    #[test]
    fn empty_batch_is_rejected() {
        let err = classify_summaries(&[]).unwrap_err();
        assert!(matches!(err, TestGenError::InvalidInput(_)));
    }

    #[test]
    fn unmatched_single_file_yields_no_summaries() {
        let files = [SubmittedFile::new("README.md", "# Title")];
        assert!(classify_summaries(&files).unwrap().is_empty());
    }

    #[test]
    fn react_content_without_component_extension_scopes_nothing() {
        let files = [SubmittedFile::new("src/main.ts", "import React from 'react';")];
        let summaries = classify_summaries(&files).unwrap();
        assert_eq!(
            ids(&summaries),
            vec![SummaryKind::ReactComponents, SummaryKind::ComponentIntegration]
        );
        assert!(summaries[0].files.is_empty());
        assert_eq!(summaries[1].files, vec!["src/main.ts".to_string()]);
    }

    #[test]
    fn component_extension_must_be_a_suffix() {
        let files = [SubmittedFile::path_only("docs/notes.tsx.md")];
        assert!(classify_summaries(&files).unwrap().is_empty());
    }

    #[test]
    fn lib_triggers_utility_tests_but_is_not_scoped() {
        let files = [SubmittedFile::path_only("src/lib/format.ts")];
        let summaries = classify_summaries(&files).unwrap();
        assert_eq!(ids(&summaries), vec![SummaryKind::UtilityTests]);
        assert!(summaries[0].files.is_empty());
    }

    #[test]
    fn api_content_triggers_but_path_decides_scope() {
        let files = [
            SubmittedFile::new("src/data.ts", "await fetch('/x')"),
            SubmittedFile::path_only("src/api/client.ts"),
        ];
        let summaries = classify_summaries(&files).unwrap();
        let api = summaries
            .iter()
            .find(|s| s.id == SummaryKind::ApiTests)
            .unwrap();
        assert_eq!(api.files, vec!["src/api/client.ts".to_string()]);
    }

    #[test]
    fn predicates_are_case_sensitive() {
        let files = [SubmittedFile::new("src/API/Hooks.TS", "REACT Fetch USESTATE")];
        assert!(classify_summaries(&files).unwrap().is_empty());
    }

    #[test]
    fn catalog_order_matches_summary_kind_order() {
        let kinds: Vec<_> = CATALOG.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, SummaryKind::ALL.to_vec());
    }
}
