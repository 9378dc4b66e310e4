//! Canned test code selection.
//!
//! A summary id picks one fixed template body. The React component body is
//! the only one with placeholders; it receives a component name guessed
//! from the submitted paths. Unknown ids get the generic body and never
//! fail.

use crate::domain::{CodeArtifact, Result, SubmittedFile, SummaryKind, TestGenError};

/// Framework reported for ids outside the catalog.
pub const DEFAULT_FRAMEWORK: &str = "Jest";
/// Component name used when no submitted path looks like a component.
pub const FALLBACK_COMPONENT_NAME: &str = "Component";

const COMPONENT_NAME_SLOT: &str = "{{component_name}}";
const COMPONENT_PATH_SLOT: &str = "{{component_path}}";

const REACT_COMPONENTS: &str = include_str!("../templates/react_components.tsx.tmpl");
const COMPONENT_INTEGRATION: &str = include_str!("../templates/component_integration.tsx.tmpl");
const API_TESTS: &str = include_str!("../templates/api_tests.tsx.tmpl");
const UTILITY_TESTS: &str = include_str!("../templates/utility_tests.tsx.tmpl");
const HOOKS_TESTS: &str = include_str!("../templates/hooks_tests.tsx.tmpl");
const E2E_TESTS: &str = include_str!("../templates/e2e_tests.tsx.tmpl");
const PERFORMANCE_TESTS: &str = include_str!("../templates/performance_tests.tsx.tmpl");
const GENERIC: &str = include_str!("../templates/generic.tsx.tmpl");

/// How a template body is turned into code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Body {
    Literal(&'static str),
    /// Needs the derived component name and path substituted in.
    Component(&'static str),
}

/// Template table entry for a catalog id.
#[derive(Debug, Clone, Copy)]
struct TemplateEntry {
    body: Body,
    framework: &'static str,
}

fn template_for(kind: SummaryKind) -> TemplateEntry {
    let (body, framework) = match kind {
        SummaryKind::ReactComponents => (
            Body::Component(REACT_COMPONENTS),
            "Jest + React Testing Library",
        ),
        SummaryKind::ComponentIntegration => (
            Body::Literal(COMPONENT_INTEGRATION),
            "Jest + React Testing Library",
        ),
        SummaryKind::ApiTests => (Body::Literal(API_TESTS), "Jest + MSW"),
        SummaryKind::UtilityTests => (Body::Literal(UTILITY_TESTS), "Jest"),
        SummaryKind::HooksTests => (
            Body::Literal(HOOKS_TESTS),
            "Jest + @testing-library/react-hooks",
        ),
        SummaryKind::E2eTests => (Body::Literal(E2E_TESTS), "Playwright"),
        SummaryKind::PerformanceTests => (
            Body::Literal(PERFORMANCE_TESTS),
            "Jest + React Testing Library",
        ),
    };
    TemplateEntry { body, framework }
}

/// The component a React template is written against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentTarget {
    pub name: String,
    /// Full path of the chosen file, or the fallback name.
    pub import_path: String,
}

/// Pick the first file that looks like a component and derive its name.
///
/// The name is the final path segment with `.tsx` removed. This is string
/// surgery only; the file body is never parsed.
pub fn derive_component_target(files: &[SubmittedFile]) -> ComponentTarget {
    let candidate = files
        .iter()
        .find(|file| file.path.contains("UserProfile") || file.path.ends_with(".tsx"));

    match candidate {
        Some(file) => {
            let segment = file.path.rsplit('/').next().unwrap_or(&file.path);
            let name = segment.replacen(".tsx", "", 1);
            let name = if name.is_empty() {
                FALLBACK_COMPONENT_NAME.to_string()
            } else {
                name
            };
            ComponentTarget {
                name,
                import_path: file.path.clone(),
            }
        }
        None => ComponentTarget {
            name: FALLBACK_COMPONENT_NAME.to_string(),
            import_path: FALLBACK_COMPONENT_NAME.to_string(),
        },
    }
}

/// `<id without dashes>.test.tsx`, for known and unknown ids alike.
pub fn filename_for(summary_id: &str) -> String {
    format!("{}.test.tsx", summary_id.replace('-', ""))
}

/// Framework label for a summary id, defaulting to Jest.
pub fn framework_for(summary_id: &str) -> &'static str {
    SummaryKind::from_id(summary_id)
        .map(|kind| template_for(kind).framework)
        .unwrap_or(DEFAULT_FRAMEWORK)
}

/// Produce the test code for a previously proposed summary.
///
/// An empty id is a usage error. Any other id outside the catalog gets the
/// generic template.
pub fn select_template(summary_id: &str, files: &[SubmittedFile]) -> Result<CodeArtifact> {
    if summary_id.is_empty() {
        return Err(TestGenError::invalid_input("summary id is required"));
    }

    let kind = SummaryKind::from_id(summary_id);
    let (code, framework) = match kind.map(template_for) {
        Some(entry) => (render(entry.body, files), entry.framework),
        None => (GENERIC.to_string(), DEFAULT_FRAMEWORK),
    };

    tracing::debug!(
        summary_id = %summary_id,
        known = kind.is_some(),
        files = files.len(),
        "selected template"
    );

    Ok(CodeArtifact {
        code,
        framework: framework.to_string(),
        filename: filename_for(summary_id),
    })
}

fn render(body: Body, files: &[SubmittedFile]) -> String {
    match body {
        Body::Literal(text) => text.to_string(),
        Body::Component(text) => {
            let target = derive_component_target(files);
            text.replace(COMPONENT_PATH_SLOT, &target.import_path)
                .replace(COMPONENT_NAME_SLOT, &target.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_name_strips_directory_and_extension() {
        let files = [
            SubmittedFile::path_only("src/utils/api.ts"),
            SubmittedFile::path_only("src/components/Button.tsx"),
        ];
        let target = derive_component_target(&files);
        assert_eq!(target.name, "Button");
        assert_eq!(target.import_path, "src/components/Button.tsx");
    }

    #[test]
    fn user_profile_match_does_not_need_tsx() {
        let files = [SubmittedFile::path_only("src/UserProfile.jsx")];
        let target = derive_component_target(&files);
        assert_eq!(target.name, "UserProfile.jsx");
    }

    #[test]
    fn component_name_falls_back_without_candidates() {
        let files = [SubmittedFile::path_only("src/utils/api.ts")];
        let target = derive_component_target(&files);
        assert_eq!(target.name, FALLBACK_COMPONENT_NAME);
        assert_eq!(target.import_path, FALLBACK_COMPONENT_NAME);
    }

    #[test]
    fn react_template_has_no_unfilled_slots() {
        let files = [SubmittedFile::path_only("src/components/Modal.tsx")];
        let artifact = select_template("react-components", &files).unwrap();
        assert!(!artifact.code.contains("{{"));
        assert!(artifact
            .code
            .contains("import { Modal } from '../src/components/Modal.tsx';"));
        assert!(artifact.code.contains("describe('Modal'"));
    }

    #[test]
    fn literal_templates_are_returned_verbatim() {
        let artifact = select_template("performance-tests", &[]).unwrap();
        assert_eq!(artifact.code, PERFORMANCE_TESTS);
        assert!(artifact.code.contains("user={{ id: 1"));
    }

    #[test]
    fn filename_drops_every_dash() {
        assert_eq!(filename_for("component-integration"), "componentintegration.test.tsx");
        assert_eq!(filename_for("a-b-c"), "abc.test.tsx");
    }

    #[test]
    fn empty_id_is_rejected() {
        let err = select_template("", &[]).unwrap_err();
        assert!(matches!(err, TestGenError::InvalidInput(_)));
    }

    #[test]
    fn framework_table_differs_from_summary_table() {
        assert_eq!(framework_for("api-tests"), "Jest + MSW");
        assert_eq!(framework_for("performance-tests"), "Jest + React Testing Library");
        assert_eq!(framework_for("whatever"), DEFAULT_FRAMEWORK);
    }
}
