//! TestGen Core Library
//!
//! Deterministic test plan classification and canned test code selection.
//! Both entry points are pure: they take the submitted files as explicit
//! input and hold nothing between calls.
//!
//! ```
//! use testgen_core::{classify_summaries, select_template, SubmittedFile};
//!
//! let files = vec![SubmittedFile::new(
//!     "src/hooks/useAuth.ts",
//!     "export function useAuth(){ useState(); }",
//! )];
//! let summaries = classify_summaries(&files).unwrap();
//! assert_eq!(summaries[0].id.as_str(), "hooks-tests");
//!
//! let artifact = select_template(summaries[0].id.as_str(), &files).unwrap();
//! assert_eq!(artifact.filename, "hookstests.test.tsx");
//! ```

pub mod classifier;
pub mod domain;
pub mod frameworks;
pub mod language;
pub mod metrics;
pub mod obs;
pub mod recorded;
pub mod selector;
pub mod telemetry;

pub use classifier::{classify_summaries, Category, Scope, CATALOG};
pub use domain::{
    CodeArtifact, Complexity, Result, SubmittedFile, SummaryKind, SummaryProfile, TestGenError,
    TestPlanSummary,
};
pub use frameworks::{find_framework, frameworks_for_language, TestFramework, SUPPORTED_FRAMEWORKS};
pub use language::language_from_path;
pub use metrics::METRICS;
pub use obs::{emit_source_fallback, emit_summaries_classified, emit_template_selected, RequestSpan};
pub use recorded::{generate_tests, summarize_files};
pub use selector::{
    derive_component_target, filename_for, framework_for, select_template, ComponentTarget,
    DEFAULT_FRAMEWORK,
};
pub use telemetry::init_tracing;

/// TestGen version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
