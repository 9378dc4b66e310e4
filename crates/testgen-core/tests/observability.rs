//! Observability tests for TestGen request tracing.
//!
//! These tests verify that structured tracing events are emitted for
//! classification, template selection, and collaborator fallbacks.

use testgen_core::{
    emit_source_fallback, emit_summaries_classified, emit_template_selected, generate_tests,
    summarize_files, RequestSpan, SubmittedFile, METRICS,
};
use tracing_test::traced_test;

#[traced_test]
#[test]
fn test_emit_summaries_classified_logs_ids() {
    emit_summaries_classified(3, &["react-components", "component-integration"]);

    assert!(logs_contain("summaries.classified"));
    assert!(logs_contain("react-components,component-integration"));
}

#[traced_test]
#[test]
fn test_emit_template_selected_logs_known_flag() {
    emit_template_selected("totally-unknown-id", false, "Jest");

    assert!(logs_contain("template.selected"));
    assert!(logs_contain("known=false"));
}

#[traced_test]
#[test]
fn test_emit_source_fallback_logs_warning() {
    let reason = "connection refused";
    emit_source_fallback("list_repositories", &reason);

    assert!(logs_contain("source.fallback"));
    assert!(logs_contain("connection refused"));
}

#[traced_test]
#[test]
fn test_request_span_enter_creates_span() {
    let span = RequestSpan::enter("generate-code");
    emit_template_selected("e2e-tests", true, "Playwright");
    drop(span);

    assert!(logs_contain("generate-code"));
}

#[traced_test]
#[test]
fn test_summarize_files_records_event_and_counter() {
    let before = METRICS.classifications();
    let files = vec![SubmittedFile::new(
        "src/hooks/useAuth.ts",
        "export function useAuth(){ useState(); }",
    )];

    let summaries = summarize_files(&files).unwrap();

    assert_eq!(summaries[0].id.as_str(), "hooks-tests");
    assert!(METRICS.classifications() > before);
    assert!(logs_contain("summaries.classified"));
    assert!(logs_contain("generate-summaries"));
}

#[traced_test]
#[test]
fn test_generate_tests_counts_unknown_id_as_generic() {
    let before = METRICS.generic_selections();

    let artifact = generate_tests("load-tests", &[]).unwrap();

    assert_eq!(artifact.framework, "Jest");
    assert!(METRICS.generic_selections() > before);
    assert!(logs_contain("unknown summary id"));
    assert!(logs_contain("known=false"));
}
