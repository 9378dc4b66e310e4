//! Structured observability hooks for TestGen requests.
//!
//! This module provides:
//! - Request-scoped tracing spans via `RequestSpan` RAII guard
//! - Emission functions for key events: classification, template selection,
//!   and collaborator fallbacks
//!
//! Events are emitted at `info!` level (filter with `RUST_LOG`).

use tracing::info;

/// RAII guard that enters a request-scoped span for the duration of a call.
///
/// # Example
///
/// ```ignore
/// let _span = RequestSpan::enter("generate-summaries");
/// // tracing calls below carry operation = "generate-summaries"
/// ```
pub struct RequestSpan {
    _span: tracing::span::EnteredSpan,
}

impl RequestSpan {
    pub fn enter(operation: &str) -> Self {
        let span = tracing::info_span!("testgen.request", operation = %operation);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: a file batch was classified.
pub fn emit_summaries_classified(file_count: usize, summary_ids: &[&str]) {
    info!(
        event = "summaries.classified",
        file_count = file_count,
        summary_count = summary_ids.len(),
        summary_ids = %summary_ids.join(","),
    );
}

/// Emit event: a template was selected for a summary id.
///
/// `known` is false when the id fell through to the generic template.
pub fn emit_template_selected(summary_id: &str, known: bool, framework: &str) {
    info!(
        event = "template.selected",
        summary_id = %summary_id,
        known = known,
        framework = %framework,
    );
}

/// Emit event: a collaborator answered from fixture data (warning level).
pub fn emit_source_fallback(operation: &str, reason: &dyn std::fmt::Display) {
    tracing::warn!(event = "source.fallback", operation = %operation, reason = %reason);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_span_create() {
        let _span = RequestSpan::enter("test-operation");
    }
}
