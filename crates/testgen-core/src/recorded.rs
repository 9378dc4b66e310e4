//! Classification and selection with the usual span, events and counters.
//!
//! Front ends call these instead of `classify_summaries`/`select_template`
//! directly so every caller records the same observability trail.

use tracing::warn;

use crate::domain::{CodeArtifact, Result, SubmittedFile, SummaryKind, TestPlanSummary};
use crate::metrics::METRICS;
use crate::obs::{emit_summaries_classified, emit_template_selected, RequestSpan};
use crate::{classify_summaries, select_template};

/// Classify `files`, emitting `summaries.classified` and counting the call.
pub fn summarize_files(files: &[SubmittedFile]) -> Result<Vec<TestPlanSummary>> {
    let _span = RequestSpan::enter("generate-summaries");
    let summaries = classify_summaries(files)?;

    let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
    emit_summaries_classified(files.len(), &ids);
    METRICS.inc_classifications();
    Ok(summaries)
}

/// Select the template for `summary_id`, emitting `template.selected`.
///
/// Unknown ids still produce the generic artifact; they are logged at warn
/// level and counted as generic selections.
pub fn generate_tests(summary_id: &str, files: &[SubmittedFile]) -> Result<CodeArtifact> {
    let _span = RequestSpan::enter("generate-code");
    let artifact = select_template(summary_id, files)?;

    let known = SummaryKind::from_id(summary_id).is_some();
    if !known {
        warn!(summary_id = %summary_id, "unknown summary id, using generic template");
    }
    emit_template_selected(summary_id, known, &artifact.framework);
    METRICS.inc_template_selections(!known);
    Ok(artifact)
}
