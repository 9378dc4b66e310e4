//! Test plan and test code endpoints.
//!
//! Both handlers wait out the configured simulated latency, then call the
//! recording entry points of `testgen-core`. Neither holds state between
//! requests.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use testgen_core::{generate_tests, summarize_files, CodeArtifact, SubmittedFile, TestPlanSummary};

use crate::error::{ApiError, Result};
use crate::AppState;

pub const FILES_REQUIRED: &str = "Files array is required";
pub const SUMMARY_AND_FILES_REQUIRED: &str = "Summary ID and files are required";

#[derive(Debug, Deserialize)]
pub struct GenerateSummariesRequest {
    pub files: Option<Vec<SubmittedFile>>,
}

#[derive(Debug, Serialize)]
pub struct GenerateSummariesResponse {
    pub summaries: Vec<TestPlanSummary>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCodeRequest {
    pub summary_id: Option<String>,
    pub files: Option<Vec<SubmittedFile>>,
}

/// `POST /api/ai/generate-summaries`
pub async fn generate_summaries(
    State(state): State<AppState>,
    payload: std::result::Result<Json<GenerateSummariesRequest>, JsonRejection>,
) -> Result<Json<GenerateSummariesResponse>> {
    let Json(request) = payload.map_err(|r| ApiError::from_rejection(r, FILES_REQUIRED))?;
    let files = request
        .files
        .filter(|files| !files.is_empty())
        .ok_or_else(|| ApiError::bad_request(FILES_REQUIRED))?;

    state.simulate_latency().await;

    let summaries = summarize_files(&files)?;
    Ok(Json(GenerateSummariesResponse { summaries }))
}

/// `POST /api/ai/generate-code`
pub async fn generate_code(
    State(state): State<AppState>,
    payload: std::result::Result<Json<GenerateCodeRequest>, JsonRejection>,
) -> Result<Json<CodeArtifact>> {
    let Json(request) =
        payload.map_err(|r| ApiError::from_rejection(r, SUMMARY_AND_FILES_REQUIRED))?;
    let (summary_id, files) = match (request.summary_id, request.files) {
        (Some(id), Some(files)) if !id.is_empty() => (id, files),
        _ => return Err(ApiError::bad_request(SUMMARY_AND_FILES_REQUIRED)),
    };

    state.simulate_latency().await;

    let artifact = generate_tests(&summary_id, &files)?;
    Ok(Json(artifact))
}
