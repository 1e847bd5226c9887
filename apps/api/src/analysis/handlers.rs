//! Axum route handlers for the Analysis API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::models::AnalysisReport;
use crate::analysis::AnalysisInput;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Custom keywords as a JSON list or as one comma-delimited string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CustomKeywords {
    List(Vec<String>),
    Delimited(String),
}

impl Default for CustomKeywords {
    fn default() -> Self {
        CustomKeywords::List(Vec::new())
    }
}

impl CustomKeywords {
    /// Splits, trims and drops empty entries.
    pub fn into_list(self) -> Vec<String> {
        let raw = match self {
            CustomKeywords::List(list) => list,
            CustomKeywords::Delimited(joined) => {
                joined.split(',').map(str::to_string).collect()
            }
        };
        raw.into_iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub custom_keywords: Option<CustomKeywords>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub custom_keywords: Option<CustomKeywords>,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores already-decoded résumé text against a job description and returns
/// the full ATS report.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    let Json(request) = payload?;

    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Please provide resume text".to_string(),
        ));
    }
    check_length("resume_text", &request.resume_text, state.config.max_input_chars)?;
    check_length(
        "job_description",
        &request.job_description,
        state.config.max_input_chars,
    )?;

    let custom_keywords = request.custom_keywords.unwrap_or_default().into_list();
    let report = state.analyzer.analyze(AnalysisInput {
        resume_text: &request.resume_text,
        job_description: &request.job_description,
        custom_keywords: &custom_keywords,
    });

    Ok(Json(report))
}

/// POST /api/v1/keywords
///
/// Returns the ranked keyword list for a job description without scoring a résumé.
pub async fn handle_keywords(
    State(state): State<AppState>,
    payload: Result<Json<KeywordsRequest>, JsonRejection>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let Json(request) = payload?;

    check_length(
        "job_description",
        &request.job_description,
        state.config.max_input_chars,
    )?;

    let custom_keywords = request.custom_keywords.unwrap_or_default().into_list();
    let keywords = state
        .analyzer
        .extract_keywords(&request.job_description, &custom_keywords);

    Ok(Json(KeywordsResponse { keywords }))
}

fn check_length(field: &str, value: &str, max_chars: usize) -> Result<(), AppError> {
    // Byte length bounds char count from above; only count chars when it might matter.
    if value.len() > max_chars && value.chars().count() > max_chars {
        return Err(AppError::PayloadTooLarge(format!(
            "{field} exceeds {max_chars} characters"
        )));
    }
    Ok(())
}
