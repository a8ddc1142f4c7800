//! Axum route handlers for the analysis, comparison and rewrite API.
//!
//! Upload rules (PDF only, size ceiling) are enforced here, at the edge,
//! before the orchestrator sees the document.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::analyze_resume;
use crate::analysis::cover_letter::generate_cover_letter;
use crate::analysis::rewrite::rewrite_section;
use crate::analysis::skills_gap::{analyze_skills_gap, upscale_resume_for_ats};
use crate::completion::document::{to_data_uri, DocumentPayload, PDF_MIME};
use crate::completion::CoverLetterInput;
use crate::errors::AppError;
use crate::models::resume::{ResumeAnalysis, SkillsGapResult, UpscaleResult};
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// `data:application/pdf;base64,<payload>`
    pub resume_data_uri: String,
}

#[derive(Debug, Deserialize)]
pub struct JobComparisonRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct RewriteRequest {
    pub text: String,
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RewriteResponse {
    pub rewritten_text: String,
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    pub resume_text: String,
    pub job_description: String,
    pub user_name: String,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let document = DocumentPayload::parse(&request.resume_data_uri)
        .map_err(|e| AppError::Validation(e.to_string()))?;
    check_upload(&document.media_type, document.byte_len, state.config.max_upload_bytes)?;

    let analysis = analyze_resume(state.completion.as_ref(), &request.resume_data_uri).await?;
    Ok(Json(analysis))
}

/// POST /api/v1/analyze/upload
///
/// Multipart variant: the `file` field is wrapped into a data URI here.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let media_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read the file: {e}")))?;
        check_upload(&media_type, bytes.len(), state.config.max_upload_bytes)?;

        let data_uri = to_data_uri(&media_type, &bytes);
        let analysis = analyze_resume(state.completion.as_ref(), &data_uri).await?;
        return Ok(Json(analysis));
    }

    Err(AppError::Validation(format!(
        "Missing '{UPLOAD_FIELD}' field in upload"
    )))
}

/// POST /api/v1/skills-gap
pub async fn handle_skills_gap(
    State(state): State<AppState>,
    Json(request): Json<JobComparisonRequest>,
) -> Result<Json<SkillsGapResult>, AppError> {
    let result = analyze_skills_gap(
        state.completion.as_ref(),
        &request.resume_text,
        &request.job_description,
    )
    .await?;
    Ok(Json(result))
}

/// POST /api/v1/upscale
pub async fn handle_upscale(
    State(state): State<AppState>,
    Json(request): Json<JobComparisonRequest>,
) -> Result<Json<UpscaleResult>, AppError> {
    let result = upscale_resume_for_ats(
        state.completion.as_ref(),
        &request.resume_text,
        &request.job_description,
    )
    .await?;
    Ok(Json(result))
}

/// POST /api/v1/rewrite
pub async fn handle_rewrite(
    State(state): State<AppState>,
    Json(request): Json<RewriteRequest>,
) -> Result<Json<RewriteResponse>, AppError> {
    let rewritten_text = rewrite_section(
        state.completion.as_ref(),
        &request.text,
        request.context.as_deref(),
    )
    .await?;
    Ok(Json(RewriteResponse { rewritten_text }))
}

/// POST /api/v1/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let input = CoverLetterInput {
        resume_text: request.resume_text,
        job_description: request.job_description,
        user_name: request.user_name,
    };
    let cover_letter = generate_cover_letter(state.completion.as_ref(), input).await?;
    Ok(Json(CoverLetterResponse { cover_letter }))
}

/// Only PDFs up to the configured size are accepted.
fn check_upload(media_type: &str, byte_len: usize, max_bytes: usize) -> Result<(), AppError> {
    if media_type != PDF_MIME {
        return Err(AppError::Validation("Please upload a PDF file.".to_string()));
    }
    if byte_len > max_bytes {
        return Err(AppError::Validation(format!(
            "File size must be less than {}MB.",
            max_bytes / (1024 * 1024)
        )));
    }
    Ok(())
}
