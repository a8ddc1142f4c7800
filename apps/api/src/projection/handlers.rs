//! Axum route handlers for the editor: projection, share links, demo data.

use anyhow::Context;
use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::document::EditableDocument;
use crate::models::resume::ExtractedResume;
use crate::projection::sample::sample_document;
use crate::projection::share::{decode_share_link, encode_share_link, ShareLink, SharePayload};
use crate::projection::{to_canonical_text, to_editable_document};

#[derive(Debug, Deserialize)]
pub struct ShareQuery {
    pub data: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResumeTextResponse {
    pub resume_text: String,
}

/// POST /api/v1/editor/document
///
/// Body has the share-blob shape `{extracted_data?, summary?}`.
pub async fn handle_editable_document(Json(payload): Json<SharePayload>) -> Json<EditableDocument> {
    Json(to_editable_document(
        payload.extracted_data.as_ref(),
        payload.summary.as_deref(),
    ))
}

/// GET /api/v1/editor?data=<json>
///
/// Never fails: a missing, unparseable or malformed `data` yields the sample.
pub async fn handle_open_editor(query: Option<Query<ShareQuery>>) -> Json<EditableDocument> {
    let data = query.and_then(|Query(q)| q.data);
    Json(decode_share_link(data.as_deref()))
}

/// POST /api/v1/editor/share
pub async fn handle_share(Json(doc): Json<EditableDocument>) -> Result<Json<ShareLink>, AppError> {
    let link = encode_share_link(&doc).context("Failed to serialize share payload")?;
    Ok(Json(link))
}

/// GET /api/v1/editor/sample
pub async fn handle_sample() -> Json<EditableDocument> {
    Json(sample_document())
}

/// POST /api/v1/resume-text
pub async fn handle_resume_text(Json(extracted): Json<ExtractedResume>) -> Json<ResumeTextResponse> {
    Json(ResumeTextResponse {
        resume_text: to_canonical_text(&extracted),
    })
}
