pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::projection::handlers as editor;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.body_limit_bytes();

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .route(
            "/api/v1/analyze/upload",
            post(analysis::handle_analyze_upload),
        )
        .route("/api/v1/skills-gap", post(analysis::handle_skills_gap))
        .route("/api/v1/upscale", post(analysis::handle_upscale))
        .route("/api/v1/rewrite", post(analysis::handle_rewrite))
        .route("/api/v1/cover-letter", post(analysis::handle_cover_letter))
        // Editor API
        .route("/api/v1/editor", get(editor::handle_open_editor))
        .route(
            "/api/v1/editor/document",
            post(editor::handle_editable_document),
        )
        .route("/api/v1/editor/share", post(editor::handle_share))
        .route("/api/v1/editor/sample", get(editor::handle_sample))
        .route("/api/v1/resume-text", post(editor::handle_resume_text))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
