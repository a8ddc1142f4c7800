use std::sync::Arc;

use crate::completion::CompletionService;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data: every orchestrator call is independent.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `ClaudeCompletionService` in production.
    pub completion: Arc<dyn CompletionService>,
    pub config: Config,
}
