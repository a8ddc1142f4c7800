use tracing::info;

use crate::analysis::errors::UserFacingError;
use crate::completion::{
    invoke, CompletionService, Operation, RewriteSectionInput, RewriteSectionOutput,
};

/// Rewrites one resume fragment. `context` is a free-text tone hint such as
/// "Job at Acme as a Platform Engineer". The fragment is not checked for
/// emptiness; callers send already non-empty text. Stateless: concurrent
/// rewrites of different fragments share nothing.
pub async fn rewrite_section(
    service: &dyn CompletionService,
    text: &str,
    context: Option<&str>,
) -> Result<String, UserFacingError> {
    info!(
        text_len = text.len(),
        has_context = context.is_some(),
        "Rewriting resume section"
    );

    let input = RewriteSectionInput {
        text: text.to_string(),
        context: context.map(str::to_string),
    };

    let output: RewriteSectionOutput = invoke(service, Operation::RewriteResumeSection, &input)
        .await
        .map_err(|e| UserFacingError::upstream(e, "Failed to rewrite section."))?;

    Ok(output.rewritten_text)
}
