use tracing::info;

use crate::analysis::errors::UserFacingError;
use crate::analysis::skills_gap::EMPTY_JOB_DESCRIPTION_MESSAGE;
use crate::completion::{
    invoke, CompletionService, CoverLetterInput, CoverLetterOutput, Operation,
};

pub const EMPTY_RESUME_MESSAGE: &str = "Resume content cannot be empty.";
pub const EMPTY_NAME_MESSAGE: &str = "Applicant name cannot be empty.";

/// Writes a Markdown cover letter for one application. All three inputs
/// must be non-blank; they are checked in order before any service call.
pub async fn generate_cover_letter(
    service: &dyn CompletionService,
    input: CoverLetterInput,
) -> Result<String, UserFacingError> {
    if input.resume_text.trim().is_empty() {
        return Err(UserFacingError::validation(EMPTY_RESUME_MESSAGE));
    }
    if input.job_description.trim().is_empty() {
        return Err(UserFacingError::validation(EMPTY_JOB_DESCRIPTION_MESSAGE));
    }
    if input.user_name.trim().is_empty() {
        return Err(UserFacingError::validation(EMPTY_NAME_MESSAGE));
    }

    info!(
        resume_len = input.resume_text.len(),
        jd_len = input.job_description.len(),
        "Generating cover letter"
    );

    let output: CoverLetterOutput = invoke(service, Operation::GenerateCoverLetter, &input)
        .await
        .map_err(|e| UserFacingError::upstream(e, "Failed to generate cover letter."))?;

    Ok(output.cover_letter)
}
