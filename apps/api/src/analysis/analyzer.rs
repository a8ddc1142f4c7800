//! Resume analysis: one upload in, one aggregated analysis (or one error) out.
//!
//! Flow: extract-resume-data → canonical text →
//!       { generate-concise-summary, rate-resume-clarity, suggest-resume-improvements }
//!       dispatched concurrently → aggregate.
//!
//! The three follow-up calls are independent and all of them are awaited
//! before any failure is reported, so the error names the operation that
//! actually failed. The result is all-or-nothing.

use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::analysis::errors::{ErrorKind, UserFacingError};
use crate::completion::{
    invoke, CompletionError, CompletionService, ConciseSummaryInput, ConciseSummaryOutput,
    ExtractResumeDataInput, Operation, ResumeTextInput, SuggestionsOutput,
};
use crate::models::resume::{ClarityReport, ExtractedResume, ResumeAnalysis};
use crate::projection::to_canonical_text;

pub const NOTHING_EXTRACTED_MESSAGE: &str = "Could not extract any data from the resume. \
    The document might be empty, corrupted, or in an unsupported format.";
pub const EMPTY_EXTRACTION_MESSAGE: &str =
    "Extracted data was empty, cannot proceed with analysis.";
const UNKNOWN_FAILURE_MESSAGE: &str = "An unknown error occurred while analyzing the resume.";

/// Runs a full analysis of one uploaded document (`data:<mime>;base64,<payload>`).
///
/// Every failure is passed through the rate-limit / unavailable remapping
/// before being returned.
pub async fn analyze_resume(
    service: &dyn CompletionService,
    resume_data_uri: &str,
) -> Result<ResumeAnalysis, UserFacingError> {
    let run_id = Uuid::new_v4();
    info!(%run_id, payload_len = resume_data_uri.len(), "Starting resume analysis");

    match run_analysis(service, resume_data_uri, run_id).await {
        Ok(analysis) => {
            info!(
                %run_id,
                clarity_score = analysis.clarity.clarity_score,
                suggestions = analysis.suggestions.len(),
                "Resume analysis complete"
            );
            Ok(analysis)
        }
        Err(e) => {
            error!(%run_id, kind = ?e.kind, "Resume analysis failed: {}", e.message);
            Err(e.remap())
        }
    }
}

async fn run_analysis(
    service: &dyn CompletionService,
    resume_data_uri: &str,
    run_id: Uuid,
) -> Result<ResumeAnalysis, UserFacingError> {
    // Step 1: extraction
    let extracted = extract(service, resume_data_uri).await?;

    // Step 2: canonical text
    let resume_text = to_canonical_text(&extracted);
    if resume_text.is_empty() {
        return Err(UserFacingError::new(
            ErrorKind::UpstreamEmpty,
            EMPTY_EXTRACTION_MESSAGE,
        ));
    }
    info!(%run_id, text_len = resume_text.len(), "Canonical resume text built");

    // Step 3: independent follow-ups, all awaited
    let summary_input = summary_input(&extracted).map_err(upstream)?;
    let text_input = ResumeTextInput { resume_text };

    let (summary, clarity, suggestions) = tokio::join!(
        invoke::<_, ConciseSummaryOutput>(service, Operation::GenerateConciseSummary, &summary_input),
        invoke::<_, ClarityReport>(service, Operation::RateResumeClarity, &text_input),
        invoke::<_, SuggestionsOutput>(service, Operation::SuggestResumeImprovements, &text_input),
    );

    let outcomes = [
        (Operation::GenerateConciseSummary, summary.as_ref().err()),
        (Operation::RateResumeClarity, clarity.as_ref().err()),
        (Operation::SuggestResumeImprovements, suggestions.as_ref().err()),
    ];
    for (operation, failure) in outcomes {
        if let Some(e) = failure {
            warn!(%run_id, operation = %operation, "Analysis sub-operation failed: {e}");
        }
    }

    // Step 4: attribute to the first failure in fixed order
    let summary = summary.map_err(|e| aggregate_failure("Failed to generate summary", e))?;
    let clarity = clarity.map_err(|e| aggregate_failure("Failed to rate resume clarity", e))?;
    let suggestions =
        suggestions.map_err(|e| aggregate_failure("Failed to suggest improvements", e))?;

    // Step 5: assemble
    Ok(ResumeAnalysis {
        extracted_data: extracted,
        summary: summary.summary,
        clarity: with_recomputed_score(clarity),
        suggestions: suggestions.suggestions,
    })
}

async fn extract(
    service: &dyn CompletionService,
    resume_data_uri: &str,
) -> Result<ExtractedResume, UserFacingError> {
    let input = ExtractResumeDataInput {
        resume_data_uri: resume_data_uri.to_string(),
    };
    let input = serde_json::to_value(&input).map_err(|e| {
        upstream(CompletionError::InvalidInput {
            operation: Operation::ExtractResumeData,
            message: e.to_string(),
        })
    })?;

    let raw = service
        .complete(Operation::ExtractResumeData, input)
        .await
        .map_err(upstream)?;

    if is_empty_output(&raw) {
        return Err(UserFacingError::new(
            ErrorKind::UpstreamEmpty,
            NOTHING_EXTRACTED_MESSAGE,
        ));
    }

    serde_json::from_value(raw).map_err(|source| {
        upstream(CompletionError::InvalidOutput {
            operation: Operation::ExtractResumeData,
            source,
        })
    })
}

/// Absent or key-less output counts as "nothing extracted".
fn is_empty_output(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// The summary operation takes structured sub-fields, JSON-serialized,
/// rather than the canonical text.
fn summary_input(extracted: &ExtractedResume) -> Result<ConciseSummaryInput, CompletionError> {
    let to_json = |value: Result<String, serde_json::Error>| {
        value.map_err(|e| CompletionError::InvalidInput {
            operation: Operation::GenerateConciseSummary,
            message: e.to_string(),
        })
    };

    Ok(ConciseSummaryInput {
        personal_details: to_json(serde_json::to_string(&extracted.personal_details))?,
        skills: extracted.skills.join(", "),
        experience: to_json(serde_json::to_string(&extracted.work_experience))?,
        education: to_json(serde_json::to_string(&extracted.education))?,
        projects: to_json(serde_json::to_string(&extracted.projects))?,
    })
}

/// Mean of the three sub-scores rounded half-up to one decimal place.
pub fn overall_clarity_score(a: f64, b: f64, c: f64) -> f64 {
    let mean = (a + b + c) / 3.0;
    (mean * 10.0).round() / 10.0
}

/// Replaces the model's own overall score with the locally derived one.
fn with_recomputed_score(mut report: ClarityReport) -> ClarityReport {
    let subs = [
        ("clarity_and_readability", report.clarity_and_readability.score),
        ("impact_and_achievements", report.impact_and_achievements.score),
        ("structure_and_formatting", report.structure_and_formatting.score),
    ];
    for (name, score) in subs {
        if !(1.0..=10.0).contains(&score) {
            warn!(sub_score = name, score, "Clarity sub-score outside 1-10");
        }
    }

    report.clarity_score = overall_clarity_score(
        report.clarity_and_readability.score,
        report.impact_and_achievements.score,
        report.structure_and_formatting.score,
    );
    report
}

fn upstream(err: CompletionError) -> UserFacingError {
    UserFacingError::upstream(err, UNKNOWN_FAILURE_MESSAGE)
}

fn aggregate_failure(prefix: &str, err: CompletionError) -> UserFacingError {
    let reason = err.to_string();
    let reason = if reason.trim().is_empty() {
        "Unknown"
    } else {
        reason.as_str()
    };
    UserFacingError::new(
        ErrorKind::AggregateFailure,
        format!("{prefix}. Reason: {reason}"),
    )
}
