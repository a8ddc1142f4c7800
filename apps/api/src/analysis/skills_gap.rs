//! Job-description comparison: skills-gap analysis and the ATS upscale.
//!
//! Both are single completion calls whose structured output is returned
//! verbatim. Failures pass their message through unchanged.

use tracing::info;

use crate::analysis::errors::UserFacingError;
use crate::completion::{invoke, CompletionService, JobComparisonInput, Operation};
use crate::models::resume::{SkillsGapResult, UpscaleResult};

pub const EMPTY_JOB_DESCRIPTION_MESSAGE: &str = "Job description cannot be empty.";

/// Compares resume text against a job description. An empty or
/// whitespace-only job description fails without calling the service.
pub async fn analyze_skills_gap(
    service: &dyn CompletionService,
    resume_text: &str,
    job_description: &str,
) -> Result<SkillsGapResult, UserFacingError> {
    if job_description.trim().is_empty() {
        return Err(UserFacingError::validation(EMPTY_JOB_DESCRIPTION_MESSAGE));
    }

    info!(
        resume_len = resume_text.len(),
        jd_len = job_description.len(),
        "Analyzing skills gap"
    );

    let input = JobComparisonInput {
        resume_text: resume_text.to_string(),
        job_description: job_description.to_string(),
    };

    invoke(service, Operation::AnalyzeSkillsGap, &input)
        .await
        .map_err(|e| UserFacingError::upstream(e, "Failed to analyze skills gap."))
}

/// Rewrites the whole resume for a target job. No local validation: the
/// completion service enforces its own input contract.
pub async fn upscale_resume_for_ats(
    service: &dyn CompletionService,
    resume_text: &str,
    job_description: &str,
) -> Result<UpscaleResult, UserFacingError> {
    info!(
        resume_len = resume_text.len(),
        jd_len = job_description.len(),
        "Upscaling resume for ATS"
    );

    let input = JobComparisonInput {
        resume_text: resume_text.to_string(),
        job_description: job_description.to_string(),
    };

    invoke(service, Operation::UpscaleResumeForAts, &input)
        .await
        .map_err(|e| UserFacingError::upstream(e, "Failed to upscale resume for ATS."))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::analysis::errors::ErrorKind;
    use crate::completion::scripted::ScriptedCompletionService;

    fn gap_json() -> serde_json::Value {
        json!({
            "missing_keywords": ["Kubernetes", "Terraform"],
            "in_demand_skills": ["Go"],
            "ats_optimization_opportunities": "Mirror the job title in your summary.",
            "to_learn_or_add": "Terraform basics, Go concurrency."
        })
    }

    #[tokio::test]
    async fn test_blank_job_description_never_calls_service() {
        let service = ScriptedCompletionService::new().respond(Operation::AnalyzeSkillsGap, gap_json());

        for jd in ["", "   ", "\n\t  \n"] {
            let err = analyze_skills_gap(&service, "Skills:\nRust", jd)
                .await
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
            assert_eq!(err.message, EMPTY_JOB_DESCRIPTION_MESSAGE);
        }
        assert_eq!(service.calls(Operation::AnalyzeSkillsGap), 0);
        assert_eq!(service.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_skills_gap_result_is_returned_verbatim() {
        let service = ScriptedCompletionService::new().respond(Operation::AnalyzeSkillsGap, gap_json());

        let result = analyze_skills_gap(&service, "Skills:\nRust", "Platform engineer, Kubernetes")
            .await
            .unwrap();

        assert_eq!(result.missing_keywords, vec!["Kubernetes", "Terraform"]);
        assert_eq!(result.in_demand_skills, vec!["Go"]);
        assert_eq!(result.to_learn_or_add, "Terraform basics, Go concurrency.");
        assert_eq!(service.calls(Operation::AnalyzeSkillsGap), 1);

        let input = service.last_input(Operation::AnalyzeSkillsGap).unwrap();
        assert_eq!(input["job_description"], "Platform engineer, Kubernetes");
    }

    #[tokio::test]
    async fn test_skills_gap_failure_passes_message_through() {
        let service = ScriptedCompletionService::new()
            .fail(Operation::AnalyzeSkillsGap, "API error (status 429): too many");

        let err = analyze_skills_gap(&service, "text", "jd").await.unwrap_err();
        // No remapping outside the analysis flow.
        assert_eq!(err.kind, ErrorKind::UpstreamFailure);
        assert_eq!(err.message, "API error (status 429): too many");
    }

    #[tokio::test]
    async fn test_upscale_returns_both_fields() {
        let service = ScriptedCompletionService::new().respond(
            Operation::UpscaleResumeForAts,
            json!({
                "upscaled_resume_text": "Work Experience:\n- Led Kubernetes migration",
                "explanation": "Added Kubernetes keywords."
            }),
        );

        let result = upscale_resume_for_ats(&service, "old text", "jd").await.unwrap();
        assert_eq!(
            result.upscaled_resume_text,
            "Work Experience:\n- Led Kubernetes migration"
        );
        assert_eq!(result.explanation, "Added Kubernetes keywords.");
    }

    #[tokio::test]
    async fn test_upscale_does_not_validate_locally() {
        let service = ScriptedCompletionService::new().respond(
            Operation::UpscaleResumeForAts,
            json!({"upscaled_resume_text": "", "explanation": ""}),
        );

        upscale_resume_for_ats(&service, "", "").await.unwrap();
        assert_eq!(service.calls(Operation::UpscaleResumeForAts), 1);
    }

    #[tokio::test]
    async fn test_upscale_malformed_output_is_upstream_failure() {
        let service = ScriptedCompletionService::new()
            .respond(Operation::UpscaleResumeForAts, json!({"explanation": "only half"}));

        let err = upscale_resume_for_ats(&service, "text", "jd").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::UpstreamFailure);
        assert!(err.message.contains("upscale-resume-for-ats"));
    }
}
