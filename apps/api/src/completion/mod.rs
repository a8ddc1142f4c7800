//! Completion Service boundary.
//!
//! Every AI-driven operation is one call to `CompletionService::complete`
//! with a named `Operation` and a JSON input of the operation's declared
//! shape. Orchestrators depend only on this trait; the production backend is
//! `ClaudeCompletionService`, tests substitute `ScriptedCompletionService`.

use std::fmt;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::llm_client::LlmError;

pub mod claude;
pub mod document;
pub mod prompts;
#[cfg(test)]
pub mod scripted;

/// The eight named operations the completion service provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    ExtractResumeData,
    GenerateConciseSummary,
    RateResumeClarity,
    SuggestResumeImprovements,
    AnalyzeSkillsGap,
    RewriteResumeSection,
    GenerateCoverLetter,
    UpscaleResumeForAts,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::ExtractResumeData,
        Operation::GenerateConciseSummary,
        Operation::RateResumeClarity,
        Operation::SuggestResumeImprovements,
        Operation::AnalyzeSkillsGap,
        Operation::RewriteResumeSection,
        Operation::GenerateCoverLetter,
        Operation::UpscaleResumeForAts,
    ];

    /// Stable operation identifier.
    pub fn id(self) -> &'static str {
        match self {
            Operation::ExtractResumeData => "extract-resume-data",
            Operation::GenerateConciseSummary => "generate-concise-summary",
            Operation::RateResumeClarity => "rate-resume-clarity",
            Operation::SuggestResumeImprovements => "suggest-resume-improvements",
            Operation::AnalyzeSkillsGap => "analyze-skills-gap",
            Operation::RewriteResumeSection => "rewrite-resume-section",
            Operation::GenerateCoverLetter => "generate-cover-letter",
            Operation::UpscaleResumeForAts => "upscale-resume-for-ats",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("{0}")]
    Upstream(#[from] LlmError),

    #[error("Invalid input for {operation}: {message}")]
    InvalidInput {
        operation: Operation,
        message: String,
    },

    #[error("Unexpected output from {operation}: {source}")]
    InvalidOutput {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Free-form failure for backends that are not the Anthropic HTTP
    /// client. Only the scripted test double raises it today.
    #[cfg_attr(not(test), allow(dead_code))]
    #[error("{0}")]
    Other(String),
}

/// A structured, AI-driven transformation service.
///
/// Implementations must be safe to call concurrently; the orchestrators
/// impose no rate limiting or queueing of their own.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, operation: Operation, input: Value)
        -> Result<Value, CompletionError>;
}

/// Typed wrapper around `complete`: serializes the declared input shape and
/// deserializes the declared output shape.
pub async fn invoke<I, O>(
    service: &dyn CompletionService,
    operation: Operation,
    input: &I,
) -> Result<O, CompletionError>
where
    I: Serialize + Sync,
    O: DeserializeOwned,
{
    let input = serde_json::to_value(input).map_err(|e| CompletionError::InvalidInput {
        operation,
        message: e.to_string(),
    })?;

    let output = service.complete(operation, input).await?;

    serde_json::from_value(output)
        .map_err(|source| CompletionError::InvalidOutput { operation, source })
}

// ────────────────────────────────────────────────────────────────────────────
// Declared input / output shapes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResumeDataInput {
    /// `data:<mimetype>;base64,<payload>`
    pub resume_data_uri: String,
}

/// Sub-fields of the extracted resume, each pre-serialized to text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConciseSummaryInput {
    pub personal_details: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
    pub projects: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConciseSummaryOutput {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeTextInput {
    pub resume_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsOutput {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobComparisonInput {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteSectionInput {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteSectionOutput {
    pub rewritten_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetterInput {
    pub resume_text: String,
    pub job_description: String,
    pub user_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetterOutput {
    pub cover_letter: String,
}
