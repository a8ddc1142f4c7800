//! Claude-backed completion service: renders each operation's prompt and
//! sends it through the shared `LlmClient`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use crate::completion::document::DocumentPayload;
use crate::completion::prompts::{
    CONCISE_SUMMARY_PROMPT, COVER_LETTER_PROMPT, EXTRACT_RESUME_DATA_PROMPT, RATE_CLARITY_PROMPT,
    RESUME_EXPERT_ROLE, REWRITE_CONTEXT_BLOCK, REWRITE_SECTION_PROMPT, SKILLS_GAP_PROMPT,
    SUGGEST_IMPROVEMENTS_PROMPT, UPSCALE_FOR_ATS_PROMPT,
};
use crate::completion::{
    CompletionError, CompletionService, ConciseSummaryInput, CoverLetterInput,
    ExtractResumeDataInput, JobComparisonInput, Operation, ResumeTextInput, RewriteSectionInput,
};
use crate::llm_client::prompts::json_system;
use crate::llm_client::{LlmClient, RequestBlock};

#[derive(Clone)]
pub struct ClaudeCompletionService {
    llm: LlmClient,
    system: String,
}

impl ClaudeCompletionService {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            system: json_system(RESUME_EXPERT_ROLE),
        }
    }
}

#[async_trait]
impl CompletionService for ClaudeCompletionService {
    async fn complete(
        &self,
        operation: Operation,
        input: Value,
    ) -> Result<Value, CompletionError> {
        let content = build_request(operation, input)?;

        info!(operation = %operation, "Dispatching completion call");
        let output: Value = self.llm.call_json(&content, &self.system).await?;
        Ok(output)
    }
}

/// Renders the message content for one operation from its declared input.
pub fn build_request(
    operation: Operation,
    input: Value,
) -> Result<Vec<RequestBlock>, CompletionError> {
    let prompt = match operation {
        Operation::ExtractResumeData => {
            let input: ExtractResumeDataInput = parse_input(operation, input)?;
            let document = DocumentPayload::parse(&input.resume_data_uri)?;
            info!(
                media_type = %document.media_type,
                bytes = document.byte_len,
                "Attaching resume document"
            );
            return Ok(vec![
                RequestBlock::base64_document(document.media_type, document.data),
                RequestBlock::text(EXTRACT_RESUME_DATA_PROMPT),
            ]);
        }
        Operation::GenerateConciseSummary => {
            let input: ConciseSummaryInput = parse_input(operation, input)?;
            render(
                CONCISE_SUMMARY_PROMPT,
                &[
                    ("personal_details", input.personal_details.as_str()),
                    ("skills", input.skills.as_str()),
                    ("experience", input.experience.as_str()),
                    ("education", input.education.as_str()),
                    ("projects", input.projects.as_str()),
                ],
            )
        }
        Operation::RateResumeClarity => {
            let input: ResumeTextInput = parse_input(operation, input)?;
            render(RATE_CLARITY_PROMPT, &[("resume_text", input.resume_text.as_str())])
        }
        Operation::SuggestResumeImprovements => {
            let input: ResumeTextInput = parse_input(operation, input)?;
            render(SUGGEST_IMPROVEMENTS_PROMPT, &[("resume_text", input.resume_text.as_str())])
        }
        Operation::AnalyzeSkillsGap => {
            let input: JobComparisonInput = parse_input(operation, input)?;
            render(
                SKILLS_GAP_PROMPT,
                &[
                    ("resume_text", input.resume_text.as_str()),
                    ("job_description", input.job_description.as_str()),
                ],
            )
        }
        Operation::RewriteResumeSection => {
            let input: RewriteSectionInput = parse_input(operation, input)?;
            let context_block = input
                .context
                .as_deref()
                .filter(|c| !c.trim().is_empty())
                .map(|c| render(REWRITE_CONTEXT_BLOCK, &[("context", c)]))
                .unwrap_or_default();
            render(
                REWRITE_SECTION_PROMPT,
                &[("context_block", context_block.as_str()), ("text", input.text.as_str())],
            )
        }
        Operation::GenerateCoverLetter => {
            let input: CoverLetterInput = parse_input(operation, input)?;
            render(
                COVER_LETTER_PROMPT,
                &[
                    ("user_name", input.user_name.as_str()),
                    ("resume_text", input.resume_text.as_str()),
                    ("job_description", input.job_description.as_str()),
                ],
            )
        }
        Operation::UpscaleResumeForAts => {
            let input: JobComparisonInput = parse_input(operation, input)?;
            render(
                UPSCALE_FOR_ATS_PROMPT,
                &[
                    ("resume_text", input.resume_text.as_str()),
                    ("job_description", input.job_description.as_str()),
                ],
            )
        }
    };

    Ok(vec![RequestBlock::text(prompt)])
}

/// Fills `{name}` placeholders in a single left-to-right pass. Substituted
/// values are copied as-is and never scanned again; braces that do not name
/// a known placeholder (the JSON schemas in the templates) are kept.
fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn parse_input<T: DeserializeOwned>(operation: Operation, input: Value) -> Result<T, CompletionError> {
    serde_json::from_value(input).map_err(|e| CompletionError::InvalidInput {
        operation,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::document::{to_data_uri, PDF_MIME};
    use serde_json::json;

    fn only_text(blocks: Vec<RequestBlock>) -> String {
        assert_eq!(blocks.len(), 1);
        match blocks.into_iter().next() {
            Some(RequestBlock::Text { text }) => text,
            other => panic!("expected a text block, got {other:?}"),
        }
    }

    #[test]
    fn test_extraction_sends_document_then_instructions() {
        let uri = to_data_uri(PDF_MIME, b"%PDF-1.4");
        let blocks = build_request(
            Operation::ExtractResumeData,
            json!({ "resume_data_uri": uri }),
        )
        .unwrap();

        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[0], RequestBlock::Document { .. }));
        assert!(matches!(&blocks[1], RequestBlock::Text { text } if text.contains("resume parser")));
    }

    #[test]
    fn test_extraction_rejects_malformed_blob() {
        let err = build_request(
            Operation::ExtractResumeData,
            json!({ "resume_data_uri": "not a data uri" }),
        )
        .unwrap_err();
        assert!(matches!(err, CompletionError::InvalidDocument(_)));
    }

    #[test]
    fn test_clarity_prompt_embeds_resume_text() {
        let text = only_text(
            build_request(
                Operation::RateResumeClarity,
                json!({ "resume_text": "Skills:\nRust" }),
            )
            .unwrap(),
        );
        assert!(text.contains("Skills:\nRust"));
        assert!(!text.contains("{resume_text}"));
    }

    #[test]
    fn test_rewrite_context_block_only_when_present() {
        let with_context = only_text(
            build_request(
                Operation::RewriteResumeSection,
                json!({ "text": "Did stuff", "context": "Job at Acme as a SRE" }),
            )
            .unwrap(),
        );
        assert!(with_context.contains("Job at Acme as a SRE"));

        let without_context = only_text(
            build_request(Operation::RewriteResumeSection, json!({ "text": "Did stuff" }))
                .unwrap(),
        );
        assert!(!without_context.contains("Context for this section"));
        assert!(without_context.contains("\"Did stuff\""));
    }

    #[test]
    fn test_cover_letter_prompt_fills_all_placeholders() {
        let text = only_text(
            build_request(
                Operation::GenerateCoverLetter,
                json!({
                    "resume_text": "Resume body",
                    "job_description": "Role body",
                    "user_name": "Sam"
                }),
            )
            .unwrap(),
        );
        assert!(text.contains("Sam"));
        assert!(text.contains("Resume body"));
        assert!(text.contains("Role body"));
        assert!(!text.contains("{user_name}"));
    }

    #[test]
    fn test_resume_text_with_placeholder_syntax_is_sent_verbatim() {
        let text = only_text(
            build_request(
                Operation::AnalyzeSkillsGap,
                json!({
                    "resume_text": "Templating: {job_description}",
                    "job_description": "JD-BODY"
                }),
            )
            .unwrap(),
        );
        assert!(text.contains("Templating: {job_description}"));
        assert_eq!(text.matches("JD-BODY").count(), 1);
    }

    #[test]
    fn test_cover_letter_name_is_not_expanded() {
        let text = only_text(
            build_request(
                Operation::GenerateCoverLetter,
                json!({
                    "resume_text": "RESUME-BODY",
                    "job_description": "Role body",
                    "user_name": "{resume_text}"
                }),
            )
            .unwrap(),
        );
        assert!(text.contains("{resume_text}"));
        assert_eq!(text.matches("RESUME-BODY").count(), 1);
    }

    #[test]
    fn test_rewrite_context_mentioning_text_is_kept() {
        let text = only_text(
            build_request(
                Operation::RewriteResumeSection,
                json!({ "text": "SECTION-BODY", "context": "see {text} above" }),
            )
            .unwrap(),
        );
        assert!(text.contains("see {text} above"));
        assert_eq!(text.matches("SECTION-BODY").count(), 1);
    }

    #[test]
    fn test_render_keeps_unknown_braces() {
        let rendered = render(
            "Return {\"a\": 1} for {name}, not {other}.",
            &[("name", "x")],
        );
        assert_eq!(rendered, "Return {\"a\": 1} for x, not {other}.");
    }

    #[test]
    fn test_missing_input_field_is_invalid_input() {
        let err = build_request(Operation::AnalyzeSkillsGap, json!({ "resume_text": "x" }))
            .unwrap_err();
        assert!(matches!(
            err,
            CompletionError::InvalidInput {
                operation: Operation::AnalyzeSkillsGap,
                ..
            }
        ));
    }
}
