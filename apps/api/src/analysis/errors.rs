//! User-facing failure of an orchestrator: a kind plus one human-readable line.

use serde::Serialize;
use thiserror::Error;

use crate::completion::CompletionError;

pub const RATE_LIMIT_MESSAGE: &str =
    "API rate limit exceeded. Please wait a moment before trying again.";
pub const UNAVAILABLE_MESSAGE: &str =
    "The AI service is temporarily unavailable. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Empty required user input, detected before any completion call.
    Validation,
    /// The completion service returned nothing usable.
    UpstreamEmpty,
    RateLimited,
    Unavailable,
    /// A single completion call was rejected.
    UpstreamFailure,
    /// One of several concurrent completion calls was rejected.
    AggregateFailure,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct UserFacingError {
    pub kind: ErrorKind,
    pub message: String,
}

impl UserFacingError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Wraps a rejected completion call, using `fallback` when the failure
    /// carries no message of its own.
    pub fn upstream(err: CompletionError, fallback: &str) -> Self {
        let message = err.to_string();
        let message = if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        };
        Self::new(ErrorKind::UpstreamFailure, message)
    }

    /// Rewrites rate-limit and outage failures into their friendly message.
    /// Validation failures are left untouched.
    pub fn remap(self) -> Self {
        if self.kind == ErrorKind::Validation {
            return self;
        }
        match remap_failure_message(&self.message) {
            Some((kind, message)) => Self::new(kind, message),
            None => self,
        }
    }
}

/// Pure function of the raw failure text: a `429` marker means rate limiting,
/// `500` or `503` means the service is unavailable. Anything else is kept.
///
/// Upstream failures render their HTTP status into the message ("API error (status 429): ...").
pub fn remap_failure_message(raw: &str) -> Option<(ErrorKind, &'static str)> {
    if raw.contains("429") {
        Some((ErrorKind::RateLimited, RATE_LIMIT_MESSAGE))
    } else if raw.contains("500") || raw.contains("503") {
        Some((ErrorKind::Unavailable, UNAVAILABLE_MESSAGE))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;

    #[test]
    fn test_429_maps_to_rate_limit() {
        let (kind, message) =
            remap_failure_message("Failed to rate resume clarity. Reason: API error (status 429): slow")
                .unwrap();
        assert_eq!(kind, ErrorKind::RateLimited);
        assert_eq!(message, RATE_LIMIT_MESSAGE);
    }

    #[test]
    fn test_500_and_503_map_to_unavailable() {
        for raw in ["API error (status 500): boom", "API error (status 503): overloaded"] {
            let (kind, message) = remap_failure_message(raw).unwrap();
            assert_eq!(kind, ErrorKind::Unavailable);
            assert_eq!(message, UNAVAILABLE_MESSAGE);
        }
    }

    #[test]
    fn test_rate_limit_wins_over_unavailable() {
        let (kind, _) = remap_failure_message("429 after 503").unwrap();
        assert_eq!(kind, ErrorKind::RateLimited);
    }

    #[test]
    fn test_other_messages_pass_through() {
        assert!(remap_failure_message("connection reset by peer").is_none());

        let err = UserFacingError::new(ErrorKind::UpstreamFailure, "connection reset by peer");
        assert_eq!(err.clone().remap(), err);
    }

    #[test]
    fn test_validation_is_never_remapped() {
        let err = UserFacingError::validation("Field 500 is required");
        assert_eq!(err.clone().remap(), err);
    }

    #[test]
    fn test_upstream_uses_error_text() {
        let err = UserFacingError::upstream(
            CompletionError::from(LlmError::Api {
                status: 400,
                message: "bad request".to_string(),
            }),
            "Failed to rewrite section.",
        );
        assert_eq!(err.kind, ErrorKind::UpstreamFailure);
        assert_eq!(err.message, "API error (status 400): bad request");
    }

    #[test]
    fn test_upstream_falls_back_on_blank_message() {
        let err = UserFacingError::upstream(
            CompletionError::Other(String::new()),
            "Failed to rewrite section.",
        );
        assert_eq!(err.message, "Failed to rewrite section.");
    }

    #[test]
    fn test_display_is_the_message() {
        let err = UserFacingError::validation("Job description cannot be empty.");
        assert_eq!(err.to_string(), "Job description cannot be empty.");
    }
}
