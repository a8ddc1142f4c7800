//! Self-describing document blobs: `data:<mimetype>;base64,<payload>`.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::completion::CompletionError;

pub const PDF_MIME: &str = "application/pdf";

/// A decoded data URI. `data` stays base64 since that is what the Messages
/// API document block expects.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentPayload {
    pub media_type: String,
    pub data: String,
    /// Decoded size in bytes.
    pub byte_len: usize,
}

impl DocumentPayload {
    pub fn parse(uri: &str) -> Result<Self, CompletionError> {
        let rest = uri
            .trim()
            .strip_prefix("data:")
            .ok_or_else(|| CompletionError::InvalidDocument("expected a data: URI".to_string()))?;

        let (header, data) = rest.split_once(',').ok_or_else(|| {
            CompletionError::InvalidDocument("data URI has no payload separator".to_string())
        })?;

        let media_type = header.strip_suffix(";base64").ok_or_else(|| {
            CompletionError::InvalidDocument("data URI payload must be base64 encoded".to_string())
        })?;

        if media_type.is_empty() {
            return Err(CompletionError::InvalidDocument(
                "data URI is missing a MIME type".to_string(),
            ));
        }

        let decoded = STANDARD
            .decode(data)
            .map_err(|e| CompletionError::InvalidDocument(format!("invalid base64 payload: {e}")))?;

        if decoded.is_empty() {
            return Err(CompletionError::InvalidDocument(
                "document payload is empty".to_string(),
            ));
        }

        Ok(Self {
            media_type: media_type.to_string(),
            data: data.to_string(),
            byte_len: decoded.len(),
        })
    }
}

/// Encodes raw bytes as a data URI.
pub fn to_data_uri(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{media_type};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_pdf_uri() {
        let uri = to_data_uri(PDF_MIME, b"%PDF-1.7 fake");
        let payload = DocumentPayload::parse(&uri).unwrap();
        assert_eq!(payload.media_type, PDF_MIME);
        assert_eq!(payload.byte_len, 13);
        assert_eq!(STANDARD.decode(&payload.data).unwrap(), b"%PDF-1.7 fake");
    }

    #[test]
    fn test_parse_rejects_non_data_uri() {
        let err = DocumentPayload::parse("https://example.com/cv.pdf").unwrap_err();
        assert!(matches!(err, CompletionError::InvalidDocument(_)));
    }

    #[test]
    fn test_parse_rejects_non_base64_encoding() {
        assert!(DocumentPayload::parse("data:text/plain,hello").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_base64() {
        assert!(DocumentPayload::parse("data:application/pdf;base64,@@@").is_err());
    }

    #[test]
    fn test_parse_rejects_missing_mime_and_empty_payload() {
        assert!(DocumentPayload::parse("data:;base64,AAAA").is_err());
        assert!(DocumentPayload::parse("data:application/pdf;base64,").is_err());
    }
}
