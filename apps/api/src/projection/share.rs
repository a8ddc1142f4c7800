//! Shareable editor state: the AI-derived fields of an editable document
//! packed into one JSON blob carried in the `data` query parameter.
//!
//! The blob has the same `{extracted_data, summary}` shape the analysis
//! dashboard hands to the editor, so restoring always goes through
//! `to_editable_document`. Restoring never fails: an absent or malformed
//! blob yields the sample document.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::document::EditableDocument;
use crate::models::resume::{Education, ExtractedResume, PersonalDetails, Project, WorkExperience};
use crate::projection::canonical::PRESENT;
use crate::projection::editable::to_editable_document;
use crate::projection::sample::sample_document;

pub const SHARE_QUERY_PARAM: &str = "data";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_data: Option<ExtractedResume>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareLink {
    /// Raw JSON blob.
    pub data: String,
    /// `data=<percent-encoded blob>`, ready to append to the editor URL.
    pub query: String,
}

/// Packs an editable document back into the extracted-data shape.
pub fn to_share_payload(doc: &EditableDocument) -> SharePayload {
    let personal = &doc.personal;

    let extracted = ExtractedResume {
        personal_details: Some(PersonalDetails {
            name: personal.name.clone(),
            email: personal.email.clone(),
            phone: non_blank(&personal.phone),
            location: non_blank(&personal.location),
        }),
        skills: doc.skills.iter().map(|s| s.name.clone()).collect(),
        work_experience: Some(
            doc.experience
                .iter()
                .map(|entry| {
                    let (start, end) = split_dates(&entry.dates);
                    WorkExperience {
                        title: entry.title.clone(),
                        company: entry.company.clone(),
                        start_date: start,
                        end_date: end,
                        description: entry.description.clone(),
                    }
                })
                .collect(),
        ),
        education: Some(
            doc.education
                .iter()
                .map(|entry| {
                    let (start, end) = split_dates(&entry.dates);
                    Education {
                        institution: entry.school.clone(),
                        degree: entry.degree.clone(),
                        start_date: start,
                        end_date: end,
                        description: None,
                    }
                })
                .collect(),
        ),
        projects: Some(
            doc.projects
                .iter()
                .map(|p| Project {
                    name: p.name.clone(),
                    description: p.description.clone(),
                })
                .collect(),
        ),
        keywords: Vec::new(),
    };

    SharePayload {
        extracted_data: Some(extracted),
        summary: Some(doc.summary.clone()),
    }
}

pub fn encode_share_link(doc: &EditableDocument) -> Result<ShareLink, serde_json::Error> {
    let data = serde_json::to_string(&to_share_payload(doc))?;
    let query = format!(
        "{SHARE_QUERY_PARAM}={}",
        utf8_percent_encode(&data, NON_ALPHANUMERIC)
    );
    Ok(ShareLink { data, query })
}

/// Restores an editable document from an already URL-decoded blob.
pub fn decode_share_link(data: Option<&str>) -> EditableDocument {
    let Some(data) = data.filter(|d| !d.trim().is_empty()) else {
        return sample_document();
    };

    match serde_json::from_str::<SharePayload>(data) {
        Ok(payload) => {
            to_editable_document(payload.extracted_data.as_ref(), payload.summary.as_deref())
        }
        Err(e) => {
            warn!("Failed to parse shared resume data, using sample document: {e}");
            sample_document()
        }
    }
}

/// Splits a combined `"<start> - <end>"` string. `Present` and a missing
/// separator both mean "no end date".
fn split_dates(dates: &str) -> (String, Option<String>) {
    match dates.split_once(" - ") {
        Some((start, end)) => {
            let end = end.trim();
            let end = (!end.is_empty() && end != PRESENT).then(|| end.to_string());
            (start.trim().to_string(), end)
        }
        None => (dates.trim().to_string(), None),
    }
}

fn non_blank(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}
