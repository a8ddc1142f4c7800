//! Canonical resume text: the single plain-text serialization of an
//! `ExtractedResume` fed to every text-based completion operation.
//!
//! Output is a pure function of the input. Block order is fixed:
//! personal details, skills, work experience, education, projects.
//! Blocks are separated by one blank line and a block is only emitted when
//! it has at least one content line.

use crate::models::resume::{Education, ExtractedResume, PersonalDetails, Project, WorkExperience};

/// Stand-in for a missing end date.
pub const PRESENT: &str = "Present";

/// Serializes the extracted resume into canonical text. Returns an empty
/// string when nothing renderable is present.
pub fn to_canonical_text(resume: &ExtractedResume) -> String {
    let mut blocks: Vec<String> = Vec::with_capacity(5);

    if let Some(block) = resume.personal_details.as_ref().and_then(personal_block) {
        blocks.push(block);
    }

    if !resume.skills.is_empty() {
        blocks.push(format!("Skills:\n{}", resume.skills.join(", ")));
    }

    if let Some(jobs) = non_empty(&resume.work_experience) {
        let body = jobs.iter().map(experience_item).collect::<Vec<_>>().join("\n\n");
        blocks.push(format!("Work Experience:\n{body}"));
    }

    if let Some(schools) = non_empty(&resume.education) {
        let body = schools.iter().map(education_item).collect::<Vec<_>>().join("\n\n");
        blocks.push(format!("Education:\n{body}"));
    }

    if let Some(projects) = non_empty(&resume.projects) {
        let body = projects.iter().map(project_item).collect::<Vec<_>>().join("\n\n");
        blocks.push(format!("Projects:\n{body}"));
    }

    blocks.join("\n\n")
}

/// `"<start> - <end>"`, substituting `Present` for a missing or blank end.
pub fn date_range(start: &str, end: Option<&str>) -> String {
    let end = end.filter(|e| !e.trim().is_empty()).unwrap_or(PRESENT);
    format!("{start} - {end}")
}

fn non_empty<T>(list: &Option<Vec<T>>) -> Option<&[T]> {
    list.as_deref().filter(|items| !items.is_empty())
}

fn personal_block(details: &PersonalDetails) -> Option<String> {
    let fields = [
        ("name", Some(details.name.as_str())),
        ("email", Some(details.email.as_str())),
        ("phone", details.phone.as_deref()),
        ("location", details.location.as_deref()),
    ];

    let lines: Vec<String> = fields
        .iter()
        .filter_map(|(key, value)| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(|v| format!("{key}: {v}"))
        })
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(format!("Personal Details:\n{}", lines.join("\n")))
    }
}

fn experience_item(job: &WorkExperience) -> String {
    format!(
        "Title: {}\nCompany: {}\nDates: {}\nDescription: {}",
        job.title,
        job.company,
        date_range(&job.start_date, job.end_date.as_deref()),
        job.description
    )
}

fn education_item(edu: &Education) -> String {
    format!(
        "Institution: {}\nDegree: {}\nDates: {}",
        edu.institution,
        edu.degree,
        date_range(&edu.start_date, edu.end_date.as_deref())
    )
}

fn project_item(project: &Project) -> String {
    format!("Name: {}\nDescription: {}", project.name, project.description)
}
