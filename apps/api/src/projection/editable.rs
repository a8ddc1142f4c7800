//! Projection of extracted data into the editor's document model.

use crate::models::document::{
    EditableDocument, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, SkillEntry,
};
use crate::models::resume::ExtractedResume;
use crate::projection::canonical::date_range;

/// Builds an editable document from extracted data and an optional summary.
///
/// Without extracted data the document is blank: every string empty, every
/// list empty. Lists are mapped 1:1 in source order with synthetic ids of
/// the form `<prefix><1-based index>`.
pub fn to_editable_document(
    extracted: Option<&ExtractedResume>,
    summary: Option<&str>,
) -> EditableDocument {
    let Some(extracted) = extracted else {
        return EditableDocument::default();
    };

    let personal = extracted
        .personal_details
        .as_ref()
        .map(|details| PersonalInfo {
            name: details.name.clone(),
            email: details.email.clone(),
            phone: details.phone.clone().unwrap_or_default(),
            location: details.location.clone().unwrap_or_default(),
            website: String::new(),
        })
        .unwrap_or_default();

    let experience = extracted
        .work_experience
        .iter()
        .flatten()
        .enumerate()
        .map(|(index, job)| ExperienceEntry {
            id: synthetic_id("exp", index),
            title: job.title.clone(),
            company: job.company.clone(),
            dates: date_range(&job.start_date, job.end_date.as_deref()),
            description: job.description.clone(),
        })
        .collect();

    let education = extracted
        .education
        .iter()
        .flatten()
        .enumerate()
        .map(|(index, edu)| EducationEntry {
            id: synthetic_id("edu", index),
            school: edu.institution.clone(),
            degree: edu.degree.clone(),
            dates: date_range(&edu.start_date, edu.end_date.as_deref()),
        })
        .collect();

    let skills = extracted
        .skills
        .iter()
        .enumerate()
        .map(|(index, skill)| SkillEntry {
            id: synthetic_id("skill", index),
            name: skill.clone(),
        })
        .collect();

    let projects = extracted
        .projects
        .iter()
        .flatten()
        .enumerate()
        .map(|(index, project)| ProjectEntry {
            id: synthetic_id("proj", index),
            name: project.name.clone(),
            description: project.description.clone(),
        })
        .collect();

    EditableDocument {
        personal,
        summary: summary.unwrap_or_default().to_string(),
        experience,
        education,
        skills,
        projects,
    }
}

fn synthetic_id(prefix: &str, index: usize) -> String {
    format!("{prefix}{}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Education, PersonalDetails, Project, WorkExperience};

    fn extracted() -> ExtractedResume {
        ExtractedResume {
            personal_details: Some(PersonalDetails {
                name: "Grace Hopper".to_string(),
                email: "grace@navy.mil".to_string(),
                phone: Some("555-0100".to_string()),
                location: None,
            }),
            skills: vec!["COBOL".to_string(), "Compilers".to_string()],
            work_experience: Some(vec![
                WorkExperience {
                    title: "Rear Admiral".to_string(),
                    company: "US Navy".to_string(),
                    start_date: "1943".to_string(),
                    end_date: Some("1986".to_string()),
                    description: "Led programming language work.".to_string(),
                },
                WorkExperience {
                    title: "Consultant".to_string(),
                    company: "DEC".to_string(),
                    start_date: "1986".to_string(),
                    end_date: None,
                    description: "Evangelism.".to_string(),
                },
            ]),
            education: Some(vec![Education {
                institution: "Yale".to_string(),
                degree: "PhD Mathematics".to_string(),
                start_date: "1930".to_string(),
                end_date: Some("1934".to_string()),
                description: None,
            }]),
            projects: Some(vec![Project {
                name: "A-0".to_string(),
                description: "First compiler".to_string(),
            }]),
            keywords: vec![],
        }
    }

    #[test]
    fn test_none_yields_blank_document() {
        let doc = to_editable_document(None, Some("ignored"));
        assert_eq!(doc, EditableDocument::default());
        assert!(doc.personal.name.is_empty());
        assert!(doc.summary.is_empty());
        assert!(doc.experience.is_empty());
        assert!(doc.education.is_empty());
        assert!(doc.skills.is_empty());
        assert!(doc.projects.is_empty());
    }

    #[test]
    fn test_lists_keep_order_and_get_prefixed_ids() {
        let doc = to_editable_document(Some(&extracted()), None);

        let ids: Vec<&str> = doc.experience.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["exp1", "exp2"]);
        assert_eq!(doc.experience[0].title, "Rear Admiral");
        assert_eq!(doc.experience[1].company, "DEC");

        assert_eq!(doc.education[0].id, "edu1");
        assert_eq!(doc.education[0].school, "Yale");
        assert_eq!(doc.skills[1].id, "skill2");
        assert_eq!(doc.skills[1].name, "Compilers");
        assert_eq!(doc.projects[0].id, "proj1");
    }

    #[test]
    fn test_dates_are_combined_with_present_for_missing_end() {
        let doc = to_editable_document(Some(&extracted()), None);
        assert_eq!(doc.experience[0].dates, "1943 - 1986");
        assert_eq!(doc.experience[1].dates, "1986 - Present");
        assert_eq!(doc.education[0].dates, "1930 - 1934");
    }

    #[test]
    fn test_optional_fields_become_empty_strings_and_website_is_blank() {
        let doc = to_editable_document(Some(&extracted()), Some("Compiler pioneer."));
        assert_eq!(doc.personal.phone, "555-0100");
        assert_eq!(doc.personal.location, "");
        assert_eq!(doc.personal.website, "");
        assert_eq!(doc.summary, "Compiler pioneer.");
    }

    #[test]
    fn test_absent_sections_become_empty_lists() {
        let doc = to_editable_document(Some(&ExtractedResume::default()), None);
        assert_eq!(doc.personal, PersonalInfo::default());
        assert!(doc.experience.is_empty());
        assert!(doc.projects.is_empty());
    }
}
