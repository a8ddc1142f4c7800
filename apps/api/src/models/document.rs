use serde::{Deserialize, Serialize};

/// Personal block of the editable document. `website` has no extracted
/// counterpart and starts empty for AI-derived documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: String,
    pub title: String,
    pub company: String,
    /// "<start> - <end>", with "Present" standing in for a missing end.
    pub dates: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub dates: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Denormalized, user-editable resume consumed by the editor and the
/// template renderers.
///
/// Entry ids (`exp1`, `edu2`, `skill3`, ...) exist only for list
/// reconciliation on the client. They are never fed back into a completion
/// call and never written into a share link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditableDocument {
    pub personal: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
    pub projects: Vec<ProjectEntry>,
}
