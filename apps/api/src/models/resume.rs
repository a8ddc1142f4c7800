use serde::{Deserialize, Serialize};

/// Contact block of an extracted resume. Phone and location are optional in
/// the extraction contract; name and email are always requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Dates are free text ("Jan 2021", "2019", "Summer 2020"). Never parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub title: String,
    pub company: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// The completion service's normalized view of one uploaded document.
///
/// Produced once per upload by `extract-resume-data` and never mutated
/// afterwards. `skills` and `keywords` default to empty when the model
/// omits them so that "nothing usable" is detected by the canonical text
/// check rather than by a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedResume {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_details: Option<PersonalDetails>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<Vec<WorkExperience>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// One rubric dimension of the clarity report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubScore {
    /// 1 – 10
    pub score: f64,
    pub explanation: String,
}

/// Clarity report. `clarity_score` is always recomputed locally from the
/// three sub-scores; whatever the model put there is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClarityReport {
    #[serde(default)]
    pub clarity_score: f64,
    #[serde(default)]
    pub explanation: String,
    pub clarity_and_readability: SubScore,
    pub impact_and_achievements: SubScore,
    pub structure_and_formatting: SubScore,
}

/// Aggregate produced by one successful analysis run. All-or-nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub extracted_data: ExtractedResume,
    pub summary: String,
    pub clarity: ClarityReport,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsGapResult {
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub in_demand_skills: Vec<String>,
    #[serde(default)]
    pub ats_optimization_opportunities: String,
    #[serde(default)]
    pub to_learn_or_add: String,
}

/// Output of the ATS upscale. The rewritten text replaces the original
/// wholesale; the explanation is shown alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpscaleResult {
    pub upscaled_resume_text: String,
    pub explanation: String,
}
