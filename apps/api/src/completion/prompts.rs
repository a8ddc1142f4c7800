// Prompt templates for every completion operation.
// Placeholders in `{braces}` are substituted with `.replace()` before sending.
// Shared fragments live in llm_client::prompts.

/// Role preamble for every resume operation. Combined with
/// `JSON_ONLY_SYSTEM` to form the system prompt.
pub const RESUME_EXPERT_ROLE: &str =
    "You are an expert resume writer, recruiter and career coach.";

/// Sent as the text block after the PDF document block.
pub const EXTRACT_RESUME_DATA_PROMPT: &str = r#"You are an expert resume parser. Extract the information from the attached resume.

Return a JSON object with this EXACT schema (omit optional fields that are not present, no extra fields):
{
  "personal_details": {
    "name": "Full name",
    "email": "email@example.com",
    "phone": "optional",
    "location": "optional"
  },
  "skills": ["Skill"],
  "work_experience": [
    {
      "title": "Job title",
      "company": "Company name",
      "start_date": "Start date exactly as written",
      "end_date": "optional, omit if current",
      "description": "What the person did"
    }
  ],
  "education": [
    {
      "institution": "Institution name",
      "degree": "Degree name",
      "start_date": "Start date exactly as written",
      "end_date": "optional",
      "description": "optional"
    }
  ],
  "projects": [
    {"name": "Project name", "description": "Project description"}
  ],
  "keywords": ["keyword"]
}

Copy dates verbatim. Do NOT invent information that is not in the document."#;

/// Replace: {personal_details}, {skills}, {experience}, {education}, {projects}
pub const CONCISE_SUMMARY_PROMPT: &str = r#"Given the following details, create a concise, professional 2-line summary highlighting core strengths, key skills, and differentiators, tailored for recruiter attention.

Personal Details: {personal_details}
Skills: {skills}
Experience: {experience}
Education: {education}
Projects: {projects}

Return a JSON object:
{
  "summary": "The two-line summary"
}"#;

/// Replace: {resume_text}
pub const RATE_CLARITY_PROMPT: &str = r#"Score the resume below against the rubric.

RESUME TEXT:
---
{resume_text}
---

RUBRIC (score each criterion from 1 to 10 and explain the score in one or two sentences):

1. Clarity and Readability: clear, concise language; no jargon or buzzwords; well-structured sentences.
2. Impact and Achievements: strong action verbs; quantified results ("Increased sales by 20%"); accomplishments over duties.
3. Structure and Formatting: clean, scannable layout; clear hierarchy of headings; consistent formatting.

Return a JSON object with this EXACT schema:
{
  "clarity_score": 7.3,
  "explanation": "One-sentence overall explanation",
  "clarity_and_readability": {"score": 8, "explanation": "..."},
  "impact_and_achievements": {"score": 7, "explanation": "..."},
  "structure_and_formatting": {"score": 7, "explanation": "..."}
}

`clarity_score` is the average of the three sub-scores."#;

/// Replace: {resume_text}
pub const SUGGEST_IMPROVEMENTS_PROMPT: &str = r#"Given the following resume text, provide a list of specific, actionable suggestions for improvement. Focus on content, clarity, and impact. Suggestions should be section-specific.

RESUME TEXT:
{resume_text}

Return a JSON object:
{
  "suggestions": ["Experience: quantify the latency reduction in your second role."]
}"#;

/// Replace: {resume_text}, {job_description}
pub const SKILLS_GAP_PROMPT: &str = r#"Compare the resume below against the job description and identify any skills gaps.

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}

Return a JSON object with this EXACT schema:
{
  "missing_keywords": ["Keywords in the job description missing from the resume"],
  "in_demand_skills": ["In-demand skills from the job description not present in the resume"],
  "ats_optimization_opportunities": "Suggestions for optimizing the resume for Applicant Tracking Systems",
  "to_learn_or_add": "A targeted list of skills to learn or add to the resume"
}"#;

/// Replace: {context_block}, {text}
pub const REWRITE_SECTION_PROMPT: &str = r#"Rewrite the following resume section to be more impactful, professional, and concise. Use action verbs and quantify achievements where possible.
{context_block}
ORIGINAL TEXT:
"{text}"

Rewrite the text to highlight skills and accomplishments effectively.

Return a JSON object:
{
  "rewritten_text": "The rewritten section"
}"#;

/// Replace: {context}
pub const REWRITE_CONTEXT_BLOCK: &str =
    "\nContext for this section (e.g., job title, company): {context}\n";

/// Replace: {user_name}, {resume_text}, {job_description}
pub const COVER_LETTER_PROMPT: &str = r#"Write a compelling, professional, and personalized cover letter for a job application.

The applicant's name is: {user_name}

RESUME:
---
{resume_text}
---

JOB DESCRIPTION:
---
{job_description}
---

The cover letter must:
1. Be addressed to the "Hiring Manager" unless a specific name is available in the job description.
2. Highlight the most relevant skills and experiences from the resume that match the job requirements.
3. Use a professional and confident tone.
4. Quantify achievements where possible, connecting past accomplishments to future contributions.
5. Have an introduction, body paragraphs, and a conclusion with a strong call to action.
6. Be formatted in Markdown.

Do NOT invent any information. Base the entire letter on the resume and job description.

Return a JSON object:
{
  "cover_letter": "The Markdown cover letter"
}"#;

/// Replace: {resume_text}, {job_description}
pub const UPSCALE_FOR_ATS_PROMPT: &str = r#"Rewrite the resume below so it is tailored to the target job description and scores 9/10 or higher in Applicant Tracking Systems.

ORIGINAL RESUME:
---
{resume_text}
---

TARGET JOB DESCRIPTION:
---
{job_description}
---

Instructions:
1. Identify the critical keywords, skills, technologies and qualifications in the job description and integrate them into the experience, skills and summary sections.
2. Start experience bullets with strong, results-oriented action verbs.
3. Quantify achievements wherever possible.
4. Keep a clean, ATS-friendly format with standard section headers ("Work Experience", "Skills", "Education").
5. Rewrite the summary as a 2-3 sentence pitch mirroring the core requirements of the job.

Return a JSON object:
{
  "upscaled_resume_text": "The complete rewritten resume",
  "explanation": "Brief summary of the most important changes and why they improve the ATS score"
}"#;
