// ATS scoring prompt. Key names here are the contract the response parser
// reads back, so keep the two in sync.

/// Instruction block sent ahead of the CV and job description.
pub const ATS_PROMPT_HEADER: &str = r#"As an advanced Applicant Tracking System (ATS), perform a comprehensive analysis of the candidate's CV against the job description:

Your response MUST be a valid JSON object enclosed within triple backticks (```json...```).

Task 1: Extract the following information from the CV in JSON format, using the exact keys specified:
- "name": Candidate's full name (string)
- "contact": Email and/or phone number (string)
- "skills": Key technical and soft skills (string, comma-separated if multiple)
- "education": Educational background including degrees, institutions, and graduation years (string)
- "experience": Work experience including job titles, companies, duration, and key achievements (string)

Task 2: Perform a detailed evaluation of the CV against the provided Job Description using the following criteria and calculate a weighted score for each category, along with an overall compatibility score as a percentage. All scores must be integers between 0 and 100.

1. Skills Match (30% weight): How well do the candidate's skills align with the job description?
2. Experience Relevance (30% weight): How relevant is the candidate's work experience to the role?
3. Education Alignment (15% weight): Does the candidate's education meet the job requirements?
4. Keyword Optimization (15% weight): Presence and density of important keywords from the job description.
5. Overall Presentation (10% weight): Clarity, organization, and professionalism of the CV.

Task 3: Provide brief, actionable improvement suggestions for the CV for this specific role.

Your JSON output must strictly adhere to this structure:
```json
{
  "name": "string",
  "contact": "string",
  "skills": "string",
  "education": "string",
  "experience": "string",
  "categoryScores": {
    "skillsMatch": integer (0-100),
    "experienceRelevance": integer (0-100),
    "educationAlignment": integer (0-100),
    "keywordOptimization": integer (0-100),
    "overallPresentation": integer (0-100)
  },
  "score": integer (0-100),
  "improvementSuggestions": "string"
}
```"#;

/// Builds the full scoring prompt. The CV and job description are appended
/// verbatim, never substituted into a template, so braces in user text are inert.
pub fn build_ats_prompt(cv_text: &str, job_description: &str) -> String {
    format!("{ATS_PROMPT_HEADER}\n\nCV:\n{cv_text}\n\nJob Description:\n{job_description}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_ends_with_cv_then_job_description() {
        let prompt = build_ats_prompt("John Doe, Python, AWS", "Seeking Python AWS engineer");
        assert!(prompt.ends_with(
            "CV:\nJohn Doe, Python, AWS\n\nJob Description:\nSeeking Python AWS engineer"
        ));
        assert!(prompt.starts_with("As an advanced Applicant Tracking System (ATS)"));
    }

    #[test]
    fn test_prompt_lists_weights() {
        for fragment in [
            "Skills Match (30% weight)",
            "Experience Relevance (30% weight)",
            "Education Alignment (15% weight)",
            "Keyword Optimization (15% weight)",
            "Overall Presentation (10% weight)",
        ] {
            assert!(ATS_PROMPT_HEADER.contains(fragment), "missing {fragment}");
        }
    }

    #[test]
    fn test_prompt_names_every_parsed_key_in_order() {
        let keys = [
            "\"name\"",
            "\"contact\"",
            "\"skills\"",
            "\"education\"",
            "\"experience\"",
            "\"categoryScores\"",
            "\"skillsMatch\"",
            "\"experienceRelevance\"",
            "\"educationAlignment\"",
            "\"keywordOptimization\"",
            "\"overallPresentation\"",
            "\"score\"",
            "\"improvementSuggestions\"",
        ];
        let schema_start = ATS_PROMPT_HEADER.find("```json\n{").unwrap();
        let schema = &ATS_PROMPT_HEADER[schema_start..];
        let mut cursor = 0;
        for key in keys {
            let pos = schema[cursor..]
                .find(key)
                .unwrap_or_else(|| panic!("{key} missing or out of order"));
            cursor += pos + key.len();
        }
    }

    #[test]
    fn test_braces_in_user_text_are_kept_verbatim() {
        let prompt = build_ats_prompt("{cv_text}", "{job_description}");
        assert!(prompt.ends_with("CV:\n{cv_text}\n\nJob Description:\n{job_description}"));
    }
}
