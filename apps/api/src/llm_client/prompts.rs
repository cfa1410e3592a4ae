// Shared prompt templates for free-text analysis.
// The ATS scoring prompt lives in ats/prompts.rs alongside its parser.

/// Resume analysis prompt template. Replace `{text}` before sending.
pub const RESUME_ANALYSIS_PROMPT: &str = r#"Analyze the following resume text and extract key information in JSON format:

Resume Text:
{text}

Please extract:
1. Personal information (name, contact details)
2. Skills categorized by type (technical, soft skills, etc.)
3. Work experience with details
4. Education history
5. Key achievements
6. Professional summary

Format the response as detailed JSON."#;

/// Job description analysis prompt template. Replace `{text}` before sending.
pub const JOB_DESCRIPTION_ANALYSIS_PROMPT: &str = r#"Analyze this job description and extract key requirements:

{text}

Please extract:
1. Required skills
2. Experience level needed
3. Education requirements
4. Key responsibilities
5. Preferred qualifications

Format as JSON."#;

/// Catch-all analysis prompt template. Replace `{text}` before sending.
pub const GENERAL_ANALYSIS_PROMPT: &str =
    "Analyze the following text and provide insights: {text}";
