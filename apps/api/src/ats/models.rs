use serde::{Deserialize, Serialize};

/// Candidate details pulled out of the CV. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub contact: String,
    pub skills: String,
    pub education: String,
    pub experience: String,
}

/// Per-category evaluation, each an integer in 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub skills_match: u8,
    pub experience_relevance: u8,
    pub education_alignment: u8,
    pub keyword_optimization: u8,
    pub overall_presentation: u8,
}

/// The only externally visible output of an ATS run. Always fully populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    #[serde(rename = "score")]
    pub overall_score: u8,
    #[serde(rename = "resumeInfo")]
    pub profile: CandidateProfile,
    pub category_scores: CategoryScores,
    pub improvement_suggestions: String,
}

/// Clamps any integer score into 0..=100.
pub fn clamp_score(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clamp_score_bounds() {
        assert_eq!(clamp_score(-5), 0);
        assert_eq!(clamp_score(150), 100);
        assert_eq!(clamp_score(82), 82);
        assert_eq!(clamp_score(i64::MIN), 0);
    }

    #[test]
    fn test_score_result_wire_shape() {
        let result = ScoreResult {
            overall_score: 82,
            profile: CandidateProfile {
                name: "John Doe".to_string(),
                ..Default::default()
            },
            category_scores: CategoryScores {
                skills_match: 90,
                ..Default::default()
            },
            improvement_suggestions: "Add metrics".to_string(),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "score": 82,
                "resumeInfo": {
                    "name": "John Doe",
                    "contact": "",
                    "skills": "",
                    "education": "",
                    "experience": ""
                },
                "categoryScores": {
                    "skillsMatch": 90,
                    "experienceRelevance": 0,
                    "educationAlignment": 0,
                    "keywordOptimization": 0,
                    "overallPresentation": 0
                },
                "improvementSuggestions": "Add metrics"
            })
        );
    }
}
