//! Free-form document analysis. Same extraction front end as scoring, but
//! the model's reply is returned as-is instead of being parsed.

use std::str::FromStr;

use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::ats::error::AtsError;
use crate::ats::extractor::TextExtractor;
use crate::llm_client::prompts::{
    GENERAL_ANALYSIS_PROMPT, JOB_DESCRIPTION_ANALYSIS_PROMPT, RESUME_ANALYSIS_PROMPT,
};
use crate::llm_client::{GenerationConfig, TextGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    Resume,
    JobDescription,
    #[default]
    General,
}

impl AnalysisKind {
    fn template(self) -> &'static str {
        match self {
            AnalysisKind::Resume => RESUME_ANALYSIS_PROMPT,
            AnalysisKind::JobDescription => JOB_DESCRIPTION_ANALYSIS_PROMPT,
            AnalysisKind::General => GENERAL_ANALYSIS_PROMPT,
        }
    }

    pub fn build_prompt(self, text: &str) -> String {
        self.template().replace("{text}", text)
    }
}

impl FromStr for AnalysisKind {
    type Err = AtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resume" => Ok(AnalysisKind::Resume),
            "job_description" => Ok(AnalysisKind::JobDescription),
            "" | "general" => Ok(AnalysisKind::General),
            other => Err(AtsError::InvalidInput(format!(
                "unknown analysis kind '{other}' (expected resume, job_description or general)"
            ))),
        }
    }
}

pub async fn analyze_document(
    file_bytes: Bytes,
    mime_type: &str,
    kind: AnalysisKind,
    extractor: &TextExtractor,
    generator: &dyn TextGenerator,
) -> Result<String, AtsError> {
    let text = extractor.extract(file_bytes, mime_type).await?;
    info!("Analyzing {} chars as {:?}", text.len(), kind);

    let analysis = generator
        .generate(&kind.build_prompt(&text), &GenerationConfig::analytical())
        .await?;
    Ok(analysis)
}
