//! Pipeline Orchestrator: extraction → prompt → generation → parse for one request.
//!
//! Input problems short-circuit before the model is called. Once a reply
//! exists the parser always yields a result, so nothing after the call fails.

use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use crate::ats::error::AtsError;
use crate::ats::extractor::TextExtractor;
use crate::ats::models::ScoreResult;
use crate::ats::parser::parse_score_reply;
use crate::ats::prompts::build_ats_prompt;
use crate::llm_client::{GenerationConfig, TextGenerator};

/// One scoring request. Lives only for the duration of the run.
#[derive(Debug, Clone)]
pub struct ExtractionInput {
    pub file_bytes: Bytes,
    pub mime_type: String,
    pub job_description: String,
}

pub async fn score_resume(
    input: ExtractionInput,
    extractor: &TextExtractor,
    generator: &dyn TextGenerator,
) -> Result<ScoreResult, AtsError> {
    if input.job_description.trim().is_empty() {
        return Err(AtsError::InvalidInput("job description is required".to_string()));
    }

    let run_id = Uuid::new_v4();
    info!(
        "ATS run {run_id}: extracting {} bytes declared as {}",
        input.file_bytes.len(),
        input.mime_type
    );

    let cv_text = extractor
        .extract(input.file_bytes, &input.mime_type)
        .await?;
    info!("ATS run {run_id}: extracted {} chars of CV text", cv_text.len());

    let prompt = build_ats_prompt(&cv_text, &input.job_description);
    let reply = generator
        .generate(&prompt, &GenerationConfig::default())
        .await?;

    let outcome = parse_score_reply(&reply);
    if outcome.is_recovered() {
        warn!("ATS run {run_id}: reply was not valid JSON, recovered fields individually");
    }

    info!(
        "ATS run {run_id}: overall score {}",
        outcome.result().overall_score
    );
    Ok(outcome.into_result())
}
