//! Axum route handlers for the ATS API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;

use crate::ats::analysis::{analyze_document, AnalysisKind};
use crate::ats::models::ScoreResult;
use crate::ats::pipeline::{score_resume, ExtractionInput};
use crate::errors::AppError;
use crate::state::AppState;

/// MIME type assumed for file parts that do not declare one.
const OCTET_STREAM: &str = "application/octet-stream";

const MISSING_SCORE_INPUT: &str = "Please provide both a CV file and a job description.";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub kind: AnalysisKind,
    pub analysis: String,
}

/// An uploaded file part: its bytes and declared content type.
struct Upload {
    bytes: Bytes,
    mime_type: String,
}

/// POST /api/ats/score
///
/// Multipart form: `cv` (file) + `jobDescription` (text).
/// Returns the score, extracted resume info, category scores and suggestions.
pub async fn handle_score(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScoreResult>, AppError> {
    let mut cv: Option<Upload> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "cv" => {
                let mime_type = field.content_type().unwrap_or(OCTET_STREAM).to_string();
                let bytes = field.bytes().await?;
                cv = Some(Upload { bytes, mime_type });
            }
            "jobDescription" => job_description = Some(field.text().await?),
            _ => {
                field.bytes().await?;
            }
        }
    }

    let missing = || AppError::Validation(MISSING_SCORE_INPUT.to_string());
    let cv = cv.ok_or_else(missing)?;
    let job_description = job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(missing)?;

    let result = score_resume(
        ExtractionInput {
            file_bytes: cv.bytes,
            mime_type: cv.mime_type,
            job_description,
        },
        &state.extractor,
        state.generator.as_ref(),
    )
    .await?;

    Ok(Json(result))
}

/// POST /api/ats/analyze
///
/// Multipart form: `file` + optional `kind` (`resume` | `job_description` | `general`).
/// Returns the model's analysis text unparsed.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut file: Option<Upload> = None;
    let mut kind = AnalysisKind::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let mime_type = field.content_type().unwrap_or(OCTET_STREAM).to_string();
                let bytes = field.bytes().await?;
                file = Some(Upload { bytes, mime_type });
            }
            "kind" => kind = field.text().await?.parse()?,
            _ => {
                field.bytes().await?;
            }
        }
    }

    let file = file.ok_or_else(|| AppError::Validation("Please provide a file.".to_string()))?;

    let analysis = analyze_document(
        file.bytes,
        &file.mime_type,
        kind,
        &state.extractor,
        state.generator.as_ref(),
    )
    .await?;

    Ok(Json(AnalyzeResponse { kind, analysis }))
}
