use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::ats::error::AtsError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("No readable text")]
    NoReadableText,

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("LLM error: {0}")]
    Llm(String),
}

impl From<AtsError> for AppError {
    fn from(err: AtsError) -> Self {
        match err {
            AtsError::InvalidInput(msg) => AppError::Validation(msg),
            AtsError::UnsupportedFileType(mime) => AppError::UnsupportedFileType(mime),
            AtsError::NoReadableText => AppError::NoReadableText,
            AtsError::Extraction(msg) => AppError::Extraction(msg),
            AtsError::Generation(e) => AppError::Llm(e.to_string()),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge(err.body_text());
        }
        AppError::Validation(format!("Malformed multipart body: {}", err.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge(detail) => {
                tracing::warn!("Rejected oversize upload: {detail}");
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "PAYLOAD_TOO_LARGE",
                    "The uploaded file is too large.".to_string(),
                )
            }
            AppError::UnsupportedFileType(mime) => {
                tracing::warn!("Rejected upload with MIME type {mime}");
                (
                    StatusCode::BAD_REQUEST,
                    "UNSUPPORTED_FILE_TYPE",
                    "Unsupported file type. Please upload a text file, PDF, or image.".to_string(),
                )
            }
            AppError::NoReadableText => (
                StatusCode::BAD_REQUEST,
                "NO_READABLE_TEXT",
                "Could not extract readable text from the CV.".to_string(),
            ),
            AppError::Extraction(msg) => {
                tracing::error!("Extraction error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXTRACTION_ERROR",
                    "Error processing CV file.".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::GenerationError;

    fn status_of(err: AtsError) -> StatusCode {
        AppError::from(err).into_response().status()
    }

    #[test]
    fn test_input_failures_are_client_errors() {
        assert_eq!(
            status_of(AtsError::UnsupportedFileType("application/octet-stream".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(AtsError::NoReadableText), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(AtsError::InvalidInput("job description is required".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_payload_too_large_keeps_its_status() {
        let response = AppError::PayloadTooLarge("length limit exceeded".into()).into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_generation_and_extraction_failures_are_server_errors() {
        assert_eq!(
            status_of(AtsError::Generation(GenerationError::Timeout(60))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AtsError::Extraction("bad pdf".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
