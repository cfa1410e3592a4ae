use thiserror::Error;

use crate::llm_client::GenerationError;

/// Failures that abort an ATS run. Parse irregularities in the model reply
/// are deliberately absent: the response parser absorbs them.
#[derive(Debug, Error)]
pub enum AtsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Could not extract readable text from the CV")]
    NoReadableText,

    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),
}
