//! Optical character recognition via the `tesseract` command-line tool.
//!
//! Runs as a child process under `tokio::process`, so a slow recognition
//! never blocks other requests on the runtime.

use tokio::process::Command;
use tracing::debug;

use crate::ats::error::AtsError;

/// Recognition language model. Fixed: CVs are assumed to be English.
pub const OCR_LANGUAGE: &str = "eng";

#[derive(Debug, Clone)]
pub struct TesseractOcr {
    binary: String,
}

impl TesseractOcr {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Recognizes text in an encoded image (PNG, JPEG, TIFF, ...).
    ///
    /// The image is staged in a temp file that is removed when this returns.
    pub async fn recognize(&self, image: &[u8]) -> Result<String, AtsError> {
        let staged = tempfile::Builder::new()
            .prefix("hr-api-ocr-")
            .tempfile()
            .map_err(|e| AtsError::Extraction(format!("Failed to stage image for OCR: {e}")))?;

        tokio::fs::write(staged.path(), image)
            .await
            .map_err(|e| AtsError::Extraction(format!("Failed to stage image for OCR: {e}")))?;

        let output = Command::new(&self.binary)
            .arg(staged.path())
            .arg("stdout")
            .args(["-l", OCR_LANGUAGE])
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                AtsError::Extraction(format!("Failed to run OCR binary '{}': {e}", self.binary))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AtsError::Extraction(format!(
                "OCR exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("OCR recognized {} chars", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_binary_is_extraction_error() {
        let ocr = TesseractOcr::new("hr-api-no-such-ocr-binary");
        let err = ocr.recognize(b"\x89PNG").await.unwrap_err();
        match err {
            AtsError::Extraction(msg) => assert!(msg.contains("hr-api-no-such-ocr-binary")),
            other => panic!("expected Extraction, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_invocation_passes_stdout_and_language() {
        // `echo` stands in for tesseract and reflects its argv back.
        let ocr = TesseractOcr::new("echo");
        let text = ocr.recognize(b"image bytes").await.unwrap();
        assert!(text.trim_end().ends_with("stdout -l eng"), "got {text:?}");
        assert!(text.contains("hr-api-ocr-"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_is_extraction_error() {
        let ocr = TesseractOcr::new("false");
        assert!(matches!(
            ocr.recognize(b"image bytes").await,
            Err(AtsError::Extraction(_))
        ));
    }
}
