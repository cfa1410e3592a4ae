//! Text Extractor: turns an uploaded CV (plain text, PDF or image) into raw text.

use bytes::Bytes;

use crate::ats::error::AtsError;
use crate::ats::ocr::TesseractOcr;

/// The closed set of upload formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    PlainText,
    Pdf,
    Image,
}

impl FileKind {
    /// Dispatches on the declared MIME type. Parameters (`; charset=...`)
    /// are ignored and the comparison is case-insensitive.
    pub fn from_mime(mime: &str) -> Result<Self, AtsError> {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "text/plain" => Ok(FileKind::PlainText),
            "application/pdf" => Ok(FileKind::Pdf),
            m if m.starts_with("image/") => Ok(FileKind::Image),
            _ => Err(AtsError::UnsupportedFileType(mime.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextExtractor {
    ocr: TesseractOcr,
}

impl TextExtractor {
    pub fn new(ocr: TesseractOcr) -> Self {
        Self { ocr }
    }

    /// Extracts text, failing with `NoReadableText` if nothing but
    /// whitespace comes out.
    pub async fn extract(&self, bytes: Bytes, mime: &str) -> Result<String, AtsError> {
        let text = match FileKind::from_mime(mime)? {
            FileKind::PlainText => String::from_utf8_lossy(&bytes).into_owned(),
            FileKind::Pdf => extract_pdf(bytes).await?,
            FileKind::Image => self.ocr.recognize(&bytes).await?,
        };

        if text.trim().is_empty() {
            return Err(AtsError::NoReadableText);
        }
        Ok(text)
    }
}

/// pdf-extract is synchronous and can panic on hostile input, so it runs on
/// the blocking pool; a panic surfaces as a join error.
async fn extract_pdf(bytes: Bytes) -> Result<String, AtsError> {
    tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| AtsError::Extraction(format!("Failed to read PDF: {e}")))
    })
    .await
    .map_err(|e| AtsError::Extraction(format!("PDF extraction task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> TextExtractor {
        TextExtractor::new(TesseractOcr::new("hr-api-no-such-ocr-binary"))
    }

    #[test]
    fn test_from_mime_dispatch() {
        assert_eq!(FileKind::from_mime("text/plain").unwrap(), FileKind::PlainText);
        assert_eq!(
            FileKind::from_mime("Text/Plain; charset=utf-8").unwrap(),
            FileKind::PlainText
        );
        assert_eq!(FileKind::from_mime("application/pdf").unwrap(), FileKind::Pdf);
        assert_eq!(FileKind::from_mime("image/png").unwrap(), FileKind::Image);
        assert_eq!(FileKind::from_mime("image/jpeg").unwrap(), FileKind::Image);
    }

    #[test]
    fn test_octet_stream_is_unsupported() {
        match FileKind::from_mime("application/octet-stream") {
            Err(AtsError::UnsupportedFileType(m)) => assert_eq!(m, "application/octet-stream"),
            other => panic!("expected UnsupportedFileType, got {other:?}"),
        }
    }

    #[test]
    fn test_word_documents_are_unsupported() {
        assert!(FileKind::from_mime(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        )
        .is_err());
    }

    #[tokio::test]
    async fn test_plain_text_is_decoded() {
        let text = extractor()
            .extract(Bytes::from_static(b"John Doe, Python, AWS"), "text/plain")
            .await
            .unwrap();
        assert_eq!(text, "John Doe, Python, AWS");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced_not_rejected() {
        let text = extractor()
            .extract(Bytes::from_static(b"Jane \xff Doe"), "text/plain")
            .await
            .unwrap();
        assert!(text.starts_with("Jane "));
        assert!(text.ends_with(" Doe"));
    }

    #[tokio::test]
    async fn test_whitespace_only_text_is_no_readable_text() {
        let err = extractor()
            .extract(Bytes::from_static(b"  \n\t  "), "text/plain")
            .await
            .unwrap_err();
        assert!(matches!(err, AtsError::NoReadableText));
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_extraction_error() {
        let err = extractor()
            .extract(Bytes::from_static(b"definitely not a pdf"), "application/pdf")
            .await
            .unwrap_err();
        assert!(matches!(err, AtsError::Extraction(_)));
    }

    #[tokio::test]
    async fn test_image_goes_through_ocr() {
        let err = extractor()
            .extract(Bytes::from_static(b"\x89PNG"), "image/png")
            .await
            .unwrap_err();
        assert!(matches!(err, AtsError::Extraction(_)));
    }
}
