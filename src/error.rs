//! Error types for unocr library.

use std::io;
use thiserror::Error;

/// Result type alias for unocr operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during OCR document processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid OCR result JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error serializing the DOCX output.
    #[error("DOCX write error: {0}")]
    Docx(#[from] docx_rust::DocxError),

    /// An image payload is not valid base64.
    #[error("Image payload decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// An image entry carries no embedded payload.
    #[error("Image '{0}' has no embedded payload")]
    MissingImagePayload(String),

    /// Block index is out of range.
    #[error("Block {0} is out of range (buffer has {1} blocks)")]
    BlockOutOfRange(usize, usize),

    /// Error during rendering (Markdown, HTML, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingImagePayload("img-0.jpeg".to_string());
        assert_eq!(err.to_string(), "Image 'img-0.jpeg' has no embedded payload");

        let err = Error::BlockOutOfRange(10, 5);
        assert_eq!(
            err.to_string(),
            "Block 10 is out of range (buffer has 5 blocks)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("JSON parse error"));
    }
}
