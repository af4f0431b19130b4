//! OCR result JSON loading.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::model::Document;

/// OCR result parser.
pub struct OcrParser {
    data: Vec<u8>,
}

impl OcrParser {
    /// Open an OCR result file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            data: fs::read(path)?,
        })
    }

    /// Load an OCR result from bytes.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Load an OCR result from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self { data })
    }

    /// Open an OCR result file asynchronously.
    #[cfg(feature = "async")]
    pub async fn open_async<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = tokio::fs::read(path).await?;
        Ok(Self { data })
    }

    /// Parse the loaded bytes into a document.
    pub fn parse(&self) -> Result<Document> {
        let data = strip_bom(&self.data);
        let document: Document = serde_json::from_slice(data)?;
        log::debug!(
            "parsed OCR result: {} pages, {} images",
            document.page_count(),
            document.image_count()
        );
        Ok(document)
    }
}

// Editors saving JSON re-exports sometimes prepend a UTF-8 BOM, which
// serde_json rejects.
fn strip_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    const MINIMAL: &str = r#"{"pages":[{"markdown":"Hello","images":[]}]}"#;

    #[test]
    fn test_parse_from_bytes() {
        let doc = OcrParser::from_bytes(MINIMAL.as_bytes()).parse().unwrap();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.pages[0].markdown, "Hello");
    }

    #[test]
    fn test_parse_from_reader() {
        let reader = std::io::Cursor::new(MINIMAL.as_bytes());
        let doc = OcrParser::from_reader(reader).unwrap().parse().unwrap();
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_parse_strips_bom() {
        let mut data = vec![0xEF, 0xBB, 0xBF];
        data.extend_from_slice(MINIMAL.as_bytes());
        let doc = OcrParser::from_bytes(&data).parse().unwrap();
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = OcrParser::from_bytes(b"{not json").parse().unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_open_missing_file() {
        let err = OcrParser::open("no/such/file.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_open_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let doc = OcrParser::open(file.path()).unwrap().parse().unwrap();
        assert_eq!(doc.page_count(), 1);
    }
}
