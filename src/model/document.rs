//! Document-level types.

use serde::{Deserialize, Serialize};

use super::Page;
use crate::markup;

/// A parsed OCR result document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Pages in service order
    #[serde(default)]
    pub pages: Vec<Page>,

    /// Name of the OCR model that produced the result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Processing statistics reported by the OCR service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_info: Option<UsageInfo>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            model: None,
            usage_info: None,
        }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Total number of embedded images across all pages.
    pub fn image_count(&self) -> usize {
        self.pages.iter().map(|p| p.image_count()).sum()
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Get plain text content of the entire document.
    ///
    /// Image references are stripped; pages are joined with blank lines.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| markup::strip_image_references(&page.markdown))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Processing statistics reported by the OCR service.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UsageInfo {
    /// Number of pages the service processed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages_processed: Option<u32>,

    /// Size of the submitted document in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_size_bytes: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageImage;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert_eq!(doc.image_count(), 0);
    }

    #[test]
    fn test_get_page_one_indexed() {
        let mut doc = Document::new();
        doc.add_page(Page::new("first"));
        doc.add_page(Page::new("second"));

        assert!(doc.get_page(0).is_none());
        assert_eq!(doc.get_page(1).unwrap().markdown, "first");
        assert_eq!(doc.get_page(2).unwrap().markdown, "second");
        assert!(doc.get_page(3).is_none());
    }

    #[test]
    fn test_image_count() {
        let mut doc = Document::new();
        doc.add_page(Page::new("a").with_image(PageImage::new("img1", "AAAA")));
        doc.add_page(Page::new("b"));
        doc.add_page(
            Page::new("c")
                .with_image(PageImage::new("img2", "BBBB"))
                .with_image(PageImage::new("img3", "CCCC")),
        );

        assert_eq!(doc.image_count(), 3);
    }

    #[test]
    fn test_plain_text_strips_references() {
        let mut doc = Document::new();
        doc.add_page(Page::new("Hello\n![x](img1)\nWorld"));
        doc.add_page(Page::new("Second page"));

        assert_eq!(doc.plain_text(), "Hello\n\nWorld\n\nSecond page");
    }

    #[test]
    fn test_document_deserialize_minimal() {
        let doc: Document = serde_json::from_str(r#"{"pages":[]}"#).unwrap();
        assert!(doc.is_empty());
        assert!(doc.model.is_none());

        // Unknown fields are ignored, absent pages default to empty
        let doc: Document = serde_json::from_str(r#"{"something_else":1}"#).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_document_deserialize_with_usage() {
        let json = r#"{
            "pages": [{"markdown": "Hi", "images": []}],
            "model": "ocr-latest",
            "usage_info": {"pages_processed": 1, "doc_size_bytes": 4096}
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.model.as_deref(), Some("ocr-latest"));
        assert_eq!(doc.usage_info.unwrap().pages_processed, Some(1));
    }
}
