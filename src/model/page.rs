//! Page-level types.

use serde::{Deserialize, Serialize};

use super::PageImage;

/// A single page of OCR output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    /// Page index as reported by the OCR service (0-based, may be absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,

    /// Page text in lightweight markup
    #[serde(default)]
    pub markdown: String,

    /// Images embedded in this page, in service order
    #[serde(default)]
    pub images: Vec<PageImage>,

    /// Physical page dimensions, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<PageDimensions>,
}

impl Page {
    /// Create a page from markup text.
    pub fn new(markdown: impl Into<String>) -> Self {
        Self {
            index: None,
            markdown: markdown.into(),
            images: Vec::new(),
            dimensions: None,
        }
    }

    /// Add an image to the page.
    pub fn add_image(&mut self, image: PageImage) {
        self.images.push(image);
    }

    /// Add an image to the page (builder form).
    pub fn with_image(mut self, image: PageImage) -> Self {
        self.images.push(image);
        self
    }

    /// Look up an image by identifier.
    ///
    /// Reference targets are trimmed before lookup; identifiers themselves
    /// must match exactly.
    pub fn find_image(&self, id: &str) -> Option<&PageImage> {
        self.images.iter().find(|img| img.id == id)
    }

    /// Number of images on this page.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Check whether the page has any images.
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    /// Check whether the page markup is empty or whitespace only.
    pub fn is_empty(&self) -> bool {
        self.markdown.trim().is_empty()
    }
}

/// Page dimensions as reported by the OCR service.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PageDimensions {
    /// Dots per inch
    #[serde(default)]
    pub dpi: u32,

    /// Page height in pixels
    #[serde(default)]
    pub height: u32,

    /// Page width in pixels
    #[serde(default)]
    pub width: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_new() {
        let page = Page::new("Hello");
        assert_eq!(page.markdown, "Hello");
        assert!(!page.has_images());
        assert!(!page.is_empty());
    }

    #[test]
    fn test_page_is_empty() {
        assert!(Page::new("").is_empty());
        assert!(Page::new("  \n\t  ").is_empty());
        assert!(!Page::new("x").is_empty());
    }

    #[test]
    fn test_find_image() {
        let page = Page::new("![a](img1)")
            .with_image(PageImage::new("img1", "AAAA"))
            .with_image(PageImage::new("img2", "BBBB"));

        assert!(page.find_image("img1").is_some());
        assert!(page.find_image("img3").is_none());
        // Identifiers match exactly, no trimming on the stored side
        assert!(page.find_image(" img1").is_none());
        assert_eq!(page.image_count(), 2);
    }

    #[test]
    fn test_page_deserialize_minimal() {
        let page: Page = serde_json::from_str(r#"{"markdown":"Hi"}"#).unwrap();
        assert_eq!(page.markdown, "Hi");
        assert!(page.images.is_empty());
        assert!(page.index.is_none());
        assert!(page.dimensions.is_none());
    }

    #[test]
    fn test_page_deserialize_full() {
        let json = r#"{
            "index": 0,
            "markdown": "![img-0.jpeg](img-0.jpeg)",
            "images": [{"id": "img-0.jpeg", "image_base64": "data:image/jpeg;base64,AAAA"}],
            "dimensions": {"dpi": 200, "height": 2200, "width": 1700}
        }"#;
        let page: Page = serde_json::from_str(json).unwrap();
        assert_eq!(page.index, Some(0));
        assert_eq!(page.image_count(), 1);
        assert_eq!(page.dimensions.unwrap().dpi, 200);
    }
}
