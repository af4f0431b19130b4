//! Rendering options and configuration.

/// How image references are rendered in document-level output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageHandling {
    /// Rewrite reference targets to inline `data:` URIs
    #[default]
    Inline,
    /// Rewrite reference targets to paths under a prefix
    Referenced,
    /// Drop references, keeping surrounding text
    Strip,
}

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// How image references are rendered
    pub image_handling: ImageHandling,

    /// Prefix for image paths in output (e.g., "images/")
    pub image_path_prefix: String,

    /// Separator inserted between pages
    pub page_separator: String,

    /// Title of the generated HTML page
    pub html_title: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how image references are rendered.
    pub fn with_image_handling(mut self, handling: ImageHandling) -> Self {
        self.image_handling = handling;
        self
    }

    /// Set the prefix for image paths.
    pub fn with_image_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.image_path_prefix = prefix.into();
        self
    }

    /// Render references as paths under the given prefix.
    pub fn referenced_images(mut self, prefix: impl Into<String>) -> Self {
        self.image_handling = ImageHandling::Referenced;
        self.image_path_prefix = prefix.into();
        self
    }

    /// Drop image references from the output.
    pub fn strip_images(mut self) -> Self {
        self.image_handling = ImageHandling::Strip;
        self
    }

    /// Set the separator inserted between pages.
    pub fn with_page_separator(mut self, separator: impl Into<String>) -> Self {
        self.page_separator = separator.into();
        self
    }

    /// Set the HTML page title.
    pub fn with_html_title(mut self, title: impl Into<String>) -> Self {
        self.html_title = title.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            image_handling: ImageHandling::Inline,
            image_path_prefix: String::new(),
            page_separator: "\n\n".to_string(),
            html_title: "OCR Result".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .referenced_images("images/")
            .with_page_separator("\n---\n")
            .with_html_title("Scan");

        assert_eq!(options.image_handling, ImageHandling::Referenced);
        assert_eq!(options.image_path_prefix, "images/");
        assert_eq!(options.page_separator, "\n---\n");
        assert_eq!(options.html_title, "Scan");
    }

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.image_handling, ImageHandling::Inline);
        assert!(options.image_path_prefix.is_empty());
        assert_eq!(options.page_separator, "\n\n");
        assert_eq!(options.html_title, "OCR Result");
    }

    #[test]
    fn test_strip_images() {
        let options = RenderOptions::new().strip_images();
        assert_eq!(options.image_handling, ImageHandling::Strip);
    }
}
