//! # unocr
//!
//! OCR result processing library for Rust.
//!
//! This library loads JSON output from OCR engines, substitutes image
//! references with their embedded payloads, splits page text into an
//! editable paragraph buffer, and exports to DOCX, Markdown, HTML,
//! plain text, and JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unocr::{load_file, render};
//!
//! fn main() -> unocr::Result<()> {
//!     // Load an OCR result file
//!     let doc = load_file("result.json")?;
//!
//!     // Convert to Markdown with images inlined
//!     let options = render::RenderOptions::default();
//!     let markdown = render::to_markdown(&doc, &options);
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Editing and exporting
//!
//! ```no_run
//! use unocr::{load_file, DocumentBuffer};
//!
//! fn main() -> unocr::Result<()> {
//!     let doc = load_file("result.json")?;
//!
//!     // Split pages into editable paragraph blocks
//!     let mut buffer = DocumentBuffer::from_document(&doc);
//!     buffer.set_text(0, "Corrected first line")?;
//!
//!     // One DOCX paragraph per block, in block order
//!     unocr::write_docx_file(&buffer, "document.docx")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Multiple output formats**: DOCX, Markdown, HTML, plain text, JSON
//! - **Image substitution**: References resolved against embedded payloads
//! - **Editable buffer**: Line-level paragraph blocks with free-text edits
//! - **Image extraction**: Decode embedded payloads to files
//! - **Parallel processing**: Uses Rayon for multi-page documents

pub mod buffer;
pub mod error;
pub mod export;
pub mod markup;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use buffer::{BlockImage, DocumentBuffer, ParagraphBlock};
pub use error::{Error, Result};
pub use export::{to_docx_bytes, write_docx, write_docx_file, DEFAULT_FILE_NAME};
pub use model::{Document, Page, PageDimensions, PageImage, UsageInfo};
pub use parser::OcrParser;
pub use render::{ImageHandling, JsonFormat, RenderOptions};

use std::io::Read;
use std::path::Path;

/// Load an OCR result file and return the document.
///
/// # Arguments
///
/// * `path` - Path to the OCR result JSON file
///
/// # Returns
///
/// A `Result` containing the parsed `Document` or an error.
///
/// # Example
///
/// ```no_run
/// use unocr::load_file;
///
/// let doc = load_file("result.json").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = OcrParser::open(path)?;
    parser.parse()
}

/// Load an OCR result from bytes.
///
/// # Arguments
///
/// * `data` - OCR result JSON as bytes
///
/// # Example
///
/// ```no_run
/// use unocr::load_bytes;
///
/// let data = std::fs::read("result.json").unwrap();
/// let doc = load_bytes(&data).unwrap();
/// ```
pub fn load_bytes(data: &[u8]) -> Result<Document> {
    OcrParser::from_bytes(data).parse()
}

/// Load an OCR result from a JSON string.
pub fn load_str(json: &str) -> Result<Document> {
    OcrParser::from_bytes(json.as_bytes()).parse()
}

/// Load an OCR result from a reader.
///
/// # Arguments
///
/// * `reader` - Any type implementing `Read`
///
/// # Example
///
/// ```no_run
/// use unocr::load_reader;
/// use std::fs::File;
///
/// let file = File::open("result.json").unwrap();
/// let doc = load_reader(file).unwrap();
/// ```
pub fn load_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = OcrParser::from_reader(reader)?;
    parser.parse()
}

/// Extract plain text from an OCR result file.
///
/// Image references are stripped and pages are joined with blank
/// lines.
///
/// # Example
///
/// ```no_run
/// use unocr::extract_text;
///
/// let text = extract_text("result.json").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = load_file(path)?;
    Ok(doc.plain_text())
}

/// Convert an OCR result file to Markdown.
///
/// # Example
///
/// ```no_run
/// use unocr::to_markdown;
///
/// let markdown = to_markdown("result.json").unwrap();
/// std::fs::write("output.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = load_file(path)?;
    let options = RenderOptions::default();
    Ok(render::to_markdown(&doc, &options))
}

/// Convert an OCR result file to Markdown with custom options.
///
/// # Example
///
/// ```no_run
/// use unocr::{to_markdown_with_options, RenderOptions};
///
/// let options = RenderOptions::new().referenced_images("images/");
/// let markdown = to_markdown_with_options("result.json", &options).unwrap();
/// ```
pub fn to_markdown_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<String> {
    let doc = load_file(path)?;
    Ok(render::to_markdown(&doc, options))
}

/// Convert an OCR result file to a standalone HTML page.
///
/// # Example
///
/// ```no_run
/// use unocr::to_html;
///
/// let html = to_html("result.json").unwrap();
/// std::fs::write("output.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = load_file(path)?;
    let options = RenderOptions::default();
    Ok(render::to_html(&doc, &options))
}

/// Convert an OCR result file to plain text.
///
/// # Example
///
/// ```no_run
/// use unocr::{to_text, RenderOptions};
///
/// let text = to_text("result.json", &RenderOptions::default()).unwrap();
/// ```
pub fn to_text<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = load_file(path)?;
    Ok(render::to_text(&doc, options))
}

/// Re-serialize an OCR result file to JSON.
///
/// # Example
///
/// ```no_run
/// use unocr::{to_json, JsonFormat};
///
/// let json = to_json("result.json", JsonFormat::Pretty).unwrap();
/// std::fs::write("output.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = load_file(path)?;
    render::to_json(&doc, format)
}

/// Convert an OCR result file straight to a DOCX file.
///
/// Pages are split into paragraph blocks and written one paragraph
/// per block.
///
/// # Example
///
/// ```no_run
/// use unocr::export_docx;
///
/// export_docx("result.json", "document.docx").unwrap();
/// ```
pub fn export_docx<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let doc = load_file(input)?;
    let buffer = DocumentBuffer::from_document(&doc);
    write_docx_file(&buffer, output)
}

/// Builder for loading and converting OCR results.
///
/// # Example
///
/// ```no_run
/// use unocr::Unocr;
///
/// let markdown = Unocr::new()
///     .referenced_images("images/")
///     .with_page_separator("\n\n---\n\n")
///     .load("result.json")?
///     .to_markdown();
/// # Ok::<(), unocr::Error>(())
/// ```
pub struct Unocr {
    render_options: RenderOptions,
}

impl Unocr {
    /// Create a new Unocr builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Set how image references are rendered.
    pub fn with_image_handling(mut self, handling: ImageHandling) -> Self {
        self.render_options = self.render_options.with_image_handling(handling);
        self
    }

    /// Render image references as paths under a prefix.
    pub fn referenced_images(mut self, prefix: impl Into<String>) -> Self {
        self.render_options = self.render_options.referenced_images(prefix);
        self
    }

    /// Drop image references from rendered output.
    pub fn strip_images(mut self) -> Self {
        self.render_options = self.render_options.strip_images();
        self
    }

    /// Set the separator inserted between pages.
    pub fn with_page_separator(mut self, separator: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_page_separator(separator);
        self
    }

    /// Set the title of generated HTML pages.
    pub fn with_html_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_html_title(title);
        self
    }

    /// Load an OCR result file and return a result wrapper.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<UnocrResult> {
        let parser = OcrParser::open(path)?;
        let document = parser.parse()?;
        Ok(UnocrResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Load an OCR result from bytes.
    pub fn load_bytes(self, data: &[u8]) -> Result<UnocrResult> {
        let document = OcrParser::from_bytes(data).parse()?;
        Ok(UnocrResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Unocr {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of loading an OCR document.
pub struct UnocrResult {
    /// The loaded document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl UnocrResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to a standalone HTML page.
    pub fn to_html(&self) -> String {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document, &self.render_options)
    }

    /// Re-serialize to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Split the document into an editable paragraph buffer.
    pub fn buffer(&self) -> DocumentBuffer {
        DocumentBuffer::from_document(&self.document)
    }

    /// Get plain text with image references stripped.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Serialize the paragraph buffer as DOCX bytes.
    pub fn docx_bytes(&self) -> Result<Vec<u8>> {
        to_docx_bytes(&self.buffer())
    }

    /// Export the paragraph buffer as a DOCX file.
    pub fn export_docx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_docx_file(&self.buffer(), path)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
