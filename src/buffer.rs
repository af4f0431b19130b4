//! Editable document buffer.
//!
//! A [`DocumentBuffer`] is the in-memory, editable form of a loaded OCR
//! document: one [`ParagraphBlock`] per non-empty line of page markup,
//! with inline image references resolved against each page's image list.
//! The buffer is the sole mutable state of the pipeline. Blocks are built
//! fresh on every compose, edited in place, and read out in order at
//! export time.
//!
//! Compose rules, applied per page in document order:
//!
//! 1. The markup is tokenized into text and image-reference tokens.
//! 2. An image token resolves when its trimmed target equals an image
//!    identifier on the same page and that image has a payload; resolved
//!    images attach to the current line, unresolved references are dropped
//!    and logged.
//! 3. Text splits on line breaks (`\n`, `\r\n`, or lone `\r`).
//! 4. A finished line becomes a block iff its text is non-empty after
//!    trimming or it carries at least one resolved image. Block text keeps
//!    the line's spacing as written; only the keep/drop test trims.

use std::mem;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::markup::{self, Token};
use crate::model::{Document, Page};

/// An image resolved into a paragraph block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockImage {
    /// Trimmed identifier of the source image
    pub id: String,

    /// Display source (a `data:` URI)
    pub src: String,

    /// Alt text: the reference label, or the identifier when the label
    /// was empty
    pub alt: String,
}

/// One editable unit of text, derived from a single line of page markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphBlock {
    /// Current plain text (image markup stripped, spacing as written)
    pub text: String,

    /// Images resolved for this line, in reference order
    pub images: Vec<BlockImage>,

    /// Source page number (1-indexed)
    pub page: u32,
}

impl ParagraphBlock {
    /// Check whether the block carries any resolved images.
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}

/// Ordered, editable collection of paragraph blocks.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuffer {
    blocks: Vec<ParagraphBlock>,
}

impl DocumentBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose a buffer from a loaded document.
    ///
    /// Pages are processed independently and results keep page-then-line
    /// order.
    pub fn from_document(document: &Document) -> Self {
        let blocks: Vec<ParagraphBlock> = document
            .pages
            .par_iter()
            .enumerate()
            .map(|(idx, page)| compose_page(page, idx as u32 + 1))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect();

        log::debug!(
            "composed {} blocks from {} pages",
            blocks.len(),
            document.page_count()
        );

        Self { blocks }
    }

    /// All blocks in document order.
    pub fn blocks(&self) -> &[ParagraphBlock] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check whether the buffer holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get a block by index.
    pub fn get(&self, index: usize) -> Option<&ParagraphBlock> {
        self.blocks.get(index)
    }

    /// Get a mutable block by index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut ParagraphBlock> {
        self.blocks.get_mut(index)
    }

    /// Replace the text of the block at `index`.
    ///
    /// Empty text is allowed; the block still exports as an empty
    /// paragraph.
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let len = self.blocks.len();
        match self.blocks.get_mut(index) {
            Some(block) => {
                block.text = text.into();
                Ok(())
            }
            None => Err(Error::BlockOutOfRange(index, len)),
        }
    }

    /// Current block texts joined with line breaks.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Compose the blocks of a single page.
fn compose_page(page: &Page, page_number: u32) -> Vec<ParagraphBlock> {
    let mut blocks = Vec::new();
    let mut text = String::new();
    let mut images = Vec::new();

    for token in markup::tokenize(&page.markdown) {
        match token {
            Token::Text(span) => {
                let mut rest = span;
                while let Some(at) = rest.find(['\n', '\r']) {
                    text.push_str(&rest[..at]);
                    finish_line(&mut text, &mut images, &mut blocks, page_number);

                    let bytes = rest.as_bytes();
                    let next = if bytes[at] == b'\r' && bytes.get(at + 1) == Some(&b'\n') {
                        at + 2
                    } else {
                        at + 1
                    };
                    rest = &rest[next..];
                }
                text.push_str(rest);
            }
            Token::Image { alt, target } => {
                let id = target.trim();
                match page.find_image(id) {
                    Some(image) => match image.data_uri() {
                        Some(src) => images.push(BlockImage {
                            id: id.to_string(),
                            src,
                            alt: if alt.is_empty() {
                                id.to_string()
                            } else {
                                alt.to_string()
                            },
                        }),
                        None => log::warn!(
                            "image '{}' on page {} has no payload, reference dropped",
                            id,
                            page_number
                        ),
                    },
                    None => log::warn!(
                        "unresolved image reference '{}' on page {}",
                        id,
                        page_number
                    ),
                }
            }
        }
    }
    finish_line(&mut text, &mut images, &mut blocks, page_number);

    blocks
}

fn finish_line(
    text: &mut String,
    images: &mut Vec<BlockImage>,
    blocks: &mut Vec<ParagraphBlock>,
    page: u32,
) {
    if !text.trim().is_empty() || !images.is_empty() {
        blocks.push(ParagraphBlock {
            text: mem::take(text),
            images: mem::take(images),
            page,
        });
    } else {
        text.clear();
        images.clear();
    }
}
