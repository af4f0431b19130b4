//! Document model types for OCR output.
//!
//! This module defines the immutable wire model read from OCR result JSON.
//! It is the input side of the pipeline; the editable representation lives
//! in [`crate::buffer`].

mod document;
mod image;
mod page;

pub use document::{Document, UsageInfo};
pub use image::PageImage;
pub use page::{Page, PageDimensions};
