//! Plain text rendering for OCR documents.

use rayon::prelude::*;

use crate::markup;
use crate::model::Document;

use super::options::RenderOptions;

/// Convert a document to plain text.
///
/// Image references are stripped entirely; pages join with the configured
/// separator.
pub fn to_text(doc: &Document, options: &RenderOptions) -> String {
    let pages: Vec<String> = doc
        .pages
        .par_iter()
        .map(|page| markup::strip_image_references(&page.markdown))
        .collect();

    pages.join(&options.page_separator).trim().to_string()
}
