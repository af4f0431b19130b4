//! Markdown rendering for OCR documents.

use rayon::prelude::*;

use crate::markup::{self, Token};
use crate::model::{Document, Page};

use super::options::{ImageHandling, RenderOptions};

/// Convert a document to Markdown with image references resolved.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> String {
    let pages: Vec<String> = doc
        .pages
        .par_iter()
        .enumerate()
        .map(|(idx, page)| render_page(page, idx as u32 + 1, options))
        .collect();

    pages.join(&options.page_separator)
}

fn render_page(page: &Page, page_number: u32, options: &RenderOptions) -> String {
    if !markup::has_image_reference(&page.markdown) {
        return page.markdown.clone();
    }

    let mut out = String::with_capacity(page.markdown.len());
    for token in markup::tokenize(&page.markdown) {
        match token {
            Token::Text(text) => out.push_str(text),
            Token::Image { alt, target } => {
                let id = target.trim();
                let Some(image) = page.find_image(id) else {
                    log::warn!(
                        "unresolved image reference '{}' on page {}",
                        id,
                        page_number
                    );
                    continue;
                };

                match options.image_handling {
                    ImageHandling::Inline => match image.data_uri() {
                        Some(uri) => push_reference(&mut out, alt, id, &uri),
                        None => log::warn!(
                            "image '{}' on page {} has no payload, reference dropped",
                            id,
                            page_number
                        ),
                    },
                    ImageHandling::Referenced => {
                        let path = format!("{}{}", options.image_path_prefix, id);
                        push_reference(&mut out, alt, id, &path);
                    }
                    ImageHandling::Strip => {}
                }
            }
        }
    }

    out
}

fn push_reference(out: &mut String, alt: &str, id: &str, target: &str) {
    let alt = if alt.is_empty() { id } else { alt };
    out.push_str("![");
    out.push_str(alt);
    out.push_str("](");
    out.push_str(target);
    out.push(')');
}
