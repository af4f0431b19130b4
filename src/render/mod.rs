//! Document rendering to output formats.
//!
//! Renders work on the document level: image references in page
//! markup are substituted according to [`RenderOptions`] and pages
//! are joined with a configurable separator. For block-level output
//! see [`crate::buffer`] and [`crate::export`].

mod html;
mod json;
mod markdown;
mod options;
mod text;

pub use html::{markdown_to_html, to_html};
pub use json::{to_json, JsonFormat};
pub use markdown::to_markdown;
pub use options::{ImageHandling, RenderOptions};
pub use text::to_text;
