//! DOCX export for paragraph buffers.
//!
//! Each buffer block becomes exactly one document paragraph, in block
//! order. Block text is written as a single plain run with whitespace
//! preserved; blocks without text (image placeholders) become empty
//! paragraphs so block and paragraph counts always agree.

use std::io::{Cursor, Seek, Write};
use std::path::Path;

use docx_rust::document::{Paragraph, TextSpace};
use docx_rust::Docx;

use crate::buffer::DocumentBuffer;
use crate::error::Result;

/// File name used when the caller does not pick one.
pub const DEFAULT_FILE_NAME: &str = "document.docx";

/// Write a buffer as DOCX to an arbitrary writer.
///
/// Returns the writer on success, mirroring the underlying archive
/// writer which must be reclaimed after the archive is finalized.
pub fn write_docx<W: Write + Seek>(buffer: &DocumentBuffer, writer: W) -> Result<W> {
    let mut docx = build_docx(buffer);
    let writer = docx.write(writer)?;
    Ok(writer)
}

/// Serialize a buffer as DOCX into an in-memory byte vector.
pub fn to_docx_bytes(buffer: &DocumentBuffer) -> Result<Vec<u8>> {
    let cursor = write_docx(buffer, Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}

/// Write a buffer as DOCX to a file path.
pub fn write_docx_file<P: AsRef<Path>>(buffer: &DocumentBuffer, path: P) -> Result<()> {
    let mut docx = build_docx(buffer);
    docx.write_file(path.as_ref())?;
    log::debug!(
        "Exported {} blocks to {}",
        buffer.len(),
        path.as_ref().display()
    );
    Ok(())
}

fn build_docx(buffer: &DocumentBuffer) -> Docx<'_> {
    let mut docx = Docx::default();
    for block in buffer.blocks() {
        let paragraph =
            Paragraph::default().push_text((block.text.as_str(), TextSpace::Preserve));
        docx.document.push(paragraph);
    }
    docx
}
