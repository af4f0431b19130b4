//! Exporting edited documents to office formats.

mod docx;

pub use docx::{to_docx_bytes, write_docx, write_docx_file, DEFAULT_FILE_NAME};
