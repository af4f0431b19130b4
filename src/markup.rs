//! Tokenizer for the embedded-image markup syntax.
//!
//! OCR page text is plain markup with zero or more inline image references
//! of the form `![alt](target)`. This module scans a markup string into a
//! sequence of literal text spans and image references with explicit,
//! testable rules instead of a pattern match:
//!
//! - the alt label ends at the first `]`
//! - `(` must immediately follow `]`
//! - the target ends at the first `)`
//! - a span missing any closing delimiter, or whose alt or target crosses
//!   a line break, is literal text
//!
//! Nested brackets are not part of the grammar; such spans stay literal.
//! Targets are captured raw, trimming happens at lookup time.

/// One token of a markup string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A literal text span, passed through verbatim.
    Text(&'a str),
    /// An embedded-image reference `![alt](target)`.
    Image { alt: &'a str, target: &'a str },
}

impl<'a> Token<'a> {
    /// Check whether this token is an image reference.
    pub fn is_image(&self) -> bool {
        matches!(self, Token::Image { .. })
    }

    /// Check whether this token is literal text.
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }
}

/// Tokenize a markup string into text and image-reference tokens.
///
/// Concatenating the text of all tokens (references re-emitted as written)
/// reproduces the input exactly.
pub fn tokenize(markup: &str) -> Vec<Token<'_>> {
    let bytes = markup.as_bytes();
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] == b'!' && bytes.get(pos + 1) == Some(&b'[') {
            if let Some((alt, target, end)) = scan_reference(markup, pos) {
                if text_start < pos {
                    tokens.push(Token::Text(&markup[text_start..pos]));
                }
                tokens.push(Token::Image { alt, target });
                pos = end;
                text_start = end;
                continue;
            }
        }
        pos += 1;
    }

    if text_start < bytes.len() {
        tokens.push(Token::Text(&markup[text_start..]));
    }

    tokens
}

/// Check whether a markup string contains at least one image reference.
pub fn has_image_reference(markup: &str) -> bool {
    tokenize(markup).iter().any(Token::is_image)
}

/// Remove all image references, keeping literal text verbatim.
pub fn strip_image_references(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    for token in tokenize(markup) {
        if let Token::Text(text) = token {
            out.push_str(text);
        }
    }
    out
}

/// Scan one reference starting at `start` (pointing at `!`). Returns the
/// alt, the raw target, and the index just past the closing `)`.
fn scan_reference(markup: &str, start: usize) -> Option<(&str, &str, usize)> {
    let bytes = markup.as_bytes();

    let alt_start = start + 2;
    let alt_end = find_byte(bytes, alt_start, b']')?;
    let alt = &markup[alt_start..alt_end];

    if bytes.get(alt_end + 1) != Some(&b'(') {
        return None;
    }

    let target_start = alt_end + 2;
    let target_end = find_byte(bytes, target_start, b')')?;
    let target = &markup[target_start..target_end];

    if crosses_line_break(alt) || crosses_line_break(target) {
        return None;
    }

    Some((alt, target, target_end + 1))
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|i| from + i)
}

fn crosses_line_break(span: &str) -> bool {
    span.contains(['\n', '\r'])
}
