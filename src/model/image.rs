//! Embedded image entries carried by OCR pages.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An image embedded in a page's image list.
///
/// The payload is a string as emitted by the OCR service: either a full
/// `data:` URI or a bare base64 body. Producers may omit the payload
/// entirely when image data was not requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageImage {
    /// Identifier referenced from the page markup (e.g. "img-0.jpeg")
    pub id: String,

    /// Base64 payload, with or without a `data:` URI header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,

    /// Bounding box within the page, in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_left_x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_left_y: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_right_x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_right_y: Option<i32>,
}

impl PageImage {
    /// Create an image entry with a payload.
    pub fn new(id: impl Into<String>, image_base64: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_base64: Some(image_base64.into()),
            top_left_x: None,
            top_left_y: None,
            bottom_right_x: None,
            bottom_right_y: None,
        }
    }

    /// Create an image entry without a payload.
    pub fn without_payload(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_base64: None,
            top_left_x: None,
            top_left_y: None,
            bottom_right_x: None,
            bottom_right_y: None,
        }
    }

    /// Set the bounding box.
    pub fn with_bounding_box(mut self, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        self.top_left_x = Some(left);
        self.top_left_y = Some(top);
        self.bottom_right_x = Some(right);
        self.bottom_right_y = Some(bottom);
        self
    }

    /// Check whether the entry carries a non-empty payload.
    pub fn has_payload(&self) -> bool {
        self.image_base64
            .as_deref()
            .is_some_and(|p| !p.trim().is_empty())
    }

    /// The payload as a displayable `data:` URI.
    ///
    /// A payload that already carries a `data:` header is returned as-is.
    /// A bare base64 body gets a header whose image subtype is taken from
    /// the identifier's extension, falling back to `jpeg`.
    pub fn data_uri(&self) -> Option<String> {
        let payload = self.image_base64.as_deref()?;
        if payload.trim().is_empty() {
            return None;
        }
        if payload.starts_with("data:") {
            return Some(payload.to_string());
        }

        let subtype = match self.id_extension() {
            Some("jpg") | Some("jpeg") | None => "jpeg",
            Some(ext) => ext,
        };
        Some(format!("data:image/{};base64,{}", subtype, payload))
    }

    /// Decode the payload to raw bytes, stripping any `data:` URI header.
    pub fn decode(&self) -> Result<Vec<u8>> {
        let payload = self
            .image_base64
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| Error::MissingImagePayload(self.id.clone()))?;

        let body = if payload.starts_with("data:") {
            payload
                .split_once(',')
                .map(|(_, body)| body)
                .ok_or_else(|| Error::MissingImagePayload(self.id.clone()))?
        } else {
            payload
        };

        Ok(STANDARD.decode(body.trim())?)
    }

    /// Get a suggested filename for the decoded bytes.
    ///
    /// The identifier is used directly when it already carries an
    /// extension; otherwise one is derived from the `data:` header or the
    /// decoded magic bytes.
    pub fn suggested_filename(&self, data: &[u8]) -> String {
        if self.id_extension().is_some() {
            return self.id.clone();
        }

        let mime = self
            .header_mime_type()
            .or_else(|| Self::detect_mime_type(data));
        let extension = mime.map(Self::mime_extension).unwrap_or("bin");
        format!("{}.{}", self.id, extension)
    }

    /// The MIME type declared in the payload's `data:` header, if any.
    pub fn header_mime_type(&self) -> Option<&str> {
        let payload = self.image_base64.as_deref()?;
        let rest = payload.strip_prefix("data:")?;
        let end = rest.find([';', ','])?;
        let mime = &rest[..end];
        if mime.is_empty() {
            None
        } else {
            Some(mime)
        }
    }

    /// Detect MIME type from data magic bytes.
    pub fn detect_mime_type(data: &[u8]) -> Option<&'static str> {
        if data.len() < 8 {
            return None;
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some("image/jpeg");
        }

        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some("image/png");
        }

        // GIF: GIF87a or GIF89a
        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Some("image/gif");
        }

        // TIFF: 49 49 2A 00 (little-endian) or 4D 4D 00 2A (big-endian)
        if data.starts_with(&[0x49, 0x49, 0x2A, 0x00])
            || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
        {
            return Some("image/tiff");
        }

        // BMP: BM
        if data.starts_with(b"BM") {
            return Some("image/bmp");
        }

        // WEBP: RIFF....WEBP
        if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
            return Some("image/webp");
        }

        None
    }

    /// Map a MIME type to a file extension.
    fn mime_extension(mime: &str) -> &'static str {
        match mime {
            "image/jpeg" | "image/jpg" => "jpeg",
            "image/png" => "png",
            "image/gif" => "gif",
            "image/tiff" => "tiff",
            "image/bmp" => "bmp",
            "image/webp" => "webp",
            _ => "bin",
        }
    }

    fn id_extension(&self) -> Option<&str> {
        let (name, ext) = self.id.rsplit_once('.')?;
        if name.is_empty() || ext.is_empty() || ext.contains('/') {
            None
        } else {
            Some(ext)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_passthrough() {
        let img = PageImage::new("img-0.jpeg", "data:image/png;base64,AAAA");
        assert_eq!(img.data_uri().unwrap(), "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_data_uri_from_bare_payload() {
        let img = PageImage::new("img-0.jpeg", "AAAA");
        assert_eq!(img.data_uri().unwrap(), "data:image/jpeg;base64,AAAA");

        let img = PageImage::new("figure.png", "AAAA");
        assert_eq!(img.data_uri().unwrap(), "data:image/png;base64,AAAA");

        let img = PageImage::new("no-extension", "AAAA");
        assert_eq!(img.data_uri().unwrap(), "data:image/jpeg;base64,AAAA");
    }

    #[test]
    fn test_data_uri_missing_payload() {
        let img = PageImage::without_payload("img-0.jpeg");
        assert!(img.data_uri().is_none());
        assert!(!img.has_payload());
    }

    #[test]
    fn test_decode_with_header() {
        let encoded = STANDARD.encode(b"hello");
        let img = PageImage::new("a.png", format!("data:image/png;base64,{}", encoded));
        assert_eq!(img.decode().unwrap(), b"hello");
    }

    #[test]
    fn test_decode_bare_payload() {
        let encoded = STANDARD.encode(&[0xFF, 0xD8, 0xFF, 0xE0]);
        let img = PageImage::new("a", encoded);
        assert_eq!(img.decode().unwrap(), vec![0xFF, 0xD8, 0xFF, 0xE0]);
    }

    #[test]
    fn test_decode_missing_payload() {
        let img = PageImage::without_payload("img-3");
        let err = img.decode().unwrap_err();
        assert!(matches!(err, Error::MissingImagePayload(ref id) if id == "img-3"));
    }

    #[test]
    fn test_decode_invalid_base64() {
        let img = PageImage::new("a.png", "not base64 at all!");
        assert!(matches!(img.decode(), Err(Error::Base64(_))));
    }

    #[test]
    fn test_detect_mime_type() {
        let jpeg_data = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
        assert_eq!(PageImage::detect_mime_type(&jpeg_data), Some("image/jpeg"));

        let png_data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(PageImage::detect_mime_type(&png_data), Some("image/png"));

        let unknown = vec![0x00, 0x00, 0x00, 0x00];
        assert_eq!(PageImage::detect_mime_type(&unknown), None);
    }

    #[test]
    fn test_suggested_filename() {
        let img = PageImage::new("img-0.jpeg", "AAAA");
        assert_eq!(img.suggested_filename(b""), "img-0.jpeg");

        let png_magic = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        let img = PageImage::new("figure", STANDARD.encode(png_magic));
        assert_eq!(img.suggested_filename(&png_magic), "figure.png");

        let img = PageImage::new("blob", "AAAA");
        assert_eq!(img.suggested_filename(&[0, 0, 0, 0, 0, 0, 0, 0]), "blob.bin");
    }

    #[test]
    fn test_header_mime_type() {
        let img = PageImage::new("x", "data:image/webp;base64,AAAA");
        assert_eq!(img.header_mime_type(), Some("image/webp"));

        let img = PageImage::new("x", "AAAA");
        assert_eq!(img.header_mime_type(), None);
    }

    #[test]
    fn test_serde_optional_fields() {
        let json = r#"{"id":"img-1"}"#;
        let img: PageImage = serde_json::from_str(json).unwrap();
        assert_eq!(img.id, "img-1");
        assert!(img.image_base64.is_none());
        assert!(img.top_left_x.is_none());
    }
}
