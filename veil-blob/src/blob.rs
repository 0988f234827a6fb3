#![forbid(unsafe_code)]

//! Media-typed binary payloads.

use crate::data_url;
use crate::error::BlobResult;
use veil_codec::{base64, hex, utf8};

/// An immutable pair of media type and binary payload.
///
/// The media type may be empty. Constructors copy their input; nothing
/// is shared with or mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    media_type: String,
    data: Vec<u8>,
}

impl Blob {
    pub fn new(media_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self { media_type: media_type.into(), data }
    }

    /// Build a blob from standard base64 text.
    pub fn from_base64(media_type: impl Into<String>, text: &str) -> BlobResult<Self> {
        Ok(Self::new(media_type, base64::decode(text, false)?))
    }

    /// Build a blob from hex text.
    pub fn from_hex(media_type: impl Into<String>, text: &str) -> BlobResult<Self> {
        Ok(Self::new(media_type, hex::decode(text)?))
    }

    /// Build a blob holding the UTF-8 bytes of `text`.
    pub fn from_text(media_type: impl Into<String>, text: &str) -> Self {
        Self::new(media_type, utf8::encode(text))
    }

    /// Build a blob from a base64 data URL, taking the media type from
    /// the URL itself.
    pub fn from_data_url(url: &str) -> BlobResult<Self> {
        let (media_type, data) = data_url::parse(url)?;
        Ok(Self { media_type, data })
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Payload as standard base64 text.
    pub fn to_base64(&self) -> String {
        base64::encode(&self.data, false)
    }

    /// Payload as lowercase hex text.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.data)
    }

    /// Payload as UTF-8 text, with malformed sequences replaced.
    pub fn to_text(&self) -> String {
        utf8::decode(&self.data)
    }

    /// Render as `data:<media-type>;base64,<payload>`.
    pub fn to_data_url(&self) -> String {
        data_url::render(&self.media_type, &self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlobError;

    #[test]
    fn text_view_round_trip() {
        let blob = Blob::from_text("text/plain", "Hello");
        assert_eq!(blob.data(), b"Hello");
        assert_eq!(blob.to_text(), "Hello");
        assert_eq!(blob.to_base64(), "SGVsbG8=");
    }

    #[test]
    fn base64_and_hex_constructors() {
        let from_b64 = Blob::from_base64("application/octet-stream", "AQID").unwrap();
        let from_hex = Blob::from_hex("application/octet-stream", "010203").unwrap();
        assert_eq!(from_b64, from_hex);
        assert_eq!(from_b64.to_hex(), "010203");
    }

    #[test]
    fn data_url_round_trip() {
        let blob = Blob::from_data_url("data:text/plain;base64,SGVsbG8=").unwrap();
        assert_eq!(blob.media_type(), "text/plain");
        assert_eq!(blob.to_text(), "Hello");
        assert_eq!(blob.to_data_url(), "data:text/plain;base64,SGVsbG8=");
    }

    #[test]
    fn empty_media_type_renders_bare() {
        let blob = Blob::new("", vec![1, 2, 3]);
        assert_eq!(blob.to_data_url(), "data:;base64,AQID");
    }

    #[test]
    fn constructor_errors_surface() {
        assert!(matches!(
            Blob::from_base64("", "not base64!"),
            Err(BlobError::Codec(_))
        ));
        assert!(Blob::from_hex("", "xy").is_err());
    }
}
