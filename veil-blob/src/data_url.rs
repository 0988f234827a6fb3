#![forbid(unsafe_code)]

//! `data:` URL rendering and parsing.
//!
//! Only the base64 payload encoding is supported:
//! `data:<media-type>;base64,<payload>`, with an empty media type
//! rendered as `data:;base64,...`. Any other encoding token is rejected
//! rather than silently reinterpreted.

use crate::error::{BlobError, BlobResult};

const SCHEME: &str = "data:";
const ENCODING_TOKEN: &str = "base64";

/// Render `data` as a base64 data URL with the given media type.
pub fn render(media_type: &str, data: &[u8]) -> String {
    format!(
        "{SCHEME}{media_type};{ENCODING_TOKEN},{}",
        veil_codec::base64::encode(data, false)
    )
}

/// Parse a base64 data URL into its media type and payload bytes.
pub fn parse(url: &str) -> BlobResult<(String, Vec<u8>)> {
    let rest = url
        .strip_prefix(SCHEME)
        .ok_or_else(|| BlobError::InvalidFormat(format!("missing `{SCHEME}` prefix")))?;
    let (meta, payload) = rest.split_once(',').ok_or_else(|| {
        BlobError::InvalidFormat("missing `,` between metadata and payload".into())
    })?;
    let (media_type, encoding) = meta.rsplit_once(';').ok_or_else(|| {
        BlobError::InvalidFormat("missing `;` between media type and encoding".into())
    })?;
    if encoding != ENCODING_TOKEN {
        return Err(BlobError::UnsupportedEncoding(encoding.to_string()));
    }
    let data = veil_codec::base64::decode(payload, false)?;
    tracing::debug!(media_type, bytes = data.len(), "parsed data URL");
    Ok((media_type.to_string(), data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_base64_data_url() {
        let (media_type, data) = parse("data:text/plain;base64,SGVsbG8=").unwrap();
        assert_eq!(media_type, "text/plain");
        assert_eq!(data, b"Hello".to_vec());
    }

    #[test]
    fn empty_media_type_is_allowed() {
        let (media_type, data) = parse("data:;base64,AQID").unwrap();
        assert_eq!(media_type, "");
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn rejects_other_encodings_verbatim() {
        let err = parse("data:text/plain;charset=utf-8,Hello").unwrap_err();
        assert_eq!(
            err,
            BlobError::UnsupportedEncoding("charset=utf-8".into())
        );
        assert!(matches!(
            parse("data:application/octet-stream;utf8,Hello"),
            Err(BlobError::UnsupportedEncoding(token)) if token == "utf8"
        ));
    }

    #[test]
    fn rejects_missing_scheme() {
        assert!(matches!(
            parse("file:text/plain;base64,SGVsbG8="),
            Err(BlobError::InvalidFormat(_))
        ));
    }

    #[test]
    fn rejects_missing_structure() {
        // No comma separating metadata from payload.
        assert!(matches!(
            parse("data:text/plain;base64"),
            Err(BlobError::InvalidFormat(_))
        ));
        // No semicolon, so no encoding token at all.
        assert!(matches!(
            parse("data:text/plain,Hello"),
            Err(BlobError::InvalidFormat(_))
        ));
    }

    #[test]
    fn bad_payload_surfaces_codec_error() {
        assert!(matches!(
            parse("data:;base64,@@@@"),
            Err(BlobError::Codec(_))
        ));
    }

    #[test]
    fn render_parse_round_trip() {
        let url = render("image/png", &[0x89, 0x50, 0x4e, 0x47]);
        assert_eq!(url, "data:image/png;base64,iVBORw==");
        let (media_type, data) = parse(&url).unwrap();
        assert_eq!(media_type, "image/png");
        assert_eq!(data, vec![0x89, 0x50, 0x4e, 0x47]);
    }
}
