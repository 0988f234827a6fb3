#![forbid(unsafe_code)]

//! UTF-8 transcoder.

/// Encode text as its UTF-8 bytes.
pub fn encode(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decode bytes as UTF-8 text.
///
/// Malformed sequences are replaced with U+FFFD rather than rejected, so
/// round-trips are exact only for valid UTF-8 input.
pub fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
