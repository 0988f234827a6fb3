#![forbid(unsafe_code)]

//! Blob adapter error types.

use thiserror::Error;
use veil_codec::CodecError;

/// Result type for blob operations.
pub type BlobResult<T> = Result<T, BlobError>;

/// Blob adapter error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlobError {
    /// The string is not a data URL, or lacks the
    /// `type;encoding,payload` structure after the scheme.
    #[error("Invalid data URL: {0}")]
    InvalidFormat(String),

    /// The encoding token after the media type is something other than
    /// `base64`. Carries the offending token verbatim.
    #[error("Unsupported data URL encoding: {0}")]
    UnsupportedEncoding(String),

    /// The payload failed to decode.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
