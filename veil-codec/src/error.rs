#![forbid(unsafe_code)]

//! Common error type for transcoding failures.

use thiserror::Error;

/// Result type for transcoding operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Transcoding error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Decoding input contains data outside the expected alphabet. The
    /// first field names the encoding, the second the offending token.
    #[error("Invalid {0} encoding: {1}")]
    InvalidEncoding(&'static str, String),
}
