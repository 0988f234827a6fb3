#![forbid(unsafe_code)]

//! Blob adapter over the Veil transcoders.
//!
//! A [`Blob`] pairs a media type with a binary payload and converts to
//! and from base64, hex, UTF-8 text and `data:` URLs. The adapter holds
//! no state beyond the blob's own contents.

pub mod blob;
pub mod data_url;
pub mod error;

pub use blob::Blob;
pub use error::{BlobError, BlobResult};
