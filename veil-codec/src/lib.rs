#![forbid(unsafe_code)]

//! Veil transcoder set.
//!
//! This crate provides:
//! 1. Hexadecimal encode/decode (see [`hex`] module).
//! 2. RFC 4648 base64 with the URL-safe alphabet variant (see [`base64`]).
//! 3. UTF-8 encode plus lossy decode (see [`utf8`]).
//!
//! Every function is deterministic, allocates its result and shares no
//! state with any other call.

pub mod base64;
pub mod error;
pub mod hex;
pub mod utf8;

pub use error::{CodecError, CodecResult};
