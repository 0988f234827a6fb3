#![forbid(unsafe_code)]

//! Veil core utilities shared by the other crates.
//!
//! Everything here is a pure function over its arguments: no state is
//! retained across calls and results never alias caller-owned memory.

pub mod buffer;
pub mod path;

pub use buffer::{concat, Element};
pub use path::join_segments;
