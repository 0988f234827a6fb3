#![forbid(unsafe_code)]

//! Conformance suite for the Veil crates.
//!
//! The library surface is intentionally empty; the properties live in
//! the integration tests under `tests/`.
