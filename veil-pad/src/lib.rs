#![forbid(unsafe_code)]

//! Length-prefixed zero padding.
//!
//! Payloads are framed as `[u16be N][N zero bytes][payload]` so that an
//! observer cannot infer the true payload size from the frame length.
//! Only zero bytes are used for the filler; the frame is expected to be
//! encrypted afterwards, so the filler's value distribution carries no
//! information.
//!
//! No unpad function is exported on purpose: the prefix tells an
//! independent reader exactly how many bytes to skip (`2 + N`), and
//! consumers strip frames themselves after whatever decryption or
//! reassembly they perform.

use rand::{rngs::OsRng, RngCore};

/// Size of the big-endian length prefix in bytes.
pub const LENGTH_PREFIX_SIZE: usize = 2;

/// Largest pad length [`pad_random`] can draw. The draw is a single
/// random byte, deliberately narrower than the u16 the prefix can carry.
pub const MAX_RANDOM_PAD: u16 = 255;

/// Frame `payload` with `n` leading zero bytes behind a u16be length
/// prefix. The payload itself is copied unmodified.
///
/// `n` is a `u16`, so the full representable range 0–65535 is valid by
/// construction.
pub fn pad(payload: &[u8], n: u16) -> Vec<u8> {
    let mut frame = Vec::with_capacity(LENGTH_PREFIX_SIZE + n as usize + payload.len());
    frame.extend_from_slice(&n.to_be_bytes());
    frame.resize(LENGTH_PREFIX_SIZE + n as usize, 0);
    frame.extend_from_slice(payload);
    frame
}

/// Frame `payload` with a pad length drawn from the OS CSPRNG.
///
/// The draw is one byte (0–255). A general-purpose PRNG would let an
/// observer who recovers its state predict pad lengths, which defeats
/// the traffic-analysis resistance the padding exists for.
pub fn pad_random(payload: &[u8]) -> Vec<u8> {
    let mut draw = [0u8; 1];
    OsRng.fill_bytes(&mut draw);
    let n = u16::from(draw[0]);
    tracing::trace!(pad_len = n, "padding payload with random-length prefix");
    pad(payload, n)
}
