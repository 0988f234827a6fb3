#![forbid(unsafe_code)]

//! RFC 4648 base64 transcoder with the URL-safe alphabet variant.
//!
//! The URL-safe form is implemented as a character remap over the
//! standard form: `+`→`-`, `/`→`_` with `=` padding stripped on encode,
//! and the reverse substitution plus re-padding on decode. Standard
//! decoding is strict: the input length must be a multiple of four and
//! `=` may only appear at the tail.

use crate::error::{CodecError, CodecResult};

const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const PAD: char = '=';

/// Standard → URL-safe substitutions, applied after encoding.
const TO_URL_SAFE: [(char, char); 2] = [('+', '-'), ('/', '_')];
/// URL-safe → standard substitutions, applied before decoding.
const FROM_URL_SAFE: [(char, char); 2] = [('-', '+'), ('_', '/')];

/// Maps ASCII to its 6-bit value, or -1 for characters outside the
/// standard alphabet.
const DECODE_TABLE: [i8; 256] = {
    let mut table = [-1i8; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET[i] as usize] = i as i8;
        i += 1;
    }
    table
};

/// Encode bytes as base64. With `url_safe` the output uses the RFC 4648
/// §5 alphabet and carries no `=` padding.
pub fn encode(bytes: &[u8], url_safe: bool) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
    for chunk in bytes.chunks(3) {
        let b0 = chunk[0] as u32;
        let b1 = *chunk.get(1).unwrap_or(&0) as u32;
        let b2 = *chunk.get(2).unwrap_or(&0) as u32;
        let group = (b0 << 16) | (b1 << 8) | b2;
        out.push(ALPHABET[(group >> 18) as usize & 0x3f] as char);
        out.push(ALPHABET[(group >> 12) as usize & 0x3f] as char);
        out.push(if chunk.len() > 1 {
            ALPHABET[(group >> 6) as usize & 0x3f] as char
        } else {
            PAD
        });
        out.push(if chunk.len() > 2 {
            ALPHABET[group as usize & 0x3f] as char
        } else {
            PAD
        });
    }
    if url_safe {
        out = out
            .chars()
            .filter(|&c| c != PAD)
            .map(|c| remap(c, &TO_URL_SAFE))
            .collect();
    }
    out
}

/// Decode base64 text. With `url_safe` the substitution is reversed and
/// `=` padding restored before standard decoding, so inputs whose length
/// is not a multiple of four are accepted in that mode only.
pub fn decode(text: &str, url_safe: bool) -> CodecResult<Vec<u8>> {
    if url_safe {
        let mut std_form: String = text.chars().map(|c| remap(c, &FROM_URL_SAFE)).collect();
        while std_form.len() % 4 != 0 {
            std_form.push(PAD);
        }
        decode_standard(&std_form)
    } else {
        decode_standard(text)
    }
}

fn remap(c: char, table: &[(char, char); 2]) -> char {
    match table.iter().find(|&&(from, _)| from == c) {
        Some(&(_, to)) => to,
        None => c,
    }
}

fn decode_standard(text: &str) -> CodecResult<Vec<u8>> {
    let digits = text.as_bytes();
    if digits.len() % 4 != 0 {
        return Err(CodecError::InvalidEncoding(
            "base64",
            format!("length {} is not a multiple of 4", digits.len()),
        ));
    }
    let mut out = Vec::with_capacity(digits.len() / 4 * 3);
    let chunks = digits.len() / 4;
    for (i, chunk) in digits.chunks_exact(4).enumerate() {
        let last = i + 1 == chunks;
        // Padding is legal only in the final group, only in its last two
        // positions, and a padded third position forces a padded fourth.
        let pads = match (chunk[2] == b'=', chunk[3] == b'=') {
            (false, false) => 0,
            (false, true) if last => 1,
            (true, true) if last => 2,
            _ => {
                return Err(CodecError::InvalidEncoding(
                    "base64",
                    "misplaced '=' padding".into(),
                ))
            }
        };
        let mut group = 0u32;
        for &digit in &chunk[..4 - pads] {
            let value = DECODE_TABLE[digit as usize];
            if value < 0 {
                return Err(CodecError::InvalidEncoding(
                    "base64",
                    format!("unexpected character {:?}", digit as char),
                ));
            }
            group = (group << 6) | value as u32;
        }
        group <<= 6 * pads as u32;
        out.push((group >> 16) as u8);
        if pads < 2 {
            out.push((group >> 8) as u8);
        }
        if pads < 1 {
            out.push(group as u8);
        }
    }
    Ok(out)
}
