#![forbid(unsafe_code)]

//! Lowercase hexadecimal transcoder.

use crate::error::{CodecError, CodecResult};

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Encode bytes as lowercase hex, two digits per byte.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_CHARS[(b >> 4) as usize] as char);
        out.push(HEX_CHARS[(b & 0x0f) as usize] as char);
    }
    out
}

/// Decode hex text, case-insensitive.
///
/// Odd-length input is read as if a single `'0'` were prepended, so the
/// dangling first digit becomes the low nibble of the first byte:
/// `"f"` → `[0x0f]`, `"123"` → `[0x01, 0x23]`.
pub fn decode(text: &str) -> CodecResult<Vec<u8>> {
    let digits = text.as_bytes();
    let mut out = Vec::with_capacity(digits.len() / 2 + 1);
    let mut i = 0;
    if digits.len() % 2 == 1 {
        out.push(nibble(digits[0]).ok_or_else(|| bad_group(&digits[..1]))?);
        i = 1;
    }
    while i < digits.len() {
        let pair = &digits[i..i + 2];
        match (nibble(pair[0]), nibble(pair[1])) {
            (Some(hi), Some(lo)) => out.push((hi << 4) | lo),
            _ => return Err(bad_group(pair)),
        }
        i += 2;
    }
    Ok(out)
}

fn nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

fn bad_group(group: &[u8]) -> CodecError {
    CodecError::InvalidEncoding("hex", String::from_utf8_lossy(group).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn encodes_lowercase_zero_padded() {
        assert_eq!(encode(&[1, 2, 3]), "010203");
        assert_eq!(encode(&[0x0f, 0xa0, 0xff]), "0fa0ff");
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn decodes_pairs() {
        assert_eq!(decode("010203").unwrap(), vec![1, 2, 3]);
        assert_eq!(decode("deadbeef").unwrap(), hex!("deadbeef"));
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn odd_length_gets_implicit_leading_zero() {
        assert_eq!(decode("f").unwrap(), vec![0x0f]);
        assert_eq!(decode("123").unwrap(), vec![0x01, 0x23]);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(decode("DEADBEEF").unwrap(), decode("deadbeef").unwrap());
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert!(matches!(
            decode("0g"),
            Err(CodecError::InvalidEncoding("hex", _))
        ));
        assert!(decode("zz").is_err());
    }

    #[test]
    fn round_trip() {
        let data = hex!("00017f80fe ff");
        assert_eq!(decode(&encode(&data)).unwrap(), data);
    }
}
