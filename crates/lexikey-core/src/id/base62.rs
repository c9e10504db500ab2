//! Order-preserving base-62 digits.
//!
//! The alphabet is digits, then uppercase, then lowercase - the same order
//! as ASCII - so that comparing two fixed-width encoded strings gives the
//! same result as comparing the numbers they encode. Unpadded strings are
//! only ordered within a length class; callers that need total order use
//! the zero-padded form.

use crate::error::{CodecError, Result};

const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Digits needed for the largest u64 (62^10 < 2^64 < 62^11).
pub const MAX_U64_DIGITS: usize = 11;

/// Encodes `value` in base-62, optionally zero-padded to `pad` characters.
#[must_use]
pub fn encode_u64(value: u64, pad: Option<usize>) -> String {
    let mut digits = [0u8; MAX_U64_DIGITS];
    let mut remaining = value;
    let mut used = 0;
    loop {
        digits[MAX_U64_DIGITS - 1 - used] = ALPHABET[(remaining % 62) as usize];
        remaining /= 62;
        used += 1;
        if remaining == 0 {
            break;
        }
    }
    let width = pad.map_or(used, |p| p.clamp(used, MAX_U64_DIGITS));
    for slot in &mut digits[MAX_U64_DIGITS - width..MAX_U64_DIGITS - used] {
        *slot = b'0';
    }
    // the alphabet is ASCII
    String::from_utf8_lossy(&digits[MAX_U64_DIGITS - width..]).into_owned()
}

/// Decodes a base-62 string (padded or not) into a u64.
///
/// # Errors
///
/// Returns [`CodecError::FormatError`] on an empty string, a character
/// outside the alphabet, or a value exceeding 64 bits.
pub fn decode_u64(text: &str) -> Result<u64> {
    if text.is_empty() {
        return Err(CodecError::format("base-62 string is empty"));
    }
    let mut value: u64 = 0;
    for ch in text.bytes() {
        let digit = digit_value(ch)
            .ok_or_else(|| CodecError::format(format!("invalid base-62 character {:?}", ch as char)))?;
        value = value
            .checked_mul(62)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| CodecError::format("base-62 value exceeds 64 bits"))?;
    }
    Ok(value)
}

#[inline]
fn digit_value(ch: u8) -> Option<u64> {
    match ch {
        b'0'..=b'9' => Some(u64::from(ch - b'0')),
        b'A'..=b'Z' => Some(u64::from(ch - b'A') + 10),
        b'a'..=b'z' => Some(u64::from(ch - b'a') + 36),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        assert_eq!(encode_u64(0, None), "0");
        assert_eq!(encode_u64(9, None), "9");
        assert_eq!(encode_u64(10, None), "A");
        assert_eq!(encode_u64(35, None), "Z");
        assert_eq!(encode_u64(36, None), "a");
        assert_eq!(encode_u64(61, None), "z");
        assert_eq!(encode_u64(62, None), "10");
    }

    #[test]
    fn padded_width_is_fixed() {
        assert_eq!(encode_u64(0, Some(MAX_U64_DIGITS)), "00000000000");
        assert_eq!(encode_u64(61, Some(MAX_U64_DIGITS)), "0000000000z");
        assert_eq!(encode_u64(u64::MAX, Some(MAX_U64_DIGITS)).len(), MAX_U64_DIGITS);
    }

    #[test]
    fn roundtrip() {
        for v in [0u64, 1, 61, 62, 3843, 3844, 1 << 32, u64::MAX - 1, u64::MAX] {
            assert_eq!(decode_u64(&encode_u64(v, None)).unwrap(), v);
            assert_eq!(decode_u64(&encode_u64(v, Some(MAX_U64_DIGITS))).unwrap(), v);
        }
    }

    #[test]
    fn padded_strings_order_like_numbers() {
        let values = [0u64, 1, 61, 62, 1000, 1 << 20, 1 << 50, u64::MAX];
        for pair in values.windows(2) {
            let a = encode_u64(pair[0], Some(MAX_U64_DIGITS));
            let b = encode_u64(pair[1], Some(MAX_U64_DIGITS));
            assert!(a < b, "{a} !< {b}");
        }
    }

    #[test]
    fn rejects_out_of_alphabet_characters() {
        assert!(matches!(decode_u64("abc-def"), Err(CodecError::FormatError(_))));
        assert!(matches!(decode_u64("héllo"), Err(CodecError::FormatError(_))));
        assert!(matches!(decode_u64(""), Err(CodecError::FormatError(_))));
    }

    #[test]
    fn rejects_values_past_64_bits() {
        // u64::MAX is "LygHa16AHYF"; one digit more overflows
        assert!(decode_u64("LygHa16AHYF").is_ok());
        assert!(matches!(decode_u64("zzzzzzzzzzz"), Err(CodecError::FormatError(_))));
    }
}
