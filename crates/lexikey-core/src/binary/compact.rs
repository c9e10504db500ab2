//! Order-preserving compact integer encodings.
//!
//! Both encodings here guarantee that for all representable pairs
//! `a < b`, `encode(a)` sorts before `encode(b)` under byte-wise
//! lexicographic comparison, while using the minimum number of bytes for
//! each value. Only the minimal-length encoding of a value is ever
//! produced; the length prefix makes decoding unambiguous without a
//! separate canonical-form check.
//!
//! # Unsigned format
//!
//! The first byte's top 3 bits hold the count of *additional* bytes (0-7)
//! and its low 5 bits hold the highest-order value bits. Each additional
//! byte holds the next 8 value bits, most significant first:
//!
//! ```text
//! [eee vvvvv] [vvvvvvvv] * e      e = extra-byte count, v = value bits
//! ```
//!
//! Capacity is 5 + 8*7 = 61 bits, so the domain is `0 .. 2^61 - 1`. Larger
//! values would need an 8-additional-byte form the 3-bit counter cannot
//! express and fail with [`CodecError::ValueTooLarge`].
//!
//! # Signed format
//!
//! The top bit of the first byte is a sign bit (0 = negative, 1 =
//! non-negative), so every encoded negative sorts before every encoded
//! non-negative. The next 3 bits count additional bytes and the low 4 bits
//! hold the highest-order magnitude bits:
//!
//! ```text
//! [s eee vvvv] [vvvvvvvv] * e
//! ```
//!
//! Non-negative values are encoded directly with the sign bit set.
//! Negative values encode their magnitude the same way and then invert
//! every output byte, so more-negative values still sort earlier.
//! Capacity is 4 + 8*7 = 60 magnitude bits: the domain is `+/-(2^60 - 1)`.
//!
//! Worked examples: `-5 -> 7A`, `0 -> 80`, `5 -> 85`, `100 -> 90 64`.

use crate::error::{CodecError, Result};

/// Upper bound (exclusive) of the compact unsigned domain: 2^61.
pub const COMPACT_U64_LIMIT: u64 = 1 << 61;
/// Largest magnitude representable by the compact signed encoding: 2^60 - 1.
pub const COMPACT_I64_MAX_MAGNITUDE: u64 = (1 << 60) - 1;
/// Maximum encoded size of either compact form.
pub const MAX_COMPACT_LEN: usize = 8;

/// Returns the exact encoded size of `value` in bytes (1-8).
#[inline]
#[must_use]
pub fn compact_u64_len(value: u64) -> usize {
    1 + extra_bytes(value, 5)
}

/// Returns the exact encoded size of `value` in bytes (1-8).
#[inline]
#[must_use]
pub fn compact_i64_len(value: i64) -> usize {
    1 + extra_bytes(value.unsigned_abs(), 4)
}

/// Minimal count of additional bytes so that `value` fits in
/// `head_bits + 8 * extra` bits.
#[inline]
fn extra_bytes(value: u64, head_bits: u32) -> usize {
    let mut extra = 0;
    while extra < 7 && value >> (head_bits + 8 * extra as u32) != 0 {
        extra += 1;
    }
    extra
}

/// Appends the order-preserving compact encoding of `value` to `buf`.
///
/// # Errors
///
/// Returns [`CodecError::ValueTooLarge`] for values at or above 2^61.
pub fn encode_compact_u64(buf: &mut Vec<u8>, value: u64) -> Result<()> {
    if value >= COMPACT_U64_LIMIT {
        return Err(CodecError::ValueTooLarge);
    }
    let extra = extra_bytes(value, 5);
    buf.push(((extra as u8) << 5) | ((value >> (8 * extra)) as u8));
    for i in (0..extra).rev() {
        buf.push((value >> (8 * i)) as u8);
    }
    Ok(())
}

/// Decodes a compact unsigned integer from the front of `buf`.
///
/// Returns the value and the number of bytes consumed.
///
/// # Errors
///
/// Returns [`CodecError::Truncated`] if the 3-bit length prefix implies
/// more bytes than `buf` holds.
pub fn decode_compact_u64(buf: &[u8]) -> Result<(u64, usize)> {
    let Some(&head) = buf.first() else {
        return Err(CodecError::truncated(1, 0));
    };
    let extra = (head >> 5) as usize;
    if buf.len() < 1 + extra {
        return Err(CodecError::truncated(1 + extra, buf.len()));
    }
    let mut value = u64::from(head & 0x1F);
    for &byte in &buf[1..=extra] {
        value = (value << 8) | u64::from(byte);
    }
    Ok((value, 1 + extra))
}

/// Appends the order-preserving compact signed encoding of `value` to
/// `buf`.
///
/// # Errors
///
/// Returns [`CodecError::ValueTooLarge`] for magnitudes at or above 2^60.
pub fn encode_compact_i64(buf: &mut Vec<u8>, value: i64) -> Result<()> {
    let magnitude = value.unsigned_abs();
    if magnitude > COMPACT_I64_MAX_MAGNITUDE {
        return Err(CodecError::ValueTooLarge);
    }
    let extra = extra_bytes(magnitude, 4);
    let start = buf.len();
    buf.push(0x80 | ((extra as u8) << 4) | ((magnitude >> (8 * extra)) as u8));
    for i in (0..extra).rev() {
        buf.push((magnitude >> (8 * i)) as u8);
    }
    if value < 0 {
        // Complementing the magnitude encoding flips it below all
        // non-negative first bytes and reverses its order, so more-negative
        // values sort earlier.
        for byte in &mut buf[start..] {
            *byte = !*byte;
        }
    }
    Ok(())
}

/// Decodes a compact signed integer from the front of `buf`.
///
/// Returns the value and the number of bytes consumed.
///
/// # Errors
///
/// Returns [`CodecError::Truncated`] if the length prefix implies more
/// bytes than `buf` holds.
pub fn decode_compact_i64(buf: &[u8]) -> Result<(i64, usize)> {
    let Some(&first) = buf.first() else {
        return Err(CodecError::truncated(1, 0));
    };
    let negative = first & 0x80 == 0;
    let head = if negative { !first } else { first };
    let extra = ((head >> 4) & 0x07) as usize;
    if buf.len() < 1 + extra {
        return Err(CodecError::truncated(1 + extra, buf.len()));
    }
    let mut magnitude = u64::from(head & 0x0F);
    for &byte in &buf[1..=extra] {
        let byte = if negative { !byte } else { byte };
        magnitude = (magnitude << 8) | u64::from(byte);
    }
    let value = if negative { -(magnitude as i64) } else { magnitude as i64 };
    Ok((value, 1 + extra))
}
