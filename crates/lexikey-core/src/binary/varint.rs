//! Variable-length integer encoding.
//!
//! 7 bits per byte, continuation bit in the high bit, least-significant
//! group first. Unsigned 32-bit values take 1-5 bytes and 64-bit values
//! take 1-10 bytes.
//!
//! The final byte of a maximal-width value carries only the remaining high
//! bits: the 5th byte of a u32 may hold at most 4 bits and the 10th byte of
//! a u64 at most 1 bit. Decoders reject anything past that capacity.
//!
//! # Errors
//!
//! Decoders distinguish three failure modes:
//!
//! - [`CodecError::Truncated`] - the buffer ended mid-sequence
//! - [`CodecError::MalformedVarint`] - the continuation bit is still set on
//!   the maximal byte
//! - [`CodecError::Overflow`] - the final byte carries bits beyond the
//!   target width

use crate::error::{CodecError, Result};

/// Maximum encoded size of a 32-bit varint.
pub const MAX_VARINT32_LEN: usize = 5;
/// Maximum encoded size of a 64-bit varint.
pub const MAX_VARINT64_LEN: usize = 10;

/// Returns the exact encoded size of `value` in bytes (1-5).
#[inline]
#[must_use]
pub const fn varint32_len(value: u32) -> usize {
    // ceil(bits / 7), with 1 byte minimum for zero
    match value {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x001F_FFFF => 3,
        0x0020_0000..=0x0FFF_FFFF => 4,
        _ => 5,
    }
}

/// Returns the exact encoded size of `value` in bytes (1-10).
#[inline]
#[must_use]
pub const fn varint64_len(value: u64) -> usize {
    if value == 0 {
        1
    } else {
        (64 - value.leading_zeros() as usize).div_ceil(7)
    }
}

/// Appends `value` to `buf` as a 32-bit varint.
#[inline]
pub fn encode_varint32(buf: &mut Vec<u8>, value: u32) {
    encode_varint64(buf, u64::from(value));
}

/// Appends `value` to `buf` as a 64-bit varint.
pub fn encode_varint64(buf: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        buf.push((value as u8) | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
}

/// Decodes a 32-bit varint from the front of `buf`.
///
/// Returns the value and the number of bytes consumed.
///
/// # Errors
///
/// See the module-level failure modes. A 5th byte whose payload exceeds the
/// 4 remaining bits of a u32 is an [`CodecError::Overflow`].
pub fn decode_varint32(buf: &[u8]) -> Result<(u32, usize)> {
    let mut value: u32 = 0;
    for (i, &byte) in buf.iter().enumerate().take(MAX_VARINT32_LEN) {
        let payload = u32::from(byte & 0x7F);
        // 5th byte: only 32 - 28 = 4 bits of capacity remain
        if i == MAX_VARINT32_LEN - 1 {
            if byte & 0x80 != 0 {
                return Err(CodecError::MalformedVarint);
            }
            if payload > 0x0F {
                return Err(CodecError::Overflow);
            }
        }
        value |= payload << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    if buf.len() >= MAX_VARINT32_LEN {
        Err(CodecError::MalformedVarint)
    } else {
        Err(CodecError::truncated(buf.len() + 1, buf.len()))
    }
}

/// Decodes a 64-bit varint from the front of `buf`.
///
/// Returns the value and the number of bytes consumed.
///
/// # Errors
///
/// See the module-level failure modes. A 10th byte whose payload exceeds
/// the single remaining bit of a u64 is an [`CodecError::Overflow`].
pub fn decode_varint64(buf: &[u8]) -> Result<(u64, usize)> {
    let mut value: u64 = 0;
    for (i, &byte) in buf.iter().enumerate().take(MAX_VARINT64_LEN) {
        let payload = u64::from(byte & 0x7F);
        // 10th byte: only 64 - 63 = 1 bit of capacity remains
        if i == MAX_VARINT64_LEN - 1 {
            if byte & 0x80 != 0 {
                return Err(CodecError::MalformedVarint);
            }
            if payload > 0x01 {
                return Err(CodecError::Overflow);
            }
        }
        value |= payload << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    if buf.len() >= MAX_VARINT64_LEN {
        Err(CodecError::MalformedVarint)
    } else {
        Err(CodecError::truncated(buf.len() + 1, buf.len()))
    }
}
