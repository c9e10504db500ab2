//! Sequential-consumption read cursor.

use crate::binary::{compact, varint};
use crate::error::{CodecError, Result};

/// A read cursor over a borrowed byte region.
///
/// Every read advances the position; a read that needs more bytes than
/// remain fails with [`CodecError::Truncated`] and leaves the position
/// unchanged. Reaching the end is a normal terminal state
/// ([`is_at_end`](Self::is_at_end)); reading past it is an error, never a
/// silent truncation.
#[derive(Debug, Clone, Copy)]
pub struct SliceReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SliceReader<'a> {
    /// Creates a reader over `buf`, positioned at the start.
    #[must_use]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current read position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns `true` when the cursor has consumed the whole buffer.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Moves the cursor to an absolute position.
    ///
    /// Used by speculative (`try_*`) decoders to rewind after a failed
    /// probe.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::OutOfRange`] if `pos` is past the end.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.buf.len() {
            return Err(CodecError::OutOfRange { offset: pos, len: 0, cap: self.buf.len() });
        }
        self.pos = pos;
        Ok(())
    }

    /// Returns the next byte without advancing, or `None` at the end.
    #[must_use]
    pub fn peek_u8(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Advances past `n` bytes without returning them.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Truncated`] if fewer than `n` bytes remain.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }

    /// Reads a single byte.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Truncated`] at the end of the buffer.
    pub fn read_u8(&mut self) -> Result<u8> {
        let byte =
            *self.buf.get(self.pos).ok_or_else(|| CodecError::truncated(1, self.remaining()))?;
        self.pos += 1;
        Ok(byte)
    }

    /// Reads exactly `n` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Truncated`] if fewer than `n` bytes remain.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.take(n)
    }

    /// Reads exactly `N` bytes into a fixed-size array.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Truncated`] if fewer than `N` bytes remain.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.take_array()
    }

    /// Reads all remaining bytes, leaving the cursor at the end.
    pub fn read_to_end(&mut self) -> &'a [u8] {
        let rest = &self.buf[self.pos..];
        self.pos = self.buf.len();
        rest
    }

    /// Reads a big-endian u16.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Truncated`] if fewer than 2 bytes remain.
    pub fn read_u16_be(&mut self) -> Result<u16> {
        Ok(u16::from_be_bytes(self.take_array()?))
    }

    /// Reads a little-endian u16.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Truncated`] if fewer than 2 bytes remain.
    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.take_array()?))
    }

    /// Reads a big-endian u32.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Truncated`] if fewer than 4 bytes remain.
    pub fn read_u32_be(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.take_array()?))
    }

    /// Reads a little-endian u32.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Truncated`] if fewer than 4 bytes remain.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.take_array()?))
    }

    /// Reads a big-endian u64.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Truncated`] if fewer than 8 bytes remain.
    pub fn read_u64_be(&mut self) -> Result<u64> {
        Ok(u64::from_be_bytes(self.take_array()?))
    }

    /// Reads a little-endian u64.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Truncated`] if fewer than 8 bytes remain.
    pub fn read_u64_le(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.take_array()?))
    }

    /// Reads a 32-bit varint.
    ///
    /// # Errors
    ///
    /// [`CodecError::Truncated`] mid-sequence,
    /// [`CodecError::MalformedVarint`] on an over-long continuation run, or
    /// [`CodecError::Overflow`] when the value does not fit 32 bits.
    pub fn read_varint32(&mut self) -> Result<u32> {
        let (value, consumed) = varint::decode_varint32(&self.buf[self.pos..])?;
        self.pos += consumed;
        Ok(value)
    }

    /// Reads a 64-bit varint.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`read_varint32`](Self::read_varint32), at
    /// 64-bit capacity.
    pub fn read_varint64(&mut self) -> Result<u64> {
        let (value, consumed) = varint::decode_varint64(&self.buf[self.pos..])?;
        self.pos += consumed;
        Ok(value)
    }

    /// Reads an order-preserving compact unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Truncated`] if the length prefix implies more
    /// bytes than remain.
    pub fn read_compact_u64(&mut self) -> Result<u64> {
        let (value, consumed) = compact::decode_compact_u64(&self.buf[self.pos..])?;
        self.pos += consumed;
        Ok(value)
    }

    /// Reads an order-preserving compact signed integer.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Truncated`] if the length prefix implies more
    /// bytes than remain.
    pub fn read_compact_i64(&mut self) -> Result<i64> {
        let (value, consumed) = compact::decode_compact_i64(&self.buf[self.pos..])?;
        self.pos += consumed;
        Ok(value)
    }

    #[inline]
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .ok_or_else(|| CodecError::truncated(n, self.remaining()))?;
        if end > self.buf.len() {
            return Err(CodecError::truncated(n, self.remaining()));
        }
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    #[inline]
    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut raw = [0u8; N];
        raw.copy_from_slice(self.take(N)?);
        Ok(raw)
    }
}
