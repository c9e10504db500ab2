//! Resizing append cursor.

use crate::binary::{compact, varint};
use crate::error::Result;

use super::Slice;

/// A mutable, growable append cursor over a byte buffer.
///
/// Every encoder in the layer writes through a `SliceWriter`. The backing
/// buffer grows by doubling as needed; growth never invalidates
/// previously-yielded [`Slice`]s, which own or share their own storage.
///
/// Writers are created at the start of an encode and consumed into a
/// [`Slice`] at the end (or explicitly [`reset`](Self::reset) for reuse).
/// Operations that can fail perform their domain checks before appending
/// anything, so a failed write leaves no partial bytes behind.
#[derive(Debug, Default)]
pub struct SliceWriter {
    buf: Vec<u8>,
}

impl SliceWriter {
    /// Creates an empty writer.
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a writer with `capacity` bytes pre-allocated.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: Vec::with_capacity(capacity) }
    }

    /// Number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Clears the buffer for reuse, keeping its allocation.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Ensures room for at least `additional` more bytes.
    pub fn reserve(&mut self, additional: usize) {
        self.buf.reserve(additional);
    }

    /// Appends a single byte.
    #[inline]
    pub fn write_u8(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Appends raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Appends the visible bytes of `slice`.
    #[inline]
    pub fn write_slice(&mut self, slice: &Slice) {
        self.buf.extend_from_slice(slice.as_bytes());
    }

    /// Appends a 16-bit value, big-endian.
    #[inline]
    pub fn write_u16_be(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Appends a 16-bit value, little-endian.
    #[inline]
    pub fn write_u16_le(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a 32-bit value, big-endian.
    #[inline]
    pub fn write_u32_be(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Appends a 32-bit value, little-endian.
    #[inline]
    pub fn write_u32_le(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a 64-bit value, big-endian.
    #[inline]
    pub fn write_u64_be(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Appends a 64-bit value, little-endian.
    #[inline]
    pub fn write_u64_le(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a 32-bit varint (1-5 bytes).
    #[inline]
    pub fn write_varint32(&mut self, value: u32) {
        varint::encode_varint32(&mut self.buf, value);
    }

    /// Appends a 64-bit varint (1-10 bytes).
    #[inline]
    pub fn write_varint64(&mut self, value: u64) {
        varint::encode_varint64(&mut self.buf, value);
    }

    /// Appends an order-preserving compact unsigned integer (1-8 bytes).
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::ValueTooLarge`](crate::CodecError::ValueTooLarge)
    /// for values at or above 2^61; nothing is written in that case.
    #[inline]
    pub fn write_compact_u64(&mut self, value: u64) -> Result<()> {
        compact::encode_compact_u64(&mut self.buf, value)
    }

    /// Appends an order-preserving compact signed integer (1-8 bytes).
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::ValueTooLarge`](crate::CodecError::ValueTooLarge)
    /// for magnitudes at or above 2^60; nothing is written in that case.
    #[inline]
    pub fn write_compact_i64(&mut self, value: i64) -> Result<()> {
        compact::encode_compact_i64(&mut self.buf, value)
    }

    /// Consumes the writer, yielding its contents as an immutable
    /// [`Slice`].
    #[must_use]
    pub fn into_slice(self) -> Slice {
        Slice::from_bytes(self.buf)
    }

    /// Copies the current contents into a new [`Slice`], leaving the
    /// writer usable.
    #[must_use]
    pub fn to_slice(&self) -> Slice {
        Slice::copy_from(&self.buf)
    }
}

impl From<SliceWriter> for Slice {
    fn from(writer: SliceWriter) -> Self {
        writer.into_slice()
    }
}
