//! Fixed-width endianness-aware load and store.
//!
//! All loads and stores are bounds-checked against the target region once,
//! then go through the standard `from_*_bytes`/`to_*_bytes` conversions,
//! which are branch-free and correct independent of host endianness. The
//! host-endian fast path is an optimization the compiler applies, not a
//! semantic divergence.

use crate::error::{CodecError, Result};

/// Branch-free 16-bit byte swap.
#[inline]
#[must_use]
pub const fn swap16(v: u16) -> u16 {
    v.swap_bytes()
}

/// Branch-free 32-bit byte swap.
#[inline]
#[must_use]
pub const fn swap32(v: u32) -> u32 {
    v.swap_bytes()
}

/// Branch-free 64-bit byte swap.
#[inline]
#[must_use]
pub const fn swap64(v: u64) -> u64 {
    v.swap_bytes()
}

macro_rules! impl_load_store {
    ($($load_be:ident, $load_le:ident, $store_be:ident, $store_le:ident => $ty:ty, $width:expr;)+) => {
        $(
            /// Loads a big-endian value from `buf` at `offset`.
            ///
            /// # Errors
            ///
            /// Returns [`CodecError::Truncated`] if fewer than `
            #[doc = stringify!($width)]
            /// ` bytes are available at `offset`.
            #[inline]
            pub fn $load_be(buf: &[u8], offset: usize) -> Result<$ty> {
                let end = offset.checked_add($width)
                    .ok_or(CodecError::truncated($width, buf.len().saturating_sub(offset)))?;
                let bytes = buf.get(offset..end)
                    .ok_or(CodecError::truncated($width, buf.len().saturating_sub(offset)))?;
                let mut raw = [0u8; $width];
                raw.copy_from_slice(bytes);
                Ok(<$ty>::from_be_bytes(raw))
            }

            /// Loads a little-endian value from `buf` at `offset`.
            ///
            /// # Errors
            ///
            /// Returns [`CodecError::Truncated`] if fewer than `
            #[doc = stringify!($width)]
            /// ` bytes are available at `offset`.
            #[inline]
            pub fn $load_le(buf: &[u8], offset: usize) -> Result<$ty> {
                let end = offset.checked_add($width)
                    .ok_or(CodecError::truncated($width, buf.len().saturating_sub(offset)))?;
                let bytes = buf.get(offset..end)
                    .ok_or(CodecError::truncated($width, buf.len().saturating_sub(offset)))?;
                let mut raw = [0u8; $width];
                raw.copy_from_slice(bytes);
                Ok(<$ty>::from_le_bytes(raw))
            }

            /// Stores a value into `buf` at `offset`, big-endian.
            ///
            /// # Errors
            ///
            /// Returns [`CodecError::OutOfRange`] if the region does not fit.
            #[inline]
            pub fn $store_be(buf: &mut [u8], offset: usize, value: $ty) -> Result<()> {
                let cap = buf.len();
                let end = offset.checked_add($width)
                    .ok_or(CodecError::OutOfRange { offset, len: $width, cap })?;
                let target = buf.get_mut(offset..end)
                    .ok_or(CodecError::OutOfRange { offset, len: $width, cap })?;
                target.copy_from_slice(&value.to_be_bytes());
                Ok(())
            }

            /// Stores a value into `buf` at `offset`, little-endian.
            ///
            /// # Errors
            ///
            /// Returns [`CodecError::OutOfRange`] if the region does not fit.
            #[inline]
            pub fn $store_le(buf: &mut [u8], offset: usize, value: $ty) -> Result<()> {
                let cap = buf.len();
                let end = offset.checked_add($width)
                    .ok_or(CodecError::OutOfRange { offset, len: $width, cap })?;
                let target = buf.get_mut(offset..end)
                    .ok_or(CodecError::OutOfRange { offset, len: $width, cap })?;
                target.copy_from_slice(&value.to_le_bytes());
                Ok(())
            }
        )+
    };
}

impl_load_store! {
    load_u16_be, load_u16_le, store_u16_be, store_u16_le => u16, 2;
    load_u32_be, load_u32_le, store_u32_be, store_u32_le => u32, 4;
    load_u64_be, load_u64_le, store_u64_be, store_u64_le => u64, 8;
}
