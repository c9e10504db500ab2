//! 96-bit identifier codec.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::buffer::{SliceReader, SliceWriter};
use crate::error::{CodecError, Result};

use super::random;
use super::uuid64::{bad_format, parse_hex_u32, strip_braces};

/// An opaque 96-bit identifier, held as a 32-bit high part over a 64-bit
/// low part.
///
/// Serialized form is 12 bytes, big-endian high part first, so byte-wise
/// comparison of serialized identifiers matches numeric comparison.
///
/// Text forms mirror [`Uuid64`](super::Uuid64) minus the base-62
/// specifiers: `D` is three hyphenated 8-digit hex groups, `N`/`X` is 24
/// bare hex digits, `B` wraps the hyphenated form in braces, and `R` is
/// the decimal value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Uuid96 {
    hi: u32,
    lo: u64,
}

impl Uuid96 {
    /// The all-zero identifier.
    pub const ZERO: Self = Self { hi: 0, lo: 0 };

    /// The largest identifier.
    pub const MAX: Self = Self { hi: u32::MAX, lo: u64::MAX };

    /// Builds an identifier from its 32-bit high and 64-bit low parts.
    #[must_use]
    pub const fn from_parts(hi: u32, lo: u64) -> Self {
        Self { hi, lo }
    }

    /// High 32 bits.
    #[must_use]
    pub const fn hi(self) -> u32 {
        self.hi
    }

    /// Low 64 bits.
    #[must_use]
    pub const fn lo(self) -> u64 {
        self.lo
    }

    /// The value as the low 96 bits of a u128.
    #[must_use]
    pub const fn as_u128(self) -> u128 {
        ((self.hi as u128) << 64) | self.lo as u128
    }

    /// Reconstructs an identifier from its big-endian byte form.
    #[must_use]
    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        let mut hi = [0u8; 4];
        let mut lo = [0u8; 8];
        hi.copy_from_slice(&bytes[..4]);
        lo.copy_from_slice(&bytes[4..]);
        Self { hi: u32::from_be_bytes(hi), lo: u64::from_be_bytes(lo) }
    }

    /// Big-endian byte form.
    #[must_use]
    pub fn to_bytes(self) -> [u8; 12] {
        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&self.hi.to_be_bytes());
        bytes[4..].copy_from_slice(&self.lo.to_be_bytes());
        bytes
    }

    /// Appends the big-endian byte form to `writer`.
    pub fn write_to(self, writer: &mut SliceWriter) {
        writer.write_u32_be(self.hi);
        writer.write_u64_be(self.lo);
    }

    /// Reads an identifier from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Truncated`] if fewer than 12 bytes remain;
    /// the cursor does not advance in that case.
    pub fn read_from(reader: &mut SliceReader<'_>) -> Result<Self> {
        if reader.remaining() < 12 {
            return Err(CodecError::truncated(12, reader.remaining()));
        }
        let hi = reader.read_u32_be()?;
        let lo = reader.read_u64_be()?;
        Ok(Self { hi, lo })
    }

    /// A fresh identifier from the process-wide generator.
    #[must_use]
    pub fn random() -> Self {
        let (hi, lo) = random::next_u96();
        Self { hi, lo }
    }

    /// A fresh identifier from a caller-supplied generator.
    pub fn random_from<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self { hi: rng.gen(), lo: rng.gen() }
    }

    /// Parses any of the hex text forms.
    ///
    /// Accepts the empty string (the zero identifier), 24 bare hex digits,
    /// the 26-character hyphenated form, and either of those wrapped in
    /// braces. Hex digits may be any case.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::FormatError`] on any other shape.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::ZERO);
        }
        // hex forms are pure ASCII; rejecting early also keeps the
        // byte-offset group slicing below on char boundaries
        if !trimmed.is_ascii() {
            return Err(bad_format(text));
        }
        let inner = strip_braces(trimmed)?;
        match inner.len() {
            24 => Self::from_hex_groups(&inner[..8], &inner[8..16], &inner[16..]),
            26 => {
                let bytes = inner.as_bytes();
                if bytes[8] != b'-' || bytes[17] != b'-' {
                    return Err(bad_format(text));
                }
                Self::from_hex_groups(&inner[..8], &inner[9..17], &inner[18..])
            }
            _ => Err(bad_format(text)),
        }
    }

    /// Renders the identifier per a single-character format specifier.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::FormatError`] for an unknown specifier.
    pub fn format(self, spec: char) -> Result<String> {
        let (a, b, c) = self.hex_groups();
        match spec {
            'D' => Ok(format!("{a:08X}-{b:08X}-{c:08X}")),
            'd' => Ok(format!("{a:08x}-{b:08x}-{c:08x}")),
            'N' | 'X' => Ok(format!("{a:08X}{b:08X}{c:08X}")),
            'n' | 'x' => Ok(format!("{a:08x}{b:08x}{c:08x}")),
            'B' => Ok(format!("{{{a:08X}-{b:08X}-{c:08X}}}")),
            'b' => Ok(format!("{{{a:08x}-{b:08x}-{c:08x}}}")),
            'R' | 'r' => Ok(self.as_u128().to_string()),
            other => Err(CodecError::format(format!("unknown format specifier {other:?}"))),
        }
    }

    fn from_hex_groups(a: &str, b: &str, c: &str) -> Result<Self> {
        let hi = parse_hex_u32(a)?;
        let mid = parse_hex_u32(b)?;
        let low = parse_hex_u32(c)?;
        Ok(Self { hi, lo: (u64::from(mid) << 32) | u64::from(low) })
    }

    const fn hex_groups(self) -> (u32, u32, u32) {
        (self.hi, (self.lo >> 32) as u32, self.lo as u32)
    }
}

impl fmt::Display for Uuid96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b, c) = self.hex_groups();
        write!(f, "{a:08X}-{b:08X}-{c:08X}")
    }
}

impl FromStr for Uuid96 {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
