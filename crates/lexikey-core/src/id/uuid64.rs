//! 64-bit identifier codec.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::buffer::{SliceReader, SliceWriter};
use crate::error::{CodecError, Result};

use super::{base62, random};

/// An opaque 64-bit identifier.
///
/// Serialized form is always big-endian, so byte-wise comparison of
/// serialized identifiers matches numeric comparison of their values.
///
/// Text forms, by format specifier (lowercase specifier gives lowercase
/// hex where applicable):
///
/// | spec | example (value `0x0123_4567_89AB_CDEF`) |
/// |------|------------------------------------------|
/// | `D`  | `01234567-89ABCDEF`                      |
/// | `N`/`X` | `0123456789ABCDEF`                    |
/// | `B`  | `{01234567-89ABCDEF}`                    |
/// | `C`  | base-62, unpadded                        |
/// | `Z`  | base-62, zero-padded to 11 characters    |
/// | `R`  | decimal                                  |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uuid64(u64);

impl Uuid64 {
    /// The all-zero identifier.
    pub const ZERO: Self = Self(0);

    /// The largest identifier.
    pub const MAX: Self = Self(u64::MAX);

    /// Wraps a raw 64-bit value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Builds an identifier from its high and low 32-bit halves.
    #[must_use]
    pub const fn from_parts(hi: u32, lo: u32) -> Self {
        Self(((hi as u64) << 32) | lo as u64)
    }

    /// The raw 64-bit value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// High 32 bits.
    #[must_use]
    pub const fn hi(self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Low 32 bits.
    #[must_use]
    pub const fn lo(self) -> u32 {
        self.0 as u32
    }

    /// Reconstructs an identifier from its big-endian byte form.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(u64::from_be_bytes(bytes))
    }

    /// Big-endian byte form.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Appends the big-endian byte form to `writer`.
    pub fn write_to(self, writer: &mut SliceWriter) {
        writer.write_u64_be(self.0);
    }

    /// Reads an identifier from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Truncated`] if fewer than 8 bytes remain.
    pub fn read_from(reader: &mut SliceReader<'_>) -> Result<Self> {
        reader.read_u64_be().map(Self)
    }

    /// A fresh identifier from the process-wide generator.
    #[must_use]
    pub fn random() -> Self {
        Self(random::next_u64())
    }

    /// A fresh identifier from a caller-supplied generator.
    pub fn random_from<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen())
    }

    /// Parses any of the hex text forms.
    ///
    /// Accepts the empty string (the zero identifier), 16 bare hex digits,
    /// the 17-character hyphenated form, and either of those wrapped in
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
            16 => parse_hex_u64(inner).map(Self),
            17 => {
                let bytes = inner.as_bytes();
                if bytes[8] != b'-' {
                    return Err(bad_format(text));
                }
                let hi = parse_hex_u32(&inner[..8])?;
                let lo = parse_hex_u32(&inner[9..])?;
                Ok(Self::from_parts(hi, lo))
            }
            _ => Err(bad_format(text)),
        }
    }

    /// Parses the base-62 text form (specifiers `C` and `Z`).
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::FormatError`] on characters outside the
    /// base-62 alphabet or values past 64 bits.
    pub fn from_base62(text: &str) -> Result<Self> {
        base62::decode_u64(text).map(Self)
    }

    /// Renders the identifier per a single-character format specifier.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::FormatError`] for an unknown specifier.
    pub fn format(self, spec: char) -> Result<String> {
        match spec {
            'D' => Ok(format!("{:08X}-{:08X}", self.hi(), self.lo())),
            'd' => Ok(format!("{:08x}-{:08x}", self.hi(), self.lo())),
            'N' | 'X' => Ok(format!("{:016X}", self.0)),
            'n' | 'x' => Ok(format!("{:016x}", self.0)),
            'B' => Ok(format!("{{{:08X}-{:08X}}}", self.hi(), self.lo())),
            'b' => Ok(format!("{{{:08x}-{:08x}}}", self.hi(), self.lo())),
            'C' | 'c' => Ok(base62::encode_u64(self.0, None)),
            'Z' | 'z' => Ok(base62::encode_u64(self.0, Some(base62::MAX_U64_DIGITS))),
            'R' | 'r' => Ok(self.0.to_string()),
            other => Err(CodecError::format(format!("unknown format specifier {other:?}"))),
        }
    }
}

impl fmt::Display for Uuid64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}-{:08X}", self.hi(), self.lo())
    }
}

impl FromStr for Uuid64 {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<u64> for Uuid64 {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Uuid64> for u64 {
    fn from(id: Uuid64) -> Self {
        id.0
    }
}

pub(super) fn strip_braces(text: &str) -> Result<&str> {
    let bytes = text.as_bytes();
    if bytes.first() == Some(&b'{') {
        if bytes.last() != Some(&b'}') || text.len() < 2 {
            return Err(bad_format(text));
        }
        Ok(&text[1..text.len() - 1])
    } else {
        Ok(text)
    }
}

pub(super) fn parse_hex_u32(digits: &str) -> Result<u32> {
    // from_str_radix tolerates a leading sign; only bare digits are valid
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(bad_format(digits));
    }
    u32::from_str_radix(digits, 16).map_err(|_| bad_format(digits))
}

pub(super) fn parse_hex_u64(digits: &str) -> Result<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(bad_format(digits));
    }
    u64::from_str_radix(digits, 16).map_err(|_| bad_format(digits))
}

pub(super) fn bad_format(text: &str) -> CodecError {
    CodecError::format(format!("not a valid identifier: {text:?}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: Uuid64 = Uuid64::new(0x0123_4567_89AB_CDEF);

    #[test]
    fn parts_roundtrip() {
        assert_eq!(Uuid64::from_parts(0x0123_4567, 0x89AB_CDEF), SAMPLE);
        assert_eq!(SAMPLE.hi(), 0x0123_4567);
        assert_eq!(SAMPLE.lo(), 0x89AB_CDEF);
    }

    #[test]
    fn wire_form_is_big_endian() {
        assert_eq!(SAMPLE.to_bytes(), [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]);
        assert_eq!(Uuid64::from_bytes(SAMPLE.to_bytes()), SAMPLE);
    }

    #[test]
    fn wire_ordering_matches_numeric_ordering() {
        let values = [0u64, 1, 0xFF, 0x100, 1 << 32, u64::MAX];
        for pair in values.windows(2) {
            let a = Uuid64::new(pair[0]).to_bytes();
            let b = Uuid64::new(pair[1]).to_bytes();
            assert!(a < b);
        }
    }

    #[test]
    fn cursor_roundtrip() {
        let mut w = SliceWriter::new();
        SAMPLE.write_to(&mut w);
        let slice = w.into_slice();
        let mut r = SliceReader::new(slice.as_bytes());
        assert_eq!(Uuid64::read_from(&mut r).unwrap(), SAMPLE);
        assert!(r.is_at_end());
    }

    #[test]
    fn read_from_short_buffer_is_truncated() {
        let mut r = SliceReader::new(&[0x01, 0x02]);
        assert!(matches!(Uuid64::read_from(&mut r), Err(CodecError::Truncated { .. })));
        assert_eq!(r.position(), 0);
    }

    #[test]
    fn format_specifiers() {
        assert_eq!(SAMPLE.format('D').unwrap(), "01234567-89ABCDEF");
        assert_eq!(SAMPLE.format('d').unwrap(), "01234567-89abcdef");
        assert_eq!(SAMPLE.format('N').unwrap(), "0123456789ABCDEF");
        assert_eq!(SAMPLE.format('x').unwrap(), "0123456789abcdef");
        assert_eq!(SAMPLE.format('B').unwrap(), "{01234567-89ABCDEF}");
        assert_eq!(SAMPLE.format('R').unwrap(), "81985529216486895");
        assert_eq!(SAMPLE.format('Z').unwrap().len(), 11);
        assert!(matches!(SAMPLE.format('Q'), Err(CodecError::FormatError(_))));
    }

    #[test]
    fn parse_accepts_all_hex_shapes() {
        for text in [
            "0123456789ABCDEF",
            "0123456789abcdef",
            "01234567-89ABCDEF",
            "{0123456789ABCDEF}",
            "{01234567-89ABCDEF}",
        ] {
            assert_eq!(Uuid64::parse(text).unwrap(), SAMPLE, "{text}");
        }
        assert_eq!(Uuid64::parse("").unwrap(), Uuid64::ZERO);
        assert_eq!("01234567-89ABCDEF".parse::<Uuid64>().unwrap(), SAMPLE);
    }

    #[test]
    fn parse_rejects_malformed_text() {
        for text in [
            "0123",
            "0123456789ABCDEFF",
            "01234567_89ABCDEF",
            "{0123456789ABCDEF",
            "012345678-9ABCDEF",
            "XXXXXXXXXXXXXXXX",
        ] {
            assert!(matches!(Uuid64::parse(text), Err(CodecError::FormatError(_))), "{text}");
        }
    }

    #[test]
    fn parse_rejects_signed_hex() {
        // from_str_radix would accept the sign on its own
        for text in ["+123456789ABCDEF", "-123456789ABCDEF", "+1234567-89ABCDEF"] {
            assert!(matches!(Uuid64::parse(text), Err(CodecError::FormatError(_))), "{text}");
        }
    }

    #[test]
    fn parse_rejects_multibyte_text_without_panicking() {
        // 16 bytes, with a two-byte char straddling the group boundary
        let text = "aaaaaaa\u{e9}aaaaaaa";
        assert_eq!(text.len(), 16);
        assert!(matches!(Uuid64::parse(text), Err(CodecError::FormatError(_))));
    }

    #[test]
    fn base62_forms_roundtrip() {
        for id in [Uuid64::ZERO, SAMPLE, Uuid64::MAX] {
            assert_eq!(Uuid64::from_base62(&id.format('C').unwrap()).unwrap(), id);
            assert_eq!(Uuid64::from_base62(&id.format('Z').unwrap()).unwrap(), id);
        }
    }

    #[test]
    fn display_matches_default_format() {
        assert_eq!(SAMPLE.to_string(), SAMPLE.format('D').unwrap());
    }

    #[test]
    fn random_draws_are_distinct() {
        assert_ne!(Uuid64::random(), Uuid64::random());

        use rand::SeedableRng;
        let mut a = rand::rngs::StdRng::seed_from_u64(7);
        let mut b = rand::rngs::StdRng::seed_from_u64(7);
        assert_eq!(Uuid64::random_from(&mut a), Uuid64::random_from(&mut b));
    }
}
