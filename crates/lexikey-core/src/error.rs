//! Error types for the core crate.

use thiserror::Error;

/// Errors produced by buffer access, binary primitives, and text parsing.
///
/// All errors are surfaced synchronously to the caller of the failing
/// encode/decode call; nothing is retried internally, since every operation
/// here is a pure function of its input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A requested sub-region exceeds the bounds of its parent buffer.
    #[error("region out of range: offset {offset} + len {len} exceeds capacity {cap}")]
    OutOfRange {
        /// Requested start offset.
        offset: usize,
        /// Requested length.
        len: usize,
        /// Available capacity.
        cap: usize,
    },

    /// A read required more bytes than the buffer had left.
    #[error("truncated input: needed {needed} bytes, {remaining} remaining")]
    Truncated {
        /// Bytes the operation required.
        needed: usize,
        /// Bytes actually remaining.
        remaining: usize,
    },

    /// A variable-length integer ran past its maximal width.
    #[error("malformed varint: continuation past maximal width")]
    MalformedVarint,

    /// A decoded magnitude does not fit the requested integer width.
    #[error("integer overflow: decoded value does not fit the target width")]
    Overflow,

    /// A value lies outside the domain of the ordered compact encoding.
    #[error("value too large for ordered compact encoding")]
    ValueTooLarge,

    /// A textual or wire representation could not be parsed.
    #[error("format error: {0}")]
    FormatError(String),

    /// The requested encoder shape is not provided by the active encoding.
    #[error("unsupported key shape: arity {arity}")]
    UnsupportedShape {
        /// The requested arity.
        arity: usize,
    },
}

impl CodecError {
    /// Creates a [`CodecError::FormatError`] from any displayable message.
    #[must_use]
    pub fn format(msg: impl Into<String>) -> Self {
        Self::FormatError(msg.into())
    }

    /// Creates a [`CodecError::Truncated`] for a read of `needed` bytes when
    /// only `remaining` were left.
    #[must_use]
    pub const fn truncated(needed: usize, remaining: usize) -> Self {
        Self::Truncated { needed, remaining }
    }
}

/// Result alias used throughout the codec layer.
pub type Result<T> = std::result::Result<T, CodecError>;
