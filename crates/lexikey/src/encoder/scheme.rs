//! The tuple encoding scheme.

use lexikey_core::{CodecError, Result, Slice};

use crate::element::Element;

use super::{CompositeEncoder, FieldEncoder, TupleEncoder};

/// The scheme tying the encoder family together.
///
/// All encoders it hands out produce the same wire format; the variants
/// differ only in how much of the key's shape is known at compile time.
#[derive(Debug, Default, Clone, Copy)]
pub struct TupleEncoding;

impl TupleEncoding {
    /// An encoder for single-value keys of type `T`.
    #[must_use]
    pub const fn field_encoder<T>() -> FieldEncoder<T> {
        FieldEncoder::new()
    }

    /// An encoder for typed composite keys (tuples of arity 1 through 4).
    #[must_use]
    pub const fn composite_encoder<T>() -> CompositeEncoder<T> {
        CompositeEncoder::new()
    }

    /// The dynamically shaped encoder.
    #[must_use]
    pub const fn dynamic() -> TupleEncoder {
        TupleEncoder::new()
    }

    /// An encoder bound to a fixed element count chosen at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnsupportedShape`] for arities outside 1
    /// through 4, matching the typed composite family.
    pub fn bound_encoder(arity: usize) -> Result<BoundTupleEncoder> {
        if (1..=4).contains(&arity) {
            Ok(BoundTupleEncoder { arity, inner: TupleEncoder::new() })
        } else {
            Err(CodecError::UnsupportedShape { arity })
        }
    }
}

/// A dynamic encoder that enforces one element count in both directions.
#[derive(Debug, Clone, Copy)]
pub struct BoundTupleEncoder {
    arity: usize,
    inner: TupleEncoder,
}

impl BoundTupleEncoder {
    /// The element count this encoder accepts.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Packs exactly [`arity`](Self::arity) elements into a key.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnsupportedShape`] on any other count.
    pub fn pack_key(&self, elements: &[Element]) -> Result<Slice> {
        if elements.len() != self.arity {
            return Err(CodecError::UnsupportedShape { arity: elements.len() });
        }
        Ok(self.inner.pack_key(elements))
    }

    /// Unpacks a key, requiring exactly [`arity`](Self::arity) elements.
    ///
    /// # Errors
    ///
    /// Wire decode errors, or [`CodecError::UnsupportedShape`] when the
    /// key holds a different number of elements.
    pub fn unpack_key(&self, key: &Slice) -> Result<Vec<Element>> {
        let elements = self.inner.unpack_key(key)?;
        if elements.len() != self.arity {
            return Err(CodecError::UnsupportedShape { arity: elements.len() });
        }
        Ok(elements)
    }
}
