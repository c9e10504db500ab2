//! Single-slot key encoder.

use std::marker::PhantomData;

use lexikey_core::{Result, SliceReader, SliceWriter};

use crate::tuple::{pack_element, unpack_element};

use super::{KeyEncoder, TuplePack};

/// Encodes a key made of exactly one value.
///
/// Zero-sized; obtain one through
/// [`TupleEncoding::field_encoder`](super::TupleEncoding::field_encoder)
/// or [`FieldEncoder::new`].
#[derive(Debug)]
pub struct FieldEncoder<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> FieldEncoder<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<T> Default for FieldEncoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FieldEncoder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldEncoder<T> {}

impl<T: TuplePack> KeyEncoder<T> for FieldEncoder<T> {
    fn write_key_to(&self, writer: &mut SliceWriter, key: &T) -> Result<()> {
        pack_element(writer, &key.to_element());
        Ok(())
    }

    fn read_key_from(&self, reader: &mut SliceReader<'_>) -> Result<T> {
        T::from_element(unpack_element(reader)?)
    }
}
