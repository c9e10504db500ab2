//! Fixed-arity composite key encoders.

use std::marker::PhantomData;

use lexikey_core::{CodecError, Result, SliceReader, SliceWriter};

use crate::element::Element;
use crate::tuple::{pack_element, unpack_element};

use super::{KeyEncoder, TuplePack};

/// A [`KeyEncoder`] over a fixed number of fields, with partial-key
/// encoding for prefix scans.
///
/// Because each field's wire form is self-delimiting, encoding the first
/// `k` fields produces a byte prefix of the full key's encoding. That is
/// what makes partial keys usable as range bounds.
pub trait CompositeKeyEncoder<T>: KeyEncoder<T> {
    /// Number of fields in a full key.
    fn arity(&self) -> usize;

    /// Appends the wire form of the first `count` fields of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnsupportedShape`] when `count` exceeds the
    /// arity.
    fn write_key_parts_to(&self, writer: &mut SliceWriter, count: usize, key: &T) -> Result<()>;

    /// Reads `count` leading fields as elements.
    ///
    /// A typed tuple cannot be partially populated, so partial reads come
    /// back as elements; full-arity reads go through
    /// [`read_key_from`](KeyEncoder::read_key_from).
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnsupportedShape`] when `count` exceeds the
    /// arity, otherwise the decode errors of the wire format.
    fn read_key_parts_from(
        &self,
        reader: &mut SliceReader<'_>,
        count: usize,
    ) -> Result<Vec<Element>>;
}

/// Encodes keys that are typed tuples of [`TuplePack`] fields, arity 1
/// through 4.
///
/// Zero-sized; obtain one through
/// [`TupleEncoding::composite_encoder`](super::TupleEncoding::composite_encoder).
#[derive(Debug)]
pub struct CompositeEncoder<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> CompositeEncoder<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<T> Default for CompositeEncoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CompositeEncoder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CompositeEncoder<T> {}

macro_rules! impl_composite {
    ($arity:literal => $($idx:tt : $field:ident),+) => {
        impl<$($field: TuplePack),+> KeyEncoder<($($field,)+)> for CompositeEncoder<($($field,)+)> {
            fn write_key_to(&self, writer: &mut SliceWriter, key: &($($field,)+)) -> Result<()> {
                $(pack_element(writer, &key.$idx.to_element());)+
                Ok(())
            }

            fn read_key_from(&self, reader: &mut SliceReader<'_>) -> Result<($($field,)+)> {
                Ok(($($field::from_element(unpack_element(reader)?)?,)+))
            }
        }

        impl<$($field: TuplePack),+> CompositeKeyEncoder<($($field,)+)>
            for CompositeEncoder<($($field,)+)>
        {
            fn arity(&self) -> usize {
                $arity
            }

            fn write_key_parts_to(
                &self,
                writer: &mut SliceWriter,
                count: usize,
                key: &($($field,)+),
            ) -> Result<()> {
                if count > $arity {
                    return Err(CodecError::UnsupportedShape { arity: count });
                }
                $(
                    if $idx < count {
                        pack_element(writer, &key.$idx.to_element());
                    }
                )+
                Ok(())
            }

            fn read_key_parts_from(
                &self,
                reader: &mut SliceReader<'_>,
                count: usize,
            ) -> Result<Vec<Element>> {
                if count > $arity {
                    return Err(CodecError::UnsupportedShape { arity: count });
                }
                (0..count).map(|_| unpack_element(reader)).collect()
            }
        }
    };
}

impl_composite!(1 => 0: T0);
impl_composite!(2 => 0: T0, 1: T1);
impl_composite!(3 => 0: T0, 1: T1, 2: T2);
impl_composite!(4 => 0: T0, 1: T1, 2: T2, 3: T3);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use lexikey_core::{Slice, Uuid64};

    #[test]
    fn full_key_roundtrip() {
        let encoder = CompositeEncoder::<(u64, String, bool)>::new();
        let key = (42u64, "orders".to_owned(), true);
        let encoded = encoder.encode_key(&key).unwrap();
        assert_eq!(encoder.decode_key(&encoded).unwrap(), key);
    }

    #[test]
    fn partial_encoding_is_a_byte_prefix() {
        let encoder = CompositeEncoder::<(u64, String, Uuid64, i64)>::new();
        let key = (9u64, "a\0b".to_owned(), Uuid64::new(77), -3i64);
        let full = encoder.encode_key(&key).unwrap();
        for count in 0..=4 {
            let mut writer = SliceWriter::new();
            encoder.write_key_parts_to(&mut writer, count, &key).unwrap();
            assert!(
                full.as_bytes().starts_with(writer.as_bytes()),
                "first {count} fields are not a prefix"
            );
        }
    }

    #[test]
    fn partial_reads_come_back_as_elements() {
        let encoder = CompositeEncoder::<(i64, String)>::new();
        let encoded = encoder.encode_key(&(5i64, "x".to_owned())).unwrap();
        let mut reader = SliceReader::new(encoded.as_bytes());
        let parts = encoder.read_key_parts_from(&mut reader, 1).unwrap();
        assert_eq!(parts, vec![Element::Int(5)]);
        assert!(!reader.is_at_end());
    }

    #[test]
    fn count_past_arity_is_unsupported() {
        let encoder = CompositeEncoder::<(i64, i64)>::new();
        let mut writer = SliceWriter::new();
        assert_eq!(
            encoder.write_key_parts_to(&mut writer, 3, &(1, 2)),
            Err(CodecError::UnsupportedShape { arity: 3 })
        );
        let mut reader = SliceReader::new(&[]);
        assert_eq!(
            encoder.read_key_parts_from(&mut reader, 3),
            Err(CodecError::UnsupportedShape { arity: 3 })
        );
    }

    #[test]
    fn ordering_is_field_major() {
        let encoder = CompositeEncoder::<(String, i64)>::new();
        let a = encoder.encode_key(&("alpha".to_owned(), 100)).unwrap();
        let b = encoder.encode_key(&("alpha".to_owned(), 101)).unwrap();
        let c = encoder.encode_key(&("beta".to_owned(), 0)).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn optional_fields_use_nil() {
        let encoder = CompositeEncoder::<(u64, Option<Slice>)>::new();
        let key = (1u64, None::<Slice>);
        let encoded = encoder.encode_key(&key).unwrap();
        let (id, payload) = encoder.decode_key(&encoded).unwrap();
        assert_eq!(id, 1);
        assert!(payload.is_none());
    }
}
