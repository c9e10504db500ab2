//! Dynamically shaped key encoder.

use lexikey_core::{CodecError, Result, Slice, SliceReader, SliceWriter};

use crate::element::Element;
use crate::range::KeyRange;
use crate::tuple::{pack_elements, unpack_elements};

use super::TuplePack;

/// Encodes keys whose shape is only known at runtime, as vectors of
/// [`Element`]s.
///
/// The typed `encode_keyN`/`decode_keyN` conveniences cover the common
/// case of a statically known shape without committing to a
/// [`CompositeEncoder`](super::CompositeEncoder) type parameter; they are
/// thin layers over the element path and produce identical bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct TupleEncoder;

impl TupleEncoder {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Packs a run of elements into a key.
    #[must_use]
    pub fn pack_key(&self, elements: &[Element]) -> Slice {
        let mut writer = SliceWriter::new();
        pack_elements(&mut writer, elements);
        writer.into_slice()
    }

    /// Unpacks a key into its elements.
    ///
    /// # Errors
    ///
    /// The decode errors of the wire format.
    pub fn unpack_key(&self, key: &Slice) -> Result<Vec<Element>> {
        let mut reader = SliceReader::new(key.as_bytes());
        unpack_elements(&mut reader)
    }

    /// Like [`unpack_key`](Self::unpack_key) but returning `None` instead
    /// of an error, for probing keys that may not be tuple-encoded.
    #[must_use]
    pub fn try_unpack_key(&self, key: &Slice) -> Option<Vec<Element>> {
        self.unpack_key(key).ok()
    }

    /// The key range selecting every key that extends `elements`.
    #[must_use]
    pub fn to_range(&self, elements: &[Element]) -> KeyRange {
        KeyRange::from_packed_prefix(&self.pack_key(elements))
    }

    /// Like [`to_range`](Self::to_range), under a raw key-space prefix.
    #[must_use]
    pub fn to_key_range(&self, prefix: &Slice, elements: &[Element]) -> KeyRange {
        let mut writer = SliceWriter::new();
        writer.write_slice(prefix);
        pack_elements(&mut writer, elements);
        KeyRange::from_packed_prefix(&writer.into_slice())
    }

    fn decode_exact<const N: usize>(&self, key: &Slice) -> Result<[Element; N]> {
        let elements = self.unpack_key(key)?;
        let found = elements.len();
        <[Element; N]>::try_from(elements)
            .map_err(|_| CodecError::format(format!("expected {N} elements, found {found}")))
    }

    #[must_use]
    pub fn encode_key1<T0: TuplePack>(&self, k0: &T0) -> Slice {
        self.pack_key(&[k0.to_element()])
    }

    #[must_use]
    pub fn encode_key2<T0: TuplePack, T1: TuplePack>(&self, k0: &T0, k1: &T1) -> Slice {
        self.pack_key(&[k0.to_element(), k1.to_element()])
    }

    #[must_use]
    pub fn encode_key3<T0: TuplePack, T1: TuplePack, T2: TuplePack>(
        &self,
        k0: &T0,
        k1: &T1,
        k2: &T2,
    ) -> Slice {
        self.pack_key(&[k0.to_element(), k1.to_element(), k2.to_element()])
    }

    #[must_use]
    pub fn encode_key4<T0: TuplePack, T1: TuplePack, T2: TuplePack, T3: TuplePack>(
        &self,
        k0: &T0,
        k1: &T1,
        k2: &T2,
        k3: &T3,
    ) -> Slice {
        self.pack_key(&[k0.to_element(), k1.to_element(), k2.to_element(), k3.to_element()])
    }

    #[must_use]
    pub fn encode_key5<T0: TuplePack, T1: TuplePack, T2: TuplePack, T3: TuplePack, T4: TuplePack>(
        &self,
        k0: &T0,
        k1: &T1,
        k2: &T2,
        k3: &T3,
        k4: &T4,
    ) -> Slice {
        self.pack_key(&[
            k0.to_element(),
            k1.to_element(),
            k2.to_element(),
            k3.to_element(),
            k4.to_element(),
        ])
    }

    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn encode_key6<
        T0: TuplePack,
        T1: TuplePack,
        T2: TuplePack,
        T3: TuplePack,
        T4: TuplePack,
        T5: TuplePack,
    >(
        &self,
        k0: &T0,
        k1: &T1,
        k2: &T2,
        k3: &T3,
        k4: &T4,
        k5: &T5,
    ) -> Slice {
        self.pack_key(&[
            k0.to_element(),
            k1.to_element(),
            k2.to_element(),
            k3.to_element(),
            k4.to_element(),
            k5.to_element(),
        ])
    }

    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn encode_key7<
        T0: TuplePack,
        T1: TuplePack,
        T2: TuplePack,
        T3: TuplePack,
        T4: TuplePack,
        T5: TuplePack,
        T6: TuplePack,
    >(
        &self,
        k0: &T0,
        k1: &T1,
        k2: &T2,
        k3: &T3,
        k4: &T4,
        k5: &T5,
        k6: &T6,
    ) -> Slice {
        self.pack_key(&[
            k0.to_element(),
            k1.to_element(),
            k2.to_element(),
            k3.to_element(),
            k4.to_element(),
            k5.to_element(),
            k6.to_element(),
        ])
    }

    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn encode_key8<
        T0: TuplePack,
        T1: TuplePack,
        T2: TuplePack,
        T3: TuplePack,
        T4: TuplePack,
        T5: TuplePack,
        T6: TuplePack,
        T7: TuplePack,
    >(
        &self,
        k0: &T0,
        k1: &T1,
        k2: &T2,
        k3: &T3,
        k4: &T4,
        k5: &T5,
        k6: &T6,
        k7: &T7,
    ) -> Slice {
        self.pack_key(&[
            k0.to_element(),
            k1.to_element(),
            k2.to_element(),
            k3.to_element(),
            k4.to_element(),
            k5.to_element(),
            k6.to_element(),
            k7.to_element(),
        ])
    }

    /// Decodes a single-element key.
    ///
    /// # Errors
    ///
    /// Wire decode errors, or [`CodecError::FormatError`] when the element
    /// count or a field kind does not match.
    pub fn decode_key1<T0: TuplePack>(&self, key: &Slice) -> Result<T0> {
        let [e0] = self.decode_exact::<1>(key)?;
        T0::from_element(e0)
    }

    /// Decodes a two-element key. Same errors as
    /// [`decode_key1`](Self::decode_key1).
    pub fn decode_key2<T0: TuplePack, T1: TuplePack>(&self, key: &Slice) -> Result<(T0, T1)> {
        let [e0, e1] = self.decode_exact::<2>(key)?;
        Ok((T0::from_element(e0)?, T1::from_element(e1)?))
    }

    /// Decodes a three-element key. Same errors as
    /// [`decode_key1`](Self::decode_key1).
    pub fn decode_key3<T0: TuplePack, T1: TuplePack, T2: TuplePack>(
        &self,
        key: &Slice,
    ) -> Result<(T0, T1, T2)> {
        let [e0, e1, e2] = self.decode_exact::<3>(key)?;
        Ok((T0::from_element(e0)?, T1::from_element(e1)?, T2::from_element(e2)?))
    }

    /// Decodes a four-element key. Same errors as
    /// [`decode_key1`](Self::decode_key1).
    pub fn decode_key4<T0: TuplePack, T1: TuplePack, T2: TuplePack, T3: TuplePack>(
        &self,
        key: &Slice,
    ) -> Result<(T0, T1, T2, T3)> {
        let [e0, e1, e2, e3] = self.decode_exact::<4>(key)?;
        Ok((
            T0::from_element(e0)?,
            T1::from_element(e1)?,
            T2::from_element(e2)?,
            T3::from_element(e3)?,
        ))
    }

    /// Decodes a five-element key. Same errors as
    /// [`decode_key1`](Self::decode_key1).
    pub fn decode_key5<T0: TuplePack, T1: TuplePack, T2: TuplePack, T3: TuplePack, T4: TuplePack>(
        &self,
        key: &Slice,
    ) -> Result<(T0, T1, T2, T3, T4)> {
        let [e0, e1, e2, e3, e4] = self.decode_exact::<5>(key)?;
        Ok((
            T0::from_element(e0)?,
            T1::from_element(e1)?,
            T2::from_element(e2)?,
            T3::from_element(e3)?,
            T4::from_element(e4)?,
        ))
    }

    /// Decodes a six-element key. Same errors as
    /// [`decode_key1`](Self::decode_key1).
    pub fn decode_key6<
        T0: TuplePack,
        T1: TuplePack,
        T2: TuplePack,
        T3: TuplePack,
        T4: TuplePack,
        T5: TuplePack,
    >(
        &self,
        key: &Slice,
    ) -> Result<(T0, T1, T2, T3, T4, T5)> {
        let [e0, e1, e2, e3, e4, e5] = self.decode_exact::<6>(key)?;
        Ok((
            T0::from_element(e0)?,
            T1::from_element(e1)?,
            T2::from_element(e2)?,
            T3::from_element(e3)?,
            T4::from_element(e4)?,
            T5::from_element(e5)?,
        ))
    }

    /// Decodes a seven-element key. Same errors as
    /// [`decode_key1`](Self::decode_key1).
    pub fn decode_key7<
        T0: TuplePack,
        T1: TuplePack,
        T2: TuplePack,
        T3: TuplePack,
        T4: TuplePack,
        T5: TuplePack,
        T6: TuplePack,
    >(
        &self,
        key: &Slice,
    ) -> Result<(T0, T1, T2, T3, T4, T5, T6)> {
        let [e0, e1, e2, e3, e4, e5, e6] = self.decode_exact::<7>(key)?;
        Ok((
            T0::from_element(e0)?,
            T1::from_element(e1)?,
            T2::from_element(e2)?,
            T3::from_element(e3)?,
            T4::from_element(e4)?,
            T5::from_element(e5)?,
            T6::from_element(e6)?,
        ))
    }

    /// Decodes an eight-element key. Same errors as
    /// [`decode_key1`](Self::decode_key1).
    pub fn decode_key8<
        T0: TuplePack,
        T1: TuplePack,
        T2: TuplePack,
        T3: TuplePack,
        T4: TuplePack,
        T5: TuplePack,
        T6: TuplePack,
        T7: TuplePack,
    >(
        &self,
        key: &Slice,
    ) -> Result<(T0, T1, T2, T3, T4, T5, T6, T7)> {
        let [e0, e1, e2, e3, e4, e5, e6, e7] = self.decode_exact::<8>(key)?;
        Ok((
            T0::from_element(e0)?,
            T1::from_element(e1)?,
            T2::from_element(e2)?,
            T3::from_element(e3)?,
            T4::from_element(e4)?,
            T5::from_element(e5)?,
            T6::from_element(e6)?,
            T7::from_element(e7)?,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use lexikey_core::Uuid64;

    #[test]
    fn dynamic_roundtrip() {
        let encoder = TupleEncoder::new();
        let elements =
            vec![Element::Str("users".into()), Element::Int(42), Element::Bool(true)];
        let key = encoder.pack_key(&elements);
        assert_eq!(encoder.unpack_key(&key).unwrap(), elements);
    }

    #[test]
    fn typed_conveniences_match_the_element_path() {
        let encoder = TupleEncoder::new();
        let via_elements = encoder.pack_key(&[
            Element::Str("orders".into()),
            Element::UInt(7),
            Element::Uuid64(Uuid64::new(3)),
        ]);
        let via_typed = encoder.encode_key3(&"orders".to_owned(), &7u64, &Uuid64::new(3));
        assert_eq!(via_elements, via_typed);

        let (name, id, token): (String, u64, Uuid64) = encoder.decode_key3(&via_typed).unwrap();
        assert_eq!((name.as_str(), id, token), ("orders", 7, Uuid64::new(3)));
    }

    #[test]
    fn decode_with_wrong_count_is_rejected() {
        let encoder = TupleEncoder::new();
        let key = encoder.encode_key2(&1i64, &2i64);
        assert!(matches!(encoder.decode_key1::<i64>(&key), Err(CodecError::FormatError(_))));
        assert!(matches!(
            encoder.decode_key3::<i64, i64, i64>(&key),
            Err(CodecError::FormatError(_))
        ));
    }

    #[test]
    fn try_unpack_swallows_garbage() {
        let encoder = TupleEncoder::new();
        assert!(encoder.try_unpack_key(&Slice::copy_from(&[0x42])).is_none());
        assert!(encoder.try_unpack_key(&Slice::copy_from(&[0x14])).is_some());
    }

    #[test]
    fn eight_slot_key_roundtrips() {
        let encoder = TupleEncoder::new();
        let key = encoder.encode_key8(
            &"a".to_owned(),
            &1i64,
            &2u64,
            &true,
            &1.5f64,
            &vec![9u8],
            &Uuid64::new(4),
            &None::<i64>,
        );
        let decoded: (String, i64, u64, bool, f64, Vec<u8>, Uuid64, Option<i64>) =
            encoder.decode_key8(&key).unwrap();
        assert_eq!(
            decoded,
            ("a".to_owned(), 1, 2, true, 1.5, vec![9], Uuid64::new(4), None)
        );
    }
}
