//! Encoder traits and the element binding for plain Rust types.

use lexikey_core::{CodecError, Result, Slice, SliceReader, SliceWriter, Uuid64, Uuid96};

use crate::element::Element;

/// A stateless translator between a typed key and its wire form.
///
/// Implementations are unit values; one instance may be shared across
/// threads freely, and every method is a pure transformation of its
/// arguments.
pub trait KeyEncoder<T>: Sync {
    /// Appends the wire form of `key` to `writer`.
    ///
    /// # Errors
    ///
    /// Implementation-specific; the tuple-format encoders in this crate
    /// never fail to write.
    fn write_key_to(&self, writer: &mut SliceWriter, key: &T) -> Result<()>;

    /// Reads one key from `reader`.
    ///
    /// # Errors
    ///
    /// The decode errors of the wire format, plus
    /// [`CodecError::FormatError`] when the decoded element kind does not
    /// match `T`.
    fn read_key_from(&self, reader: &mut SliceReader<'_>) -> Result<T>;

    /// Speculative read: on failure the cursor is restored to where it
    /// was and `None` is returned.
    fn try_read_key_from(&self, reader: &mut SliceReader<'_>) -> Option<T> {
        let start = reader.position();
        match self.read_key_from(reader) {
            Ok(key) => Some(key),
            Err(_) => {
                // rewinding to a previously held position cannot fail
                let _ = reader.seek(start);
                None
            }
        }
    }

    /// Encodes `key` into a fresh buffer.
    ///
    /// # Errors
    ///
    /// Same as [`write_key_to`](Self::write_key_to).
    fn encode_key(&self, key: &T) -> Result<Slice> {
        let mut writer = SliceWriter::new();
        self.write_key_to(&mut writer, key)?;
        Ok(writer.into_slice())
    }

    /// Decodes a complete key, rejecting trailing bytes.
    ///
    /// # Errors
    ///
    /// Same as [`read_key_from`](Self::read_key_from), plus
    /// [`CodecError::FormatError`] if the buffer holds more than one key.
    fn decode_key(&self, encoded: &Slice) -> Result<T> {
        let mut reader = SliceReader::new(encoded.as_bytes());
        let key = self.read_key_from(&mut reader)?;
        if !reader.is_at_end() {
            return Err(CodecError::format(format!(
                "{} trailing bytes after key",
                reader.remaining()
            )));
        }
        Ok(key)
    }
}

/// Binding between a plain Rust type and its [`Element`] representation.
///
/// This is the seam the typed encoders hang on: anything implementing
/// `TuplePack` can appear as a field of a composite key or a slot of a
/// dynamic one.
pub trait TuplePack: Sized {
    /// This value as an element.
    fn to_element(&self) -> Element;

    /// Recovers a value from an element.
    ///
    /// # Errors
    ///
    /// [`CodecError::FormatError`] on an element of the wrong kind,
    /// [`CodecError::Overflow`] when an integer does not fit the target
    /// width.
    fn from_element(element: Element) -> Result<Self>;
}

fn wrong_kind(expected: &str, found: &Element) -> CodecError {
    CodecError::format(format!("expected {expected} element, found {:?}", found.kind()))
}

impl TuplePack for i64 {
    fn to_element(&self) -> Element {
        Element::Int(*self)
    }

    fn from_element(element: Element) -> Result<Self> {
        match element {
            Element::Int(v) => Ok(v),
            Element::UInt(v) => i64::try_from(v).map_err(|_| CodecError::Overflow),
            other => Err(wrong_kind("integer", &other)),
        }
    }
}

impl TuplePack for u64 {
    fn to_element(&self) -> Element {
        Element::UInt(*self)
    }

    fn from_element(element: Element) -> Result<Self> {
        match element {
            Element::UInt(v) => Ok(v),
            Element::Int(v) => u64::try_from(v).map_err(|_| CodecError::Overflow),
            other => Err(wrong_kind("integer", &other)),
        }
    }
}

impl TuplePack for bool {
    fn to_element(&self) -> Element {
        Element::Bool(*self)
    }

    fn from_element(element: Element) -> Result<Self> {
        match element {
            Element::Bool(v) => Ok(v),
            other => Err(wrong_kind("boolean", &other)),
        }
    }
}

impl TuplePack for f32 {
    fn to_element(&self) -> Element {
        Element::Float(*self)
    }

    fn from_element(element: Element) -> Result<Self> {
        match element {
            Element::Float(v) => Ok(v),
            other => Err(wrong_kind("f32", &other)),
        }
    }
}

impl TuplePack for f64 {
    fn to_element(&self) -> Element {
        Element::Double(*self)
    }

    fn from_element(element: Element) -> Result<Self> {
        match element {
            Element::Double(v) => Ok(v),
            other => Err(wrong_kind("f64", &other)),
        }
    }
}

impl TuplePack for String {
    fn to_element(&self) -> Element {
        Element::Str(self.clone())
    }

    fn from_element(element: Element) -> Result<Self> {
        match element {
            Element::Str(v) => Ok(v),
            other => Err(wrong_kind("string", &other)),
        }
    }
}

impl TuplePack for Slice {
    fn to_element(&self) -> Element {
        Element::Bytes(self.clone())
    }

    fn from_element(element: Element) -> Result<Self> {
        match element {
            Element::Bytes(v) => Ok(v),
            other => Err(wrong_kind("bytes", &other)),
        }
    }
}

impl TuplePack for Vec<u8> {
    fn to_element(&self) -> Element {
        Element::Bytes(Slice::copy_from(self))
    }

    fn from_element(element: Element) -> Result<Self> {
        match element {
            Element::Bytes(v) => Ok(v.to_vec()),
            other => Err(wrong_kind("bytes", &other)),
        }
    }
}

impl TuplePack for Uuid64 {
    fn to_element(&self) -> Element {
        Element::Uuid64(*self)
    }

    fn from_element(element: Element) -> Result<Self> {
        match element {
            Element::Uuid64(v) => Ok(v),
            other => Err(wrong_kind("uuid64", &other)),
        }
    }
}

impl TuplePack for Uuid96 {
    fn to_element(&self) -> Element {
        Element::Uuid96(*self)
    }

    fn from_element(element: Element) -> Result<Self> {
        match element {
            Element::Uuid96(v) => Ok(v),
            other => Err(wrong_kind("uuid96", &other)),
        }
    }
}

impl TuplePack for u128 {
    fn to_element(&self) -> Element {
        Element::Uuid128(*self)
    }

    fn from_element(element: Element) -> Result<Self> {
        match element {
            Element::Uuid128(v) => Ok(v),
            other => Err(wrong_kind("uuid128", &other)),
        }
    }
}

impl TuplePack for Vec<Element> {
    fn to_element(&self) -> Element {
        Element::Tuple(self.clone())
    }

    fn from_element(element: Element) -> Result<Self> {
        match element {
            Element::Tuple(v) => Ok(v),
            other => Err(wrong_kind("tuple", &other)),
        }
    }
}

impl<T: TuplePack> TuplePack for Option<T> {
    fn to_element(&self) -> Element {
        match self {
            Some(value) => value.to_element(),
            None => Element::Nil,
        }
    }

    fn from_element(element: Element) -> Result<Self> {
        match element {
            Element::Nil => Ok(None),
            other => T::from_element(other).map(Some),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn integer_binding_crosses_carriers() {
        assert_eq!(i64::from_element(Element::UInt(5)).unwrap(), 5);
        assert_eq!(u64::from_element(Element::Int(5)).unwrap(), 5);
        assert_eq!(i64::from_element(Element::UInt(u64::MAX)), Err(CodecError::Overflow));
        assert_eq!(u64::from_element(Element::Int(-1)), Err(CodecError::Overflow));
    }

    #[test]
    fn wrong_kinds_are_format_errors() {
        assert!(matches!(bool::from_element(Element::Int(1)), Err(CodecError::FormatError(_))));
        assert!(matches!(String::from_element(Element::Nil), Err(CodecError::FormatError(_))));
        assert!(matches!(f32::from_element(Element::Double(1.0)), Err(CodecError::FormatError(_))));
    }

    #[test]
    fn option_maps_through_nil() {
        assert_eq!(None::<i64>.to_element(), Element::Nil);
        assert_eq!(Option::<i64>::from_element(Element::Nil).unwrap(), None);
        assert_eq!(Option::<i64>::from_element(Element::Int(3)).unwrap(), Some(3));
    }
}
