//! The primitive value model for tuple keys.

use std::cmp::Ordering;

use lexikey_core::{Slice, Uuid64, Uuid96};

/// The closed set of primitive kinds a tuple key may contain.
///
/// `Int` and `UInt` are one numeric domain split across two carriers:
/// they pack identically, compare across variants by value, and decoding
/// canonicalizes to `Int` whenever the value fits `i64`.
///
/// Floats carry their exact bit pattern. Equality and ordering use the
/// same sign-transposed total order as the wire form, so NaN has a fixed
/// place in the order and equal bit patterns are equal values.
#[derive(Debug, Clone)]
pub enum Element {
    /// The absent value.
    Nil,
    /// An opaque byte string.
    Bytes(Slice),
    /// A UTF-8 string.
    Str(String),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer; needed for values above `i64::MAX`.
    UInt(u64),
    /// A 32-bit IEEE float.
    Float(f32),
    /// A 64-bit IEEE float.
    Double(f64),
    /// A boolean.
    Bool(bool),
    /// A 64-bit identifier.
    Uuid64(Uuid64),
    /// A 96-bit identifier.
    Uuid96(Uuid96),
    /// A 128-bit identifier, held as raw bits.
    Uuid128(u128),
    /// A nested tuple.
    Tuple(Vec<Element>),
}

/// Kind rank of an [`Element`], in wire-tag order.
///
/// The declaration order here is the cross-kind sort order of the wire
/// format; the derived `Ord` must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementKind {
    Nil,
    Bytes,
    Str,
    Tuple,
    Int,
    Float,
    Double,
    Bool,
    Uuid128,
    Uuid96,
    Uuid64,
}

impl Element {
    /// The kind rank of this element.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Nil => ElementKind::Nil,
            Self::Bytes(_) => ElementKind::Bytes,
            Self::Str(_) => ElementKind::Str,
            Self::Tuple(_) => ElementKind::Tuple,
            Self::Int(_) | Self::UInt(_) => ElementKind::Int,
            Self::Float(_) => ElementKind::Float,
            Self::Double(_) => ElementKind::Double,
            Self::Bool(_) => ElementKind::Bool,
            Self::Uuid128(_) => ElementKind::Uuid128,
            Self::Uuid96(_) => ElementKind::Uuid96,
            Self::Uuid64(_) => ElementKind::Uuid64,
        }
    }

    /// Returns `true` for [`Element::Nil`].
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    fn int_value(&self) -> Option<i128> {
        match self {
            Self::Int(v) => Some(i128::from(*v)),
            Self::UInt(v) => Some(i128::from(*v)),
            _ => None,
        }
    }
}

/// Monotone mapping from IEEE bits to an ordered unsigned key.
///
/// Positive values get the sign bit set; negative values are fully
/// inverted. The same transform produces the wire form, so in-memory
/// ordering and encoded ordering agree by construction.
pub(crate) fn f32_order_key(value: f32) -> u32 {
    let bits = value.to_bits();
    if bits >> 31 == 0 {
        bits | 0x8000_0000
    } else {
        !bits
    }
}

/// See [`f32_order_key`].
pub(crate) fn f64_order_key(value: f64) -> u64 {
    let bits = value.to_bits();
    if bits >> 63 == 0 {
        bits | 0x8000_0000_0000_0000
    } else {
        !bits
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Element {}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        if let (Some(a), Some(b)) = (self.int_value(), other.int_value()) {
            return a.cmp(&b);
        }
        match (self, other) {
            (Self::Nil, Self::Nil) => Ordering::Equal,
            (Self::Bytes(a), Self::Bytes(b)) => a.cmp(b),
            (Self::Str(a), Self::Str(b)) => a.as_bytes().cmp(b.as_bytes()),
            (Self::Tuple(a), Self::Tuple(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => f32_order_key(*a).cmp(&f32_order_key(*b)),
            (Self::Double(a), Self::Double(b)) => f64_order_key(*a).cmp(&f64_order_key(*b)),
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Uuid128(a), Self::Uuid128(b)) => a.cmp(b),
            (Self::Uuid96(a), Self::Uuid96(b)) => a.cmp(b),
            (Self::Uuid64(a), Self::Uuid64(b)) => a.cmp(b),
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Element {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for Element {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Element {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<Slice> for Element {
    fn from(value: Slice) -> Self {
        Self::Bytes(value)
    }
}

impl From<Vec<u8>> for Element {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(Slice::from_bytes(value))
    }
}

impl From<Uuid64> for Element {
    fn from(value: Uuid64) -> Self {
        Self::Uuid64(value)
    }
}

impl From<Uuid96> for Element {
    fn from(value: Uuid96) -> Self {
        Self::Uuid96(value)
    }
}

impl From<u128> for Element {
    fn from(value: u128) -> Self {
        Self::Uuid128(value)
    }
}

impl From<Vec<Element>> for Element {
    fn from(value: Vec<Element>) -> Self {
        Self::Tuple(value)
    }
}

impl<T: Into<Element>> From<Option<T>> for Element {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn int_and_uint_are_one_domain() {
        assert_eq!(Element::Int(42), Element::UInt(42));
        assert_eq!(Element::Int(0), Element::UInt(0));
        assert_ne!(Element::Int(-1), Element::UInt(u64::MAX));
        assert!(Element::Int(-1) < Element::UInt(0));
        assert!(Element::Int(i64::MAX) < Element::UInt(i64::MAX as u64 + 1));
    }

    #[test]
    fn kind_rank_orders_across_kinds() {
        let ordered = [
            Element::Nil,
            Element::Bytes(Slice::copy_from(b"\xFF")),
            Element::Str("zzz".into()),
            Element::Tuple(vec![Element::Int(9)]),
            Element::Int(i64::MAX),
            Element::Float(f32::INFINITY),
            Element::Double(f64::NEG_INFINITY),
            Element::Bool(false),
            Element::Uuid128(u128::MAX),
            Element::Uuid96(Uuid96::ZERO),
            Element::Uuid64(Uuid64::ZERO),
        ];
        for pair in ordered.windows(2) {
            assert!(pair[0] < pair[1], "{:?} !< {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn float_order_is_total() {
        let ordered = [
            Element::Double(f64::NEG_INFINITY),
            Element::Double(-1.5),
            Element::Double(-0.0),
            Element::Double(0.0),
            Element::Double(1.5),
            Element::Double(f64::INFINITY),
            Element::Double(f64::NAN),
        ];
        for pair in ordered.windows(2) {
            assert!(pair[0] < pair[1], "{:?} !< {:?}", pair[0], pair[1]);
        }
        assert_eq!(Element::Double(f64::NAN), Element::Double(f64::NAN));
        assert_ne!(Element::Double(0.0), Element::Double(-0.0));
    }

    #[test]
    fn nested_tuples_compare_elementwise() {
        let short = Element::Tuple(vec![Element::Int(1)]);
        let long = Element::Tuple(vec![Element::Int(1), Element::Nil]);
        let bigger = Element::Tuple(vec![Element::Int(2)]);
        assert!(short < long);
        assert!(long < bigger);
    }

    #[test]
    fn conversions_pick_the_natural_kind() {
        assert_eq!(Element::from(-3i64), Element::Int(-3));
        assert_eq!(Element::from(3u64), Element::UInt(3));
        assert_eq!(Element::from("hi"), Element::Str("hi".into()));
        assert_eq!(Element::from(vec![1u8, 2]), Element::Bytes(Slice::copy_from(&[1, 2])));
        assert_eq!(Element::from(None::<i64>), Element::Nil);
        assert_eq!(Element::from(Some(7i64)), Element::Int(7));
    }
}
