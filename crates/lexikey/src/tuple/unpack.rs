//! Element deserialization.

use lexikey_core::binary::ascii;
use lexikey_core::{CodecError, Result, Slice, SliceReader, Uuid64, Uuid96};

use crate::element::Element;

use super::tags;

/// Reads one element from `reader`.
///
/// Integers are canonicalized: any decoded value that fits `i64` comes
/// back as [`Element::Int`], values above `i64::MAX` as [`Element::UInt`].
///
/// # Errors
///
/// [`CodecError::Truncated`] when a body runs past the buffer,
/// [`CodecError::Overflow`] for a negative magnitude below `i64::MIN`, and
/// [`CodecError::FormatError`] for an unknown tag or invalid UTF-8.
pub fn unpack_element(reader: &mut SliceReader<'_>) -> Result<Element> {
    let tag = reader.read_u8()?;
    match tag {
        tags::NIL => Ok(Element::Nil),
        tags::BYTES => Ok(Element::Bytes(Slice::from_bytes(read_escaped(reader)?))),
        tags::STRING => decode_utf8(read_escaped(reader)?).map(Element::Str),
        tags::TUPLE => unpack_nested(reader),
        tags::INT_NEG_8..=tags::INT_POS_8 => unpack_int(reader, tag),
        tags::FLOAT32 => {
            let key = reader.read_u32_be()?;
            Ok(Element::Float(f32::from_bits(undo_f32_order_key(key))))
        }
        tags::FLOAT64 => {
            let key = reader.read_u64_be()?;
            Ok(Element::Double(f64::from_bits(undo_f64_order_key(key))))
        }
        tags::FALSE => Ok(Element::Bool(false)),
        tags::TRUE => Ok(Element::Bool(true)),
        tags::UUID128 => Ok(Element::Uuid128(u128::from_be_bytes(reader.read_array()?))),
        tags::UUID96 => Uuid96::read_from(reader).map(Element::Uuid96),
        tags::UUID64 => Uuid64::read_from(reader).map(Element::Uuid64),
        other => Err(CodecError::format(format!("unknown element tag 0x{other:02x}"))),
    }
}

/// Reads elements until the buffer is exhausted.
///
/// # Errors
///
/// Any error of [`unpack_element`]; no partial element is ever returned.
pub fn unpack_elements(reader: &mut SliceReader<'_>) -> Result<Vec<Element>> {
    let mut elements = Vec::new();
    while !reader.is_at_end() {
        elements.push(unpack_element(reader)?);
    }
    Ok(elements)
}

fn unpack_int(reader: &mut SliceReader<'_>, tag: u8) -> Result<Element> {
    if tag == tags::INT_ZERO {
        return Ok(Element::Int(0));
    }
    let negative = tag < tags::INT_ZERO;
    let n = if negative { tags::INT_ZERO - tag } else { tag - tags::INT_ZERO } as usize;
    let mut magnitude: u64 = 0;
    for &byte in reader.read_bytes(n)? {
        let raw = if negative { !byte } else { byte };
        magnitude = (magnitude << 8) | u64::from(raw);
    }
    if negative {
        if magnitude > i64::MAX as u64 + 1 {
            return Err(CodecError::Overflow);
        }
        // magnitude 2^63 wraps to exactly i64::MIN
        Ok(Element::Int((magnitude as i64).wrapping_neg()))
    } else if magnitude <= i64::MAX as u64 {
        Ok(Element::Int(magnitude as i64))
    } else {
        Ok(Element::UInt(magnitude))
    }
}

fn unpack_nested(reader: &mut SliceReader<'_>) -> Result<Element> {
    let mut items = Vec::new();
    loop {
        match reader.peek_u8() {
            None => return Err(CodecError::truncated(1, 0)),
            Some(0x00) => {
                reader.skip(1)?;
                if reader.peek_u8() == Some(tags::ESCAPE) {
                    reader.skip(1)?;
                    items.push(Element::Nil);
                } else {
                    return Ok(Element::Tuple(items));
                }
            }
            Some(_) => items.push(unpack_element(reader)?),
        }
    }
}

/// Reads a `00 FF`-escaped body up to its `0x00` terminator.
fn read_escaped(reader: &mut SliceReader<'_>) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    loop {
        let byte = reader.read_u8()?;
        if byte != 0x00 {
            out.push(byte);
        } else if reader.peek_u8() == Some(tags::ESCAPE) {
            reader.skip(1)?;
            out.push(0x00);
        } else {
            return Ok(out);
        }
    }
}

fn decode_utf8(bytes: Vec<u8>) -> Result<String> {
    if ascii::is_ascii(&bytes) {
        // ASCII needs no multi-byte validation
        return Ok(bytes.into_iter().map(char::from).collect());
    }
    String::from_utf8(bytes)
        .map_err(|_| CodecError::format("string element is not valid UTF-8"))
}

fn undo_f32_order_key(key: u32) -> u32 {
    if key >> 31 == 1 {
        key ^ 0x8000_0000
    } else {
        !key
    }
}

fn undo_f64_order_key(key: u64) -> u64 {
    if key >> 63 == 1 {
        key ^ 0x8000_0000_0000_0000
    } else {
        !key
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tuple::pack_element;
    use lexikey_core::SliceWriter;

    fn roundtrip(element: &Element) -> Element {
        let mut w = SliceWriter::new();
        pack_element(&mut w, element);
        let slice = w.into_slice();
        let mut r = SliceReader::new(slice.as_bytes());
        let decoded = unpack_element(&mut r).unwrap();
        assert!(r.is_at_end(), "trailing bytes after {element:?}");
        decoded
    }

    #[test]
    fn every_kind_roundtrips() {
        let samples = [
            Element::Nil,
            Element::Bytes(Slice::copy_from(&[0x00, 0xFF, 0x00])),
            Element::Str("héllo wörld".into()),
            Element::Int(-123_456_789),
            Element::Int(i64::MIN),
            Element::UInt(u64::MAX),
            Element::Float(-0.5),
            Element::Double(f64::MAX),
            Element::Bool(true),
            Element::Uuid64(Uuid64::new(7)),
            Element::Uuid96(Uuid96::from_parts(1, 2)),
            Element::Uuid128(0x0102_0304_0506_0708_090A_0B0C_0D0E_0F10),
            Element::Tuple(vec![Element::Nil, Element::Str("x".into()), Element::Int(-1)]),
        ];
        for element in &samples {
            assert_eq!(&roundtrip(element), element, "{element:?}");
        }
    }

    #[test]
    fn small_uint_canonicalizes_to_int() {
        assert_eq!(roundtrip(&Element::UInt(42)), Element::Int(42));
        assert!(matches!(roundtrip(&Element::UInt(u64::MAX)), Element::UInt(_)));
    }

    #[test]
    fn nan_roundtrips_bit_exact() {
        let weird = Element::Double(f64::from_bits(0x7FF8_0000_0000_0001));
        assert_eq!(roundtrip(&weird), weird);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let mut r = SliceReader::new(&[0x42]);
        assert!(matches!(unpack_element(&mut r), Err(CodecError::FormatError(_))));
    }

    #[test]
    fn truncated_bodies_are_rejected() {
        // string with no terminator
        let mut r = SliceReader::new(&[0x02, 0x61]);
        assert!(matches!(unpack_element(&mut r), Err(CodecError::Truncated { .. })));
        // two-byte integer with one byte present
        let mut r = SliceReader::new(&[0x16, 0x01]);
        assert!(matches!(unpack_element(&mut r), Err(CodecError::Truncated { .. })));
        // nested tuple with no terminator
        let mut r = SliceReader::new(&[0x05, 0x14]);
        assert!(matches!(unpack_element(&mut r), Err(CodecError::Truncated { .. })));
    }

    #[test]
    fn negative_magnitude_below_i64_min_overflows() {
        // 8-byte negative with magnitude 2^63 + 1
        let magnitude: u64 = (1 << 63) + 1;
        let mut wire = vec![0x0C];
        wire.extend(magnitude.to_be_bytes().iter().map(|b| !b));
        let mut r = SliceReader::new(&wire);
        assert_eq!(unpack_element(&mut r), Err(CodecError::Overflow));

        // exactly 2^63 is i64::MIN
        let mut wire = vec![0x0C];
        wire.extend((1u64 << 63).to_be_bytes().iter().map(|b| !b));
        let mut r = SliceReader::new(&wire);
        assert_eq!(unpack_element(&mut r).unwrap(), Element::Int(i64::MIN));
    }

    #[test]
    fn invalid_utf8_is_a_format_error() {
        let mut r = SliceReader::new(&[0x02, 0xC3, 0x28, 0x00]);
        assert!(matches!(unpack_element(&mut r), Err(CodecError::FormatError(_))));
    }

    #[test]
    fn top_level_run_decodes_in_order() {
        let mut w = SliceWriter::new();
        pack_element(&mut w, &Element::Int(1));
        pack_element(&mut w, &Element::Str("two".into()));
        let slice = w.into_slice();
        let mut r = SliceReader::new(slice.as_bytes());
        let elements = unpack_elements(&mut r).unwrap();
        assert_eq!(elements, vec![Element::Int(1), Element::Str("two".into())]);
    }
}
