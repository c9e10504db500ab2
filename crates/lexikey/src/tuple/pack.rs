//! Element serialization.

use lexikey_core::SliceWriter;

use crate::element::{f32_order_key, f64_order_key, Element};

use super::tags;

/// Appends the wire form of one element.
///
/// Packing is total over the element model and never fails; every value a
/// variant can hold has a wire form.
pub fn pack_element(writer: &mut SliceWriter, element: &Element) {
    match element {
        Element::Nil => writer.write_u8(tags::NIL),
        Element::Bytes(bytes) => {
            writer.write_u8(tags::BYTES);
            write_escaped(writer, bytes.as_bytes());
        }
        Element::Str(text) => {
            writer.write_u8(tags::STRING);
            write_escaped(writer, text.as_bytes());
        }
        Element::Int(value) => pack_int(writer, *value),
        Element::UInt(value) => pack_magnitude(writer, *value, false),
        Element::Float(value) => {
            writer.write_u8(tags::FLOAT32);
            writer.write_u32_be(f32_order_key(*value));
        }
        Element::Double(value) => {
            writer.write_u8(tags::FLOAT64);
            writer.write_u64_be(f64_order_key(*value));
        }
        Element::Bool(value) => writer.write_u8(if *value { tags::TRUE } else { tags::FALSE }),
        Element::Uuid64(id) => {
            writer.write_u8(tags::UUID64);
            id.write_to(writer);
        }
        Element::Uuid96(id) => {
            writer.write_u8(tags::UUID96);
            id.write_to(writer);
        }
        Element::Uuid128(bits) => {
            writer.write_u8(tags::UUID128);
            writer.write_bytes(&bits.to_be_bytes());
        }
        Element::Tuple(items) => {
            writer.write_u8(tags::TUPLE);
            for item in items {
                if item.is_nil() {
                    // bare 0x00 would read as the tuple terminator
                    writer.write_u8(tags::NIL);
                    writer.write_u8(tags::ESCAPE);
                } else {
                    pack_element(writer, item);
                }
            }
            writer.write_u8(0x00);
        }
    }
}

/// Appends the wire forms of a run of top-level elements.
pub fn pack_elements(writer: &mut SliceWriter, elements: &[Element]) {
    for element in elements {
        pack_element(writer, element);
    }
}

fn pack_int(writer: &mut SliceWriter, value: i64) {
    if value < 0 {
        pack_magnitude(writer, value.unsigned_abs(), true);
    } else {
        pack_magnitude(writer, value as u64, false);
    }
}

/// Minimal-length big-endian magnitude under a length-carrying tag.
///
/// Negative values store the complement of each magnitude byte, which is
/// `magnitude + (2^(8n) - 1)` in n bytes, so more-negative values produce
/// smaller bytes.
fn pack_magnitude(writer: &mut SliceWriter, magnitude: u64, negative: bool) {
    if magnitude == 0 {
        writer.write_u8(tags::INT_ZERO);
        return;
    }
    let n = (64 - magnitude.leading_zeros() as usize).div_ceil(8);
    let be = magnitude.to_be_bytes();
    if negative {
        writer.write_u8(tags::INT_ZERO - n as u8);
        for &byte in &be[8 - n..] {
            writer.write_u8(!byte);
        }
    } else {
        writer.write_u8(tags::INT_ZERO + n as u8);
        writer.write_bytes(&be[8 - n..]);
    }
}

fn write_escaped(writer: &mut SliceWriter, bytes: &[u8]) {
    for &byte in bytes {
        writer.write_u8(byte);
        if byte == 0x00 {
            writer.write_u8(tags::ESCAPE);
        }
    }
    writer.write_u8(0x00);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use lexikey_core::Slice;

    fn pack(element: &Element) -> Vec<u8> {
        let mut w = SliceWriter::new();
        pack_element(&mut w, element);
        w.as_bytes().to_vec()
    }

    #[test]
    fn fixed_wire_forms() {
        assert_eq!(pack(&Element::Nil), [0x00]);
        assert_eq!(pack(&Element::Int(0)), [0x14]);
        assert_eq!(pack(&Element::Int(1)), [0x15, 0x01]);
        assert_eq!(pack(&Element::Int(-1)), [0x13, 0xFE]);
        assert_eq!(pack(&Element::Int(256)), [0x16, 0x01, 0x00]);
        assert_eq!(pack(&Element::Bool(false)), [0x26]);
        assert_eq!(pack(&Element::Bool(true)), [0x27]);
        assert_eq!(pack(&Element::Str("a".into())), [0x02, 0x61, 0x00]);
    }

    #[test]
    fn int_and_uint_pack_identically() {
        assert_eq!(pack(&Element::Int(300)), pack(&Element::UInt(300)));
        assert_eq!(pack(&Element::UInt(u64::MAX)).len(), 9);
    }

    #[test]
    fn extreme_integers() {
        assert_eq!(pack(&Element::Int(i64::MIN))[0], 0x0C);
        assert_eq!(pack(&Element::Int(i64::MAX))[0], 0x1C);
        assert_eq!(pack(&Element::UInt(u64::MAX)), [0x1C, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn zero_bytes_are_escaped() {
        let e = Element::Bytes(Slice::copy_from(&[0x01, 0x00, 0x02]));
        assert_eq!(pack(&e), [0x01, 0x01, 0x00, 0xFF, 0x02, 0x00]);
    }

    #[test]
    fn nested_nil_is_escaped() {
        let e = Element::Tuple(vec![Element::Nil, Element::Int(0)]);
        assert_eq!(pack(&e), [0x05, 0x00, 0xFF, 0x14, 0x00]);
    }

    #[test]
    fn float_transform_orders_negatives_first() {
        let neg = pack(&Element::Double(-1.0));
        let zero = pack(&Element::Double(0.0));
        let pos = pack(&Element::Double(1.0));
        assert!(neg < zero && zero < pos);
        // positive value keeps its magnitude bits with the sign flipped
        assert_eq!(pack(&Element::Float(1.0f32)), [0x20, 0xBF, 0x80, 0x00, 0x00]);
    }
}
