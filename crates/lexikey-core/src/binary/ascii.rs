//! ASCII-run detection.
//!
//! Checks that every byte of a region is below 0x80 by testing the high
//! bits of 8-byte windows at once, with a bytewise tail. Used to fast-path
//! UTF-8 validation when decoding string elements: an all-ASCII run is
//! valid UTF-8 by construction.

const HIGH_BITS: u64 = 0x8080_8080_8080_8080;

/// Returns `true` if every byte in `bytes` is below 0x80.
#[must_use]
pub fn is_ascii(bytes: &[u8]) -> bool {
    let mut chunks = bytes.chunks_exact(8);
    for chunk in &mut chunks {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(chunk);
        if u64::from_ne_bytes(raw) & HIGH_BITS != 0 {
            return false;
        }
    }
    chunks.remainder().iter().all(|&b| b < 0x80)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_ascii() {
        assert!(is_ascii(b""));
    }

    #[test]
    fn plain_text_is_ascii() {
        assert!(is_ascii(b"hello world, this is a longer ascii run"));
    }

    #[test]
    fn high_byte_in_chunk_detected() {
        let mut data = vec![b'a'; 32];
        data[11] = 0xC3;
        assert!(!is_ascii(&data));
    }

    #[test]
    fn high_byte_in_tail_detected() {
        let mut data = vec![b'a'; 19];
        data[18] = 0x80;
        assert!(!is_ascii(&data));
    }

    #[test]
    fn boundary_value_0x7f_is_ascii() {
        assert!(is_ascii(&[0x7F; 24]));
        assert!(!is_ascii(&[0x80]));
    }

    #[test]
    fn agrees_with_std() {
        let cases: &[&[u8]] = &[b"", b"abc", &[0x7F, 0x00, 0x41], "héllo".as_bytes(), &[0xFF; 9]];
        for case in cases {
            assert_eq!(is_ascii(case), case.is_ascii(), "case {case:?}");
        }
    }
}
