//! Lexicographic byte comparison kernel.
//!
//! Comparison walks both regions in machine-word-sized chunks, XOR-ing
//! aligned 8-byte windows to find the first differing word and only then
//! narrowing to the byte level. Two thresholds keep the fast path honest:
//! buffers under [`SMALL_THRESHOLD`] are compared byte-by-byte (chunk setup
//! costs more than it saves), and buffers over [`LARGE_THRESHOLD`] are
//! handed to the standard slice comparison, which lowers to an optimized
//! bulk compare.
//!
//! Ties on a common prefix are broken by length: shorter sorts first.

use std::cmp::Ordering;

/// Below this length a plain byte loop wins.
pub const SMALL_THRESHOLD: usize = 16;
/// At or above this length the bulk (memcmp-grade) path wins.
pub const LARGE_THRESHOLD: usize = 256;

/// Compares two byte regions lexicographically.
#[must_use]
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    let common = a.len().min(b.len());
    if common < SMALL_THRESHOLD {
        return compare_bytewise(a, b, common);
    }
    if common >= LARGE_THRESHOLD {
        return a.cmp(b);
    }

    // Word-at-a-time scan over the common prefix. Loading big-endian makes
    // integer comparison of differing words equal byte order.
    let mut i = 0;
    while i + 8 <= common {
        let wa = load_word(&a[i..i + 8]);
        let wb = load_word(&b[i..i + 8]);
        if wa ^ wb != 0 {
            return wa.cmp(&wb);
        }
        i += 8;
    }
    while i < common {
        if a[i] != b[i] {
            return a[i].cmp(&b[i]);
        }
        i += 1;
    }
    a.len().cmp(&b.len())
}

#[inline]
fn compare_bytewise(a: &[u8], b: &[u8], common: usize) -> Ordering {
    for i in 0..common {
        if a[i] != b[i] {
            return a[i].cmp(&b[i]);
        }
    }
    a.len().cmp(&b.len())
}

#[inline]
fn load_word(chunk: &[u8]) -> u64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(chunk);
    u64::from_be_bytes(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_buffers() {
        assert_eq!(compare(b"", b""), Ordering::Equal);
        assert_eq!(compare(b"abc", b"abc"), Ordering::Equal);
        let long = vec![0xABu8; 300];
        assert_eq!(compare(&long, &long.clone()), Ordering::Equal);
    }

    #[test]
    fn shorter_is_smaller_on_prefix_tie() {
        assert_eq!(compare(b"a", b"aa"), Ordering::Less);
        assert_eq!(compare(b"abc", b"ab"), Ordering::Greater);
        assert_eq!(compare(b"", b"\x00"), Ordering::Less);
    }

    #[test]
    fn first_differing_byte_decides() {
        assert_eq!(compare(b"abc", b"abd"), Ordering::Less);
        assert_eq!(compare(b"\xFF", b"\x00\x00"), Ordering::Greater);
    }

    #[test]
    fn antisymmetry() {
        let cases: &[(&[u8], &[u8])] =
            &[(b"", b"a"), (b"abc", b"abd"), (b"same", b"same"), (b"\x00\x01", b"\x00\x02")];
        for (a, b) in cases {
            assert_eq!(compare(a, b), compare(b, a).reverse());
        }
    }

    #[test]
    fn word_path_finds_late_differences() {
        // 20 bytes forces the chunked path; differ in the third word
        let mut a = vec![7u8; 20];
        let mut b = vec![7u8; 20];
        b[17] = 8;
        assert_eq!(compare(&a, &b), Ordering::Less);
        a[17] = 9;
        assert_eq!(compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn all_paths_agree() {
        // Same logical comparison across the three length regimes
        for len in [4usize, 32, 512] {
            let mut a = vec![1u8; len];
            let mut b = vec![1u8; len];
            assert_eq!(compare(&a, &b), Ordering::Equal, "len {len}");
            b[len - 1] = 2;
            assert_eq!(compare(&a, &b), Ordering::Less, "len {len}");
            a[0] = 3;
            assert_eq!(compare(&a, &b), Ordering::Greater, "len {len}");
        }
    }

    #[test]
    fn unequal_lengths_across_thresholds() {
        let a = vec![5u8; 40];
        let b = vec![5u8; 41];
        assert_eq!(compare(&a, &b), Ordering::Less);
        let c = vec![5u8; 400];
        let d = vec![5u8; 500];
        assert_eq!(compare(&c, &d), Ordering::Less);
    }
}
