//! Key ranges over the ordered keyspace.

use lexikey_core::{CodecError, Result, Slice};

/// A half-open range `[begin, end)` of raw keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRange {
    pub begin: Slice,
    pub end: Slice,
}

impl KeyRange {
    #[must_use]
    pub const fn new(begin: Slice, end: Slice) -> Self {
        Self { begin, end }
    }

    /// The range of every key extending a tuple-encoded prefix.
    ///
    /// `0x00` is the lowest byte any further element can start with and
    /// `0xFF` never starts one, so `[packed + 00, packed + FF)` selects
    /// exactly the keys that continue this tuple. The packed prefix itself
    /// is excluded.
    #[must_use]
    pub fn from_packed_prefix(packed: &Slice) -> Self {
        Self { begin: packed.concat(&[0x00]), end: packed.concat(&[0xFF]) }
    }

    /// The range of every key starting with a raw byte prefix, the prefix
    /// itself included.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::OutOfRange`] when the prefix has no upper
    /// bound (empty or all `0xFF`).
    pub fn from_raw_prefix(prefix: &Slice) -> Result<Self> {
        let end = strinc(prefix.as_bytes())?;
        Ok(Self { begin: prefix.clone(), end: Slice::from_bytes(end) })
    }

    /// Returns `true` when `key` falls inside the range.
    #[must_use]
    pub fn contains(&self, key: &Slice) -> bool {
        *key >= self.begin && *key < self.end
    }
}

/// The first key strictly after every key prefixed by `prefix`: trailing
/// `0xFF` bytes are stripped, then the last remaining byte is incremented.
///
/// # Errors
///
/// Returns [`CodecError::OutOfRange`] for an empty or all-`0xFF` prefix;
/// no finite key bounds those from above.
pub fn strinc(prefix: &[u8]) -> Result<Vec<u8>> {
    let trimmed = match prefix.iter().rposition(|&b| b != 0xFF) {
        Some(last) => &prefix[..=last],
        None => {
            return Err(CodecError::OutOfRange { offset: 0, len: prefix.len(), cap: prefix.len() })
        }
    };
    let mut end = trimmed.to_vec();
    // rposition guarantees a non-0xFF last byte
    if let Some(last) = end.last_mut() {
        *last += 1;
    }
    Ok(end)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn strinc_increments_the_last_byte() {
        assert_eq!(strinc(b"abc").unwrap(), b"abd");
        assert_eq!(strinc(&[0x00]).unwrap(), vec![0x01]);
    }

    #[test]
    fn strinc_strips_trailing_ff_first() {
        assert_eq!(strinc(&[0x61, 0xFF, 0xFF]).unwrap(), vec![0x62]);
        assert_eq!(strinc(&[0xFE, 0xFF]).unwrap(), vec![0xFF]);
    }

    #[test]
    fn strinc_has_no_answer_for_unbounded_prefixes() {
        assert!(matches!(strinc(&[]), Err(CodecError::OutOfRange { .. })));
        assert!(matches!(strinc(&[0xFF, 0xFF]), Err(CodecError::OutOfRange { .. })));
    }

    #[test]
    fn strinc_result_bounds_the_prefix() {
        let prefix = [0x61, 0xFF];
        let end = strinc(&prefix).unwrap();
        // every extension of the prefix sorts below the bound
        let extension = [0x61, 0xFF, 0xFF, 0xFF];
        assert!(prefix.as_slice() < end.as_slice());
        assert!(extension.as_slice() < end.as_slice());
    }

    #[test]
    fn packed_prefix_range_brackets_extensions() {
        let packed = Slice::copy_from(&[0x02, 0x61, 0x00]); // the string "a"
        let range = KeyRange::from_packed_prefix(&packed);

        let extension = packed.concat(&[0x15, 0x01]); // ("a", 1)
        assert!(range.contains(&extension));
        assert!(!range.contains(&packed)); // the bare prefix is excluded
        assert!(!range.contains(&Slice::copy_from(&[0x02, 0x62, 0x00]))); // "b"
    }

    #[test]
    fn raw_prefix_range_includes_the_prefix() {
        let prefix = Slice::copy_from(b"user/");
        let range = KeyRange::from_raw_prefix(&prefix).unwrap();
        assert!(range.contains(&prefix));
        assert!(range.contains(&Slice::copy_from(b"user/42")));
        assert!(!range.contains(&Slice::copy_from(b"user0")));
        assert!(!range.contains(&Slice::copy_from(b"uses")));
    }

    #[test]
    fn contains_is_half_open() {
        let range = KeyRange::new(Slice::copy_from(b"b"), Slice::copy_from(b"d"));
        assert!(range.contains(&Slice::copy_from(b"b")));
        assert!(range.contains(&Slice::copy_from(b"c")));
        assert!(!range.contains(&Slice::copy_from(b"d")));
        assert!(!range.contains(&Slice::copy_from(b"a")));
    }
}
