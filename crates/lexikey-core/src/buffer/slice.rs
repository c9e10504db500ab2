//! Immutable bounds-checked buffer views.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::binary::{compare, hash};
use crate::error::{CodecError, Result};

/// An immutable view over a contiguous byte region.
///
/// A `Slice` is a `(storage, offset, length)` triple whose bounds are
/// verified once, at construction; all later access goes through the
/// already-validated window. Sub-views share storage instead of copying.
///
/// Two zero-length states are distinguished: [`Slice::nil`] has no storage
/// at all ("absent") while [`Slice::empty`] views an empty region. They
/// decode differently at API boundaries (nil maps to the absent element)
/// but compare equal as byte strings, and neither ever equals a non-empty
/// slice.
///
/// Equality and ordering are byte-wise lexicographic with
/// shorter-is-smaller on common-prefix ties, matching the order of the
/// backing store.
#[derive(Clone)]
pub struct Slice {
    storage: Option<Arc<[u8]>>,
    offset: usize,
    len: usize,
}

impl Slice {
    /// The absent slice: zero length, no backing storage.
    #[must_use]
    pub const fn nil() -> Self {
        Self { storage: None, offset: 0, len: 0 }
    }

    /// A present slice of length zero.
    #[must_use]
    pub fn empty() -> Self {
        Self { storage: Some(Arc::from(&[][..])), offset: 0, len: 0 }
    }

    /// Takes ownership of `bytes` as a full-range slice.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let len = bytes.len();
        Self { storage: Some(Arc::from(bytes)), offset: 0, len }
    }

    /// Copies `bytes` into new backing storage.
    #[must_use]
    pub fn copy_from(bytes: &[u8]) -> Self {
        Self { storage: Some(Arc::from(bytes)), offset: 0, len: bytes.len() }
    }

    /// Length of the visible region in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the visible region is zero-length (nil or empty).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if this is the absent slice (no backing storage).
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.storage.is_none()
    }

    /// Returns `true` if this slice has backing storage (possibly empty).
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.storage.is_some()
    }

    /// The visible bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.storage {
            Some(storage) => &storage[self.offset..self.offset + self.len],
            None => &[],
        }
    }

    /// Copies the visible bytes into a fresh `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Returns a sub-view over `[offset, offset + len)` of this slice.
    ///
    /// The sub-view shares this slice's storage; no bytes are copied.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::OutOfRange`] if the requested region exceeds
    /// this slice's bounds.
    pub fn subslice(&self, offset: usize, len: usize) -> Result<Self> {
        let end = offset
            .checked_add(len)
            .ok_or(CodecError::OutOfRange { offset, len, cap: self.len })?;
        if end > self.len {
            return Err(CodecError::OutOfRange { offset, len, cap: self.len });
        }
        Ok(Self { storage: self.storage.clone(), offset: self.offset + offset, len })
    }

    /// Returns a new slice equal to this one followed by `suffix`.
    #[must_use]
    pub fn concat(&self, suffix: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(self.len + suffix.len());
        bytes.extend_from_slice(self.as_bytes());
        bytes.extend_from_slice(suffix);
        Self::from_bytes(bytes)
    }

    /// Returns `true` if this slice's bytes start with `prefix`'s bytes.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.as_bytes().starts_with(prefix.as_bytes())
    }

    /// 32-bit FNV-1a hash of the visible bytes.
    ///
    /// In-process hash-table use only; never persist this value.
    #[must_use]
    pub fn fnv1a(&self) -> u32 {
        hash::fnv1a32(self.as_bytes())
    }

    /// Shortcut: `true` when both views cover the same range of the same
    /// storage, without touching the bytes.
    fn same_region(&self, other: &Self) -> bool {
        match (&self.storage, &other.storage) {
            (Some(a), Some(b)) => {
                Arc::ptr_eq(a, b) && self.offset == other.offset && self.len == other.len
            }
            (None, None) => true,
            _ => false,
        }
    }
}

impl PartialEq for Slice {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Slice {}

impl PartialOrd for Slice {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slice {
    fn cmp(&self, other: &Self) -> Ordering {
        // Same storage and range is equality in O(1).
        if self.same_region(other) {
            return Ordering::Equal;
        }
        let a = self.as_bytes();
        let b = other.as_bytes();
        // The common case differs in the first byte.
        if let (Some(&fa), Some(&fb)) = (a.first(), b.first()) {
            if fa != fb {
                return fa.cmp(&fb);
            }
        }
        compare::compare(a, b)
    }
}

impl Hash for Slice {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(self.as_bytes());
    }
}

impl fmt::Debug for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nil() {
            return write!(f, "Slice::nil");
        }
        write!(f, "Slice[")?;
        for (i, byte) in self.as_bytes().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        write!(f, "]")
    }
}

impl From<Vec<u8>> for Slice {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&[u8]> for Slice {
    fn from(bytes: &[u8]) -> Self {
        Self::copy_from(bytes)
    }
}
