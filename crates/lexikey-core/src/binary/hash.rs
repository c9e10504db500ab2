//! FNV-1a hashing over byte regions.
//!
//! Suitable only for in-process hash-table keys. The output is never
//! persisted and carries no cross-process identity guarantee.

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Computes the 32-bit FNV-1a hash of `bytes`.
#[inline]
#[must_use]
pub fn fnv1a32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET;
    for &byte in bytes {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        // Reference values for 32-bit FNV-1a
        assert_eq!(fnv1a32(b""), 0x811c_9dc5);
        assert_eq!(fnv1a32(b"a"), 0xe40c_292c);
        assert_eq!(fnv1a32(b"foobar"), 0xbf9c_f968);
    }

    #[test]
    fn deterministic_and_input_sensitive() {
        assert_eq!(fnv1a32(b"key"), fnv1a32(b"key"));
        assert_ne!(fnv1a32(b"key"), fnv1a32(b"kez"));
        assert_ne!(fnv1a32(b"ab"), fnv1a32(b"ba"));
    }
}
