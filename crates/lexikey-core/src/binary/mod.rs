//! Low-level binary primitives.
//!
//! This module collects the byte-level kernels every encoder in the layer is
//! built from:
//!
//! - [`endian`] - fixed-width big/little-endian load/store and byte swaps
//! - [`varint`] - variable-length integers (7 bits per byte, continuation
//!   bit in the high bit)
//! - [`compact`] - order-preserving compact integer encodings, unsigned and
//!   signed
//! - [`compare`] - chunked lexicographic byte comparison
//! - [`ascii`] - vectorized ASCII-run detection
//! - [`hash`] - FNV-1a hashing for in-process hash-table keys

pub mod ascii;
pub mod compact;
pub mod compare;
pub mod endian;
pub mod hash;
pub mod varint;
