//! `lexikey` Core
//!
//! Low-level building blocks for the lexikey ordered binary encoding layer:
//! bounded buffer views, write/read cursors, order-preserving binary
//! primitives, and fixed-width identifier codecs.
//!
//! # Overview
//!
//! Keys in an ordered key-value store are raw byte strings compared
//! lexicographically. This crate provides the pieces that turn structured
//! values into such byte strings and back:
//!
//! - **Buffers**: [`Slice`] (immutable bounds-checked view), [`SliceWriter`]
//!   (resizing append cursor), [`SliceReader`] (sequential-consumption
//!   cursor)
//! - **Binary primitives**: endianness-aware fixed-width load/store,
//!   varints, order-preserving compact integer encodings, a chunked
//!   lexicographic comparison kernel, ASCII-run detection, FNV-1a hashing
//! - **Identifiers**: [`Uuid64`] and [`Uuid96`], fixed-width tokens with
//!   big-endian wire form and hex/base-62/decimal text forms
//!
//! No operation here performs I/O or blocks: everything is a synchronous,
//! bounded-time transformation over in-memory buffers. The only shared
//! mutable state in the crate is the default randomness source behind
//! identifier generation, which is guarded by a single lock.
//!
//! # Example
//!
//! ```
//! use lexikey_core::{SliceWriter, SliceReader};
//!
//! let mut writer = SliceWriter::new();
//! writer.write_compact_u64(1_000).unwrap();
//! writer.write_compact_u64(1_000_000).unwrap();
//! let key = writer.into_slice();
//!
//! let mut reader = SliceReader::new(key.as_bytes());
//! assert_eq!(reader.read_compact_u64().unwrap(), 1_000);
//! assert_eq!(reader.read_compact_u64().unwrap(), 1_000_000);
//! assert!(reader.is_at_end());
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod binary;
pub mod buffer;
pub mod error;
pub mod id;


pub use buffer::{Slice, SliceReader, SliceWriter};
pub use error::{CodecError, Result};
pub use id::{Uuid64, Uuid96};
