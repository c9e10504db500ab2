//! Byte buffer views and cursors.
//!
//! - [`Slice`] - an immutable, bounds-checked view over a contiguous byte
//!   region, with structural equality and lexicographic ordering
//! - [`SliceWriter`] - a resizing append cursor that every encoder writes
//!   through; materializes into a [`Slice`] when encoding succeeds
//! - [`SliceReader`] - a sequential-consumption cursor; every read advances
//!   the position and fails if insufficient bytes remain
//!
//! Ownership follows a strict handoff: a writer exclusively owns its
//! backing storage until it yields a [`Slice`]; the yielded view is
//! immutable and may then be shared read-only across threads without
//! further synchronization.

mod reader;
mod slice;
mod writer;

pub use reader::SliceReader;
pub use slice::Slice;
pub use writer::SliceWriter;
