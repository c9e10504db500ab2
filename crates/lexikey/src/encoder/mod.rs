//! The key encoder type system.
//!
//! Encoders are stateless unit values that translate typed keys to and
//! from the tuple wire format:
//!
//! - [`FieldEncoder`] handles a single value
//! - [`CompositeEncoder`] handles typed tuples of arity 1 through 4, with
//!   partial-key encoding for prefix scans
//! - [`TupleEncoder`] handles dynamically shaped keys as element vectors
//! - [`TupleEncoding`] is the scheme that hands out all of the above, plus
//!   runtime arity-checked [`BoundTupleEncoder`]s
//!
//! The load-bearing invariant across all of them: encoding the first k
//! fields of a key yields a byte prefix of the full key's encoding, so
//! partial keys address contiguous ranges of the keyspace.

mod composite;
mod dynamic;
mod field;
mod scheme;
mod traits;

pub use composite::{CompositeEncoder, CompositeKeyEncoder};
pub use dynamic::TupleEncoder;
pub use field::FieldEncoder;
pub use scheme::{BoundTupleEncoder, TupleEncoding};
pub use traits::{KeyEncoder, TuplePack};
