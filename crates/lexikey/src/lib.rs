//! `lexikey`
//!
//! An ordered binary encoding layer for key-value stores whose keys are
//! raw byte strings compared lexicographically. Structured keys (tuples
//! of strings, integers, floats, identifiers) are packed into byte
//! strings whose byte-wise order equals the logical order of the values,
//! so range scans over encoded keys walk the data in logical order.
//!
//! # Example
//!
//! ```
//! use lexikey::{Element, TupleEncoding, KeyEncoder};
//!
//! // typed composite keys
//! let encoder = TupleEncoding::composite_encoder::<(String, u64)>();
//! let key = encoder.encode_key(&("orders".to_owned(), 42)).unwrap();
//! assert_eq!(encoder.decode_key(&key).unwrap(), ("orders".to_owned(), 42));
//!
//! // dynamically shaped keys and range derivation
//! let dynamic = TupleEncoding::dynamic();
//! let range = dynamic.to_range(&[Element::Str("orders".into())]);
//! let inside = dynamic.pack_key(&[Element::Str("orders".into()), Element::Int(7)]);
//! assert!(range.contains(&inside));
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod element;
pub mod encoder;
pub mod range;
pub mod tuple;


pub use lexikey_core::{CodecError, Result, Slice, SliceReader, SliceWriter, Uuid64, Uuid96};

pub use element::{Element, ElementKind};
pub use encoder::{
    BoundTupleEncoder, CompositeEncoder, CompositeKeyEncoder, FieldEncoder, KeyEncoder,
    TupleEncoder, TupleEncoding, TuplePack,
};
pub use range::{strinc, KeyRange};
