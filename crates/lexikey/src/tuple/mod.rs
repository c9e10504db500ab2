//! The tuple wire format.
//!
//! Each element is a type-tag byte followed by a kind-specific body. Tags
//! are assigned so that comparing two packed keys byte-wise gives the
//! cross-kind order of [`ElementKind`](crate::element::ElementKind), and
//! each body is laid out so that byte order within a kind matches value
//! order. The format is stable bit for bit; see [`tags`] for the table.

pub mod tags;

mod pack;
mod unpack;

pub use pack::{pack_element, pack_elements};
pub use unpack::{unpack_element, unpack_elements};
