//! Fixed-width identifier codecs.
//!
//! [`Uuid64`] and [`Uuid96`] are opaque fixed-size tokens. Internally they
//! hold raw bits in host order; on the wire they are always big-endian so
//! that byte-wise comparison of the serialized form matches numeric
//! comparison of the value.
//!
//! Text forms are selected by a single-character format specifier (see
//! each type's `format` method): hyphenated hex, bare hex, brace-wrapped
//! hex, decimal, and - for [`Uuid64`] only - an order-preserving base-62
//! form.

mod base62;
mod random;
mod uuid64;
mod uuid96;

pub use uuid64::Uuid64;
pub use uuid96::Uuid96;
