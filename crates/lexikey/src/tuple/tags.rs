//! Wire-format type tags.
//!
//! | tag | body |
//! |-----|------|
//! | `0x00` | nil (no body) |
//! | `0x01` | byte string, `0x00` escaped as `00 FF`, terminated `00` |
//! | `0x02` | UTF-8 string, same escaping |
//! | `0x05` | nested tuple; embedded nil is `00 FF`, terminated `00` |
//! | `0x0C`..`0x13` | negative integer, 8..1 magnitude bytes, complement form |
//! | `0x14` | integer zero (no body) |
//! | `0x15`..`0x1C` | positive integer, 1..8 magnitude bytes big-endian |
//! | `0x20` | f32, sign-transposed IEEE bits big-endian |
//! | `0x21` | f64, same transform |
//! | `0x26` | false (no body) |
//! | `0x27` | true (no body) |
//! | `0x30` | 128-bit identifier, 16 raw bytes |
//! | `0x31` | 96-bit identifier, 12 raw bytes |
//! | `0x32` | 64-bit identifier, 8 raw bytes |
//!
//! Integer tags encode the magnitude length, so shorter magnitudes sort
//! before longer ones on the positive side and after them on the negative
//! side without inspecting the body.

pub const NIL: u8 = 0x00;
pub const BYTES: u8 = 0x01;
pub const STRING: u8 = 0x02;
pub const TUPLE: u8 = 0x05;

/// Tag of an integer with zero magnitude bytes. Negative integers with n
/// magnitude bytes use `INT_ZERO - n`, positive ones `INT_ZERO + n`.
pub const INT_ZERO: u8 = 0x14;
pub const INT_NEG_8: u8 = 0x0C;
pub const INT_POS_8: u8 = 0x1C;

pub const FLOAT32: u8 = 0x20;
pub const FLOAT64: u8 = 0x21;
pub const FALSE: u8 = 0x26;
pub const TRUE: u8 = 0x27;
pub const UUID128: u8 = 0x30;
pub const UUID96: u8 = 0x31;
pub const UUID64: u8 = 0x32;

/// Second byte of an escaped `0x00` inside a length-delimited body.
pub const ESCAPE: u8 = 0xFF;
