//! Big-endian integer fields
//!
//! Values wider than a field keep their low-order bits only. The masks are
//! applied explicitly so the truncation is part of the contract rather than
//! a side effect of a numeric cast.

use super::{ADDRESS_MASK, SIZE_MASK};

/// Encode a 16-bit size field, most significant byte first
#[must_use]
pub const fn encode_size(size: u32) -> [u8; 2] {
    let [_, _, hi, lo] = (size & SIZE_MASK).to_be_bytes();
    [hi, lo]
}

/// Encode a 24-bit address field, most significant byte first
#[must_use]
pub const fn encode_address(address: u32) -> [u8; 3] {
    let [_, hi, mid, lo] = (address & ADDRESS_MASK).to_be_bytes();
    [hi, mid, lo]
}

/// Split a security key into its high and low bytes
#[must_use]
pub const fn encode_key(key: u16) -> [u8; 2] {
    key.to_be_bytes()
}

/// Read back a size field
#[must_use]
pub const fn decode_size(bytes: [u8; 2]) -> u32 {
    u32::from_be_bytes([0, 0, bytes[0], bytes[1]])
}

/// Read back an address field
#[must_use]
pub const fn decode_address(bytes: [u8; 3]) -> u32 {
    u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]])
}
