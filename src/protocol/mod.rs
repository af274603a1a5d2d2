//! VPW wire primitives
//!
//! This module provides the constant tables, frame header, field encoding,
//! block checksum and message container shared by every builder.

mod checksum;
mod error;
mod fields;
mod frame;
mod header;
mod message;
mod types;

pub use checksum::{add_block_checksum, block_checksum, verify_block_checksum};
pub use error::{Error, Result};
pub use fields::{decode_address, decode_size, encode_address, encode_key, encode_size};
pub use frame::assemble;
pub use header::FrameHeader;
pub use message::Message;
pub use types::{BlockId, DeviceId, KEY_ACCEPTED, Mode, Priority, SubMode};

/// Priority, destination and source bytes
pub const PREFIX_SIZE: usize = 3;

/// Prefix plus mode byte
pub const HEADER_SIZE: usize = PREFIX_SIZE + 1;

/// First byte covered by the block checksum
pub const CHECKSUM_START: usize = HEADER_SIZE;

/// Checksum size in bytes
pub const CHECKSUM_SIZE: usize = 2;

/// Smallest buffer with at least one summable byte
pub const MIN_BLOCK_MESSAGE_SIZE: usize = CHECKSUM_START + 1 + CHECKSUM_SIZE;

/// Block-write header: prefix, mode, exec flag, 2 size bytes, 3 address bytes
pub const BLOCK_HEADER_SIZE: usize = HEADER_SIZE + 1 + 2 + 3;

/// Added to a mode byte to form the PCM's reply mode
pub const RESPONSE_OFFSET: u8 = 0x40;

/// Width mask of the size field (16 bits)
pub const SIZE_MASK: u32 = 0xFFFF;

/// Width mask of the address field (24 bits)
pub const ADDRESS_MASK: u32 = 0x00FF_FFFF;
