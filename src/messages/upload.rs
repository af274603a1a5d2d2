//! Upload (reflash) messages
//!
//! # Block message format
//!
//! ```text
//! [Block, PCM, Tool, PcmUpload] [exec] [size BE (2)] [address BE (3)] [data (size)] [checksum BE (2)]
//! ```
//!
//! The checksum covers everything from the exec flag through the last data
//! byte.

use tracing::{debug, trace};

use crate::protocol::{
    BLOCK_HEADER_SIZE, CHECKSUM_SIZE, DeviceId, Error, FrameHeader, Message, Mode, Priority, Result,
    SubMode, add_block_checksum, assemble, encode_address, encode_size,
};

/// Build a checksummed block of data to be written at `address`
///
/// Copies `payload[offset..offset + length]`. The size field holds the low
/// 16 bits of `length` and the address field the low 24 bits of `address`;
/// larger values are truncated, not rejected.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] if the requested slice does not fit in
/// `payload`.
pub fn block_message(
    payload: &[u8],
    offset: usize,
    length: usize,
    address: u32,
    execute: bool,
) -> Result<Message> {
    let data = offset
        .checked_add(length)
        .and_then(|end| payload.get(offset..end))
        .ok_or_else(|| {
            debug!(
                offset,
                length,
                available = payload.len(),
                "block slice out of bounds"
            );
            Error::OutOfBounds {
                offset,
                length,
                available: payload.len(),
            }
        })?;

    let mut buffer = Vec::with_capacity(BLOCK_HEADER_SIZE + length + CHECKSUM_SIZE);
    let header = FrameHeader::request(Priority::Block, DeviceId::PCM, Mode::PcmUpload);
    buffer.extend_from_slice(&header.to_bytes());
    buffer.push(SubMode::execute_flag(execute).as_u8());
    // Only the low 16 bits reach the size field
    #[allow(clippy::cast_possible_truncation)]
    let size = length as u32;
    buffer.extend_from_slice(&encode_size(size));
    buffer.extend_from_slice(&encode_address(address));
    buffer.extend_from_slice(data);
    buffer.extend_from_slice(&[0; CHECKSUM_SIZE]);

    let checksum = add_block_checksum(&mut buffer)?;
    trace!(address, length, execute, checksum, "built block message");

    Ok(Message::new(buffer))
}

/// Announce an upload of `size` bytes at `address`
#[must_use]
pub fn upload_request(size: u32, address: u32) -> Message {
    let mut fields = [0u8; 5];
    fields[0..2].copy_from_slice(&encode_size(size));
    fields[2..5].copy_from_slice(&encode_address(address));
    trace!(size, address, "built upload request");

    let header = FrameHeader::request(Priority::Type2, DeviceId::PCM, Mode::PcmUploadRequest);
    assemble(header, Some(SubMode::NULL), &fields)
}

/// PCM reply accepting an upload request
#[must_use]
pub fn upload_ok_response() -> Message {
    let header = FrameHeader::response(Priority::Type2, Mode::PcmUpload);
    assemble(header, Some(SubMode::UPLOAD_OK), &[])
}
