//! Seed/key security handshake

use crate::protocol::{
    DeviceId, FrameHeader, KEY_ACCEPTED, Message, Mode, Priority, SubMode, assemble, encode_key,
};

/// Ask the PCM for a security seed
#[must_use]
pub fn seed_request() -> Message {
    let header = FrameHeader::request(Priority::Type2, DeviceId::PCM, Mode::Seed);
    assemble(header, Some(SubMode::GET_SEED), &[])
}

/// Send the key computed from the seed
#[must_use]
pub fn unlock_request(key: u16) -> Message {
    let header = FrameHeader::request(Priority::Type2, DeviceId::PCM, Mode::Seed);
    assemble(header, Some(SubMode::SEND_KEY), &encode_key(key))
}

/// PCM reply once the key has been accepted
#[must_use]
pub fn unlock_accepted_response() -> Message {
    let header = FrameHeader::response(Priority::Type2, Mode::Seed);
    assemble(header, Some(SubMode::SEND_KEY), &[KEY_ACCEPTED])
}
