//! Frame assembly
//!
//! Builds the `{priority, destination, source, mode[, submode][, payload]}`
//! layout shared by every message that does not carry a block checksum.

use super::{FrameHeader, HEADER_SIZE, Message, SubMode};

/// Assemble a header, an optional sub-mode and a payload into a message
#[must_use]
pub fn assemble(header: FrameHeader, submode: Option<SubMode>, payload: &[u8]) -> Message {
    let total_size = HEADER_SIZE + usize::from(submode.is_some()) + payload.len();
    let mut bytes = Vec::with_capacity(total_size);

    bytes.extend_from_slice(&header.to_bytes());
    if let Some(submode) = submode {
        bytes.push(submode.as_u8());
    }
    bytes.extend_from_slice(payload);

    Message::new(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{BlockId, DeviceId, Mode, Priority};

    #[test]
    fn test_header_only() {
        let header = FrameHeader::request(Priority::Type2, DeviceId::BROADCAST, Mode::HighSpeed);
        let msg = assemble(header, None, &[]);

        assert_eq!(msg.as_bytes(), &[0x6C, 0xFE, 0xF0, 0xA1]);
    }

    #[test]
    fn test_submode_then_payload() {
        let header = FrameHeader::request(Priority::Type2, DeviceId::PCM, Mode::Seed);
        let msg = assemble(header, Some(SubMode::SEND_KEY), &[0xAB, 0xCD]);

        assert_eq!(msg.as_bytes(), &[0x6C, 0x10, 0xF0, 0x27, 0x02, 0xAB, 0xCD]);
    }

    #[test]
    fn test_payload_without_submode() {
        let header = FrameHeader::request(Priority::Type2, DeviceId::PCM, Mode::ReadBlock);
        let msg = assemble(header, None, &[BlockId::CalibrationId.as_u8()]);

        assert_eq!(msg.as_bytes(), &[0x6C, 0x10, 0xF0, 0x3C, 0x08]);
    }
}
