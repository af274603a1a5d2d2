//! Read-block requests

use crate::protocol::{BlockId, DeviceId, FrameHeader, Message, Mode, Priority, assemble};

/// Request the contents of a memory block
#[must_use]
pub fn read_request(block: BlockId) -> Message {
    let header = FrameHeader::request(Priority::Type2, DeviceId::PCM, Mode::ReadBlock);
    assemble(header, None, &[block.as_u8()])
}

/// Request the operating system id
#[must_use]
pub fn operating_system_id_request() -> Message {
    read_request(BlockId::OperatingSystemId)
}

/// Request the calibration id
#[must_use]
pub fn calibration_id_request() -> Message {
    read_request(BlockId::CalibrationId)
}

/// Request the hardware id
#[must_use]
pub fn hardware_id_request() -> Message {
    read_request(BlockId::HardwareId)
}

/// Request the first VIN segment
#[must_use]
pub fn vin1_request() -> Message {
    read_request(BlockId::Vin1)
}

/// Request the second VIN segment
#[must_use]
pub fn vin2_request() -> Message {
    read_request(BlockId::Vin2)
}

/// Request the third VIN segment
#[must_use]
pub fn vin3_request() -> Message {
    read_request(BlockId::Vin3)
}

/// Request the first serial number segment
#[must_use]
pub fn serial1_request() -> Message {
    read_request(BlockId::Serial1)
}

/// Request the second serial number segment
#[must_use]
pub fn serial2_request() -> Message {
    read_request(BlockId::Serial2)
}

/// Request the third serial number segment
#[must_use]
pub fn serial3_request() -> Message {
    read_request(BlockId::Serial3)
}

/// Request the broadcast code
#[must_use]
pub fn bcc_request() -> Message {
    read_request(BlockId::Bcc)
}

/// Request the manufacturer's enable counter
#[must_use]
pub fn mec_request() -> Message {
    read_request(BlockId::Mec)
}
