//! VPW protocol constant tables
//!
//! Priorities, device addresses, modes, sub-modes and block ids used by
//! the PCM diagnostic and reflash messages. Everything here is a
//! compile-time constant; nothing is mutated at runtime.

use std::fmt;

use super::RESPONSE_OFFSET;

/// Frame priority / header type byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Priority {
    /// Physically addressed, three byte header
    Type2 = 0x6C,
    /// Block transfer (used by upload data messages)
    Block = 0x6D,
}

impl Priority {
    /// Convert from byte
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x6C => Some(Self::Type2),
            0x6D => Some(Self::Block),
            _ => None,
        }
    }

    /// Convert to byte
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Node address on the bus
///
/// Addresses are an open set, so this is a newtype rather than an enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceId(u8);

impl DeviceId {
    /// Powertrain control module
    pub const PCM: Self = Self(0x10);
    /// Diagnostic tool (us)
    pub const TOOL: Self = Self(0xF0);
    /// Every node on the bus
    pub const BROADCAST: Self = Self(0xFE);

    /// Wrap a raw device address
    #[must_use]
    pub const fn new(address: u8) -> Self {
        Self(address)
    }

    /// Convert to byte
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl From<u8> for DeviceId {
    fn from(address: u8) -> Self {
        Self(address)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::PCM => write!(f, "PCM"),
            Self::TOOL => write!(f, "Tool"),
            Self::BROADCAST => write!(f, "Broadcast"),
            Self(raw) => write!(f, "{raw:#04X}"),
        }
    }
}

/// Command byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Mode {
    /// Clear diagnostic trouble codes
    ClearDiagnosticTroubleCodes = 0x04,
    /// Security access (seed request / key response)
    Seed = 0x27,
    /// Disable normal communication
    SilenceBus = 0x28,
    /// Announce an upcoming upload
    PcmUploadRequest = 0x34,
    /// Upload a block of data (optionally executing it)
    PcmUpload = 0x36,
    /// Read a block by id
    ReadBlock = 0x3C,
    /// Tester present keep-alive
    TestDevicePresent = 0x3F,
    /// Ask nodes whether they can switch to 4x
    HighSpeedPrepare = 0xA0,
    /// Switch the bus to 4x
    HighSpeed = 0xA1,
}

impl Mode {
    /// Convert from byte
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x04 => Some(Self::ClearDiagnosticTroubleCodes),
            0x27 => Some(Self::Seed),
            0x28 => Some(Self::SilenceBus),
            0x34 => Some(Self::PcmUploadRequest),
            0x36 => Some(Self::PcmUpload),
            0x3C => Some(Self::ReadBlock),
            0x3F => Some(Self::TestDevicePresent),
            0xA0 => Some(Self::HighSpeedPrepare),
            0xA1 => Some(Self::HighSpeed),
            _ => None,
        }
    }

    /// Convert to byte
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Mode byte a PCM uses when replying to this mode
    #[must_use]
    pub const fn response(self) -> u8 {
        self.as_u8().wrapping_add(RESPONSE_OFFSET)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ClearDiagnosticTroubleCodes => "ClearDiagnosticTroubleCodes",
            Self::Seed => "Seed",
            Self::SilenceBus => "SilenceBus",
            Self::PcmUploadRequest => "PcmUploadRequest",
            Self::PcmUpload => "PcmUpload",
            Self::ReadBlock => "ReadBlock",
            Self::TestDevicePresent => "TestDevicePresent",
            Self::HighSpeedPrepare => "HighSpeedPrepare",
            Self::HighSpeed => "HighSpeed",
        };
        write!(f, "{name}")
    }
}

/// Command qualifier byte
///
/// Several sub-modes share a value, so they are associated constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubMode(u8);

impl SubMode {
    /// No qualifier
    pub const NULL: Self = Self(0x00);
    /// Upload accepted (in the PCM's reply)
    pub const UPLOAD_OK: Self = Self(0x00);
    /// Store the uploaded block only
    pub const NO_EXECUTE: Self = Self(0x00);
    /// Ask for a security seed
    pub const GET_SEED: Self = Self(0x01);
    /// Send the computed key
    pub const SEND_KEY: Self = Self(0x02);
    /// Jump to the uploaded block once stored
    pub const EXECUTE: Self = Self(0x80);

    /// Wrap a raw sub-mode byte
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Convert to byte
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Execute flag for a block-write message
    #[must_use]
    pub const fn execute_flag(execute: bool) -> Self {
        if execute {
            Self::EXECUTE
        } else {
            Self::NO_EXECUTE
        }
    }
}

/// Status byte a PCM sends after accepting a key
pub const KEY_ACCEPTED: u8 = 0x34;

/// Memory block selector for read requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BlockId {
    /// VIN characters 1-5
    Vin1 = 0x01,
    /// VIN characters 6-11
    Vin2 = 0x02,
    /// VIN characters 12-17
    Vin3 = 0x03,
    /// Hardware id
    HardwareId = 0x04,
    /// Serial number, first segment
    Serial1 = 0x05,
    /// Serial number, second segment
    Serial2 = 0x06,
    /// Serial number, third segment
    Serial3 = 0x07,
    /// Calibration id
    CalibrationId = 0x08,
    /// Operating system id
    OperatingSystemId = 0x0A,
    /// Broadcast code
    Bcc = 0x14,
    /// Manufacturer's enable counter
    Mec = 0xA0,
}

impl BlockId {
    /// Convert from byte
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x01 => Some(Self::Vin1),
            0x02 => Some(Self::Vin2),
            0x03 => Some(Self::Vin3),
            0x04 => Some(Self::HardwareId),
            0x05 => Some(Self::Serial1),
            0x06 => Some(Self::Serial2),
            0x07 => Some(Self::Serial3),
            0x08 => Some(Self::CalibrationId),
            0x0A => Some(Self::OperatingSystemId),
            0x14 => Some(Self::Bcc),
            0xA0 => Some(Self::Mec),
            _ => None,
        }
    }

    /// Convert to byte
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_roundtrip() {
        let modes = [
            Mode::ClearDiagnosticTroubleCodes,
            Mode::Seed,
            Mode::SilenceBus,
            Mode::PcmUploadRequest,
            Mode::PcmUpload,
            Mode::ReadBlock,
            Mode::TestDevicePresent,
            Mode::HighSpeedPrepare,
            Mode::HighSpeed,
        ];

        for mode in modes {
            assert_eq!(Mode::from_u8(mode.as_u8()), Some(mode));
        }
        assert_eq!(Mode::from_u8(0x00), None);
    }

    #[test]
    fn test_mode_response_offset() {
        assert_eq!(Mode::Seed.response(), 0x67);
        assert_eq!(Mode::PcmUpload.response(), 0x76);
        assert_eq!(Mode::HighSpeedPrepare.response(), 0xE0);
        assert_eq!(Mode::ClearDiagnosticTroubleCodes.response(), 0x44);
    }

    #[test]
    fn test_block_id_roundtrip() {
        for value in 0..=u8::MAX {
            if let Some(id) = BlockId::from_u8(value) {
                assert_eq!(id.as_u8(), value);
            }
        }
        assert_eq!(BlockId::from_u8(0x09), None);
    }

    #[test]
    fn test_execute_flag() {
        assert_eq!(SubMode::execute_flag(true).as_u8(), 0x80);
        assert_eq!(SubMode::execute_flag(false).as_u8(), 0x00);
    }

    #[test]
    fn test_device_display() {
        assert_eq!(DeviceId::PCM.to_string(), "PCM");
        assert_eq!(DeviceId::new(0x18).to_string(), "0x18");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Priority::Block).unwrap();
        assert_eq!(
            serde_json::from_str::<Priority>(&json).unwrap(),
            Priority::Block
        );

        let json = serde_json::to_string(&BlockId::OperatingSystemId).unwrap();
        assert_eq!(
            serde_json::from_str::<BlockId>(&json).unwrap(),
            BlockId::OperatingSystemId
        );

        let json = serde_json::to_string(&DeviceId::BROADCAST).unwrap();
        assert_eq!(json, "254");
        assert_eq!(
            serde_json::from_str::<DeviceId>(&json).unwrap(),
            DeviceId::BROADCAST
        );
    }
}
