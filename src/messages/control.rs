//! Bus control frames
//!
//! 4x negotiation, tester present, trouble code clearing and bus silence.
//! Each request that the PCM acknowledges has a matching `*_ok_response`
//! with the same length: destination and source point back at the tool and
//! the mode carries the response offset.

use crate::protocol::{DeviceId, FrameHeader, Message, Mode, Priority, SubMode, assemble};

/// Ask every node whether it can switch to 4x
#[must_use]
pub fn high_speed_check() -> Message {
    let header = FrameHeader::request(Priority::Type2, DeviceId::BROADCAST, Mode::HighSpeedPrepare);
    assemble(header, None, &[])
}

/// PCM reply agreeing to switch to 4x
#[must_use]
pub fn high_speed_ok_response() -> Message {
    assemble(
        FrameHeader::response(Priority::Type2, Mode::HighSpeedPrepare),
        None,
        &[],
    )
}

/// Tell every node to switch to 4x now
#[must_use]
pub fn begin_high_speed() -> Message {
    let header = FrameHeader::request(Priority::Type2, DeviceId::BROADCAST, Mode::HighSpeed);
    assemble(header, None, &[])
}

/// Keep-alive that stops nodes from resuming normal traffic
#[must_use]
pub fn test_device_present() -> Message {
    let header = FrameHeader::request(
        Priority::Type2,
        DeviceId::BROADCAST,
        Mode::TestDevicePresent,
    );
    assemble(header, None, &[])
}

/// Clear stored diagnostic trouble codes
#[must_use]
pub fn clear_dtcs_request() -> Message {
    let header = FrameHeader::request(
        Priority::Type2,
        DeviceId::PCM,
        Mode::ClearDiagnosticTroubleCodes,
    );
    assemble(header, None, &[])
}

/// PCM reply confirming the trouble codes were cleared
#[must_use]
pub fn clear_dtcs_ok_response() -> Message {
    let header = FrameHeader::response(Priority::Type2, Mode::ClearDiagnosticTroubleCodes);
    assemble(header, None, &[])
}

/// Ask every node to stop normal communication
#[must_use]
pub fn silence_bus_request() -> Message {
    let header = FrameHeader::request(Priority::Type2, DeviceId::BROADCAST, Mode::SilenceBus);
    assemble(header, Some(SubMode::NULL), &[])
}

/// PCM reply confirming it went quiet
#[must_use]
pub fn silence_bus_ok_response() -> Message {
    let header = FrameHeader::response(Priority::Type2, Mode::SilenceBus);
    assemble(header, Some(SubMode::NULL), &[])
}
