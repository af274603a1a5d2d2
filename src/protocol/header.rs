//! VPW frame header
//!
//! Every frame starts with the same four bytes.
//!
//! # Wire Format
//!
//! ```text
//! +----------+-------------+--------+------+----------------------+
//! | Priority | Destination | Source | Mode | mode specific body.. |
//! +----------+-------------+--------+------+----------------------+
//!      0            1          2       3       4..
//! ```

use super::{DeviceId, HEADER_SIZE, Mode, Priority};

/// The fixed four byte frame header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    priority: Priority,
    destination: DeviceId,
    source: DeviceId,
    mode: u8,
}

impl FrameHeader {
    /// Create a header from raw parts
    #[must_use]
    pub const fn new(
        priority: Priority,
        destination: DeviceId,
        source: DeviceId,
        mode: u8,
    ) -> Self {
        Self {
            priority,
            destination,
            source,
            mode,
        }
    }

    /// Header of a frame the tool sends to `destination`
    #[must_use]
    pub const fn request(priority: Priority, destination: DeviceId, mode: Mode) -> Self {
        Self::new(priority, destination, DeviceId::TOOL, mode.as_u8())
    }

    /// Header of the reply a PCM sends back to the tool for `mode`
    #[must_use]
    pub const fn response(priority: Priority, mode: Mode) -> Self {
        Self::new(priority, DeviceId::TOOL, DeviceId::PCM, mode.response())
    }

    /// Get priority
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Get destination
    #[must_use]
    pub const fn destination(&self) -> DeviceId {
        self.destination
    }

    /// Get source
    #[must_use]
    pub const fn source(&self) -> DeviceId {
        self.source
    }

    /// Get mode byte
    #[must_use]
    pub const fn mode(&self) -> u8 {
        self.mode
    }

    /// Convert to bytes
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        [
            self.priority.as_u8(),
            self.destination.as_u8(),
            self.source.as_u8(),
            self.mode,
        ]
    }
}
