//! Encoder error types

use thiserror::Error;

/// Encoder errors
///
/// Every variant is an invalid-argument condition detected before any
/// bytes are produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested payload slice lies outside the payload buffer
    #[error(
        "payload slice out of bounds: offset {offset} + length {length} exceeds {available} bytes"
    )]
    OutOfBounds {
        /// Start of the slice
        offset: usize,
        /// Requested slice length
        length: usize,
        /// Payload buffer length
        available: usize,
    },

    /// Buffer too short to hold a summable body plus checksum
    #[error("no checksum range in a {len} byte buffer (need at least {min})")]
    ChecksumRange {
        /// Buffer length
        len: usize,
        /// Minimum accepted length
        min: usize,
    },
}

impl Error {
    /// Whether this error was caused by a bad caller argument
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::ChecksumRange { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
