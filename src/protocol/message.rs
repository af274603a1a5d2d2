//! VPW message container

use std::fmt;

use bytes::Bytes;

use super::HEADER_SIZE;

/// One protocol frame, exactly as handed to the device layer
///
/// Immutable once built. Clones share the underlying buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    bytes: Bytes,
}

impl Message {
    /// Wrap raw frame bytes (for example a reply read from the bus)
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Get frame bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Frame length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the frame has no bytes at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Get priority byte
    #[must_use]
    pub fn priority(&self) -> Option<u8> {
        self.bytes.first().copied()
    }

    /// Get destination byte
    #[must_use]
    pub fn destination(&self) -> Option<u8> {
        self.bytes.get(1).copied()
    }

    /// Get source byte
    #[must_use]
    pub fn source(&self) -> Option<u8> {
        self.bytes.get(2).copied()
    }

    /// Get mode byte
    #[must_use]
    pub fn mode(&self) -> Option<u8> {
        self.bytes.get(HEADER_SIZE - 1).copied()
    }

    /// Bytes following the four byte header
    #[must_use]
    pub fn body(&self) -> &[u8] {
        self.bytes.get(HEADER_SIZE..).unwrap_or_default()
    }

    /// Copy the frame into a new vector
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Unwrap the underlying buffer
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

impl AsRef<[u8]> for Message {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Message> for Bytes {
    fn from(message: Message) -> Self {
        message.bytes
    }
}

impl From<Vec<u8>> for Message {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl PartialEq<[u8]> for Message {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Message {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}
