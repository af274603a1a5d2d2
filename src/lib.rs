//! Byte-exact message encoder for J1850 VPW powertrain control modules
//!
//! This library builds the frames a diagnostic tool sends to read PCM
//! memory blocks, unlock the PCM with a seed/key handshake, switch the bus
//! to 4x, silence normal traffic and upload code in checksummed blocks. It
//! also builds the exact replies a PCM sends, so a reply is recognized by
//! plain equality.
//!
//! # Quick Start
//!
//! ```rust
//! use vpw_pcm::{Message, block_message, unlock_request, upload_ok_response};
//!
//! // Key response for a computed key
//! let unlock = unlock_request(0x1234);
//! assert_eq!(unlock.as_bytes(), &[0x6C, 0x10, 0xF0, 0x27, 0x02, 0x12, 0x34]);
//!
//! // Checksummed upload block
//! let block = block_message(&[0x01, 0x02, 0x03, 0x04], 0, 4, 0x0001_0000, false)?;
//! assert_eq!(&block.as_bytes()[block.len() - 2..], &[0x00, 0x0F]);
//!
//! // Recognize a reply read from the device
//! let reply = Message::new(vec![0x6Cu8, 0xF0, 0x10, 0x76, 0x00]);
//! assert_eq!(reply, upload_ok_response());
//! # Ok::<(), vpw_pcm::Error>(())
//! ```
//!
//! # Scope
//!
//! Encoding only. Sending bytes, appending device-layer CRCs, sequencing a
//! reflash and interpreting replies belong to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod messages;
pub mod protocol;

pub use messages::*;
pub use protocol::{BlockId, DeviceId, Error, FrameHeader, Message, Mode, Priority, Result, SubMode};
