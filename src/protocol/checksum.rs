//! Block transfer checksum
//!
//! The checksum is the 16-bit wrapping sum of every byte after the
//! priority/destination/source/mode prefix and before the two trailing
//! checksum bytes. It is stored big-endian in those trailing bytes.

use tracing::debug;

use super::{CHECKSUM_SIZE, CHECKSUM_START, Error, MIN_BLOCK_MESSAGE_SIZE, Result};

/// Compute the block checksum of a buffer whose last two bytes are reserved
///
/// # Errors
///
/// Returns [`Error::ChecksumRange`] if the buffer has no byte between the
/// prefix and the checksum field.
pub fn block_checksum(buffer: &[u8]) -> Result<u16> {
    let len = buffer.len();
    if len < MIN_BLOCK_MESSAGE_SIZE {
        debug!(len, "buffer too short for a block checksum");
        return Err(Error::ChecksumRange {
            len,
            min: MIN_BLOCK_MESSAGE_SIZE,
        });
    }

    let sum = buffer[CHECKSUM_START..len - CHECKSUM_SIZE]
        .iter()
        .fold(0u16, |acc, &byte| acc.wrapping_add(u16::from(byte)));
    Ok(sum)
}

/// Compute the block checksum and write it into the last two bytes
///
/// Returns the value written.
///
/// # Errors
///
/// Same as [`block_checksum`]; the buffer is left untouched on error.
pub fn add_block_checksum(buffer: &mut [u8]) -> Result<u16> {
    let checksum = block_checksum(buffer)?;
    let len = buffer.len();
    buffer[len - CHECKSUM_SIZE..].copy_from_slice(&checksum.to_be_bytes());
    Ok(checksum)
}

/// Check the trailing checksum of a complete block message
///
/// # Errors
///
/// Same as [`block_checksum`].
pub fn verify_block_checksum(message: &[u8]) -> Result<bool> {
    let expected = block_checksum(message)?;
    let len = message.len();
    let stored = u16::from_be_bytes([message[len - 2], message[len - 1]]);
    Ok(stored == expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_skips_prefix_and_trailer() {
        let mut buffer = [0xFFu8, 0xFF, 0xFF, 0xFF, 0x01, 0x02, 0x03, 0xAA, 0xBB];
        let checksum = add_block_checksum(&mut buffer).unwrap();

        assert_eq!(checksum, 0x0006);
        assert_eq!(&buffer[7..], &[0x00, 0x06]);
        assert_eq!(&buffer[..7], &[0xFF, 0xFF, 0xFF, 0xFF, 0x01, 0x02, 0x03]);
    }

    #[test]
    fn test_checksum_wraps() {
        let mut buffer = vec![0u8; 4];
        buffer.extend(std::iter::repeat_n(0xFF, 300));
        buffer.extend([0, 0]);

        let checksum = add_block_checksum(&mut buffer).unwrap();
        // 300 * 0xFF = 0x1_2AD4
        assert_eq!(checksum, 0x2AD4);
        assert!(verify_block_checksum(&buffer).unwrap());
    }

    #[test]
    fn test_checksum_wraps_past_u16() {
        let mut buffer = vec![0u8; 4];
        buffer.extend(std::iter::repeat_n(0xFF, 258));
        buffer.extend([0, 0]);

        // 258 * 0xFF = 0x1_00FE
        assert_eq!(add_block_checksum(&mut buffer).unwrap(), 0x00FE);
    }

    #[test]
    fn test_minimum_buffer() {
        let mut buffer = [0x6Du8, 0x10, 0xF0, 0x36, 0x42, 0x00, 0x00];
        assert_eq!(add_block_checksum(&mut buffer).unwrap(), 0x0042);
        assert_eq!(&buffer[5..], &[0x00, 0x42]);
    }

    #[test]
    fn test_undersized_buffers_rejected() {
        for len in 0..MIN_BLOCK_MESSAGE_SIZE {
            let mut buffer = vec![0x11u8; len];
            let result = add_block_checksum(&mut buffer);
            assert_eq!(
                result,
                Err(Error::ChecksumRange {
                    len,
                    min: MIN_BLOCK_MESSAGE_SIZE,
                })
            );
            assert!(
                buffer.iter().all(|&b| b == 0x11),
                "buffer must be untouched"
            );
        }
    }

    #[test]
    fn test_verify_detects_corruption() {
        let mut buffer = [0x6Du8, 0x10, 0xF0, 0x36, 0x00, 0x00, 0x04, 0x00, 0x00];
        add_block_checksum(&mut buffer).unwrap();
        assert!(verify_block_checksum(&buffer).unwrap());

        buffer[5] ^= 0x01;
        assert!(!verify_block_checksum(&buffer).unwrap());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn buffer_strategy() -> impl Strategy<Value = Vec<u8>> {
            prop::collection::vec(any::<u8>(), MIN_BLOCK_MESSAGE_SIZE..=4096)
        }

        proptest! {
            /// Property: applying the checksum twice changes nothing
            #[test]
            fn prop_checksum_idempotent(mut buffer in buffer_strategy()) {
                add_block_checksum(&mut buffer).unwrap();
                let once = buffer.clone();
                add_block_checksum(&mut buffer).unwrap();

                prop_assert_eq!(once, buffer);
            }

            /// Property: the prefix bytes never influence the checksum
            #[test]
            fn prop_prefix_excluded(
                buffer in buffer_strategy(),
                prefix in any::<[u8; 4]>(),
            ) {
                let mut altered = buffer.clone();
                altered[..4].copy_from_slice(&prefix);

                prop_assert_eq!(block_checksum(&buffer), block_checksum(&altered));
            }

            /// Property: a freshly checksummed buffer always verifies
            #[test]
            fn prop_checksummed_buffer_verifies(mut buffer in buffer_strategy()) {
                add_block_checksum(&mut buffer).unwrap();
                prop_assert!(verify_block_checksum(&buffer).unwrap());
            }
        }
    }
}
