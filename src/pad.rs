use crate::block::{BLOCK_LEN, Blocks};

const MARKER: u8 = 0x80;
const LENGTH_FIELD_LEN: usize = 8;
const LENGTH_OFFSET: usize = BLOCK_LEN - LENGTH_FIELD_LEN;

/// A message with marker byte, zero fill and bit-length field appended.
///
/// Only constructed by [`pad`], so its length is always a multiple of
/// [`BLOCK_LEN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedMessage {
    bytes: Vec<u8>,
}

impl PaddedMessage {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// The trailing big-endian bit length of the original message.
    pub fn length_field(&self) -> u64 {
        let mut field = [0u8; LENGTH_FIELD_LEN];
        field.copy_from_slice(&self.bytes[self.bytes.len() - LENGTH_FIELD_LEN..]);
        u64::from_be_bytes(field)
    }

    pub fn blocks(&self) -> Blocks<'_> {
        Blocks::new(&self.bytes)
    }
}

/// Number of zero bytes placed between the marker and the length field.
pub fn zero_fill_len(message_len: usize) -> usize {
    (LENGTH_OFFSET + BLOCK_LEN - (message_len + 1) % BLOCK_LEN) % BLOCK_LEN
}

/// Number of blocks a message of `message_len` bytes pads out to.
pub fn block_count(message_len: usize) -> usize {
    (message_len + 1 + LENGTH_FIELD_LEN).div_ceil(BLOCK_LEN)
}

pub fn pad(message: &[u8]) -> PaddedMessage {
    let fill = zero_fill_len(message.len());
    let bit_len = (message.len() as u64).wrapping_mul(8);

    let mut bytes = Vec::with_capacity(message.len() + 1 + fill + LENGTH_FIELD_LEN);
    bytes.extend_from_slice(message);
    bytes.push(MARKER);
    bytes.resize(bytes.len() + fill, 0);
    bytes.extend_from_slice(&bit_len.to_be_bytes());

    debug_assert_eq!(bytes.len() % BLOCK_LEN, 0);
    PaddedMessage { bytes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_fills_one_block() {
        let padded = pad(b"");
        assert_eq!(padded.len(), 64);
        assert_eq!(padded.as_bytes()[0], 0x80);
        assert!(padded.as_bytes()[1..].iter().all(|&b| b == 0));
        assert_eq!(padded.length_field(), 0);
    }

    #[test]
    fn abc_layout() {
        let padded = pad(b"abc");
        let bytes = padded.as_bytes();
        assert_eq!(&bytes[..4], b"abc\x80");
        assert!(bytes[4..56].iter().all(|&b| b == 0));
        assert_eq!(&bytes[56..], &[0, 0, 0, 0, 0, 0, 0, 0x18]);
    }

    #[test]
    fn boundary_lengths() {
        // 55 bytes leave exactly room for marker and length.
        assert_eq!(zero_fill_len(55), 0);
        assert_eq!(pad(&[0u8; 55]).len(), 64);
        // 56 bytes push the length field into a second block.
        assert_eq!(zero_fill_len(56), 63);
        assert_eq!(pad(&[0u8; 56]).len(), 128);
        assert_eq!(zero_fill_len(63), 56);
        assert_eq!(zero_fill_len(64), 55);
        assert_eq!(pad(&[0u8; 64]).len(), 128);
    }

    #[test]
    fn length_always_block_aligned_and_encoded() {
        for len in 0..300 {
            let message = vec![0xa5u8; len];
            let padded = pad(&message);
            assert_eq!(padded.len() % BLOCK_LEN, 0, "len {len}");
            assert_eq!(padded.length_field(), len as u64 * 8, "len {len}");
            assert_eq!(padded.len() / BLOCK_LEN, block_count(len), "len {len}");
            assert_eq!(&padded.as_bytes()[..len], &message[..]);
            assert_eq!(padded.as_bytes()[len], 0x80);
        }
    }
}
