use std::fmt;

use tracing::trace;

use crate::compress::{WorkingState, compress};
use crate::pad::pad;
use crate::schedule::Schedule;
use crate::word::{Word, add, from_be};

/// Standard SHA-1 initialization vector.
pub const INITIAL_STATE: [Word; 5] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476, 0xc3d2_e1f0];

pub const DIGEST_LEN: usize = 20;

/// A finished 160-bit digest, most significant word first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([Word; 5]);

impl Digest {
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        let mut words = [0; 5];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = from_be(&[chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self(words)
    }

    pub fn words(&self) -> [Word; 5] {
        self.0
    }

    pub fn to_bytes(&self) -> [u8; DIGEST_LEN] {
        let mut bytes = [0u8; DIGEST_LEN];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(self.0) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.0;
        write!(f, "{a:08x}{b:08x}{c:08x}{d:08x}{e:08x}")
    }
}

/// Running hash state for one computation.
///
/// Blocks must be absorbed strictly in order: each block's compression is
/// seeded from the state left by the previous one.
#[derive(Debug, Clone)]
pub struct DigestAccumulator {
    state: [Word; 5],
    blocks: u64,
}

impl Default for DigestAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl DigestAccumulator {
    pub fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            blocks: 0,
        }
    }

    /// Working registers to start the next block from.
    pub fn seed(&self) -> WorkingState {
        WorkingState::from_words(self.state)
    }

    pub fn absorb(&mut self, contribution: WorkingState) {
        for (word, delta) in self.state.iter_mut().zip(contribution.words()) {
            *word = add(*word, delta);
        }
        self.blocks += 1;
    }

    pub fn blocks_absorbed(&self) -> u64 {
        self.blocks
    }

    pub fn finalize(self) -> Digest {
        Digest(self.state)
    }
}

/// Computes the SHA-1 digest of `message`.
pub fn digest(message: &[u8]) -> Digest {
    let padded = pad(message);
    let mut accumulator = DigestAccumulator::new();

    for block in padded.blocks() {
        let schedule = Schedule::expand(block);
        let contribution = compress(accumulator.seed(), &schedule);
        accumulator.absorb(contribution);
    }

    trace!(
        bytes = message.len(),
        blocks = accumulator.blocks_absorbed(),
        "digest computed"
    );
    accumulator.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pad::block_count;

    #[test]
    fn empty_message() {
        assert_eq!(digest(b"").to_string(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn abc() {
        assert_eq!(digest(b"abc").to_string(), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn quick_brown_fox() {
        assert_eq!(
            digest(b"The quick brown fox jumps over the lazy dog").to_string(),
            "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12"
        );
    }

    #[test]
    fn two_block_message() {
        // FIPS 180 appendix A.2.
        let message = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
        assert_eq!(block_count(message.len()), 2);
        assert_eq!(digest(message).to_string(), "84983e441c3bd26ebaae4aa1f95129e5e54670f1");
    }

    #[test]
    fn one_million_a() {
        let message = vec![b'a'; 1_000_000];
        assert_eq!(digest(&message).to_string(), "34aa973cd4c4daa4f61eeb2bdbad27316534016f");
    }

    #[test]
    fn deterministic_and_length_sensitive() {
        let message = b"determinism".to_vec();
        assert_eq!(digest(&message), digest(&message));

        let mut longer = message.clone();
        longer.push(0);
        assert_ne!(digest(&message), digest(&longer));
    }

    #[test]
    fn accumulator_counts_blocks() {
        let padded = pad(&[1u8; 130]);
        let mut accumulator = DigestAccumulator::new();
        for block in padded.blocks() {
            let contribution = compress(accumulator.seed(), &Schedule::expand(block));
            accumulator.absorb(contribution);
        }
        assert_eq!(accumulator.blocks_absorbed(), block_count(130) as u64);
        assert_eq!(accumulator.finalize(), digest(&[1u8; 130]));
    }

    #[test]
    fn bytes_round_trip_through_words() {
        let d = digest(b"abc");
        let bytes = d.to_bytes();
        assert_eq!(&bytes[..4], &[0xa9, 0x99, 0x3e, 0x36]);
        assert_eq!(Digest::from_bytes(bytes), d);
        assert_eq!(d.words()[4], 0x9cd0_d89d);
    }
}
