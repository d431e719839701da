//! Side-by-side round tracing of two related message blocks.
//!
//! Both blocks start from the standard initialization vector. After every
//! round the two working states are compared register by register; a round
//! where register `a` agrees in both runs is reported as a local collision.
//! The last traced state of each run is fed forward onto the initialization
//! vector, giving one digest per block.

use crate::compress::{ROUNDS, WorkingState, compress_traced};
use crate::digest::{Digest, DigestAccumulator};
use crate::error::{Error, Result};
use crate::schedule::{BLOCK_WORDS, Schedule};
use crate::word::{Word, from_be};

/// Wang's disturbance vector, XORed word-wise into a block.
pub const DISTURBANCE_VECTOR: [Word; BLOCK_WORDS] = [
    0x4000_0001,
    0x0000_0002,
    0x0000_0002,
    0x8000_0002,
    0x0000_0001,
    0x0000_0000,
    0x8000_0001,
    0x0000_0002,
    0x0000_0002,
    0x0000_0002,
    0x0000_0000,
    0x0000_0000,
    0x0000_0001,
    0x0000_0000,
    0x8000_0002,
    0x0000_0002,
];

pub const DEFAULT_TRACE_ROUNDS: usize = 58;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundDiff {
    pub round: usize,
    pub left: WorkingState,
    pub right: WorkingState,
}

impl RoundDiff {
    pub fn bit_differences(&self) -> [u32; 5] {
        let (l, r) = (self.left.words(), self.right.words());
        std::array::from_fn(|i| bit_differences(l[i], r[i]))
    }

    pub fn total_bit_differences(&self) -> u32 {
        self.bit_differences().iter().sum()
    }

    pub fn is_local_collision(&self) -> bool {
        self.left.a == self.right.a
    }
}

pub fn perturb(words: &[Word; BLOCK_WORDS], mask: &[Word; BLOCK_WORDS]) -> [Word; BLOCK_WORDS] {
    std::array::from_fn(|i| words[i] ^ mask[i])
}

/// Hamming distance between two words.
pub fn bit_differences(a: Word, b: Word) -> u32 {
    (a ^ b).count_ones()
}

/// Result of tracing two blocks side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub rounds: Vec<RoundDiff>,
    pub left_digest: Digest,
    pub right_digest: Digest,
}

impl Trace {
    pub fn local_collisions(&self) -> impl Iterator<Item = &RoundDiff> {
        self.rounds.iter().filter(|d| d.is_local_collision())
    }
}

pub fn trace(left: &[Word; BLOCK_WORDS], right: &[Word; BLOCK_WORDS], rounds: usize) -> Result<Trace> {
    if rounds == 0 || rounds > ROUNDS {
        return Err(Error::RoundsOutOfRange(rounds));
    }

    let seed = DigestAccumulator::new().seed();
    let left_states = compress_traced(seed, &Schedule::from_words(*left), rounds);
    let right_states = compress_traced(seed, &Schedule::from_words(*right), rounds);
    let left_digest = feed_forward(&left_states);
    let right_digest = feed_forward(&right_states);

    let rounds = left_states
        .into_iter()
        .zip(right_states)
        .enumerate()
        .map(|(round, (left, right))| RoundDiff { round, left, right })
        .collect();

    Ok(Trace {
        rounds,
        left_digest,
        right_digest,
    })
}

fn feed_forward(states: &[WorkingState]) -> Digest {
    let mut accumulator = DigestAccumulator::new();
    if let Some(&last) = states.last() {
        accumulator.absorb(last);
    }
    accumulator.finalize()
}

/// Parses 128 hex digits into sixteen big-endian words.
pub fn parse_block_words(input: &str) -> Result<[Word; BLOCK_WORDS]> {
    let digits: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() != BLOCK_WORDS * 8 {
        return Err(Error::BlockLength(digits.len()));
    }

    let bytes = hex::decode(&digits)?;
    let mut words = [0; BLOCK_WORDS];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = from_be(&[chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(words)
}
