//! The 80-round compression function.
//!
//! Rounds are split into four stages of twenty, each with its own mixing
//! function and additive constant. Every round feeds one schedule word into
//! the five-register pipeline `a, b, c, d, e`.

use crate::schedule::{SCHEDULE_LEN, Schedule};
use crate::word::{Word, add, rotate_left};

pub const ROUNDS: usize = SCHEDULE_LEN;
const STAGE_LEN: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Choose,
    Parity,
    Majority,
    FinalParity,
}

impl Stage {
    pub fn for_round(round: usize) -> Stage {
        debug_assert!(round < ROUNDS, "round {round} out of range");
        match round / STAGE_LEN {
            0 => Stage::Choose,
            1 => Stage::Parity,
            2 => Stage::Majority,
            _ => Stage::FinalParity,
        }
    }

    pub fn mix(self, b: Word, c: Word, d: Word) -> Word {
        match self {
            Stage::Choose => d ^ (b & (c ^ d)),
            Stage::Parity | Stage::FinalParity => b ^ c ^ d,
            Stage::Majority => (b & c) | (b & d) | (c & d),
        }
    }

    pub fn constant(self) -> Word {
        match self {
            Stage::Choose => 0x5a82_7999,
            Stage::Parity => 0x6ed9_eba1,
            Stage::Majority => 0x8f1b_bcdc,
            Stage::FinalParity => 0xca62_c1d6,
        }
    }
}

/// The working registers of one block's compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkingState {
    pub a: Word,
    pub b: Word,
    pub c: Word,
    pub d: Word,
    pub e: Word,
}

impl WorkingState {
    pub fn from_words(words: [Word; 5]) -> Self {
        let [a, b, c, d, e] = words;
        Self { a, b, c, d, e }
    }

    pub fn words(&self) -> [Word; 5] {
        [self.a, self.b, self.c, self.d, self.e]
    }

    /// Applies round `round` with schedule word `w`.
    pub fn round(self, round: usize, w: Word) -> Self {
        let stage = Stage::for_round(round);
        let t = [stage.mix(self.b, self.c, self.d), self.e, stage.constant(), w]
            .into_iter()
            .fold(rotate_left(self.a, 5), add);
        Self {
            a: t,
            b: self.a,
            c: rotate_left(self.b, 30),
            d: self.c,
            e: self.d,
        }
    }
}

/// Runs all 80 rounds from `seed` and returns the final registers.
pub fn compress(seed: WorkingState, schedule: &Schedule) -> WorkingState {
    schedule
        .words()
        .iter()
        .enumerate()
        .fold(seed, |state, (i, &w)| state.round(i, w))
}

/// Runs the first `rounds` rounds, recording the state after each one.
pub fn compress_traced(seed: WorkingState, schedule: &Schedule, rounds: usize) -> Vec<WorkingState> {
    let mut states = Vec::with_capacity(rounds.min(ROUNDS));
    let mut state = seed;
    for (i, &w) in schedule.words().iter().enumerate().take(rounds) {
        state = state.round(i, w);
        states.push(state);
    }
    states
}
