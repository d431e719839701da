use crate::block::Block;
use crate::word::{Word, from_be, rotate_left};

pub const SCHEDULE_LEN: usize = 80;
pub const BLOCK_WORDS: usize = 16;

/// The 80 words consumed one per round when compressing a single block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule([Word; SCHEDULE_LEN]);

impl Schedule {
    pub fn expand(block: &Block) -> Self {
        Self::from_words(block_words(block))
    }

    pub fn from_words(words: [Word; BLOCK_WORDS]) -> Self {
        let mut w = [0; SCHEDULE_LEN];
        w[..BLOCK_WORDS].copy_from_slice(&words);
        for i in BLOCK_WORDS..SCHEDULE_LEN {
            w[i] = rotate_left(w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16], 1);
        }
        Self(w)
    }

    pub fn words(&self) -> &[Word; SCHEDULE_LEN] {
        &self.0
    }
}

/// Big-endian view of a block as sixteen words.
pub fn block_words(block: &Block) -> [Word; BLOCK_WORDS] {
    let mut words = [0; BLOCK_WORDS];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = from_be(&[chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}
