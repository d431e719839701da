/// Bytes per block (512 bits).
pub const BLOCK_LEN: usize = 64;

pub type Block = [u8; BLOCK_LEN];

/// Iterator over the 64-byte blocks of a padded message.
///
/// Cloning restarts from the clone point; the original is unaffected.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    remaining: &'a [u8],
}

impl<'a> Blocks<'a> {
    pub(crate) fn new(padded: &'a [u8]) -> Self {
        debug_assert_eq!(padded.len() % BLOCK_LEN, 0, "padded length not block aligned");
        Self { remaining: padded }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        let (block, rest) = self.remaining.split_first_chunk::<BLOCK_LEN>()?;
        self.remaining = rest;
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.len() / BLOCK_LEN;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Blocks<'_> {}
