use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("round count {0} outside 1..=80")]
    RoundsOutOfRange(usize),

    #[error("block must be 128 hex digits, got {0}")]
    BlockLength(usize),

    #[error("invalid block hex: {0}")]
    BlockHex(#[from] hex::FromHexError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
