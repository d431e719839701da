//! SHA-1 digest core with a differential round tracer.
//!
//! The pipeline is pad -> split into 64-byte blocks -> expand each block into
//! an 80-word schedule -> run the 80 compression rounds -> fold the result
//! into the running state.

pub mod block;
pub mod compress;
pub mod differential;
pub mod digest;
pub mod error;
pub mod input;
pub mod pad;
pub mod present;
pub mod schedule;
pub mod word;

pub use digest::{Digest, DigestAccumulator, digest};
pub use error::Error;
