//! Errors raised by the diff engine
//!
//! The engine only fails in two ways: an input that does not fit the index width
//! (rejected before any work is done), or a broken internal invariant. The latter
//! aborts the computation; no partial hunk list is ever returned.

use std::fmt::Display;

/// Which of the two compared sequences an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Old => write!(f, "old"),
            Side::New => write!(f, "new"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// A sequence is longer than the engine's index width can address
    #[error("{side} input has {len} lines, more than the supported maximum of {limit}")]
    InputTooLarge { side: Side, len: usize, limit: usize },

    /// The bidirectional search ran out of steps without the two frontiers meeting
    #[error(
        "no middle snake found for old[{a_lo}..{a_hi}] / new[{b_lo}..{b_hi}] within {max_d} steps"
    )]
    MiddleSnakeNotFound {
        a_lo: usize,
        a_hi: usize,
        b_lo: usize,
        b_hi: usize,
        max_d: usize,
    },

    #[error("diff invariant violated: {0}")]
    InvariantViolation(String),
}

pub type DiffResult<T> = Result<T, DiffError>;
