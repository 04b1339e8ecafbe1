//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// A grid of the wrong side length was loaded into the arena.
    SideMismatch {
        /// Side length the arena was allocated with.
        expected: usize,
        /// Side length of the supplied grid.
        actual: usize,
    },
    /// `publish()` was called without a preceding `begin_generation()`.
    PublishWithoutPass,
    /// The generation counter would overflow.
    GenerationOverflow,
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SideMismatch { expected, actual } => {
                write!(f, "grid side {actual} does not match arena side {expected}")
            }
            Self::PublishWithoutPass => {
                write!(f, "publish() called without a preceding begin_generation()")
            }
            Self::GenerationOverflow => write!(f, "generation counter overflow"),
        }
    }
}

impl Error for ArenaError {}
