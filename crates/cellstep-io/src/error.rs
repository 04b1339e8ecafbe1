//! Error types for grid loading and writing.

use std::fmt;
use std::io;

use cellstep_core::GridError;

/// Errors that can occur while reading or writing a grid file.
#[derive(Debug)]
pub enum IoError {
    /// The underlying reader or writer failed.
    Io(io::Error),
    /// A token could not be parsed as an integer.
    NonNumeric {
        /// The offending token.
        token: String,
        /// Zero-based position of the token in the input.
        index: usize,
    },
    /// The input ended before `side * side` values were read.
    TooFewValues {
        /// Values required.
        expected: usize,
        /// Values found.
        actual: usize,
    },
    /// The input holds more than `side * side` values.
    TooManyValues {
        /// Values required.
        expected: usize,
    },
    /// The values do not form a valid grid.
    Grid(GridError),
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::NonNumeric { token, index } => {
                write!(f, "value {index} is not an integer: {token:?}")
            }
            Self::TooFewValues { expected, actual } => {
                write!(f, "expected {expected} values, input ended after {actual}")
            }
            Self::TooManyValues { expected } => {
                write!(f, "input holds more than the expected {expected} values")
            }
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for IoError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for IoError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
