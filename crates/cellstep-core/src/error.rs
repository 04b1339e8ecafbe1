//! Error types for grid construction and access.

use std::error::Error;
use std::fmt;

/// Errors arising from building or mutating a [`Grid`](crate::Grid).
///
/// Every variant carries the dimension or index that failed so a caller can
/// point at the offending input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with side length 0.
    EmptyGrid,
    /// Side length exceeds [`Grid::MAX_SIDE`](crate::Grid::MAX_SIDE).
    SideTooLarge {
        /// The requested side length.
        side: usize,
        /// The largest supported side length.
        max: usize,
    },
    /// Number of rows does not equal the side length.
    RowCount {
        /// Rows required for a square grid.
        expected: usize,
        /// Rows supplied.
        actual: usize,
    },
    /// A row has the wrong number of columns.
    RowLength {
        /// Index of the offending row.
        row: usize,
        /// Columns required.
        expected: usize,
        /// Columns supplied.
        actual: usize,
    },
    /// A flat value buffer does not hold exactly `side * side` values.
    ValueCount {
        /// Values required.
        expected: usize,
        /// Values supplied.
        actual: usize,
    },
    /// A cell value is neither 0 nor 1.
    InvalidCell {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The value found.
        value: i64,
    },
    /// A coordinate lies outside the grid.
    CoordOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side length of the grid.
        side: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::SideTooLarge { side, max } => {
                write!(f, "grid side {side} exceeds maximum of {max}")
            }
            Self::RowCount { expected, actual } => {
                write!(f, "expected {expected} rows, got {actual}")
            }
            Self::RowLength {
                row,
                expected,
                actual,
            } => {
                write!(f, "row {row} has {actual} columns, expected {expected}")
            }
            Self::ValueCount { expected, actual } => {
                write!(f, "expected {expected} cell values, got {actual}")
            }
            Self::InvalidCell { row, col, value } => {
                write!(f, "cell ({row}, {col}) has value {value}, expected 0 or 1")
            }
            Self::CoordOutOfBounds { row, col, side } => {
                write!(
                    f,
                    "coordinate ({row}, {col}) out of bounds: [0, {side}) x [0, {side})"
                )
            }
        }
    }
}

impl Error for GridError {}
