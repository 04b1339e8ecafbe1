//! Grid loader.
//!
//! Input is `side * side` integers in row-major order separated by any
//! whitespace. Line structure is not significant. Every token must be an
//! integer equal to 0 or 1, and the token count must match exactly.

use std::io::Read;

use cellstep_core::{Grid, GridError};

use crate::error::IoError;

/// Read a `side x side` grid from `reader`.
///
/// Generic over `R: Read` so tests can use `&[u8]` and the CLI can use a
/// `File`.
pub fn read_grid<R: Read>(mut reader: R, side: usize) -> Result<Grid, IoError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_grid(&text, side)
}

/// Parse a `side x side` grid from whitespace-separated text.
pub fn parse_grid(text: &str, side: usize) -> Result<Grid, IoError> {
    if side == 0 {
        return Err(GridError::EmptyGrid.into());
    }
    if side > Grid::MAX_SIDE {
        return Err(GridError::SideTooLarge {
            side,
            max: Grid::MAX_SIDE,
        }
        .into());
    }

    let expected = side * side;
    let mut values = Vec::with_capacity(expected);
    for (index, token) in text.split_ascii_whitespace().enumerate() {
        if index == expected {
            return Err(IoError::TooManyValues { expected });
        }
        let value: i64 = token.parse().map_err(|_| IoError::NonNumeric {
            token: token.to_owned(),
            index,
        })?;
        let cell = u8::try_from(value)
            .ok()
            .filter(|&v| v <= 1)
            .ok_or(GridError::InvalidCell {
                row: index / side,
                col: index % side,
                value,
            })?;
        values.push(cell);
    }
    if values.len() < expected {
        return Err(IoError::TooFewValues {
            expected,
            actual: values.len(),
        });
    }
    Ok(Grid::from_values(side, values)?)
}
