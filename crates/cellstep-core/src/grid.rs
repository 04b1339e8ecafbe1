//! Square grid of binary cells.

use std::fmt;

use crate::cell::Cell;
use crate::error::GridError;

/// An `N x N` grid of cells stored row-major as raw `u8` values.
///
/// Every constructor validates its input, so a `Grid` always holds exactly
/// `side * side` values and every value is 0 or 1. Cell `(row, col)` lives
/// at index `row * side + col`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    side: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Largest supported side length (`side * side` cells must stay addressable).
    pub const MAX_SIDE: usize = 1 << 16;

    /// Create an all-dead grid.
    pub fn dead(side: usize) -> Result<Self, GridError> {
        check_side(side)?;
        Ok(Self {
            side,
            cells: vec![0; side * side],
        })
    }

    /// Build a grid from a slice of rows.
    ///
    /// The side length is the number of rows; every row must have exactly
    /// that many columns.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let side = rows.len();
        check_side(side)?;
        let mut cells = Vec::with_capacity(side * side);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != side {
                return Err(GridError::RowLength {
                    row: r,
                    expected: side,
                    actual: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Self::from_values(side, cells)
    }

    /// Build a grid from a flat row-major buffer of `side * side` values.
    pub fn from_values(side: usize, values: Vec<u8>) -> Result<Self, GridError> {
        check_side(side)?;
        let expected = side * side;
        if values.len() != expected {
            return Err(GridError::ValueCount {
                expected,
                actual: values.len(),
            });
        }
        if let Some(i) = values.iter().position(|&v| v > 1) {
            return Err(GridError::InvalidCell {
                row: i / side,
                col: i % side,
                value: i64::from(values[i]),
            });
        }
        Ok(Self {
            side,
            cells: values,
        })
    }

    /// Build a grid from typed cells in row-major order.
    pub fn from_cells(side: usize, cells: impl IntoIterator<Item = Cell>) -> Result<Self, GridError> {
        let values: Vec<u8> = cells.into_iter().map(Cell::value).collect();
        Self::from_values(side, values)
    }

    /// Build an otherwise-dead grid with the listed `(row, col)` cells alive.
    pub fn from_alive(side: usize, alive: &[(usize, usize)]) -> Result<Self, GridError> {
        let mut grid = Self::dead(side)?;
        for &(row, col) in alive {
            grid.set(row, col, Cell::Alive)?;
        }
        Ok(grid)
    }

    /// Side length `N`.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells (`N * N`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().map(|&v| v as usize).sum()
    }

    /// Cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.side || col >= self.side {
            return None;
        }
        Cell::from_value(self.cells[row * self.side + col])
    }

    /// Whether `(row, col)` is in bounds and alive.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Overwrite the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        if row >= self.side || col >= self.side {
            return Err(GridError::CoordOutOfBounds {
                row,
                col,
                side: self.side,
            });
        }
        self.cells[row * self.side + col] = cell.value();
        Ok(())
    }

    /// Raw values of row `row`, or `None` if out of bounds.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.side {
            return None;
        }
        let start = row * self.side;
        Some(&self.cells[start..start + self.side])
    }

    /// Iterate over rows as raw value slices.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells.chunks_exact(self.side)
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(|&v| if v == 0 { Cell::Dead } else { Cell::Alive })
    }

    /// Row-major raw values.
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }
}

fn check_side(side: usize) -> Result<(), GridError> {
    if side == 0 {
        return Err(GridError::EmptyGrid);
    }
    if side > Grid::MAX_SIDE {
        return Err(GridError::SideTooLarge {
            side,
            max: Grid::MAX_SIDE,
        });
    }
    Ok(())
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid({0}x{0}, population {1})", self.side, self.population())?;
        for row in self.rows() {
            for &v in row {
                f.write_str(if v == 0 { "." } else { "#" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
