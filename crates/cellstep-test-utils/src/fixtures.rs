//! Reusable pattern fixtures.
//!
//! Each [`Pattern`] lists its alive cells relative to its top-left corner.
//! [`stamp`] places one into an otherwise-dead grid.

use cellstep_core::Grid;

/// A named set of alive cells, offsets from the pattern's top-left corner.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
    /// Bounding box `(rows, cols)`.
    pub extent: (usize, usize),
}

/// 2x2 still life.
pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    extent: (2, 2),
};

/// Horizontal blinker phase (period 2).
pub const BLINKER_H: Pattern = Pattern {
    name: "blinker-h",
    cells: &[(0, 0), (0, 1), (0, 2)],
    extent: (1, 3),
};

/// Vertical blinker phase (period 2).
pub const BLINKER_V: Pattern = Pattern {
    name: "blinker-v",
    cells: &[(0, 0), (1, 0), (2, 0)],
    extent: (3, 1),
};

/// Toad (period 2), first phase.
pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    extent: (2, 4),
};

/// Glider heading towards increasing row and column; moves by (1, 1)
/// every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    extent: (3, 3),
};

/// Dead `side x side` grid with `pattern` placed at `(row, col)`.
///
/// # Panics
///
/// Panics if the pattern does not fit.
pub fn stamp(side: usize, pattern: &Pattern, row: usize, col: usize) -> Grid {
    let alive: Vec<(usize, usize)> = pattern
        .cells
        .iter()
        .map(|&(r, c)| (row + r, col + c))
        .collect();
    Grid::from_alive(side, &alive)
        .unwrap_or_else(|e| panic!("pattern '{}' does not fit: {e}", pattern.name))
}
