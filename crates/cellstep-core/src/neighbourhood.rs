//! Clipped 8-connected neighbourhood on a square grid.
//!
//! Out-of-range neighbour positions are omitted rather than wrapped or
//! clamped, so edge cells see fewer neighbours (corners 3, edges 5).

use smallvec::SmallVec;

/// All 8 offsets as `(d_row, d_col)`: N, S, W, E, NW, NE, SW, SE.
pub const OFFSETS_8: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Apply one offset to `(row, col)`, returning `None` if the result leaves
/// `[0, side) x [0, side)`.
#[inline]
fn resolve(row: usize, col: usize, (dr, dc): (isize, isize), side: usize) -> Option<(usize, usize)> {
    let nr = row.checked_add_signed(dr).filter(|&r| r < side)?;
    let nc = col.checked_add_signed(dc).filter(|&c| c < side)?;
    Some((nr, nc))
}

/// In-bounds neighbour positions of `(row, col)` on a `side x side` grid.
pub fn neighbours(row: usize, col: usize, side: usize) -> SmallVec<[(usize, usize); 8]> {
    OFFSETS_8
        .iter()
        .filter_map(|&off| resolve(row, col, off, side))
        .collect()
}

/// Sum of the in-bounds neighbour values of `(row, col)` in a row-major
/// `side x side` buffer.
#[inline]
pub fn alive_neighbours(cells: &[u8], side: usize, row: usize, col: usize) -> u8 {
    debug_assert_eq!(cells.len(), side * side);
    let mut count = 0u8;
    for &off in &OFFSETS_8 {
        if let Some((nr, nc)) = resolve(row, col, off, side) {
            count += cells[nr * side + nc];
        }
    }
    count
}
