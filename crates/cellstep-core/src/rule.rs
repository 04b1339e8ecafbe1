//! B3/S23 transition rule.

use crate::cell::Cell;
use crate::neighbourhood::alive_neighbours;

/// Next raw state of a cell given its current raw state and alive-neighbour
/// count: 3 neighbours gives birth, 2 keeps the current state, anything
/// else dies.
#[inline]
pub fn next_state(current: u8, alive_neighbours: u8) -> u8 {
    match alive_neighbours {
        3 => 1,
        2 => current,
        _ => 0,
    }
}

/// Typed form of [`next_state`].
pub fn next_cell(current: Cell, alive_neighbours: u8) -> Cell {
    if next_state(current.value(), alive_neighbours) == 0 {
        Cell::Dead
    } else {
        Cell::Alive
    }
}

/// Compute row `row` of the next generation from the full `source` buffer
/// into `out`.
///
/// `source` is the complete row-major `side x side` state; `out` is the
/// destination row and must be `side` long. `source` is never written.
pub fn step_row(source: &[u8], side: usize, row: usize, out: &mut [u8]) {
    debug_assert_eq!(out.len(), side);
    let base = row * side;
    for (col, slot) in out.iter_mut().enumerate() {
        let n = alive_neighbours(source, side, row, col);
        *slot = next_state(source[base + col], n);
    }
}
