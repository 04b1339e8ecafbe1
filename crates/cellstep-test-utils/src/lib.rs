//! Test utilities for cellstep development.
//!
//! - [`fixtures`]: well-known patterns (block, blinker, toad, glider) and
//!   a helper to stamp them into a grid.
//! - [`random_grid`]: deterministic random soups from a seed.
//! - [`reference_step`] / [`reference_run`]: a deliberately naive
//!   single-threaded stepper that shares no code with the engine, used as
//!   an oracle.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{stamp, Pattern, BLINKER_H, BLINKER_V, BLOCK, GLIDER, TOAD};

use cellstep_core::{Cell, Grid};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Random `side x side` grid where each cell is alive with probability
/// `density`. The same `(side, density, seed)` always yields the same grid.
///
/// # Panics
///
/// Panics if `side` is 0 or `density` is outside `[0, 1]`.
pub fn random_grid(side: usize, density: f64, seed: u64) -> Grid {
    assert!(
        (0.0..=1.0).contains(&density),
        "density must be in [0, 1], got {density}"
    );
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cells: Vec<Cell> = (0..side * side)
        .map(|_| Cell::from(rng.random_bool(density)))
        .collect();
    Grid::from_cells(side, cells).expect("random_grid: invalid side")
}

/// One generation computed cell by cell with signed coordinates and an
/// explicit bounds test.
pub fn reference_step(grid: &Grid) -> Grid {
    let side = grid.side();
    let n = side as i64;
    let mut next = Grid::dead(side).expect("reference_step: invalid side");
    for r in 0..n {
        for c in 0..n {
            let mut count = 0;
            for dr in -1i64..=1 {
                for dc in -1i64..=1 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let (nr, nc) = (r + dr, c + dc);
                    if nr < 0 || nc < 0 || nr >= n || nc >= n {
                        continue;
                    }
                    if grid.is_alive(nr as usize, nc as usize) {
                        count += 1;
                    }
                }
            }
            let alive = grid.is_alive(r as usize, c as usize);
            let next_alive = count == 3 || (count == 2 && alive);
            next.set(r as usize, c as usize, Cell::from(next_alive))
                .expect("reference_step: in bounds");
        }
    }
    next
}

/// `generations` applications of [`reference_step`].
pub fn reference_run(grid: &Grid, generations: u64) -> Grid {
    let mut current = grid.clone();
    for _ in 0..generations {
        current = reference_step(&current);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_grid_is_deterministic() {
        assert_eq!(random_grid(16, 0.3, 7), random_grid(16, 0.3, 7));
        assert_ne!(random_grid(16, 0.3, 7), random_grid(16, 0.3, 8));
    }

    #[test]
    fn random_grid_density_extremes() {
        assert_eq!(random_grid(8, 0.0, 1).population(), 0);
        assert_eq!(random_grid(8, 1.0, 1).population(), 64);
    }

    #[test]
    fn reference_blinker_flips() {
        let v = stamp(5, &BLINKER_V, 1, 2);
        let h = stamp(5, &BLINKER_H, 2, 1);
        assert_eq!(reference_step(&v), h);
        assert_eq!(reference_run(&v, 2), v);
    }

    #[test]
    fn reference_corner_cell_dies() {
        let g = Grid::from_alive(3, &[(0, 0)]).unwrap();
        assert_eq!(reference_step(&g).population(), 0);
    }
}
