//! Benchmark profiles for cellstep.
//!
//! Each profile is an initial grid plus the [`RunConfig`] to step it with:
//!
//! - [`reference_profile`]: 256x256 random soup (64K cells)
//! - [`stress_profile`]: 1024x1024 random soup (~1M cells)
//! - [`glider_field`]: gliders tiled across a grid, for steady-state load

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cellstep_core::Grid;
use cellstep_engine::RunConfig;
use cellstep_test_utils::{random_grid, GLIDER};

/// Initial soup density used by the random profiles.
pub const SOUP_DENSITY: f64 = 0.35;

/// 256x256 soup, 10 generations on `workers` threads.
pub fn reference_profile(seed: u64, workers: usize) -> (Grid, RunConfig) {
    let grid = random_grid(256, SOUP_DENSITY, seed);
    (grid, RunConfig::new(10, 256, workers).with_verify_invariants(false))
}

/// 1024x1024 soup, 4 generations on `workers` threads.
pub fn stress_profile(seed: u64, workers: usize) -> (Grid, RunConfig) {
    let grid = random_grid(1024, SOUP_DENSITY, seed);
    (grid, RunConfig::new(4, 1024, workers).with_verify_invariants(false))
}

/// `side x side` grid with a glider in every 6x6 tile.
pub fn glider_field(side: usize) -> Grid {
    let mut alive = Vec::new();
    for tile_r in (0..side.saturating_sub(5)).step_by(6) {
        for tile_c in (0..side.saturating_sub(5)).step_by(6) {
            alive.extend(GLIDER.cells.iter().map(|&(r, c)| (tile_r + r, tile_c + c)));
        }
    }
    Grid::from_alive(side, &alive).unwrap_or_else(|e| panic!("glider_field({side}): {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_consistent() {
        let (grid, config) = reference_profile(1, 4);
        assert_eq!(grid.side(), config.size);
        assert!(config.validate_grid(&grid).is_ok());
        assert!(!config.verify_invariants);
    }

    #[test]
    fn glider_field_population() {
        let g = glider_field(24);
        assert_eq!(g.population(), 4 * 4 * GLIDER.cells.len());
    }
}
