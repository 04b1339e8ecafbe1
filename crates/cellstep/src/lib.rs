//! cellstep: a parallel, double-buffered Game of Life stepper.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all cellstep sub-crates. Most users only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use cellstep::prelude::*;
//!
//! // A vertical blinker in the middle of a 5x5 grid.
//! let grid = parse_grid(
//!     "0 0 0 0 0\n\
//!      0 0 1 0 0\n\
//!      0 0 1 0 0\n\
//!      0 0 1 0 0\n\
//!      0 0 0 0 0\n",
//!     5,
//! )
//! .unwrap();
//!
//! let config = RunConfig::from_signed(1, 5, 2).unwrap();
//! let next = run(&grid, &config).unwrap();
//! assert_eq!(
//!     render_grid(&next),
//!     "0 0 0 0 0 \n0 0 0 0 0 \n0 1 1 1 0 \n0 0 0 0 0 \n0 0 0 0 0 \n"
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `cellstep-core` | `Cell`, `Grid`, neighbourhood, transition rule |
//! | [`arena`] | `cellstep-arena` | Ping-pong double buffer |
//! | [`engine`] | `cellstep-engine` | `Stepper`, `run`, row partition, config |
//! | [`io`] | `cellstep-io` | Plain-text grid loader and writer |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid, cells, neighbourhood, and rule (`cellstep-core`).
pub use cellstep_core as grid;

/// Double-buffered generation storage (`cellstep-arena`).
///
/// Most users drive it indirectly through [`engine::Stepper`].
pub use cellstep_arena as arena;

/// Row-partitioned parallel stepper (`cellstep-engine`).
pub use cellstep_engine as engine;

/// Plain-text grid files (`cellstep-io`).
pub use cellstep_io as io;

/// Common imports for typical cellstep usage.
///
/// ```rust
/// use cellstep::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use cellstep_core::{Cell, Grid, GridError};

    // Engine
    pub use cellstep_engine::{
        run, run_with_metrics, ConfigError, RunConfig, RunMetrics, StepError, StepMetrics, Stepper,
    };

    // I/O
    pub use cellstep_io::{parse_grid, read_grid, render_grid, write_grid, IoError};
}
