//! Core types for the cellstep automaton.
//!
//! This crate defines the square [`Grid`] of binary cells, the clipped
//! 8-connected [`neighbourhood`], and the B3/S23 transition [`rule`]. It has
//! no knowledge of buffering or threads; the engine crate builds the
//! generation loop on top of these pieces.
//!
//! # Boundary policy
//!
//! Neighbour positions that fall outside `[0, N-1] x [0, N-1]` are dropped
//! from the count. A corner cell therefore has 3 neighbours, an edge cell 5,
//! and an interior cell 8. There is no wrap-around.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;
pub mod neighbourhood;
pub mod rule;

pub use cell::Cell;
pub use error::GridError;
pub use grid::Grid;
pub use neighbourhood::{alive_neighbours, neighbours, OFFSETS_8};
pub use rule::{next_cell, next_state, step_row};
