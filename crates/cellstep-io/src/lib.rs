//! Plain-text grid files for cellstep.
//!
//! [`read_grid`] / [`parse_grid`] load a square grid of whitespace-separated
//! 0/1 integers and reject any shape or value mismatch; [`write_grid`] /
//! [`render_grid`] produce one line per row in the same format.
//!
//! ```
//! use cellstep_io::{parse_grid, render_grid};
//!
//! let grid = parse_grid("0 1\n1 0\n", 2).unwrap();
//! assert_eq!(render_grid(&grid), "0 1 \n1 0 \n");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod reader;
pub mod writer;

pub use error::IoError;
pub use reader::{parse_grid, read_grid};
pub use writer::{render_grid, write_grid};
