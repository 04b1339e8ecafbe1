//! Double-buffered generation storage for cellstep.
//!
//! # Architecture
//!
//! The arena holds exactly two same-sized buffers in a two-element array.
//! The roles of the buffers are derived from the parity of the generation
//! counter and nothing else:
//!
//! ```text
//! PingPongBuffers
//! ├── buffers[0]  ←─── source (even generations) / destination (odd)
//! └── buffers[1]  ←─── destination (even generations) / source (odd)
//! ```
//!
//! After `g` published generations the authoritative state lives in
//! `buffers[g % 2]`. A generation pass borrows the source immutably and the
//! destination mutably, so no pass can observe its own writes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pingpong;

pub use error::ArenaError;
pub use pingpong::{GenerationPass, PingPongBuffers};
