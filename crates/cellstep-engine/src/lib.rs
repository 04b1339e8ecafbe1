//! Row-partitioned parallel generation stepper for cellstep.
//!
//! Provides [`Stepper`], which advances a double-buffered grid one
//! generation at a time, and the batch entry points [`run`] and
//! [`run_with_metrics`]. Rows are split across a fixed number of workers by
//! a static [`RowPartition`]; every generation ends with a full join before
//! the next one starts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod partition;
pub mod stepper;

pub use config::{default_worker_count, ConfigError, RunConfig};
pub use error::StepError;
pub use metrics::{RunMetrics, StepMetrics};
pub use partition::RowPartition;
pub use stepper::{run, run_with_metrics, Stepper};
