//! Errors from the generation stepper.

use std::error::Error;
use std::fmt;

use cellstep_arena::ArenaError;
use cellstep_core::GridError;

use crate::config::ConfigError;

/// Errors returned by [`Stepper`](crate::Stepper) and [`run`](crate::run).
///
/// Any error aborts the run; no partial grid is ever returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The configuration or initial grid was rejected before generation 0.
    Config(ConfigError),
    /// The double buffer was driven out of order.
    Arena(ArenaError),
    /// A grid could not be assembled from the engine's buffers.
    Grid(GridError),
    /// A cell outside {0, 1} was observed after a transition.
    InvariantViolation {
        /// Generation whose output held the bad value.
        generation: u64,
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The value found.
        value: u8,
    },
    /// A worker thread panicked while sweeping its band.
    WorkerPanicked {
        /// Index of the worker.
        worker: usize,
        /// Generation being computed.
        generation: u64,
    },
    /// A worker thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of which thread failed and why.
        reason: String,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Arena(e) => write!(f, "arena: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvariantViolation {
                generation,
                row,
                col,
                value,
            } => {
                write!(
                    f,
                    "cell ({row}, {col}) holds {value} after generation {generation}, expected 0 or 1"
                )
            }
            Self::WorkerPanicked { worker, generation } => {
                write!(f, "worker {worker} panicked during generation {generation}")
            }
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "thread spawn failed: {reason}")
            }
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Arena(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for StepError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ArenaError> for StepError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_is_source() {
        let e = StepError::from(ConfigError::InvalidWorkers { value: 0 });
        assert!(e.source().is_some());
        assert!(e.to_string().contains("worker count"));
    }

    #[test]
    fn invariant_message_names_position() {
        let e = StepError::InvariantViolation {
            generation: 4,
            row: 2,
            col: 7,
            value: 2,
        };
        let msg = e.to_string();
        assert!(msg.contains("(2, 7)"));
        assert!(msg.contains("generation 4"));
        assert!(e.source().is_none());
    }
}
