//! Run configuration, validation, and error types.
//!
//! [`RunConfig`] carries the three integers the engine consumes: generation
//! count, grid side, and worker count. [`validate()`](RunConfig::validate)
//! checks them before any generation is computed;
//! [`validate_grid()`](RunConfig::validate_grid) additionally checks the
//! initial grid against the configured side.

use std::error::Error;
use std::fmt;

use cellstep_core::Grid;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`RunConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid side is zero or negative.
    InvalidSize {
        /// The rejected value.
        value: i64,
    },
    /// Grid side exceeds [`Grid::MAX_SIDE`].
    SizeTooLarge {
        /// The rejected value.
        value: u64,
        /// The largest supported side.
        max: usize,
    },
    /// Worker count is zero or negative.
    InvalidWorkers {
        /// The rejected value.
        value: i64,
    },
    /// Generation count is negative.
    NegativeGenerations {
        /// The rejected value.
        value: i64,
    },
    /// The initial grid does not have the configured side.
    SizeMismatch {
        /// Side from the configuration.
        configured: usize,
        /// Side of the supplied grid.
        actual: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { value } => {
                write!(f, "grid size must be at least 1, got {value}")
            }
            Self::SizeTooLarge { value, max } => {
                write!(f, "grid size {value} exceeds maximum of {max}")
            }
            Self::InvalidWorkers { value } => {
                write!(f, "worker count must be at least 1, got {value}")
            }
            Self::NegativeGenerations { value } => {
                write!(f, "generation count must not be negative, got {value}")
            }
            Self::SizeMismatch { configured, actual } => {
                write!(
                    f,
                    "initial grid is {actual}x{actual} but size {configured} was configured"
                )
            }
        }
    }
}

impl Error for ConfigError {}

// ── RunConfig ──────────────────────────────────────────────────────

/// Parameters for a single batch run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of generations to compute. Zero returns the initial grid.
    pub generations: u64,
    /// Grid side length `N`.
    pub size: usize,
    /// Number of workers the rows are partitioned across.
    pub workers: usize,
    /// Scan every freshly written band for values outside {0, 1}.
    ///
    /// Default: on in debug builds, off in release builds.
    pub verify_invariants: bool,
}

impl RunConfig {
    /// Create a config. Call [`validate()`](Self::validate) before use, or
    /// hand it to [`Stepper::new`](crate::Stepper::new) which validates.
    pub fn new(generations: u64, size: usize, workers: usize) -> Self {
        Self {
            generations,
            size,
            workers,
            verify_invariants: cfg!(debug_assertions),
        }
    }

    /// Build a validated config from signed integers as supplied by a
    /// command line or other untyped source.
    pub fn from_signed(generations: i64, size: i64, workers: i64) -> Result<Self, ConfigError> {
        if size <= 0 {
            return Err(ConfigError::InvalidSize { value: size });
        }
        if workers <= 0 {
            return Err(ConfigError::InvalidWorkers { value: workers });
        }
        if generations < 0 {
            return Err(ConfigError::NegativeGenerations { value: generations });
        }
        let size = size.unsigned_abs();
        if size > Grid::MAX_SIDE as u64 {
            return Err(ConfigError::SizeTooLarge {
                value: size,
                max: Grid::MAX_SIDE,
            });
        }
        let config = Self::new(
            generations.unsigned_abs(),
            size as usize,
            usize::try_from(workers).unwrap_or(usize::MAX),
        );
        config.validate()?;
        Ok(config)
    }

    /// Override [`verify_invariants`](Self::verify_invariants).
    pub fn with_verify_invariants(mut self, verify: bool) -> Self {
        self.verify_invariants = verify;
        self
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::InvalidSize { value: 0 });
        }
        if self.size > Grid::MAX_SIDE {
            return Err(ConfigError::SizeTooLarge {
                value: self.size as u64,
                max: Grid::MAX_SIDE,
            });
        }
        if self.workers == 0 {
            return Err(ConfigError::InvalidWorkers { value: 0 });
        }
        Ok(())
    }

    /// Validate the config and check that `grid` has the configured side.
    pub fn validate_grid(&self, grid: &Grid) -> Result<(), ConfigError> {
        self.validate()?;
        if grid.side() != self.size {
            return Err(ConfigError::SizeMismatch {
                configured: self.size,
                actual: grid.side(),
            });
        }
        Ok(())
    }
}

/// Worker count for callers that do not pin one: the available
/// parallelism, clamped to `[1, 64]`.
pub fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
        .clamp(1, 64)
}
