//! Generation stepper.
//!
//! [`Stepper`] owns the double buffer and advances it one generation per
//! [`step()`](Stepper::step) call. Each generation:
//!
//! 1. borrow the source buffer immutably and the destination mutably
//! 2. split the destination into one disjoint band per worker
//! 3. sweep every band on its own scoped thread (or inline for one band)
//! 4. join all workers, then publish the destination
//!
//! No generation starts before every worker of the previous one has been
//! joined, and workers never share a destination row.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self` and [`current()`](Stepper::current)
//! borrows from `self`, so a view of the grid can never be held across a
//! step.

use std::ops::Range;
use std::thread;
use std::time::Instant;

use cellstep_arena::PingPongBuffers;
use cellstep_core::{step_row, Grid, GridError};
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::config::RunConfig;
use crate::error::StepError;
use crate::metrics::{RunMetrics, StepMetrics};
use crate::partition::RowPartition;

// Fails to compile if the stepper stops being movable across threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Stepper>();
    }
};

// ── Stepper ─────────────────────────────────────────────────────

/// Double-buffered, row-partitioned automaton stepper.
///
/// Created from an initial [`Grid`] and a [`RunConfig`] via
/// [`new()`](Stepper::new).
///
/// # Example
///
/// ```
/// use cellstep_core::Grid;
/// use cellstep_engine::{RunConfig, Stepper};
///
/// let blinker = Grid::from_rows(&[[0u8, 1, 0], [0, 1, 0], [0, 1, 0]]).unwrap();
/// let mut stepper = Stepper::new(&blinker, RunConfig::new(1, 3, 2)).unwrap();
/// stepper.step().unwrap();
/// assert_eq!(stepper.current(), &[0, 0, 0, 1, 1, 1, 0, 0, 0]);
/// ```
pub struct Stepper {
    arena: PingPongBuffers,
    partition: RowPartition,
    config: RunConfig,
    last_metrics: StepMetrics,
}

impl Stepper {
    /// Validate `config` against `initial` and allocate both buffers.
    ///
    /// Fails with [`StepError::Config`] before any generation is computed
    /// if the config is invalid or the grid side does not match.
    pub fn new(initial: &Grid, config: RunConfig) -> Result<Self, StepError> {
        config.validate_grid(initial)?;
        let partition = RowPartition::new(config.size, config.workers);
        Ok(Self {
            arena: PingPongBuffers::new(initial),
            partition,
            config,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Compute one generation.
    ///
    /// # Errors
    ///
    /// Returns [`StepError`] if a worker cannot be spawned, panics, or
    /// observes an invariant violation. The generation counter does not
    /// advance on error.
    pub fn step(&mut self) -> Result<StepMetrics, StepError> {
        let start = Instant::now();
        let verify = self.config.verify_invariants;

        let pass = self.arena.begin_generation()?;
        let generation = pass.generation;
        let side = pass.side;
        let bands = self.partition.split_mut(pass.dest, side);
        let population = sweep(
            pass.source,
            side,
            self.partition.bands(),
            bands,
            generation,
            verify,
        )?;
        self.arena.publish()?;

        let metrics = StepMetrics {
            generation,
            total_us: start.elapsed().as_micros() as u64,
            workers_used: self.partition.active_workers(),
            population,
        };
        debug!(
            generation,
            population,
            elapsed_us = metrics.total_us,
            "generation complete"
        );
        self.last_metrics = metrics.clone();
        Ok(metrics)
    }

    /// Compute `generations` more generations.
    pub fn advance(&mut self, generations: u64) -> Result<(), StepError> {
        for _ in 0..generations {
            self.step()?;
        }
        Ok(())
    }

    /// Compute the remaining generations up to
    /// [`RunConfig::generations`], returning aggregate metrics.
    pub fn run_to_end(&mut self) -> Result<RunMetrics, StepError> {
        let start = Instant::now();
        let remaining = self.config.generations.saturating_sub(self.generation());
        info!(
            size = self.config.size,
            generations = remaining,
            workers = self.partition.active_workers(),
            "starting run"
        );
        self.advance(remaining)?;

        let metrics = RunMetrics {
            generations: remaining,
            total_us: start.elapsed().as_micros() as u64,
            workers_used: self.partition.active_workers(),
            final_population: population(self.current()),
            memory_bytes: self.arena.memory_bytes(),
        };
        info!(
            generations = metrics.generations,
            elapsed_us = metrics.total_us,
            population = metrics.final_population,
            "run complete"
        );
        Ok(metrics)
    }

    /// Generations computed since construction or the last reset.
    pub fn generation(&self) -> u64 {
        self.arena.generation()
    }

    /// Row-major state after the last computed generation.
    pub fn current(&self) -> &[u8] {
        self.arena.published()
    }

    /// Copy of the current state as a [`Grid`].
    pub fn snapshot(&self) -> Result<Grid, StepError> {
        to_grid(self.arena.side(), self.current().to_vec(), self.generation())
    }

    /// Consume the stepper, returning the current state without copying.
    pub fn into_grid(self) -> Result<Grid, StepError> {
        let side = self.arena.side();
        let generation = self.generation();
        to_grid(side, self.arena.into_published(), generation)
    }

    /// Load a new initial grid of the configured side and rewind to
    /// generation 0.
    pub fn reset(&mut self, grid: &Grid) -> Result<(), StepError> {
        self.config.validate_grid(grid)?;
        self.arena.reset(grid)?;
        self.last_metrics = StepMetrics::default();
        Ok(())
    }

    /// The row partition used for every generation.
    pub fn partition(&self) -> &RowPartition {
        &self.partition
    }

    /// The configuration this stepper was built with.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Metrics from the most recent successful generation.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

impl std::fmt::Debug for Stepper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stepper")
            .field("generation", &self.generation())
            .field("size", &self.config.size)
            .field("workers", &self.partition.active_workers())
            .finish()
    }
}

// ── Batch entry points ──────────────────────────────────────────

/// Run `config.generations` generations from `initial` and return the
/// final grid.
///
/// With zero generations the result equals `initial`. The result does not
/// depend on `config.workers`.
pub fn run(initial: &Grid, config: &RunConfig) -> Result<Grid, StepError> {
    run_with_metrics(initial, config).map(|(grid, _)| grid)
}

/// Like [`run`], also returning aggregate metrics.
pub fn run_with_metrics(initial: &Grid, config: &RunConfig) -> Result<(Grid, RunMetrics), StepError> {
    let mut stepper = Stepper::new(initial, config.clone())?;
    let metrics = stepper.run_to_end()?;
    Ok((stepper.into_grid()?, metrics))
}

// ── Band dispatch ───────────────────────────────────────────────

/// Sweep every band of one generation and join. Returns the population of
/// the destination.
fn sweep(
    source: &[u8],
    side: usize,
    bands: &[Range<usize>],
    dests: SmallVec<[&mut [u8]; 8]>,
    generation: u64,
    verify: bool,
) -> Result<usize, StepError> {
    let mut jobs: SmallVec<[(Range<usize>, &mut [u8]); 8]> =
        bands.iter().cloned().zip(dests).collect();

    if jobs.len() == 1 {
        let (rows, out) = jobs.remove(0);
        return sweep_band(source, side, 0, rows, out, generation, verify);
    }

    thread::scope(|scope| {
        let mut handles = SmallVec::<[_; 8]>::with_capacity(jobs.len());
        let mut first_err = None;

        for (worker, (rows, out)) in jobs.into_iter().enumerate() {
            let spawned = thread::Builder::new()
                .name(format!("cellstep-worker-{worker}"))
                .spawn_scoped(scope, move || {
                    sweep_band(source, side, worker, rows, out, generation, verify)
                });
            match spawned {
                Ok(handle) => handles.push((worker, handle)),
                Err(e) => {
                    first_err = Some(StepError::ThreadSpawnFailed {
                        reason: format!("worker {worker}: {e}"),
                    });
                    break;
                }
            }
        }

        // Join everything that was spawned, even after a failure.
        let mut population = 0;
        for (worker, handle) in handles {
            match handle.join() {
                Ok(Ok(n)) => population += n,
                Ok(Err(e)) => {
                    first_err.get_or_insert(e);
                }
                Err(_) => {
                    first_err.get_or_insert(StepError::WorkerPanicked { worker, generation });
                }
            }
        }

        match first_err {
            Some(e) => Err(e),
            None => Ok(population),
        }
    })
}

/// Compute rows `rows` of the next generation into `out`. Returns the
/// population of the band.
fn sweep_band(
    source: &[u8],
    side: usize,
    worker: usize,
    rows: Range<usize>,
    out: &mut [u8],
    generation: u64,
    verify: bool,
) -> Result<usize, StepError> {
    trace!(worker, start = rows.start, end = rows.end, "sweeping band");
    debug_assert_eq!(out.len(), rows.len() * side);

    for (row, out_row) in rows.clone().zip(out.chunks_exact_mut(side)) {
        step_row(source, side, row, out_row);
    }
    if verify {
        check_band(out, side, rows.start, generation)?;
    }
    Ok(population(out))
}

/// Reject any value outside {0, 1} in a freshly written band.
fn check_band(band: &[u8], side: usize, first_row: usize, generation: u64) -> Result<(), StepError> {
    match band.iter().position(|&v| v > 1) {
        Some(i) => Err(StepError::InvariantViolation {
            generation,
            row: first_row + i / side,
            col: i % side,
            value: band[i],
        }),
        None => Ok(()),
    }
}

fn population(cells: &[u8]) -> usize {
    cells.iter().map(|&v| v as usize).sum()
}

/// Assemble a grid from an engine buffer. A non-binary value can only come
/// from a broken transition, so it is reported as an invariant violation.
fn to_grid(side: usize, values: Vec<u8>, generation: u64) -> Result<Grid, StepError> {
    Grid::from_values(side, values).map_err(|e| match e {
        GridError::InvalidCell { row, col, value } => StepError::InvariantViolation {
            generation,
            row,
            col,
            value: u8::try_from(value).unwrap_or(u8::MAX),
        },
        other => StepError::Grid(other),
    })
}
