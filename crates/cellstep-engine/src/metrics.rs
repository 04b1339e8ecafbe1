//! Per-generation and per-run metrics.
//!
//! All durations are in microseconds.

/// Timing and population data for a single generation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Zero-based index of the generation that was computed.
    pub generation: u64,
    /// Wall-clock time for the generation, including the join barrier.
    pub total_us: u64,
    /// Workers that received at least one row.
    pub workers_used: usize,
    /// Alive cells after the generation.
    pub population: usize,
}

/// Aggregate data for a whole run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Generations computed.
    pub generations: u64,
    /// Wall-clock time for all generations.
    pub total_us: u64,
    /// Workers that received at least one row.
    pub workers_used: usize,
    /// Alive cells in the final grid.
    pub final_population: usize,
    /// Bytes held by the double buffer.
    pub memory_bytes: usize,
}
