//! cellstep command-line driver.
//!
//! Loads an `N x N` grid of 0/1 values, advances it a fixed number of
//! generations across a fixed number of worker threads, and writes the
//! result next to the input.
//!
//! # Example
//!
//! ```bash
//! # 100 generations of a 512x512 grid on 8 threads, writing board.txt.out
//! cellstep 100 512 8 board.txt
//!
//! # Explicit output path, with per-generation logging
//! RUST_LOG=cellstep=debug cellstep 100 512 8 board.txt --output final.txt
//! ```

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use cellstep_engine::{run_with_metrics, ConfigError, RunConfig, StepError};
use cellstep_io::{read_grid, write_grid, IoError};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parallel Game of Life stepper
///
/// Computes GENERATIONS generations of the B3/S23 rule on a SIZE x SIZE
/// grid with a dead border, splitting rows across THREADS workers.
#[derive(Parser, Debug)]
#[command(name = "cellstep")]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of generations to compute
    #[arg(allow_negative_numbers = true)]
    generations: i64,

    /// Grid side length
    #[arg(allow_negative_numbers = true)]
    size: i64,

    /// Number of worker threads
    #[arg(allow_negative_numbers = true)]
    threads: i64,

    /// Input grid file: SIZE*SIZE whitespace-separated 0/1 values
    input: PathBuf,

    /// Output file. Defaults to INPUT with `.out` appended.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }
}

fn default_output_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".out");
    PathBuf::from(name)
}

// ── Errors ──────────────────────────────────────────────────────

#[derive(Debug)]
enum CliError {
    Config(ConfigError),
    Open { path: PathBuf, source: io::Error },
    Create { path: PathBuf, source: io::Error },
    Load { path: PathBuf, source: IoError },
    Store { path: PathBuf, source: IoError },
    Step(StepError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(_) => write!(f, "invalid arguments"),
            Self::Open { path, .. } => write!(f, "cannot open {}", path.display()),
            Self::Create { path, .. } => write!(f, "cannot create {}", path.display()),
            Self::Load { path, .. } => write!(f, "cannot load grid from {}", path.display()),
            Self::Store { path, .. } => write!(f, "cannot write grid to {}", path.display()),
            Self::Step(_) => write!(f, "simulation failed"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Open { source, .. } | Self::Create { source, .. } => Some(source),
            Self::Load { source, .. } | Self::Store { source, .. } => Some(source),
            Self::Step(e) => Some(e),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<StepError> for CliError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}

// ── Driver ──────────────────────────────────────────────────────

fn execute(args: &Args) -> Result<PathBuf, CliError> {
    let config = RunConfig::from_signed(args.generations, args.size, args.threads)?;
    let output = args.output_path();

    let file = File::open(&args.input).map_err(|source| CliError::Open {
        path: args.input.clone(),
        source,
    })?;
    let grid = read_grid(BufReader::new(file), config.size).map_err(|source| CliError::Load {
        path: args.input.clone(),
        source,
    })?;

    info!(
        input = %args.input.display(),
        output = %output.display(),
        generations = config.generations,
        size = config.size,
        threads = config.workers,
        population = grid.population(),
        "loaded grid"
    );

    let start = Instant::now();
    let (result, metrics) = run_with_metrics(&grid, &config)?;
    let elapsed = start.elapsed();

    let file = File::create(&output).map_err(|source| CliError::Create {
        path: output.clone(),
        source,
    })?;
    write_grid(BufWriter::new(file), &result).map_err(|source| CliError::Store {
        path: output.clone(),
        source,
    })?;

    info!(
        elapsed_ms = elapsed.as_millis() as u64,
        workers_used = metrics.workers_used,
        population = metrics.final_population,
        output = %output.display(),
        "finished"
    );
    Ok(output)
}

fn report(err: &CliError) {
    eprintln!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,cellstep=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match execute(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}
