//! # Container Benchmark Suite Library
//!
//! A micro-benchmark suite quantifying the cost of sequence container
//! operations (insertion, removal, and traversal) across container layout
//! strategies and element sizes, as a function of operation count and
//! pre-existing container size. The output is throughput and byte-rate
//! figures suitable for comparing the cost models behind data-structure
//! choice.
//!
//! ## Benchmark Matrix
//!
//! Nine generic operation templates (front/back/middle insertion, front/
//! back/middle removal, forward/backward/random access) are instantiated
//! for every combination of:
//!
//! - **Container kind**: contiguous array (`Vec`), doubly-linked list
//!   (`LinkedList`), segmented deque (`VecDeque`)
//! - **Element profile**: one machine word, or a 4 KiB aggregate
//! - **Workload**: a fixed range table of (operation count, initial
//!   population) pairs
//!
//! ## Architecture Overview
//!
//! - `ops`: the generic operation templates and their setup/measurement
//!   boundaries
//! - `state`: per-run measurement state with the scoped timing-exclusion
//!   guard
//! - `metrics`: derivation of items/bytes counters from iteration counts
//! - `registry`: the declarative cross product and body dispatch
//! - `benchmark`: the batch-growing measurement engine
//! - `results`: run records, console and compact presenters
//! - `sequence` / `element`: the container capability trait and payloads
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use container_benchmark::{
//!     benchmark::{BenchmarkConfig, BenchmarkRunner},
//!     registry,
//! };
//!
//! fn main() -> anyhow::Result<()> {
//!     let runner = BenchmarkRunner::new(BenchmarkConfig::default());
//!     for instance in registry::build_registry(
//!         &registry::Operation::expand_all(vec![registry::Operation::All]),
//!         &container_benchmark::sequence::ContainerKind::expand_all(vec![
//!             container_benchmark::sequence::ContainerKind::All,
//!         ]),
//!         &container_benchmark::element::ElementProfile::expand_all(vec![
//!             container_benchmark::element::ElementProfile::All,
//!         ]),
//!         &registry::workload_matrix(),
//!     ) {
//!         let record = runner.run(&instance)?;
//!         println!("{}: {:?} items/s", record.name, record.items_per_sec);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Measurement Discipline
//!
//! Every template excludes its setup (pre-population, cursor positioning)
//! from the measured interval through a scoped pause guard that resumes
//! timing on every exit path. Access benchmarks build their container once
//! before the iteration loop; mutating benchmarks build and drop one per
//! measured iteration, with destruction included in the measured cost.

pub mod benchmark;
pub mod cli;
pub mod element;
pub mod metrics;
pub mod ops;
pub mod registry;
pub mod results;
pub mod sequence;
pub mod state;
pub mod utils;

// Re-export key types for convenient library usage

/// Main benchmark execution engine
pub use benchmark::{BenchmarkConfig, BenchmarkRunner};

/// Command-line interface types
pub use cli::Args;

/// Payload profiles bound to each benchmark instance
pub use element::{ElementProfile, LargeElement, Payload, SmallElement};

/// Per-run measurement state and the scoped timing-exclusion guard
pub use state::{MeasureState, TimingPause};

/// Declarative benchmark matrix
pub use registry::{BenchmarkInstance, Operation};

/// Run records and presenters
pub use results::{ReportMode, Reporter, RunRecord};

/// Container capability abstraction
pub use sequence::{ContainerKind, Sequence};

/// The current version of the benchmark suite
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    /// Minimum measured time per run.
    ///
    /// Half a second accumulates enough batches for the per-iteration
    /// means to settle while keeping a full 324-run matrix near three
    /// minutes of measured time.
    pub const MIN_TIME: Duration = Duration::from_millis(500);

    /// Iterations of the throwaway warmup batch.
    ///
    /// A handful is enough to fault in the allocator paths and caches the
    /// first measured batch would otherwise pay for; the largest workloads
    /// make each warmup iteration itself expensive, so this stays small.
    pub const WARMUP_ITERATIONS: u64 = 3;

    /// Safety cap on measured iterations per run, for bodies cheap enough
    /// that the time budget would otherwise demand unbounded batches.
    pub const MAX_ITERATIONS: u64 = 1_000_000_000;
}
