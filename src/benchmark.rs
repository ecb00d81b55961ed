//! # Benchmark Engine
//!
//! Drives each registered instance through its measured lifecycle: an
//! optional warmup batch, then measurement batches that grow until the
//! accumulated measured time reaches the configured budget. The engine owns
//! no knowledge of containers or operations; it hands a [`MeasureState`] to
//! the instance's monomorphized body and seals the outcome into a
//! [`RunRecord`].
//!
//! Batches grow on a predictive schedule: after each batch the engine
//! estimates how many iterations would fill the remaining budget and jumps
//! toward that estimate, bounded to one order of magnitude per step so a
//! mispredicted first batch cannot overshoot wildly. Per-iteration times
//! for each batch are recorded into an HDR histogram, which the run record
//! exposes as min/mean/std-dev.
//!
//! Instances execute strictly one after another; nothing is shared between
//! them, so a skipped or failed run never affects its successors.

use crate::cli::Args;
use crate::registry::BenchmarkInstance;
use crate::results::RunRecord;
use crate::state::MeasureState;
use anyhow::{Context, Result};
use hdrhistogram::Histogram;
use std::time::Duration;
use tracing::debug;

/// Parameters controlling how long each instance is measured.
#[derive(Clone, Debug)]
pub struct BenchmarkConfig {
    /// Minimum accumulated measured time before a run is considered stable.
    pub min_time: Duration,

    /// Iterations of the throwaway warmup batch run before measurement.
    pub warmup_iterations: u64,

    /// Hard cap on measured iterations per run, guarding against bodies so
    /// cheap the time budget would demand absurd batch sizes.
    pub max_iterations: u64,
}

impl BenchmarkConfig {
    /// Build the engine configuration from parsed CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self> {
        if args.min_time.is_zero() {
            anyhow::bail!("measurement time budget cannot be zero");
        }
        Ok(Self {
            min_time: args.min_time,
            warmup_iterations: args.warmup_iterations,
            max_iterations: crate::defaults::MAX_ITERATIONS,
        })
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            min_time: crate::defaults::MIN_TIME,
            warmup_iterations: crate::defaults::WARMUP_ITERATIONS,
            max_iterations: crate::defaults::MAX_ITERATIONS,
        }
    }
}

/// Executes benchmark instances and produces run records.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    /// Run one instance to completion.
    ///
    /// Returns `Err` only for engine-level failures (an instance that
    /// cannot be dispatched, histogram bookkeeping); a workload
    /// configuration error is not a failure here; it comes back as a
    /// record carrying the error and no counters.
    pub fn run(&self, instance: &BenchmarkInstance) -> Result<RunRecord> {
        let body = instance
            .body()
            .with_context(|| format!("cannot dispatch benchmark '{}'", instance.name))?;

        debug!("running {}", instance.name);

        if self.config.warmup_iterations > 0 {
            let mut warmup = MeasureState::new(instance.workload);
            warmup.begin_batch(self.config.warmup_iterations);
            body(&mut warmup);
        }

        let mut state = MeasureState::new(instance.workload);
        let mut samples = Histogram::<u64>::new(3).context("iteration-time histogram")?;
        let mut batch: u64 = 1;

        loop {
            let measured_before = state.measured_time();
            state.begin_batch(batch);
            body(&mut state);

            if state.skipped() {
                debug!("{} skipped: {:?}", instance.name, state.error());
                break;
            }

            let batch_time = state.measured_time() - measured_before;
            let ns_per_iter = (batch_time.as_nanos() as u64 / batch.max(1)).max(1);
            samples
                .record(ns_per_iter)
                .context("recording iteration time sample")?;

            if state.measured_time() >= self.config.min_time
                || state.iterations() >= self.config.max_iterations
            {
                break;
            }

            batch = next_batch_size(batch, batch_time, self.config.min_time);
        }

        Ok(RunRecord::seal(instance, &state, &samples))
    }
}

/// Predict the next batch size from the last batch's cost.
///
/// Aims 40% past the iteration count that would fill the whole budget, so
/// the run finishes in few batches, but grows at most 10x per step and
/// always makes progress.
fn next_batch_size(previous: u64, elapsed: Duration, min_time: Duration) -> u64 {
    let per_iter = elapsed.as_secs_f64() / previous.max(1) as f64;
    let predicted = if per_iter > 0.0 {
        (min_time.as_secs_f64() / per_iter * 1.4) as u64
    } else {
        previous.saturating_mul(10)
    };
    predicted.clamp(previous + 1, previous.saturating_mul(10))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementProfile;
    use crate::registry::{build_registry, Operation};
    use crate::sequence::ContainerKind;

    fn quick_config() -> BenchmarkConfig {
        BenchmarkConfig {
            min_time: Duration::from_millis(2),
            warmup_iterations: 1,
            max_iterations: 1 << 20,
        }
    }

    fn single_instance(operation: Operation, workload: (i64, i64)) -> BenchmarkInstance {
        build_registry(
            &[operation],
            &[ContainerKind::Segmented],
            &[ElementProfile::Small],
            &[workload],
        )
        .remove(0)
    }

    #[test]
    fn test_run_produces_counters() {
        let runner = BenchmarkRunner::new(quick_config());
        let record = runner
            .run(&single_instance(Operation::InsertBack, (64, 10240)))
            .unwrap();

        assert!(record.error.is_none());
        assert!(record.iterations > 0);
        assert_eq!(record.items_processed, Some(record.iterations * 64));
        assert_eq!(
            record.bytes_processed,
            Some(record.iterations * 64 * 8)
        );
        assert!(record.elapsed >= Duration::from_millis(2));
    }

    #[test]
    fn test_skipped_run_carries_error_only() {
        let runner = BenchmarkRunner::new(quick_config());
        let record = runner
            .run(&single_instance(Operation::RemoveMiddle, (128, 64)))
            .unwrap();

        assert!(record.error.is_some());
        assert_eq!(record.iterations, 0);
        assert_eq!(record.items_processed, None);
        assert!(record.counters.is_empty());
    }

    #[test]
    fn test_next_batch_size_grows_bounded() {
        let min_time = Duration::from_secs(1);
        // Cheap batch: prediction far exceeds 10x, so growth is clamped.
        assert_eq!(
            next_batch_size(10, Duration::from_micros(1), min_time),
            100
        );
        // Batch already near budget: still makes progress.
        assert_eq!(
            next_batch_size(10, Duration::from_secs(1), min_time),
            14
        );
        assert!(next_batch_size(1, Duration::ZERO, min_time) > 1);
    }
}
