//! # Measurement State
//!
//! Per-run state handed to every operation template. It owns the three
//! things a template needs from the measurement engine:
//!
//! - the repeatable-iteration construct ([`MeasureState::keep_running`]),
//!   driven in batches by the runner until the measured time budget is met;
//! - the timing-exclusion discipline: a segment clock that only accumulates
//!   while the operation under test executes, paused for setup through the
//!   scoped [`TimingPause`] guard;
//! - the reporting surface: workload ranges, derived counters, and the
//!   structured per-run abort ([`MeasureState::skip_with_error`]).
//!
//! The clock starts on entry to a batch and stops on exit, so work done
//! before the iteration loop (container population for access benchmarks)
//! is never measured and needs no explicit bracketing.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Segment clock accumulating only the intervals that count.
#[derive(Debug)]
struct SegmentTimer {
    running: bool,
    segment_start: Option<Instant>,
    accumulated: Duration,
}

impl SegmentTimer {
    fn new() -> Self {
        Self {
            running: false,
            segment_start: None,
            accumulated: Duration::ZERO,
        }
    }

    fn resume(&mut self) {
        assert!(!self.running, "timing resumed while already running");
        self.running = true;
        self.segment_start = Some(Instant::now());
    }

    fn pause(&mut self) {
        assert!(self.running, "timing paused while not running");
        if let Some(start) = self.segment_start.take() {
            self.accumulated += start.elapsed();
        }
        self.running = false;
    }
}

/// Mutable measurement state for one benchmark run.
///
/// The runner drives the body function repeatedly with growing batch sizes;
/// within one body invocation the template loops with `keep_running` and
/// brackets its setup with [`MeasureState::paused`].
pub struct MeasureState {
    ranges: [i64; 2],
    batch_size: u64,
    remaining: u64,
    in_batch: bool,
    completed: u64,
    timer: SegmentTimer,
    items_processed: Option<u64>,
    bytes_processed: Option<u64>,
    counters: BTreeMap<String, f64>,
    error: Option<String>,
}

impl MeasureState {
    /// Create state for one run over a `(op_count, initial_size)` workload.
    pub fn new(workload: (i64, i64)) -> Self {
        Self {
            ranges: [workload.0, workload.1],
            batch_size: 0,
            remaining: 0,
            in_batch: false,
            completed: 0,
            timer: SegmentTimer::new(),
            items_processed: None,
            bytes_processed: None,
            counters: BTreeMap::new(),
            error: None,
        }
    }

    /// Workload range parameter: 0 is the operation count, 1 the initial
    /// container population.
    pub fn range(&self, index: usize) -> i64 {
        self.ranges[index]
    }

    /// Arm the next measurement batch. Called by the runner before each
    /// body invocation.
    pub fn begin_batch(&mut self, iterations: u64) {
        debug_assert!(!self.in_batch, "batch armed while one is in flight");
        self.batch_size = iterations;
        self.remaining = iterations;
    }

    /// Iteration driver. Starts the clock on batch entry, stops it once the
    /// batch is exhausted, and refuses to run at all after a skip.
    ///
    /// Intended usage inside a template:
    ///
    /// ```text
    /// while state.keep_running() {
    ///     /* one measured iteration */
    /// }
    /// ```
    pub fn keep_running(&mut self) -> bool {
        if self.error.is_some() {
            if self.timer.running {
                self.timer.pause();
            }
            self.in_batch = false;
            return false;
        }

        if !self.in_batch {
            self.in_batch = true;
            self.timer.resume();
        }

        if self.remaining == 0 {
            self.timer.pause();
            self.in_batch = false;
            return false;
        }

        self.remaining -= 1;
        self.completed += 1;
        true
    }

    /// Stop the clock for a setup section. The returned guard restarts it
    /// when dropped, on every exit path out of the scope.
    pub fn paused(&mut self) -> TimingPause<'_> {
        self.timer.pause();
        TimingPause { state: self }
    }

    /// Stop the clock. Must be balanced by [`MeasureState::resume_timing`];
    /// prefer the scoped [`MeasureState::paused`].
    pub fn pause_timing(&mut self) {
        self.timer.pause();
    }

    /// Restart the clock after [`MeasureState::pause_timing`].
    pub fn resume_timing(&mut self) {
        self.timer.resume();
    }

    /// Abort the run with a configuration error. The iteration loop stops
    /// immediately and the run carries no throughput counters. The first
    /// recorded error wins.
    pub fn skip_with_error(&mut self, message: impl Into<String>) {
        if self.error.is_none() {
            self.error = Some(message.into());
        }
    }

    pub fn skipped(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Total measured iterations completed so far, across all batches.
    pub fn iterations(&self) -> u64 {
        self.completed
    }

    /// Total time accumulated inside measured segments.
    pub fn measured_time(&self) -> Duration {
        self.timer.accumulated
    }

    pub fn set_items_processed(&mut self, items: u64) {
        self.items_processed = Some(items);
    }

    pub fn set_bytes_processed(&mut self, bytes: u64) {
        self.bytes_processed = Some(bytes);
    }

    pub fn items_processed(&self) -> Option<u64> {
        self.items_processed
    }

    pub fn bytes_processed(&self) -> Option<u64> {
        self.bytes_processed
    }

    /// Attach a named counter to the run record.
    pub fn set_counter(&mut self, name: &str, value: f64) {
        self.counters.insert(name.to_string(), value);
    }

    pub fn counters(&self) -> &BTreeMap<String, f64> {
        &self.counters
    }
}

/// Scoped timing exclusion for setup work.
///
/// Acquisition pauses the clock; `Drop` resumes it, so the exclusion cannot
/// leak past the setup scope however the scope is exited.
pub struct TimingPause<'a> {
    state: &'a mut MeasureState,
}

impl Drop for TimingPause<'_> {
    fn drop(&mut self) {
        self.state.timer.resume();
    }
}
