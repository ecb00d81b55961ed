//! # Operation Templates
//!
//! The nine generic benchmark bodies, each parameterized over a payload and
//! any container implementing the [`Sequence`] capability set. A template
//! owns its complete setup/measurement/cleanup boundary:
//!
//! - mutating benchmarks build a fresh container inside every measured
//!   iteration, excluding pre-population and cursor positioning from the
//!   clock via the scoped pause guard; the container's destruction stays
//!   inside the timed interval, as it is part of the operation's cost;
//! - access benchmarks populate one container before the iteration loop
//!   starts (the clock is not yet running there) and reuse it, since
//!   traversal does not mutate structure.
//!
//! Every template finishes by handing the cumulative iteration count to the
//! metrics reporter, which is a no-op for a run that aborted.

use crate::element::Payload;
use crate::metrics::report_counters;
use crate::sequence::Sequence;
use crate::state::MeasureState;
use std::mem::size_of;
use thiserror::Error;

/// The one configuration error a workload pair can carry: an operation that
/// removes within existing bounds asked for more elements than the setup
/// phase provides.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkloadError {
    #[error("operation count {requested} exceeds initial population {available}")]
    CountExceedsPopulation { requested: i64, available: i64 },
}

/// Insert `range(0)` elements at the front of an empty container.
///
/// Construction of the empty container is cheap and stays inside the timed
/// interval, matching the back-insertion template.
pub fn insert_front<T: Payload, S: Sequence<T>>(state: &mut MeasureState) {
    let op_count = state.range(0);
    while state.keep_running() {
        let mut seq = S::default();
        for _ in 0..op_count {
            seq.push_front(T::default());
        }
    }
    report_counters(state, size_of::<T>());
}

/// Insert `range(0)` elements at the back of an empty container.
pub fn insert_back<T: Payload, S: Sequence<T>>(state: &mut MeasureState) {
    let op_count = state.range(0);
    while state.keep_running() {
        let mut seq = S::default();
        for _ in 0..op_count {
            seq.push_back(T::default());
        }
    }
    report_counters(state, size_of::<T>());
}

/// Insert `range(0)` elements at the midpoint of a container pre-populated
/// with `range(1)` elements. Population and midpoint computation happen
/// under the pause guard.
pub fn insert_middle<T: Payload, S: Sequence<T>>(state: &mut MeasureState) {
    let op_count = state.range(0);
    let initial_size = state.range(1);
    let midpoint = (initial_size / 2).max(0) as usize;
    while state.keep_running() {
        let mut seq = {
            let _setup = state.paused();
            let mut seq = S::default();
            for _ in 0..initial_size {
                seq.push_back(T::default());
            }
            seq
        };
        for _ in 0..op_count {
            seq.insert_at(midpoint, T::default());
        }
    }
    report_counters(state, size_of::<T>());
}

/// Remove from the front of a container pre-populated with `range(0)`
/// elements until it is empty.
pub fn remove_front<T: Payload, S: Sequence<T>>(state: &mut MeasureState) {
    let op_count = state.range(0);
    while state.keep_running() {
        let mut seq = {
            let _setup = state.paused();
            let mut seq = S::default();
            for _ in 0..op_count {
                seq.push_back(T::default());
            }
            seq
        };
        while seq.pop_front().is_some() {}
    }
    report_counters(state, size_of::<T>());
}

/// Remove from the back of a container pre-populated with `range(0)`
/// elements until it is empty.
pub fn remove_back<T: Payload, S: Sequence<T>>(state: &mut MeasureState) {
    let op_count = state.range(0);
    while state.keep_running() {
        let mut seq = {
            let _setup = state.paused();
            let mut seq = S::default();
            for _ in 0..op_count {
                seq.push_back(T::default());
            }
            seq
        };
        while seq.pop_back().is_some() {}
    }
    report_counters(state, size_of::<T>());
}

/// Remove `range(0)` elements from a window centered in a container
/// pre-populated with `range(1) + 1` elements.
///
/// The cursor is fixed at `(range(1) - range(0)) / 2`; each removal shifts
/// the successor into the cursor slot, so the fixed index consumes the
/// centered window. A count larger than the population aborts the run with
/// no counters.
pub fn remove_middle<T: Payload, S: Sequence<T>>(state: &mut MeasureState) {
    let op_count = state.range(0);
    let initial_size = state.range(1);
    if op_count > initial_size {
        state.skip_with_error(
            WorkloadError::CountExceedsPopulation {
                requested: op_count,
                available: initial_size,
            }
            .to_string(),
        );
    }
    let cursor = ((initial_size - op_count) / 2).max(0) as usize;
    while state.keep_running() {
        let mut seq = {
            let _setup = state.paused();
            let mut seq = S::default();
            for _ in 0..=initial_size {
                seq.push_back(T::default());
            }
            seq
        };
        for _ in 0..op_count {
            seq.remove_at(cursor);
        }
    }
    report_counters(state, size_of::<T>());
}

/// Walk a container of `range(0)` elements front to back, touching each
/// element once per measured iteration.
pub fn access_forward<T: Payload, S: Sequence<T>>(state: &mut MeasureState) {
    let op_count = state.range(0);
    let mut seq = S::default();
    for _ in 0..op_count {
        seq.push_back(T::default());
    }
    while state.keep_running() {
        seq.for_each(|element| element.touch());
    }
    report_counters(state, size_of::<T>());
}

/// Walk a container of `range(0)` elements back to front, touching each
/// element once per measured iteration.
pub fn access_backward<T: Payload, S: Sequence<T>>(state: &mut MeasureState) {
    let op_count = state.range(0);
    let mut seq = S::default();
    for _ in 0..op_count {
        seq.push_back(T::default());
    }
    while state.keep_running() {
        seq.for_each_rev(|element| element.touch());
    }
    report_counters(state, size_of::<T>());
}

/// Touch positions of a container of `range(0) + 1` elements in the
/// deterministic inward-spiral order given by [`spiral_positions`]. Each
/// touch walks to its position from the container's start, so the linked
/// list pays its node traversal on every access.
pub fn access_random<T: Payload, S: Sequence<T>>(state: &mut MeasureState) {
    let op_count = state.range(0).max(0) as u64;
    let mut seq = S::default();
    for _ in 0..=op_count {
        seq.push_back(T::default());
    }
    while state.keep_running() {
        for position in spiral_positions(op_count) {
            seq.peek(position as usize).touch();
        }
    }
    report_counters(state, size_of::<T>());
}

/// Positions visited by one access-random iteration over `count + 1` slots:
/// for each distance `d` from `count / 2` down to 1, position `d` then
/// position `count - d`.
///
/// The pattern assumes an even count: the endpoint slots are never touched
/// and the center slot is touched twice. An odd count has no exact center,
/// so it makes one touch fewer than the operation count. The asymmetry is
/// preserved as-is rather than corrected.
pub(crate) fn spiral_positions(count: u64) -> impl Iterator<Item = u64> {
    (1..=count / 2)
        .rev()
        .flat_map(move |distance| [distance, count - distance])
}
