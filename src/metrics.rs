//! # Metrics Reporter
//!
//! Derives the per-run counters every operation template reports. The
//! derivation is identical across all nine operations: items processed is
//! the product of measured iterations and the operation count, bytes
//! processed scales that by the fixed element size, and the operation count
//! itself is attached as the `"size"` counter for downstream grouping.

use crate::state::MeasureState;

/// Counter name carrying the workload's operation count.
pub const SIZE_COUNTER: &str = "size";

/// Attach derived counters to a finished run.
///
/// `range(0)` holds the number of elements each iteration touched. Called
/// at the end of every template body; templates may be invoked once per
/// measurement batch, so the totals are recomputed from the cumulative
/// iteration count and the last call wins. A run that aborted on a
/// precondition violation gets no counters at all.
pub fn report_counters(state: &mut MeasureState, bytes_per_item: usize) {
    if state.skipped() {
        return;
    }

    let op_count = state.range(0).max(0) as u64;
    let items = state.iterations() * op_count;
    state.set_items_processed(items);
    state.set_bytes_processed(items * bytes_per_item as u64);
    state.set_counter(SIZE_COUNTER, op_count as f64);
}
