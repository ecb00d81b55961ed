//! # Benchmark Registry
//!
//! Declarative composition of the benchmark matrix: every operation
//! template is instantiated once per (container kind × element profile)
//! pair, and every instance runs against the shared workload range table.
//! Nothing here has behavior of its own; the registry exists to guarantee
//! uniform coverage of the cross product.

use crate::element::{ElementProfile, LargeElement, Payload, SmallElement};
use crate::ops;
use crate::sequence::{ContainerKind, Sequence};
use crate::state::MeasureState;
use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::{LinkedList, VecDeque};

/// Monomorphized benchmark body.
pub type BenchBody = fn(&mut MeasureState);

/// Default workload bounds: the first pair sweeps the number of elements an
/// operation touches, the second the initial population of the container.
pub const DEFAULT_RANGES: [(i64, i64); 2] = [(1, 10 << 10), (10 << 10, 10 << 10)];

/// Multiplier stepping each range sweep between its bounds.
const RANGE_MULTIPLIER: i64 = 8;

/// The nine benchmark operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Operation {
    #[clap(name = "insert-front")]
    InsertFront,

    #[clap(name = "insert-back")]
    InsertBack,

    #[clap(name = "insert-middle")]
    InsertMiddle,

    #[clap(name = "remove-front")]
    RemoveFront,

    #[clap(name = "remove-back")]
    RemoveBack,

    #[clap(name = "remove-middle")]
    RemoveMiddle,

    #[clap(name = "access-forward")]
    AccessForward,

    #[clap(name = "access-backward")]
    AccessBackward,

    #[clap(name = "access-random")]
    AccessRandom,

    /// All operations
    #[clap(name = "all")]
    All,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Operation {
    /// Identifier used in benchmark names.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::InsertFront => "insert_front",
            Operation::InsertBack => "insert_back",
            Operation::InsertMiddle => "insert_middle",
            Operation::RemoveFront => "remove_front",
            Operation::RemoveBack => "remove_back",
            Operation::RemoveMiddle => "remove_middle",
            Operation::AccessForward => "access_forward",
            Operation::AccessBackward => "access_backward",
            Operation::AccessRandom => "access_random",
            Operation::All => "all",
        }
    }

    /// Expand the "All" variant to the concrete operations.
    pub fn expand_all(operations: Vec<Operation>) -> Vec<Operation> {
        if operations.contains(&Operation::All) {
            vec![
                Operation::InsertFront,
                Operation::InsertBack,
                Operation::InsertMiddle,
                Operation::RemoveFront,
                Operation::RemoveBack,
                Operation::RemoveMiddle,
                Operation::AccessForward,
                Operation::AccessBackward,
                Operation::AccessRandom,
            ]
        } else {
            operations
        }
    }
}

/// One registered benchmark run: an operation bound to a container kind and
/// element profile, with one workload pair from the range table.
#[derive(Clone, Debug, Serialize)]
pub struct BenchmarkInstance {
    pub name: String,
    pub operation: Operation,
    pub kind: ContainerKind,
    pub profile: ElementProfile,
    /// `(op_count, initial_size)`
    pub workload: (i64, i64),
}

impl BenchmarkInstance {
    fn new(
        operation: Operation,
        kind: ContainerKind,
        profile: ElementProfile,
        workload: (i64, i64),
    ) -> Self {
        let name = format!(
            "{}/{}/{}/{}/{}",
            operation.name(),
            kind.name(),
            profile.name(),
            workload.0,
            workload.1
        );
        Self {
            name,
            operation,
            kind,
            profile,
            workload,
        }
    }

    /// Resolve the monomorphized body for this instance. `All` variants
    /// must be expanded before dispatch.
    pub fn body(&self) -> Result<BenchBody> {
        match self.profile {
            ElementProfile::Small => body_for_kind::<SmallElement>(self.operation, self.kind),
            ElementProfile::Large => body_for_kind::<LargeElement>(self.operation, self.kind),
            ElementProfile::All => Err(anyhow::anyhow!(
                "'all' element profile should be expanded before dispatch"
            )),
        }
    }
}

fn body_for_kind<T: Payload>(operation: Operation, kind: ContainerKind) -> Result<BenchBody> {
    match kind {
        ContainerKind::Contiguous => body_for_op::<T, Vec<T>>(operation),
        ContainerKind::Linked => body_for_op::<T, LinkedList<T>>(operation),
        ContainerKind::Segmented => body_for_op::<T, VecDeque<T>>(operation),
        ContainerKind::All => Err(anyhow::anyhow!(
            "'all' container kind should be expanded before dispatch"
        )),
    }
}

fn body_for_op<T: Payload, S: Sequence<T>>(operation: Operation) -> Result<BenchBody> {
    match operation {
        Operation::InsertFront => Ok(ops::insert_front::<T, S>),
        Operation::InsertBack => Ok(ops::insert_back::<T, S>),
        Operation::InsertMiddle => Ok(ops::insert_middle::<T, S>),
        Operation::RemoveFront => Ok(ops::remove_front::<T, S>),
        Operation::RemoveBack => Ok(ops::remove_back::<T, S>),
        Operation::RemoveMiddle => Ok(ops::remove_middle::<T, S>),
        Operation::AccessForward => Ok(ops::access_forward::<T, S>),
        Operation::AccessBackward => Ok(ops::access_backward::<T, S>),
        Operation::AccessRandom => Ok(ops::access_random::<T, S>),
        Operation::All => Err(anyhow::anyhow!(
            "'all' operation should be expanded before dispatch"
        )),
    }
}

/// Expand one `(lo, hi)` bound pair into its sweep: `lo`, then each power
/// of the range multiplier strictly between the bounds, then `hi`.
fn expand_range(lo: i64, hi: i64) -> Vec<i64> {
    let mut sweep = vec![lo];
    let mut value = lo.max(1);
    loop {
        value = value.saturating_mul(RANGE_MULTIPLIER);
        if value >= hi {
            break;
        }
        sweep.push(value);
    }
    if hi != lo {
        sweep.push(hi);
    }
    sweep
}

/// The fixed workload matrix every benchmark runs against: the cross
/// product of the expanded per-parameter sweeps.
pub fn workload_matrix() -> Vec<(i64, i64)> {
    let op_counts = expand_range(DEFAULT_RANGES[0].0, DEFAULT_RANGES[0].1);
    let initial_sizes = expand_range(DEFAULT_RANGES[1].0, DEFAULT_RANGES[1].1);

    let mut matrix = Vec::with_capacity(op_counts.len() * initial_sizes.len());
    for &op_count in &op_counts {
        for &initial_size in &initial_sizes {
            matrix.push((op_count, initial_size));
        }
    }
    matrix
}

/// Build the full registry: every selected operation instantiated for every
/// selected (kind × profile) pair, once per workload.
pub fn build_registry(
    operations: &[Operation],
    kinds: &[ContainerKind],
    profiles: &[ElementProfile],
    workloads: &[(i64, i64)],
) -> Vec<BenchmarkInstance> {
    let mut instances =
        Vec::with_capacity(operations.len() * kinds.len() * profiles.len() * workloads.len());
    for &operation in operations {
        for &kind in kinds {
            for &profile in profiles {
                for &workload in workloads {
                    instances.push(BenchmarkInstance::new(operation, kind, profile, workload));
                }
            }
        }
    }
    instances
}
