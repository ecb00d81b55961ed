//! End-to-end suite runs through the public library API with a small time
//! budget, checking the counter arithmetic and the per-run error handling
//! the presenters rely on.

use container_benchmark::{
    benchmark::{BenchmarkConfig, BenchmarkRunner},
    element::ElementProfile,
    registry::{build_registry, workload_matrix, Operation},
    results::render_compact,
    sequence::ContainerKind,
};
use std::time::Duration;

fn quick_runner() -> BenchmarkRunner {
    BenchmarkRunner::new(BenchmarkConfig {
        min_time: Duration::from_millis(2),
        warmup_iterations: 1,
        max_iterations: 1 << 20,
    })
}

#[test]
fn counters_follow_iterations_for_every_operation() {
    let operations = Operation::expand_all(vec![Operation::All]);
    let kinds = ContainerKind::expand_all(vec![ContainerKind::All]);
    let runner = quick_runner();

    // Small workload keeps all nine operations valid: count <= population.
    let instances = build_registry(
        &operations,
        &kinds,
        &[ElementProfile::Small],
        &[(64, 256)],
    );
    assert_eq!(instances.len(), 9 * 3);

    for instance in &instances {
        let record = runner.run(instance).unwrap();
        assert!(record.succeeded(), "{} skipped", record.name);
        assert!(record.iterations > 0, "{} never iterated", record.name);
        assert_eq!(
            record.items_processed,
            Some(record.iterations * 64),
            "{} items mismatch",
            record.name
        );
        assert_eq!(
            record.bytes_processed,
            Some(record.iterations * 64 * 8),
            "{} bytes mismatch",
            record.name
        );
        assert_eq!(record.counters["size"], 64.0);
        assert!(record.items_per_sec.unwrap() > 0.0);
        assert!(record.bytes_per_sec.unwrap() > 0.0);
    }
}

#[test]
fn large_profile_scales_byte_counters() {
    let runner = quick_runner();
    let instance = build_registry(
        &[Operation::AccessForward],
        &[ContainerKind::Contiguous],
        &[ElementProfile::Large],
        &[(8, 256)],
    )
    .remove(0);

    let record = runner.run(&instance).unwrap();
    let items = record.items_processed.unwrap();
    assert_eq!(record.bytes_processed, Some(items * 4096));
}

#[test]
fn invalid_workload_skips_run_but_not_suite() {
    let runner = quick_runner();
    let instances = build_registry(
        &[Operation::RemoveMiddle],
        &[ContainerKind::Segmented],
        &[ElementProfile::Small],
        &[(512, 64), (64, 512)],
    );

    let bad = runner.run(&instances[0]).unwrap();
    assert!(!bad.succeeded());
    assert_eq!(
        bad.error.as_deref(),
        Some("operation count 512 exceeds initial population 64")
    );
    assert_eq!(bad.iterations, 0);
    assert_eq!(bad.items_processed, None);
    assert!(bad.counters.is_empty());

    // The next instance still runs normally.
    let good = runner.run(&instances[1]).unwrap();
    assert!(good.succeeded());
    assert_eq!(good.items_processed, Some(good.iterations * 64));
}

#[test]
fn insert_middle_unit_workload_reports_unit_counters() {
    // One insertion into a 10 KiB-element container, the first row of the
    // default range table.
    let workload = workload_matrix()[0];
    assert_eq!(workload, (1, 10240));

    let runner = quick_runner();
    let instance = build_registry(
        &[Operation::InsertMiddle],
        &[ContainerKind::Segmented],
        &[ElementProfile::Small],
        &[workload],
    )
    .remove(0);

    let record = runner.run(&instance).unwrap();
    assert!(record.succeeded());
    // One item per measured iteration.
    assert_eq!(record.items_processed, Some(record.iterations));
    assert_eq!(record.counters["size"], 1.0);
}

#[test]
fn records_render_and_serialize() {
    let runner = quick_runner();
    let instances = build_registry(
        &[Operation::InsertBack, Operation::RemoveMiddle],
        &[ContainerKind::Contiguous],
        &[ElementProfile::Small],
        &[(64, 16)],
    );

    let mut records = Vec::new();
    for instance in &instances {
        records.push(runner.run(instance).unwrap());
    }

    // insert_back ignores the population bound; remove_middle rejects it.
    assert!(records[0].succeeded());
    assert!(!records[1].succeeded());

    let compact: Vec<String> = records.iter().map(render_compact).collect();
    assert!(compact[0].contains("i/s"));
    assert!(compact[1].contains("exceeds initial population"));

    let json = serde_json::to_string_pretty(&records).unwrap();
    assert!(json.contains("insert_back/vec/small/64/16"));
    assert!(json.contains("remove_middle/vec/small/64/16"));
}
