//! # Container Benchmark Suite - Main Entry Point
//!
//! Orchestrates the benchmark matrix: parse the selection, expand the
//! cross product against the shared range table, execute every instance
//! strictly sequentially, and render records through the selected
//! presenter. A run that aborts on an invalid workload is reported and the
//! suite continues; only engine-level failures terminate the process.

use anyhow::Result;
use clap::Parser;
use container_benchmark::{
    benchmark::{BenchmarkConfig, BenchmarkRunner},
    cli::Args,
    element::ElementProfile,
    registry::{self, Operation},
    results::{ReportMode, Reporter},
    sequence::ContainerKind,
};
use tracing::{debug, info};

fn main() -> Result<()> {
    let args = Args::parse();

    // Log level can be raised via RUST_LOG; -v forces debug diagnostics.
    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting container benchmark suite");
    debug!("Configuration: {:?}", args);

    let config = BenchmarkConfig::from_args(&args)?;

    let operations = Operation::expand_all(args.operations.clone());
    let containers = ContainerKind::expand_all(args.containers.clone());
    let profiles = ElementProfile::expand_all(args.profiles.clone());
    let workloads = registry::workload_matrix();

    let mut instances = registry::build_registry(&operations, &containers, &profiles, &workloads);
    if let Some(filter) = &args.filter {
        instances.retain(|instance| instance.name.contains(filter.as_str()));
    }

    if instances.is_empty() {
        anyhow::bail!("selection matches no benchmarks");
    }

    if args.list {
        for instance in &instances {
            println!("{}", instance.name);
        }
        return Ok(());
    }

    let reporter = Reporter::new(if args.compact {
        ReportMode::Compact
    } else {
        ReportMode::Console
    });
    reporter.print_context(instances.len(), config.min_time);

    let runner = BenchmarkRunner::new(config);
    let mut records = Vec::with_capacity(instances.len());

    for instance in &instances {
        let record = runner.run(instance)?;
        reporter.print_record(&record);
        records.push(record);
    }

    reporter.print_summary(&records);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    }

    info!("Container benchmark suite completed");
    Ok(())
}
