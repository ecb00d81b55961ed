//! # Run Records and Report Presenters
//!
//! A [`RunRecord`] is sealed once per benchmark instance after its measured
//! iterations complete, carrying the iteration count, the measured
//! interval, and the derived counters, or the configuration error for a
//! run that aborted, in which case it carries no counters at all.
//!
//! Two presenters render completed records to stdout:
//!
//! - the default console presenter prints a readable block per run with
//!   colored emphasis;
//! - the compact presenter prints one line per run, the name left-justified
//!   in a fixed field and each counter right-justified in a fixed-width
//!   numeric field with a one-character tag (`i` items, `b` bytes, `s`
//!   size) and a `/s` suffix on rates.
//!
//! Neither presenter alters measurement; the suite writes no files.

use crate::element::ElementProfile;
use crate::registry::{BenchmarkInstance, Operation};
use crate::sequence::ContainerKind;
use crate::state::MeasureState;
use crate::utils::{format_byte_rate, format_bytes, format_count, format_duration, format_duration_ns, format_item_rate};
use chrono::{DateTime, Utc};
use colored::Colorize;
use hdrhistogram::Histogram;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Field width for benchmark names in the compact report.
const NAME_FIELD: usize = 44;

/// Field width for counter values in the compact report.
const COUNTER_FIELD: usize = 14;

/// Outcome of one benchmark instance.
#[derive(Clone, Debug, Serialize)]
pub struct RunRecord {
    pub name: String,
    pub operation: Operation,
    pub kind: ContainerKind,
    pub profile: ElementProfile,
    pub op_count: i64,
    pub initial_size: i64,
    pub iterations: u64,
    /// Accumulated measured time, setup excluded.
    pub elapsed: Duration,
    /// Mean measured time per iteration in nanoseconds.
    pub ns_per_iter: f64,
    /// Fastest per-batch mean observed.
    pub ns_per_iter_min: f64,
    /// Spread across per-batch means.
    pub ns_per_iter_stddev: f64,
    pub items_processed: Option<u64>,
    pub bytes_processed: Option<u64>,
    pub items_per_sec: Option<f64>,
    pub bytes_per_sec: Option<f64>,
    pub counters: BTreeMap<String, f64>,
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl RunRecord {
    /// Seal the outcome of a finished run.
    pub fn seal(
        instance: &BenchmarkInstance,
        state: &MeasureState,
        samples: &Histogram<u64>,
    ) -> Self {
        let elapsed = state.measured_time();
        let seconds = elapsed.as_secs_f64();
        let per_second = |total: u64| {
            if seconds > 0.0 {
                Some(total as f64 / seconds)
            } else {
                None
            }
        };

        let ns_per_iter = if state.iterations() > 0 {
            elapsed.as_nanos() as f64 / state.iterations() as f64
        } else {
            0.0
        };

        Self {
            name: instance.name.clone(),
            operation: instance.operation,
            kind: instance.kind,
            profile: instance.profile,
            op_count: instance.workload.0,
            initial_size: instance.workload.1,
            iterations: state.iterations(),
            elapsed,
            ns_per_iter,
            ns_per_iter_min: if samples.is_empty() { 0.0 } else { samples.min() as f64 },
            ns_per_iter_stddev: samples.stdev(),
            items_processed: state.items_processed(),
            bytes_processed: state.bytes_processed(),
            items_per_sec: state.items_processed().and_then(per_second),
            bytes_per_sec: state.bytes_processed().and_then(per_second),
            counters: state.counters().clone(),
            error: state.error().map(str::to_string),
            timestamp: Utc::now(),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Report rendering selected at the process boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportMode {
    Console,
    Compact,
}

/// Stdout presenter for run records.
pub struct Reporter {
    mode: ReportMode,
}

impl Reporter {
    pub fn new(mode: ReportMode) -> Self {
        Self { mode }
    }

    /// Print the suite context once before the first run.
    pub fn print_context(&self, run_count: usize, min_time: Duration) {
        println!(
            "{} v{} | {} runs | {} per run | {} cpus | {}",
            "container-benchmark".bold(),
            crate::VERSION,
            run_count,
            format_duration(min_time),
            num_cpus::get(),
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        );
        println!();
    }

    /// Print one completed record.
    pub fn print_record(&self, record: &RunRecord) {
        match self.mode {
            ReportMode::Console => print!("{}", render_console(record)),
            ReportMode::Compact => println!("{}", render_compact(record)),
        }
    }

    /// Print the suite summary after the last run.
    pub fn print_summary(&self, records: &[RunRecord]) {
        let failed = records.iter().filter(|r| !r.succeeded()).count();
        let measured: Duration = records.iter().map(|r| r.elapsed).sum();

        println!();
        println!(
            "{} {} runs, {} skipped, {} measured",
            "done:".bold(),
            records.len(),
            failed,
            format_duration(measured)
        );

        for line in fastest_rankings(records) {
            println!("  {}", line);
        }
    }
}

/// One line per run: fixed-width name, right-aligned counters with
/// one-character tags, `/s` suffix on rates. An errored run prints the name
/// and the message only.
pub fn render_compact(record: &RunRecord) -> String {
    if let Some(error) = &record.error {
        return format!("{:<width$} {}", record.name, error, width = NAME_FIELD);
    }

    let items = record.items_per_sec.unwrap_or(0.0);
    let bytes = record.bytes_per_sec.unwrap_or(0.0);
    let size = record.counters.get(crate::metrics::SIZE_COUNTER).copied().unwrap_or(0.0);
    format!(
        "{:<name$} {:>field$.0}i/s {:>field$.0}b/s {:>field$.0}s",
        record.name,
        items,
        bytes,
        size,
        name = NAME_FIELD,
        field = COUNTER_FIELD,
    )
}

/// Multi-line colored block per run for the default report.
fn render_console(record: &RunRecord) -> String {
    let mut out = String::new();

    if let Some(error) = &record.error {
        out.push_str(&format!(
            "{}\n  {} {}\n",
            record.name.cyan().bold(),
            "skipped:".red().bold(),
            error
        ));
        return out;
    }

    out.push_str(&format!("{}\n", record.name.cyan().bold()));
    out.push_str(&format!(
        "  iterations: {}    time/iter: {} (min {}, stddev {})\n",
        record.iterations,
        format_duration_ns(record.ns_per_iter),
        format_duration_ns(record.ns_per_iter_min),
        format_duration_ns(record.ns_per_iter_stddev),
    ));

    let items = record
        .items_per_sec
        .map(|rate| format_item_rate(rate).green().to_string())
        .unwrap_or_else(|| "-".to_string());
    let bytes = record
        .bytes_per_sec
        .map(|rate| format_byte_rate(rate).green().to_string())
        .unwrap_or_else(|| "-".to_string());
    out.push_str(&format!(
        "  items: {} @ {}    bytes: {} @ {}    size: {}\n",
        format_count(record.items_processed.unwrap_or(0) as f64),
        items,
        format_bytes(record.bytes_processed.unwrap_or(0) as f64),
        bytes,
        record
            .counters
            .get(crate::metrics::SIZE_COUNTER)
            .copied()
            .unwrap_or(0.0),
    ));
    out
}

/// Rank container kinds by item throughput for each (operation, profile)
/// pair at its largest measured operation count.
fn fastest_rankings(records: &[RunRecord]) -> Vec<String> {
    let mut groups: BTreeMap<(String, String), Vec<&RunRecord>> = BTreeMap::new();
    for record in records.iter().filter(|r| r.succeeded()) {
        groups
            .entry((
                record.operation.name().to_string(),
                record.profile.name().to_string(),
            ))
            .or_default()
            .push(record);
    }

    let mut lines = Vec::new();
    for ((operation, profile), group) in groups {
        let largest = match group.iter().map(|r| r.op_count).max() {
            Some(value) => value,
            None => continue,
        };
        let mut ranked: Vec<&RunRecord> = group
            .into_iter()
            .filter(|r| r.op_count == largest && r.items_per_sec.is_some())
            .collect();
        if ranked.len() < 2 {
            continue;
        }
        ranked.sort_by(|a, b| {
            b.items_per_sec
                .partial_cmp(&a.items_per_sec)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let order = ranked
            .iter()
            .map(|r| {
                format!(
                    "{} {}",
                    r.kind.name(),
                    format_item_rate(r.items_per_sec.unwrap_or(0.0))
                )
            })
            .collect::<Vec<_>>()
            .join(" > ");
        lines.push(format!("{}/{} @{}: {}", operation, profile, largest, order));
    }
    lines
}
