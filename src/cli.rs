use crate::element::ElementProfile;
use crate::registry::Operation;
use crate::sequence::ContainerKind;
use clap::Parser;
use std::time::Duration;

/// Container Benchmark Suite - measures sequence container operation cost
#[derive(Parser, Debug, Clone)]
#[clap(version, about, long_about = None)]
pub struct Args {
    /// Operations to benchmark (space-separated, or "all")
    #[clap(short = 'o', long, value_enum, default_values_t = vec![Operation::All], num_args = 1..)]
    pub operations: Vec<Operation>,

    /// Container kinds to benchmark (vec, list, deque, or all)
    #[clap(short = 'c', long, value_enum, default_values_t = vec![ContainerKind::All], num_args = 1..)]
    pub containers: Vec<ContainerKind>,

    /// Element profiles to benchmark (small, large, or all)
    #[clap(short = 'p', long, value_enum, default_values_t = vec![ElementProfile::All], num_args = 1..)]
    pub profiles: Vec<ElementProfile>,

    /// Only run benchmarks whose name contains this substring
    #[clap(short = 'f', long)]
    pub filter: Option<String>,

    /// Minimum measured time per run (e.g. "500ms", "2s")
    #[clap(short = 't', long, value_parser = parse_duration, default_value = "500ms")]
    pub min_time: Duration,

    /// Iterations of the discarded warmup batch before measurement
    #[clap(short = 'w', long, default_value_t = crate::defaults::WARMUP_ITERATIONS)]
    pub warmup_iterations: u64,

    /// One line per run with right-aligned counters instead of the default report
    #[clap(long, default_value_t = false)]
    pub compact: bool,

    /// Print all run records as JSON to stdout after the suite
    #[clap(long, default_value_t = false)]
    pub json: bool,

    /// List selected benchmark names without running them
    #[clap(long, default_value_t = false)]
    pub list: bool,

    /// Verbose diagnostic logging
    #[clap(short = 'v', long, default_value_t = false)]
    pub verbose: bool,
}

/// Parse duration from string (e.g. "250ms", "10s", "5m")
fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("Duration cannot be empty".to_string());
    }

    let (num_str, unit) = if let Some(stripped) = s.strip_suffix("ms") {
        (stripped, "ms")
    } else if let Some(stripped) = s.strip_suffix('s') {
        (stripped, "s")
    } else if let Some(stripped) = s.strip_suffix('m') {
        (stripped, "m")
    } else {
        (s, "s") // Default to seconds
    };

    let num: f64 = num_str
        .parse()
        .map_err(|_| format!("Invalid number in duration: {}", num_str))?;
    if num < 0.0 {
        return Err("Duration cannot be negative".to_string());
    }

    let duration = match unit {
        "ms" => Duration::from_millis(num as u64),
        "s" => Duration::from_secs_f64(num),
        "m" => Duration::from_secs_f64(num * 60.0),
        _ => return Err(format!("Invalid duration unit: {}", unit)),
    };

    Ok(duration)
}
