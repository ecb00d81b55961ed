//! Formatting helpers shared by the report presenters.
//!
//! All formatters prioritize human readability: durations pick the largest
//! unit that keeps two digits of precision, byte quantities use binary
//! scaling, and item rates use decimal scaling.

use std::time::Duration;

/// Format a duration with an automatically chosen unit.
pub fn format_duration(duration: Duration) -> String {
    let total_ns = duration.as_nanos();

    if total_ns < 1_000 {
        format!("{}ns", total_ns)
    } else if total_ns < 1_000_000 {
        format!("{:.2}us", total_ns as f64 / 1_000.0)
    } else if total_ns < 1_000_000_000 {
        format!("{:.2}ms", total_ns as f64 / 1_000_000.0)
    } else if total_ns < 60_000_000_000 {
        format!("{:.2}s", total_ns as f64 / 1_000_000_000.0)
    } else {
        let seconds = duration.as_secs();
        format!("{}m {}s", seconds / 60, seconds % 60)
    }
}

/// Format a nanosecond value as a duration.
pub fn format_duration_ns(ns: f64) -> String {
    format_duration(Duration::from_nanos(ns.max(0.0) as u64))
}

/// Format a byte count with binary (1024-based) scaling.
pub fn format_bytes(bytes: f64) -> String {
    const KIB: f64 = 1024.0;
    if bytes < KIB {
        format!("{:.0} B", bytes)
    } else if bytes < KIB * KIB {
        format!("{:.2} KiB", bytes / KIB)
    } else if bytes < KIB * KIB * KIB {
        format!("{:.2} MiB", bytes / (KIB * KIB))
    } else {
        format!("{:.2} GiB", bytes / (KIB * KIB * KIB))
    }
}

/// Format a byte rate with a `/s` suffix.
pub fn format_byte_rate(bytes_per_second: f64) -> String {
    format!("{}/s", format_bytes(bytes_per_second))
}

/// Format an item count with decimal scaling.
pub fn format_count(items: f64) -> String {
    if items < 1_000.0 {
        format!("{:.0}", items)
    } else if items < 1_000_000.0 {
        format!("{:.2}K", items / 1_000.0)
    } else if items < 1_000_000_000.0 {
        format!("{:.2}M", items / 1_000_000.0)
    } else {
        format!("{:.2}G", items / 1_000_000_000.0)
    }
}

/// Format an item rate with a ` items/s` suffix.
pub fn format_item_rate(items_per_second: f64) -> String {
    format!("{} items/s", format_count(items_per_second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_nanos(500)), "500ns");
        assert_eq!(format_duration(Duration::from_nanos(1500)), "1.50us");
        assert_eq!(format_duration(Duration::from_micros(1500)), "1.50ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512.0), "512 B");
        assert_eq!(format_bytes(1536.0), "1.50 KiB");
        assert_eq!(format_bytes(1572864.0), "1.50 MiB");
        assert_eq!(format_bytes(1610612736.0), "1.50 GiB");
    }

    #[test]
    fn test_format_rates() {
        assert_eq!(format_byte_rate(1024.0), "1.00 KiB/s");
        assert_eq!(format_item_rate(750.0), "750 items/s");
        assert_eq!(format_item_rate(1500.0), "1.50K items/s");
        assert_eq!(format_item_rate(2_300_000.0), "2.30M items/s");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(999.0), "999");
        assert_eq!(format_count(1_500_000_000.0), "1.50G");
    }
}
