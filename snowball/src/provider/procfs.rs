//! Per-core CPU time breakdown from `/proc/stat` (Linux)
//!
//! `/proc/stat` holds cumulative jiffies per core. Reading it twice, one
//! sampling interval apart, gives the share of the window spent in each state.

use std::time::Duration;

use crate::error::{SnowballError, SnowballResult};
use crate::types::CoreSample;

const PROC_STAT: &str = "/proc/stat";

/// Column names of a `cpuN` line, in kernel order
pub const FIELDS: [&str; 10] = [
    "user",
    "nice",
    "system",
    "idle",
    "iowait",
    "irq",
    "softirq",
    "steal",
    "guest",
    "guest_nice",
];

// guest and guest_nice are already included in user and nice
const GUEST_COLUMNS: std::ops::Range<usize> = 8..10;

/// Cumulative jiffies of one core, in [`FIELDS`] order
#[derive(Debug, Clone, PartialEq)]
pub struct CpuTimes {
    pub values: Vec<u64>,
}

/// Parse the per-core `cpuN` lines; the aggregate `cpu` line is skipped
pub fn parse_per_core(content: &str) -> SnowballResult<Vec<CpuTimes>> {
    content
        .lines()
        .filter(|line| {
            line.strip_prefix("cpu")
                .and_then(|rest| rest.chars().next())
                .is_some_and(|c| c.is_ascii_digit())
        })
        .map(|line| {
            let values = line
                .split_whitespace()
                .skip(1)
                .take(FIELDS.len())
                .map(|v| v.parse::<u64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| SnowballError::CpuSampling(format!("bad {} line: {}", PROC_STAT, e)))?;
            if values.len() < 4 {
                return Err(SnowballError::CpuSampling(format!(
                    "{} line has {} columns, expected at least 4",
                    PROC_STAT,
                    values.len()
                )));
            }
            Ok(CpuTimes { values })
        })
        .collect()
}

/// Turn two snapshots into per-core percentages of the window between them
pub fn times_percent(before: &[CpuTimes], after: &[CpuTimes]) -> SnowballResult<Vec<CoreSample>> {
    if before.len() != after.len() {
        return Err(SnowballError::CpuSampling(format!(
            "core count changed during sampling ({} -> {})",
            before.len(),
            after.len()
        )));
    }

    Ok(before
        .iter()
        .zip(after)
        .map(|(start, end)| core_percent(start, end))
        .collect())
}

fn core_percent(start: &CpuTimes, end: &CpuTimes) -> CoreSample {
    let columns = start.values.len().min(end.values.len());
    let deltas: Vec<u64> = (0..columns)
        .map(|i| end.values[i].saturating_sub(start.values[i]))
        .collect();
    let total: u64 = deltas
        .iter()
        .enumerate()
        .filter(|(i, _)| !GUEST_COLUMNS.contains(i))
        .map(|(_, d)| d)
        .sum();

    let fields = deltas
        .iter()
        .enumerate()
        .map(|(i, delta)| {
            let percent = if total == 0 {
                // No ticks elapsed: report the core as idle
                if FIELDS[i] == "idle" {
                    100.0
                } else {
                    0.0
                }
            } else {
                (*delta as f64 * 100.0 / total as f64).clamp(0.0, 100.0)
            };
            (FIELDS[i].to_string(), percent)
        })
        .collect();

    CoreSample::new(fields)
}

/// Read `/proc/stat`, wait `interval`, read it again
pub fn sample(interval: Duration) -> SnowballResult<Vec<CoreSample>> {
    let before = parse_per_core(&std::fs::read_to_string(PROC_STAT)?)?;
    std::thread::sleep(interval);
    let after = parse_per_core(&std::fs::read_to_string(PROC_STAT)?)?;
    tracing::debug!(cores = after.len(), ?interval, "sampled {}", PROC_STAT);
    times_percent(&before, &after)
}
