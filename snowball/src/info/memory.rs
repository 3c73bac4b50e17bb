//! Memory information collection

use crate::error::SnowballResult;
use crate::provider::SystemProvider;
use crate::report::MetricReport;
use crate::types::MemType;

/// Collect memory counters for a selector given as text.
///
/// Only `"virtual"` and `"swap"` are accepted; anything else is
/// [`SnowballError::InvalidMemType`](crate::error::SnowballError::InvalidMemType).
pub fn collect(provider: &dyn SystemProvider, selector: &str) -> SnowballResult<MetricReport> {
    let kind: MemType = selector.parse()?;
    Ok(collect_kind(provider, kind))
}

/// Collect memory counters for one memory pool.
///
/// The `percent` counter is reported as `percent used` with a `%` suffix;
/// every other counter is a byte count.
pub fn collect_kind(provider: &dyn SystemProvider, kind: MemType) -> MetricReport {
    let counters = provider.memory(kind);
    let mut report = MetricReport::new();

    for (name, reading) in &counters.fields {
        if *name == "percent" {
            report.insert("percent used", format!("{}%", reading.raw()));
        } else {
            report.insert(*name, format!("{} bytes", reading.raw()));
        }
    }

    tracing::debug!(%kind, entries = report.len(), "collected memory");
    report
}
