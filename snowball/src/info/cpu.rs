//! CPU usage collection
//!
//! Turns per-core utilization breakdowns into per-core and machine-wide
//! percentages. The breakdown fields are whatever the provider reports
//! (`user`, `system`, `idle`, ...); only `idle` is required, to derive
//! total usage as `100 - idle`.

use std::time::Duration;

use crate::error::{SnowballError, SnowballResult};
use crate::provider::SystemProvider;
use crate::report::MetricReport;
use crate::types::CoreSample;

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn percent(value: f64) -> String {
    format!("{:.1}%", round1(value))
}

/// Machine-wide means across cores, rounded to one decimal
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSample {
    /// Mean of each breakdown field, in provider order
    pub fields: Vec<(String, f64)>,
    /// Mean of `100 - idle` across cores
    pub total: f64,
}

impl AggregateSample {
    pub fn from_cores(samples: &[CoreSample]) -> SnowballResult<Self> {
        let idles = validate(samples)?;
        let cores = samples.len() as f64;

        let fields = samples[0]
            .field_names()
            .enumerate()
            .map(|(i, name)| {
                let sum: f64 = samples.iter().map(|s| s.fields[i].1).sum();
                (name.to_string(), round1(sum / cores))
            })
            .collect();
        let busy: f64 = idles.iter().map(|idle| 100.0 - idle).sum();

        Ok(Self {
            fields,
            total: round1(busy / cores),
        })
    }
}

/// Check the samples are comparable and return each core's idle share
fn validate(samples: &[CoreSample]) -> SnowballResult<Vec<f64>> {
    let first = samples.first().ok_or(SnowballError::NoCores)?;
    if first.fields.is_empty() {
        return Err(SnowballError::EmptyFieldSet);
    }

    for (i, sample) in samples.iter().enumerate().skip(1) {
        if !sample.field_names().eq(first.field_names()) {
            return Err(SnowballError::FieldSetMismatch { core: i + 1 });
        }
    }

    samples
        .iter()
        .map(|s| s.idle().ok_or(SnowballError::MissingIdleField))
        .collect()
}

/// Build the usage entries for `core_count` cores.
///
/// With more than one core every core gets `Core {i} {field} usage` and
/// `Core {i} total usage` entries first. Then come `Total {field} usage` for
/// each field and finally `Total usage`.
pub fn aggregate(core_count: usize, samples: &[CoreSample]) -> SnowballResult<MetricReport> {
    if core_count == 0 {
        return Err(SnowballError::NoCores);
    }
    if samples.len() != core_count {
        return Err(SnowballError::CoreCountMismatch {
            expected: core_count,
            actual: samples.len(),
        });
    }

    let idles = validate(samples)?;
    let mut report = MetricReport::new();

    if core_count > 1 {
        for (i, (sample, idle)) in samples.iter().zip(&idles).enumerate() {
            let core = i + 1;
            for (field, value) in &sample.fields {
                report.insert(format!("Core {} {} usage", core, field), percent(*value));
            }
            report.insert(format!("Core {} total usage", core), percent(100.0 - idle));
        }
    }

    let aggregate = AggregateSample::from_cores(samples)?;
    for (field, mean) in &aggregate.fields {
        report.insert(format!("Total {} usage", field), percent(*mean));
    }
    report.insert("Total usage", percent(aggregate.total));

    Ok(report)
}

/// Collect CPU identity plus usage over one sampling window.
///
/// Blocks for `interval` while the provider measures.
pub fn collect(provider: &dyn SystemProvider, interval: Duration) -> SnowballResult<MetricReport> {
    let identity = provider.cpu_identity();
    let mut report = MetricReport::new();

    report.insert_opt("Processor", identity.brand);
    report.insert("Architecture", identity.architecture);
    report.insert("Cores", identity.logical_cores.to_string());

    if identity.logical_cores == 0 {
        return Err(SnowballError::NoCores);
    }

    tracing::debug!(cores = identity.logical_cores, ?interval, "sampling cpu times");
    let samples = provider.cpu_times_percent(interval)?;
    report.extend(aggregate(identity.logical_cores, &samples)?);

    Ok(report)
}
