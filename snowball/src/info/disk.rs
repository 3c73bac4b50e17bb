//! Disk information collection

use crate::provider::SystemProvider;
use crate::report::{EntityNames, MetricReport};

/// Collect every mounted partition and its space usage.
///
/// Partitions are keyed by device name. A partition whose usage can't be
/// read keeps its usage labels with blank values.
pub fn collect(provider: &dyn SystemProvider) -> MetricReport {
    let partitions = provider.disk_partitions();
    let usages = provider.disk_usages(&partitions);
    let mut names = EntityNames::new();
    let mut report = MetricReport::new();

    for (partition, usage) in partitions.iter().zip(usages) {
        let entity = names.claim(&partition.device);
        report.insert(format!("{} mountpoint", entity), partition.mountpoint.clone());
        report.insert_opt(format!("{} fstype", entity), partition.fstype.clone());

        match usage {
            Some(usage) => {
                for (attribute, reading) in usage.fields() {
                    report.insert(format!("{} {}", entity, attribute), reading.annotated());
                }
            }
            None => {
                tracing::debug!(mountpoint = %partition.mountpoint, "no usage for partition");
                for attribute in ["total", "used", "free", "percent used"] {
                    report.insert_opt(format!("{} {}", entity, attribute), None);
                }
            }
        }
    }

    report
}
