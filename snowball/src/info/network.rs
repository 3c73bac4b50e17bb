//! Network information collection

use crate::provider::SystemProvider;
use crate::report::{EntityNames, MetricReport};

/// Collect I/O counters of every interface, sorted by interface name
pub fn collect(provider: &dyn SystemProvider) -> MetricReport {
    let mut interfaces = provider.net_io_counters();
    interfaces.sort_by(|a, b| a.name.cmp(&b.name));

    let mut names = EntityNames::new();
    let mut report = MetricReport::new();

    for nic in &interfaces {
        let entity = names.claim(&nic.name);
        for (counter, reading) in nic.fields() {
            report.insert(format!("{} {}", entity, counter), reading.annotated());
        }
    }

    tracing::debug!(interfaces = interfaces.len(), "collected network counters");
    report
}
