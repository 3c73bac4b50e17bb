//! Runtime information collection

use crate::provider::SystemProvider;
use crate::report::MetricReport;

/// Collect the toolchain identity of the running program
pub fn collect(provider: &dyn SystemProvider) -> MetricReport {
    let runtime = provider.runtime_info();
    let mut report = MetricReport::new();

    report.insert("Implementation", runtime.implementation);
    report.insert_opt("Version", runtime.version);
    report.insert_opt("Build", runtime.build);
    report.insert_opt("Compiler", runtime.compiler);

    report
}
