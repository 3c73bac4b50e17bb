//! Metric collectors, one per category

pub mod cpu;
pub mod disk;
pub mod environment;
pub mod memory;
pub mod network;
pub mod runtime;

use chrono::Local;

use crate::config::Config;
use crate::error::SnowballResult;
use crate::provider::SystemProvider;
use crate::report::{Section, Snapshot};
use crate::types::MemType;

pub const GENERAL_TITLE: &str = "General information";
pub const RUNTIME_TITLE: &str = "Runtime information";
pub const CPU_TITLE: &str = "CPU information";
pub const NETWORK_TITLE: &str = "Network information";
pub const MEMORY_TITLE: &str = "Memory statistics";
pub const DISK_TITLE: &str = "Disk information";

/// Run every collector once, least volatile category first.
///
/// Order: general, runtime, CPU, network, virtual memory, swap memory, disk.
/// Any collector error aborts the whole run.
pub fn take_snapshot(provider: &dyn SystemProvider, config: &Config) -> SnowballResult<Snapshot> {
    let generated = Local::now();
    let mut sections = Vec::with_capacity(7);

    sections.push(Section::new(
        GENERAL_TITLE,
        environment::collect(provider, &config.environment),
    ));
    sections.push(Section::new(RUNTIME_TITLE, runtime::collect(provider)));
    sections.push(Section::new(
        CPU_TITLE,
        cpu::collect(provider, config.cpu.sample_interval())?,
    ));
    sections.push(Section::new(NETWORK_TITLE, network::collect(provider)));
    sections.push(Section::with_subtitle(
        MEMORY_TITLE,
        "Virtual memory",
        memory::collect_kind(provider, MemType::Virtual),
    ));
    sections.push(Section::with_subtitle(
        MEMORY_TITLE,
        "Swap/page memory",
        memory::collect_kind(provider, MemType::Swap),
    ));
    sections.push(Section::new(DISK_TITLE, disk::collect(provider)));

    tracing::info!(sections = sections.len(), "snapshot complete");
    Ok(Snapshot {
        generated,
        sections,
    })
}
