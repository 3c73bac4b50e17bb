//! System information providers
//!
//! Collectors only talk to the [`SystemProvider`] trait. [`SysinfoProvider`]
//! is the production implementation; tests plug in canned data.

#[cfg(test)]
pub(crate) mod fake;
pub mod procfs;
pub mod sessions;
mod system;

pub use system::SysinfoProvider;

use std::time::Duration;

use crate::error::{SnowballError, SnowballResult};
use crate::types::{
    CoreSample, CpuIdentity, DiskUsage, HostInfo, MemType, MemoryCounters, NicCounters,
    Partition, RuntimeInfo, Session,
};

/// Source of raw system counters.
///
/// Every method is a single query; none of them keep state between calls.
/// Blank values are returned as `None` rather than treated as errors.
pub trait SystemProvider {
    /// Host and operating system identity
    fn host_info(&self) -> HostInfo;

    /// Identity of the running program's toolchain
    fn runtime_info(&self) -> RuntimeInfo;

    /// Fixed CPU facts, including the logical core count
    fn cpu_identity(&self) -> CpuIdentity;

    /// Per-core utilization breakdown over `interval`.
    ///
    /// Blocks the calling thread for `interval`; all cores are measured over
    /// the same window.
    fn cpu_times_percent(&self, interval: Duration) -> SnowballResult<Vec<CoreSample>>;

    /// Cumulative I/O counters per network interface
    fn net_io_counters(&self) -> Vec<NicCounters>;

    /// Counters for the requested memory pool
    fn memory(&self, kind: MemType) -> MemoryCounters;

    /// Mounted disk partitions
    fn disk_partitions(&self) -> Vec<Partition>;

    /// Space usage of one partition, `None` if it can no longer be queried
    fn disk_usage(&self, partition: &Partition) -> Option<DiskUsage>;

    /// Space usage of every partition, in the same order.
    ///
    /// Providers that can stat all disks in one pass should override this.
    fn disk_usages(&self, partitions: &[Partition]) -> Vec<Option<DiskUsage>> {
        partitions.iter().map(|p| self.disk_usage(p)).collect()
    }

    /// Boot time as a Unix timestamp
    fn boot_time(&self) -> Option<u64>;

    /// Seconds since boot
    fn uptime(&self) -> u64;

    /// Logged-in user sessions
    fn sessions(&self) -> Vec<Session>;
}

/// Fail early when the platform has no system information support.
///
/// Called once before any collector runs so that no partial report is printed.
pub fn ensure_available() -> SnowballResult<()> {
    if sysinfo::IS_SUPPORTED_SYSTEM {
        Ok(())
    } else {
        Err(SnowballError::ProviderUnavailable)
    }
}
