//! Provider backed by the `sysinfo` crate

use std::collections::HashMap;
use std::time::Duration;

use sysinfo::{Disks, Networks, System, MINIMUM_CPU_UPDATE_INTERVAL};

use super::{procfs, sessions, SystemProvider};
use crate::error::SnowballResult;
use crate::types::{
    CoreSample, CpuIdentity, DiskUsage, HostInfo, MemType, MemoryCounters, NicCounters,
    Partition, RuntimeInfo, Session,
};

/// Live system information.
///
/// Each query builds a fresh `sysinfo` handle and refreshes only what it
/// needs, so the provider itself holds no state.
#[derive(Debug, Default, Clone, Copy)]
pub struct SysinfoProvider;

impl SysinfoProvider {
    pub fn new() -> Self {
        Self
    }
}

/// OS family name as reported by uname-style APIs
fn os_family() -> String {
    match std::env::consts::OS {
        "linux" => "Linux".to_string(),
        "windows" => "Windows".to_string(),
        "macos" => "Darwin".to_string(),
        other => other.to_string(),
    }
}

fn non_empty(value: String) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty())
}

/// Fallback when no per-state breakdown is available: busy vs idle
fn usage_samples(interval: Duration) -> Vec<CoreSample> {
    let mut sys = System::new();
    sys.refresh_cpu_usage();
    std::thread::sleep(interval.max(MINIMUM_CPU_UPDATE_INTERVAL));
    sys.refresh_cpu_usage();

    sys.cpus()
        .iter()
        .map(|cpu| {
            let busy = f64::from(cpu.cpu_usage()).clamp(0.0, 100.0);
            CoreSample::new(vec![
                ("busy".to_string(), busy),
                ("idle".to_string(), 100.0 - busy),
            ])
        })
        .collect()
}

impl SystemProvider for SysinfoProvider {
    fn host_info(&self) -> HostInfo {
        HostInfo {
            hostname: System::host_name(),
            system: os_family(),
            release: System::kernel_version(),
            version: System::os_version(),
            architecture: std::env::consts::ARCH.to_string(),
            distribution_name: System::name(),
            distribution_id: non_empty(System::distribution_id()),
        }
    }

    fn runtime_info(&self) -> RuntimeInfo {
        let profile = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        };

        RuntimeInfo {
            implementation: "Rust".to_string(),
            version: option_env!("CARGO_PKG_RUST_VERSION")
                .map(str::to_string)
                .and_then(non_empty),
            build: Some(format!("{} {}", env!("CARGO_PKG_VERSION"), profile)),
            compiler: Some(format!(
                "rustc ({}-{}, {})",
                std::env::consts::ARCH,
                std::env::consts::OS,
                std::env::consts::FAMILY
            )),
        }
    }

    fn cpu_identity(&self) -> CpuIdentity {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        let cpus = sys.cpus();

        CpuIdentity {
            brand: cpus
                .first()
                .map(|c| c.brand().to_string())
                .and_then(non_empty),
            architecture: std::env::consts::ARCH.to_string(),
            logical_cores: cpus.len(),
        }
    }

    fn cpu_times_percent(&self, interval: Duration) -> SnowballResult<Vec<CoreSample>> {
        if cfg!(target_os = "linux") {
            procfs::sample(interval)
        } else {
            Ok(usage_samples(interval))
        }
    }

    fn net_io_counters(&self) -> Vec<NicCounters> {
        let networks = Networks::new_with_refreshed_list();

        networks
            .iter()
            .map(|(name, data)| NicCounters {
                name: name.clone(),
                bytes_sent: data.total_transmitted(),
                bytes_recv: data.total_received(),
                packets_sent: data.total_packets_transmitted(),
                packets_recv: data.total_packets_received(),
                errin: data.total_errors_on_received(),
                errout: data.total_errors_on_transmitted(),
            })
            .collect()
    }

    fn memory(&self, kind: MemType) -> MemoryCounters {
        let mut sys = System::new();
        sys.refresh_memory();

        match kind {
            MemType::Virtual => MemoryCounters::virtual_memory(
                sys.total_memory(),
                sys.available_memory(),
                sys.used_memory(),
                sys.free_memory(),
            ),
            MemType::Swap => {
                MemoryCounters::swap_memory(sys.total_swap(), sys.used_swap(), sys.free_swap())
            }
        }
    }

    fn disk_partitions(&self) -> Vec<Partition> {
        let disks = Disks::new_with_refreshed_list();

        disks
            .iter()
            .map(|disk| Partition {
                device: disk.name().to_string_lossy().to_string(),
                mountpoint: disk.mount_point().to_string_lossy().to_string(),
                fstype: non_empty(disk.file_system().to_string_lossy().to_string()),
            })
            .collect()
    }

    fn disk_usage(&self, partition: &Partition) -> Option<DiskUsage> {
        self.disk_usages(std::slice::from_ref(partition)).pop().flatten()
    }

    fn disk_usages(&self, partitions: &[Partition]) -> Vec<Option<DiskUsage>> {
        let disks = Disks::new_with_refreshed_list();
        let by_mount: HashMap<String, DiskUsage> = disks
            .iter()
            .map(|disk| {
                (
                    disk.mount_point().to_string_lossy().to_string(),
                    DiskUsage::from_available(disk.total_space(), disk.available_space()),
                )
            })
            .collect();

        partitions
            .iter()
            .map(|p| by_mount.get(&p.mountpoint).copied())
            .collect()
    }

    fn boot_time(&self) -> Option<u64> {
        Some(System::boot_time()).filter(|t| *t > 0)
    }

    fn uptime(&self) -> u64 {
        System::uptime()
    }

    fn sessions(&self) -> Vec<Session> {
        sessions::logged_in()
    }
}
