//! Canned provider for unit tests

use std::cell::Cell;
use std::time::Duration;

use super::SystemProvider;
use crate::error::SnowballResult;
use crate::types::{
    CoreSample, CpuIdentity, DiskUsage, HostInfo, MemType, MemoryCounters, NicCounters,
    Partition, RuntimeInfo, Session,
};

pub struct FakeProvider {
    pub host: HostInfo,
    pub cores: Vec<CoreSample>,
    pub reported_cores: usize,
    pub nics: Vec<NicCounters>,
    pub partitions: Vec<(Partition, Option<DiskUsage>)>,
    pub sessions: Vec<Session>,
    pub boot_time: Option<u64>,
    pub cpu_samples_taken: Cell<usize>,
    pub disk_scans: Cell<usize>,
}

fn core(user: f64, system: f64, idle: f64) -> CoreSample {
    CoreSample::new(vec![
        ("user".to_string(), user),
        ("system".to_string(), system),
        ("idle".to_string(), idle),
    ])
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            host: HostInfo {
                hostname: Some("testbox".to_string()),
                system: "Linux".to_string(),
                release: Some("6.1.0".to_string()),
                version: Some("12".to_string()),
                architecture: "x86_64".to_string(),
                distribution_name: Some("Debian GNU/Linux".to_string()),
                distribution_id: Some("debian".to_string()),
            },
            cores: vec![core(6.0, 4.0, 90.0), core(20.0, 10.0, 70.0)],
            reported_cores: 2,
            nics: vec![
                NicCounters {
                    name: "lo".to_string(),
                    bytes_sent: 100,
                    bytes_recv: 100,
                    packets_sent: 2,
                    packets_recv: 2,
                    errin: 0,
                    errout: 0,
                },
                NicCounters {
                    name: "eth0".to_string(),
                    bytes_sent: 5000,
                    bytes_recv: 9000,
                    packets_sent: 40,
                    packets_recv: 70,
                    errin: 1,
                    errout: 0,
                },
            ],
            partitions: vec![(
                Partition {
                    device: "/dev/sda1".to_string(),
                    mountpoint: "/".to_string(),
                    fstype: Some("ext4".to_string()),
                },
                Some(DiskUsage::from_available(1000, 250)),
            )],
            sessions: vec![Session {
                user: "alice".to_string(),
                terminal: Some("pts/0".to_string()),
                host: None,
                started: Some("2024-05-01 09:30".to_string()),
            }],
            boot_time: Some(1_700_000_000),
            cpu_samples_taken: Cell::new(0),
            disk_scans: Cell::new(0),
        }
    }
}

impl SystemProvider for FakeProvider {
    fn host_info(&self) -> HostInfo {
        self.host.clone()
    }

    fn runtime_info(&self) -> RuntimeInfo {
        RuntimeInfo {
            implementation: "Rust".to_string(),
            version: None,
            build: Some("2.0.0 debug".to_string()),
            compiler: Some("rustc (x86_64-linux, unix)".to_string()),
        }
    }

    fn cpu_identity(&self) -> CpuIdentity {
        CpuIdentity {
            brand: Some("Test CPU".to_string()),
            architecture: "x86_64".to_string(),
            logical_cores: self.reported_cores,
        }
    }

    fn cpu_times_percent(&self, _interval: Duration) -> SnowballResult<Vec<CoreSample>> {
        self.cpu_samples_taken.set(self.cpu_samples_taken.get() + 1);
        Ok(self.cores.clone())
    }

    fn net_io_counters(&self) -> Vec<NicCounters> {
        self.nics.clone()
    }

    fn memory(&self, kind: MemType) -> MemoryCounters {
        match kind {
            MemType::Virtual => MemoryCounters::virtual_memory(8000, 6000, 1500, 4500),
            MemType::Swap => MemoryCounters::swap_memory(2000, 500, 1500),
        }
    }

    fn disk_partitions(&self) -> Vec<Partition> {
        self.partitions.iter().map(|(p, _)| p.clone()).collect()
    }

    fn disk_usage(&self, partition: &Partition) -> Option<DiskUsage> {
        self.partitions
            .iter()
            .find(|(p, _)| p.mountpoint == partition.mountpoint)
            .and_then(|(_, usage)| *usage)
    }

    fn disk_usages(&self, partitions: &[Partition]) -> Vec<Option<DiskUsage>> {
        self.disk_scans.set(self.disk_scans.get() + 1);
        partitions.iter().map(|p| self.disk_usage(p)).collect()
    }

    fn boot_time(&self) -> Option<u64> {
        self.boot_time
    }

    fn uptime(&self) -> u64 {
        3600
    }

    fn sessions(&self) -> Vec<Session> {
        self.sessions.clone()
    }
}
