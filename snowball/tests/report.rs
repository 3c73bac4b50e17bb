//! End-to-end tests for the snowball report pipeline
//!
//! Most tests run against a stub provider so results are deterministic.
//! The `live_` tests query the real host through `SysinfoProvider`.

use std::time::Duration;

use snowball::config::{Config, CpuConfig};
use snowball::format;
use snowball::info::{self, cpu, memory};
use snowball::types::{
    CoreSample, CpuIdentity, DiskUsage, HostInfo, MemType, MemoryCounters, NicCounters,
    Partition, RuntimeInfo, Session,
};
use snowball::{SnowballError, SnowballResult, SysinfoProvider, SystemProvider};

/// Single-core host with blank optional data
struct SingleCoreHost {
    idle: f64,
}

impl SystemProvider for SingleCoreHost {
    fn host_info(&self) -> HostInfo {
        HostInfo {
            hostname: None,
            system: "Windows".to_string(),
            release: Some("10".to_string()),
            version: Some(String::new()),
            architecture: "x86_64".to_string(),
            distribution_name: None,
            distribution_id: None,
        }
    }

    fn runtime_info(&self) -> RuntimeInfo {
        RuntimeInfo {
            implementation: "Rust".to_string(),
            ..Default::default()
        }
    }

    fn cpu_identity(&self) -> CpuIdentity {
        CpuIdentity {
            brand: None,
            architecture: "x86_64".to_string(),
            logical_cores: 1,
        }
    }

    fn cpu_times_percent(&self, _interval: Duration) -> SnowballResult<Vec<CoreSample>> {
        Ok(vec![CoreSample::new(vec![
            ("user".to_string(), 100.0 - self.idle),
            ("idle".to_string(), self.idle),
        ])])
    }

    fn net_io_counters(&self) -> Vec<NicCounters> {
        vec![NicCounters {
            name: "Ethernet".to_string(),
            bytes_sent: 1,
            bytes_recv: 2,
            ..Default::default()
        }]
    }

    fn memory(&self, kind: MemType) -> MemoryCounters {
        match kind {
            MemType::Virtual => MemoryCounters::virtual_memory(4096, 1024, 3072, 1024),
            MemType::Swap => MemoryCounters::swap_memory(0, 0, 0),
        }
    }

    fn disk_partitions(&self) -> Vec<Partition> {
        vec![Partition {
            device: "C:".to_string(),
            mountpoint: "C:\\".to_string(),
            fstype: Some("NTFS".to_string()),
        }]
    }

    fn disk_usage(&self, _partition: &Partition) -> Option<DiskUsage> {
        Some(DiskUsage::from_available(200, 50))
    }

    fn boot_time(&self) -> Option<u64> {
        None
    }

    fn uptime(&self) -> u64 {
        59
    }

    fn sessions(&self) -> Vec<Session> {
        Vec::new()
    }
}

fn quick_config() -> Config {
    Config {
        cpu: CpuConfig {
            sample_interval_ms: 100,
        },
        ..Default::default()
    }
}

#[test]
fn single_core_reports_only_aggregates() {
    let report = cpu::collect(&SingleCoreHost { idle: 95.0 }, Duration::from_millis(1)).unwrap();

    assert!(report.keys().all(|k| !k.starts_with("Core ")));
    assert_eq!(report.get("Total usage"), Some(Some("5.0%")));
    assert_eq!(report.get("Total idle usage"), Some(Some("95.0%")));
    assert_eq!(report.get("Total user usage"), Some(Some("5.0%")));
}

#[test]
fn invalid_memory_selector_carries_value() {
    let err = memory::collect(&SingleCoreHost { idle: 50.0 }, "disk").unwrap_err();
    assert!(matches!(&err, SnowballError::InvalidMemType(v) if v == "disk"));
    assert!(err.to_string().contains("disk"));
}

#[test]
fn swap_with_zero_total_reports_zero_percent() {
    let report = memory::collect(&SingleCoreHost { idle: 50.0 }, "swap").unwrap();
    assert_eq!(report.get("percent used"), Some(Some("0.0%")));
    assert!(!report.contains_key("percent"));
}

#[test]
fn rendered_report_order_and_unknowns() {
    let snapshot = info::take_snapshot(&SingleCoreHost { idle: 95.0 }, &quick_config()).unwrap();
    let lines = format::render(&snapshot);

    let titles: Vec<&str> = lines
        .iter()
        .map(String::as_str)
        .filter(|l| l.ends_with(':') && !l.contains(": "))
        .collect();
    assert_eq!(
        titles,
        vec![
            "General information:",
            "Runtime information:",
            "CPU information:",
            "Network information:",
            "Memory statistics:",
            "Virtual memory:",
            "Swap/page memory:",
            "Disk information:",
        ]
    );

    // blank and missing values
    assert!(lines.contains(&"Name: unknown".to_string()));
    assert!(lines.contains(&"Processor: unknown".to_string()));
    assert!(lines.contains(&"Boot time: unknown".to_string()));
    assert!(lines.contains(&"Version: unknown".to_string()));
    // Windows branch only
    assert!(lines.contains(&"OS: 10".to_string()));
    assert!(!lines.iter().any(|l| l.starts_with("Distribution:")));

    assert!(lines.contains(&"Ethernet bytes_recv: 2 bytes".to_string()));
    assert!(lines.contains(&"C: percent used: 75.0%".to_string()));
    assert!(lines.contains(&"Uptime: 59 seconds".to_string()));
}

#[test]
fn rendering_twice_is_identical() {
    let snapshot = info::take_snapshot(&SingleCoreHost { idle: 95.0 }, &quick_config()).unwrap();
    assert_eq!(format::render(&snapshot), format::render(&snapshot));
}

#[test]
fn live_memory_and_cpu() {
    let provider = SysinfoProvider::new();

    for kind in [MemType::Virtual, MemType::Swap] {
        let report = memory::collect_kind(&provider, kind);
        let percent = report.get("percent used").flatten().unwrap();
        assert!(percent.ends_with('%'));
    }

    let report = cpu::collect(&provider, Duration::from_millis(200)).unwrap();
    let total = report.get("Total usage").flatten().unwrap();
    let value: f64 = total.trim_end_matches('%').parse().unwrap();
    assert!((0.0..=100.0).contains(&value), "total usage {}", value);
}

#[test]
fn live_disk_usages_match_partitions() {
    let provider = SysinfoProvider::new();
    let partitions = provider.disk_partitions();
    assert_eq!(provider.disk_usages(&partitions).len(), partitions.len());
}

#[test]
#[ignore = "reads every live subsystem, including the who command"]
fn live_full_snapshot() {
    let snapshot = info::take_snapshot(&SysinfoProvider::new(), &quick_config()).unwrap();
    let lines = format::render(&snapshot);
    assert!(lines[0].starts_with("Snowball "));
    assert!(lines.iter().any(|l| l.starts_with("Total usage: ")));
}
