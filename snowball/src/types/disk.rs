//! Disk types

use crate::types::{usage_percent, Reading};

/// A mounted disk partition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    /// Device name (e.g., "/dev/sda1", "C:")
    pub device: String,
    /// Mount point path
    pub mountpoint: String,
    /// Filesystem type (e.g., "ext4", "ntfs", "apfs")
    pub fstype: Option<String>,
}

/// Space usage of a mounted partition
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiskUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

impl DiskUsage {
    pub fn from_available(total: u64, available: u64) -> Self {
        Self {
            total,
            used: total.saturating_sub(available),
            free: available,
        }
    }

    pub fn percent(&self) -> f64 {
        usage_percent(self.used, self.total)
    }

    /// Usage fields in report order
    pub fn fields(&self) -> [(&'static str, Reading); 4] {
        [
            ("total", Reading::Bytes(self.total)),
            ("used", Reading::Bytes(self.used)),
            ("free", Reading::Bytes(self.free)),
            ("percent used", Reading::Ratio(self.percent())),
        ]
    }
}
