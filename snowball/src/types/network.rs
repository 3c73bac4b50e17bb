//! Network types

use crate::types::Reading;

/// Cumulative I/O counters of one network interface since boot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NicCounters {
    /// Interface name (e.g., "eth0", "wlan0", "en0")
    pub name: String,
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
    pub errin: u64,
    pub errout: u64,
}

impl NicCounters {
    /// Counters in report order
    pub fn fields(&self) -> [(&'static str, Reading); 6] {
        [
            ("bytes_sent", Reading::Bytes(self.bytes_sent)),
            ("bytes_recv", Reading::Bytes(self.bytes_recv)),
            ("packets_sent", Reading::Count(self.packets_sent)),
            ("packets_recv", Reading::Count(self.packets_recv)),
            ("errin", Reading::Count(self.errin)),
            ("errout", Reading::Count(self.errout)),
        ]
    }
}
