//! Memory types

use std::fmt;
use std::str::FromStr;

use crate::error::SnowballError;
use crate::types::Reading;

/// Which memory pool to report on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemType {
    Virtual,
    Swap,
}

impl MemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemType::Virtual => "virtual",
            MemType::Swap => "swap",
        }
    }
}

impl FromStr for MemType {
    type Err = SnowballError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "virtual" => Ok(MemType::Virtual),
            "swap" => Ok(MemType::Swap),
            other => Err(SnowballError::InvalidMemType(other.to_string())),
        }
    }
}

impl fmt::Display for MemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Memory counters in provider order, e.g. `total`, `used`, `free`, `percent`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryCounters {
    pub fields: Vec<(&'static str, Reading)>,
}

impl MemoryCounters {
    /// Physical memory counters; `percent` is `(total - available) / total`
    pub fn virtual_memory(total: u64, available: u64, used: u64, free: u64) -> Self {
        Self {
            fields: vec![
                ("total", Reading::Bytes(total)),
                ("available", Reading::Bytes(available)),
                (
                    "percent",
                    Reading::Ratio(usage_percent(total.saturating_sub(available), total)),
                ),
                ("used", Reading::Bytes(used)),
                ("free", Reading::Bytes(free)),
            ],
        }
    }

    pub fn swap_memory(total: u64, used: u64, free: u64) -> Self {
        Self {
            fields: vec![
                ("total", Reading::Bytes(total)),
                ("used", Reading::Bytes(used)),
                ("free", Reading::Bytes(free)),
                ("percent", Reading::Ratio(usage_percent(used, total))),
            ],
        }
    }
}

/// `part / total` as a percentage, 0 when `total` is 0
pub fn usage_percent(part: u64, total: u64) -> f64 {
    if total > 0 {
        (part as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}
