//! Typed counter values

/// A single provider value, tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// Byte count
    Bytes(u64),
    /// Plain event or item count
    Count(u64),
    /// Percentage (0-100)
    Ratio(f64),
}

impl Reading {
    /// The bare number, without any unit
    pub fn raw(&self) -> String {
        match self {
            Reading::Bytes(v) | Reading::Count(v) => v.to_string(),
            Reading::Ratio(v) => format!("{:.1}", v),
        }
    }

    /// The number with its unit suffix: `" bytes"` for byte counts, `"%"` for ratios
    pub fn annotated(&self) -> String {
        match self {
            Reading::Bytes(_) => format!("{} bytes", self.raw()),
            Reading::Count(_) => self.raw(),
            Reading::Ratio(_) => format!("{}%", self.raw()),
        }
    }
}
