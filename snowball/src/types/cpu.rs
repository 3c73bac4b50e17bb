//! CPU types

/// Fixed CPU facts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuIdentity {
    /// CPU brand/model name
    pub brand: Option<String>,
    /// Machine architecture
    pub architecture: String,
    /// Number of logical cores
    pub logical_cores: usize,
}

/// Utilization breakdown of one core over one sampling window.
///
/// Field names come from the provider (e.g. `user`, `system`, `idle`) and are
/// kept in the provider's order. Values are percentages of the window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoreSample {
    pub fields: Vec<(String, f64)>,
}

impl CoreSample {
    pub fn new(fields: Vec<(String, f64)>) -> Self {
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| *value)
    }

    pub fn idle(&self) -> Option<f64> {
        self.get("idle")
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}
