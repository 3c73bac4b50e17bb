//! Error types for snowball collection

use thiserror::Error;

/// Errors that can occur while collecting a report
#[derive(Error, Debug)]
pub enum SnowballError {
    /// Memory selector was neither "virtual" nor "swap"
    #[error("invalid memory type: {0:?} (expected \"virtual\" or \"swap\")")]
    InvalidMemType(String),

    /// The provider reported zero CPU cores
    #[error("cpu provider reported zero cores")]
    NoCores,

    /// A CPU sample carried no breakdown fields
    #[error("cpu samples carry no breakdown fields")]
    EmptyFieldSet,

    /// Number of CPU samples does not match the reported core count
    #[error("expected {expected} cpu samples, got {actual}")]
    CoreCountMismatch {
        /// Core count reported by the provider
        expected: usize,
        /// Number of samples actually returned
        actual: usize,
    },

    /// A core's breakdown fields differ from the first core's
    #[error("core {core} breakdown fields differ from core 1")]
    FieldSetMismatch {
        /// 1-based core index
        core: usize,
    },

    /// CPU samples have no `idle` component to derive total usage from
    #[error("cpu samples have no idle field")]
    MissingIdleField,

    /// The system information provider does not support this platform
    #[error("system information is not available on this platform")]
    ProviderUnavailable,

    /// Reading raw CPU counters failed
    #[error("failed to sample cpu times: {0}")]
    CpuSampling(String),

    /// Underlying I/O failure while querying the provider
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for snowball operations
pub type SnowballResult<T> = Result<T, SnowballError>;
