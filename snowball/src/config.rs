//! Configuration loading for snowball
//!
//! Configuration is loaded from:
//! 1. An explicit path (`--config` or the SNOWBALL_CONFIG environment variable)
//! 2. ~/.snowball/snowball.toml
//! 3. Default values

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Shortest CPU sampling window that still yields a meaningful percentage
pub const MIN_SAMPLE_INTERVAL_MS: u64 = 100;

/// Longest CPU sampling window; the wait stays subsecond
pub const MAX_SAMPLE_INTERVAL_MS: u64 = 1000;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// CPU sampling configuration
    #[serde(default)]
    pub cpu: CpuConfig,
    /// General information section
    #[serde(default)]
    pub environment: EnvironmentConfig,
}

/// CPU sampling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuConfig {
    /// Length of the blocking CPU sampling window in milliseconds
    #[serde(default = "default_sample_interval_ms")]
    pub sample_interval_ms: u64,
}

/// What the general information section includes beyond host identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Report boot time and uptime
    #[serde(default = "default_true")]
    pub include_boot_time: bool,
    /// Report logged-in user sessions
    #[serde(default = "default_true")]
    pub include_sessions: bool,
}

fn default_sample_interval_ms() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: default_sample_interval_ms(),
        }
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            include_boot_time: default_true(),
            include_sessions: default_true(),
        }
    }
}

impl CpuConfig {
    /// The sampling window, clamped to
    /// [`MIN_SAMPLE_INTERVAL_MS`]..=[`MAX_SAMPLE_INTERVAL_MS`]
    pub fn sample_interval(&self) -> Duration {
        if self.sample_interval_ms < MIN_SAMPLE_INTERVAL_MS {
            tracing::warn!(
                configured = self.sample_interval_ms,
                "cpu.sample_interval_ms too short, using {}ms",
                MIN_SAMPLE_INTERVAL_MS
            );
            Duration::from_millis(MIN_SAMPLE_INTERVAL_MS)
        } else if self.sample_interval_ms > MAX_SAMPLE_INTERVAL_MS {
            tracing::warn!(
                configured = self.sample_interval_ms,
                "cpu.sample_interval_ms too long, using {}ms",
                MAX_SAMPLE_INTERVAL_MS
            );
            Duration::from_millis(MAX_SAMPLE_INTERVAL_MS)
        } else {
            Duration::from_millis(self.sample_interval_ms)
        }
    }
}

impl Config {
    /// Load configuration from `explicit`, the default path, or use defaults.
    ///
    /// An explicitly given path must exist; a missing default file is fine.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    /// ~/.snowball/snowball.toml
    fn default_path() -> Option<PathBuf> {
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".snowball").join("snowball.toml"))
    }
}
