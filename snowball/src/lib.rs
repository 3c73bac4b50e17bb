//! Snowball Library
//!
//! Point-in-time system diagnostics: host identity, runtime, CPU usage,
//! network counters, memory and disk usage, rendered as ordered
//! `key: value` sections.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use snowball::{format, info, Config, SysinfoProvider};
//!
//! let snapshot = info::take_snapshot(&SysinfoProvider::new(), &Config::default())?;
//! for line in format::render(&snapshot) {
//!     println!("{}", line);
//! }
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `snowball`

pub mod config;
pub mod error;
pub mod format;
pub mod info;
pub mod init;
pub mod provider;
pub mod report;
pub mod types;

pub use config::Config;
pub use error::{SnowballError, SnowballResult};
pub use provider::{SysinfoProvider, SystemProvider};
pub use report::{MetricReport, Section, Snapshot};
