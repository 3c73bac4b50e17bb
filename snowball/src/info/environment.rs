//! General host information collection

use chrono::{DateTime, Local};

use crate::config::EnvironmentConfig;
use crate::provider::SystemProvider;
use crate::report::{EntityNames, MetricReport};
use crate::types::HostInfo;

/// OS-specific details, chosen once from the OS family name
#[derive(Debug, Clone, PartialEq)]
pub enum Platform {
    /// Distribution name, version and id
    Linux { distribution: Option<String> },
    /// Windows release and version
    Windows { os: Option<String> },
    /// macOS version and machine architecture
    MacOs { os: Option<String> },
    /// Anything else contributes no entries
    Other,
}

impl Platform {
    pub fn detect(host: &HostInfo) -> Self {
        match host.system.as_str() {
            "Linux" => Platform::Linux {
                distribution: join_present(
                    &[
                        host.distribution_name.as_deref(),
                        host.version.as_deref(),
                        host.distribution_id.as_deref(),
                    ],
                    " ",
                ),
            },
            "Windows" => Platform::Windows {
                os: join_present(&[host.release.as_deref(), host.version.as_deref()], " "),
            },
            "Darwin" => Platform::MacOs {
                os: join_present(
                    &[host.version.as_deref(), Some(host.architecture.as_str())],
                    " ",
                ),
            },
            _ => Platform::Other,
        }
    }

    /// Add this platform's entries to `report`
    pub fn describe(&self, report: &mut MetricReport) {
        match self {
            Platform::Linux { distribution } => describe_linux(distribution, report),
            Platform::Windows { os } => describe_windows(os, report),
            Platform::MacOs { os } => describe_macos(os, report),
            Platform::Other => {}
        }
    }
}

fn describe_linux(distribution: &Option<String>, report: &mut MetricReport) {
    report.insert_opt("Distribution", distribution.clone());
}

fn describe_windows(os: &Option<String>, report: &mut MetricReport) {
    report.insert_opt("OS", os.clone());
}

fn describe_macos(os: &Option<String>, report: &mut MetricReport) {
    report.insert_opt("OS", os.clone());
}

/// Join the non-blank parts with `sep`, `None` if there are none
fn join_present(parts: &[Option<&str>], sep: &str) -> Option<String> {
    let present: Vec<&str> = parts
        .iter()
        .flatten()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();
    if present.is_empty() {
        None
    } else {
        Some(present.join(sep))
    }
}

/// Format a Unix timestamp in local time
fn format_timestamp(secs: u64) -> Option<String> {
    let secs = i64::try_from(secs).ok()?;
    DateTime::from_timestamp(secs, 0).map(|utc| {
        utc.with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    })
}

/// Format uptime seconds into human-readable string
fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    let plural = |n: u64| if n == 1 { "" } else { "s" };

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{} day{}", days, plural(days)));
    }
    if hours > 0 {
        parts.push(format!("{} hour{}", hours, plural(hours)));
    }
    if minutes > 0 {
        parts.push(format!("{} minute{}", minutes, plural(minutes)));
    }
    if secs > 0 || parts.is_empty() {
        parts.push(format!("{} second{}", secs, plural(secs)));
    }

    parts.join(", ")
}

/// Collect host identity, platform details, boot time and sessions
pub fn collect(provider: &dyn SystemProvider, config: &EnvironmentConfig) -> MetricReport {
    let host = provider.host_info();
    let mut report = MetricReport::new();

    report.insert_opt("Name", host.hostname.clone());
    report.insert("System", host.system.clone());
    report.insert_opt(
        "System alias",
        join_present(
            &[
                Some(host.system.as_str()),
                host.release.as_deref(),
                host.version.as_deref(),
            ],
            " ",
        ),
    );
    report.insert_opt(
        "Platform",
        join_present(
            &[
                Some(host.system.as_str()),
                host.release.as_deref(),
                Some(host.architecture.as_str()),
            ],
            "-",
        ),
    );

    let platform = Platform::detect(&host);
    tracing::debug!(?platform, "detected platform");
    platform.describe(&mut report);

    if config.include_boot_time {
        report.insert_opt("Boot time", provider.boot_time().and_then(format_timestamp));
        report.insert("Uptime", format_uptime(provider.uptime()));
    }

    if config.include_sessions {
        let mut names = EntityNames::new();
        for session in provider.sessions() {
            let entity = names.claim(&session.user);
            report.insert_opt(format!("{} terminal", entity), session.terminal);
            report.insert_opt(format!("{} host", entity), session.host);
            report.insert_opt(format!("{} started", entity), session.started);
        }
    }

    report
}
