//! Logging setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for the snowball binary
///
/// Logs go to stderr (stdout is reserved for the report) with:
/// - Environment-based filtering via RUST_LOG
/// - A level for the `snowball` crate set by `verbose` (1 = info, 2 = debug,
///   3+ = trace). Without `-v` the level is `warn` unless RUST_LOG is set, in
///   which case RUST_LOG decides.
///
/// Set `LOG_FORMAT=json` for structured JSON output.
pub fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let rust_log_set = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    let mut filter = EnvFilter::from_default_env();
    if let Some(directive) = crate_directive(verbose, rust_log_set) {
        filter = filter.add_directive(directive.parse()?);
    }

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

/// Directive for the `snowball` target, if one should be added on top of RUST_LOG
fn crate_directive(verbose: u8, rust_log_set: bool) -> Option<String> {
    let level = match verbose {
        0 if rust_log_set => return None,
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    Some(format!("snowball={}", level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_without_rust_log() {
        assert_eq!(crate_directive(0, false).as_deref(), Some("snowball=warn"));
    }

    #[test]
    fn test_rust_log_wins_without_verbose() {
        assert_eq!(crate_directive(0, true), None);
    }

    #[test]
    fn test_verbose_levels() {
        assert_eq!(crate_directive(1, true).as_deref(), Some("snowball=info"));
        assert_eq!(crate_directive(2, false).as_deref(), Some("snowball=debug"));
        assert_eq!(crate_directive(5, false).as_deref(), Some("snowball=trace"));
    }
}
