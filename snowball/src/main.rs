//! Snowball
//!
//! Prints a point-in-time system diagnostics report to stdout. Logs go to
//! stderr.
//!
//! # Usage
//!
//! Run directly: `snowball`
//!
//! Optional settings live in `~/.snowball/snowball.toml`:
//! ```toml
//! [cpu]
//! sample_interval_ms = 500
//!
//! [environment]
//! include_sessions = true
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use snowball::{format, info, init, provider, Config, SysinfoProvider};

#[derive(Parser)]
#[command(name = "snowball", version)]
#[command(about = "Point-in-time system diagnostics report")]
struct Cli {
    /// Path to a TOML config file (default: ~/.snowball/snowball.toml)
    #[arg(long, env = "SNOWBALL_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init::init_tracing(cli.verbose)?;

    if let Err(e) = provider::ensure_available() {
        eprintln!("{}. Exiting.", e);
        std::process::exit(1);
    }

    let config = Config::load(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    let snapshot = info::take_snapshot(&SysinfoProvider::new(), &config)
        .context("collecting system information")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in format::render(&snapshot) {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    Ok(())
}
