//! Logged-in user sessions via the `who` command

use std::process::Command;

use crate::types::Session;

/// Run `who` and parse its output.
///
/// Platforms without `who` (or where it fails) simply have no sessions.
pub fn logged_in() -> Vec<Session> {
    match Command::new("who").output() {
        Ok(output) if output.status.success() => {
            parse_who(&String::from_utf8_lossy(&output.stdout))
        }
        Ok(output) => {
            tracing::debug!(code = ?output.status.code(), "who exited unsuccessfully");
            Vec::new()
        }
        Err(e) => {
            tracing::debug!("who not available: {}", e);
            Vec::new()
        }
    }
}

/// Parse `who` output lines such as
/// `alice    pts/0        2024-05-01 09:30 (10.0.0.5)`
pub fn parse_who(output: &str) -> Vec<Session> {
    output.lines().filter_map(parse_who_line).collect()
}

fn parse_who_line(line: &str) -> Option<Session> {
    let mut tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    let host = match tokens.last() {
        Some(last) if tokens.len() > 2 && last.starts_with('(') && last.ends_with(')') => {
            let host = last.trim_start_matches('(').trim_end_matches(')').to_string();
            tokens.pop();
            Some(host).filter(|h| !h.is_empty())
        }
        _ => None,
    };

    let user = tokens[0].to_string();
    let terminal = tokens.get(1).map(|t| t.to_string());
    let started = if tokens.len() > 2 {
        Some(tokens[2..].join(" "))
    } else {
        None
    };

    Some(Session {
        user,
        terminal,
        host,
        started,
    })
}
