//! Plain-text rendering of reports

use crate::report::{MetricReport, Snapshot};

/// Shown in place of blank or missing values
pub const UNKNOWN: &str = "unknown";

pub const PROGRAM_NAME: &str = "Snowball";

/// Render a report as `key: value` lines, in insertion order
pub fn format_report(report: &MetricReport) -> Vec<String> {
    report
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Some(v) if !v.is_empty() => v,
                _ => UNKNOWN,
            };
            format!("{}: {}", key, value)
        })
        .collect()
}

/// Render a whole snapshot.
///
/// A header with program name, version and generation time comes first. Each
/// section follows as a blank line, a title line, an optional subtitle line and
/// its entries. A subtitle that repeats the previous section's title skips
/// the title line.
pub fn render(snapshot: &Snapshot) -> Vec<String> {
    let mut lines = vec![
        format!("{} {}", PROGRAM_NAME, env!("CARGO_PKG_VERSION")),
        format!("Generated {}", snapshot.generated.format("%Y-%m-%d %H:%M:%S%.6f")),
    ];

    let mut previous_title = None;
    for section in &snapshot.sections {
        lines.push(String::new());
        let continues = section.subtitle.is_some() && previous_title == Some(section.title);
        if !continues {
            lines.push(format!("{}:", section.title));
        }
        if let Some(subtitle) = section.subtitle {
            lines.push(format!("{}:", subtitle));
        }
        lines.extend(format_report(&section.report));
        previous_title = Some(section.title);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Section;
    use chrono::{Local, TimeZone};

    fn sample_report() -> MetricReport {
        let mut report = MetricReport::new();
        report.insert("Name", "box");
        report.insert("Empty", "");
        report.insert_opt("Missing", None);
        report.insert("Total usage", "5.0%");
        report
    }

    #[test]
    fn test_format_lines() {
        let lines = format_report(&sample_report());
        assert_eq!(
            lines,
            vec![
                "Name: box",
                "Empty: unknown",
                "Missing: unknown",
                "Total usage: 5.0%",
            ]
        );
    }

    #[test]
    fn test_format_is_idempotent() {
        let report = sample_report();
        assert_eq!(format_report(&report), format_report(&report));
    }

    #[test]
    fn test_format_does_not_sort() {
        let mut report = MetricReport::new();
        report.insert("b", "1");
        report.insert("a", "2");
        assert_eq!(format_report(&report), vec!["b: 1", "a: 2"]);
    }

    #[test]
    fn test_render_layout() {
        let mut general = MetricReport::new();
        general.insert("Name", "box");
        let mut virt = MetricReport::new();
        virt.insert("total", "10 bytes");
        let mut swap = MetricReport::new();
        swap.insert("total", "0 bytes");

        let snapshot = Snapshot {
            generated: Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
            sections: vec![
                Section::new("General information", general),
                Section::with_subtitle("Memory statistics", "Virtual memory", virt),
                Section::with_subtitle("Memory statistics", "Swap/page memory", swap),
            ],
        };

        let lines = render(&snapshot);
        assert_eq!(lines[0], format!("Snowball {}", env!("CARGO_PKG_VERSION")));
        assert!(lines[1].starts_with("Generated 2024-05-01 09:30:00"));
        assert_eq!(
            lines[2..],
            [
                "",
                "General information:",
                "Name: box",
                "",
                "Memory statistics:",
                "Virtual memory:",
                "total: 10 bytes",
                "",
                "Swap/page memory:",
                "total: 0 bytes",
            ]
        );
    }
}
