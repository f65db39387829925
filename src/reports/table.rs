//! Box-drawn terminal tables.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{DeviceReport, DeviceStatus, QueryStatistics};
use unicode_width::UnicodeWidthStr;

const RULE_WIDTH: usize = 80;

fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Truncate to at most `max_len` characters, marking the cut with `...`.
///
/// Counts characters rather than bytes, so multi-byte text is never split.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max_len).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// One table cell; color is applied after padding so widths stay right.
struct Cell {
    text: String,
    color: Option<&'static str>,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    fn colored(text: impl Into<String>, color: Option<&'static str>) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Terminal table reporter
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn header(&self, title: &str) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        format!("{rule}\n  {}\n{rule}", self.color(title, "bold"))
    }

    fn grid(&self, headers: &[&str], aligns: &[Align], rows: &[Vec<Cell>]) -> String {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.text.width());
            }
        }

        let border = |left: &str, fill: &str, join: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| fill.repeat(w + 2)).collect();
            format!("{left}{}{right}", segments.join(join))
        };
        let line = |cells: Vec<String>| format!("│ {} │", cells.join(" │ "));

        let mut out = vec![border("╒", "═", "╤", "╕")];
        out.push(line(
            headers
                .iter()
                .zip(&widths)
                .map(|(h, w)| self.color(&pad(h, *w, Align::Left), "bold"))
                .collect(),
        ));
        out.push(border("╞", "═", "╪", "╡"));

        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                out.push(border("├", "─", "┼", "┤"));
            }
            out.push(line(
                row.iter()
                    .zip(&widths)
                    .zip(aligns)
                    .map(|((cell, w), align)| {
                        let padded = pad(&cell.text, *w, *align);
                        match cell.color {
                            Some(color) => self.color(&padded, color),
                            None => padded,
                        }
                    })
                    .collect(),
            ));
        }
        out.push(border("╘", "═", "╧", "╛"));
        out.join("\n")
    }

    fn summary_table(&self, reports: &[DeviceReport]) -> String {
        let rows: Vec<Vec<Cell>> = reports
            .iter()
            .map(|report| {
                vec![
                    Cell::plain(&report.name),
                    Cell::plain(&report.platform),
                    Cell::plain(report.interface_count().to_string()),
                    Cell::colored(report.status.label(), Some(status_color(report.status))),
                ]
            })
            .collect();
        self.grid(
            &["Device", "Platform", "Interfaces", "Status"],
            &[Align::Left, Align::Left, Align::Right, Align::Left],
            &rows,
        )
    }

    fn interface_table(&self, report: &DeviceReport, config: &ReportConfig) -> String {
        let rows: Vec<Vec<Cell>> = report
            .interfaces
            .iter()
            .enumerate()
            .map(|(idx, iface)| {
                let ip = if iface.ip_address.is_empty() {
                    "-".to_string()
                } else {
                    truncate(&iface.ip_address, config.ip_width)
                };
                vec![
                    Cell::plain((idx + 1).to_string()),
                    Cell::plain(&iface.name),
                    Cell::plain(&iface.kind),
                    Cell::plain(ip),
                    Cell::colored(
                        &iface.admin_or_config_status,
                        interface_status_color(&iface.admin_or_config_status),
                    ),
                    Cell::plain(truncate(&iface.description, config.description_width)),
                ]
            })
            .collect();
        self.grid(
            &["#", "Interface Name", "Type", "IP Address", "Status", "Description"],
            &[
                Align::Right,
                Align::Left,
                Align::Left,
                Align::Left,
                Align::Left,
                Align::Left,
            ],
            &rows,
        )
    }

    fn statistics(&self, stats: &QueryStatistics) -> String {
        let mut lines = vec![self.header("STATISTICS")];
        lines.push(format!("Devices queried:     {}", stats.devices_queried));
        lines.push(format!("Successful queries:  {}", stats.successful_queries));
        lines.push(format!("Total interfaces:    {}", stats.total_interfaces));
        if stats.dropped_entries > 0 {
            lines.push(self.color(
                &format!("Dropped entries:     {}", stats.dropped_entries),
                "yellow",
            ));
        }
        lines.join("\n")
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TableReporter {
    fn generate_query_report(
        &self,
        reports: &[DeviceReport],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut sections = vec![self.header("DEVICE SUMMARY"), self.summary_table(reports)];

        for report in reports.iter().filter(|r| !r.interfaces.is_empty()) {
            sections.push(String::new());
            sections.push(self.header(&format!("{} - {}", report.name, report.platform)));
            sections.push(self.interface_table(report, config));
            sections.push(format!("Total interfaces: {}", report.interface_count()));

            if config.show_failures && !report.failures.is_empty() {
                sections.push(self.color(
                    &format!("Dropped {} malformed entries:", report.failures.len()),
                    "yellow",
                ));
                for failure in &report.failures {
                    sections.push(self.color(&format!("  ! {failure}"), "dim"));
                }
            }
        }

        let problems: Vec<&DeviceReport> = reports.iter().filter(|r| r.error.is_some()).collect();
        if !problems.is_empty() {
            sections.push(String::new());
            for report in problems {
                let error = report.error.as_deref().unwrap_or_default();
                sections.push(format!(
                    "{} {}: {error}",
                    self.color(report.status.label(), status_color(report.status)),
                    report.name
                ));
            }
        }

        sections.push(String::new());
        sections.push(self.statistics(&QueryStatistics::from_reports(reports)));
        Ok(sections.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    match align {
        Align::Left => format!("{text}{fill}"),
        Align::Right => format!("{fill}{text}"),
    }
}

const fn status_color(status: DeviceStatus) -> &'static str {
    match status {
        DeviceStatus::Success => "green",
        DeviceStatus::NoData | DeviceStatus::Unsupported => "yellow",
        DeviceStatus::Failed => "red",
    }
}

fn interface_status_color(status: &str) -> Option<&'static str> {
    match status.to_ascii_lowercase().as_str() {
        "up" | "configured" => Some("green"),
        "down" => Some("red"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CanonicalInterface;

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("short", 40), "short");
        let long = "a".repeat(45);
        let cut = truncate(&long, 40);
        assert_eq!(cut.chars().count(), 40);
        assert!(cut.ends_with("..."));
        assert_eq!(&cut[..37], &long[..37]);

        let accented = "é".repeat(35);
        let cut = truncate(&accented, 30);
        assert_eq!(cut.chars().count(), 30);
        assert!(cut.starts_with(&"é".repeat(27)));
    }

    #[test]
    fn test_truncate_exact_limit_untouched() {
        let exact = "x".repeat(30);
        assert_eq!(truncate(&exact, 30), exact);
        assert_eq!(truncate("abcdef", 3), "abc");
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("ab", 4, Align::Left), "ab  ");
        assert_eq!(pad("7", 3, Align::Right), "  7");
    }

    #[test]
    fn test_report_layout() {
        let mut ok = DeviceReport::with_platform("asa-1", "cisco-asa-cli-6.18", DeviceStatus::Success);
        ok.interfaces = vec![CanonicalInterface::new("GigabitEthernet0", "GigabitEthernet")
            .with_ip("192.168.1.1 255.255.255.0")
            .with_status("Configured")
            .with_description("d".repeat(50))];
        let failed = DeviceReport::failed("edge-9", "unable to determine platform for edge-9");

        let out = TableReporter::new()
            .no_color()
            .generate_query_report(&[ok, failed], &ReportConfig::default())
            .expect("report");

        assert!(out.contains("DEVICE SUMMARY"));
        assert!(out.contains("│ Device │ Platform"));
        assert!(out.contains("asa-1 - cisco-asa-cli-6.18"));
        assert!(out.contains(&format!("{}...", "d".repeat(37))));
        assert!(!out.contains(&"d".repeat(38)));
        assert!(out.contains("Unknown"));
        assert!(out.contains("Failed edge-9: unable to determine platform"));
        assert!(out.contains("Devices queried:     2"));
        assert!(out.contains("Successful queries:  1"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_empty_ip_rendered_as_dash() {
        let mut report = DeviceReport::with_platform("xr-1", "cisco-iosxr-cli-7.52", DeviceStatus::Success);
        report.interfaces = vec![CanonicalInterface::new("Loopback0", "Loopback").with_status("Configured")];
        let out = TableReporter::new()
            .no_color()
            .generate_query_report(&[report], &ReportConfig::default())
            .expect("report");
        assert!(out.lines().any(|l| l.contains("Loopback0") && l.contains("│ -")));
    }

    #[test]
    fn test_colors_applied_when_enabled() {
        let report = DeviceReport::with_platform("mx-1", "juniper-junos-nc-4.6", DeviceStatus::NoData);
        let out = TableReporter::new()
            .generate_query_report(&[report], &ReportConfig::default())
            .expect("report");
        assert!(out.contains("\x1b[33mNo Data"));
    }
}
