//! CSV report generator.
//!
//! One row per interface. Devices without interfaces still get a single
//! row so failed and empty devices are visible in a spreadsheet.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::DeviceReport;
use std::fmt::Write as _;

const HEADER: &str =
    "Device,Platform,Status,Interface,Type,IP Address,Admin Status,Oper Status,Description\n";

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate_query_report(
        &self,
        reports: &[DeviceReport],
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::from(HEADER);

        for report in reports {
            if report.interfaces.is_empty() {
                writeln!(
                    content,
                    "\"{}\",\"{}\",\"{}\",,,,,,\"{}\"",
                    escape_csv(&report.name),
                    escape_csv(&report.platform),
                    report.status.label(),
                    escape_csv(report.error.as_deref().unwrap_or_default())
                )?;
                continue;
            }

            for iface in &report.interfaces {
                writeln!(
                    content,
                    "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\"",
                    escape_csv(&report.name),
                    escape_csv(&report.platform),
                    report.status.label(),
                    escape_csv(&iface.name),
                    escape_csv(&iface.kind),
                    escape_csv(&iface.ip_address),
                    escape_csv(&iface.admin_or_config_status),
                    escape_csv(iface.oper_status.as_deref().unwrap_or_default()),
                    escape_csv(&iface.description)
                )?;
            }
        }

        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

/// Escape a value for use inside a double-quoted CSV field.
fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"").replace(['\n', '\r'], " ")
}
