//! Report generation for device query results.
//!
//! Three output formats are provided:
//! - Table: Box-drawn terminal tables with a device summary, one interface
//!   table per device and closing statistics
//! - JSON: Structured data for programmatic integration
//! - CSV: One row per interface for spreadsheet import

mod csv;
mod json;
mod table;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use table::{truncate, TableReporter};
pub use types::{ReportConfig, ReportFormat, ReportMetadata, DESCRIPTION_WIDTH, IP_ADDRESS_WIDTH};

use crate::model::DeviceReport;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for a batch of device results
    fn generate_query_report(
        &self,
        reports: &[DeviceReport],
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_query_report(
        &self,
        reports: &[DeviceReport],
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_query_report(reports, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
///
/// Only the table reporter emits color; the flag is ignored for the others.
#[must_use]
pub fn create_reporter_with_options(format: ReportFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Table => {
            if use_color {
                Box::new(TableReporter::new())
            } else {
                Box::new(TableReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_formats() {
        for format in [ReportFormat::Table, ReportFormat::Json, ReportFormat::Csv] {
            assert_eq!(create_reporter(format).format(), format);
            assert_eq!(create_reporter_with_options(format, false).format(), format);
        }
    }

    #[test]
    fn test_write_query_report_writes_generated_text() {
        let reporter = create_reporter(ReportFormat::Csv);
        let mut buf = Vec::new();
        reporter
            .write_query_report(&[], &ReportConfig::default(), &mut buf)
            .expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.starts_with("Device,Platform,Status"));
    }
}
