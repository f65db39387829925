//! Report output stage.
//!
//! Turns device reports into the configured format and writes them to
//! stdout or a file.

use super::{auto_detect_format, should_use_color, write_output, OutputTarget};
use crate::config::AppConfig;
use crate::model::DeviceReport;
use crate::reports::create_reporter_with_options;
use anyhow::Result;

/// Output a query report to the configured destination.
///
/// `source` names where the device data came from (NSO URL or payload
/// file) and ends up in the JSON metadata.
pub fn output_report(
    config: &AppConfig,
    reports: &[DeviceReport],
    source: Option<String>,
) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_output = auto_detect_format(config.output.format, &output_target);

    let mut report_config = config.report_config();
    if let Some(source) = source {
        report_config.metadata = report_config.metadata.with_source(source);
    }

    let use_color = should_use_color(config.output.no_color, &output_target);
    let reporter = create_reporter_with_options(effective_output, use_color);
    let report = reporter.generate_query_report(reports, &report_config)?;

    write_output(&report, &output_target, config.behavior.quiet)
}
