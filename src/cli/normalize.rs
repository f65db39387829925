//! Normalize command handler.
//!
//! Implements the `normalize` subcommand for captured payload files.

use crate::config::AppConfig;
use crate::model::{DeviceReport, DeviceStatus};
use crate::normalize::InterfaceNormalizer;
use crate::pipeline::{exit_codes, load_payload, output_report};
use anyhow::Result;
use std::path::Path;

/// Normalize a payload file and render it like a single-device query.
pub fn run_normalize(
    path: &Path,
    platform: &str,
    device: Option<String>,
    config: &AppConfig,
) -> Result<i32> {
    let device = device.unwrap_or_else(|| device_name_from_path(path));
    let raw = load_payload(path)?;

    let outcome = InterfaceNormalizer::for_device(&device).normalize(&raw, platform)?;
    if outcome.has_failures() {
        tracing::warn!(
            "{device}: dropped {} malformed entr{}",
            outcome.failures.len(),
            if outcome.failures.len() == 1 { "y" } else { "ies" }
        );
    }

    let status = if outcome.is_empty() {
        DeviceStatus::NoData
    } else {
        DeviceStatus::Success
    };
    let mut report = DeviceReport::with_platform(device, platform, status);
    report.interfaces = outcome.interfaces;
    report.failures = outcome.failures;

    output_report(config, &[report], Some(path.display().to_string()))?;
    Ok(exit_codes::SUCCESS)
}

/// `captures/xr-core-01.json` → `xr-core-01`.
fn device_name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| crate::model::UNKNOWN_NAME.to_string())
}
