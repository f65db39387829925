//! Per-device query pipeline: detect, classify, fetch, normalize.

use super::source::DeviceSource;
use crate::model::{DeviceReport, DeviceStatus, VendorFamily};
use crate::normalize::{InterfaceNormalizer, NormalizeError};
use rayon::prelude::*;
use serde_json::Value;

/// Query every device and resolve its status.
///
/// Devices are independent, so with `parallel` set they are processed on the
/// rayon pool. Reports are returned in the order of `devices` either way.
pub fn query_devices<S>(source: &S, devices: &[String], parallel: bool) -> Vec<DeviceReport>
where
    S: DeviceSource + ?Sized,
{
    if parallel {
        devices
            .par_iter()
            .map(|device| query_device(source, device))
            .collect()
    } else {
        devices
            .iter()
            .map(|device| query_device(source, device))
            .collect()
    }
}

/// Query a single device.
pub fn query_device<S>(source: &S, device: &str) -> DeviceReport
where
    S: DeviceSource + ?Sized,
{
    tracing::info!("Processing device: {device}");

    let platform = match source.detect_platform(device) {
        Ok(platform) => platform,
        Err(e) => {
            tracing::warn!("Unable to determine platform for {device}: {e}");
            return DeviceReport::failed(device, e.to_string());
        }
    };

    let family = VendorFamily::classify(&platform);
    if !family.is_nso_managed() {
        let err = NormalizeError::UnsupportedVendor {
            platform: platform.clone(),
        };
        tracing::warn!("{device}: {err}");
        return DeviceReport::with_platform(device, platform, DeviceStatus::Unsupported)
            .with_error(err.to_string());
    }

    let raw = match source.fetch_interfaces(device, family) {
        Ok(Some(raw)) if has_data(&raw) => raw,
        Ok(_) => {
            tracing::info!("{device}: no interface data");
            return DeviceReport::with_platform(device, platform, DeviceStatus::NoData);
        }
        Err(e) => {
            tracing::warn!("Error getting interfaces for {device}: {e}");
            return DeviceReport::with_platform(device, platform, DeviceStatus::Failed)
                .with_error(e.to_string());
        }
    };

    match InterfaceNormalizer::for_device(device).normalize(&raw, &platform) {
        Ok(outcome) => {
            tracing::info!("{device}: retrieved {} interface(s)", outcome.len());
            let mut report = DeviceReport::with_platform(device, platform, DeviceStatus::Success);
            report.interfaces = outcome.interfaces;
            report.failures = outcome.failures;
            report
        }
        Err(e) => DeviceReport::with_platform(device, platform, DeviceStatus::Unsupported)
            .with_error(e.to_string()),
    }
}

fn has_data(raw: &Value) -> bool {
    match raw {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}
