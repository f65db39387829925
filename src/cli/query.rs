//! Query command handler.
//!
//! Implements the `query` subcommand: list devices in NSO, run every one
//! through the pipeline and render the result.

use crate::config::AppConfig;
use crate::model::{DeviceReport, DeviceStatus};
use crate::pipeline::{exit_codes, output_report, query_devices, DeviceSource};
use crate::restconf::RestconfClient;
use anyhow::{Context, Result};

/// Run the query command against NSO.
pub fn run_query(config: &AppConfig) -> Result<i32> {
    let base_url = config.nso.base_url();
    let client = RestconfClient::new(config.nso.to_client_config())
        .context("failed to create RESTCONF client")?;

    if !config.behavior.quiet {
        tracing::info!("Connecting to NSO at {base_url}");
    }
    client
        .test_connectivity()
        .with_context(|| format!("cannot reach NSO RESTCONF API at {base_url}"))?;

    let reports = query_source(&client, config)?;
    output_report(config, &reports, Some(base_url))?;
    Ok(query_exit_code(&reports))
}

/// List (or take from config) the devices and query them.
fn query_source<S: DeviceSource + ?Sized>(source: &S, config: &AppConfig) -> Result<Vec<DeviceReport>> {
    let devices = if config.behavior.devices.is_empty() {
        source.list_devices().context("failed to list devices")?
    } else {
        config.behavior.devices.clone()
    };

    if devices.is_empty() {
        tracing::warn!("No devices found in NSO");
        return Ok(Vec::new());
    }

    if !config.behavior.quiet {
        tracing::info!(
            "Querying {} device(s){}",
            devices.len(),
            if config.behavior.sequential { " sequentially" } else { "" }
        );
    }
    Ok(query_devices(source, &devices, !config.behavior.sequential))
}

/// Failed devices make the run fail; empty or unsupported ones do not.
fn query_exit_code(reports: &[DeviceReport]) -> i32 {
    if reports.iter().any(|r| r.status == DeviceStatus::Failed) {
        exit_codes::FAILURES
    } else {
        exit_codes::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VendorFamily;
    use crate::restconf::ClientError;
    use serde_json::{json, Value};

    struct Inventory;

    impl DeviceSource for Inventory {
        fn list_devices(&self) -> Result<Vec<String>, ClientError> {
            Ok(vec!["fw-1".to_string(), "nx-1".to_string()])
        }

        fn detect_platform(&self, device: &str) -> Result<String, ClientError> {
            Ok(match device {
                "fw-1" => "cisco-asa-cli-6.18".to_string(),
                _ => "cisco-nx-cli-5.20".to_string(),
            })
        }

        fn fetch_interfaces(&self, _device: &str, _family: VendorFamily) -> Result<Option<Value>, ClientError> {
            Ok(Some(json!({
                "tailf-ned-cisco-asa:interface": {"GigabitEthernet": [{"name": "0"}]}
            })))
        }
    }

    #[test]
    fn test_query_source_lists_devices() {
        let reports = query_source(&Inventory, &AppConfig::default()).expect("query");
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].status, DeviceStatus::Success);
        assert_eq!(reports[1].status, DeviceStatus::Unsupported);
        assert_eq!(query_exit_code(&reports), exit_codes::SUCCESS);
    }

    #[test]
    fn test_query_source_honors_device_filter() {
        let config = AppConfig::builder()
            .devices(vec!["fw-1".to_string()])
            .sequential(true)
            .build();
        let reports = query_source(&Inventory, &config).expect("query");
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].name, "fw-1");
    }

    struct GnmiInventory;

    impl DeviceSource for GnmiInventory {
        fn list_devices(&self) -> Result<Vec<String>, ClientError> {
            Ok(vec!["leaf-1".to_string()])
        }

        fn detect_platform(&self, _device: &str) -> Result<String, ClientError> {
            Ok("cisco-nx-gnmi-1.0".to_string())
        }

        fn fetch_interfaces(&self, _device: &str, family: VendorFamily) -> Result<Option<Value>, ClientError> {
            Err(ClientError::NoInterfacePath { family })
        }
    }

    #[test]
    fn test_openconfig_ned_is_unsupported_not_failed() {
        let reports = query_source(&GnmiInventory, &AppConfig::default()).expect("query");
        assert_eq!(reports[0].status, DeviceStatus::Unsupported);
        assert_eq!(reports[0].family, VendorFamily::OpenConfig);
        assert_eq!(query_exit_code(&reports), exit_codes::SUCCESS);
    }

    #[test]
    fn test_failed_device_sets_exit_code() {
        let reports = [DeviceReport::failed("edge-1", "timeout")];
        assert_eq!(query_exit_code(&reports), exit_codes::FAILURES);
    }
}
