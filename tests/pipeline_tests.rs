//! Integration tests for the batch query pipeline.
//!
//! A fixture-backed [`DeviceSource`] stands in for NSO so every status
//! branch can be driven without a network.

use netif_tools::model::{DeviceStatus, QueryStatistics, VendorFamily, UNKNOWN_PLATFORM};
use netif_tools::pipeline::{query_device, query_devices, DeviceSource};
use netif_tools::restconf::ClientError;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture(name: &str) -> Value {
    let content = std::fs::read_to_string(Path::new(FIXTURES_DIR).join(name)).expect("fixture readable");
    serde_json::from_str(&content).expect("fixture is JSON")
}

enum Payload {
    Data(Value),
    Empty,
    Broken,
}

#[derive(Default)]
struct Inventory {
    order: Vec<String>,
    platforms: HashMap<String, String>,
    payloads: HashMap<String, Payload>,
    fetches: AtomicUsize,
}

impl Inventory {
    fn device(mut self, name: &str, platform: Option<&str>, payload: Payload) -> Self {
        self.order.push(name.to_string());
        if let Some(platform) = platform {
            self.platforms.insert(name.to_string(), platform.to_string());
        }
        self.payloads.insert(name.to_string(), payload);
        self
    }
}

impl DeviceSource for Inventory {
    fn list_devices(&self) -> Result<Vec<String>, ClientError> {
        Ok(self.order.clone())
    }

    fn detect_platform(&self, device: &str) -> Result<String, ClientError> {
        self.platforms
            .get(device)
            .cloned()
            .ok_or_else(|| ClientError::PlatformNotFound {
                device: device.to_string(),
            })
    }

    fn fetch_interfaces(
        &self,
        device: &str,
        _family: VendorFamily,
    ) -> Result<Option<Value>, ClientError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match self.payloads.get(device) {
            Some(Payload::Data(value)) => Ok(Some(value.clone())),
            Some(Payload::Empty) | None => Ok(None),
            Some(Payload::Broken) => Err(ClientError::Transport {
                url: format!("http://nso:8080/restconf/data/tailf-ncs:devices/device={device}"),
                message: "connection reset".to_string(),
            }),
        }
    }
}

fn mixed_inventory() -> Inventory {
    Inventory::default()
        .device("asa-fw-01", Some("cisco-asa-cli-6.18"), Payload::Data(fixture("asa.json")))
        .device("xr-core-01", Some("cisco-iosxr-cli-7.52"), Payload::Data(fixture("iosxr.json")))
        .device("mx-edge-01", Some("juniper-junos-nc-4.6"), Payload::Empty)
        .device("nx-agg-01", Some("cisco-nx-cli-5.20"), Payload::Data(json!({})))
        .device("ghost-01", None, Payload::Empty)
        .device("fgt-01", Some("fortinet-fortios-cli-5.5"), Payload::Broken)
}

#[test]
fn test_every_status_is_resolved() {
    let source = mixed_inventory();
    let devices = source.list_devices().expect("inventory");
    let reports = query_devices(&source, &devices, false);

    let statuses: Vec<_> = reports.iter().map(|r| (r.name.as_str(), r.status)).collect();
    assert_eq!(
        statuses,
        [
            ("asa-fw-01", DeviceStatus::Success),
            ("xr-core-01", DeviceStatus::Success),
            ("mx-edge-01", DeviceStatus::NoData),
            ("nx-agg-01", DeviceStatus::Unsupported),
            ("ghost-01", DeviceStatus::Failed),
            ("fgt-01", DeviceStatus::Failed),
        ]
    );

    let ghost = &reports[4];
    assert_eq!(ghost.platform, UNKNOWN_PLATFORM);
    assert_eq!(ghost.error.as_deref(), Some("unable to determine platform for ghost-01"));

    let unsupported = &reports[3];
    assert_eq!(unsupported.family, VendorFamily::Unsupported);
    assert!(unsupported.error.as_deref().unwrap_or_default().contains("cisco-nx-cli-5.20"));

    let broken = &reports[5];
    assert_eq!(broken.platform, "fortinet-fortios-cli-5.5");
    assert!(broken.error.as_deref().unwrap_or_default().contains("connection reset"));
}

#[test]
fn test_unsupported_and_undetected_devices_are_never_fetched() {
    let source = Inventory::default()
        .device("nx-agg-01", Some("cisco-nx-cli-5.20"), Payload::Data(json!({})))
        .device("ghost-01", None, Payload::Empty);
    let devices = source.list_devices().expect("inventory");
    let _ = query_devices(&source, &devices, false);
    assert_eq!(source.fetches.load(Ordering::SeqCst), 0);
}

#[test]
fn test_openconfig_ned_is_unsupported_without_fetch() {
    let source = Inventory::default().device(
        "leaf-1",
        Some("cisco-nx-gnmi-1.0"),
        Payload::Data(fixture("openconfig_gnmi.json")),
    );
    let report = query_device(&source, "leaf-1");

    assert_eq!(report.status, DeviceStatus::Unsupported);
    assert_eq!(report.family, VendorFamily::OpenConfig);
    assert_eq!(report.platform, "cisco-nx-gnmi-1.0");
    assert!(report.interfaces.is_empty());
    assert_eq!(source.fetches.load(Ordering::SeqCst), 0);
}

#[test]
fn test_statistics() {
    let source = mixed_inventory();
    let devices = source.list_devices().expect("inventory");
    let reports = query_devices(&source, &devices, true);

    let stats = QueryStatistics::from_reports(&reports);
    assert_eq!(stats.devices_queried, 6);
    assert_eq!(stats.successful_queries, 2);
    // 3 ASA + 5 IOS-XR
    assert_eq!(stats.total_interfaces, 8);
    assert_eq!(stats.dropped_entries, 1);
}

#[test]
fn test_parallel_preserves_inventory_order() {
    let mut source = Inventory::default();
    for i in 0..64 {
        let (platform, payload) = if i % 3 == 0 {
            ("juniper-junos-nc-4.6", Payload::Data(fixture("junos.json")))
        } else if i % 3 == 1 {
            ("fortinet-fortios-cli-5.5", Payload::Data(fixture("fortios.json")))
        } else {
            ("cisco-asa-cli-6.18", Payload::Empty)
        };
        source = source.device(&format!("dev-{i:02}"), Some(platform), payload);
    }
    let devices = source.list_devices().expect("inventory");

    let sequential = query_devices(&source, &devices, false);
    let parallel = query_devices(&source, &devices, true);

    let names: Vec<_> = parallel.iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, devices);
    assert_eq!(sequential, parallel);
}

#[test]
fn test_single_device_report_carries_failures() {
    let source = mixed_inventory();
    let report = query_device(&source, "asa-fw-01");
    assert_eq!(report.family, VendorFamily::Asa);
    assert_eq!(report.interface_count(), 3);
    assert_eq!(report.failures.len(), 1);
    assert!(report.error.is_none());
}

#[test]
fn test_empty_object_payload_is_no_data() {
    let source = Inventory::default().device(
        "xr-spare-01",
        Some("cisco-iosxr-cli-7.52"),
        Payload::Data(json!({})),
    );
    assert_eq!(query_device(&source, "xr-spare-01").status, DeviceStatus::NoData);
}

#[test]
fn test_empty_inventory() {
    let source = Inventory::default();
    assert!(query_devices(&source, &[], true).is_empty());
}
