//! Integration tests for reports, configuration, verification and push
//! payload helpers.

use netif_tools::config::{generate_example_config, load_config_file, AppConfig};
use netif_tools::model::{DeviceReport, DeviceStatus};
use netif_tools::normalize::{normalize, normalize_openconfig};
use netif_tools::openconfig::{
    build_interface_config, detect_interface_type, load_expected_interfaces, verify_interfaces,
    VerifyError,
};
use netif_tools::reports::{create_reporter_with_options, ReportConfig, ReportFormat};
use netif_tools::restconf::{extract_device_name, load_xml_file};
use netif_tools::Validatable;
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn fixture(name: &str) -> Value {
    let content = std::fs::read_to_string(fixture_path(name)).expect("fixture readable");
    serde_json::from_str(&content).expect("fixture is JSON")
}

fn sample_reports() -> Vec<DeviceReport> {
    let platform = "cisco-asa-cli-6.18";
    let outcome = normalize(&fixture("asa.json"), platform).expect("asa");
    let mut asa = DeviceReport::with_platform("asa-fw-01", platform, DeviceStatus::Success);
    asa.interfaces = outcome.interfaces;
    asa.failures = outcome.failures;

    let platform = "fortinet-fortios-cli-5.5";
    let outcome = normalize(&fixture("fortios.json"), platform).expect("fortios");
    let mut fgt = DeviceReport::with_platform("fgt-01", platform, DeviceStatus::Success);
    fgt.interfaces = outcome.interfaces;

    vec![
        asa,
        fgt,
        DeviceReport::with_platform("mx-edge-01", "juniper-junos-nc-4.6", DeviceStatus::NoData),
        DeviceReport::failed("ghost-01", "unable to determine platform for ghost-01"),
    ]
}

// ============================================================================
// Reports
// ============================================================================

mod reports {
    use super::*;

    fn render(format: ReportFormat) -> String {
        create_reporter_with_options(format, false)
            .generate_query_report(&sample_reports(), &ReportConfig::default())
            .expect("report")
    }

    #[test]
    fn test_table_report() {
        let out = render(ReportFormat::Table);
        assert!(out.contains("DEVICE SUMMARY"));
        assert!(out.contains("asa-fw-01 - cisco-asa-cli-6.18"));
        assert!(out.contains("fgt-01 - fortinet-fortios-cli-5.5"));
        // no interface table for devices without interfaces
        assert!(!out.contains("mx-edge-01 - juniper"));
        assert!(out.contains("Dropped 1 malformed entries:"));
        assert!(out.contains("Failed ghost-01: unable to determine platform"));
        assert!(out.contains("Total interfaces:    6"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_json_report() {
        let out = render(ReportFormat::Json);
        let parsed: Value = serde_json::from_str(&out).expect("valid JSON");
        assert_eq!(parsed["metadata"]["tool"]["name"], "netif-tools");
        assert_eq!(parsed["summary"]["devices_queried"], 4);
        assert_eq!(parsed["summary"]["successful_queries"], 2);
        assert_eq!(parsed["devices"][0]["interfaces"][0]["name"], "GigabitEthernet0/0");
        assert_eq!(parsed["devices"][2]["status"], "no-data");
        assert_eq!(parsed["devices"][3]["platform"], "Unknown");
    }

    #[test]
    fn test_csv_report() {
        let out = render(ReportFormat::Csv);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "Device,Platform,Status,Interface,Type,IP Address,Admin Status,Oper Status,Description"
        );
        // 3 ASA + 3 FortiOS interface rows, one row each for the empty devices
        assert_eq!(lines.len(), 1 + 6 + 2);
        assert!(lines[1].starts_with("\"asa-fw-01\",\"cisco-asa-cli-6.18\",\"Success\",\"GigabitEthernet0/0\""));
        assert_eq!(
            *lines.last().expect("rows"),
            "\"ghost-01\",\"Unknown\",\"Failed\",,,,,,\"unable to determine platform for ghost-01\""
        );
    }
}

// ============================================================================
// Configuration
// ============================================================================

mod config {
    use super::*;

    #[test]
    fn test_example_config_loads_as_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(generate_example_config().as_bytes()).expect("write");

        let loaded = load_config_file(file.path()).expect("parse example");
        let defaults = AppConfig::default();
        assert_eq!(loaded.nso.host, defaults.nso.host);
        assert_eq!(loaded.nso.port, defaults.nso.port);
        assert!(loaded.output.format.is_none());
        assert!(loaded.validate().is_empty());
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "nso:\n  host: nso.lab.example\n  port: 8888\noutput:\n  format: csv").expect("write");

        let loaded = load_config_file(file.path()).expect("parse");
        assert_eq!(loaded.nso.host, "nso.lab.example");
        assert_eq!(loaded.nso.port, 8888);
        assert_eq!(loaded.nso.base_url(), "http://nso.lab.example:8888");
        assert_eq!(loaded.output.format, Some(ReportFormat::Csv));
        assert_eq!(loaded.nso.username, AppConfig::default().nso.username);
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let config = AppConfig::builder().nso_host("").timeout_secs(0).build();
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.field.contains("host")));
        assert!(errors.iter().any(|e| e.field.contains("timeout")));
    }
}

// ============================================================================
// Verification
// ============================================================================

mod verification {
    use super::*;

    #[test]
    fn test_expected_interfaces_all_match() {
        let actual = normalize_openconfig(&fixture("openconfig_gnmi.json")).interfaces;
        let expected = load_expected_interfaces(&fixture_path("expected_interfaces.json"), "leaf1")
            .expect("leaf1 present");

        let report = verify_interfaces(&expected, &actual);
        assert!(report.is_success(), "unexpected failures: {report:?}");
        assert_eq!(report.matched, ["Ethernet1", "Ethernet2", "Loopback0"]);
    }

    #[test]
    fn test_expected_interfaces_with_drift() {
        let actual = normalize_openconfig(&fixture("openconfig_gnmi.json")).interfaces;
        let expected = load_expected_interfaces(&fixture_path("expected_interfaces.json"), "leaf2")
            .expect("leaf2 present");

        let report = verify_interfaces(&expected, &actual);
        assert!(!report.is_success());
        assert_eq!(report.missing, ["Ethernet48"]);
        assert_eq!(report.mismatches.len(), 1);
        assert_eq!(report.mismatches[0].expected, "to spine2");
        assert_eq!(report.mismatches[0].actual, "to spine1");
    }

    #[test]
    fn test_unknown_device_and_missing_file() {
        let err = load_expected_interfaces(&fixture_path("expected_interfaces.json"), "leaf9").unwrap_err();
        assert!(matches!(err, VerifyError::DeviceNotFound { .. }));

        let err = load_expected_interfaces(&fixture_path("does-not-exist.json"), "leaf1").unwrap_err();
        assert!(matches!(err, VerifyError::Io { .. }));
    }

    #[test]
    fn test_generated_config_normalizes_back() {
        let payload = build_interface_config("Loopback100", "10.100.100.1", 32, Some("lab"));
        let iface = &normalize_openconfig(&payload).interfaces[0];
        assert_eq!(iface.name, "Loopback100");
        assert_eq!(iface.kind, detect_interface_type("Loopback100"));
        assert_eq!(iface.ip_address, "10.100.100.1/32");
        assert_eq!(iface.admin_or_config_status, "UP");
        assert_eq!(iface.description, "lab");
    }
}

// ============================================================================
// Push payloads
// ============================================================================

#[test]
fn test_push_payload_device_name() {
    let xml = load_xml_file(&fixture_path("push_asa.xml")).expect("xml readable");
    assert_eq!(extract_device_name(&xml).as_deref(), Some("asa-fw-01"));
    assert_eq!(extract_device_name("<config/>"), None);
}

#[test]
fn test_interface_type_guesses() {
    assert_eq!(detect_interface_type("Loopback0"), "iana-if-type:softwareLoopback");
    assert_eq!(detect_interface_type("Ethernet1"), "iana-if-type:ethernetCsmacd");
    assert_eq!(detect_interface_type("Vlan200"), "iana-if-type:l3ipvlan");
    assert_eq!(detect_interface_type("mgmt0"), "iana-if-type:other");
}
