//! Integration tests for vendor normalization.
//!
//! Every vendor is exercised against a captured-style payload under
//! `tests/fixtures`.

use netif_tools::model::{CanonicalInterface, VendorFamily};
use netif_tools::normalize::{normalize, normalize_openconfig, normalize_str, NormalizeError};
use serde_json::{json, Value};
use std::path::Path;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture(name: &str) -> Value {
    let path = Path::new(FIXTURES_DIR).join(name);
    let content = std::fs::read_to_string(&path).expect("fixture readable");
    serde_json::from_str(&content).expect("fixture is JSON")
}

fn names(interfaces: &[CanonicalInterface]) -> Vec<&str> {
    interfaces.iter().map(|i| i.name.as_str()).collect()
}

// ============================================================================
// Cisco ASA
// ============================================================================

mod asa {
    use super::*;

    #[test]
    fn test_two_group_scenario() {
        let raw = json!({
            "tailf-ned-cisco-asa:interface": {
                "GigabitEthernet": [{"name": "0", "ip": {"address": {"ip": {"host-ip": "192.168.1.1", "mask": "255.255.255.0"}}}}],
                "Loopback": [{"name": "0"}]
            }
        });
        let outcome = normalize(&raw, "cisco-asa-cli-6.18").expect("asa");
        assert_eq!(outcome.len(), 2);

        let gig = &outcome.interfaces[0];
        assert_eq!(gig.name, "GigabitEthernet0");
        assert_eq!(gig.ip_address, "192.168.1.1 255.255.255.0");
        assert_eq!(gig.admin_or_config_status, "Configured");

        let lo = &outcome.interfaces[1];
        assert_eq!(lo.name, "Loopback0");
        assert_eq!(lo.ip_address, "");
        assert_eq!(lo.admin_or_config_status, "Configured");
    }

    #[test]
    fn test_fixture_with_malformed_entry() {
        let outcome = normalize(&fixture("asa.json"), "cisco-asa-cli-6.18").expect("asa");
        assert_eq!(
            names(&outcome.interfaces),
            ["GigabitEthernet0/0", "GigabitEthernet0/1", "Management0/0"]
        );
        assert_eq!(outcome.interfaces[0].kind, "GigabitEthernet");
        assert_eq!(outcome.interfaces[2].description, "oob");

        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].index, 2);
        assert_eq!(outcome.failures[0].group.as_deref(), Some("GigabitEthernet"));
    }
}

// ============================================================================
// Cisco IOS-XR
// ============================================================================

mod iosxr {
    use super::*;

    #[test]
    fn test_fixture() {
        let outcome = normalize(&fixture("iosxr.json"), "cisco-iosxr-cli-7.52").expect("iosxr");
        assert!(outcome.failures.is_empty());
        assert_eq!(
            names(&outcome.interfaces),
            [
                "Loopback0",
                "GigabitEthernet0/0/0/0",
                "GigabitEthernet0/0/0/1",
                "GigabitEthernet0/0/0/2",
                "Bundle-Ether1"
            ]
        );

        let by_name = |name: &str| {
            outcome
                .interfaces
                .iter()
                .find(|i| i.name == name)
                .expect("interface present")
        };
        assert_eq!(by_name("GigabitEthernet0/0/0/0").ip_address, "10.0.0.1 255.255.255.0");
        assert_eq!(by_name("GigabitEthernet0/0/0/1").ip_address, "10.0.1.1");
        assert_eq!(by_name("GigabitEthernet0/0/0/2").ip_address, "");
        assert_eq!(by_name("Bundle-Ether1").kind, "Bundle-Ether");
    }

    #[test]
    fn test_ios_xr_spelling_is_recognized() {
        let raw = json!({"tailf-ned-cisco-ios-xr:interface": {"Loopback": [{"id": 1}]}});
        let outcome = normalize(&raw, "cisco-IOS-XR-7").expect("iosxr");
        assert_eq!(outcome.interfaces[0].name, "Loopback1");
    }
}

// ============================================================================
// Juniper Junos
// ============================================================================

mod junos {
    use super::*;

    #[test]
    fn test_fixture() {
        let outcome = normalize(&fixture("junos.json"), "juniper-junos-nc-4.6").expect("junos");
        assert_eq!(names(&outcome.interfaces), ["ge-0/0/0", "ge-0/0/1", "lo0"]);
        assert_eq!(
            outcome.interfaces[0].ip_address,
            "192.0.2.1/30, 192.0.2.5/30, 198.51.100.1/24"
        );
        assert_eq!(outcome.interfaces[1].ip_address, "");
        assert!(outcome.interfaces.iter().all(|i| i.kind == "Physical"));
    }
}

// ============================================================================
// Fortinet FortiOS
// ============================================================================

mod fortios {
    use super::*;

    #[test]
    fn test_fixture() {
        let outcome = normalize(&fixture("fortios.json"), "fortinet-fortios-cli-5.5").expect("fortios");
        assert_eq!(names(&outcome.interfaces), ["port1", "port2", "ssl.root"]);

        let port1 = &outcome.interfaces[0];
        assert_eq!(port1.description, "Access: ping, https | VDOM: root | uplink");
        assert_eq!(port1.ip_address, "198.51.100.10 255.255.255.0");
        assert_eq!(port1.admin_or_config_status, "up");

        assert_eq!(outcome.interfaces[1].description, "VDOM: root");
        assert_eq!(outcome.interfaces[2].admin_or_config_status, "unknown");
    }
}

// ============================================================================
// OpenConfig
// ============================================================================

mod openconfig {
    use super::*;

    #[test]
    fn test_gnmi_fixture() {
        let raw = fixture("openconfig_gnmi.json");
        let outcome = normalize_openconfig(&raw);
        assert_eq!(names(&outcome.interfaces), ["Ethernet1", "Ethernet2", "Loopback0"]);

        let eth1 = &outcome.interfaces[0];
        assert_eq!(eth1.admin_or_config_status, "UP");
        assert_eq!(eth1.oper_status.as_deref(), Some("UP"));
        assert_eq!(eth1.ip_address, "10.0.1.1/31");

        let eth2 = &outcome.interfaces[1];
        assert_eq!(eth2.admin_or_config_status, "DOWN");
        assert_eq!(eth2.oper_status.as_deref(), Some("DOWN"));

        let lo = &outcome.interfaces[2];
        assert_eq!(lo.admin_or_config_status, "UP");
        assert_eq!(lo.ip_address, "10.255.2.1/32");
        assert_eq!(lo.kind, "iana-if-type:softwareLoopback");
    }

    #[test]
    fn test_tag_dispatch_matches_direct_call() {
        let raw = fixture("openconfig_gnmi.json");
        assert_eq!(normalize(&raw, "openconfig").expect("openconfig"), normalize_openconfig(&raw));
    }
}

// ============================================================================
// Dispatch and purity
// ============================================================================

#[test]
fn test_unsupported_platform() {
    let err = normalize(&fixture("asa.json"), "cisco-nx-cli-5.20").unwrap_err();
    assert_eq!(
        err,
        NormalizeError::UnsupportedVendor {
            platform: "cisco-nx-cli-5.20".to_string()
        }
    );
}

#[test]
fn test_normalization_is_pure() {
    let cases = [
        ("asa.json", "cisco-asa-cli-6.18"),
        ("iosxr.json", "cisco-iosxr-cli-7.52"),
        ("junos.json", "juniper-junos-nc-4.6"),
        ("fortios.json", "fortinet-fortios-cli-5.5"),
        ("openconfig_gnmi.json", "openconfig"),
    ];
    for (file, tag) in cases {
        let raw = fixture(file);
        let first = normalize(&raw, tag).expect("supported");
        let second = normalize(&raw, tag).expect("supported");
        assert_eq!(first, second, "{file} normalized differently twice");
        assert_ne!(VendorFamily::classify(tag), VendorFamily::Unsupported);
    }
}

#[test]
fn test_wrong_vendor_payload_yields_nothing() {
    let outcome = normalize(&fixture("junos.json"), "cisco-asa-cli-6.18").expect("asa");
    assert!(outcome.is_empty());
    assert!(outcome.failures.is_empty());
}

#[test]
fn test_normalize_str() {
    let content = std::fs::read_to_string(Path::new(FIXTURES_DIR).join("fortios.json")).expect("read");
    let outcome = normalize_str(&content, "fortinet-fortios").expect("fortios");
    assert_eq!(outcome.len(), 3);
    assert!(matches!(
        normalize_str("[", "fortinet-fortios"),
        Err(NormalizeError::InvalidJson(_))
    ));
}
