//! RESTCONF resource paths exposed by NSO.

use crate::model::VendorFamily;

pub const YANG_LIBRARY_PATH: &str = "/restconf/data/ietf-yang-library:yang-library";
pub const DEVICES_PATH: &str = "/restconf/data/tailf-ncs:devices/device?fields=name";

/// Device-type containers tried, in order, when looking up a NED id.
pub const CONNECTION_TYPES: &[&str] = &["cli", "netconf"];

fn device_path(device: &str) -> String {
    format!("/restconf/data/tailf-ncs:devices/device={device}")
}

/// Path of the NED id leaf for one connection type.
#[must_use]
pub fn platform_path(device: &str, connection_type: &str) -> String {
    format!("{}/device-type/{connection_type}/ned-id", device_path(device))
}

/// Path of the interface configuration for a vendor family.
///
/// OpenConfig devices are not reached through NSO and have no path.
#[must_use]
pub fn interfaces_path(device: &str, family: VendorFamily) -> Option<String> {
    let suffix = match family {
        VendorFamily::Asa => "tailf-ned-cisco-asa:interface",
        VendorFamily::IosXr => "tailf-ned-cisco-ios-xr:interface",
        VendorFamily::Junos => "junos:configuration/interfaces/interface",
        VendorFamily::FortiOs => "tailf-ned-fortinet-fortios:global/system/interface",
        VendorFamily::OpenConfig | VendorFamily::Unsupported => return None,
    };
    Some(format!("{}/config/{suffix}", device_path(device)))
}

/// Path configuration is PATCHed to.
#[must_use]
pub fn config_path(device: &str) -> String {
    format!("{}/config", device_path(device))
}
