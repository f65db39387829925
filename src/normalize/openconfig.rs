//! OpenConfig (gNMI) interface normalizer.
//!
//! OpenConfig payloads reach us in several shapes: the bare
//! `openconfig-interfaces:interface` list, the `interfaces` container
//! wrapping it, a single interface object (one gNMI update per interface),
//! or a whole gNMI Get response whose `notification[].update[].val` carries
//! any of the above.

use super::decode::{locate_section, non_empty, normalize_list, text, warn_section_shape, Scalar};
use super::traits::VendorNormalizer;
use crate::model::{CanonicalInterface, NormalizeOutcome, VendorFamily, UNKNOWN_NAME};
use crate::openconfig::extract_update_values;
use serde::Deserialize;
use serde_json::Value;

const INTERFACE_KEYS: &[&str] = &["openconfig-interfaces:interface", "interface"];
const CONTAINER_KEYS: &[&str] = &["openconfig-interfaces:interfaces", "interfaces"];

/// Normalizer for OpenConfig interface payloads
pub struct OpenConfigNormalizer;

impl VendorNormalizer for OpenConfigNormalizer {
    fn family(&self) -> VendorFamily {
        VendorFamily::OpenConfig
    }

    fn payload_keys(&self) -> &'static [&'static str] {
        INTERFACE_KEYS
    }

    fn normalize_section(&self, section: &Value, device: &str) -> NormalizeOutcome {
        match section {
            Value::Array(entries) => normalize_list(entries, device, self.family(), convert_interface),
            Value::Object(_) => {
                normalize_list(std::slice::from_ref(section), device, self.family(), convert_interface)
            }
            _ => {
                warn_section_shape(device, self.family(), section, "interface list");
                NormalizeOutcome::new()
            }
        }
    }

    fn normalize(&self, raw: &Value, device: &str) -> NormalizeOutcome {
        let mut entries = Vec::new();
        collect_entries(raw, device, &mut entries);
        if entries.is_empty() {
            tracing::debug!("{device}: no OpenConfig interfaces in payload");
        }
        self.normalize_section(&Value::Array(entries), device)
    }
}

/// Gather interface entries from any of the accepted payload shapes.
fn collect_entries(value: &Value, device: &str, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => out.extend(items.iter().cloned()),
        Value::Object(map) => {
            if map.contains_key("notification") {
                for val in extract_update_values(value) {
                    collect_entries(&val, device, out);
                }
            } else if let Some(section) = locate_section(value, INTERFACE_KEYS) {
                match section {
                    Value::Array(items) => out.extend(items.iter().cloned()),
                    Value::Object(_) => out.push(section.clone()),
                    other => warn_section_shape(device, VendorFamily::OpenConfig, other, "interface list"),
                }
            } else if let Some(container) = locate_section(value, CONTAINER_KEYS) {
                collect_entries(container, device, out);
            } else if map.contains_key("name") || map.contains_key("config") {
                out.push(value.clone());
            }
        }
        Value::Null => {}
        other => warn_section_shape(device, VendorFamily::OpenConfig, other, "OpenConfig object"),
    }
}

fn convert_interface(iface: OcInterface) -> CanonicalInterface {
    let state = iface.state.unwrap_or_default();
    let config = iface.config.unwrap_or_default();

    let name = text(iface.name)
        .or_else(|| non_empty(config.name.clone()))
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());
    let kind = non_empty(state.kind.clone())
        .or_else(|| non_empty(config.kind.clone()))
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());
    let description = non_empty(state.description.clone())
        .or_else(|| config.description.clone())
        .unwrap_or_default();
    let enabled = state.enabled.or(config.enabled).unwrap_or(false);

    let ip_address = iface
        .subinterfaces
        .and_then(|subs| subs.subinterface)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|sub| sub.ipv4?.addresses?.address)
        .find(|addresses| !addresses.is_empty())
        .and_then(|addresses| addresses.into_iter().next())
        .map(format_address)
        .unwrap_or_default();

    CanonicalInterface::new(name, kind)
        .with_ip(ip_address)
        .with_status(if enabled { "UP" } else { "DOWN" })
        .with_description(description)
        .with_oper_status(non_empty(state.oper_status))
}

/// `ip/prefix-length`, operational state first; empty unless both are known.
fn format_address(address: OcAddress) -> String {
    let state = address.state.unwrap_or_default();
    let config = address.config.unwrap_or_default();

    let ip = non_empty(state.ip)
        .or_else(|| non_empty(config.ip))
        .or_else(|| non_empty(address.ip));
    let prefix = text(state.prefix_length).or_else(|| text(config.prefix_length));

    match (ip, prefix) {
        (Some(ip), Some(prefix)) => format!("{ip}/{prefix}"),
        _ => String::new(),
    }
}

#[derive(Debug, Deserialize)]
struct OcInterface {
    #[serde(default)]
    name: Option<Scalar>,
    #[serde(default)]
    config: Option<OcInterfaceAttrs>,
    #[serde(default)]
    state: Option<OcInterfaceAttrs>,
    #[serde(default)]
    subinterfaces: Option<OcSubinterfaces>,
}

#[derive(Debug, Default, Deserialize)]
struct OcInterfaceAttrs {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    enabled: Option<bool>,
    #[serde(default, rename = "oper-status")]
    oper_status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OcSubinterfaces {
    #[serde(default)]
    subinterface: Option<Vec<OcSubinterface>>,
}

#[derive(Debug, Deserialize)]
struct OcSubinterface {
    #[serde(default, rename = "openconfig-if-ip:ipv4", alias = "ipv4")]
    ipv4: Option<OcIpv4>,
}

#[derive(Debug, Deserialize)]
struct OcIpv4 {
    #[serde(default)]
    addresses: Option<OcAddresses>,
}

#[derive(Debug, Deserialize)]
struct OcAddresses {
    #[serde(default)]
    address: Option<Vec<OcAddress>>,
}

#[derive(Debug, Deserialize)]
struct OcAddress {
    #[serde(default)]
    ip: Option<String>,
    #[serde(default)]
    config: Option<OcAddressAttrs>,
    #[serde(default)]
    state: Option<OcAddressAttrs>,
}

#[derive(Debug, Default, Deserialize)]
struct OcAddressAttrs {
    #[serde(default)]
    ip: Option<String>,
    #[serde(default, rename = "prefix-length")]
    prefix_length: Option<Scalar>,
}
