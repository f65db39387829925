//! Fortinet FortiOS interface normalizer.
//!
//! FortiOS has no free-form description worth showing on its own, so the
//! description column is synthesized from the allowed management access,
//! the VDOM and the raw description.

use super::decode::{join_ip_mask, non_empty, normalize_list, text, warn_section_shape, Scalar};
use super::traits::VendorNormalizer;
use crate::model::{CanonicalInterface, NormalizeOutcome, VendorFamily, UNKNOWN_NAME};
use serde::Deserialize;
use serde_json::Value;

pub(crate) const FORTIOS_INTERFACE_KEY: &str = "tailf-ned-fortinet-fortios:interface";

/// Normalizer for Fortinet FortiOS payloads
pub struct FortiOsNormalizer;

impl VendorNormalizer for FortiOsNormalizer {
    fn family(&self) -> VendorFamily {
        VendorFamily::FortiOs
    }

    fn payload_keys(&self) -> &'static [&'static str] {
        &[FORTIOS_INTERFACE_KEY]
    }

    fn normalize_section(&self, section: &Value, device: &str) -> NormalizeOutcome {
        // Some NED versions wrap the list as {"interface-list": [...]}
        let entries = match section {
            Value::Array(entries) => Some(entries),
            Value::Object(map) => map.get("interface-list").and_then(Value::as_array),
            _ => None,
        };

        match entries {
            Some(entries) => normalize_list(entries, device, self.family(), convert_interface),
            None => {
                warn_section_shape(device, self.family(), section, "interface list");
                NormalizeOutcome::new()
            }
        }
    }
}

/// Build the `Access: … | VDOM: … | description` column.
pub(crate) fn synthesize_description(
    allowaccess: Option<&AllowAccess>,
    vdom: Option<&str>,
    description: Option<&str>,
) -> String {
    let mut parts = Vec::new();
    if let Some(access) = allowaccess.map(AllowAccess::joined).filter(|a| !a.is_empty()) {
        parts.push(format!("Access: {access}"));
    }
    // An empty vdom leaf is dropped like an absent one, so no bare "VDOM: ".
    if let Some(vdom) = vdom.filter(|v| !v.is_empty()) {
        parts.push(format!("VDOM: {vdom}"));
    }
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        parts.push(description.to_string());
    }
    parts.join(" | ")
}

fn convert_interface(iface: FortiInterface) -> CanonicalInterface {
    let ip_address = iface
        .ip
        .and_then(|ip| ip.ip_mask)
        .map(|mask| join_ip_mask(mask.class_ip, mask.net_mask))
        .unwrap_or_default();

    let vdom = text(iface.vdom);
    let description = synthesize_description(
        iface.allowaccess.as_ref(),
        vdom.as_deref(),
        iface.description.as_deref(),
    );

    CanonicalInterface::new(
        non_empty(iface.name).unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        non_empty(iface.kind).unwrap_or_else(|| UNKNOWN_NAME.to_string()),
    )
    .with_ip(ip_address)
    .with_status(non_empty(iface.status).unwrap_or_else(|| "unknown".to_string()))
    .with_description(description)
}

/// `allowaccess` is a leaf-list on newer NEDs and a single string on older ones.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum AllowAccess {
    List(Vec<String>),
    Single(String),
}

impl AllowAccess {
    fn joined(&self) -> String {
        match self {
            Self::List(items) => items.join(", "),
            Self::Single(value) => value.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FortiInterface {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    ip: Option<FortiIp>,
    #[serde(default)]
    allowaccess: Option<AllowAccess>,
    #[serde(default)]
    vdom: Option<Scalar>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FortiIp {
    #[serde(default, rename = "ip-mask")]
    ip_mask: Option<FortiIpMask>,
}

#[derive(Debug, Deserialize)]
struct FortiIpMask {
    #[serde(default)]
    class_ip: Option<String>,
    #[serde(default)]
    net_mask: Option<String>,
}
