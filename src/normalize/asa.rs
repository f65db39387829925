//! Cisco ASA interface normalizer.
//!
//! NSO's ASA NED groups interfaces by type:
//! `{"tailf-ned-cisco-asa:interface": {"GigabitEthernet": [...], "Management": [...]}}`.

use super::decode::{join_ip_mask, normalize_grouped, text, Scalar};
use super::traits::VendorNormalizer;
use crate::model::{CanonicalInterface, NormalizeOutcome, VendorFamily, UNKNOWN_NAME};
use serde::Deserialize;
use serde_json::Value;

pub(crate) const ASA_INTERFACE_KEY: &str = "tailf-ned-cisco-asa:interface";

/// Normalizer for Cisco ASA payloads
pub struct AsaNormalizer;

impl VendorNormalizer for AsaNormalizer {
    fn family(&self) -> VendorFamily {
        VendorFamily::Asa
    }

    fn payload_keys(&self) -> &'static [&'static str] {
        &[ASA_INTERFACE_KEY]
    }

    fn normalize_section(&self, section: &Value, device: &str) -> NormalizeOutcome {
        normalize_grouped(section, device, self.family(), convert_interface)
    }
}

fn convert_interface(group: &str, iface: AsaInterface) -> CanonicalInterface {
    // The list key is `name` on most ASA NED versions, `id` on older ones
    let name = match text(iface.name).or_else(|| text(iface.id)) {
        Some(suffix) if !group.is_empty() => format!("{group}{suffix}"),
        Some(suffix) => suffix,
        None => UNKNOWN_NAME.to_string(),
    };

    let ip_address = iface
        .ip
        .and_then(|ip| ip.address)
        .and_then(|address| address.ip)
        .map(|host| join_ip_mask(host.host_ip, host.mask))
        .unwrap_or_default();

    CanonicalInterface::new(name, group)
        .with_ip(ip_address)
        .with_status("Configured")
        .with_description(iface.description.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
struct AsaInterface {
    #[serde(default)]
    name: Option<Scalar>,
    #[serde(default)]
    id: Option<Scalar>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    ip: Option<AsaIp>,
}

#[derive(Debug, Deserialize)]
struct AsaIp {
    #[serde(default)]
    address: Option<AsaAddress>,
}

#[derive(Debug, Deserialize)]
struct AsaAddress {
    #[serde(default)]
    ip: Option<AsaHostAddress>,
}

#[derive(Debug, Deserialize)]
struct AsaHostAddress {
    #[serde(default, rename = "host-ip")]
    host_ip: Option<String>,
    #[serde(default)]
    mask: Option<String>,
}
