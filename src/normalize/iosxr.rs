//! Cisco IOS-XR interface normalizer.

use super::decode::{join_ip_mask, normalize_grouped, text, Scalar};
use super::traits::VendorNormalizer;
use crate::model::{CanonicalInterface, NormalizeOutcome, VendorFamily, UNKNOWN_NAME};
use serde::Deserialize;
use serde_json::Value;

pub(crate) const IOSXR_INTERFACE_KEY: &str = "tailf-ned-cisco-ios-xr:interface";

/// Normalizer for Cisco IOS-XR payloads
pub struct IosXrNormalizer;

impl VendorNormalizer for IosXrNormalizer {
    fn family(&self) -> VendorFamily {
        VendorFamily::IosXr
    }

    fn payload_keys(&self) -> &'static [&'static str] {
        &[IOSXR_INTERFACE_KEY]
    }

    fn normalize_section(&self, section: &Value, device: &str) -> NormalizeOutcome {
        normalize_grouped(section, device, self.family(), convert_interface)
    }
}

fn convert_interface(group: &str, iface: IosXrInterface) -> CanonicalInterface {
    let name = match text(iface.id) {
        Some(id) if !group.is_empty() => format!("{group}{id}"),
        Some(id) => id,
        None => UNKNOWN_NAME.to_string(),
    };

    let ip_address = iface
        .ipv4
        .and_then(|ipv4| ipv4.address)
        .map(|address| join_ip_mask(address.ip, address.mask))
        .unwrap_or_default();

    CanonicalInterface::new(name, group)
        .with_ip(ip_address)
        .with_status("Configured")
        .with_description(iface.description.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
struct IosXrInterface {
    #[serde(default)]
    id: Option<Scalar>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    ipv4: Option<IosXrIpv4>,
}

#[derive(Debug, Deserialize)]
struct IosXrIpv4 {
    #[serde(default)]
    address: Option<IosXrAddress>,
}

#[derive(Debug, Deserialize)]
struct IosXrAddress {
    #[serde(default)]
    ip: Option<String>,
    #[serde(default)]
    mask: Option<String>,
}
