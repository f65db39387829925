//! Juniper Junos interface normalizer.
//!
//! Junos interfaces carry their addresses per logical unit; every inet
//! address of every unit is reported, joined with `", "`.

use super::decode::{normalize_list, text, warn_section_shape, Scalar};
use super::traits::VendorNormalizer;
use crate::model::{CanonicalInterface, NormalizeOutcome, VendorFamily, UNKNOWN_NAME};
use serde::Deserialize;
use serde_json::Value;

pub(crate) const JUNOS_INTERFACE_KEY: &str = "junos:interface";

/// Normalizer for Juniper Junos payloads
pub struct JunosNormalizer;

impl VendorNormalizer for JunosNormalizer {
    fn family(&self) -> VendorFamily {
        VendorFamily::Junos
    }

    fn payload_keys(&self) -> &'static [&'static str] {
        &[JUNOS_INTERFACE_KEY]
    }

    fn normalize_section(&self, section: &Value, device: &str) -> NormalizeOutcome {
        match section.as_array() {
            Some(entries) => normalize_list(entries, device, self.family(), convert_interface),
            None => {
                warn_section_shape(device, self.family(), section, "list of interfaces");
                NormalizeOutcome::new()
            }
        }
    }
}

fn convert_interface(iface: JunosInterface) -> CanonicalInterface {
    let addresses: Vec<String> = iface
        .unit
        .unwrap_or_default()
        .into_iter()
        .filter_map(|unit| unit.family?.inet?.address)
        .flatten()
        .filter_map(|address| address.name)
        .collect();

    CanonicalInterface::new(
        text(iface.name).unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        "Physical",
    )
    .with_ip(addresses.join(", "))
    .with_status("Configured")
    .with_description(iface.description.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
struct JunosInterface {
    #[serde(default)]
    name: Option<Scalar>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    unit: Option<Vec<JunosUnit>>,
}

#[derive(Debug, Deserialize)]
struct JunosUnit {
    #[serde(default)]
    family: Option<JunosFamily>,
}

#[derive(Debug, Deserialize)]
struct JunosFamily {
    #[serde(default)]
    inet: Option<JunosInet>,
}

#[derive(Debug, Deserialize)]
struct JunosInet {
    #[serde(default)]
    address: Option<Vec<JunosAddress>>,
}

#[derive(Debug, Deserialize)]
struct JunosAddress {
    #[serde(default)]
    name: Option<String>,
}
