//! OpenConfig interface configuration payloads.

use serde_json::{json, Value};

/// gNMI Set path the configuration payload is applied at.
pub const INTERFACE_CONFIG_PATH: &str = "openconfig-interfaces:interfaces/interface";

/// Name fragments mapped to IANA interface types, checked in order.
const TYPE_RULES: &[(&[&str], &str)] = &[
    (&["loopback"], "softwareLoopback"),
    (&["tunnel"], "tunnel"),
    (
        &["gigabit", "ethernet", "eth", "ge", "te", "fortygige", "hundredgige"],
        "ethernetCsmacd",
    ),
    (&["vlan"], "l3ipvlan"),
    (&["bundle", "port-channel"], "ieee8023adLag"),
];

/// Guess the `iana-if-type` identity from an interface name.
///
/// Matching is a case-insensitive substring test, so short fragments such
/// as `te` also hit names like `Bundle-Ether1`; the first rule wins.
#[must_use]
pub fn detect_interface_type(name: &str) -> String {
    let lower = name.to_lowercase();
    let kind = TYPE_RULES
        .iter()
        .find(|(fragments, _)| fragments.iter().any(|f| lower.contains(f)))
        .map_or("other", |(_, kind)| *kind);
    format!("iana-if-type:{kind}")
}

/// Build the `openconfig-interfaces:interface` document for one interface.
///
/// The interface is enabled and gets a single IPv4 address on
/// subinterface 0.
#[must_use]
pub fn build_interface_config(
    name: &str,
    ip: &str,
    prefix_length: u8,
    description: Option<&str>,
) -> Value {
    json!({
        "openconfig-interfaces:interface": [{
            "name": name,
            "config": {
                "name": name,
                "type": detect_interface_type(name),
                "description": description.unwrap_or_default(),
                "enabled": true
            },
            "subinterfaces": {
                "subinterface": [{
                    "index": 0,
                    "openconfig-if-ip:ipv4": {
                        "addresses": {
                            "address": [{
                                "ip": ip,
                                "config": {
                                    "ip": ip,
                                    "prefix-length": prefix_length
                                }
                            }]
                        }
                    }
                }]
            }
        }]
    })
}
