//! OpenConfig helpers.
//!
//! Utilities around OpenConfig interface documents that sit next to the
//! normalizer: unwrapping gNMI Get responses, building interface
//! configuration payloads for gNMI Set, and checking normalized interfaces
//! against an expected-interfaces document.

mod config;
mod gnmi;
mod verify;

pub use config::{build_interface_config, detect_interface_type, INTERFACE_CONFIG_PATH};
pub use gnmi::extract_update_values;
pub use verify::{
    find_interface, load_expected_interfaces, parse_expected_interfaces, verify_interfaces,
    ExpectedInterface, Mismatch, VerificationReport, VerifyError,
};
