//! **Multi-vendor network interface normalization.**
//!
//! `netif-tools` turns the heterogeneous interface data that network devices
//! expose into one canonical record per interface. Payloads come from Cisco
//! NSO over RESTCONF (Cisco ASA, Cisco IOS-XR, Juniper Junos, Fortinet
//! FortiOS) or as OpenConfig documents and gNMI Get responses. The library
//! powers the `netif-tools` command-line tool and can be embedded directly.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`CanonicalInterface`], the closed [`VendorFamily`] set
//!   and per-device [`DeviceReport`]s.
//! - **[`normalize`]**: Pure vendor normalizers. A platform tag is classified
//!   once and dispatched to the matching [`VendorNormalizer`]; malformed
//!   entries are dropped and reported rather than aborting the device.
//! - **[`restconf`]**: Blocking NSO RESTCONF client (requires the `restconf`
//!   feature for network access).
//! - **[`pipeline`]**: Batch querying of many devices, with status
//!   resolution and parallel fan-out.
//! - **[`reports`]**: Table, JSON and CSV renderers.
//! - **[`openconfig`]**: gNMI response unwrapping, interface configuration
//!   payloads and verification against expected interfaces.
//!
//! ## Getting Started: Normalizing a Payload
//!
//! ```
//! use netif_tools::normalize::normalize;
//! use serde_json::json;
//!
//! let raw = json!({
//!     "tailf-ned-fortinet-fortios:interface": [{
//!         "name": "port1",
//!         "type": "physical",
//!         "status": "up",
//!         "allowaccess": ["ping", "https"],
//!         "vdom": "root",
//!         "description": "uplink"
//!     }]
//! });
//!
//! let outcome = normalize(&raw, "fortinet-fortios-cli-5.5").unwrap();
//! assert_eq!(outcome.interfaces[0].description, "Access: ping, https | VDOM: root | uplink");
//! ```
//!
//! ## Querying NSO
//!
//! ```no_run
//! use netif_tools::pipeline::query_devices;
//! use netif_tools::restconf::{RestconfClient, RestconfConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RestconfClient::new(RestconfConfig {
//!         base_url: "http://nso.example.net:8080".to_string(),
//!         ..RestconfConfig::default()
//!     })?;
//!
//!     let devices = client.list_devices()?;
//!     for report in query_devices(&client, &devices, true) {
//!         println!("{}: {} ({} interfaces)", report.name, report.status, report.interface_count());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `restconf` (default): Enables the HTTP transport of the RESTCONF client
//!   via `reqwest`. Without it the client compiles but every request fails
//!   with [`restconf::ClientError::FeatureDisabled`].

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod openconfig;
pub mod pipeline;
pub mod reports;
pub mod restconf;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, BehaviorConfig, NsoConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, NetifError, OptionContext, Result};
pub use model::{
    CanonicalInterface, DeviceReport, DeviceStatus, EntryFailure, NormalizeOutcome,
    QueryStatistics, VendorFamily,
};
pub use normalize::{
    normalize, normalize_openconfig, normalize_str, InterfaceNormalizer, NormalizeError,
    VendorNormalizer,
};
pub use pipeline::{query_devices, DeviceSource};
pub use reports::{create_reporter, ReportFormat, ReportGenerator};
pub use restconf::{ClientError, RestconfClient, RestconfConfig};
