//! Verification of normalized interfaces against an expected-interfaces file.
//!
//! The expected file maps device names to the interfaces they should carry:
//!
//! ```json
//! {
//!   "spine-1": [
//!     {"name": "Ethernet1", "description": "to leaf-1", "admin_status": "UP"},
//!     {"name": "Loopback0"}
//!   ]
//! }
//! ```

use crate::model::CanonicalInterface;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors while loading an expected-interfaces document.
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("failed to read expected interfaces {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid expected interfaces document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("device {device} not found in expected interfaces file")]
    DeviceNotFound { device: String },
}

/// One interface a device is expected to have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedInterface {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `"UP"` or `"DOWN"`, compared case-insensitively
    #[serde(default, alias = "status", skip_serializing_if = "Option::is_none")]
    pub admin_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oper_status: Option<String>,
}

/// A field whose actual value differs from the expected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub interface: String,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} expected '{}', found '{}'",
            self.interface, self.field, self.expected, self.actual
        )
    }
}

/// Result of checking one device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// Expected interfaces that matched on every checked field
    pub matched: Vec<String>,
    /// Expected interfaces absent from the device
    pub missing: Vec<String>,
    pub mismatches: Vec<Mismatch>,
}

impl VerificationReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.missing.is_empty() && self.mismatches.is_empty()
    }
}

/// Parse an expected-interfaces document and select one device.
pub fn parse_expected_interfaces(
    content: &str,
    device: &str,
) -> Result<Vec<ExpectedInterface>, VerifyError> {
    let mut document: IndexMap<String, Vec<ExpectedInterface>> = serde_json::from_str(content)?;
    let expected = document
        .swap_remove(device)
        .ok_or_else(|| VerifyError::DeviceNotFound {
            device: device.to_string(),
        })?;
    tracing::info!("Expected interfaces for {device}: {}", expected.len());
    Ok(expected)
}

/// Load the expected interfaces of one device from a JSON file.
pub fn load_expected_interfaces(
    path: &Path,
    device: &str,
) -> Result<Vec<ExpectedInterface>, VerifyError> {
    let content = std::fs::read_to_string(path).map_err(|source| VerifyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_expected_interfaces(&content, device)
}

/// Look an interface up by exact name.
#[must_use]
pub fn find_interface<'a>(
    name: &str,
    interfaces: &'a [CanonicalInterface],
) -> Option<&'a CanonicalInterface> {
    interfaces.iter().find(|iface| iface.name == name)
}

/// Check every expected interface against the normalized ones.
#[must_use]
pub fn verify_interfaces(
    expected: &[ExpectedInterface],
    actual: &[CanonicalInterface],
) -> VerificationReport {
    let mut report = VerificationReport::default();

    for want in expected {
        let Some(found) = find_interface(&want.name, actual) else {
            tracing::warn!("Interface {} not found", want.name);
            report.missing.push(want.name.clone());
            continue;
        };

        let before = report.mismatches.len();
        if let Some(description) = &want.description {
            if *description != found.description {
                report.mismatches.push(Mismatch {
                    interface: want.name.clone(),
                    field: "description",
                    expected: description.clone(),
                    actual: found.description.clone(),
                });
            }
        }
        if let Some(status) = &want.admin_status {
            if !status.eq_ignore_ascii_case(&found.admin_or_config_status) {
                report.mismatches.push(Mismatch {
                    interface: want.name.clone(),
                    field: "admin_status",
                    expected: status.clone(),
                    actual: found.admin_or_config_status.clone(),
                });
            }
        }
        if let Some(oper) = &want.oper_status {
            let actual_oper = found.oper_status.as_deref().unwrap_or_default();
            if !oper.eq_ignore_ascii_case(actual_oper) {
                report.mismatches.push(Mismatch {
                    interface: want.name.clone(),
                    field: "oper_status",
                    expected: oper.clone(),
                    actual: actual_oper.to_string(),
                });
            }
        }

        if report.mismatches.len() == before {
            report.matched.push(want.name.clone());
        }
    }
    report
}
