//! Per-device query results.

use super::{CanonicalInterface, EntryFailure, VendorFamily};
use serde::{Deserialize, Serialize};

/// Resolved status of one device in a batch query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceStatus {
    /// Interfaces were retrieved and normalized
    Success,
    /// The device returned no interface payload
    NoData,
    /// The platform tag matched no known vendor family
    Unsupported,
    /// Platform detection or transport failed
    Failed,
}

impl DeviceStatus {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::NoData => "No Data",
            Self::Unsupported => "Unsupported",
            Self::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Platform label used when detection fails.
pub const UNKNOWN_PLATFORM: &str = "Unknown";

/// Everything the report renderer needs to know about one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceReport {
    pub name: String,
    /// NED id / platform tag as reported by the device source
    pub platform: String,
    pub family: VendorFamily,
    pub status: DeviceStatus,
    pub interfaces: Vec<CanonicalInterface>,
    /// Entries dropped during normalization
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<EntryFailure>,
    /// Human-readable reason for `Failed` / `Unsupported`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeviceReport {
    /// A device whose platform could not be determined.
    #[must_use]
    pub fn failed(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            platform: UNKNOWN_PLATFORM.to_string(),
            family: VendorFamily::Unsupported,
            status: DeviceStatus::Failed,
            interfaces: Vec::new(),
            failures: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// A device with a known platform but no interface data yet.
    #[must_use]
    pub fn with_platform(
        name: impl Into<String>,
        platform: impl Into<String>,
        status: DeviceStatus,
    ) -> Self {
        let platform = platform.into();
        Self {
            name: name.into(),
            family: VendorFamily::classify(&platform),
            platform,
            status,
            interfaces: Vec::new(),
            failures: Vec::new(),
            error: None,
        }
    }

    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    #[must_use]
    pub fn interface_count(&self) -> usize {
        self.interfaces.len()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == DeviceStatus::Success
    }
}

/// Aggregate numbers shown at the end of a query run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryStatistics {
    pub devices_queried: usize,
    pub successful_queries: usize,
    pub total_interfaces: usize,
    pub dropped_entries: usize,
}

impl QueryStatistics {
    #[must_use]
    pub fn from_reports(reports: &[DeviceReport]) -> Self {
        Self {
            devices_queried: reports.len(),
            successful_queries: reports.iter().filter(|r| r.is_success()).count(),
            total_interfaces: reports.iter().map(DeviceReport::interface_count).sum(),
            dropped_entries: reports.iter().map(|r| r.failures.len()).sum(),
        }
    }
}
