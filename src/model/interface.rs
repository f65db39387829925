//! Canonical interface record and normalization outcome.

use serde::{Deserialize, Serialize};

/// Sentinel used when a vendor payload carries no usable interface name.
pub const UNKNOWN_NAME: &str = "N/A";

/// Vendor-independent interface record.
///
/// Field values are passed through from the vendor payload. In particular
/// `ip_address` keeps the vendor's own notation (`"ip mask"`, `"ip/len"` or a
/// comma-joined list) and is never rewritten into CIDR form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalInterface {
    pub name: String,
    /// Vendor-reported interface type or category (free-form)
    pub kind: String,
    pub ip_address: String,
    /// `"Configured"`, `"unknown"`, a FortiOS status literal, or `"UP"`/`"DOWN"`
    pub admin_or_config_status: String,
    pub description: String,
    /// Operational status, only reported by OpenConfig sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oper_status: Option<String>,
}

impl CanonicalInterface {
    /// Create a record with the given name and kind and empty remaining fields.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: if name.is_empty() {
                UNKNOWN_NAME.to_string()
            } else {
                name
            },
            kind: kind.into(),
            ip_address: String::new(),
            admin_or_config_status: String::new(),
            description: String::new(),
            oper_status: None,
        }
    }

    #[must_use]
    pub fn with_ip(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = ip_address.into();
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.admin_or_config_status = status.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_oper_status(mut self, oper_status: Option<String>) -> Self {
        self.oper_status = oper_status;
        self
    }
}

/// A vendor entry that could not be decoded and was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFailure {
    /// Position of the entry within its list (0-based)
    pub index: usize,
    /// Interface-type group the entry belonged to (ASA / IOS-XR only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub reason: String,
}

impl std::fmt::Display for EntryFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.group {
            Some(group) => write!(f, "{group}[{}]: {}", self.index, self.reason),
            None => write!(f, "[{}]: {}", self.index, self.reason),
        }
    }
}

/// Result of normalizing one device payload.
///
/// Malformed entries never abort normalization; they are collected in
/// `failures` next to the records that did decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOutcome {
    pub interfaces: Vec<CanonicalInterface>,
    pub failures: Vec<EntryFailure>,
}

impl NormalizeOutcome {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successfully normalized interfaces
    #[must_use]
    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    /// Whether any entry was dropped.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub(crate) fn push(&mut self, interface: CanonicalInterface) {
        self.interfaces.push(interface);
    }

    pub(crate) fn fail(&mut self, index: usize, group: Option<&str>, reason: impl Into<String>) {
        self.failures.push(EntryFailure {
            index,
            group: group.map(str::to_string),
            reason: reason.into(),
        });
    }
}
