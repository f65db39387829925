//! Multi-vendor interface normalization.
//!
//! Vendor payloads are converted into [`CanonicalInterface`] records. The
//! platform tag is classified once into a [`VendorFamily`] and dispatched to
//! the matching [`VendorNormalizer`].
//!
//! ## Fault tolerance
//!
//! Normalization never aborts on a single bad entry. Entries that are not
//! objects, or whose fields carry the wrong JSON type, are dropped and
//! reported in [`NormalizeOutcome::failures`]. Absent fields simply produce
//! empty values.
//!
//! ## Usage
//!
//! ```
//! use netif_tools::normalize::normalize;
//! use serde_json::json;
//!
//! let raw = json!({
//!     "tailf-ned-cisco-ios-xr:interface": {
//!         "GigabitEthernet": [{"id": "0/0/0/0", "ipv4": {"address": {"ip": "10.0.0.1", "mask": "255.255.255.0"}}}]
//!     }
//! });
//! let outcome = normalize(&raw, "cisco-iosxr-cli-7.52").unwrap();
//! assert_eq!(outcome.interfaces[0].ip_address, "10.0.0.1 255.255.255.0");
//! ```
//!
//! [`CanonicalInterface`]: crate::model::CanonicalInterface

mod asa;
mod decode;
mod fortios;
mod iosxr;
mod junos;
mod openconfig;
mod traits;

pub use asa::AsaNormalizer;
pub use fortios::FortiOsNormalizer;
pub use iosxr::IosXrNormalizer;
pub use junos::JunosNormalizer;
pub use openconfig::OpenConfigNormalizer;
pub use traits::{NormalizeError, VendorNormalizer};

pub(crate) use asa::ASA_INTERFACE_KEY;
pub(crate) use fortios::FORTIOS_INTERFACE_KEY;
pub(crate) use iosxr::IOSXR_INTERFACE_KEY;
pub(crate) use junos::JUNOS_INTERFACE_KEY;

use crate::model::{NormalizeOutcome, VendorFamily};
use serde_json::Value;

/// Device label used in log lines when the caller did not name the device.
const ANONYMOUS_DEVICE: &str = "<payload>";

/// Get the normalizer for a vendor family.
///
/// Returns `None` for [`VendorFamily::Unsupported`].
#[must_use]
pub fn normalizer_for(family: VendorFamily) -> Option<&'static dyn VendorNormalizer> {
    match family {
        VendorFamily::Asa => Some(&AsaNormalizer),
        VendorFamily::IosXr => Some(&IosXrNormalizer),
        VendorFamily::Junos => Some(&JunosNormalizer),
        VendorFamily::FortiOs => Some(&FortiOsNormalizer),
        VendorFamily::OpenConfig => Some(&OpenConfigNormalizer),
        VendorFamily::Unsupported => None,
    }
}

/// Device-scoped entry point.
///
/// Holds nothing but the device name used to label warnings, so it is cheap
/// to create per device and safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct InterfaceNormalizer {
    device: Option<String>,
}

impl InterfaceNormalizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Label log output with a device name.
    #[must_use]
    pub fn for_device(device: impl Into<String>) -> Self {
        Self {
            device: Some(device.into()),
        }
    }

    fn device(&self) -> &str {
        self.device.as_deref().unwrap_or(ANONYMOUS_DEVICE)
    }

    /// Normalize a raw payload tagged with a platform identifier.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::UnsupportedVendor`] when the tag matches no
    /// known vendor family.
    pub fn normalize(
        &self,
        raw: &Value,
        platform_tag: &str,
    ) -> Result<NormalizeOutcome, NormalizeError> {
        let family = VendorFamily::classify(platform_tag);
        let normalizer = normalizer_for(family).ok_or_else(|| NormalizeError::UnsupportedVendor {
            platform: platform_tag.to_string(),
        })?;

        let outcome = normalizer.normalize(raw, self.device());
        tracing::debug!(
            "{}: normalized {} {} interface(s), dropped {}",
            self.device(),
            outcome.len(),
            family,
            outcome.failures.len()
        );
        Ok(outcome)
    }

    /// Normalize an OpenConfig payload (bare, wrapped or a gNMI Get response).
    #[must_use]
    pub fn normalize_openconfig(&self, raw: &Value) -> NormalizeOutcome {
        OpenConfigNormalizer.normalize(raw, self.device())
    }
}

/// Normalize a raw payload tagged with a platform identifier.
///
/// # Errors
///
/// Returns [`NormalizeError::UnsupportedVendor`] for unrecognized tags.
pub fn normalize(raw: &Value, platform_tag: &str) -> Result<NormalizeOutcome, NormalizeError> {
    InterfaceNormalizer::new().normalize(raw, platform_tag)
}

/// Normalize an OpenConfig payload.
#[must_use]
pub fn normalize_openconfig(raw: &Value) -> NormalizeOutcome {
    InterfaceNormalizer::new().normalize_openconfig(raw)
}

/// Parse JSON text and normalize it.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidJson`] if `content` is not JSON, or
/// [`NormalizeError::UnsupportedVendor`] for unrecognized tags.
pub fn normalize_str(content: &str, platform_tag: &str) -> Result<NormalizeOutcome, NormalizeError> {
    let raw: Value = serde_json::from_str(content)?;
    normalize(&raw, platform_tag)
}
