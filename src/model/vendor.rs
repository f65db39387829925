//! Vendor family classification from NED / platform tags.

use serde::{Deserialize, Serialize};

/// Closed set of vendor families the normalizer understands.
///
/// A platform tag is classified exactly once with [`VendorFamily::classify`];
/// every consumer then matches on the enum instead of re-testing substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VendorFamily {
    Asa,
    IosXr,
    Junos,
    FortiOs,
    OpenConfig,
    Unsupported,
}

/// Substring markers per family, in classification priority order.
const MARKERS: &[(VendorFamily, &[&str])] = &[
    (VendorFamily::Asa, &["asa"]),
    (VendorFamily::IosXr, &["iosxr", "ios-xr"]),
    (VendorFamily::Junos, &["junos", "juniper"]),
    (VendorFamily::FortiOs, &["fortios", "fortinet"]),
    (VendorFamily::OpenConfig, &["openconfig", "gnmi"]),
];

impl VendorFamily {
    /// Classify a platform tag by case-insensitive substring match.
    ///
    /// Families are tested in a fixed order (ASA, IOS-XR, Junos, FortiOS,
    /// OpenConfig); the first hit wins.
    #[must_use]
    pub fn classify(platform_tag: &str) -> Self {
        let lower = platform_tag.to_lowercase();
        MARKERS
            .iter()
            .find(|(_, needles)| needles.iter().any(|n| lower.contains(n)))
            .map_or(Self::Unsupported, |(family, _)| *family)
    }

    /// All substrings recognized by [`VendorFamily::classify`].
    pub fn markers() -> impl Iterator<Item = &'static str> {
        MARKERS.iter().flat_map(|(_, needles)| needles.iter().copied())
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Asa => "Cisco ASA",
            Self::IosXr => "Cisco IOS-XR",
            Self::Junos => "Juniper Junos",
            Self::FortiOs => "Fortinet FortiOS",
            Self::OpenConfig => "OpenConfig",
            Self::Unsupported => "Unsupported",
        }
    }

    /// Vendor label used in report tables.
    #[must_use]
    pub const fn vendor(&self) -> &'static str {
        match self {
            Self::Asa | Self::IosXr => "Cisco",
            Self::Junos => "Juniper",
            Self::FortiOs => "Fortinet",
            Self::OpenConfig => "OpenConfig",
            Self::Unsupported => "Unknown",
        }
    }

    #[must_use]
    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }

    /// Whether NSO exposes interface configuration for this family.
    ///
    /// OpenConfig payloads are normalized offline only; NSO has no
    /// interface path for them.
    #[must_use]
    pub const fn is_nso_managed(&self) -> bool {
        matches!(self, Self::Asa | Self::IosXr | Self::Junos | Self::FortiOs)
    }
}

impl std::fmt::Display for VendorFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
