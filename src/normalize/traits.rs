//! Normalizer trait definitions and error types.

use super::decode::locate_section;
use crate::model::{NormalizeOutcome, VendorFamily};
use serde_json::Value;
use thiserror::Error;

/// Errors that abort normalization of a whole device payload.
///
/// Malformed individual entries are not errors; they are reported through
/// [`NormalizeOutcome::failures`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Unsupported device type: {platform}")]
    UnsupportedVendor { platform: String },

    #[error("Invalid JSON payload: {0}")]
    InvalidJson(String),
}

impl From<serde_json::Error> for NormalizeError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson(err.to_string())
    }
}

/// Trait for per-vendor interface normalizers.
///
/// Implementors describe where their interfaces live in the raw payload and
/// how one section is turned into canonical records. Implementations hold no
/// state and can be shared across threads.
pub trait VendorNormalizer: Send + Sync {
    /// The vendor family this normalizer handles
    fn family(&self) -> VendorFamily;

    /// Top-level payload keys that may carry the interface section
    fn payload_keys(&self) -> &'static [&'static str];

    /// Normalize the located interface section
    fn normalize_section(&self, section: &Value, device: &str) -> NormalizeOutcome;

    /// Normalize a raw payload.
    ///
    /// An absent or null interface section yields an empty outcome.
    fn normalize(&self, raw: &Value, device: &str) -> NormalizeOutcome {
        match locate_section(raw, self.payload_keys()) {
            Some(section) => self.normalize_section(section, device),
            None => {
                tracing::debug!(
                    "{device}: no {} interface section in payload",
                    self.family()
                );
                NormalizeOutcome::new()
            }
        }
    }
}
