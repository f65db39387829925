//! RESTCONF client errors.

use crate::model::VendorFamily;
use thiserror::Error;

/// Errors raised while talking to NSO.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClientError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("invalid response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("unable to determine platform for {device}")]
    PlatformNotFound { device: String },

    #[error("no interface path for {family} devices")]
    NoInterfacePath { family: VendorFamily },

    #[error("failed to create HTTP client: {0}")]
    Setup(String),

    #[error("RESTCONF support not enabled; rebuild with --features restconf")]
    FeatureDisabled,
}

impl ClientError {
    pub(crate) fn transport(url: &str, message: impl ToString) -> Self {
        Self::Transport {
            url: url.to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn decode(url: &str, message: impl ToString) -> Self {
        Self::Decode {
            url: url.to_string(),
            message: message.to_string(),
        }
    }
}
