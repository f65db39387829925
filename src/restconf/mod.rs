//! Device access through Cisco NSO's RESTCONF API.
//!
//! HTTP transport requires the `restconf` feature (enabled by default).
//! Without it the client still builds but every request fails with
//! [`ClientError::FeatureDisabled`].

mod client;
mod error;
mod push;
pub mod urls;

pub use client::{RestconfClient, RestconfConfig};
pub use error::ClientError;
pub use push::{extract_device_name, load_xml_file, PushFileError, PushResponse, PUSH_SUCCESS_STATUSES};
