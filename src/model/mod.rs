//! Canonical data model.
//!
//! Every vendor payload, whether it arrives through NSO RESTCONF or as an
//! OpenConfig document, is normalized into [`CanonicalInterface`] records.
//! Device-level results produced by the batch pipeline are carried in
//! [`DeviceReport`].

mod device;
mod interface;
mod vendor;

pub use device::{DeviceReport, DeviceStatus, QueryStatistics, UNKNOWN_PLATFORM};
pub use interface::{CanonicalInterface, EntryFailure, NormalizeOutcome, UNKNOWN_NAME};
pub use vendor::VendorFamily;
