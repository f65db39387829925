//! Abstraction over where device data comes from.

use crate::model::VendorFamily;
use crate::restconf::ClientError;
use serde_json::Value;

/// A source of device inventory, platform tags and raw interface payloads.
///
/// [`RestconfClient`](crate::restconf::RestconfClient) implements this for
/// NSO; tests and offline tooling can provide their own.
pub trait DeviceSource: Sync {
    /// Device names in inventory order
    fn list_devices(&self) -> Result<Vec<String>, ClientError>;

    /// Platform tag (NED id) of a device
    fn detect_platform(&self, device: &str) -> Result<String, ClientError>;

    /// Raw interface payload; `Ok(None)` when the device has no data.
    fn fetch_interfaces(
        &self,
        device: &str,
        family: VendorFamily,
    ) -> Result<Option<Value>, ClientError>;
}
