//! gNMI Get response unwrapping.

use serde_json::Value;

/// Collect every `val` from `notification[].update[]`, in response order.
///
/// Notifications or updates of the wrong shape are skipped. A response
/// without a `notification` list yields nothing.
#[must_use]
pub fn extract_update_values(response: &Value) -> Vec<Value> {
    let Some(notifications) = response.get("notification").and_then(Value::as_array) else {
        return Vec::new();
    };

    notifications
        .iter()
        .filter_map(|notification| notification.get("update").and_then(Value::as_array))
        .flatten()
        .filter_map(|update| update.get("val"))
        .filter(|val| !val.is_null())
        .cloned()
        .collect()
}
