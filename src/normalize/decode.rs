//! Shared decoding helpers for vendor payloads.
//!
//! Each vendor entry is decoded into a typed structure whose fields are all
//! optional. A field that is absent decodes to `None`; a field that is present
//! with the wrong shape makes the whole entry malformed.

use crate::model::{CanonicalInterface, NormalizeOutcome, VendorFamily};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// A JSON leaf that may be sent as a string, a number or a boolean.
///
/// YANG integer leaves and list keys (`id`, `prefix-length`, `vdom`) are not
/// encoded consistently across NEDs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl Scalar {
    pub(crate) fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
            Self::Flag(b) => b.to_string(),
        }
    }
}

/// Turn an optional scalar into non-empty text.
pub(crate) fn text(value: Option<Scalar>) -> Option<String> {
    value.map(Scalar::into_text).filter(|s| !s.is_empty())
}

/// Drop empty strings so that `""` and an absent leaf behave the same.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Format `"ip mask"` when a mask is present, the bare ip otherwise, and an
/// empty string when there is no ip at all.
pub(crate) fn join_ip_mask(ip: Option<String>, mask: Option<String>) -> String {
    match (non_empty(ip), non_empty(mask)) {
        (Some(ip), Some(mask)) => format!("{ip} {mask}"),
        (Some(ip), None) => ip,
        (None, _) => String::new(),
    }
}

/// Short name of a JSON value's type, for failure messages.
pub(crate) const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode one interface entry, reporting a readable reason on failure.
pub(crate) fn decode_entry<T: DeserializeOwned>(entry: &Value) -> Result<T, String> {
    if !entry.is_object() {
        return Err(format!("entry is {}, expected object", kind_of(entry)));
    }
    serde_json::from_value(entry.clone()).map_err(|e| e.to_string())
}

/// Find the first present, non-null value among `keys`.
pub(crate) fn locate_section<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| raw.get(*key))
        .find(|section| !section.is_null())
}

/// Record a dropped entry and log it.
pub(crate) fn record_failure(
    outcome: &mut NormalizeOutcome,
    device: &str,
    family: VendorFamily,
    index: usize,
    group: Option<&str>,
    reason: String,
) {
    match group {
        Some(group) => tracing::warn!(
            "{device}: dropping malformed {family} interface {group}[{index}]: {reason}"
        ),
        None => tracing::warn!("{device}: dropping malformed {family} interface [{index}]: {reason}"),
    }
    outcome.fail(index, group, reason);
}

/// Log a top-level section whose shape cannot be walked.
pub(crate) fn warn_section_shape(device: &str, family: VendorFamily, section: &Value, expected: &str) {
    tracing::warn!(
        "{device}: {family} interface payload is {}, expected {expected}; no interfaces extracted",
        kind_of(section)
    );
}

/// Normalize a section shaped as `{ "<type>": [entry, ...], ... }`.
///
/// Groups whose value is not a list are skipped. The group key is handed to
/// `build` so vendors can derive names and kinds from it.
pub(crate) fn normalize_grouped<T, F>(
    section: &Value,
    device: &str,
    family: VendorFamily,
    mut build: F,
) -> NormalizeOutcome
where
    T: DeserializeOwned,
    F: FnMut(&str, T) -> CanonicalInterface,
{
    let mut outcome = NormalizeOutcome::new();
    let Some(groups) = section.as_object() else {
        warn_section_shape(device, family, section, "object of interface types");
        return outcome;
    };

    for (group, entries) in groups {
        let Some(entries) = entries.as_array() else {
            continue;
        };
        for (index, entry) in entries.iter().enumerate() {
            match decode_entry::<T>(entry) {
                Ok(decoded) => outcome.push(build(group, decoded)),
                Err(reason) => {
                    record_failure(&mut outcome, device, family, index, Some(group), reason);
                }
            }
        }
    }
    outcome
}

/// Normalize a flat list of entries.
pub(crate) fn normalize_list<T, F>(
    entries: &[Value],
    device: &str,
    family: VendorFamily,
    mut build: F,
) -> NormalizeOutcome
where
    T: DeserializeOwned,
    F: FnMut(T) -> CanonicalInterface,
{
    let mut outcome = NormalizeOutcome::new();
    for (index, entry) in entries.iter().enumerate() {
        match decode_entry::<T>(entry) {
            Ok(decoded) => outcome.push(build(decoded)),
            Err(reason) => record_failure(&mut outcome, device, family, index, None, reason),
        }
    }
    outcome
}
