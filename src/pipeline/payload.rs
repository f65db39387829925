//! Loading captured device payloads from disk.

use crate::error::{ErrorContext, NetifError, Result};
use serde_json::Value;
use std::path::Path;

/// Read a JSON payload file (a RESTCONF response or gNMI Get dump).
pub fn load_payload(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| NetifError::io(path, e))?;
    serde_json::from_str(&content).with_context(|| format!("reading payload {}", path.display()))
}
