//! Helpers for pushing XML configuration files through NSO.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;

/// HTTP statuses NSO answers a successful PATCH with.
pub const PUSH_SUCCESS_STATUSES: &[u16] = &[200, 201, 204];

/// Errors while reading a configuration file.
#[derive(Error, Debug)]
pub enum PushFileError {
    #[error("file not found: {0:?}")]
    NotFound(PathBuf),

    #[error("not a file: {0:?}")]
    NotAFile(PathBuf),

    #[error("cannot decode {0:?}: not valid UTF-8")]
    InvalidUtf8(PathBuf),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// NSO's answer to an accepted configuration push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushResponse {
    pub status: u16,
    pub body: String,
    pub elapsed: Duration,
}

/// Read an XML configuration file.
///
/// Files without an `.xml` or `.txt` extension are loaded but warned about.
pub fn load_xml_file(path: &Path) -> Result<String, PushFileError> {
    if !path.exists() {
        return Err(PushFileError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(PushFileError::NotAFile(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    if !matches!(extension.as_deref(), Some("xml" | "txt")) {
        tracing::warn!("File doesn't have .xml extension: {}", path.display());
    }

    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::InvalidData {
            PushFileError::InvalidUtf8(path.to_path_buf())
        } else {
            PushFileError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    tracing::debug!("Loaded {} ({} characters)", path.display(), content.chars().count());
    Ok(content)
}

fn name_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"<name>([^<]+)</name>").ok())
        .as_ref()
}

/// Device name from the first `<name>…</name>` element of a payload.
#[must_use]
pub fn extract_device_name(xml: &str) -> Option<String> {
    name_pattern()?
        .captures(xml)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
