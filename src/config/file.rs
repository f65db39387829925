//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".netif-tools.yaml",
    ".netif-tools.yml",
    "netif-tools.yaml",
    "netif-tools.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/netif-tools/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!("Config file {} does not exist, searching defaults", path.display());
    }

    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    if let Some(path) = user_config_dir().and_then(|dir| find_config_in_dir(&dir)) {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// `~/.config/netif-tools` (or the platform equivalent).
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(env!("CARGO_PKG_NAME")))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Values left at their defaults in `other` do not override.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        // NSO connection
        if other.nso.host != defaults.nso.host {
            self.nso.host.clone_from(&other.nso.host);
        }
        if other.nso.port != defaults.nso.port {
            self.nso.port = other.nso.port;
        }
        if other.nso.scheme != defaults.nso.scheme {
            self.nso.scheme.clone_from(&other.nso.scheme);
        }
        if other.nso.username != defaults.nso.username {
            self.nso.username.clone_from(&other.nso.username);
        }
        if other.nso.password != defaults.nso.password {
            self.nso.password.clone_from(&other.nso.password);
        }
        if other.nso.timeout_secs != defaults.nso.timeout_secs {
            self.nso.timeout_secs = other.nso.timeout_secs;
        }
        if other.nso.push_timeout_secs != defaults.nso.push_timeout_secs {
            self.nso.push_timeout_secs = other.nso.push_timeout_secs;
        }
        if other.nso.insecure {
            self.nso.insecure = true;
        }

        // Output config - only override if explicitly set
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
        if other.output.description_width != defaults.output.description_width {
            self.output.description_width = other.output.description_width;
        }
        if other.output.ip_width != defaults.output.ip_width {
            self.output.ip_width = other.output.ip_width;
        }
        if !other.output.show_failures {
            self.output.show_failures = false;
        }

        // Behavior config (booleans - if set to true, override)
        if other.behavior.sequential {
            self.behavior.sequential = true;
        }
        if !other.behavior.devices.is_empty() {
            self.behavior.devices.clone_from(&other.behavior.devices);
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    r"# netif-tools configuration
# Place this file at .netif-tools.yaml in the working directory
# or at ~/.config/netif-tools/netif-tools.yaml.
#
# CLI arguments and NSO_* environment variables override these values.

nso:
  # Host name, or a full URL such as https://nso.example.net:8888
  host: localhost
  port: 8080
  scheme: http
  username: admin
  password: admin
  # RESTCONF read timeout in seconds
  timeout_secs: 10
  # Configuration push timeout in seconds
  push_timeout_secs: 30
  # Accept self-signed certificates
  insecure: false

output:
  # Format: table, json, csv (omit to pick from the file extension)
  # format: table
  # Output file path (omit for stdout)
  # file: interfaces.json
  no_color: false
  description_width: 40
  ip_width: 30
  show_failures: true

behavior:
  # Query devices one at a time instead of in parallel
  sequential: false
  # Restrict queries to these devices
  # devices: [asa-fw-01, xr-core-01]
  quiet: false
"
    .to_string()
}
