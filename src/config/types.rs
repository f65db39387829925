//! Configuration types for netif-tools.

use super::defaults::{
    DEFAULT_NSO_HOST, DEFAULT_NSO_PASSWORD, DEFAULT_NSO_PORT, DEFAULT_NSO_SCHEME,
    DEFAULT_NSO_USERNAME, DEFAULT_PUSH_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
use crate::reports::{ReportConfig, ReportFormat, ReportMetadata, DESCRIPTION_WIDTH, IP_ADDRESS_WIDTH};
use crate::restconf::RestconfConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// NSO connection settings
    pub nso: NsoConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Renderer settings derived from the output section.
    #[must_use]
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            description_width: self.output.description_width,
            ip_width: self.output.ip_width,
            show_failures: self.output.show_failures,
            metadata: ReportMetadata::new(),
        }
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the NSO host (or a full URL).
    pub fn nso_host(mut self, host: impl Into<String>) -> Self {
        self.config.nso.host = host.into();
        self
    }

    pub const fn nso_port(mut self, port: u16) -> Self {
        self.config.nso.port = port;
        self
    }

    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.config.nso.username = username.into();
        self.config.nso.password = password.into();
        self
    }

    pub const fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.nso.timeout_secs = secs;
        self
    }

    pub const fn insecure(mut self, insecure: bool) -> Self {
        self.config.nso.insecure = insecure;
        self
    }

    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = Some(format);
        self
    }

    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Process devices one at a time instead of in parallel.
    pub const fn sequential(mut self, sequential: bool) -> Self {
        self.config.behavior.sequential = sequential;
        self
    }

    /// Restrict queries to the named devices.
    pub fn devices(mut self, devices: Vec<String>) -> Self {
        self.config.behavior.devices = devices;
        self
    }

    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section Configurations
// ============================================================================

/// Connection settings for the NSO RESTCONF API.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NsoConfig {
    /// Host name, or a full `scheme://host:port` URL
    pub host: String,
    pub port: u16,
    /// `http` or `https`
    pub scheme: String,
    pub username: String,
    pub password: String,
    /// Timeout for read requests in seconds
    pub timeout_secs: u64,
    /// Timeout for configuration pushes in seconds
    pub push_timeout_secs: u64,
    /// Accept invalid TLS certificates
    pub insecure: bool,
}

impl Default for NsoConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_NSO_HOST.to_string(),
            port: DEFAULT_NSO_PORT,
            scheme: DEFAULT_NSO_SCHEME.to_string(),
            username: DEFAULT_NSO_USERNAME.to_string(),
            password: DEFAULT_NSO_PASSWORD.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            push_timeout_secs: DEFAULT_PUSH_TIMEOUT_SECS,
            insecure: false,
        }
    }
}

impl std::fmt::Debug for NsoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NsoConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("scheme", &self.scheme)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("push_timeout_secs", &self.push_timeout_secs)
            .field("insecure", &self.insecure)
            .finish()
    }
}

impl NsoConfig {
    /// `scheme://host:port`, or `host` itself when it is already a URL.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.host.contains("://") {
            self.host.trim_end_matches('/').to_string()
        } else {
            format!("{}://{}:{}", self.scheme, self.host, self.port)
        }
    }

    /// Settings for [`crate::restconf::RestconfClient`].
    #[must_use]
    pub fn to_client_config(&self) -> RestconfConfig {
        RestconfConfig {
            base_url: self.base_url(),
            username: self.username.clone(),
            password: self.password.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            push_timeout: Duration::from_secs(self.push_timeout_secs),
            insecure: self.insecure,
        }
    }
}

/// Output-related configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format (None picks one from the output file extension)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ReportFormat>,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Maximum characters shown in the description column
    pub description_width: usize,
    /// Maximum characters shown in the IP address column
    pub ip_width: usize,
    /// List dropped malformed entries under each device
    pub show_failures: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            file: None,
            no_color: false,
            description_width: DESCRIPTION_WIDTH,
            ip_width: IP_ADDRESS_WIDTH,
            show_failures: true,
        }
    }
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Query devices one at a time
    pub sequential: bool,
    /// Only query these devices (empty for every device NSO manages)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub devices: Vec<String>,
    /// Suppress non-essential output
    pub quiet: bool,
}
