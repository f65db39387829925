//! Configuration validation for netif-tools.

use super::types::{AppConfig, BehaviorConfig, NsoConfig, OutputConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.nso.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for NsoConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.host.trim().is_empty() {
            errors.push(ConfigError::new("nso.host", "Host must not be empty"));
        }
        if !self.host.contains("://") {
            if self.port == 0 {
                errors.push(ConfigError::new("nso.port", "Port must be between 1 and 65535"));
            }
            if !matches!(self.scheme.as_str(), "http" | "https") {
                errors.push(ConfigError::new(
                    "nso.scheme",
                    format!("Invalid scheme '{}'. Valid options: http, https", self.scheme),
                ));
            }
        }
        if self.username.is_empty() {
            errors.push(ConfigError::new("nso.username", "Username must not be empty"));
        }
        if self.timeout_secs == 0 {
            errors.push(ConfigError::new("nso.timeout_secs", "Timeout must be at least 1 second"));
        }
        if self.push_timeout_secs == 0 {
            errors.push(ConfigError::new(
                "nso.push_timeout_secs",
                "Push timeout must be at least 1 second",
            ));
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(parent) = self.file.as_deref().and_then(std::path::Path::parent) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }

        // Anything shorter cannot hold a character plus the "..." marker.
        for (field, width) in [
            ("output.description_width", self.description_width),
            ("output.ip_width", self.ip_width),
        ] {
            if width < 4 {
                errors.push(ConfigError::new(
                    field,
                    format!("Column width must be at least 4, got {width}"),
                ));
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        self.devices
            .iter()
            .filter(|device| device.trim().is_empty())
            .map(|_| ConfigError::new("behavior.devices", "Device names must not be empty"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_invalid_nso_settings() {
        let nso = NsoConfig {
            host: String::new(),
            port: 0,
            scheme: "ftp".to_string(),
            timeout_secs: 0,
            ..NsoConfig::default()
        };
        let fields: Vec<String> = nso.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, ["nso.host", "nso.port", "nso.scheme", "nso.timeout_secs"]);
    }

    #[test]
    fn test_url_host_skips_port_and_scheme_checks() {
        let nso = NsoConfig {
            host: "https://nso.lab:8888".to_string(),
            port: 0,
            scheme: String::new(),
            ..NsoConfig::default()
        };
        assert!(nso.is_valid());
    }

    #[test]
    fn test_output_width_and_file() {
        let output = OutputConfig {
            description_width: 2,
            file: Some(PathBuf::from("/nonexistent-dir-for-netif/out.json")),
            ..OutputConfig::default()
        };
        let errors = output.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "output.file");
        assert_eq!(
            errors[1].to_string(),
            "output.description_width: Column width must be at least 4, got 2"
        );
    }

    #[test]
    fn test_blank_device_names_rejected() {
        let behavior = BehaviorConfig {
            devices: vec!["fw-1".to_string(), " ".to_string()],
            ..BehaviorConfig::default()
        };
        assert_eq!(behavior.validate().len(), 1);
    }
}
