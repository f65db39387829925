//! Configuration module for netif-tools.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.netif-tools.yaml` file in the working directory or in
//! `~/.config/netif-tools/`:
//!
//! ```yaml
//! nso:
//!   host: nso.example.net
//!   port: 8888
//!   scheme: https
//! output:
//!   format: json
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_NSO_HOST, DEFAULT_NSO_PORT, DEFAULT_PUSH_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
pub use types::{AppConfig, AppConfigBuilder, BehaviorConfig, NsoConfig, OutputConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    user_config_dir, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.netif-tools.yaml`.
///
/// # Errors
///
/// Returns the serializer error if the schema cannot be rendered.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_sections() {
        let schema = generate_json_schema().expect("schema");
        assert!(schema.contains("\"nso\""));
        assert!(schema.contains("push_timeout_secs"));
        assert!(schema.contains("\"csv\""));
    }
}
