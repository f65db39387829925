//! Default values for netif-tools configuration.

/// NSO host used when neither the config file nor the CLI names one.
pub const DEFAULT_NSO_HOST: &str = "localhost";

/// NSO RESTCONF port.
pub const DEFAULT_NSO_PORT: u16 = 8080;

pub const DEFAULT_NSO_SCHEME: &str = "http";

pub const DEFAULT_NSO_USERNAME: &str = "admin";

pub const DEFAULT_NSO_PASSWORD: &str = "admin";

/// Timeout for RESTCONF reads, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Timeout for configuration pushes, in seconds.
pub const DEFAULT_PUSH_TIMEOUT_SECS: u64 = 30;
