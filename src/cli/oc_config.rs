//! OpenConfig configuration payload command.

use crate::openconfig::{build_interface_config, INTERFACE_CONFIG_PATH};
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use anyhow::{Context, Result};
use std::net::Ipv4Addr;
use std::path::PathBuf;

/// Print (or write) the OpenConfig payload configuring one interface.
pub fn run_oc_config(
    name: &str,
    ip: &str,
    prefix_length: u8,
    description: Option<&str>,
    output_file: Option<PathBuf>,
    quiet: bool,
) -> Result<i32> {
    if prefix_length > 32 {
        anyhow::bail!("prefix length must be between 0 and 32, got {prefix_length}");
    }
    ip.parse::<Ipv4Addr>()
        .with_context(|| format!("'{ip}' is not an IPv4 address"))?;

    let payload = build_interface_config(name, ip, prefix_length, description);
    let content = serde_json::to_string_pretty(&payload).context("failed to serialize payload")?;

    if !quiet {
        tracing::info!("gNMI Set path: {INTERFACE_CONFIG_PATH}");
    }
    write_output(&content, &OutputTarget::from_option(output_file), quiet)?;
    Ok(exit_codes::SUCCESS)
}
