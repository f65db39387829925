//! Push command handler.
//!
//! Implements the `push` subcommand: PATCH XML configuration files into
//! device configurations through NSO.

use crate::config::AppConfig;
use crate::error::{NetifError, OptionContext};
use crate::pipeline::exit_codes;
use crate::restconf::{extract_device_name, load_xml_file, RestconfClient};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Outcome of pushing a batch of files.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PushSummary {
    pub succeeded: Vec<PathBuf>,
    /// Files that failed, with the reason
    pub failed: Vec<(PathBuf, String)>,
}

impl PushSummary {
    #[must_use]
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.failed.is_empty() {
            exit_codes::SUCCESS
        } else {
            exit_codes::FAILURES
        }
    }
}

/// Push every file and print a summary.
pub fn run_push(files: &[PathBuf], device: Option<&str>, config: &AppConfig) -> Result<i32> {
    let client = RestconfClient::new(config.nso.to_client_config())
        .context("failed to create RESTCONF client")?;

    let mut summary = PushSummary::default();
    for path in files {
        match push_file(&client, path, device) {
            Ok(()) => summary.succeeded.push(path.clone()),
            Err(e) => {
                tracing::error!("{}: {e:#}", path.display());
                summary.failed.push((path.clone(), format!("{e:#}")));
            }
        }
    }

    if !config.behavior.quiet {
        print_summary(&summary);
    }
    Ok(summary.exit_code())
}

fn push_file(client: &RestconfClient, path: &Path, device: Option<&str>) -> Result<()> {
    let xml = load_xml_file(path)?;
    let device = resolve_device(&xml, device)
        .with_context(|| format!("cannot push {}", path.display()))?;

    let response = client
        .push_config(&device, &xml)
        .with_context(|| format!("push to {device} failed"))?;
    tracing::info!(
        "Configuration pushed to {device} (HTTP {}, {:.2}s)",
        response.status,
        response.elapsed.as_secs_f64()
    );
    Ok(())
}

/// The explicit device name, or the first `<name>` element in the payload.
fn resolve_device(xml: &str, explicit: Option<&str>) -> crate::error::Result<String> {
    if let Some(device) = explicit {
        if device.trim().is_empty() {
            return Err(NetifError::validation("device name must not be empty"));
        }
        return Ok(device.to_string());
    }
    extract_device_name(xml).context_none("no <name> element found; pass --device")
}

fn print_summary(summary: &PushSummary) {
    eprintln!();
    eprintln!(
        "Pushed {} of {} file(s)",
        summary.succeeded.len(),
        summary.total()
    );
    for path in &summary.succeeded {
        eprintln!("  ok      {}", path.display());
    }
    for (path, reason) in &summary.failed {
        eprintln!("  failed  {}: {reason}", path.display());
    }
}
