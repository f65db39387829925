//! Verify command handler.
//!
//! Implements the `verify` subcommand: normalize an OpenConfig payload and
//! check it against the expected interfaces of one device.

use crate::model::NormalizeOutcome;
use crate::normalize::InterfaceNormalizer;
use crate::openconfig::{load_expected_interfaces, verify_interfaces, VerificationReport};
use crate::pipeline::{exit_codes, load_payload};
use anyhow::{Context, Result};
use std::path::Path;

/// Run the verify command
pub fn run_verify(payload: &Path, expected: &Path, device: &str, quiet: bool) -> Result<i32> {
    let raw = load_payload(payload)?;
    let outcome: NormalizeOutcome = InterfaceNormalizer::for_device(device).normalize_openconfig(&raw);
    tracing::info!("{device}: {} interface(s) in payload", outcome.len());

    let expected = load_expected_interfaces(expected, device)
        .with_context(|| format!("failed to load expected interfaces from {}", expected.display()))?;
    let report = verify_interfaces(&expected, &outcome.interfaces);

    if !quiet {
        print_report(device, &report);
    }

    Ok(if report.is_success() {
        exit_codes::SUCCESS
    } else {
        exit_codes::FAILURES
    })
}

fn print_report(device: &str, report: &VerificationReport) {
    println!("Verification for {device}");
    for name in &report.matched {
        println!("  PASS     {name}");
    }
    for name in &report.missing {
        println!("  MISSING  {name}");
    }
    for mismatch in &report.mismatches {
        println!("  FAIL     {mismatch}");
    }
    println!(
        "{} matched, {} missing, {} mismatch(es)",
        report.matched.len(),
        report.missing.len(),
        report.mismatches.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).expect("write");
        path
    }

    #[test]
    fn test_verify_pass_and_fail() {
        let dir = TempDir::new().expect("tempdir");
        let payload = write(
            &dir,
            "leaf1.json",
            r#"{"openconfig-interfaces:interface": [
                {"name": "Ethernet1", "state": {"enabled": true, "description": "to spine1", "oper-status": "UP"}}
            ]}"#,
        );
        let good = write(
            &dir,
            "good.json",
            r#"{"leaf1": [{"name": "Ethernet1", "description": "to spine1", "admin_status": "up"}]}"#,
        );
        let bad = write(
            &dir,
            "bad.json",
            r#"{"leaf1": [{"name": "Ethernet1", "description": "to spine2"}, {"name": "Ethernet9"}]}"#,
        );

        assert_eq!(run_verify(&payload, &good, "leaf1", true).expect("verify"), exit_codes::SUCCESS);
        assert_eq!(run_verify(&payload, &bad, "leaf1", true).expect("verify"), exit_codes::FAILURES);
    }

    #[test]
    fn test_unknown_device_is_an_error() {
        let dir = TempDir::new().expect("tempdir");
        let payload = write(&dir, "p.json", r#"{"interface": []}"#);
        let expected = write(&dir, "e.json", r#"{"leaf1": []}"#);
        assert!(run_verify(&payload, &expected, "leaf2", true).is_err());
    }
}
