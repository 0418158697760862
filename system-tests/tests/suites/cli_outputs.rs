// system-tests/tests/suites/cli_outputs.rs
// ============================================================================
// Module: CLI Output Tests
// Description: System tests for the plangate CLI surface.
// Purpose: Ensure CLI config workflows and failure exits stay stable.
// Dependencies: system-tests helpers, plangate-cli
// ============================================================================

//! ## Overview
//! System tests for the plangate CLI surface.
//! Purpose: Ensure CLI config workflows and failure exits stay stable.
//! Invariants:
//! - Suites skip, rather than fail, when the CLI binary is unavailable.
//! - No test here invokes the real provisioning tool.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::fs;

use tempfile::TempDir;

use crate::helpers::cli::cli_binary;
use crate::helpers::cli::run_cli;

/// A valid run configuration for CLI workflows.
const CLI_CONFIG: &str = r#"[module]
dir = "../"

[vars]
cluster_name = "test-eks-cluster"
environment = "test"
vpc_id = "vpc-test123"
subnet_ids = ["subnet-test1", "subnet-test2"]
allowed_cidr_blocks = ["10.0.0.0/8"]
"#;

#[test]
fn config_validate_reports_the_loaded_shape() -> Result<(), Box<dyn std::error::Error>> {
    let Some(cli) = cli_binary() else {
        return Ok(());
    };
    let scratch = TempDir::new()?;
    let config_path = scratch.path().join("plangate.toml");
    fs::write(&config_path, CLI_CONFIG)?;
    let output = run_cli(
        &cli,
        &["config", "validate", "--config", config_path.to_str().unwrap_or_default()],
    )?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("config ok"));
    assert!(stdout.contains("5 variables"));
    Ok(())
}

#[test]
fn config_validate_json_is_machine_readable() -> Result<(), Box<dyn std::error::Error>> {
    let Some(cli) = cli_binary() else {
        return Ok(());
    };
    let scratch = TempDir::new()?;
    let config_path = scratch.path().join("plangate.toml");
    fs::write(&config_path, CLI_CONFIG)?;
    let output = run_cli(
        &cli,
        &[
            "config",
            "validate",
            "--config",
            config_path.to_str().unwrap_or_default(),
            "--format",
            "json",
        ],
    )?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(summary["module_dir"], "../");
    assert_eq!(summary["variables"], 5);
    assert_eq!(summary["scenarios"], 0);
    Ok(())
}

#[test]
fn config_validate_rejects_malformed_files() -> Result<(), Box<dyn std::error::Error>> {
    let Some(cli) = cli_binary() else {
        return Ok(());
    };
    let scratch = TempDir::new()?;
    let config_path = scratch.path().join("plangate.toml");
    fs::write(&config_path, "[module]\ndir = \"\"\n")?;
    let output = run_cli(
        &cli,
        &["config", "validate", "--config", config_path.to_str().unwrap_or_default()],
    )?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("module dir"));
    Ok(())
}

#[test]
fn plan_with_a_missing_config_exits_nonzero() -> Result<(), Box<dyn std::error::Error>> {
    let Some(cli) = cli_binary() else {
        return Ok(());
    };
    let output = run_cli(&cli, &["plan", "--config", "/nonexistent/plangate.toml"])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read config"));
    Ok(())
}
