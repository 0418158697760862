// system-tests/tests/helpers/cli.rs
// ============================================================================
// Module: CLI Helpers
// Description: Shared helpers for locating and invoking the plangate CLI.
// Purpose: Provide consistent CLI binary resolution across system-test
// suites.
// Dependencies: std::process, std::path
// ============================================================================

//! Helpers for invoking the plangate CLI in system-tests.

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

/// Locates the plangate CLI binary from the build tree, if present.
pub fn cli_binary() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("CARGO_BIN_EXE_plangate") {
        let candidate = PathBuf::from(path);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    resolve_cli_from_current_exe()
}

/// Runs the CLI with arguments and returns the process output.
pub fn run_cli(binary: &Path, args: &[&str]) -> Result<Output, String> {
    Command::new(binary)
        .args(args)
        .output()
        .map_err(|err| format!("run plangate failed: {err}"))
}

/// Resolves the binary from the test executable's profile directory.
fn resolve_cli_from_current_exe() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let profile_dir = exe.parent()?.parent()?;
    let candidate = profile_dir.join(format!("plangate{}", exe_suffix()));
    if candidate.exists() { Some(candidate) } else { None }
}

/// Platform executable suffix.
const fn exe_suffix() -> &'static str {
    if cfg!(windows) { ".exe" } else { "" }
}
