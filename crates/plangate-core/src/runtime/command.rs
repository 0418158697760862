// crates/plangate-core/src/runtime/command.rs
// ============================================================================
// Module: Plan Gate Command Runner
// Description: Blocking subprocess invocation with output capture.
// Purpose: Run the provisioning tool and apply the pass-through retry
// policy.
// Dependencies: crate::core::retry, std::process, tracing
// ============================================================================

//! ## Overview
//! One tool invocation is one subprocess: spawn, block, capture. A nonzero
//! exit is not an error at this layer (callers interpret exit codes), but a
//! process that cannot be spawned at all is. The retry wrapper re-runs a
//! failed invocation whose combined output matches a retryable message,
//! sleeping the policy backoff between attempts.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::Command;
use std::thread;

use thiserror::Error;
use tracing::debug;
use tracing::warn;

use crate::core::retry::RetryPolicy;

// ============================================================================
// SECTION: Command Specification
// ============================================================================

/// One fully described tool invocation.
///
/// # Invariants
/// - `dir` is the process working directory; the invocation never writes
///   outside what the tool itself writes there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program to run.
    pub program: PathBuf,
    /// Arguments in order.
    pub args: Vec<String>,
    /// Working directory for the process.
    pub dir: PathBuf,
    /// Extra environment entries for the process.
    pub env: BTreeMap<String, String>,
}

impl CommandSpec {
    /// Renders the invocation for log lines.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{} {}", self.program.display(), self.args.join(" "))
    }
}

// ============================================================================
// SECTION: Command Output
// ============================================================================

/// Captured outcome of one subprocess run.
///
/// # Invariants
/// - `code` is `-1` when the process was terminated by a signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Process exit code.
    pub code: i32,
    /// Captured stdout, lossily decoded.
    pub stdout: String,
    /// Captured stderr, lossily decoded.
    pub stderr: String,
}

impl CommandOutput {
    /// Returns true on a zero exit code.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.code == 0
    }

    /// Returns stdout and stderr joined for message matching.
    #[must_use]
    pub fn combined(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Failure to launch the tool process at all.
///
/// # Invariants
/// - Raised only for spawn failures; tool-reported failures surface as
///   nonzero exit codes in [`CommandOutput`].
#[derive(Debug, Error)]
#[error("failed to spawn {program}: {message}")]
pub struct SpawnError {
    /// Program that failed to launch.
    pub program: String,
    /// Human-readable launch failure.
    pub message: String,
}

// ============================================================================
// SECTION: Invocation
// ============================================================================

/// Runs one subprocess to completion, capturing output.
///
/// # Errors
///
/// Returns [`SpawnError`] when the process cannot be launched; a nonzero
/// exit is reported through [`CommandOutput::code`], not as an error.
pub fn run(spec: &CommandSpec) -> Result<CommandOutput, SpawnError> {
    debug!(command = %spec.render(), dir = %spec.dir.display(), "invoking provisioning tool");
    let output = Command::new(&spec.program)
        .args(&spec.args)
        .current_dir(&spec.dir)
        .envs(&spec.env)
        .output()
        .map_err(|source| SpawnError {
            program: spec.program.display().to_string(),
            message: source.to_string(),
        })?;
    Ok(CommandOutput {
        code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

/// Runs one subprocess, re-running transient failures per the policy.
///
/// A failed attempt is retried only when the policy marks its combined
/// output retryable and the attempt budget is not exhausted. The final
/// attempt's output is returned either way.
///
/// # Errors
///
/// Returns [`SpawnError`] when the process cannot be launched; spawn
/// failures are never retried.
pub fn run_with_retry(
    spec: &CommandSpec,
    retry: Option<&RetryPolicy>,
) -> Result<CommandOutput, SpawnError> {
    let max_attempts = retry.map_or(1, |policy| policy.max_attempts.max(1));
    let mut attempt = 1;
    loop {
        let output = run(spec)?;
        if output.success() || attempt >= max_attempts {
            return Ok(output);
        }
        let Some(policy) = retry else {
            return Ok(output);
        };
        if !policy.is_retryable(&output.combined()) {
            return Ok(output);
        }
        warn!(
            command = %spec.render(),
            attempt,
            max_attempts,
            "transient tool failure, retrying after backoff"
        );
        thread::sleep(policy.backoff);
        attempt += 1;
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
