// crates/plangate-core/src/core/options.rs
// ============================================================================
// Module: Plan Gate Driver Options
// Description: The full input handed to every driver operation.
// Purpose: Bind a module directory, parameter set, and invocation knobs
// into one immutable value.
// Dependencies: crate::core::{retry, vars}
// ============================================================================

//! ## Overview
//! [`TerraformOptions`] is the only state a driver operation receives. It is
//! built once per scenario and never mutated afterwards, which is what makes
//! scenarios safe to run in parallel: each owns its options, and the module
//! directory they point at is treated as read-only by every operation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use crate::core::retry::RetryPolicy;
use crate::core::vars::VarMap;
use crate::core::vars::VarValue;

// ============================================================================
// SECTION: Driver Options
// ============================================================================

/// Input for a single driver lifecycle operation.
///
/// # Invariants
/// - Immutable once handed to a driver; operations never write through it.
/// - `module_dir` points at configuration the harness does not own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerraformOptions {
    /// Directory holding the module configuration under validation.
    pub module_dir: PathBuf,
    /// Parameter set passed to the tool as `-var` flags.
    pub vars: VarMap,
    /// Suppresses ANSI color in tool output when set.
    pub no_color: bool,
    /// Extra environment entries for the tool process.
    pub env: BTreeMap<String, String>,
    /// Retry policy passed through to tool invocations; `None` disables
    /// retries entirely.
    pub retry: Option<RetryPolicy>,
    /// Overrides the tool binary; `None` resolves from `PATH`.
    pub binary: Option<PathBuf>,
}

impl TerraformOptions {
    /// Creates options for a module directory with an empty parameter set.
    #[must_use]
    pub fn new(module_dir: impl Into<PathBuf>) -> Self {
        Self {
            module_dir: module_dir.into(),
            vars: VarMap::new(),
            no_color: false,
            env: BTreeMap::new(),
            retry: None,
            binary: None,
        }
    }

    /// Replaces the parameter set.
    #[must_use]
    pub fn with_vars(mut self, vars: VarMap) -> Self {
        self.vars = vars;
        self
    }

    /// Adds a single variable to the parameter set.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: VarValue) -> Self {
        self.vars = self.vars.with(name, value);
        self
    }

    /// Suppresses ANSI color in tool output.
    #[must_use]
    pub const fn with_no_color(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Adds an environment entry for the tool process.
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Attaches a retry policy for tool invocations.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Overrides the tool binary path.
    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = Some(binary.into());
        self
    }

    /// Returns the module directory under validation.
    #[must_use]
    pub fn module_dir(&self) -> &Path {
        &self.module_dir
    }
}
