// crates/plangate-config/src/lib.rs
// ============================================================================
// Module: Plan Gate Configuration
// Description: TOML-backed run configuration with fail-closed validation.
// Purpose: Load module directory, parameter set, retry policy, and scenario
// declarations for harness runs.
// Dependencies: plangate-core, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Run configuration binds everything a harness invocation needs: the
//! module directory under validation, the parameter set, an optional retry
//! policy, and an optional scenario list for the CLI runner. Loading is
//! fail-closed: unknown keys, unsupported variable value types, empty
//! required fields, and duplicate scenario names are all rejected at load
//! time rather than papered over with defaults.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use plangate_core::RetryPolicy;
use plangate_core::TerraformOptions;
use plangate_core::VarMap;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation failures.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {message}")]
    Read {
        /// Path that failed to read.
        path: String,
        /// Human-readable read failure.
        message: String,
    },
    /// The configuration file is not valid TOML for this schema.
    #[error("failed to parse config: {message}")]
    Parse {
        /// Human-readable parse failure.
        message: String,
    },
    /// The module directory entry is empty.
    #[error("module dir must not be empty")]
    EmptyModuleDir,
    /// A retry section declared a zero attempt budget.
    #[error("retry max_attempts must be >= 1")]
    ZeroAttempts,
    /// A scenario entry carries an empty name.
    #[error("scenario names must not be empty")]
    EmptyScenarioName,
    /// Two scenario entries share a name.
    #[error("duplicate scenario name: {name}")]
    DuplicateScenario {
        /// The repeated name.
        name: String,
    },
}

// ============================================================================
// SECTION: Configuration Schema
// ============================================================================

/// Module directory section.
///
/// # Invariants
/// - `dir` is non-empty after validation; the path itself is checked by the
///   driver, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleConfig {
    /// Directory holding the module configuration under validation.
    pub dir: String,
}

/// Retry section mapped onto the core retry policy.
///
/// # Invariants
/// - `max_attempts` must be >= 1 after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetryConfig {
    /// Total attempts allowed for one invocation.
    pub max_attempts: u32,
    /// Pause between attempts, in seconds.
    pub backoff_secs: u64,
    /// Retryable output substrings; absent means the stock transient list.
    #[serde(default)]
    pub retryable_messages: Option<Vec<String>>,
}

impl RetryConfig {
    /// Converts the section into the core retry policy. An absent message
    /// list keeps the stock transient-failure messages.
    #[must_use]
    pub fn to_policy(&self) -> RetryPolicy {
        let mut policy = RetryPolicy::default_retryable_errors();
        policy.max_attempts = self.max_attempts;
        policy.backoff = Duration::from_secs(self.backoff_secs);
        if let Some(messages) = &self.retryable_messages {
            policy.retryable_messages = messages.clone();
        }
        policy
    }
}

/// One scenario declaration for the CLI runner.
///
/// # Invariants
/// - Names are unique and non-empty after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Scenario name used in reports and log lines.
    pub name: String,
    /// Whether the scenario opts into the guaranteed cleanup step.
    #[serde(default)]
    pub cleanup: bool,
}

/// Full harness run configuration.
///
/// # Invariants
/// - Validation is fail-closed; a loaded value has passed every check in
///   [`HarnessConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Module directory section.
    pub module: ModuleConfig,
    /// Parameter set handed to the tool; string and string-list values
    /// only.
    #[serde(default)]
    pub vars: VarMap,
    /// Optional retry section.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
    /// Optional scenario declarations.
    #[serde(default)]
    pub scenarios: Vec<ScenarioConfig>,
}

impl HarnessConfig {
    /// Checks every fail-closed invariant on the loaded value.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] violated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.module.dir.trim().is_empty() {
            return Err(ConfigError::EmptyModuleDir);
        }
        if let Some(retry) = &self.retry {
            if retry.max_attempts == 0 {
                return Err(ConfigError::ZeroAttempts);
            }
        }
        let mut seen = Vec::with_capacity(self.scenarios.len());
        for scenario in &self.scenarios {
            if scenario.name.trim().is_empty() {
                return Err(ConfigError::EmptyScenarioName);
            }
            if seen.contains(&scenario.name.as_str()) {
                return Err(ConfigError::DuplicateScenario {
                    name: scenario.name.clone(),
                });
            }
            seen.push(scenario.name.as_str());
        }
        Ok(())
    }

    /// Builds driver options with the module directory resolved against a
    /// base directory (usually the config file's parent).
    #[must_use]
    pub fn options_rooted_at(&self, base: &Path) -> TerraformOptions {
        let dir = base.join(&self.module.dir);
        let mut options = TerraformOptions::new(dir).with_vars(self.vars.clone());
        if let Some(retry) = &self.retry {
            options = options.with_retry(retry.to_policy());
        }
        options
    }

    /// Builds driver options using the module directory as written.
    #[must_use]
    pub fn options(&self) -> TerraformOptions {
        self.options_rooted_at(Path::new(""))
    }
}

// ============================================================================
// SECTION: Loading
// ============================================================================

/// Parses and validates configuration contents.
///
/// # Errors
///
/// Returns [`ConfigError`] on malformed TOML or any violated invariant.
pub fn parse(contents: &str) -> Result<HarnessConfig, ConfigError> {
    let config: HarnessConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
        message: source.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

/// Reads, parses, and validates a configuration file.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file cannot be read or fails
/// validation.
pub fn load(path: &Path) -> Result<HarnessConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        message: source.to_string(),
    })?;
    parse(&contents)
}

/// Returns the directory a config file's relative entries resolve against.
#[must_use]
pub fn base_dir(config_path: &Path) -> PathBuf {
    config_path.parent().map_or_else(|| PathBuf::from(""), Path::to_path_buf)
}
