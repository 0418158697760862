// crates/plangate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Plan Gate Interfaces
// Description: The capability interface for provisioning-tool lifecycles.
// Purpose: Define the contract surface between scenarios and the tool.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Scenarios never talk to the provisioning tool directly; they talk to a
//! [`Provisioner`]. The one concrete implementation shells out to the
//! Terraform CLI, and test doubles substitute freely because the interface
//! carries no tool specifics beyond the lifecycle shape: initialize, plan,
//! destroy. Implementations must be side-effect free between calls: the
//! options value is the only state an operation may read.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::options::TerraformOptions;
use crate::core::plan::PlanResult;
use crate::core::vars::VarEncodeError;

// ============================================================================
// SECTION: Driver Errors
// ============================================================================

/// Tool initialization failures.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum InitError {
    /// The module directory is missing or not a directory.
    #[error("module directory is not usable: {path}")]
    ModuleDir {
        /// Offending path as handed to the driver.
        path: String,
    },
    /// The tool process could not be launched.
    #[error("failed to invoke provisioning tool: {message}")]
    Invocation {
        /// Human-readable launch failure.
        message: String,
    },
    /// The tool ran and reported an initialization failure.
    #[error("initialization failed (exit {code}): {stderr}")]
    Tool {
        /// Tool exit code (`-1` when terminated by signal).
        code: i32,
        /// Captured tool stderr.
        stderr: String,
    },
}

/// Plan computation failures.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The parameter set could not be encoded for the tool.
    #[error(transparent)]
    Variables(#[from] VarEncodeError),
    /// The tool process could not be launched.
    #[error("failed to invoke provisioning tool: {message}")]
    Invocation {
        /// Human-readable launch failure.
        message: String,
    },
    /// The tool ran and rejected the plan.
    #[error("plan failed (exit {code}): {stderr}")]
    Tool {
        /// Tool exit code (`-1` when terminated by signal).
        code: i32,
        /// Captured tool stderr.
        stderr: String,
    },
}

/// Teardown failures.
///
/// Destroy errors raised from a deferred cleanup path are demoted to
/// warnings by the caller; they never retroactively fail a passed scenario.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum DestroyError {
    /// The parameter set could not be encoded for the tool.
    #[error(transparent)]
    Variables(#[from] VarEncodeError),
    /// The tool process could not be launched.
    #[error("failed to invoke provisioning tool: {message}")]
    Invocation {
        /// Human-readable launch failure.
        message: String,
    },
    /// The tool ran and reported a teardown failure.
    #[error("destroy failed (exit {code}): {stderr}")]
    Tool {
        /// Tool exit code (`-1` when terminated by signal).
        code: i32,
        /// Captured tool stderr.
        stderr: String,
    },
}

/// Union of failure modes for the composed init-and-plan operation.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Initialization failed.
    #[error(transparent)]
    Init(#[from] InitError),
    /// Plan computation failed.
    #[error(transparent)]
    Plan(#[from] PlanError),
}

// ============================================================================
// SECTION: Provisioner
// ============================================================================

/// Capability interface over the provisioning tool lifecycle.
///
/// Implementations retain no state across calls other than the options
/// reference; every operation is independently invocable.
pub trait Provisioner {
    /// Prepares the module directory for execution.
    ///
    /// # Errors
    ///
    /// Returns [`InitError`] when the directory is invalid or required
    /// plugins and providers cannot be resolved.
    fn init(&self, options: &TerraformOptions) -> Result<(), InitError>;

    /// Computes a proposed change set without applying it.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError`] on malformed parameters or unreachable remote
    /// state.
    fn plan(&self, options: &TerraformOptions) -> Result<PlanResult, PlanError>;

    /// Tears down whatever was actually applied. Idempotent: destroying a
    /// module with nothing applied succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`DestroyError`] when the tool reports a teardown failure.
    fn destroy(&self, options: &TerraformOptions) -> Result<(), DestroyError>;

    /// Convenience composition of [`Provisioner::init`] and
    /// [`Provisioner::plan`].
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] carrying whichever step failed.
    fn init_and_plan(&self, options: &TerraformOptions) -> Result<PlanResult, DriverError> {
        self.init(options)?;
        Ok(self.plan(options)?)
    }
}
