// crates/plangate-core/src/runtime/terraform.rs
// ============================================================================
// Module: Plan Gate Terraform Adapter
// Description: The concrete Provisioner shelling out to the Terraform CLI.
// Purpose: Map lifecycle operations onto tool subcommands and exit codes.
// Dependencies: crate::core, crate::interfaces, crate::runtime::command
// ============================================================================

//! ## Overview
//! [`TerraformCli`] is the single concrete [`Provisioner`]. Each operation
//! builds one subprocess invocation:
//!
//! - init: `terraform init -input=false`
//! - plan: `terraform plan -input=false -detailed-exitcode -var ...`
//! - destroy: `terraform destroy -auto-approve -input=false -var ...`
//!
//! With `-detailed-exitcode`, plan exit 0 means a clean plan with no
//! changes and exit 2 means a clean plan with pending changes; both are
//! successes. Exit 1 is the tool rejecting the plan. Destroy of a module
//! with nothing applied exits 0, which is what makes the operation
//! idempotent from the harness's point of view.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use crate::core::options::TerraformOptions;
use crate::core::plan::PlanResult;
use crate::interfaces::DestroyError;
use crate::interfaces::InitError;
use crate::interfaces::PlanError;
use crate::interfaces::Provisioner;
use crate::runtime::command;
use crate::runtime::command::CommandSpec;

// ============================================================================
// SECTION: Adapter
// ============================================================================

/// Plan exit code signaling a clean plan with pending changes.
const PLAN_EXIT_CHANGES_PENDING: i32 = 2;

/// Provisioner adapter invoking the Terraform CLI as a subprocess.
///
/// # Invariants
/// - Holds only the default binary path; all per-operation state arrives
///   through the options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerraformCli {
    /// Default tool binary; options may override per operation.
    binary: PathBuf,
}

impl TerraformCli {
    /// Creates an adapter resolving `terraform` from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("terraform"),
        }
    }

    /// Creates an adapter with an explicit tool binary.
    #[must_use]
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Probes whether the tool binary is invocable, for suites that skip
    /// when the tool is absent.
    #[must_use]
    pub fn available(&self) -> bool {
        std::process::Command::new(&self.binary)
            .arg("version")
            .output()
            .map_or(false, |output| output.status.success())
    }

    /// Builds the invocation for a subcommand under the module directory.
    fn spec(&self, options: &TerraformOptions, args: Vec<String>) -> CommandSpec {
        let program = options.binary.clone().unwrap_or_else(|| self.binary.clone());
        CommandSpec {
            program,
            args,
            dir: options.module_dir.clone(),
            env: options.env.clone(),
        }
    }

    /// Verifies the module directory exists before any invocation.
    fn check_module_dir(options: &TerraformOptions) -> Result<(), InitError> {
        if options.module_dir.is_dir() {
            Ok(())
        } else {
            Err(InitError::ModuleDir {
                path: options.module_dir.display().to_string(),
            })
        }
    }

    /// Appends `-no-color` when the options ask for it.
    fn push_color_flag(options: &TerraformOptions, args: &mut Vec<String>) {
        if options.no_color {
            args.push("-no-color".to_string());
        }
    }
}

impl Default for TerraformCli {
    fn default() -> Self {
        Self::new()
    }
}

impl Provisioner for TerraformCli {
    fn init(&self, options: &TerraformOptions) -> Result<(), InitError> {
        Self::check_module_dir(options)?;
        let mut args = vec!["init".to_string(), "-input=false".to_string()];
        Self::push_color_flag(options, &mut args);
        let output = command::run_with_retry(&self.spec(options, args), options.retry.as_ref())
            .map_err(|err| InitError::Invocation {
                message: err.to_string(),
            })?;
        if output.success() {
            Ok(())
        } else {
            Err(InitError::Tool {
                code: output.code,
                stderr: output.stderr,
            })
        }
    }

    fn plan(&self, options: &TerraformOptions) -> Result<PlanResult, PlanError> {
        let mut args = vec![
            "plan".to_string(),
            "-input=false".to_string(),
            "-detailed-exitcode".to_string(),
        ];
        Self::push_color_flag(options, &mut args);
        args.extend(options.vars.to_var_args()?);
        let output = command::run_with_retry(&self.spec(options, args), options.retry.as_ref())
            .map_err(|err| PlanError::Invocation {
                message: err.to_string(),
            })?;
        match output.code {
            0 => Ok(PlanResult::from_output(output.stdout, false)),
            PLAN_EXIT_CHANGES_PENDING => Ok(PlanResult::from_output(output.stdout, true)),
            code => Err(PlanError::Tool {
                code,
                stderr: output.stderr,
            }),
        }
    }

    fn destroy(&self, options: &TerraformOptions) -> Result<(), DestroyError> {
        let mut args = vec![
            "destroy".to_string(),
            "-auto-approve".to_string(),
            "-input=false".to_string(),
        ];
        Self::push_color_flag(options, &mut args);
        args.extend(options.vars.to_var_args()?);
        let output = command::run_with_retry(&self.spec(options, args), options.retry.as_ref())
            .map_err(|err| DestroyError::Invocation {
                message: err.to_string(),
            })?;
        if output.success() {
            Ok(())
        } else {
            Err(DestroyError::Tool {
                code: output.code,
                stderr: output.stderr,
            })
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
