// system-tests/tests/helpers/fake.rs
// ============================================================================
// Module: Fake Provisioner
// Description: Deterministic in-process stand-in for the provisioning tool.
// Purpose: Let scenario suites run without real infrastructure.
// Dependencies: plangate-core
// ============================================================================

//! ## Overview
//! The fake provisioner honors the same contracts the real tool does: it
//! enforces the module's required-variable rules, produces a plan result
//! for valid parameter sets, and treats destroy as idempotent. Invocation
//! counters let suites assert lifecycle properties such as "exactly one
//! destroy across the whole run".

use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;

use plangate_core::DestroyError;
use plangate_core::InitError;
use plangate_core::PlanError;
use plangate_core::PlanResult;
use plangate_core::Provisioner;
use plangate_core::TerraformOptions;
use plangate_core::VarValue;

/// Variables the bundled cluster module requires.
const REQUIRED_VARIABLES: &[&str] =
    &["cluster_name", "environment", "vpc_id", "subnet_ids", "allowed_cidr_blocks"];

/// Plan output the fake returns for a valid parameter set.
const FAKE_PLAN_OUTPUT: &str = "Plan: 12 to add, 0 to change, 0 to destroy.";

/// Deterministic provisioner stand-in with lifecycle counters.
pub struct FakeProvisioner {
    /// Number of init invocations observed.
    pub init_calls: AtomicU32,
    /// Number of plan invocations observed.
    pub plan_calls: AtomicU32,
    /// Number of destroy invocations observed.
    pub destroy_calls: AtomicU32,
}

impl FakeProvisioner {
    /// Creates a fake with zeroed counters.
    pub fn new() -> Self {
        Self {
            init_calls: AtomicU32::new(0),
            plan_calls: AtomicU32::new(0),
            destroy_calls: AtomicU32::new(0),
        }
    }

    /// Returns the destroy invocation count.
    pub fn destroy_count(&self) -> u32 {
        self.destroy_calls.load(Ordering::SeqCst)
    }

    /// Enforces the module's required-variable contract the way the real
    /// tool does: absent variables and empty required sequences fail.
    fn check_variables(options: &TerraformOptions) -> Result<(), String> {
        for name in REQUIRED_VARIABLES {
            match options.vars.get(name) {
                None => return Err(format!("Error: No value for required variable \"{name}\"")),
                Some(VarValue::List(items)) if items.is_empty() => {
                    return Err(format!("Error: Invalid value for variable \"{name}\""));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

impl Default for FakeProvisioner {
    fn default() -> Self {
        Self::new()
    }
}

impl Provisioner for FakeProvisioner {
    fn init(&self, _options: &TerraformOptions) -> Result<(), InitError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn plan(&self, options: &TerraformOptions) -> Result<PlanResult, PlanError> {
        self.plan_calls.fetch_add(1, Ordering::SeqCst);
        Self::check_variables(options).map_err(|stderr| PlanError::Tool {
            code: 1,
            stderr,
        })?;
        Ok(PlanResult::from_output(FAKE_PLAN_OUTPUT.to_string(), true))
    }

    fn destroy(&self, _options: &TerraformOptions) -> Result<(), DestroyError> {
        self.destroy_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
