// crates/plangate-core/src/runtime/scenario.rs
// ============================================================================
// Module: Plan Gate Scenario Runner
// Description: Executes one named scenario through the lifecycle state
// machine with guaranteed cleanup.
// Purpose: Bind options, driver operations, and assertions into one run.
// Dependencies: crate::core, crate::interfaces, tracing
// ============================================================================

//! ## Overview
//! A [`Scenario`] is one independent unit of validation: a name, an options
//! value, and a cleanup policy. Scenarios share no mutable state, so any
//! number may run concurrently. A scenario that opted into cleanup invokes
//! destroy exactly once after the plan step resolves, pass or fail, and a
//! destroy error on that path is demoted to a warning rather than a
//! failure, because cleanup must never rewrite an outcome.
//!
//! [`DestroyGuard`] offers the same guarantee for callers driving the
//! operations by hand with panic-based assertions: teardown runs on every
//! exit path, including unwinding.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::warn;

use crate::core::assertions::assert_plan_present;
use crate::core::options::TerraformOptions;
use crate::core::state::ScenarioReport;
use crate::core::state::ScenarioStatus;
use crate::interfaces::Provisioner;

// ============================================================================
// SECTION: Cleanup Policy
// ============================================================================

/// Whether a scenario tears down what it provisioned.
///
/// # Invariants
/// - Plan-only scenarios use [`CleanupPolicy::Skip`]; nothing was applied,
///   so there is nothing to remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupPolicy {
    /// Invoke destroy after the run resolves, on success and on failure.
    DestroyOnExit,
    /// Do not invoke destroy.
    Skip,
}

// ============================================================================
// SECTION: Scenario
// ============================================================================

/// One independently executable validation case.
///
/// # Invariants
/// - Constructed once at registration and executed once per run.
/// - Owns its options; sibling scenarios share nothing mutable.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Scenario name used in reports and log lines.
    pub name: String,
    /// Driver input for every operation in the run.
    pub options: TerraformOptions,
    /// Cleanup policy for the run.
    pub cleanup: CleanupPolicy,
}

impl Scenario {
    /// Registers a plan-only scenario (no cleanup step).
    #[must_use]
    pub fn new(name: impl Into<String>, options: TerraformOptions) -> Self {
        Self {
            name: name.into(),
            options,
            cleanup: CleanupPolicy::Skip,
        }
    }

    /// Opts the scenario into the guaranteed cleanup step.
    #[must_use]
    pub const fn with_cleanup(mut self) -> Self {
        self.cleanup = CleanupPolicy::DestroyOnExit;
        self
    }

    /// Executes the scenario against a driver and returns the report.
    ///
    /// Tool and assertion errors mark the run failed; they are captured in
    /// the report rather than propagated, so the cleanup step always gets
    /// its turn.
    pub fn run<P: Provisioner>(&self, driver: &P) -> ScenarioReport {
        let mut report = ScenarioReport::register(&self.name);
        if let Err(failure) = self.execute(driver, &mut report) {
            report.fail(failure);
        }
        if self.cleanup == CleanupPolicy::DestroyOnExit {
            match driver.destroy(&self.options) {
                Ok(()) => report.record_destroyed(),
                Err(err) => {
                    warn!(scenario = %self.name, error = %err, "cleanup destroy failed");
                }
            }
        }
        if report.status != ScenarioStatus::Failed {
            report.advance(ScenarioStatus::Completed);
        }
        report
    }

    /// Drives init, plan, and the plan-presence assertion, advancing the
    /// report as steps succeed.
    fn execute<P: Provisioner>(
        &self,
        driver: &P,
        report: &mut ScenarioReport,
    ) -> Result<(), String> {
        driver.init(&self.options).map_err(|err| err.to_string())?;
        report.advance(ScenarioStatus::Initialized);
        let plan = driver.plan(&self.options).map_err(|err| err.to_string())?;
        report.plan = Some(plan);
        assert_plan_present(report.plan.as_ref()).map_err(|err| err.to_string())?;
        report.advance(ScenarioStatus::Planned);
        Ok(())
    }
}

// ============================================================================
// SECTION: Destroy Guard
// ============================================================================

/// Scoped teardown: invokes destroy when dropped, on every exit path.
///
/// Destroy errors raised here are demoted to warnings; a failing assertion
/// in the guarded scope keeps its own failure as the outcome.
///
/// # Invariants
/// - Destroy is invoked exactly once, at drop.
pub struct DestroyGuard<'a, P: Provisioner> {
    /// Driver used for the teardown.
    driver: &'a P,
    /// Options for the teardown invocation.
    options: &'a TerraformOptions,
    /// Label for the warning line when teardown fails.
    label: String,
}

impl<'a, P: Provisioner> DestroyGuard<'a, P> {
    /// Registers teardown for the enclosing scope.
    #[must_use]
    pub fn new(driver: &'a P, options: &'a TerraformOptions, label: impl Into<String>) -> Self {
        Self {
            driver,
            options,
            label: label.into(),
        }
    }
}

impl<P: Provisioner> Drop for DestroyGuard<'_, P> {
    fn drop(&mut self) {
        if let Err(err) = self.driver.destroy(self.options) {
            warn!(scenario = %self.label, error = %err, "deferred destroy failed");
        }
    }
}
