// crates/plangate-core/src/core/state.rs
// ============================================================================
// Module: Plan Gate Scenario State
// Description: Scenario lifecycle status and execution reports.
// Purpose: Capture the deterministic transition trail of one scenario run.
// Dependencies: crate::core::plan, serde
// ============================================================================

//! ## Overview
//! Every scenario walks the same lifecycle:
//! `Registered -> Initialized -> Planned -> [Destroyed] -> Completed`, with
//! `Failed` terminal on a tool or assertion error at any transition.
//! `Destroyed` appears only for scenarios that opted into cleanup, and once
//! opted in it is unconditional: the destroy step runs even when the plan
//! step failed. The [`ScenarioReport`] records the trail append-only so a
//! run can be audited after the fact.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::plan::PlanResult;

// ============================================================================
// SECTION: Scenario Status
// ============================================================================

/// Scenario lifecycle status.
///
/// # Invariants
/// - Variants are stable for serialization and report matching.
/// - `Completed` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioStatus {
    /// Scenario is constructed and not yet executed.
    Registered,
    /// Tool initialization succeeded.
    Initialized,
    /// Plan computation succeeded and the assertion passed.
    Planned,
    /// Cleanup destroy was invoked (cleanup scenarios only).
    Destroyed,
    /// Scenario passed.
    Completed,
    /// Scenario failed on a tool or assertion error.
    Failed,
}

// ============================================================================
// SECTION: Scenario Reports
// ============================================================================

/// Record of one scenario execution.
///
/// # Invariants
/// - `transitions` is append-only and always starts with
///   [`ScenarioStatus::Registered`].
/// - `plan` is present exactly when the plan step succeeded.
/// - `failure` is present exactly when `status` is [`ScenarioStatus::Failed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Scenario name.
    pub name: String,
    /// Terminal status of the run.
    pub status: ScenarioStatus,
    /// Ordered transition trail for the run.
    pub transitions: Vec<ScenarioStatus>,
    /// Plan result, when the plan step succeeded.
    pub plan: Option<PlanResult>,
    /// Failure description, when the run failed.
    pub failure: Option<String>,
}

impl ScenarioReport {
    /// Creates a report for a freshly registered scenario.
    #[must_use]
    pub fn register(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ScenarioStatus::Registered,
            transitions: vec![ScenarioStatus::Registered],
            plan: None,
            failure: None,
        }
    }

    /// Appends a transition and makes it the current status.
    pub fn advance(&mut self, status: ScenarioStatus) {
        self.transitions.push(status);
        self.status = status;
    }

    /// Marks the run failed with a description; the trail records the
    /// failure transition.
    pub fn fail(&mut self, failure: impl Into<String>) {
        self.failure = Some(failure.into());
        self.advance(ScenarioStatus::Failed);
    }

    /// Records that the cleanup destroy step ran. A failed run stays
    /// failed; cleanup never rewrites the terminal outcome.
    pub fn record_destroyed(&mut self) {
        self.transitions.push(ScenarioStatus::Destroyed);
        if self.status != ScenarioStatus::Failed {
            self.status = ScenarioStatus::Destroyed;
        }
    }

    /// Returns true when the run completed without failure.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == ScenarioStatus::Completed
    }

    /// Returns true when the cleanup destroy step ran.
    #[must_use]
    pub fn destroyed(&self) -> bool {
        self.transitions.contains(&ScenarioStatus::Destroyed)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
