// crates/plangate-core/src/core/assertions.rs
// ============================================================================
// Module: Plan Gate Assertions
// Description: The pass/fail checks applied to driver output.
// Purpose: Keep the scenario assertion contract in one place.
// Dependencies: crate::core::plan, thiserror
// ============================================================================

//! ## Overview
//! The assertion surface is intentionally narrow: a scenario passes when the
//! plan operation produced a result at all. No resource attributes are
//! inspected. Scenario names may suggest deeper checks (security-group
//! rules, key presence); those checks are not performed here, and callers
//! must not assume otherwise.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::plan::PlanResult;

// ============================================================================
// SECTION: Assertion Errors
// ============================================================================

/// Assertion failure reported with the actual vs. expected condition.
///
/// # Invariants
/// - `actual` describes what the driver produced, never harness internals.
#[derive(Debug, Error)]
#[error("plan assertion failed: expected a plan result, got {actual}")]
pub struct AssertionError {
    /// Description of the observed condition.
    pub actual: String,
}

// ============================================================================
// SECTION: Assertions
// ============================================================================

/// Asserts that a plan operation produced a result.
///
/// # Errors
///
/// Returns [`AssertionError`] when no plan result is present.
pub fn assert_plan_present(plan: Option<&PlanResult>) -> Result<(), AssertionError> {
    match plan {
        Some(_) => Ok(()),
        None => Err(AssertionError {
            actual: "no plan result".to_string(),
        }),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
