// crates/plangate-core/src/core/plan.rs
// ============================================================================
// Module: Plan Gate Plan Results
// Description: The outcome of a successful plan operation.
// Purpose: Capture tool output and the parsed change counts for reporting.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`PlanResult`] exists only when the tool reported a clean plan; any
//! tool-level error yields no result and aborts the scenario instead. The
//! result carries the raw output verbatim plus a best-effort
//! [`PlanSummary`] scraped from the plan line. Summary parsing is lenient:
//! output without a recognizable plan line produces `None`, never an error,
//! because the tool's human-readable output is not a stable contract.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Plan Results
// ============================================================================

/// Outcome of a successful plan operation.
///
/// # Invariants
/// - Present only for clean plans; tool failures abort before construction.
/// - `output` is the tool's stdout, unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResult {
    /// Raw tool output for the plan.
    pub output: String,
    /// True when the plan proposes changes (detailed exit code 2).
    pub changes_pending: bool,
    /// Parsed change counts, when the output carried a recognizable plan
    /// line.
    pub summary: Option<PlanSummary>,
}

impl PlanResult {
    /// Builds a result from captured plan output.
    #[must_use]
    pub fn from_output(output: String, changes_pending: bool) -> Self {
        let summary = PlanSummary::parse(&output);
        Self {
            output,
            changes_pending,
            summary,
        }
    }
}

// ============================================================================
// SECTION: Plan Summaries
// ============================================================================

/// Change counts scraped from a plan line.
///
/// # Invariants
/// - Counts reflect the tool's own arithmetic; the harness never recomputes
///   them from resource listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Resources the plan would add.
    pub add: u64,
    /// Resources the plan would change in place.
    pub change: u64,
    /// Resources the plan would destroy.
    pub destroy: u64,
}

impl PlanSummary {
    /// Scrapes the `Plan: N to add, M to change, K to destroy.` line (or the
    /// `No changes.` form) from plan output.
    ///
    /// Returns `None` when no recognizable line is present.
    #[must_use]
    pub fn parse(output: &str) -> Option<Self> {
        for line in output.lines() {
            let line = line.trim();
            if line.starts_with("No changes.") {
                return Some(Self::default());
            }
            if let Some(rest) = line.strip_prefix("Plan:") {
                return Self::parse_counts(rest);
            }
        }
        None
    }

    /// Parses the comma-separated count segments after the `Plan:` prefix.
    fn parse_counts(rest: &str) -> Option<Self> {
        let mut summary = Self::default();
        for segment in rest.trim_end_matches('.').split(',') {
            let segment = segment.trim();
            let count: u64 = segment.split_whitespace().next()?.parse().ok()?;
            if segment.ends_with("to add") {
                summary.add = count;
            } else if segment.ends_with("to change") {
                summary.change = count;
            } else if segment.ends_with("to destroy") {
                summary.destroy = count;
            } else {
                return None;
            }
        }
        Some(summary)
    }

    /// Total number of proposed resource operations.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.add + self.change + self.destroy
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
