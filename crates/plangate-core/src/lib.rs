// crates/plangate-core/src/lib.rs
// ============================================================================
// Module: Plan Gate Core
// Description: Core types and runtime for driving an infrastructure
// provisioning tool through init, plan, and destroy lifecycles.
// Purpose: Provide the harness building blocks shared by the CLI and the
// scenario suites.
// Dependencies: serde, serde_json, thiserror, tracing
// ============================================================================

//! ## Overview
//! Plan Gate drives an external provisioning tool (the Terraform CLI)
//! against a module directory it does not own. The core crate models the
//! tool lifecycle behind the [`Provisioner`] capability interface, carries
//! the immutable parameter set handed to the tool, and runs named scenarios
//! through a small state machine with guaranteed-cleanup semantics.
//!
//! Tool invocations are blocking subprocess calls; the crate retains no
//! state across calls other than the options handed to each operation.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use crate::core::assertions::AssertionError;
pub use crate::core::assertions::assert_plan_present;
pub use crate::core::options::TerraformOptions;
pub use crate::core::plan::PlanResult;
pub use crate::core::plan::PlanSummary;
pub use crate::core::retry::RetryPolicy;
pub use crate::core::state::ScenarioReport;
pub use crate::core::state::ScenarioStatus;
pub use crate::core::vars::VarEncodeError;
pub use crate::core::vars::VarMap;
pub use crate::core::vars::VarValue;
pub use crate::interfaces::DestroyError;
pub use crate::interfaces::DriverError;
pub use crate::interfaces::InitError;
pub use crate::interfaces::PlanError;
pub use crate::interfaces::Provisioner;
pub use crate::runtime::scenario::CleanupPolicy;
pub use crate::runtime::scenario::DestroyGuard;
pub use crate::runtime::scenario::Scenario;
pub use crate::runtime::terraform::TerraformCli;
