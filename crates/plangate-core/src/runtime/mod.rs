// crates/plangate-core/src/runtime/mod.rs
// ============================================================================
// Module: Plan Gate Runtime
// Description: Subprocess invocation, the Terraform CLI adapter, and the
// scenario runner.
// Purpose: Turn core data into tool invocations and lifecycle runs.
// Dependencies: crate::core, crate::interfaces, tracing
// ============================================================================

//! ## Overview
//! The runtime is where process side effects live. Everything above it
//! (options, parameter sets, reports) is plain data; everything here blocks
//! on the external tool and maps its exit codes into the driver error
//! taxonomy.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod command;
pub mod scenario;
pub mod terraform;
