// system-tests/src/params.rs
// ============================================================================
// Module: Cluster Scenario Parameters
// Description: The shared parameter set for cluster validation scenarios.
// Purpose: Construct the fixture once and hand every scenario an immutable
// reference.
// Dependencies: plangate-core
// ============================================================================

//! ## Overview
//! Every cluster validation scenario runs with the same literal parameter
//! set. It is built once per test process and shared by reference; a
//! scenario clones what it needs into its own options, so siblings never
//! share mutable state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::sync::OnceLock;

use plangate_core::TerraformOptions;
use plangate_core::VarMap;
use plangate_core::VarValue;

// ============================================================================
// SECTION: Shared Parameters
// ============================================================================

/// Returns the shared cluster parameter set, constructed once per process.
pub fn cluster_vars() -> &'static VarMap {
    static VARS: OnceLock<VarMap> = OnceLock::new();
    VARS.get_or_init(|| {
        VarMap::new()
            .with("cluster_name", VarValue::str("test-eks-cluster"))
            .with("environment", VarValue::str("test"))
            .with("vpc_id", VarValue::str("vpc-test123"))
            .with("subnet_ids", VarValue::list(["subnet-test1", "subnet-test2"]))
            .with("allowed_cidr_blocks", VarValue::list(["10.0.0.0/8"]))
    })
}

/// Returns the bundled module fixture directory.
#[must_use]
pub fn module_fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("module")
}

/// Builds the options every cluster scenario starts from: the module
/// fixture, the shared parameter set, and color suppression.
#[must_use]
pub fn cluster_options() -> TerraformOptions {
    TerraformOptions::new(module_fixture_dir())
        .with_vars(cluster_vars().clone())
        .with_no_color()
}
