// system-tests/tests/suites/cluster_validation.rs
// ============================================================================
// Module: Cluster Validation Scenarios
// Description: The managed-cluster validation scenarios.
// Purpose: Validate cluster creation, outputs, security-group rules, and
// encryption configuration plans.
// Dependencies: system-tests helpers, plangate-core
// ============================================================================

//! ## Overview
//! Four independent scenarios share one immutable parameter set. The
//! creation scenario opts into guaranteed cleanup; the other three only
//! plan, so nothing is provisioned and nothing is torn down. Each scenario
//! asserts the plan operation produced a result; no resource attributes are
//! inspected beyond that.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use plangate_core::DestroyGuard;
use plangate_core::Provisioner;
use plangate_core::Scenario;
use plangate_core::assert_plan_present;
use system_tests::params::cluster_options;

use crate::helpers::fake::FakeProvisioner;
use crate::helpers::terraform::real_tool;

#[test]
fn eks_cluster_creation() {
    let driver = FakeProvisioner::new();
    let scenario = Scenario::new("eks-cluster-creation", cluster_options()).with_cleanup();
    let report = scenario.run(&driver);
    assert!(report.passed(), "scenario failed: {:?}", report.failure);
    assert!(report.destroyed());
    assert_eq!(driver.destroy_count(), 1);
}

#[test]
fn eks_cluster_outputs() -> Result<(), Box<dyn std::error::Error>> {
    let driver = FakeProvisioner::new();
    let options = cluster_options();
    driver.init(&options)?;
    let plan = driver.init_and_plan(&options)?;
    assert_plan_present(Some(&plan))?;
    assert_eq!(driver.destroy_count(), 0);
    Ok(())
}

#[test]
fn security_group_rules() -> Result<(), Box<dyn std::error::Error>> {
    let driver = FakeProvisioner::new();
    let options = cluster_options();
    driver.init(&options)?;
    let plan = driver.init_and_plan(&options)?;
    assert_plan_present(Some(&plan))?;
    assert_eq!(driver.destroy_count(), 0);
    Ok(())
}

#[test]
fn kms_encryption() -> Result<(), Box<dyn std::error::Error>> {
    let driver = FakeProvisioner::new();
    let options = cluster_options();
    driver.init(&options)?;
    let plan = driver.init_and_plan(&options)?;
    assert_plan_present(Some(&plan))?;
    assert_eq!(driver.destroy_count(), 0);
    Ok(())
}

#[test]
fn eks_cluster_creation_against_real_tool() -> Result<(), Box<dyn std::error::Error>> {
    // Requires PLANGATE_SYSTEM_TERRAFORM=1, an invocable tool binary, and
    // provider credentials; skips otherwise.
    let Some(driver) = real_tool() else {
        return Ok(());
    };
    let options = cluster_options();
    let _guard = DestroyGuard::new(&driver, &options, "eks-cluster-creation");
    let plan = driver.init_and_plan(&options)?;
    assert_plan_present(Some(&plan))?;
    Ok(())
}
