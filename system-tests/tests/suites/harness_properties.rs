// system-tests/tests/suites/harness_properties.rs
// ============================================================================
// Module: Harness Lifecycle Properties
// Description: End-to-end properties of the scenario lifecycle.
// Purpose: Validate cleanup counting, destroy idempotence, and the
// required-variable boundary across concurrent scenarios.
// Dependencies: system-tests helpers, plangate-core
// ============================================================================

//! ## Overview
//! Properties that hold across whole runs: parallel scenarios sharing one
//! parameter set leave exactly one destroy invocation (from the creation
//! scenario), destroy stays idempotent, and a hollow required sequence is a
//! tool-level failure rather than a harness crash.

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

use std::sync::Arc;
use std::thread;

use plangate_core::Provisioner;
use plangate_core::Scenario;
use plangate_core::ScenarioStatus;
use plangate_core::VarValue;
use plangate_core::assert_plan_present;
use system_tests::params::cluster_options;

use crate::helpers::fake::FakeProvisioner;

#[test]
fn parallel_scenarios_leave_one_destroy_invocation() {
    let driver = Arc::new(FakeProvisioner::new());
    let scenarios = vec![
        Scenario::new("eks-cluster-creation", cluster_options()).with_cleanup(),
        Scenario::new("eks-cluster-outputs", cluster_options()),
        Scenario::new("security-group-rules", cluster_options()),
        Scenario::new("kms-encryption", cluster_options()),
    ];
    let handles: Vec<_> = scenarios
        .into_iter()
        .map(|scenario| {
            let driver = Arc::clone(&driver);
            thread::spawn(move || scenario.run(driver.as_ref()))
        })
        .collect();
    for handle in handles {
        let report = handle.join().expect("scenario thread");
        assert!(report.passed(), "scenario {} failed: {:?}", report.name, report.failure);
        assert!(report.plan.is_some());
    }
    assert_eq!(driver.destroy_count(), 1);
}

#[test]
fn destroy_twice_in_succession_stays_clean() -> Result<(), Box<dyn std::error::Error>> {
    let driver = FakeProvisioner::new();
    let options = cluster_options();
    driver.destroy(&options)?;
    driver.destroy(&options)?;
    assert_eq!(driver.destroy_count(), 2);
    Ok(())
}

#[test]
fn empty_subnet_sequence_fails_at_the_tool_boundary() {
    let driver = FakeProvisioner::new();
    let options =
        cluster_options().with_var("subnet_ids", VarValue::list(Vec::<String>::new()));
    let report = Scenario::new("eks-cluster-outputs", options).run(&driver);
    assert_eq!(report.status, ScenarioStatus::Failed);
    assert!(report.plan.is_none());
    assert!(report.failure.as_deref().is_some_and(|msg| msg.contains("Invalid value")));
}

#[test]
fn cleanup_still_runs_after_a_failed_plan() {
    let driver = FakeProvisioner::new();
    let options =
        cluster_options().with_var("subnet_ids", VarValue::list(Vec::<String>::new()));
    let report = Scenario::new("eks-cluster-creation", options).with_cleanup().run(&driver);
    assert_eq!(report.status, ScenarioStatus::Failed);
    assert!(report.destroyed());
    assert_eq!(driver.destroy_count(), 1);
}

#[test]
fn config_files_drive_scenario_options() -> Result<(), Box<dyn std::error::Error>> {
    let contents = r#"[module]
dir = "module"

[vars]
cluster_name = "test-eks-cluster"
environment = "test"
vpc_id = "vpc-test123"
subnet_ids = ["subnet-test1", "subnet-test2"]
allowed_cidr_blocks = ["10.0.0.0/8"]

[[scenarios]]
name = "eks-cluster-creation"
cleanup = true
"#;
    let config = plangate_config::parse(contents)?;
    let driver = FakeProvisioner::new();
    for declared in &config.scenarios {
        let mut scenario = Scenario::new(&declared.name, config.options());
        if declared.cleanup {
            scenario = scenario.with_cleanup();
        }
        let report = scenario.run(&driver);
        assert!(report.passed(), "scenario {} failed: {:?}", report.name, report.failure);
    }
    assert_eq!(driver.destroy_count(), 1);
    Ok(())
}

#[test]
fn plan_assertion_reports_the_observed_condition() {
    let err = assert_plan_present(None).expect_err("absent plan should fail the assertion");
    let message = err.to_string();
    assert!(message.contains("expected a plan result"));
    assert!(message.contains("no plan result"));
}
