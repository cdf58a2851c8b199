//! Deployment specs

use crate::prelude::*;

#[test]
fn successful_deploy_brings_bot_online() {
    let state = StateDir::fast();

    state
        .anayat()
        .args(&["deploy", "--always-succeed"])
        .passes()
        .stdout_has("📦 Validating Input...")
        .stdout_has("[100%] ✅ Starting Services - Completed")
        .stdout_has("Deployment Completed Successfully! (5/5 steps completed)")
        .stderr_has("Deployment Completed Successfully!");

    state
        .anayat()
        .args(&["status"])
        .passes()
        .stdout_has("ONLINE");
}

#[test]
fn failed_deploy_exits_nonzero_and_names_step() {
    let state = StateDir::fast();

    state
        .anayat()
        .args(&["deploy", "--fail-at", "2"])
        .fails()
        .stdout_has("[ 60%] ❌ Failed at: Installing Packages")
        .stdout_has("Deployment Failed: Failed at: Installing Packages (2/5 steps completed)")
        .stdout_lacks("Configuring Bot");

    state
        .anayat()
        .args(&["status"])
        .passes()
        .stdout_has("OFFLINE");
}

#[test]
fn zero_probability_fails_first_step() {
    let out = StateDir::fast()
        .anayat()
        .args(&["--format", "json", "deploy", "--probability", "0", "--seed", "1"])
        .fails();

    let json = out.json();
    assert_eq!(json["outcome"], "failure");
    assert_eq!(json["failed_step_index"], 0);
    assert_eq!(json["completed_steps"], 0);
    assert_eq!(json["label"], "Retry Deployment");
}

#[test]
fn json_report_for_success() {
    let out = StateDir::fast()
        .anayat()
        .args(&["--format", "json", "deploy", "--always-succeed"])
        .passes();

    let json = out.json();
    assert_eq!(json["outcome"], "success");
    assert_eq!(json["completed_steps"], 5);
    assert_eq!(json["total_steps"], 5);
    assert_eq!(json["message"], "Deployment Completed Successfully!");
    assert_eq!(json["label"], "Deploy Complete");
}

#[test]
fn negative_step_duration_is_rejected() {
    let state = StateDir::empty();
    state.file(
        "config.toml",
        "[deploy]\nsteps = [{ name = \"Build\", duration_ms = -5 }]\n",
    );

    state
        .anayat()
        .args(&["deploy", "--always-succeed"])
        .fails()
        .stderr_has("Build");
}

#[test]
fn empty_plan_succeeds_immediately() {
    let state = StateDir::empty();
    state.file("config.toml", "[deploy]\nsteps = []\n");

    state
        .anayat()
        .args(&["deploy"])
        .passes()
        .stdout_has("(0/0 steps completed)");
}
