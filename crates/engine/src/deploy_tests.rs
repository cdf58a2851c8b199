// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::DashboardDeps;
use anayat_adapters::FakeNotifyAdapter;
use anayat_core::prefs::STATUS_KEY;
use anayat_core::{
    DashboardConfig, MemoryStore, NoOpReporter, NotifyLevel, RecordingReporter, ScriptedOutcomes,
    StepSpec,
};

fn setup_with(
    config: DashboardConfig,
) -> (Dashboard<MemoryStore, FakeNotifyAdapter>, MemoryStore, FakeNotifyAdapter) {
    let store = MemoryStore::new();
    let notify = FakeNotifyAdapter::new();
    let dashboard = Dashboard::new(
        config,
        DashboardDeps {
            store: store.clone(),
            notify: notify.clone(),
        },
    )
    .unwrap();
    (dashboard, store, notify)
}

fn setup() -> (Dashboard<MemoryStore, FakeNotifyAdapter>, MemoryStore, FakeNotifyAdapter) {
    setup_with(DashboardConfig::default())
}

#[tokio::test(start_paused = true)]
async fn successful_deploy_brings_bot_online() {
    let (dashboard, store, notify) = setup();
    let mut reporter = RecordingReporter::new();

    let report = dashboard
        .deploy(&mut ScriptedOutcomes::always_succeed(), &mut reporter)
        .await
        .unwrap();

    assert_eq!(report.result, SequenceResult::success(5));
    assert_eq!(report.message, "Deployment Completed Successfully!");
    assert_eq!(report.label, "Deploy Complete");
    assert_eq!(dashboard.status(), BotStatus::Online);
    assert_eq!(store.get(STATUS_KEY).unwrap().as_deref(), Some("online"));
    assert_eq!(reporter.progress_values(), vec![0.2, 0.4, 0.6, 0.8, 1.0]);

    let calls = notify.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].level, NotifyLevel::Success);
}

#[tokio::test(start_paused = true)]
async fn failed_deploy_names_the_step() {
    let (dashboard, _, notify) = setup();

    let report = dashboard
        .deploy(&mut ScriptedOutcomes::fail_at(2), &mut NoOpReporter)
        .await
        .unwrap();

    assert_eq!(report.result, SequenceResult::failure(2, 5));
    assert_eq!(
        report.message,
        "Deployment Failed: Failed at: Installing Packages"
    );
    assert_eq!(report.label, "Retry Deployment");
    assert_eq!(dashboard.status(), BotStatus::Offline);

    let calls = notify.calls();
    assert_eq!(calls[0].level, NotifyLevel::Error);
    assert_eq!(calls[0].message, report.message);
}

#[tokio::test(start_paused = true)]
async fn deploy_mirrors_steps_into_terminal() {
    let (dashboard, _, _) = setup();

    dashboard
        .deploy(&mut ScriptedOutcomes::fail_at(1), &mut NoOpReporter)
        .await
        .unwrap();

    assert_eq!(
        dashboard.terminal_lines(),
        vec![
            "📦 Validating Input...",
            "✅ Validating Input - Completed",
            "📦 Checking Dependencies...",
            "❌ Checking Dependencies - Failed",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn cancelled_deploy_reports_cancellation() {
    let (dashboard, _, notify) = setup();
    dashboard.cancellation().cancel();

    let report = dashboard
        .deploy(&mut ScriptedOutcomes::always_succeed(), &mut NoOpReporter)
        .await
        .unwrap();

    assert_eq!(report.result, SequenceResult::cancelled(0, 5));
    assert_eq!(report.label, "Retry Deployment");
    assert_eq!(dashboard.status(), BotStatus::Offline);
    assert_eq!(notify.calls()[0].level, NotifyLevel::Warning);
}

#[tokio::test(start_paused = true)]
async fn second_deploy_is_rejected_while_one_runs() {
    let (dashboard, _, _) = setup();
    let held = dashboard.deploy_lock().try_acquire().unwrap();

    let err = dashboard
        .deploy(&mut ScriptedOutcomes::always_succeed(), &mut NoOpReporter)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::DeploymentInProgress));

    drop(held);
    dashboard
        .deploy(&mut ScriptedOutcomes::always_succeed(), &mut NoOpReporter)
        .await
        .unwrap();
    assert!(!dashboard.deploy_lock().is_held());
}

#[tokio::test(start_paused = true)]
async fn concurrent_deploys_admit_only_one() {
    let (dashboard, _, _) = setup();
    let mut first_source = ScriptedOutcomes::always_succeed();
    let mut second_source = ScriptedOutcomes::always_succeed();
    let mut first_reporter = NoOpReporter;
    let mut second_reporter = NoOpReporter;

    let (first, second) = tokio::join!(
        dashboard.deploy(&mut first_source, &mut first_reporter),
        dashboard.deploy(&mut second_source, &mut second_reporter),
    );

    assert!(first.is_ok());
    assert!(matches!(second, Err(EngineError::DeploymentInProgress)));
}

#[tokio::test]
async fn invalid_configured_step_is_rejected() {
    let mut config = DashboardConfig::default();
    config.deploy.steps = vec![StepSpec::new("Build", -1)];
    let (dashboard, _, notify) = setup_with(config);

    let err = dashboard
        .deploy(&mut ScriptedOutcomes::always_succeed(), &mut NoOpReporter)
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::InvalidStep(_)));
    assert!(notify.calls().is_empty());
    assert!(!dashboard.deploy_lock().is_held());
}

#[tokio::test]
async fn empty_plan_deploys_immediately() {
    let mut config = DashboardConfig::default();
    config.deploy.steps.clear();
    let (dashboard, _, _) = setup_with(config);

    let report = dashboard
        .deploy(&mut ScriptedOutcomes::always_fail(), &mut NoOpReporter)
        .await
        .unwrap();

    assert_eq!(report.result, SequenceResult::success(0));
    assert_eq!(dashboard.status(), BotStatus::Online);
}

#[test]
fn report_serializes_flat() {
    let plan = StepPlan::new(&StepPlan::default_specs()).unwrap();
    let report = DeployReport::from_result(SequenceResult::failure(0, 5), &plan);

    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["outcome"], "failure");
    assert_eq!(json["failed_step_index"], 0);
    assert_eq!(json["completed_steps"], 0);
    assert_eq!(json["total_steps"], 5);
    assert_eq!(json["message"], "Deployment Failed: Failed at: Validating Input");
}
