// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deployment workflow

use crate::dashboard::{Dashboard, DashboardContext};
use crate::error::EngineError;
use anayat_adapters::{NotifyAdapter, TracedReporter};
use anayat_core::{
    BotStatus, KeyValueStore, Notification, OutcomeSource, Reporter, RunOutcome, SequenceResult,
    Sequencer, StepOutcome, StepPlan,
};
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Result of a deployment with the text shown to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeployReport {
    #[serde(flatten)]
    pub result: SequenceResult,
    pub message: String,
    /// Follow-up label for the deploy control
    pub label: String,
}

impl DeployReport {
    fn from_result(result: SequenceResult, plan: &StepPlan) -> Self {
        let (message, label) = match result.outcome {
            RunOutcome::Success => ("Deployment Completed Successfully!".to_string(), "Deploy Complete"),
            RunOutcome::Failure { failed_step_index } => {
                let step = plan
                    .get(failed_step_index)
                    .map(|s| s.name().to_string())
                    .unwrap_or_default();
                (format!("Deployment Failed: Failed at: {}", step), "Retry Deployment")
            }
            RunOutcome::Cancelled => ("Deployment Cancelled".to_string(), "Retry Deployment"),
        };
        Self {
            result,
            message,
            label: label.to_string(),
        }
    }
}

impl fmt::Display for DeployReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}/{} steps completed)",
            self.message, self.result.completed_steps, self.result.total_steps
        )
    }
}

impl<S, N> Dashboard<S, N>
where
    S: KeyValueStore,
    N: NotifyAdapter,
{
    /// Run the configured deployment plan.
    ///
    /// Only one deployment may run per dashboard; a second concurrent call
    /// fails with [`EngineError::DeploymentInProgress`].
    pub async fn deploy<O, R>(
        &self,
        source: &mut O,
        reporter: &mut R,
    ) -> Result<DeployReport, EngineError>
    where
        O: OutcomeSource + ?Sized,
        R: Reporter + ?Sized,
    {
        let _guard = self
            .lock
            .try_acquire()
            .ok_or(EngineError::DeploymentInProgress)?;

        let plan = self.config.deploy.plan()?;
        let sequencer = Sequencer::new(plan).with_cancellation(self.cancel.clone());
        let mut reporter =
            TracedReporter::new(TerminalReporter::new(Arc::clone(&self.context), reporter));

        let result = sequencer.run(source, &mut reporter).await;
        let report = DeployReport::from_result(result, sequencer.plan());

        match result.outcome {
            RunOutcome::Success => {
                self.set_status(BotStatus::Online)?;
                self.send(Notification::success(&report.message)).await?;
            }
            RunOutcome::Failure { .. } => {
                self.send(Notification::error(&report.message)).await?;
            }
            RunOutcome::Cancelled => {
                self.send(Notification::warning(&report.message)).await?;
            }
        }
        tracing::info!(
            outcome = %result.outcome,
            completed = result.completed_steps,
            total = result.total_steps,
            "deployment finished"
        );
        Ok(report)
    }
}

/// Mirrors step progress into the dashboard terminal
struct TerminalReporter<R> {
    context: Arc<Mutex<DashboardContext>>,
    inner: R,
}

impl<R> TerminalReporter<R> {
    fn new(context: Arc<Mutex<DashboardContext>>, inner: R) -> Self {
        Self { context, inner }
    }

    fn push(&self, line: String) {
        self.context
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .terminal
            .push(&line);
    }
}

impl<R: Reporter> Reporter for TerminalReporter<R> {
    fn step_started(&mut self, index: usize, name: &str) {
        self.push(format!("📦 {}...", name));
        self.inner.step_started(index, name);
    }

    fn progress(&mut self, fraction: f64) {
        self.inner.progress(fraction);
    }

    fn step_finished(&mut self, index: usize, name: &str, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Success => self.push(format!("✅ {} - Completed", name)),
            StepOutcome::Failure => self.push(format!("❌ {} - Failed", name)),
        }
        self.inner.step_finished(index, name, outcome);
    }
}

#[cfg(test)]
#[path = "deploy_tests.rs"]
mod tests;
