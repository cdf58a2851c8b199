// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deployment sequencer
//!
//! Runs a [`StepPlan`] one step at a time. Each step sleeps for its duration,
//! draws an outcome, then reports progress followed by the step result.
//! Progress is reported for every attempted step, including one that fails.
//!
//! Cancellation is observed before each step and during its delay. A step
//! interrupted mid-delay is never reported.

use crate::id::{IdGen, UuidIdGen};
use crate::outcome::SequenceResult;
use crate::reporter::Reporter;
use crate::source::OutcomeSource;
use crate::step::StepPlan;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

/// Executes a step plan against an outcome source and a reporter
pub struct Sequencer<G: IdGen = UuidIdGen> {
    plan: StepPlan,
    cancel: CancellationToken,
    ids: G,
}

impl Sequencer {
    pub fn new(plan: StepPlan) -> Self {
        Self {
            plan,
            cancel: CancellationToken::new(),
            ids: UuidIdGen,
        }
    }
}

impl<G: IdGen> Sequencer<G> {
    /// Observe `token` at every suspension point
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn with_ids<H: IdGen>(self, ids: H) -> Sequencer<H> {
        Sequencer {
            plan: self.plan,
            cancel: self.cancel,
            ids,
        }
    }

    pub fn plan(&self) -> &StepPlan {
        &self.plan
    }

    pub async fn run<O, R>(&self, source: &mut O, reporter: &mut R) -> SequenceResult
    where
        O: OutcomeSource + ?Sized,
        R: Reporter + ?Sized,
    {
        let run_id = self.ids.next();
        let span = tracing::info_span!("sequencer.run", run_id = %run_id, steps = self.plan.len());
        self.execute(source, reporter).instrument(span).await
    }

    async fn execute<O, R>(&self, source: &mut O, reporter: &mut R) -> SequenceResult
    where
        O: OutcomeSource + ?Sized,
        R: Reporter + ?Sized,
    {
        let total = self.plan.len();
        if total == 0 {
            tracing::info!("empty plan, nothing to run");
            return SequenceResult::success(0);
        }

        for (index, step) in self.plan.steps().iter().enumerate() {
            if self.cancel.is_cancelled() {
                tracing::info!(completed = index, "cancelled before step");
                return SequenceResult::cancelled(index, total);
            }

            reporter.step_started(index, step.name());
            tracing::debug!(
                index,
                step = step.name(),
                duration_ms = step.duration().as_millis() as u64,
                "step started"
            );

            let interrupted = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => true,
                _ = tokio::time::sleep(step.duration()) => false,
            };
            if interrupted {
                tracing::info!(completed = index, step = step.name(), "cancelled during step");
                return SequenceResult::cancelled(index, total);
            }

            let outcome = source.draw(index, step);
            reporter.progress((index + 1) as f64 / total as f64);
            reporter.step_finished(index, step.name(), outcome);

            if !outcome.is_success() {
                tracing::warn!(index, step = step.name(), "step failed");
                return SequenceResult::failure(index, total);
            }
            tracing::info!(index, step = step.name(), "step completed");
        }

        SequenceResult::success(total)
    }
}

#[cfg(test)]
#[path = "sequencer_tests.rs"]
mod tests;
