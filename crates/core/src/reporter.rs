// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Callback sinks for sequencer runs

use crate::outcome::StepOutcome;
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// Receives progress and per-step results from a run.
///
/// Callbacks are invoked synchronously from inside the run, in step order.
pub trait Reporter: Send {
    /// A step is about to begin its simulated work
    fn step_started(&mut self, _index: usize, _name: &str) {}

    /// Fraction of the plan attempted so far, in `0.0..=1.0`
    fn progress(&mut self, fraction: f64);

    fn step_finished(&mut self, index: usize, name: &str, outcome: StepOutcome);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn step_started(&mut self, index: usize, name: &str) {
        (**self).step_started(index, name)
    }

    fn progress(&mut self, fraction: f64) {
        (**self).progress(fraction)
    }

    fn step_finished(&mut self, index: usize, name: &str, outcome: StepOutcome) {
        (**self).step_finished(index, name, outcome)
    }
}

/// Reporter that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpReporter;

impl Reporter for NoOpReporter {
    fn progress(&mut self, _fraction: f64) {}

    fn step_finished(&mut self, _index: usize, _name: &str, _outcome: StepOutcome) {}
}

/// Reporter built from a pair of closures
pub struct FnReporter<P, S> {
    on_progress: P,
    on_step: S,
}

impl<P, S> FnReporter<P, S>
where
    P: FnMut(f64) + Send,
    S: FnMut(usize, &str, StepOutcome) + Send,
{
    pub fn new(on_progress: P, on_step: S) -> Self {
        Self {
            on_progress,
            on_step,
        }
    }
}

impl<P, S> Reporter for FnReporter<P, S>
where
    P: FnMut(f64) + Send,
    S: FnMut(usize, &str, StepOutcome) + Send,
{
    fn progress(&mut self, fraction: f64) {
        (self.on_progress)(fraction)
    }

    fn step_finished(&mut self, index: usize, name: &str, outcome: StepOutcome) {
        (self.on_step)(index, name, outcome)
    }
}

/// Event captured by [`RecordingReporter`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReportEvent {
    StepStarted {
        index: usize,
        name: String,
    },
    Progress {
        fraction: f64,
    },
    StepFinished {
        index: usize,
        name: String,
        outcome: StepOutcome,
    },
}

/// Reporter that records every callback; clones share the same log
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<ReportEvent>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn progress_values(&self) -> Vec<f64> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::Progress { fraction } => Some(fraction),
                _ => None,
            })
            .collect()
    }

    /// `(index, outcome)` for every finished step
    pub fn step_outcomes(&self) -> Vec<(usize, StepOutcome)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::StepFinished { index, outcome, .. } => Some((index, outcome)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ReportEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
    }
}

impl Reporter for RecordingReporter {
    fn step_started(&mut self, index: usize, name: &str) {
        self.push(ReportEvent::StepStarted {
            index,
            name: name.to_string(),
        });
    }

    fn progress(&mut self, fraction: f64) {
        self.push(ReportEvent::Progress { fraction });
    }

    fn step_finished(&mut self, index: usize, name: &str, outcome: StepOutcome) {
        self.push(ReportEvent::StepFinished {
            index,
            name: name.to_string(),
            outcome,
        });
    }
}
