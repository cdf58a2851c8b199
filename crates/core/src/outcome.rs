// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Step and run outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single attempted step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepOutcome {
    Success,
    Failure,
}

impl StepOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, StepOutcome::Success)
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Success => write!(f, "success"),
            StepOutcome::Failure => write!(f, "failure"),
        }
    }
}

/// Terminal classification of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum RunOutcome {
    Success,
    Failure { failed_step_index: usize },
    Cancelled,
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Success => write!(f, "success"),
            RunOutcome::Failure { failed_step_index } => {
                write!(f, "failure at step {}", failed_step_index)
            }
            RunOutcome::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Result of a completed sequencer run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceResult {
    #[serde(flatten)]
    pub outcome: RunOutcome,
    /// Steps that reported success before the run ended
    pub completed_steps: usize,
    pub total_steps: usize,
}

impl SequenceResult {
    pub fn success(total_steps: usize) -> Self {
        Self {
            outcome: RunOutcome::Success,
            completed_steps: total_steps,
            total_steps,
        }
    }

    pub fn failure(failed_step_index: usize, total_steps: usize) -> Self {
        Self {
            outcome: RunOutcome::Failure { failed_step_index },
            completed_steps: failed_step_index,
            total_steps,
        }
    }

    pub fn cancelled(completed_steps: usize, total_steps: usize) -> Self {
        Self {
            outcome: RunOutcome::Cancelled,
            completed_steps,
            total_steps,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == RunOutcome::Success
    }

    pub fn is_cancelled(&self) -> bool {
        self.outcome == RunOutcome::Cancelled
    }

    /// Index of the failed step, only for failed runs
    pub fn failed_step_index(&self) -> Option<usize> {
        match self.outcome {
            RunOutcome::Failure { failed_step_index } => Some(failed_step_index),
            _ => None,
        }
    }
}
