// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deployment steps and validated step plans
//!
//! A [`StepPlan`] is built once per deployment request from raw
//! [`StepSpec`] definitions. Construction is the only place a step can be
//! rejected; a plan that exists is always runnable.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors raised while building a [`StepPlan`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidStepError {
    #[error("step {index} has an empty name")]
    EmptyName { index: usize },
    #[error("step {index} ({name}) has negative duration: {duration_ms}ms")]
    NegativeDuration {
        index: usize,
        name: String,
        duration_ms: i64,
    },
}

/// Raw step definition as it appears in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSpec {
    pub name: String,
    pub duration_ms: i64,
}

impl StepSpec {
    pub fn new(name: impl Into<String>, duration_ms: i64) -> Self {
        Self {
            name: name.into(),
            duration_ms,
        }
    }
}

/// One validated unit of simulated deployment work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    name: String,
    duration: Duration,
}

impl Step {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    fn from_spec(index: usize, spec: &StepSpec) -> Result<Self, InvalidStepError> {
        let name = spec.name.trim();
        if name.is_empty() {
            return Err(InvalidStepError::EmptyName { index });
        }
        let millis = u64::try_from(spec.duration_ms).map_err(|_| {
            InvalidStepError::NegativeDuration {
                index,
                name: name.to_string(),
                duration_ms: spec.duration_ms,
            }
        })?;
        Ok(Self {
            name: name.to_string(),
            duration: Duration::from_millis(millis),
        })
    }
}

/// Ordered, immutable sequence of steps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepPlan {
    steps: Vec<Step>,
}

impl StepPlan {
    /// Validate every spec, failing on the first malformed one
    pub fn new<'a>(specs: impl IntoIterator<Item = &'a StepSpec>) -> Result<Self, InvalidStepError> {
        let steps = specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| Step::from_spec(index, spec))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }

    /// The five-step bot deployment used when no plan is configured
    pub fn default_specs() -> Vec<StepSpec> {
        vec![
            StepSpec::new("Validating Input", 1000),
            StepSpec::new("Checking Dependencies", 1500),
            StepSpec::new("Installing Packages", 2000),
            StepSpec::new("Configuring Bot", 1000),
            StepSpec::new("Starting Services", 1500),
        ]
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of all step durations
    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(Step::duration).sum()
    }

    /// Plan made of the steps from `index` onwards, for caller-driven retries
    pub fn remaining_from(&self, index: usize) -> Self {
        Self {
            steps: self.steps.iter().skip(index).cloned().collect(),
        }
    }
}

#[cfg(test)]
#[path = "step_tests.rs"]
mod tests;
