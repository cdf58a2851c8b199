// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Injectable sources of simulated step outcomes

use crate::outcome::StepOutcome;
use crate::step::Step;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

/// Success probability used when nothing else is configured
pub const DEFAULT_SUCCESS_PROBABILITY: f64 = 0.9;

/// Decides whether an attempted step succeeded
pub trait OutcomeSource: Send {
    fn draw(&mut self, index: usize, step: &Step) -> StepOutcome;
}

type ProbabilityFn = Box<dyn Fn(usize, &Step) -> f64 + Send + Sync>;

/// Random outcomes with a per-step success probability
pub struct RandomOutcomes<R: Rng + Send = StdRng> {
    rng: R,
    probability: ProbabilityFn,
}

impl RandomOutcomes<StdRng> {
    /// Deterministic source for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng + Send> RandomOutcomes<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            probability: Box::new(|_, _| DEFAULT_SUCCESS_PROBABILITY),
        }
    }

    /// Use the same success probability for every step
    pub fn with_probability(self, probability: f64) -> Self {
        self.with_probability_fn(move |_, _| probability)
    }

    /// Compute the success probability per step
    pub fn with_probability_fn(
        mut self,
        f: impl Fn(usize, &Step) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.probability = Box::new(f);
        self
    }
}

impl<R: Rng + Send> OutcomeSource for RandomOutcomes<R> {
    fn draw(&mut self, index: usize, step: &Step) -> StepOutcome {
        let p = (self.probability)(index, step);
        // NaN and out-of-range values clamp to never/always
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        if self.rng.gen::<f64>() < p {
            StepOutcome::Success
        } else {
            StepOutcome::Failure
        }
    }
}

/// Fixed outcomes for tests and forced runs
#[derive(Debug, Clone, Default)]
pub struct ScriptedOutcomes {
    failing: BTreeSet<usize>,
    fail_all: bool,
    draws: Vec<usize>,
}

impl ScriptedOutcomes {
    pub fn always_succeed() -> Self {
        Self::default()
    }

    pub fn always_fail() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Fail only the step at `index`
    pub fn fail_at(index: usize) -> Self {
        Self::default().and_fail_at(index)
    }

    pub fn and_fail_at(mut self, index: usize) -> Self {
        self.failing.insert(index);
        self
    }

    /// Step indices drawn so far, in order
    pub fn draws(&self) -> &[usize] {
        &self.draws
    }
}

impl OutcomeSource for ScriptedOutcomes {
    fn draw(&mut self, index: usize, _step: &Step) -> StepOutcome {
        self.draws.push(index);
        if self.fail_all || self.failing.contains(&index) {
            StepOutcome::Failure
        } else {
            StepOutcome::Success
        }
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
