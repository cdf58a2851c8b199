// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deploy command

use super::Context;
use crate::output::{self, OutputFormat};
use anayat_adapters::NotifyAdapter;
use anayat_core::{KeyValueStore, OutcomeSource, Reporter, ScriptedOutcomes, StepOutcome};
use anayat_engine::Dashboard;
use anyhow::Result;
use std::process::ExitCode;

#[derive(clap::Args, Default)]
pub struct DeployArgs {
    /// Seed for the random step outcomes
    #[arg(long, conflicts_with_all = ["always_succeed", "fail_at"])]
    seed: Option<u64>,

    /// Fail the step at this index
    #[arg(long, conflicts_with = "always_succeed")]
    fail_at: Option<usize>,

    /// Succeed every step
    #[arg(long)]
    always_succeed: bool,

    /// Per-step success probability (overrides config)
    #[arg(
        long,
        value_parser = parse_probability,
        conflicts_with_all = ["always_succeed", "fail_at"]
    )]
    probability: Option<f64>,
}

fn parse_probability(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("must be between 0 and 1, got {value}"))
    }
}

impl DeployArgs {
    fn outcome_source<S, N>(&self, dashboard: &Dashboard<S, N>) -> Box<dyn OutcomeSource>
    where
        S: KeyValueStore,
        N: NotifyAdapter,
    {
        if self.always_succeed {
            return Box::new(ScriptedOutcomes::always_succeed());
        }
        if let Some(index) = self.fail_at {
            return Box::new(ScriptedOutcomes::fail_at(index));
        }
        let source = dashboard.outcome_source(self.seed);
        match self.probability {
            Some(p) => Box::new(source.with_probability(p)),
            None => Box::new(source),
        }
    }
}

pub async fn handle<S, N>(
    dashboard: &Dashboard<S, N>,
    args: DeployArgs,
    ctx: &Context,
) -> Result<ExitCode>
where
    S: KeyValueStore,
    N: NotifyAdapter,
{
    let mut source = args.outcome_source(dashboard);
    let mut printer = ProgressPrinter {
        enabled: ctx.format == OutputFormat::Text,
        percent: 0,
    };

    let report = dashboard.deploy(source.as_mut(), &mut printer).await?;
    output::print(&report, ctx.format)?;

    if report.result.is_success() {
        Ok(ExitCode::SUCCESS)
    } else if report.result.is_cancelled() {
        Err(anayat_engine::EngineError::Cancelled.into())
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Prints one line per finished step in text mode
struct ProgressPrinter {
    enabled: bool,
    percent: u32,
}

impl Reporter for ProgressPrinter {
    fn step_started(&mut self, _index: usize, name: &str) {
        if self.enabled {
            println!("📦 {}...", name);
        }
    }

    fn progress(&mut self, fraction: f64) {
        self.percent = (fraction * 100.0).round() as u32;
    }

    fn step_finished(&mut self, _index: usize, name: &str, outcome: StepOutcome) {
        if !self.enabled {
            return;
        }
        match outcome {
            StepOutcome::Success => println!("[{:>3}%] ✅ {} - Completed", self.percent, name),
            StepOutcome::Failure => println!("[{:>3}%] ❌ Failed at: {}", self.percent, name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_probability;
    use yare::parameterized;

    #[parameterized(
        zero = { "0", 0.0 },
        half = { "0.5", 0.5 },
        one = { "1", 1.0 },
    )]
    fn probability_in_range_is_accepted(input: &str, expected: f64) {
        assert_eq!(parse_probability(input), Ok(expected));
    }

    #[parameterized(
        above = { "7" },
        negative = { "-0.1" },
        nan = { "NaN" },
        word = { "often" },
    )]
    fn probability_out_of_range_is_rejected(input: &str) {
        assert!(parse_probability(input).is_err());
    }
}
