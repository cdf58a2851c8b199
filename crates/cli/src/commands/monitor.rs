// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stats and monitor commands

use super::Context;
use crate::output::{self, OutputFormat};
use anayat_adapters::NotifyAdapter;
use anayat_core::{KeyValueStore, SystemStats};
use anayat_engine::Dashboard;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(clap::Args)]
pub struct MonitorArgs {
    /// Stop after this many samples
    #[arg(long)]
    ticks: Option<u64>,

    /// Seed for status drift and sampled stats
    #[arg(long)]
    seed: Option<u64>,
}

fn rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

pub fn stats(seed: Option<u64>, ctx: &Context) -> Result<()> {
    let stats = SystemStats::sample(&mut rng(seed));
    output::print(&stats, ctx.format)
}

pub async fn watch<S, N>(dashboard: &Dashboard<S, N>, args: MonitorArgs, ctx: &Context) -> Result<()>
where
    S: KeyValueStore,
    N: NotifyAdapter,
{
    let format = ctx.format;
    if format == OutputFormat::Text {
        println!(
            "Monitoring every {}s (Ctrl-C to stop)",
            dashboard.config().monitor.interval.as_secs_f64()
        );
    }

    let cancel = dashboard.cancellation();
    let mut write_error = None;
    let ticks = dashboard
        .monitor(&mut rng(args.seed), args.ticks, |tick| {
            let line = match format {
                OutputFormat::Text => Ok(tick.to_string()),
                // One JSON object per line so output can be streamed
                OutputFormat::Json => serde_json::to_string(tick),
            };
            match line {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    write_error.get_or_insert(e);
                    cancel.cancel();
                }
            }
        })
        .await?;
    if let Some(e) = write_error {
        return Err(e.into());
    }

    tracing::info!(ticks, "monitor finished");
    Ok(())
}
