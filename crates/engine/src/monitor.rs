// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Periodic status and resource monitoring

use crate::dashboard::Dashboard;
use crate::error::EngineError;
use anayat_adapters::NotifyAdapter;
use anayat_core::{BotStatus, KeyValueStore, SystemStats};
use rand::Rng;
use serde::Serialize;
use std::fmt;
use tokio::time::MissedTickBehavior;

/// One monitoring sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonitorTick {
    /// 1-based tick number
    pub tick: u64,
    pub status: BotStatus,
    /// Whether the status changed on this tick
    pub changed: bool,
    pub stats: SystemStats,
}

impl fmt::Display for MonitorTick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {}  {}",
            self.tick,
            self.status.icon(),
            self.status.label(),
            self.stats
        )
    }
}

impl<S, N> Dashboard<S, N>
where
    S: KeyValueStore,
    N: NotifyAdapter,
{
    /// Sample status and stats every `monitor.interval`.
    ///
    /// Stops after `max_ticks` ticks or when cancelled and returns the number
    /// of ticks delivered. Cancellation is a normal stop here, not an error.
    pub async fn monitor<R, F>(
        &self,
        rng: &mut R,
        max_ticks: Option<u64>,
        mut on_tick: F,
    ) -> Result<u64, EngineError>
    where
        R: Rng + Send + ?Sized,
        F: FnMut(&MonitorTick) + Send,
    {
        let mut interval = tokio::time::interval(self.config.monitor.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // First tick completes immediately
        interval.tick().await;

        let mut ticks = 0;
        while max_ticks.map_or(true, |max| ticks < max) {
            let cancelled = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => true,
                _ = interval.tick() => false,
            };
            if cancelled {
                tracing::info!(ticks, "monitor cancelled");
                break;
            }
            ticks += 1;

            let before = self.status();
            let after = before.drift(rng, self.config.monitor.offline_probability);
            if after != before {
                tracing::warn!(from = %before, to = %after, "bot status drifted");
                self.set_status(after)?;
            }

            let stats = SystemStats::sample(rng);
            self.context().last_stats = Some(stats);

            on_tick(&MonitorTick {
                tick: ticks,
                status: after,
                changed: after != before,
                stats,
            });
        }
        Ok(ticks)
    }
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;
