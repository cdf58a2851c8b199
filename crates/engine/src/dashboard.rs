// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard state and bot management workflows

use crate::error::EngineError;
use crate::lock::DeployLock;
use anayat_adapters::{NotifyAdapter, TracedStore};
use anayat_core::terminal::{self, LOG_HEADER};
use anayat_core::{
    backup_file_name, BackupSnapshot, BotSettings, BotStatus, CancellationToken, DashboardConfig,
    KeyValueStore, Notification, Preferences, RandomOutcomes, SystemStats, TerminalCommand,
    TerminalContext, TerminalEffect, TerminalLog, TerminalReply,
};
use rand::Rng;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Dashboard adapter dependencies
pub struct DashboardDeps<S, N> {
    pub store: S,
    pub notify: N,
}

/// Mutable view shared by all workflows
#[derive(Debug, Default)]
pub(crate) struct DashboardContext {
    pub(crate) status: BotStatus,
    pub(crate) terminal: TerminalLog,
    pub(crate) last_stats: Option<SystemStats>,
}

/// Bot dashboard: status, preferences, terminal, and the workflows behind
/// each quick action
pub struct Dashboard<S, N> {
    pub(crate) config: DashboardConfig,
    pub(crate) prefs: Preferences<TracedStore<S>>,
    pub(crate) notify: N,
    pub(crate) context: Arc<Mutex<DashboardContext>>,
    pub(crate) lock: DeployLock,
    pub(crate) cancel: CancellationToken,
}

impl<S, N> Dashboard<S, N>
where
    S: KeyValueStore,
    N: NotifyAdapter,
{
    /// Create a dashboard, restoring the last persisted bot status
    pub fn new(config: DashboardConfig, deps: DashboardDeps<S, N>) -> Result<Self, EngineError> {
        let prefs = Preferences::new(TracedStore::new(deps.store), config.default_theme.clone());
        let status = prefs.bot_status()?;
        tracing::debug!(%status, "dashboard loaded");

        Ok(Self {
            config,
            prefs,
            notify: deps.notify,
            context: Arc::new(Mutex::new(DashboardContext {
                status,
                ..DashboardContext::default()
            })),
            lock: DeployLock::new(),
            cancel: CancellationToken::new(),
        })
    }

    /// Share a cancellation token with the caller (e.g. a Ctrl-C handler)
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn cancellation(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn preferences(&self) -> &Preferences<TracedStore<S>> {
        &self.prefs
    }

    pub fn deploy_lock(&self) -> &DeployLock {
        &self.lock
    }

    pub fn status(&self) -> BotStatus {
        self.context().status
    }

    /// Terminal scrollback, oldest first
    pub fn terminal_lines(&self) -> Vec<String> {
        self.context().terminal.lines().to_vec()
    }

    /// Outcome source using the configured success probability
    pub fn outcome_source(&self, seed: Option<u64>) -> RandomOutcomes {
        let source = match seed {
            Some(seed) => RandomOutcomes::seeded(seed),
            None => RandomOutcomes::from_entropy(),
        };
        source.with_probability(self.config.deploy.success_probability)
    }

    /// Restart the bot: starting, wait, online.
    ///
    /// Cancellation during the wait leaves the bot offline.
    pub async fn restart(&self) -> Result<(), EngineError> {
        self.send(Notification::warning("Restarting bot...")).await?;
        self.set_status(BotStatus::Starting)?;

        if let Err(e) = self.pause(self.config.timing.restart).await {
            self.set_status(BotStatus::Offline)?;
            return Err(e);
        }

        self.set_status(BotStatus::Online)?;
        self.send(Notification::success("Bot restarted successfully!"))
            .await
    }

    /// Stop the bot. Returns false when the caller did not confirm.
    pub async fn stop(&self, confirmed: bool) -> Result<bool, EngineError> {
        if !confirmed {
            tracing::info!("stop not confirmed");
            return Ok(false);
        }
        self.set_status(BotStatus::Offline)?;
        self.send(Notification::warning("Bot stopped")).await?;
        Ok(true)
    }

    pub async fn update(&self) -> Result<(), EngineError> {
        tracing::info!("updating bot");
        self.pause(self.config.timing.update).await?;
        self.send(Notification::success("Bot updated to latest version!"))
            .await
    }

    /// Write a backup snapshot into `dir` and return its path
    pub async fn backup<R>(&self, dir: &Path, rng: &mut R) -> Result<PathBuf, EngineError>
    where
        R: Rng + Send + ?Sized,
    {
        self.send(Notification::info("Creating backup...")).await?;
        self.pause(self.config.timing.backup).await?;

        let now = chrono::Utc::now();
        let snapshot = BackupSnapshot::capture(now, rng, self.prefs.raw_settings()?);
        let path = anayat_storage::write_backup(dir, &backup_file_name(now), &snapshot)?;

        self.send(Notification::success("Backup created and downloaded!"))
            .await?;
        Ok(path)
    }

    /// Append the system log header, wait, then the recent log lines.
    ///
    /// Returns the lines appended to the terminal.
    pub async fn view_logs(&self) -> Result<Vec<String>, EngineError> {
        let mut shown: Vec<String> = LOG_HEADER.iter().map(|l| l.to_string()).collect();
        self.push_terminal(&LOG_HEADER);

        self.pause(self.config.timing.logs).await?;

        let lines = terminal::system_log_lines();
        self.push_terminal(&lines);
        shown.extend(lines.iter().map(|l| l.to_string()));
        Ok(shown)
    }

    /// Run one terminal command line.
    ///
    /// Blank input is ignored. A `restart` command runs the restart workflow
    /// after its reply is shown.
    pub async fn terminal<R>(
        &self,
        line: &str,
        rng: &mut R,
    ) -> Result<Option<TerminalReply>, EngineError>
    where
        R: Rng + Send + ?Sized,
    {
        let Some(command) = TerminalCommand::parse(line) else {
            return Ok(None);
        };
        self.context().terminal.echo(line.trim());

        self.pause(self.config.timing.terminal).await?;

        let reply = {
            let mut ctx = self.context();
            let terminal_ctx = TerminalContext {
                status: ctx.status,
                uptime_secs: ctx.last_stats.map_or(0, |s| s.uptime_secs),
            };
            let reply = terminal::respond(&command, &terminal_ctx, rng);
            ctx.terminal.apply(&reply);
            reply
        };
        tracing::debug!(command = line.trim(), effect = ?reply.effect, "terminal command");

        if reply.effect == Some(TerminalEffect::Restart) {
            self.restart().await?;
        }
        Ok(Some(reply))
    }

    /// Persist bot settings and confirm
    pub async fn save_configuration(&self, settings: &BotSettings) -> Result<(), EngineError> {
        self.prefs.save_settings(settings)?;
        tracing::info!(fields = settings.len(), "configuration saved");
        self.send(Notification::success("Configuration saved successfully!"))
            .await
    }

    pub(crate) fn context(&self) -> MutexGuard<'_, DashboardContext> {
        self.context.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn set_status(&self, status: BotStatus) -> Result<(), EngineError> {
        self.prefs.set_bot_status(status)?;
        let previous = std::mem::replace(&mut self.context().status, status);
        if previous != status {
            tracing::info!(from = %previous, to = %status, "bot status changed");
        }
        Ok(())
    }

    pub(crate) async fn send(&self, notification: Notification) -> Result<(), EngineError> {
        self.notify.notify(notification).await?;
        Ok(())
    }

    /// Sleep for `duration` unless cancelled first
    pub(crate) async fn pause(&self, duration: Duration) -> Result<(), EngineError> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(EngineError::Cancelled),
            _ = tokio::time::sleep(duration) => Ok(()),
        }
    }

    fn push_terminal(&self, lines: &[&str]) {
        let mut ctx = self.context();
        for line in lines {
            ctx.terminal.push(line);
        }
    }
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
