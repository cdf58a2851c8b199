// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal and no-op notifiers

use super::{NotifyAdapter, NotifyError};
use anayat_core::{Notification, NotifyLevel};
use async_trait::async_trait;
use std::io::Write;

/// Prints notifications to stderr, one line each
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNotifyAdapter;

impl ConsoleNotifyAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotifyAdapter for ConsoleNotifyAdapter {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        match notification.level {
            NotifyLevel::Error => tracing::error!(text = %notification.message, "notify"),
            NotifyLevel::Warning => tracing::warn!(text = %notification.message, "notify"),
            NotifyLevel::Info | NotifyLevel::Success => {
                tracing::info!(text = %notification.message, level = ?notification.level, "notify")
            }
        }

        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "{}", notification).map_err(|e| NotifyError::Failed(e.to_string()))
    }
}

/// Notifier that drops everything.
///
/// Used for machine-readable output where stderr must stay quiet.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpNotifyAdapter;

impl NoOpNotifyAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotifyAdapter for NoOpNotifyAdapter {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        tracing::debug!(text = %notification.message, "notification suppressed");
        Ok(())
    }
}
