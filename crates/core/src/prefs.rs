// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed preferences on top of a [`KeyValueStore`]

use crate::status::BotStatus;
use crate::store::{KeyValueStore, StoreError};
use std::collections::BTreeMap;

pub const THEME_KEY: &str = "anayat_theme";
pub const CONFIG_KEY: &str = "anayat_config";
pub const STATUS_KEY: &str = "anayat_bot_status";

/// Bot configuration fields as entered by the user
pub type BotSettings = BTreeMap<String, String>;

/// Preferences view; owns its store handle
#[derive(Debug, Clone)]
pub struct Preferences<S> {
    store: S,
    default_theme: String,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S, default_theme: impl Into<String>) -> Self {
        Self {
            store,
            default_theme: default_theme.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored theme, or the configured default
    pub fn theme(&self) -> Result<String, StoreError> {
        Ok(self
            .store
            .get(THEME_KEY)?
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| self.default_theme.clone()))
    }

    pub fn set_theme(&self, theme: &str) -> Result<(), StoreError> {
        let theme = theme.trim();
        if theme.is_empty() {
            return Err(StoreError::InvalidValue {
                key: THEME_KEY.to_string(),
                message: "theme name is empty".to_string(),
            });
        }
        self.store.set(THEME_KEY, theme)
    }

    /// Raw JSON text of the saved settings, as included in backups
    pub fn raw_settings(&self) -> Result<Option<String>, StoreError> {
        self.store.get(CONFIG_KEY)
    }

    pub fn settings(&self) -> Result<BotSettings, StoreError> {
        match self.store.get(CONFIG_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(BotSettings::new()),
        }
    }

    /// Replace the saved settings
    pub fn save_settings(&self, settings: &BotSettings) -> Result<(), StoreError> {
        let raw = serde_json::to_string(settings)?;
        self.store.set(CONFIG_KEY, &raw)
    }

    /// Last persisted status; unreadable values fall back to offline.
    ///
    /// A stored `starting` means a restart never finished, so it loads as
    /// offline.
    pub fn bot_status(&self) -> Result<BotStatus, StoreError> {
        let status = self.store.get(STATUS_KEY)?;
        Ok(match status {
            Some(raw) => match raw.parse() {
                Ok(BotStatus::Starting) => {
                    tracing::info!("restart was interrupted, loading bot as offline");
                    BotStatus::Offline
                }
                Ok(status) => status,
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring stored bot status");
                    BotStatus::Offline
                }
            },
            None => BotStatus::Offline,
        })
    }

    pub fn set_bot_status(&self, status: BotStatus) -> Result<(), StoreError> {
        self.store.set(STATUS_KEY, status.as_str())
    }
}
