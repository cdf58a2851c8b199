// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated bot status

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown bot status: {0}")]
pub struct UnknownStatus(pub String);

/// Lifecycle status of the managed bot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotStatus {
    #[default]
    Offline,
    Starting,
    Online,
}

impl BotStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BotStatus::Offline => "offline",
            BotStatus::Starting => "starting",
            BotStatus::Online => "online",
        }
    }

    /// Uppercase label shown next to the status icon
    pub fn label(self) -> String {
        self.as_str().to_uppercase()
    }

    pub fn icon(self) -> &'static str {
        match self {
            BotStatus::Online => "🟢",
            BotStatus::Offline => "🔴",
            BotStatus::Starting => "🟡",
        }
    }

    /// Random status drift observed by periodic checks.
    ///
    /// An online bot drops offline with probability `offline_probability`;
    /// every other status is stable.
    pub fn drift<R: Rng + ?Sized>(self, rng: &mut R, offline_probability: f64) -> Self {
        match self {
            BotStatus::Online if rng.gen::<f64>() < offline_probability => BotStatus::Offline,
            other => other,
        }
    }
}

impl fmt::Display for BotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BotStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "offline" => Ok(BotStatus::Offline),
            "starting" => Ok(BotStatus::Starting),
            "online" => Ok(BotStatus::Online),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}
