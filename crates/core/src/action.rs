// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quick actions offered by the dashboard

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action '{0}' (expected one of: restart, stop, update, backup, logs, deploy)")]
pub struct UnknownAction(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Restart,
    Stop,
    Update,
    Backup,
    Logs,
    Deploy,
}

impl QuickAction {
    pub const ALL: [QuickAction; 6] = [
        QuickAction::Restart,
        QuickAction::Stop,
        QuickAction::Update,
        QuickAction::Backup,
        QuickAction::Logs,
        QuickAction::Deploy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuickAction::Restart => "restart",
            QuickAction::Stop => "stop",
            QuickAction::Update => "update",
            QuickAction::Backup => "backup",
            QuickAction::Logs => "logs",
            QuickAction::Deploy => "deploy",
        }
    }
}

impl fmt::Display for QuickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuickAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        QuickAction::ALL
            .into_iter()
            .find(|a| a.as_str() == wanted)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}
