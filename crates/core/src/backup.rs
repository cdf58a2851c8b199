// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backup snapshots of dashboard state

use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Contents of a backup file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupSnapshot {
    /// RFC 3339 with millisecond precision
    pub timestamp: String,
    pub users: u32,
    /// Raw saved settings JSON, if any
    pub config: Option<String>,
}

impl BackupSnapshot {
    pub fn capture<R: Rng + ?Sized>(
        now: DateTime<Utc>,
        rng: &mut R,
        config: Option<String>,
    ) -> Self {
        Self {
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            users: rng.gen_range(0..1000),
            config,
        }
    }
}

/// `anayat-backup-<unix millis>.json`
pub fn backup_file_name(now: DateTime<Utc>) -> String {
    format!("anayat-backup-{}.json", now.timestamp_millis())
}
