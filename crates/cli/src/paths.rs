// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! State directory layout

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";
pub const PREFERENCES_FILE: &str = "preferences.json";
pub const BACKUP_DIR: &str = "backups";

/// Resolve the state directory: explicit flag, then `ANAYAT_STATE_DIR`,
/// then the platform data directory
pub fn state_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os("ANAYAT_STATE_DIR").filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::data_dir()
        .map(|d| d.join("anayat"))
        .ok_or_else(|| anyhow!("no data directory; pass --state-dir or set ANAYAT_STATE_DIR"))
}

pub fn config_path(state_dir: &Path, flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| state_dir.join(CONFIG_FILE))
}
