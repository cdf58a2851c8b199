// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backup file output

use anayat_core::BackupSnapshot;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("backup already exists: {0}")]
    AlreadyExists(PathBuf),
}

/// Write `snapshot` as pretty JSON to `dir/file_name`, never overwriting
pub fn write_backup(
    dir: &Path,
    file_name: &str,
    snapshot: &BackupSnapshot,
) -> Result<PathBuf, BackupError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    if path.exists() {
        return Err(BackupError::AlreadyExists(path));
    }

    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json)?;
    tracing::info!(path = %path.display(), users = snapshot.users, "backup written");
    Ok(path)
}
