// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for dashboard workflows

use anayat_adapters::NotifyError;
use anayat_core::{InvalidStepError, StoreError};
use anayat_storage::BackupError;
use thiserror::Error;

/// Errors that can occur while running a workflow
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("a deployment is already in progress")]
    DeploymentInProgress,
    #[error("workflow cancelled")]
    Cancelled,
    #[error("invalid deployment plan: {0}")]
    InvalidStep(#[from] InvalidStepError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("backup error: {0}")]
    Backup(#[from] BackupError),
    #[error("notify error: {0}")]
    Notify(#[from] NotifyError),
}
