// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod bot;
pub mod deploy;
pub mod monitor;
pub mod settings;
pub mod terminal;

use crate::output::OutputFormat;
use std::path::PathBuf;

/// Settings shared by every command
pub struct Context {
    pub state_dir: PathBuf,
    pub format: OutputFormat,
}
