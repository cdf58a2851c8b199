// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! anayat-core: Core library for the Anayat bot dashboard
//!
//! This crate provides:
//! - The deployment sequencer with injectable outcome sources and reporters
//! - Validated step plans and run results
//! - Simulated bot status, system stats, terminal commands
//! - Key-value preferences, backups, and TOML configuration

pub mod id;

pub mod action;
pub mod backup;
pub mod config;
pub mod notify;
pub mod outcome;
pub mod prefs;
pub mod reporter;
pub mod sequencer;
pub mod source;
pub mod stats;
pub mod status;
pub mod step;
pub mod store;
pub mod terminal;

// Re-exports
pub use action::{QuickAction, UnknownAction};
pub use backup::{backup_file_name, BackupSnapshot};
pub use config::{ConfigError, DashboardConfig, DeployConfig, MonitorConfig, TimingConfig};
pub use id::{IdGen, RunId, SequentialIdGen, UuidIdGen};
pub use notify::{Notification, NotifyLevel};
pub use outcome::{RunOutcome, SequenceResult, StepOutcome};
pub use prefs::{BotSettings, Preferences};
pub use reporter::{FnReporter, NoOpReporter, RecordingReporter, ReportEvent, Reporter};
pub use sequencer::Sequencer;
pub use source::{OutcomeSource, RandomOutcomes, ScriptedOutcomes, DEFAULT_SUCCESS_PROBABILITY};
pub use stats::{format_uptime, SystemStats, UsageLevel};
pub use status::{BotStatus, UnknownStatus};
pub use step::{InvalidStepError, Step, StepPlan, StepSpec};
pub use store::{KeyValueStore, MemoryStore, StoreError};
pub use terminal::{TerminalCommand, TerminalContext, TerminalEffect, TerminalLog, TerminalReply};

pub use tokio_util::sync::CancellationToken;
