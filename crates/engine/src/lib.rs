// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Anayat dashboard workflows

mod dashboard;
mod deploy;
mod error;
mod lock;
mod monitor;

pub use dashboard::{Dashboard, DashboardDeps};
pub use deploy::DeployReport;
pub use error::EngineError;
pub use lock::{DeployGuard, DeployLock};
pub use monitor::MonitorTick;
