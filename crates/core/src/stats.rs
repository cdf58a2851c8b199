// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated system statistics for the monitor view

use rand::Rng;
use serde::Serialize;
use std::fmt;

/// One sample of host statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemStats {
    pub cpu_percent: u8,
    pub memory_mb: u32,
    pub uptime_secs: u64,
}

impl SystemStats {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            cpu_percent: rng.gen_range(0..100),
            memory_mb: rng.gen_range(128..640),
            uptime_secs: rng.gen_range(0..86_400),
        }
    }

    pub fn cpu_level(&self) -> UsageLevel {
        UsageLevel::for_percent(self.cpu_percent)
    }
}

impl fmt::Display for SystemStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU: {}% ({})  Memory: {} MB  Uptime: {}",
            self.cpu_percent,
            self.cpu_level(),
            self.memory_mb,
            format_uptime(self.uptime_secs)
        )
    }
}

/// Severity bucket for a usage percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageLevel {
    Normal,
    Elevated,
    Critical,
}

impl UsageLevel {
    pub fn for_percent(percent: u8) -> Self {
        match percent {
            0..=49 => UsageLevel::Normal,
            50..=79 => UsageLevel::Elevated,
            _ => UsageLevel::Critical,
        }
    }

    /// Display color as a hex code
    pub fn color(self) -> &'static str {
        match self {
            UsageLevel::Normal => "#00ff88",
            UsageLevel::Elevated => "#ffaa00",
            UsageLevel::Critical => "#ff4444",
        }
    }
}

impl fmt::Display for UsageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageLevel::Normal => write!(f, "normal"),
            UsageLevel::Elevated => write!(f, "elevated"),
            UsageLevel::Critical => write!(f, "critical"),
        }
    }
}

/// Render seconds as `"{h}h {m}m {s}s"`
pub fn format_uptime(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{}h {}m {}s", hours, minutes, secs)
}
