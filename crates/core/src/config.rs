// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard configuration
//!
//! Loaded from a TOML file. Every field has a default, so a missing file
//! or an empty table yields the stock dashboard.

use crate::source::DEFAULT_SUCCESS_PROBABILITY;
use crate::step::{InvalidStepError, StepPlan, StepSpec};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub version: String,
    pub default_theme: String,
    pub deploy: DeployConfig,
    pub timing: TimingConfig,
    pub monitor: MonitorConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            version: "2.0.0".to_string(),
            default_theme: "dark".to_string(),
            deploy: DeployConfig::default(),
            timing: TimingConfig::default(),
            monitor: MonitorConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    pub success_probability: f64,
    pub steps: Vec<StepSpec>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            success_probability: DEFAULT_SUCCESS_PROBABILITY,
            steps: StepPlan::default_specs(),
        }
    }
}

impl DeployConfig {
    /// Build a fresh plan for one deployment request
    pub fn plan(&self) -> Result<StepPlan, InvalidStepError> {
        StepPlan::new(&self.steps)
    }
}

/// Simulated delays of the non-deployment workflows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    #[serde(with = "humantime_serde")]
    pub restart: Duration,
    #[serde(with = "humantime_serde")]
    pub update: Duration,
    #[serde(with = "humantime_serde")]
    pub backup: Duration,
    #[serde(with = "humantime_serde")]
    pub logs: Duration,
    #[serde(with = "humantime_serde")]
    pub terminal: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            restart: Duration::from_secs(3),
            update: Duration::from_secs(4),
            backup: Duration::from_secs(2),
            logs: Duration::from_secs(1),
            terminal: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
    pub offline_probability: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
            offline_probability: 0.05,
        }
    }
}

impl DashboardConfig {
    /// Parse and validate TOML text
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("deploy.success_probability", self.deploy.success_probability)?;
        check_probability("monitor.offline_probability", self.monitor.offline_probability)?;
        if self.monitor.interval.is_zero() {
            return Err(ConfigError::Invalid(
                "monitor.interval must be greater than zero".to_string(),
            ));
        }
        self.deploy
            .plan()
            .map_err(|e| ConfigError::Invalid(format!("deploy.steps: {}", e)))?;
        Ok(())
    }
}

fn check_probability(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{} must be between 0 and 1, got {}",
            field, value
        )))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
