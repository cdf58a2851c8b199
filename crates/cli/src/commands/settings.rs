// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status, configuration, and theme commands

use super::Context;
use crate::output::{self, OutputFormat};
use anayat_adapters::NotifyAdapter;
use anayat_core::{BotSettings, BotStatus, DashboardConfig, KeyValueStore};
use anayat_engine::Dashboard;
use anyhow::{anyhow, Result};
use clap::Subcommand;
use serde::Serialize;
use std::fmt;

#[derive(clap::Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the dashboard config and saved bot settings
    Show,
    /// Save bot settings
    Set {
        /// Settings as key=value
        #[arg(required = true)]
        pairs: Vec<String>,
    },
}

#[derive(clap::Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    command: Option<ThemeCommand>,
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    /// Change the theme
    Set { name: String },
}

#[derive(Serialize)]
pub struct StatusView {
    status: BotStatus,
    theme: String,
}

impl StatusView {
    pub fn of<S, N>(dashboard: &Dashboard<S, N>) -> Result<Self>
    where
        S: KeyValueStore,
        N: NotifyAdapter,
    {
        Ok(Self {
            status: dashboard.status(),
            theme: dashboard.preferences().theme()?,
        })
    }
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bot Status: {} {}", self.status.icon(), self.status.label())
    }
}

pub fn status<S, N>(dashboard: &Dashboard<S, N>, ctx: &Context) -> Result<()>
where
    S: KeyValueStore,
    N: NotifyAdapter,
{
    output::print(&StatusView::of(dashboard)?, ctx.format)?;
    Ok(())
}

#[derive(Serialize)]
struct ConfigView<'a> {
    config: &'a DashboardConfig,
    settings: BotSettings,
}

pub async fn config<S, N>(dashboard: &Dashboard<S, N>, args: ConfigArgs, ctx: &Context) -> Result<()>
where
    S: KeyValueStore,
    N: NotifyAdapter,
{
    match args.command {
        ConfigCommand::Show => {
            let view = ConfigView {
                config: dashboard.config(),
                settings: dashboard.preferences().settings()?,
            };
            match ctx.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
                OutputFormat::Text => {
                    print!("{}", toml::to_string_pretty(view.config)?);
                    if !view.settings.is_empty() {
                        println!();
                        println!("[settings]");
                        for (key, value) in &view.settings {
                            println!("{} = {:?}", key, value);
                        }
                    }
                }
            }
        }
        ConfigCommand::Set { pairs } => {
            let mut settings = dashboard.preferences().settings()?;
            for pair in &pairs {
                let (key, value) = parse_pair(pair)?;
                settings.insert(key.to_string(), value.to_string());
            }
            dashboard.save_configuration(&settings).await?;
            if ctx.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            }
        }
    }
    Ok(())
}

fn parse_pair(pair: &str) -> Result<(&str, &str)> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| anyhow!("expected key=value, got '{}'", pair))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("empty key in '{}'", pair));
    }
    Ok((key, value.trim()))
}

#[derive(Serialize)]
struct ThemeView {
    theme: String,
}

impl fmt::Display for ThemeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.theme)
    }
}

pub fn theme<S, N>(dashboard: &Dashboard<S, N>, args: ThemeArgs, ctx: &Context) -> Result<()>
where
    S: KeyValueStore,
    N: NotifyAdapter,
{
    let prefs = dashboard.preferences();
    if let Some(ThemeCommand::Set { name }) = args.command {
        prefs.set_theme(&name)?;
        tracing::info!(theme = %name, "theme changed");
    }
    output::print(&ThemeView { theme: prefs.theme()? }, ctx.format)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pair_splits_on_first_equals() {
        assert_eq!(parse_pair("url=a=b").unwrap(), ("url", "a=b"));
        assert_eq!(parse_pair(" botName = Anayat ").unwrap(), ("botName", "Anayat"));
    }

    #[test]
    fn parse_pair_rejects_missing_separator() {
        assert!(parse_pair("botName").is_err());
        assert!(parse_pair("=x").is_err());
    }
}
