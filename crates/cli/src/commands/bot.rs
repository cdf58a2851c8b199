// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bot management commands and quick actions

use super::settings::StatusView;
use super::Context;
use crate::output::{self, OutputFormat};
use crate::paths;
use anayat_adapters::NotifyAdapter;
use anayat_core::{KeyValueStore, QuickAction};
use anayat_engine::Dashboard;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(clap::Args)]
pub struct ActionArgs {
    /// restart, stop, update, backup, logs, or deploy
    name: String,

    /// Confirm destructive actions (stop)
    #[arg(long, short)]
    yes: bool,
}

pub async fn restart<S, N>(dashboard: &Dashboard<S, N>, ctx: &Context) -> Result<()>
where
    S: KeyValueStore,
    N: NotifyAdapter,
{
    dashboard.restart().await?;
    output::print(&StatusView::of(dashboard)?, ctx.format)?;
    Ok(())
}

pub async fn stop<S, N>(dashboard: &Dashboard<S, N>, confirmed: bool, ctx: &Context) -> Result<()>
where
    S: KeyValueStore,
    N: NotifyAdapter,
{
    if !dashboard.stop(confirmed).await? {
        eprintln!("Bot not stopped; pass --yes to confirm");
    }
    output::print(&StatusView::of(dashboard)?, ctx.format)?;
    Ok(())
}

pub async fn update<S, N>(dashboard: &Dashboard<S, N>, ctx: &Context) -> Result<()>
where
    S: KeyValueStore,
    N: NotifyAdapter,
{
    dashboard.update().await?;
    if ctx.format == OutputFormat::Json {
        output::print(&StatusView::of(dashboard)?, ctx.format)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct BackupView {
    path: PathBuf,
}

impl fmt::Display for BackupView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Backup written to {}", self.path.display())
    }
}

pub async fn backup<S, N>(
    dashboard: &Dashboard<S, N>,
    out: Option<PathBuf>,
    ctx: &Context,
) -> Result<()>
where
    S: KeyValueStore,
    N: NotifyAdapter,
{
    let dir = out.unwrap_or_else(|| ctx.state_dir.join(paths::BACKUP_DIR));
    let path = dashboard
        .backup(&dir, &mut StdRng::from_entropy())
        .await?;
    output::print(&BackupView { path }, ctx.format)?;
    Ok(())
}

pub async fn logs<S, N>(dashboard: &Dashboard<S, N>, ctx: &Context) -> Result<()>
where
    S: KeyValueStore,
    N: NotifyAdapter,
{
    let lines = dashboard.view_logs().await?;
    output::print_list(&lines, ctx.format)?;
    Ok(())
}

pub async fn action<S, N>(
    dashboard: &Dashboard<S, N>,
    args: ActionArgs,
    ctx: &Context,
) -> Result<ExitCode>
where
    S: KeyValueStore,
    N: NotifyAdapter,
{
    let action: QuickAction = args.name.parse()?;
    tracing::info!(action = action.as_str(), "quick action");

    match action {
        QuickAction::Restart => restart(dashboard, ctx).await?,
        QuickAction::Stop => stop(dashboard, args.yes, ctx).await?,
        QuickAction::Update => update(dashboard, ctx).await?,
        QuickAction::Backup => backup(dashboard, None, ctx).await?,
        QuickAction::Logs => logs(dashboard, ctx).await?,
        QuickAction::Deploy => {
            return super::deploy::handle(dashboard, super::deploy::DeployArgs::default(), ctx)
                .await
        }
    }
    Ok(ExitCode::SUCCESS)
}
