// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! anayat - bot dashboard CLI

mod commands;
mod logging;
mod output;
mod paths;

use anayat_adapters::{ConsoleNotifyAdapter, NoOpNotifyAdapter, NotifyAdapter};
use anayat_core::{CancellationToken, DashboardConfig};
use anayat_engine::{Dashboard, DashboardDeps, EngineError};
use anayat_storage::FileStore;
use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{bot, deploy, monitor, settings, terminal, Context};
use output::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code for a run interrupted with Ctrl-C
const EXIT_CANCELLED: u8 = 130;

#[derive(Parser)]
#[command(name = "anayat", version, about = "Anayat bot dashboard")]
struct Cli {
    /// Directory holding preferences, logs, and backups
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// Config file (default: <state-dir>/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Do not print notifications
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the deployment sequence
    Deploy(deploy::DeployArgs),
    /// Restart the bot
    Restart,
    /// Stop the bot
    Stop {
        /// Confirm the stop
        #[arg(long, short)]
        yes: bool,
    },
    /// Update the bot to the latest version
    Update,
    /// Write a backup snapshot
    Backup {
        /// Output directory (default: <state-dir>/backups)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run a quick action by name
    Action(bot::ActionArgs),
    /// Run a terminal command
    Exec {
        #[arg(required = true, trailing_var_arg = true)]
        command: Vec<String>,
    },
    /// Sample system statistics
    Stats {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Watch bot status and system statistics
    Monitor(monitor::MonitorArgs),
    /// Show recent system logs
    Logs,
    /// Show bot status
    Status,
    /// Bot configuration
    Config(settings::ConfigArgs),
    /// Show or change the dashboard theme
    Theme(settings::ThemeArgs),
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let state_dir = paths::state_dir(cli.state_dir.clone())?;
    let _guard = logging::setup_logging(&state_dir)?;

    let config = DashboardConfig::load(&paths::config_path(&state_dir, cli.config.clone()))?;
    let store = FileStore::open(state_dir.join(paths::PREFERENCES_FILE))?;

    let cancel = CancellationToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || {
        eprintln!("\nCancelling...");
        handler_token.cancel();
    })?;

    let ctx = Context {
        state_dir,
        format: cli.format,
    };

    let result = if cli.quiet {
        run(cli.command, config, store, NoOpNotifyAdapter, cancel, &ctx).await
    } else {
        run(cli.command, config, store, ConsoleNotifyAdapter, cancel, &ctx).await
    };

    match result {
        Err(e) if matches!(e.downcast_ref::<EngineError>(), Some(EngineError::Cancelled)) => {
            tracing::info!("cancelled by user");
            eprintln!("Cancelled");
            Ok(ExitCode::from(EXIT_CANCELLED))
        }
        other => other,
    }
}

async fn run<N: NotifyAdapter>(
    command: Commands,
    config: DashboardConfig,
    store: FileStore,
    notify: N,
    cancel: CancellationToken,
    ctx: &Context,
) -> Result<ExitCode> {
    let dashboard =
        Dashboard::new(config, DashboardDeps { store, notify })?.with_cancellation(cancel);

    match command {
        Commands::Deploy(args) => return deploy::handle(&dashboard, args, ctx).await,
        Commands::Restart => bot::restart(&dashboard, ctx).await?,
        Commands::Stop { yes } => bot::stop(&dashboard, yes, ctx).await?,
        Commands::Update => bot::update(&dashboard, ctx).await?,
        Commands::Backup { out } => bot::backup(&dashboard, out, ctx).await?,
        Commands::Action(args) => return bot::action(&dashboard, args, ctx).await,
        Commands::Exec { command } => terminal::exec(&dashboard, &command.join(" "), ctx).await?,
        Commands::Stats { seed } => monitor::stats(seed, ctx)?,
        Commands::Monitor(args) => monitor::watch(&dashboard, args, ctx).await?,
        Commands::Logs => bot::logs(&dashboard, ctx).await?,
        Commands::Status => settings::status(&dashboard, ctx)?,
        Commands::Config(args) => settings::config(&dashboard, args, ctx).await?,
        Commands::Theme(args) => settings::theme(&dashboard, args, ctx)?,
    }

    Ok(ExitCode::SUCCESS)
}
