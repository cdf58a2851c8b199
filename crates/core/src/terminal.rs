// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard terminal: command interpretation and scrollback

use crate::stats::format_uptime;
use crate::status::BotStatus;
use rand::Rng;
use serde::Serialize;
use std::fmt;

pub const HELP_TEXT: &str = "Available commands: status, users, restart, clear, help";

/// A parsed terminal command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    Status,
    Users,
    Restart,
    Clear,
    Help,
    /// Original input, untrimmed case preserved
    Unknown(String),
}

impl TerminalCommand {
    /// Parse one input line; blank input yields `None`
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.to_lowercase().as_str() {
            "status" => TerminalCommand::Status,
            "users" => TerminalCommand::Users,
            "restart" => TerminalCommand::Restart,
            "clear" => TerminalCommand::Clear,
            "help" => TerminalCommand::Help,
            _ => TerminalCommand::Unknown(trimmed.to_string()),
        })
    }
}

/// Side effect requested by a command, applied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalEffect {
    Restart,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalReply {
    pub text: String,
    pub effect: Option<TerminalEffect>,
}

impl TerminalReply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            effect: None,
        }
    }

    fn with_effect(mut self, effect: TerminalEffect) -> Self {
        self.effect = Some(effect);
        self
    }
}

impl fmt::Display for TerminalReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// State a command may read
#[derive(Debug, Clone, Copy)]
pub struct TerminalContext {
    pub status: BotStatus,
    pub uptime_secs: u64,
}

pub fn respond<R: Rng + ?Sized>(
    command: &TerminalCommand,
    ctx: &TerminalContext,
    rng: &mut R,
) -> TerminalReply {
    match command {
        TerminalCommand::Status => TerminalReply::text(format!(
            "Bot Status: {}\nUptime: {}",
            ctx.status,
            format_uptime(ctx.uptime_secs)
        )),
        TerminalCommand::Users => {
            let total: u32 = rng.gen_range(100..1100);
            let active: u32 = rng.gen_range(0..100);
            TerminalReply::text(format!("Total Users: {}\nActive Today: {}", total, active))
        }
        TerminalCommand::Restart => {
            TerminalReply::text("Restarting bot...").with_effect(TerminalEffect::Restart)
        }
        TerminalCommand::Clear => {
            TerminalReply::text("Terminal cleared").with_effect(TerminalEffect::Clear)
        }
        TerminalCommand::Help => TerminalReply::text(HELP_TEXT),
        TerminalCommand::Unknown(input) => TerminalReply::text(format!(
            "Command not found: {}\nType 'help' for available commands",
            input
        )),
    }
}

/// Canned lines shown when viewing system logs
pub fn system_log_lines() -> [&'static str; 3] {
    [
        "[INFO] Bot started successfully",
        "[INFO] Connected to WhatsApp",
        "[INFO] 150 users loaded",
    ]
}

pub const LOG_HEADER: [&str; 2] = ["=== SYSTEM LOGS ===", "Loading recent logs..."];

/// Terminal scrollback
#[derive(Debug, Clone, Default)]
pub struct TerminalLog {
    lines: Vec<String>,
}

impl TerminalLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text, one entry per line
    pub fn push(&mut self, text: &str) {
        self.lines.extend(text.lines().map(str::to_string));
    }

    pub fn echo(&mut self, input: &str) {
        self.lines.push(format!("$ {}", input));
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Apply a reply, honoring a clear request before the reply text
    pub fn apply(&mut self, reply: &TerminalReply) {
        if reply.effect == Some(TerminalEffect::Clear) {
            self.clear();
        }
        self.push(&reply.text);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod tests;
