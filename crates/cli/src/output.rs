// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Render a value as text or pretty JSON
pub fn render<T: Serialize + Display + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => value.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
    })
}

/// Render one value per line in text mode, or a JSON array
pub fn render_list<T: Serialize + Display>(items: &[T], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(items)?,
    })
}

pub fn print<T: Serialize + Display + ?Sized>(value: &T, format: OutputFormat) -> Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

pub fn print_list<T: Serialize + Display>(items: &[T], format: OutputFormat) -> Result<()> {
    let out = render_list(items, format)?;
    if !out.is_empty() || format == OutputFormat::Json {
        println!("{}", out);
    }
    Ok(())
}
