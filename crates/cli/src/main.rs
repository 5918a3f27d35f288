// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! lh - Learning Hub CLI

mod commands;
mod error;
mod output;
mod parse;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{health, journal, lab, wiki};
use lh_storage::{open_store, StoreConfig};
use output::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::LhError;

#[derive(Parser)]
#[command(
    name = "lh",
    version,
    about = "Learning Hub - Runbook wiki and lab progress tracker"
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Store configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the generated runbook wiki
    Wiki(wiki::WikiArgs),
    /// Lab modules and checkpoints
    Lab(lab::LabArgs),
    /// Operational journal
    Journal(journal::JournalArgs),
    /// Probe the lab state backend
    Health,
}

/// Logs go to stderr so they never mix with command output
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            match err.downcast_ref::<LhError>() {
                Some(lh) => eprint!("{}", lh),
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let format = cli.format;

    // Wiki pages are computed; no store needed
    if let Commands::Wiki(args) = cli.command {
        wiki::handle(args, format)?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = StoreConfig::load(cli.config.as_deref())?;
    tracing::debug!(database_path = ?config.database_path, "opening lab store");
    let store = open_store(&config);

    match cli.command {
        Commands::Wiki(_) => {}
        Commands::Lab(args) => lab::handle(args, &store, format).await?,
        Commands::Journal(args) => journal::handle(args, &store, format).await?,
        Commands::Health => {
            if !health::handle(&store, format).await {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
