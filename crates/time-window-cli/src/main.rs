//! timewin: resolve dashboard time-range labels from the command line.
//!
//! Entry point for the binary. Installs logging, parses CLI arguments and
//! delegates to the matching command handler.

#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use cli::{Cli, Commands};

fn main() -> ExitCode {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Parse CLI arguments and dispatch to the command handler.
fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Resolve(args) => commands::resolve::execute(args),
        Commands::Labels(args) => commands::labels::execute(args),
    }
}
