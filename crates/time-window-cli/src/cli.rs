//! CLI argument definitions for timewin.
//!
//! Uses `clap` derive macros; each subcommand has its own argument struct.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

/// Resolve dashboard time-range labels (`today`, `previous_month`,
/// `last_ten_minutes`, ...) into epoch-millisecond windows.
#[derive(Debug, Parser)]
#[command(name = "timewin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a label into an (end, start) window and print it as JSON.
    Resolve(ResolveArgs),

    /// List the supported labels and relative units.
    Labels(LabelsArgs),
}

/// Arguments for the `resolve` subcommand.
#[derive(Debug, clap::Args)]
pub struct ResolveArgs {
    /// The label to resolve, e.g. `this_week_so_far` or `last_twenty_one_days`.
    pub label: String,

    /// IANA timezone to resolve in. Falls back to the config file, then UTC.
    #[arg(long, env = "TIMEWIN_TZ", value_name = "TZ")]
    pub tz: Option<String>,

    /// Return the comparison window (one period earlier).
    #[arg(long)]
    pub compare: bool,

    /// Extend the window's end by this many calendar days (non-negative).
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub future_days: Option<u32>,

    /// Resolve against this instant instead of the system clock (RFC 3339).
    #[arg(long, value_name = "RFC3339", value_parser = parse_instant)]
    pub now: Option<DateTime<Utc>>,

    /// JSON config file with a default timezone and calendar settings.
    #[arg(long, env = "TIMEWIN_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `labels` subcommand.
#[derive(Debug, clap::Args)]
pub struct LabelsArgs {
    /// Print the vocabulary as a JSON object.
    #[arg(long)]
    pub json: bool,
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}
