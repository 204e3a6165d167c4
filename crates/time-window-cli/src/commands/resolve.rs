//! Handler for the `resolve` subcommand.

use anyhow::{Context, Result};
use chrono::Utc;
use time_window::{resolve_at, ResolveOptions, ShiftCalendar};
use tracing::debug;

use crate::cli::ResolveArgs;
use crate::config::Config;

/// Execute the `resolve` subcommand with the given arguments.
pub fn execute(args: &ResolveArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let policy = ShiftCalendar::new(&config.calendar).context("invalid calendar settings")?;
    debug!(
        day_start = %policy.day_start(),
        year_start_month = policy.year_start_month(),
        "using project calendar"
    );
    let timezone = config.timezone(args.tz.as_deref());
    let options = ResolveOptions {
        compare: args.compare,
        future_days: args.future_days,
    };
    let anchor = args.now.unwrap_or_else(Utc::now);

    let window = resolve_at(anchor, &args.label, &timezone, &options, &policy)
        .with_context(|| format!("cannot resolve '{}'", args.label))?;

    let out = if args.pretty {
        serde_json::to_string_pretty(&window)?
    } else {
        serde_json::to_string(&window)?
    };
    println!("{out}");
    Ok(())
}
