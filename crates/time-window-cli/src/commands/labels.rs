//! Handler for the `labels` subcommand.

use anyhow::Result;
use serde_json::json;
use time_window::{DefinitiveLabel, TimeUnit};

use crate::cli::LabelsArgs;

/// Execute the `labels` subcommand with the given arguments.
pub fn execute(args: &LabelsArgs) -> Result<()> {
    let definitive: Vec<&str> = DefinitiveLabel::ALL.iter().map(|l| l.as_str()).collect();
    let units: Vec<&str> = TimeUnit::ALL.iter().map(|u| u.as_str()).collect();

    if args.json {
        let out = json!({
            "definitive": definitive,
            "relative": {
                "pattern": "last_<quantity>_<unit>",
                "units": units,
            },
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Definitive labels:");
    for label in &definitive {
        println!("  {label}");
    }
    println!();
    println!("Relative labels: last_<quantity>_<unit>");
    println!("  quantity: digits or words up to ninety_nine (e.g. twenty_one)");
    println!("  units: {}", units.join(", "));
    Ok(())
}
