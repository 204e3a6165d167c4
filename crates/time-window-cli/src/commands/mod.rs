//! Command handlers for each CLI subcommand.
//!
//! Each subcommand lives in its own module and exposes a single `execute`
//! function that receives the parsed arguments.

pub mod labels;
pub mod resolve;
