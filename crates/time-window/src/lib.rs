//! # time-window
//!
//! Deterministic resolution of dashboard time-range labels.
//!
//! A label such as `"previous_month"`, `"this_week_so_far"` or
//! `"last_twenty_one_minutes"` is resolved, in a caller-supplied timezone,
//! into an `(end, start)` pair of epoch milliseconds. A comparison mode
//! returns the same window one period earlier for period-over-period charts.
//! Where a day, month or year begins is decided by an injected
//! [`DayBoundaryPolicy`], not assumed to be midnight.
//!
//! ## Modules
//!
//! - [`label`]: Label grammar: definitive names and `last_<N>_<unit>`
//! - [`cardinal`]: Spelled-out number words to integers
//! - [`boundary`]: Day/month/year boundary policies
//! - [`window`]: Window arithmetic and the dispatch tables
//! - [`resolver`]: The `resolve` entry points
//! - [`error`]: Error types

pub mod boundary;
mod calendar;
pub mod cardinal;
pub mod error;
pub mod label;
pub mod resolver;
pub mod window;

pub use boundary::{DayBoundaryPolicy, ProjectCalendar, ShiftCalendar};
pub use error::WindowError;
pub use label::{DefinitiveLabel, TimeRangeLabel, TimeUnit};
pub use resolver::{resolve, resolve_at, ResolveOptions, ResolvedWindow};
pub use window::{resolve_window, Window};
