//! Label-to-epoch resolution, the crate's entry point.
//!
//! [`resolve_at`] is a pure function of its inputs: the caller provides the
//! "now" anchor, so the same inputs always give the same window.
//! [`resolve`] reads the system clock and delegates to it.

use chrono::{DateTime, SubsecRound, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::debug;

use crate::boundary::DayBoundaryPolicy;
use crate::calendar::shift_days;
use crate::error::WindowError;
use crate::label::TimeRangeLabel;
use crate::window::resolve_window;

/// Options for [`resolve`] and [`resolve_at`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Return the comparison window (one period earlier) instead.
    pub compare: bool,
    /// Calendar days added to the window's end, after resolution.
    ///
    /// Unsigned: the end can only move forward, so it never crosses the start.
    pub future_days: Option<u32>,
}

/// A resolved window.
///
/// Note the order: the end comes first, matching [`ResolvedWindow::as_tuple`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedWindow {
    /// The label as classified (e.g., `"last_21_minutes"`).
    pub label: String,
    /// The IANA timezone the window was resolved in.
    pub timezone: String,
    /// Whether this is the comparison window.
    pub compare: bool,
    /// Window end, epoch milliseconds (whole seconds).
    pub end_ms: i64,
    /// Window start, epoch milliseconds (whole seconds).
    pub start_ms: i64,
    /// Window end in the timezone (RFC 3339 with offset).
    pub end_local: String,
    /// Window start in the timezone (RFC 3339 with offset).
    pub start_local: String,
}

impl ResolvedWindow {
    /// `(end_ms, start_ms)`, in that order.
    pub fn as_tuple(&self) -> (i64, i64) {
        (self.end_ms, self.start_ms)
    }
}

/// Resolve a label against the current system time.
///
/// See [`resolve_at`].
pub fn resolve(
    label: &str,
    timezone: &str,
    options: &ResolveOptions,
    policy: &dyn DayBoundaryPolicy,
) -> Result<ResolvedWindow, WindowError> {
    resolve_at(Utc::now(), label, timezone, options, policy)
}

/// Resolve a time-range label to an `(end, start)` window.
///
/// # Arguments
///
/// * `anchor`: The reference "now" instant; sub-second precision is dropped
/// * `label`: A definitive label (`"this_month"`) or `last_<N>_<unit>`
/// * `timezone`: An IANA timezone name; all calendar math happens there
/// * `options`: Comparison mode and the future-days extension of the end
/// * `policy`: Where days, months and years begin and end
///
/// # Errors
///
/// Returns [`WindowError::InvalidTimezone`] for an unknown timezone,
/// [`WindowError::UnsupportedLabel`] or [`WindowError::InvalidQuantity`] for
/// a label that does not parse, and passes policy errors through unchanged.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use time_window::{resolve_at, ResolveOptions, ShiftCalendar};
///
/// let now = Utc.with_ymd_and_hms(2026, 3, 18, 14, 25, 37).unwrap();
/// let policy = ShiftCalendar::default();
///
/// let window = resolve_at(now, "last_ten_minutes", "UTC", &ResolveOptions::default(), &policy)
///     .unwrap();
/// assert_eq!(window.as_tuple(), (now.timestamp_millis(), now.timestamp_millis() - 600_000));
///
/// let compare = ResolveOptions { compare: true, ..Default::default() };
/// let previous = resolve_at(now, "last_ten_minutes", "UTC", &compare, &policy).unwrap();
/// assert_eq!(previous.end_ms, window.start_ms);
/// ```
pub fn resolve_at(
    anchor: DateTime<Utc>,
    label: &str,
    timezone: &str,
    options: &ResolveOptions,
    policy: &dyn DayBoundaryPolicy,
) -> Result<ResolvedWindow, WindowError> {
    let tz = parse_timezone(timezone)?;
    let parsed = TimeRangeLabel::parse(label)?;
    let now = anchor.with_timezone(&tz).trunc_subsecs(0);

    let window = resolve_window(parsed, options.compare, policy, &now)?;
    let end = match options.future_days {
        Some(days) if days > 0 => shift_days(&window.end, i64::from(days))?,
        _ => window.end,
    }
    .trunc_subsecs(0);
    let start = window.start.trunc_subsecs(0);

    debug!(
        label = %parsed,
        compare = options.compare,
        timezone,
        start = %start.to_rfc3339(),
        end = %end.to_rfc3339(),
        "resolved time window"
    );

    Ok(ResolvedWindow {
        label: parsed.to_string(),
        timezone: timezone.to_string(),
        compare: options.compare,
        end_ms: end.timestamp_millis(),
        start_ms: start.timestamp_millis(),
        end_local: end.to_rfc3339(),
        start_local: start.to_rfc3339(),
    })
}

/// Parse an IANA timezone string into `Tz`.
fn parse_timezone(s: &str) -> Result<Tz, WindowError> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| WindowError::InvalidTimezone(format!("'{}'", s)))
}
