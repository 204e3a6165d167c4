//! Calendar-aware shifting of zoned instants.
//!
//! Day, week, month and year shifts move the local wall-clock date and keep
//! the time of day (same as a calendar offset would). Month shifts clamp to
//! the last valid day, so March 31 minus one month is the last day of
//! February. Sub-day shifts are plain elapsed time.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::error::WindowError;

/// Longest gap we step across when a local time does not exist. DST gaps are
/// an hour or two, but some zones skipped a whole calendar day when they
/// crossed the date line (Pacific/Apia on 2011-12-30).
const MAX_GAP_HOURS: i64 = 48;

/// Place a local wall-clock time in `tz`.
///
/// Ambiguous times (DST fall-back) take the earliest instant. Times inside a
/// gap move forward to the first minute that exists.
pub(crate) fn localize(tz: &Tz, naive: NaiveDateTime) -> Result<DateTime<Tz>, WindowError> {
    let earliest = |at: NaiveDateTime| tz.from_local_datetime(&at).earliest();
    if let Some(dt) = earliest(naive) {
        return Ok(dt);
    }
    let missing =
        || WindowError::InvalidDatetime(format!("local time {naive} does not exist in {tz}"));

    // Find the hour in which the gap ends, then the first minute inside it.
    let hour = (1..=MAX_GAP_HOURS)
        .find(|h| earliest(naive + chrono::Duration::hours(*h)).is_some())
        .ok_or_else(missing)?;
    ((hour - 1) * 60 + 1..=hour * 60)
        .find_map(|m| earliest(naive + chrono::Duration::minutes(m)))
        .ok_or_else(missing)
}

/// Shift by whole calendar days (negative moves into the past).
pub(crate) fn shift_days(dt: &DateTime<Tz>, days: i64) -> Result<DateTime<Tz>, WindowError> {
    // Re-localizing would move an instant in a repeated hour to its first pass.
    if days == 0 {
        return Ok(*dt);
    }
    let local = dt.naive_local();
    let shifted = if days >= 0 {
        local.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        local.checked_sub_days(Days::new(days.unsigned_abs()))
    }
    .ok_or_else(|| overflow(dt, &format!("{days} days")))?;
    localize(&dt.timezone(), shifted)
}

/// Shift by whole calendar months, clamping the day of month.
pub(crate) fn shift_months(dt: &DateTime<Tz>, months: i64) -> Result<DateTime<Tz>, WindowError> {
    if months == 0 {
        return Ok(*dt);
    }
    let amount = u32::try_from(months.unsigned_abs())
        .map_err(|_| overflow(dt, &format!("{months} months")))?;
    let local = dt.naive_local();
    let shifted = if months >= 0 {
        local.checked_add_months(Months::new(amount))
    } else {
        local.checked_sub_months(Months::new(amount))
    }
    .ok_or_else(|| overflow(dt, &format!("{months} months")))?;
    localize(&dt.timezone(), shifted)
}

/// Shift by elapsed seconds.
pub(crate) fn shift_seconds(dt: &DateTime<Tz>, seconds: i64) -> Result<DateTime<Tz>, WindowError> {
    dt.checked_add_signed(chrono::Duration::seconds(seconds))
        .ok_or_else(|| overflow(dt, &format!("{seconds} seconds")))
}

/// Number of days in the given month.
pub(crate) fn days_in_month(year: i32, month: u32) -> Result<u32, WindowError> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .ok_or_else(|| WindowError::InvalidDatetime(format!("no month {year}-{month:02}")))
}

fn overflow(dt: &DateTime<Tz>, by: &str) -> WindowError {
    WindowError::InvalidDatetime(format!("shifting {} by {by} is out of range", dt.to_rfc3339()))
}
