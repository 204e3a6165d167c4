//! Window arithmetic and the label dispatch tables.
//!
//! Each label maps to one function in an absolute table and one in a
//! comparison table. Comparison functions compute the same window shape one
//! period earlier: a day for day labels, a week for week labels, and so on.
//! Relative `last_N_<unit>` labels compare against the equally long window
//! that ends where the absolute one starts, except for days (see
//! [`last_n_days`]).

use chrono::{DateTime, Datelike};
use chrono_tz::Tz;

use crate::boundary::DayBoundaryPolicy;
use crate::calendar::{days_in_month, shift_days, shift_months, shift_seconds};
use crate::error::WindowError;
use crate::label::{TimeRangeLabel, TimeUnit};

/// A resolved `(end, start)` pair of zoned instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub end: DateTime<Tz>,
    pub start: DateTime<Tz>,
}

type RelativeFn =
    fn(&dyn DayBoundaryPolicy, &DateTime<Tz>, i64) -> Result<Window, WindowError>;
type DefinitiveFn = fn(&dyn DayBoundaryPolicy, &DateTime<Tz>) -> Result<Window, WindowError>;

/// Where a period window ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span {
    /// The period's natural end.
    Full,
    /// The reference instant the period was taken from.
    SoFar,
    /// `now` moved back by this many days, wherever the period lies.
    Until(i64),
}

// Indexed by `TimeUnit as usize`.
static ABSOLUTE_RELATIVE: [RelativeFn; 7] = [
    |_, now, n| last_n(now, n, TimeUnit::Seconds),
    |_, now, n| last_n(now, n, TimeUnit::Minutes),
    |_, now, n| last_n(now, n, TimeUnit::Hours),
    |p, now, n| last_n_days(p, now, 0, n),
    |_, now, n| last_n(now, n, TimeUnit::Weeks),
    |_, now, n| last_n(now, n, TimeUnit::Months),
    |_, now, n| last_n(now, n, TimeUnit::Years),
];

static COMPARE_RELATIVE: [RelativeFn; 7] = [
    |_, now, n| preceding_n(now, n, TimeUnit::Seconds),
    |_, now, n| preceding_n(now, n, TimeUnit::Minutes),
    |_, now, n| preceding_n(now, n, TimeUnit::Hours),
    |p, now, n| last_n_days(p, now, n, 2 * n),
    |_, now, n| preceding_n(now, n, TimeUnit::Weeks),
    |_, now, n| preceding_n(now, n, TimeUnit::Months),
    |_, now, n| preceding_n(now, n, TimeUnit::Years),
];

// Indexed by `DefinitiveLabel as usize`.
static ABSOLUTE_DEFINITIVE: [DefinitiveFn; 17] = [
    |p, now| day_window(p, now, 0, Span::Full),
    |p, now| day_window(p, now, 0, Span::SoFar),
    |p, now| week_window(p, now, 0, Span::Full),
    |p, now| week_window(p, now, 0, Span::SoFar),
    |p, now| month_window(p, now, 0, Span::Full),
    |p, now| month_window(p, now, 0, Span::SoFar),
    |p, now| year_window(p, now, 0, Span::Full),
    |p, now| year_window(p, now, 0, Span::SoFar),
    |p, now| day_window(p, now, 1, Span::Full),
    |p, now| day_window(p, now, 2, Span::Full),
    |p, now| day_window(p, now, 7, Span::Full),
    |p, now| day_window(p, now, 7, Span::Until(0)),
    |p, now| week_window(p, now, 1, Span::Full),
    |p, now| week_window(p, now, 1, Span::Until(0)),
    |p, now| month_window(p, now, 1, Span::Full),
    |p, now| month_window(p, now, 1, Span::SoFar),
    |p, now| year_window(p, now, 1, Span::Full),
];

static COMPARE_DEFINITIVE: [DefinitiveFn; 17] = [
    |p, now| day_window(p, now, 1, Span::Full),
    |p, now| day_window(p, now, 1, Span::SoFar),
    |p, now| week_window(p, now, 1, Span::Full),
    |p, now| week_window(p, now, 1, Span::SoFar),
    |p, now| month_window(p, now, 1, Span::Full),
    |p, now| month_window(p, now, 1, Span::SoFar),
    |p, now| year_window(p, now, 1, Span::Full),
    |p, now| year_window(p, now, 1, Span::SoFar),
    |p, now| day_window(p, now, 2, Span::Full),
    |p, now| day_window(p, now, 3, Span::Full),
    |p, now| day_window(p, now, 14, Span::Full),
    |p, now| day_window(p, now, 14, Span::Until(7)),
    |p, now| week_window(p, now, 2, Span::Full),
    |p, now| week_window(p, now, 2, Span::Until(7)),
    |p, now| month_window(p, now, 2, Span::Full),
    |p, now| month_window(p, now, 2, Span::SoFar),
    |p, now| year_window(p, now, 2, Span::Full),
];

/// Compute the window for a classified label relative to `now`.
///
/// `now` should already be truncated to whole seconds; the returned instants
/// keep whatever precision the policy produces.
pub fn resolve_window(
    label: TimeRangeLabel,
    compare: bool,
    policy: &dyn DayBoundaryPolicy,
    now: &DateTime<Tz>,
) -> Result<Window, WindowError> {
    match label {
        TimeRangeLabel::Relative { quantity, unit } => {
            let table = if compare {
                &COMPARE_RELATIVE
            } else {
                &ABSOLUTE_RELATIVE
            };
            table[unit as usize](policy, now, i64::from(quantity))
        }
        TimeRangeLabel::Definitive(label) => {
            let table = if compare {
                &COMPARE_DEFINITIVE
            } else {
                &ABSOLUTE_DEFINITIVE
            };
            table[label as usize](policy, now)
        }
    }
}

/// `amount` units before `at`. Sub-day units are elapsed time, the rest are
/// calendar shifts.
fn step_back(at: &DateTime<Tz>, amount: i64, unit: TimeUnit) -> Result<DateTime<Tz>, WindowError> {
    match unit {
        TimeUnit::Seconds => shift_seconds(at, -amount),
        TimeUnit::Minutes => shift_seconds(at, -amount * 60),
        TimeUnit::Hours => shift_seconds(at, -amount * 3600),
        TimeUnit::Days => shift_days(at, -amount),
        TimeUnit::Weeks => shift_days(at, -amount * 7),
        TimeUnit::Months => shift_months(at, -amount),
        TimeUnit::Years => shift_months(at, -amount * 12),
    }
}

/// `(now, now - n units)`.
fn last_n(now: &DateTime<Tz>, n: i64, unit: TimeUnit) -> Result<Window, WindowError> {
    Ok(Window {
        end: *now,
        start: step_back(now, n, unit)?,
    })
}

/// `(now - n units, now - 2n units)`: the equally long window right before
/// `last_n`.
fn preceding_n(now: &DateTime<Tz>, n: i64, unit: TimeUnit) -> Result<Window, WindowError> {
    Ok(Window {
        end: step_back(now, n, unit)?,
        start: step_back(now, 2 * n, unit)?,
    })
}

/// Day windows snap their start to the policy's day boundary.
///
/// Absolute mode is `(now, day_start(now) - n days)`. Comparison mode reuses
/// this with both offsets moved back, giving
/// `(now - n days, day_start(now) - 2n days)`, which is wider than the
/// absolute window by the part of today already elapsed.
fn last_n_days(
    policy: &dyn DayBoundaryPolicy,
    now: &DateTime<Tz>,
    end_days_back: i64,
    start_days_back: i64,
) -> Result<Window, WindowError> {
    let day_start = policy.custom_day_start(now)?;
    Ok(Window {
        end: shift_days(now, -end_days_back)?,
        start: shift_days(&day_start, -start_days_back)?,
    })
}

/// The logical day containing `now - days_back days`.
fn day_window(
    policy: &dyn DayBoundaryPolicy,
    now: &DateTime<Tz>,
    days_back: i64,
    span: Span,
) -> Result<Window, WindowError> {
    let at = shift_days(now, -days_back)?;
    let start = policy.custom_day_start(&at)?;
    let end = match span {
        Span::Full => policy.custom_day_end(&at)?,
        Span::SoFar => at,
        Span::Until(days_back) => shift_days(now, -days_back)?,
    };
    Ok(Window { end, start })
}

/// The Monday-based week containing `now - weeks_back weeks`.
///
/// The week starts `weekday` days before the reference instant, then snaps to
/// the policy's day start. The weekday is read from the start of the logical
/// day rather than from the instant itself; with a midnight day start the two
/// agree, but with a 06:00 start Monday 03:00 still belongs to the week before.
fn week_window(
    policy: &dyn DayBoundaryPolicy,
    now: &DateTime<Tz>,
    weeks_back: i64,
    span: Span,
) -> Result<Window, WindowError> {
    let at = shift_days(now, -7 * weeks_back)?;
    let today = policy.custom_day_start(&at)?;
    let monday = shift_days(&today, -i64::from(today.weekday().num_days_from_monday()))?;
    let start = policy.custom_day_start(&monday)?;
    let end = match span {
        Span::Full => policy.custom_day_end(&shift_days(&start, 6)?)?,
        Span::SoFar => at,
        Span::Until(days_back) => shift_days(now, -days_back)?,
    };
    Ok(Window { end, start })
}

/// The month containing `now - months_back months`.
fn month_window(
    policy: &dyn DayBoundaryPolicy,
    now: &DateTime<Tz>,
    months_back: i64,
    span: Span,
) -> Result<Window, WindowError> {
    let at = shift_months(now, -months_back)?;
    let start = policy.month_start(&at)?;
    let end = match span {
        Span::Full => {
            let first = start.date_naive();
            policy.month_end(&at, days_in_month(first.year(), first.month())?)?
        }
        Span::SoFar => at,
        Span::Until(days_back) => shift_days(now, -days_back)?,
    };
    Ok(Window { end, start })
}

/// The year containing `now - years_back years`.
fn year_window(
    policy: &dyn DayBoundaryPolicy,
    now: &DateTime<Tz>,
    years_back: i64,
    span: Span,
) -> Result<Window, WindowError> {
    let at = shift_months(now, -12 * years_back)?;
    let start = policy.year_start(&at)?;
    let end = match span {
        Span::Full => policy.year_end(&at)?,
        Span::SoFar => at,
        Span::Until(days_back) => shift_days(now, -days_back)?,
    };
    Ok(Window { end, start })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{ProjectCalendar, ShiftCalendar};
    use crate::label::DefinitiveLabel;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Tz> {
        Tz::UTC.with_ymd_and_hms(y, m, d, h, min, s).single().unwrap()
    }

    /// Wednesday, March 18 2026, 14:25:37 UTC.
    fn wednesday() -> DateTime<Tz> {
        utc(2026, 3, 18, 14, 25, 37)
    }

    fn definitive(label: DefinitiveLabel, compare: bool, now: &DateTime<Tz>) -> Window {
        resolve_window(
            TimeRangeLabel::Definitive(label),
            compare,
            &ShiftCalendar::default(),
            now,
        )
        .unwrap()
    }

    fn relative(quantity: u32, unit: TimeUnit, compare: bool, now: &DateTime<Tz>) -> Window {
        resolve_window(
            TimeRangeLabel::Relative { quantity, unit },
            compare,
            &ShiftCalendar::default(),
            now,
        )
        .unwrap()
    }

    fn window(end: DateTime<Tz>, start: DateTime<Tz>) -> Window {
        Window { end, start }
    }

    // ── relative labels ─────────────────────────────────────────────────

    #[test]
    fn test_last_ten_minutes() {
        let now = wednesday();
        assert_eq!(
            relative(10, TimeUnit::Minutes, false, &now),
            window(now, utc(2026, 3, 18, 14, 15, 37))
        );
    }

    #[test]
    fn test_last_ten_minutes_compare() {
        let now = wednesday();
        assert_eq!(
            relative(10, TimeUnit::Minutes, true, &now),
            window(utc(2026, 3, 18, 14, 15, 37), utc(2026, 3, 18, 14, 5, 37))
        );
    }

    #[test]
    fn test_last_hours_and_seconds() {
        let now = wednesday();
        assert_eq!(
            relative(3, TimeUnit::Hours, false, &now),
            window(now, utc(2026, 3, 18, 11, 25, 37))
        );
        assert_eq!(
            relative(30, TimeUnit::Seconds, true, &now),
            window(utc(2026, 3, 18, 14, 25, 7), utc(2026, 3, 18, 14, 24, 37))
        );
    }

    #[test]
    fn test_last_days_snaps_start_to_day_boundary() {
        let now = wednesday();
        assert_eq!(
            relative(2, TimeUnit::Days, false, &now),
            window(now, utc(2026, 3, 16, 0, 0, 0))
        );
    }

    #[test]
    fn test_last_days_compare_doubles_offset_from_day_start() {
        let now = wednesday();
        assert_eq!(
            relative(2, TimeUnit::Days, true, &now),
            window(utc(2026, 3, 16, 14, 25, 37), utc(2026, 3, 14, 0, 0, 0))
        );
    }

    #[test]
    fn test_last_days_with_custom_day_start() {
        let cal = ShiftCalendar::new(&ProjectCalendar {
            day_start: "06:00".to_string(),
            year_start_month: 1,
        })
        .unwrap();
        let now = utc(2026, 3, 18, 3, 0, 0);
        let w = resolve_window(
            TimeRangeLabel::Relative {
                quantity: 1,
                unit: TimeUnit::Days,
            },
            false,
            &cal,
            &now,
        )
        .unwrap();
        // The logical day began on the 17th at 06:00.
        assert_eq!(w, window(now, utc(2026, 3, 16, 6, 0, 0)));
    }

    #[test]
    fn test_last_weeks_is_calendar_shift() {
        let now = wednesday();
        assert_eq!(
            relative(2, TimeUnit::Weeks, false, &now),
            window(now, utc(2026, 3, 4, 14, 25, 37))
        );
        assert_eq!(
            relative(2, TimeUnit::Weeks, true, &now),
            window(utc(2026, 3, 4, 14, 25, 37), utc(2026, 2, 18, 14, 25, 37))
        );
    }

    #[test]
    fn test_last_month_clamps_month_end() {
        let now = utc(2026, 3, 31, 9, 0, 0);
        assert_eq!(
            relative(1, TimeUnit::Months, false, &now),
            window(now, utc(2026, 2, 28, 9, 0, 0))
        );
        // Both compare offsets are taken from now, not chained.
        assert_eq!(
            relative(1, TimeUnit::Months, true, &now),
            window(utc(2026, 2, 28, 9, 0, 0), utc(2026, 1, 31, 9, 0, 0))
        );
    }

    #[test]
    fn test_last_years() {
        let now = utc(2024, 2, 29, 12, 0, 0);
        assert_eq!(
            relative(1, TimeUnit::Years, false, &now),
            window(now, utc(2023, 2, 28, 12, 0, 0))
        );
        assert_eq!(
            relative(1, TimeUnit::Years, true, &now),
            window(utc(2023, 2, 28, 12, 0, 0), utc(2022, 2, 28, 12, 0, 0))
        );
    }

    #[test]
    fn test_zero_quantity_is_empty_window() {
        let now = wednesday();
        assert_eq!(relative(0, TimeUnit::Hours, false, &now), window(now, now));
        assert_eq!(relative(0, TimeUnit::Hours, true, &now), window(now, now));
    }

    // ── day labels ──────────────────────────────────────────────────────

    #[test]
    fn test_today() {
        let now = wednesday();
        assert_eq!(
            definitive(DefinitiveLabel::Today, false, &now),
            window(utc(2026, 3, 18, 23, 59, 59), utc(2026, 3, 18, 0, 0, 0))
        );
    }

    #[test]
    fn test_today_compare_is_one_day_earlier() {
        let now = wednesday();
        let today = definitive(DefinitiveLabel::Today, false, &now);
        let compare = definitive(DefinitiveLabel::Today, true, &now);
        assert_eq!((today.end - compare.end).num_seconds(), 86_400);
        assert_eq!((today.start - compare.start).num_seconds(), 86_400);
    }

    #[test]
    fn test_today_so_far() {
        let now = wednesday();
        assert_eq!(
            definitive(DefinitiveLabel::TodaySoFar, false, &now),
            window(now, utc(2026, 3, 18, 0, 0, 0))
        );
        assert_eq!(
            definitive(DefinitiveLabel::TodaySoFar, true, &now),
            window(utc(2026, 3, 17, 14, 25, 37), utc(2026, 3, 17, 0, 0, 0))
        );
    }

    #[test]
    fn test_yesterday_and_day_before() {
        let now = wednesday();
        assert_eq!(
            definitive(DefinitiveLabel::Yesterday, false, &now),
            window(utc(2026, 3, 17, 23, 59, 59), utc(2026, 3, 17, 0, 0, 0))
        );
        assert_eq!(
            definitive(DefinitiveLabel::Yesterday, true, &now),
            window(utc(2026, 3, 16, 23, 59, 59), utc(2026, 3, 16, 0, 0, 0))
        );
        assert_eq!(
            definitive(DefinitiveLabel::DayBeforeYesterday, false, &now),
            window(utc(2026, 3, 16, 23, 59, 59), utc(2026, 3, 16, 0, 0, 0))
        );
        assert_eq!(
            definitive(DefinitiveLabel::DayBeforeYesterday, true, &now),
            window(utc(2026, 3, 15, 23, 59, 59), utc(2026, 3, 15, 0, 0, 0))
        );
    }

    #[test]
    fn test_this_day_last_week() {
        let now = wednesday();
        assert_eq!(
            definitive(DefinitiveLabel::ThisDayLastWeek, false, &now),
            window(utc(2026, 3, 11, 23, 59, 59), utc(2026, 3, 11, 0, 0, 0))
        );
        assert_eq!(
            definitive(DefinitiveLabel::ThisDayLastWeek, true, &now),
            window(utc(2026, 3, 4, 23, 59, 59), utc(2026, 3, 4, 0, 0, 0))
        );
    }

    #[test]
    fn test_this_day_last_week_so_far() {
        let now = wednesday();
        assert_eq!(
            definitive(DefinitiveLabel::ThisDayLastWeekSoFar, false, &now),
            window(now, utc(2026, 3, 11, 0, 0, 0))
        );
        assert_eq!(
            definitive(DefinitiveLabel::ThisDayLastWeekSoFar, true, &now),
            window(utc(2026, 3, 11, 14, 25, 37), utc(2026, 3, 4, 0, 0, 0))
        );
    }

    // ── week labels ─────────────────────────────────────────────────────

    #[test]
    fn test_this_week_is_monday_to_sunday() {
        let now = wednesday();
        assert_eq!(
            definitive(DefinitiveLabel::ThisWeek, false, &now),
            window(utc(2026, 3, 22, 23, 59, 59), utc(2026, 3, 16, 0, 0, 0))
        );
    }

    #[test]
    fn test_this_week_on_monday_and_sunday() {
        let monday = utc(2026, 3, 16, 0, 0, 0);
        let sunday = utc(2026, 3, 22, 23, 59, 59);
        let expected = window(utc(2026, 3, 22, 23, 59, 59), utc(2026, 3, 16, 0, 0, 0));
        assert_eq!(definitive(DefinitiveLabel::ThisWeek, false, &monday), expected);
        assert_eq!(definitive(DefinitiveLabel::ThisWeek, false, &sunday), expected);
    }

    #[test]
    fn test_this_week_compare_and_previous_week() {
        let now = wednesday();
        let last_week = window(utc(2026, 3, 15, 23, 59, 59), utc(2026, 3, 9, 0, 0, 0));
        assert_eq!(definitive(DefinitiveLabel::ThisWeek, true, &now), last_week);
        assert_eq!(definitive(DefinitiveLabel::PreviousWeek, false, &now), last_week);
        assert_eq!(
            definitive(DefinitiveLabel::PreviousWeek, true, &now),
            window(utc(2026, 3, 8, 23, 59, 59), utc(2026, 3, 2, 0, 0, 0))
        );
    }

    #[test]
    fn test_week_so_far_variants() {
        let now = wednesday();
        assert_eq!(
            definitive(DefinitiveLabel::ThisWeekSoFar, false, &now),
            window(now, utc(2026, 3, 16, 0, 0, 0))
        );
        assert_eq!(
            definitive(DefinitiveLabel::ThisWeekSoFar, true, &now),
            window(utc(2026, 3, 11, 14, 25, 37), utc(2026, 3, 9, 0, 0, 0))
        );
        assert_eq!(
            definitive(DefinitiveLabel::PreviousWeekSoFar, false, &now),
            window(now, utc(2026, 3, 9, 0, 0, 0))
        );
        assert_eq!(
            definitive(DefinitiveLabel::PreviousWeekSoFar, true, &now),
            window(utc(2026, 3, 11, 14, 25, 37), utc(2026, 3, 2, 0, 0, 0))
        );
    }

    #[test]
    fn test_week_crosses_year_boundary() {
        // Thursday, January 1 2026: the week began Monday, December 29 2025.
        let now = utc(2026, 1, 1, 10, 0, 0);
        assert_eq!(
            definitive(DefinitiveLabel::ThisWeek, false, &now),
            window(utc(2026, 1, 4, 23, 59, 59), utc(2025, 12, 29, 0, 0, 0))
        );
    }

    #[test]
    fn test_week_follows_logical_day_with_custom_day_start() {
        let policy = ShiftCalendar::new(&ProjectCalendar {
            day_start: "06:00".to_string(),
            year_start_month: 1,
        })
        .unwrap();
        let this_week = |now: DateTime<Tz>| {
            resolve_window(
                TimeRangeLabel::Definitive(DefinitiveLabel::ThisWeek),
                false,
                &policy,
                &now,
            )
            .unwrap()
        };

        // Monday 03:00 is still Sunday's logical day.
        assert_eq!(
            this_week(utc(2026, 3, 16, 3, 0, 0)),
            window(utc(2026, 3, 16, 5, 59, 59), utc(2026, 3, 9, 6, 0, 0))
        );
        assert_eq!(
            this_week(utc(2026, 3, 16, 7, 0, 0)),
            window(utc(2026, 3, 23, 5, 59, 59), utc(2026, 3, 16, 6, 0, 0))
        );
    }

    // ── month labels ────────────────────────────────────────────────────

    #[test]
    fn test_this_month_on_january_31() {
        let now = utc(2026, 1, 31, 18, 0, 0);
        assert_eq!(
            definitive(DefinitiveLabel::ThisMonth, false, &now),
            window(utc(2026, 1, 31, 23, 59, 59), utc(2026, 1, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_this_month_compare_recomputes_length() {
        let now = utc(2026, 3, 31, 18, 0, 0);
        assert_eq!(
            definitive(DefinitiveLabel::ThisMonth, true, &now),
            window(utc(2026, 2, 28, 23, 59, 59), utc(2026, 2, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_this_month_so_far() {
        let now = wednesday();
        assert_eq!(
            definitive(DefinitiveLabel::ThisMonthSoFar, false, &now),
            window(now, utc(2026, 3, 1, 0, 0, 0))
        );
        assert_eq!(
            definitive(DefinitiveLabel::ThisMonthSoFar, true, &now),
            window(utc(2026, 2, 18, 14, 25, 37), utc(2026, 2, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_previous_month() {
        let now = wednesday();
        assert_eq!(
            definitive(DefinitiveLabel::PreviousMonth, false, &now),
            window(utc(2026, 2, 28, 23, 59, 59), utc(2026, 2, 1, 0, 0, 0))
        );
        assert_eq!(
            definitive(DefinitiveLabel::PreviousMonth, true, &now),
            window(utc(2026, 1, 31, 23, 59, 59), utc(2026, 1, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_previous_month_across_year() {
        let now = utc(2026, 1, 15, 8, 0, 0);
        assert_eq!(
            definitive(DefinitiveLabel::PreviousMonth, false, &now),
            window(utc(2025, 12, 31, 23, 59, 59), utc(2025, 12, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_previous_month_so_far() {
        let now = wednesday();
        assert_eq!(
            definitive(DefinitiveLabel::PreviousMonthSoFar, false, &now),
            window(utc(2026, 2, 18, 14, 25, 37), utc(2026, 2, 1, 0, 0, 0))
        );
        assert_eq!(
            definitive(DefinitiveLabel::PreviousMonthSoFar, true, &now),
            window(utc(2026, 1, 18, 14, 25, 37), utc(2026, 1, 1, 0, 0, 0))
        );
    }

    // ── year labels ─────────────────────────────────────────────────────

    #[test]
    fn test_this_year() {
        let now = wednesday();
        assert_eq!(
            definitive(DefinitiveLabel::ThisYear, false, &now),
            window(utc(2026, 12, 31, 23, 59, 59), utc(2026, 1, 1, 0, 0, 0))
        );
        assert_eq!(
            definitive(DefinitiveLabel::ThisYear, true, &now),
            window(utc(2025, 12, 31, 23, 59, 59), utc(2025, 1, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_this_year_so_far_from_leap_day() {
        let now = utc(2024, 2, 29, 12, 0, 0);
        assert_eq!(
            definitive(DefinitiveLabel::ThisYearSoFar, false, &now),
            window(now, utc(2024, 1, 1, 0, 0, 0))
        );
        assert_eq!(
            definitive(DefinitiveLabel::ThisYearSoFar, true, &now),
            window(utc(2023, 2, 28, 12, 0, 0), utc(2023, 1, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_previous_year_from_leap_day() {
        let now = utc(2024, 2, 29, 12, 0, 0);
        assert_eq!(
            definitive(DefinitiveLabel::PreviousYear, false, &now),
            window(utc(2023, 12, 31, 23, 59, 59), utc(2023, 1, 1, 0, 0, 0))
        );
        assert_eq!(
            definitive(DefinitiveLabel::PreviousYear, true, &now),
            window(utc(2022, 12, 31, 23, 59, 59), utc(2022, 1, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_fiscal_year_policy() {
        let cal = ShiftCalendar::new(&ProjectCalendar {
            day_start: "00:00".to_string(),
            year_start_month: 4,
        })
        .unwrap();
        let now = wednesday();
        let w = resolve_window(
            TimeRangeLabel::Definitive(DefinitiveLabel::ThisYear),
            false,
            &cal,
            &now,
        )
        .unwrap();
        assert_eq!(
            w,
            window(utc(2026, 3, 31, 23, 59, 59), utc(2025, 4, 1, 0, 0, 0))
        );
    }

    // ── policy plumbing ─────────────────────────────────────────────────

    struct FailingPolicy;

    impl DayBoundaryPolicy for FailingPolicy {
        fn custom_day_start(&self, _: &DateTime<Tz>) -> Result<DateTime<Tz>, WindowError> {
            Err(WindowError::InvalidPolicy("no project".to_string()))
        }
        fn custom_day_end(&self, _: &DateTime<Tz>) -> Result<DateTime<Tz>, WindowError> {
            Err(WindowError::InvalidPolicy("no project".to_string()))
        }
        fn month_start(&self, _: &DateTime<Tz>) -> Result<DateTime<Tz>, WindowError> {
            Err(WindowError::InvalidPolicy("no project".to_string()))
        }
        fn month_end(&self, _: &DateTime<Tz>, _: u32) -> Result<DateTime<Tz>, WindowError> {
            Err(WindowError::InvalidPolicy("no project".to_string()))
        }
        fn year_start(&self, _: &DateTime<Tz>) -> Result<DateTime<Tz>, WindowError> {
            Err(WindowError::InvalidPolicy("no project".to_string()))
        }
        fn year_end(&self, _: &DateTime<Tz>) -> Result<DateTime<Tz>, WindowError> {
            Err(WindowError::InvalidPolicy("no project".to_string()))
        }
    }

    #[test]
    fn test_policy_errors_propagate_unchanged() {
        let now = wednesday();
        for label in DefinitiveLabel::ALL {
            let err = resolve_window(
                TimeRangeLabel::Definitive(label),
                false,
                &FailingPolicy,
                &now,
            )
            .unwrap_err();
            assert_eq!(err, WindowError::InvalidPolicy("no project".to_string()));
        }
    }

    #[test]
    fn test_sub_day_units_never_consult_policy() {
        let now = wednesday();
        let w = resolve_window(
            TimeRangeLabel::Relative {
                quantity: 5,
                unit: TimeUnit::Hours,
            },
            true,
            &FailingPolicy,
            &now,
        )
        .unwrap();
        assert_eq!(w.end, utc(2026, 3, 18, 9, 25, 37));
    }
}
