//! Day, month and year boundary policies.
//!
//! Windows such as `today` or `this_month` do not assume midnight-to-midnight
//! days. They ask a [`DayBoundaryPolicy`] where the period containing an
//! instant begins and ends. [`ShiftCalendar`] is the policy driven by a
//! project's [`ProjectCalendar`] settings (custom day start time, fiscal year
//! start month).

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::calendar::localize;
use crate::error::WindowError;

/// Where days, months and years begin and end for a project.
///
/// Every method receives a zoned instant and returns an instant in the same
/// timezone. Implementations must keep `*_start(at) <= at <= *_end(at)` for
/// the day, month and year containing `at`.
pub trait DayBoundaryPolicy {
    /// Start of the logical day containing `at`.
    fn custom_day_start(&self, at: &DateTime<Tz>) -> Result<DateTime<Tz>, WindowError>;

    /// Last second of the logical day containing `at`.
    fn custom_day_end(&self, at: &DateTime<Tz>) -> Result<DateTime<Tz>, WindowError>;

    /// Start of the month containing `at`.
    fn month_start(&self, at: &DateTime<Tz>) -> Result<DateTime<Tz>, WindowError>;

    /// Last second of day `last_day_of_month` in the month containing `at`.
    fn month_end(
        &self,
        at: &DateTime<Tz>,
        last_day_of_month: u32,
    ) -> Result<DateTime<Tz>, WindowError>;

    /// Start of the (possibly fiscal) year containing `at`.
    fn year_start(&self, at: &DateTime<Tz>) -> Result<DateTime<Tz>, WindowError>;

    /// Last second of the (possibly fiscal) year containing `at`.
    fn year_end(&self, at: &DateTime<Tz>) -> Result<DateTime<Tz>, WindowError>;
}

/// Per-project calendar settings, as stored in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectCalendar {
    /// Local time at which a day begins, `HH:MM` or `HH:MM:SS`.
    pub day_start: String,
    /// Month (1-12) in which the year begins.
    pub year_start_month: u32,
}

impl Default for ProjectCalendar {
    fn default() -> Self {
        Self {
            day_start: "00:00".to_string(),
            year_start_month: 1,
        }
    }
}

/// Boundary policy for projects whose day starts at a fixed local time.
///
/// A "logical day" runs from `day_start` to one second before the next
/// `day_start`; an instant before `day_start` belongs to the previous
/// calendar date. Months and years are made of whole logical days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftCalendar {
    day_start: NaiveTime,
    year_start_month: u32,
}

impl Default for ShiftCalendar {
    fn default() -> Self {
        Self {
            day_start: NaiveTime::MIN,
            year_start_month: 1,
        }
    }
}

impl ShiftCalendar {
    /// Build the policy from validated project settings.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidPolicy`] if `day_start` is not a time of
    /// day or `year_start_month` is outside 1-12.
    pub fn new(calendar: &ProjectCalendar) -> Result<Self, WindowError> {
        let raw = calendar.day_start.trim();
        let day_start = NaiveTime::parse_from_str(raw, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
            .map_err(|e| WindowError::InvalidPolicy(format!("day_start '{raw}': {e}")))?;

        if !(1..=12).contains(&calendar.year_start_month) {
            return Err(WindowError::InvalidPolicy(format!(
                "year_start_month must be 1-12, got {}",
                calendar.year_start_month
            )));
        }

        Ok(Self {
            day_start,
            year_start_month: calendar.year_start_month,
        })
    }

    /// Local time at which each logical day begins.
    pub fn day_start(&self) -> NaiveTime {
        self.day_start
    }

    /// Month (1-12) in which each logical year begins.
    pub fn year_start_month(&self) -> u32 {
        self.year_start_month
    }

    /// Calendar date of the logical day containing `at`.
    fn logical_date(&self, at: &DateTime<Tz>) -> Result<NaiveDate, WindowError> {
        let local = at.naive_local();
        let date = if local.time() < self.day_start {
            local.date().pred_opt().ok_or_else(|| out_of_range(at))?
        } else {
            local.date()
        };
        // Wall-clock comparison is not enough around DST transitions: a day
        // start pushed forward by a gap can land after `at`, and an instant in
        // a repeated hour can already be past the next day's start.
        let tz = at.timezone();
        if self.start_of(&tz, date)? > *at {
            return date.pred_opt().ok_or_else(|| out_of_range(at));
        }
        if let Some(next) = date.succ_opt() {
            if self.start_of(&tz, next)? <= *at {
                return Ok(next);
            }
        }
        Ok(date)
    }

    fn start_of(&self, tz: &Tz, date: NaiveDate) -> Result<DateTime<Tz>, WindowError> {
        localize(tz, date.and_time(self.day_start))
    }

    /// One second before the logical day after `date` begins.
    fn end_of(&self, tz: &Tz, date: NaiveDate) -> Result<DateTime<Tz>, WindowError> {
        let next = date
            .succ_opt()
            .ok_or_else(|| WindowError::InvalidDatetime(format!("no day after {date}")))?;
        Ok(self.start_of(tz, next)? - chrono::Duration::seconds(1))
    }

    fn fiscal_year_start(&self, date: NaiveDate) -> Result<NaiveDate, WindowError> {
        let year = if date.month() >= self.year_start_month {
            date.year()
        } else {
            date.year() - 1
        };
        NaiveDate::from_ymd_opt(year, self.year_start_month, 1)
            .ok_or_else(|| WindowError::InvalidDatetime(format!("no fiscal year start in {year}")))
    }
}

impl DayBoundaryPolicy for ShiftCalendar {
    fn custom_day_start(&self, at: &DateTime<Tz>) -> Result<DateTime<Tz>, WindowError> {
        let date = self.logical_date(at)?;
        self.start_of(&at.timezone(), date)
    }

    fn custom_day_end(&self, at: &DateTime<Tz>) -> Result<DateTime<Tz>, WindowError> {
        let date = self.logical_date(at)?;
        self.end_of(&at.timezone(), date)
    }

    fn month_start(&self, at: &DateTime<Tz>) -> Result<DateTime<Tz>, WindowError> {
        let date = self.logical_date(at)?;
        let first = date.with_day(1).ok_or_else(|| out_of_range(at))?;
        self.start_of(&at.timezone(), first)
    }

    fn month_end(
        &self,
        at: &DateTime<Tz>,
        last_day_of_month: u32,
    ) -> Result<DateTime<Tz>, WindowError> {
        let date = self.logical_date(at)?;
        let last = NaiveDate::from_ymd_opt(date.year(), date.month(), last_day_of_month)
            .ok_or_else(|| {
                WindowError::InvalidDatetime(format!(
                    "day {last_day_of_month} does not exist in {}-{:02}",
                    date.year(),
                    date.month()
                ))
            })?;
        self.end_of(&at.timezone(), last)
    }

    fn year_start(&self, at: &DateTime<Tz>) -> Result<DateTime<Tz>, WindowError> {
        let date = self.logical_date(at)?;
        let first = self.fiscal_year_start(date)?;
        self.start_of(&at.timezone(), first)
    }

    fn year_end(&self, at: &DateTime<Tz>) -> Result<DateTime<Tz>, WindowError> {
        let date = self.logical_date(at)?;
        let next_year = self
            .fiscal_year_start(date)?
            .checked_add_months(Months::new(12))
            .ok_or_else(|| out_of_range(at))?;
        let last = next_year.pred_opt().ok_or_else(|| out_of_range(at))?;
        self.end_of(&at.timezone(), last)
    }
}

fn out_of_range(at: &DateTime<Tz>) -> WindowError {
    WindowError::InvalidDatetime(format!("'{}' is out of range", at.to_rfc3339()))
}
