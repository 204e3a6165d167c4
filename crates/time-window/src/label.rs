//! Time-range label grammar.
//!
//! A label is either *definitive* (a fixed name such as `this_month`) or
//! *relative* (`last_<quantity>_<unit>`, e.g. `last_twenty_one_minutes`).
//! Every raw string is classified into a [`TimeRangeLabel`] before any
//! calendar arithmetic runs; anything that does not classify is rejected.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::cardinal::{is_tens_word, parse_cardinal};
use crate::error::WindowError;

/// Unit of a relative `last_N_<unit>` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl TimeUnit {
    /// All units, in discriminant order.
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Weeks,
        TimeUnit::Months,
        TimeUnit::Years,
    ];

    /// Look up the unit token of a relative label. Singular forms are accepted.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "seconds" | "second" => Some(TimeUnit::Seconds),
            "minutes" | "minute" => Some(TimeUnit::Minutes),
            "hours" | "hour" => Some(TimeUnit::Hours),
            "days" | "day" => Some(TimeUnit::Days),
            "weeks" | "week" => Some(TimeUnit::Weeks),
            "months" | "month" => Some(TimeUnit::Months),
            "years" | "year" => Some(TimeUnit::Years),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed-vocabulary window name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitiveLabel {
    Today,
    TodaySoFar,
    ThisWeek,
    ThisWeekSoFar,
    ThisMonth,
    ThisMonthSoFar,
    ThisYear,
    ThisYearSoFar,
    Yesterday,
    DayBeforeYesterday,
    ThisDayLastWeek,
    ThisDayLastWeekSoFar,
    PreviousWeek,
    PreviousWeekSoFar,
    PreviousMonth,
    PreviousMonthSoFar,
    PreviousYear,
}

impl DefinitiveLabel {
    /// All definitive labels, in discriminant order.
    pub const ALL: [DefinitiveLabel; 17] = [
        DefinitiveLabel::Today,
        DefinitiveLabel::TodaySoFar,
        DefinitiveLabel::ThisWeek,
        DefinitiveLabel::ThisWeekSoFar,
        DefinitiveLabel::ThisMonth,
        DefinitiveLabel::ThisMonthSoFar,
        DefinitiveLabel::ThisYear,
        DefinitiveLabel::ThisYearSoFar,
        DefinitiveLabel::Yesterday,
        DefinitiveLabel::DayBeforeYesterday,
        DefinitiveLabel::ThisDayLastWeek,
        DefinitiveLabel::ThisDayLastWeekSoFar,
        DefinitiveLabel::PreviousWeek,
        DefinitiveLabel::PreviousWeekSoFar,
        DefinitiveLabel::PreviousMonth,
        DefinitiveLabel::PreviousMonthSoFar,
        DefinitiveLabel::PreviousYear,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DefinitiveLabel::Today => "today",
            DefinitiveLabel::TodaySoFar => "today_so_far",
            DefinitiveLabel::ThisWeek => "this_week",
            DefinitiveLabel::ThisWeekSoFar => "this_week_so_far",
            DefinitiveLabel::ThisMonth => "this_month",
            DefinitiveLabel::ThisMonthSoFar => "this_month_so_far",
            DefinitiveLabel::ThisYear => "this_year",
            DefinitiveLabel::ThisYearSoFar => "this_year_so_far",
            DefinitiveLabel::Yesterday => "yesterday",
            DefinitiveLabel::DayBeforeYesterday => "day_before_yesterday",
            DefinitiveLabel::ThisDayLastWeek => "this_day_last_week",
            DefinitiveLabel::ThisDayLastWeekSoFar => "this_day_last_week_so_far",
            DefinitiveLabel::PreviousWeek => "previous_week",
            DefinitiveLabel::PreviousWeekSoFar => "previous_week_so_far",
            DefinitiveLabel::PreviousMonth => "previous_month",
            DefinitiveLabel::PreviousMonthSoFar => "previous_month_so_far",
            DefinitiveLabel::PreviousYear => "previous_year",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.as_str() == name)
    }
}

impl fmt::Display for DefinitiveLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified time-range label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeRangeLabel {
    /// `last_<quantity>_<unit>`.
    Relative { quantity: u32, unit: TimeUnit },
    Definitive(DefinitiveLabel),
}

impl TimeRangeLabel {
    /// Classify and parse a raw label.
    ///
    /// A label containing `last` but not `this` is relative; everything else
    /// must be one of the definitive names. For relative labels the unit is
    /// checked before the quantity, so `last_ten_bananas` is an unsupported
    /// label while `last_banana_minutes` is an invalid quantity.
    ///
    /// # Errors
    ///
    /// [`WindowError::UnsupportedLabel`] when the label matches no known
    /// shape, unit or name; [`WindowError::InvalidQuantity`] when the
    /// quantity words are not a cardinal number.
    ///
    /// # Examples
    ///
    /// ```
    /// use time_window::label::{TimeRangeLabel, TimeUnit};
    ///
    /// let label = TimeRangeLabel::parse("last_twenty_one_minutes").unwrap();
    /// assert_eq!(label, TimeRangeLabel::Relative { quantity: 21, unit: TimeUnit::Minutes });
    /// ```
    pub fn parse(raw: &str) -> Result<Self, WindowError> {
        let normalized = raw.trim().to_lowercase();
        let unsupported = || WindowError::UnsupportedLabel(format!("'{}'", raw.trim()));

        if is_relative(&normalized) {
            let (quantity_words, unit_token) =
                split_relative(&normalized).ok_or_else(unsupported)?;
            let unit = TimeUnit::from_token(unit_token).ok_or_else(unsupported)?;
            let quantity = parse_cardinal(&quantity_words)?;
            return Ok(TimeRangeLabel::Relative { quantity, unit });
        }

        DefinitiveLabel::from_name(&normalized)
            .map(TimeRangeLabel::Definitive)
            .ok_or_else(unsupported)
    }
}

impl FromStr for TimeRangeLabel {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeRangeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRangeLabel::Relative { quantity, unit } => write!(f, "last_{quantity}_{unit}"),
            TimeRangeLabel::Definitive(label) => f.write_str(label.as_str()),
        }
    }
}

fn is_relative(label: &str) -> bool {
    label.contains("last") && !label.contains("this")
}

/// Split `last_<quantity>_<unit>` into its quantity phrase and unit token.
///
/// A four-token label whose second token is a tens word carries a two-word
/// quantity (`last_twenty_one_minutes`); those two tokens are joined.
fn split_relative(label: &str) -> Option<(String, &str)> {
    let tokens: Vec<&str> = label.split('_').collect();
    match tokens.as_slice() {
        ["last", quantity, unit] => Some((quantity.to_string(), *unit)),
        ["last", tens, ones, unit] if is_tens_word(tens) => {
            Some((format!("{tens} {ones}"), *unit))
        }
        _ => None,
    }
}
