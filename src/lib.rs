mod consts;
mod prelude;
mod types;
mod weekday;

pub use consts::*;
pub use types::{days_in_month, days_in_year, is_leap_year};
pub use weekday::Weekday;

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// A date in the Symmetry454 calendar.
///
/// Construction through [`S454Date::new`] is unchecked: arithmetic on an
/// out-of-range date is defined but meaningless. Use [`S454Date::try_new`] or
/// [`S454Date::validate`] where input is untrusted.
///
/// Field order makes the derived ordering chronological for valid dates, as the
/// leap week is month 13 and falls after December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Into, Serialize, Deserialize)]
#[serde(try_from = "RawDate")]
pub struct S454Date {
    year:  i32,
    month: u8,
    day:   u8,
}

/// Reasons a (year, month, day) triple is not a real date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid month: {month} (must be {}-{})", JANUARY, MAX_MONTH)]
    MonthOutOfRange { month: u8 },

    #[error("Invalid day {day} for month {year}-{month:02} (must be {}-{max})", MIN_DAY)]
    DayOutOfRange { year: i32, month: u8, day: u8, max: u8 },

    #[error("Year {year} has no leap week")]
    LeapWeekInNonLeapYear { year: i32 },
}

impl S454Date {
    /// First day of the epoch year, day offset 0. It is a Monday.
    pub const EPOCH: Self = Self::new(EPOCH_YEAR, JANUARY, MIN_DAY);

    /// Creates a date without checking it against the calendar.
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a date, validating the month and day for the given year.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] found by [`S454Date::validate`].
    pub fn try_new(year: i32, month: u8, day: u8) -> Result<Self, ValidationError> {
        let date = Self::new(year, month, day);
        date.validate()
            .inspect_err(|err| debug!(year, month, day, %err, "rejected date"))?;
        Ok(date)
    }

    /// Checks the date against the calendar rules.
    ///
    /// Checks run in order: month range, leap week presence, day range.
    ///
    /// # Errors
    /// - `MonthOutOfRange` if the month is not in `1..=13`.
    /// - `LeapWeekInNonLeapYear` if the month is 13 and the year is not leap.
    /// - `DayOutOfRange` if the day is 0 or past the end of the month.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(JANUARY..=MAX_MONTH).contains(&self.month) {
            return Err(ValidationError::MonthOutOfRange { month: self.month });
        }

        let leap = is_leap_year(self.year);
        if self.month == LEAP_WEEK && !leap {
            return Err(ValidationError::LeapWeekInNonLeapYear { year: self.year });
        }

        let max = days_in_month(self.month, leap);
        if !(MIN_DAY..=max).contains(&self.day) {
            return Err(ValidationError::DayOutOfRange {
                year: self.year,
                month: self.month,
                day: self.day,
                max,
            });
        }

        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Returns the year. Values of 0 and below are BCE years.
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12, or 13 for the leap week)
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day within the month
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Whether this date falls in the leap week
    pub const fn is_leap_week(&self) -> bool {
        self.month == LEAP_WEEK
    }

    /// 1-based ordinal of the day within its year.
    ///
    /// Months before `self.month` that do not exist in this year contribute
    /// nothing to the sum.
    pub fn day_of_year(&self) -> u16 {
        let leap = is_leap_year(self.year);
        let preceding: u16 = (JANUARY..self.month)
            .map(|m| u16::from(days_in_month(m, leap)))
            .sum();
        preceding + u16::from(self.day)
    }

    /// Signed number of days from [`S454Date::EPOCH`] to this date.
    ///
    /// Walks one year at a time between the epoch year and `self.year`; the leap
    /// rule has no closed-form day count.
    pub fn days_since_epoch(&self) -> i64 {
        let mut total: i64 = 0;
        let mut year = EPOCH_YEAR;

        if self.year >= EPOCH_YEAR {
            while year < self.year {
                total += i64::from(days_in_year(year));
                year += 1;
            }
        } else {
            while year > self.year {
                year -= 1;
                total -= i64::from(days_in_year(year));
            }
        }

        total + i64::from(self.day_of_year()) - 1
    }

    /// Inverse of [`S454Date::days_since_epoch`].
    ///
    /// The year walk mirrors the forward one step for step: moving back a year
    /// adds the length of the year moved into, moving forward subtracts the
    /// length of the year left behind.
    pub fn from_days_since_epoch(days: i64) -> Self {
        let mut year = EPOCH_YEAR;
        let mut rem = days;

        loop {
            let year_days = i64::from(days_in_year(year));
            if rem < 0 {
                year -= 1;
                rem += i64::from(days_in_year(year));
            } else if rem >= year_days {
                rem -= year_days;
                year += 1;
            } else {
                break;
            }
        }
        trace!(days, year, day_of_year = rem + 1, "resolved epoch offset");

        let leap = is_leap_year(year);
        let mut month = JANUARY;
        // The leap week is the last month; whatever is left lands there.
        while month < MAX_MONTH {
            let month_days = i64::from(days_in_month(month, leap));
            if rem < month_days {
                break;
            }
            rem -= month_days;
            month += 1;
        }

        // rem is below the longest month length (35) here
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let day = rem as u8 + MIN_DAY;
        Self::new(year, month, day)
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_days_since_epoch(self.days_since_epoch())
    }

    /// Renders the date in its canonical text form.
    ///
    /// Same output as the `Display` impl: `2024-05-17`, `2026-LeapWeek-3`,
    /// `100 BCE-01-01`.
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// The date `days` days after this one (before it, if negative)
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_days_since_epoch(self.days_since_epoch() + days)
    }

    /// The following day
    pub fn succ(&self) -> Self {
        self.add_days(1)
    }

    /// The preceding day
    pub fn pred(&self) -> Self {
        self.add_days(-1)
    }

    /// Signed number of days from `self` to `other`
    pub fn days_until(&self, other: &Self) -> i64 {
        other.days_since_epoch() - self.days_since_epoch()
    }
}

impl fmt::Display for S454Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year >= 1 {
            write!(f, "{}", self.year)?;
        } else {
            // year 0 is 1 BCE
            write!(f, "{}{BCE_SUFFIX}", 1 - i64::from(self.year))?;
        }

        if self.month == LEAP_WEEK {
            write!(f, "{DATE_SEPARATOR}{LEAP_WEEK_LABEL}{DATE_SEPARATOR}{}", self.day)
        } else {
            write!(f, "{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}", self.month, self.day)
        }
    }
}

impl TryFrom<(i32, u8, u8)> for S454Date {
    type Error = ValidationError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::try_new(value.0, value.1, value.2)
    }
}

/// Wire shape for deserialization, validated before it becomes an `S454Date`
#[derive(Deserialize)]
struct RawDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl TryFrom<RawDate> for S454Date {
    type Error = ValidationError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        Self::try_new(raw.year, raw.month, raw.day)
    }
}
