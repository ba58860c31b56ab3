//! Year-independent exception dates and the predicates answering
//! "does the weekly lesson happen on this date, and is it a special one?".

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{Result, ScheduleError};

/// Leap year used to validate month/day pairs so that Feb 29 is accepted.
const REFERENCE_LEAP_YEAR: i32 = 2000;

/// A calendar date without a year, e.g. "14 February".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Build a month/day pair, rejecting months outside 1..=12 and days
    /// past the end of the month.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidMonth` or `ScheduleError::InvalidDay`.
    pub fn new(month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ScheduleError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(REFERENCE_LEAP_YEAR, month, day).is_none() {
            return Err(ScheduleError::InvalidDay { month, day });
        }
        Ok(Self { month, day })
    }

    /// Compile-time constructor for the built-in timetable; callers must pass
    /// a real month/day.
    pub(crate) const fn known(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// True when `date` falls on this month and day, in any year.
    pub fn matches(self, date: NaiveDate) -> bool {
        date.month() == self.month && date.day() == self.day
    }

    /// Place this month/day in `year`.
    ///
    /// Feb 29 in a non-leap year clamps to Feb 28.
    pub fn in_year(self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day).or_else(|| {
            if self.month == 2 && self.day == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// The fixed set of dates with no lesson, plus the single date on which the
/// lesson is replaced by a test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExceptionCalendar {
    excluded: Vec<MonthDay>,
    special: MonthDay,
}

impl ExceptionCalendar {
    pub fn new(excluded: Vec<MonthDay>, special: MonthDay) -> Self {
        Self { excluded, special }
    }

    pub fn excluded(&self) -> &[MonthDay] {
        &self.excluded
    }

    pub fn special(&self) -> MonthDay {
        self.special
    }

    /// True if no lesson takes place on `date` (year ignored).
    pub fn is_excluded(&self, date: NaiveDate) -> bool {
        self.excluded.iter().any(|md| md.matches(date))
    }

    /// True if `date` is the special (test) date (year ignored).
    pub fn is_special(&self, date: NaiveDate) -> bool {
        self.special.matches(date)
    }

    /// True if the special date also appears in the excluded set. The
    /// exclusion takes precedence wherever both apply.
    pub fn special_is_excluded(&self) -> bool {
        self.excluded.contains(&self.special)
    }
}

