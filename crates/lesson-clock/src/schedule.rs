//! The immutable timetable: which weekday and time the lesson recurs on, the
//! exception calendar, and the end-of-term boundary.

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::Serialize;
use tracing::warn;

use crate::calendar::{ExceptionCalendar, MonthDay};
use crate::error::{Result, ScheduleError};

const LESSON_TIME: NaiveTime = match NaiveTime::from_hms_opt(7, 50, 0) {
    Some(t) => t,
    None => panic!("lesson time out of range"),
};

const NO_LESSON_DATES: [MonthDay; 6] = [
    MonthDay::known(2, 14),
    MonthDay::known(3, 14),
    MonthDay::known(3, 28),
    MonthDay::known(4, 18),
    MonthDay::known(5, 2),
    MonthDay::known(5, 30),
];

const TEST_DATE: MonthDay = MonthDay::known(1, 10);

const END_OF_TERM: MonthDay = MonthDay::known(7, 5);

/// Weekday and local wall-clock time of the weekly lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OccurrenceSpec {
    pub weekday: Weekday,
    pub time: NaiveTime,
}

impl OccurrenceSpec {
    /// # Errors
    /// Returns `ScheduleError::InvalidTime` if `hour`/`minute` do not form a
    /// valid time of day.
    pub fn new(weekday: Weekday, hour: u32, minute: u32) -> Result<Self> {
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| ScheduleError::InvalidTime(format!("{:02}:{:02}", hour, minute)))?;
        Ok(Self { weekday, time })
    }
}

/// Everything the resolver and counter need, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonSchedule {
    occurrence: OccurrenceSpec,
    calendar: ExceptionCalendar,
    end_boundary: MonthDay,
}

impl LessonSchedule {
    /// Assemble a schedule from already-validated parts.
    ///
    /// A special date that also appears among the excluded dates is accepted
    /// but logged: the lesson is skipped on that date and never flagged.
    pub fn new(
        occurrence: OccurrenceSpec,
        calendar: ExceptionCalendar,
        end_boundary: MonthDay,
    ) -> Self {
        if calendar.special_is_excluded() {
            warn!(
                special = %calendar.special(),
                "special date is also excluded; exclusion takes precedence"
            );
        }
        Self {
            occurrence,
            calendar,
            end_boundary,
        }
    }

    /// Build a schedule from raw numbers, validating every field.
    ///
    /// # Arguments
    /// - `weekday` -- day of the week the lesson recurs on
    /// - `hour`, `minute` -- local start time
    /// - `excluded` -- `(month, day)` pairs with no lesson
    /// - `special` -- `(month, day)` of the test lesson
    /// - `end_boundary` -- `(month, day)` of the last countable day of term
    ///
    /// # Errors
    /// Returns the first `ScheduleError` encountered.
    pub fn from_parts(
        weekday: Weekday,
        hour: u32,
        minute: u32,
        excluded: &[(u32, u32)],
        special: (u32, u32),
        end_boundary: (u32, u32),
    ) -> Result<Self> {
        let occurrence = OccurrenceSpec::new(weekday, hour, minute)?;
        let excluded = excluded
            .iter()
            .map(|&(m, d)| MonthDay::new(m, d))
            .collect::<Result<Vec<_>>>()?;
        let special = MonthDay::new(special.0, special.1)?;
        let end_boundary = MonthDay::new(end_boundary.0, end_boundary.1)?;
        Ok(Self::new(
            occurrence,
            ExceptionCalendar::new(excluded, special),
            end_boundary,
        ))
    }

    pub fn occurrence(&self) -> OccurrenceSpec {
        self.occurrence
    }

    pub fn weekday(&self) -> Weekday {
        self.occurrence.weekday
    }

    pub fn time(&self) -> NaiveTime {
        self.occurrence.time
    }

    pub fn calendar(&self) -> &ExceptionCalendar {
        &self.calendar
    }

    pub fn end_boundary(&self) -> MonthDay {
        self.end_boundary
    }

    /// The end-of-term date in `year`.
    pub fn end_date_in(&self, year: i32) -> Option<NaiveDate> {
        self.end_boundary.in_year(year)
    }
}

impl Default for LessonSchedule {
    /// Fridays at 07:50; no lesson on 14.2, 14.3, 28.3, 18.4, 2.5 and 30.5;
    /// test on 10.1; term ends 5.7.
    fn default() -> Self {
        Self::new(
            OccurrenceSpec {
                weekday: Weekday::Fri,
                time: LESSON_TIME,
            },
            ExceptionCalendar::new(NO_LESSON_DATES.to_vec(), TEST_DATE),
            END_OF_TERM,
        )
    }
}
