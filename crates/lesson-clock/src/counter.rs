//! Remaining-lesson counting -- tallies the regular lessons left between
//! today and the end of term.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::schedule::LessonSchedule;

/// Count the regular lessons from `now`'s date through `end`, both inclusive.
///
/// Only dates on the lesson weekday count. Excluded dates and the special
/// (test) date are both left out. Returns 0 when `now` is already past `end`.
pub fn count_remaining(schedule: &LessonSchedule, now: NaiveDateTime, end: NaiveDate) -> u32 {
    let calendar = schedule.calendar();
    let weekday = schedule.weekday();

    let count = now
        .date()
        .iter_days()
        .take_while(|date| *date <= end)
        .filter(|date| date.weekday() == weekday)
        .filter(|date| !calendar.is_excluded(*date) && !calendar.is_special(*date))
        .count();

    debug!(from = %now.date(), %end, count, "counted remaining lessons");
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Count the regular lessons left this term, taking the end boundary in
/// `now`'s year.
pub fn count_remaining_in_term(schedule: &LessonSchedule, now: NaiveDateTime) -> u32 {
    match schedule.end_date_in(now.year()) {
        Some(end) => count_remaining(schedule, now, end),
        None => 0,
    }
}
