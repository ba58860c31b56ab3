//! Next-lesson resolution -- finds the next weekly occurrence after `now`,
//! skipping dates with no lesson and flagging the test date.

use chrono::{Datelike, Duration, NaiveDateTime, Weekday};
use serde::Serialize;
use tracing::trace;

use crate::schedule::LessonSchedule;

/// The next lesson as seen from a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedOccurrence {
    /// Local wall-clock start of the lesson.
    pub instant: NaiveDateTime,
    /// True when this lesson is the test rather than a regular lesson.
    pub is_special: bool,
}

/// Days from `from` forward to the next `to`, 0 if they are the same day.
fn days_until(from: Weekday, to: Weekday) -> i64 {
    let from = i64::from(from.num_days_from_sunday());
    let to = i64::from(to.num_days_from_sunday());
    (to - from + 7) % 7
}

/// Resolve the next lesson strictly after `now`.
///
/// If today is lesson day and the lesson time has been reached, the search
/// starts one week later. Excluded dates are skipped a week at a time; the
/// special date is returned as a flagged occurrence. When a date is both
/// excluded and special the exclusion wins.
pub fn resolve_next(schedule: &LessonSchedule, now: NaiveDateTime) -> ResolvedOccurrence {
    let week = Duration::days(7);
    let today = now.date();

    let date = today + Duration::days(days_until(now.weekday(), schedule.weekday()));
    let mut candidate = date.and_time(schedule.time());

    // Today's lesson has already started or is over.
    if candidate.date() == today && candidate.time() <= now.time() {
        candidate += week;
    }

    let calendar = schedule.calendar();
    while calendar.is_excluded(candidate.date()) {
        trace!(date = %candidate.date(), "no lesson, skipping a week");
        candidate += week;
    }

    let is_special = calendar.is_special(candidate.date());
    trace!(next = %candidate, is_special, "resolved next lesson");

    ResolvedOccurrence {
        instant: candidate,
        is_special,
    }
}
