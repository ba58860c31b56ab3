//! Countdown breakdown -- splits the time left until a lesson into whole days,
//! hours, minutes and seconds.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Time left until a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Countdown {
    /// The lesson lies in the future.
    Upcoming {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    /// The lesson is in progress or already over.
    Started,
}

impl Countdown {
    /// Countdown from `now` to `at`. Sub-second remainders are dropped.
    pub fn between(now: NaiveDateTime, at: NaiveDateTime) -> Self {
        let diff = at - now;
        if diff <= Duration::zero() {
            return Countdown::Started;
        }

        let total = diff.num_seconds();
        Countdown::Upcoming {
            days: total / SECS_PER_DAY,
            hours: (total % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (total % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self, Countdown::Started)
    }

    /// Whole seconds left; 0 once started.
    pub fn total_seconds(&self) -> i64 {
        match *self {
            Countdown::Upcoming {
                days,
                hours,
                minutes,
                seconds,
            } => days * SECS_PER_DAY + hours * SECS_PER_HOUR + minutes * SECS_PER_MINUTE + seconds,
            Countdown::Started => 0,
        }
    }
}
