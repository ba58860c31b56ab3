//! # lesson-clock
//!
//! Countdown to the next weekly lesson and a tally of the lessons left in term.
//!
//! A lesson recurs on a fixed weekday at a fixed local time. A handful of
//! year-independent dates have no lesson, and one date holds a test instead of
//! a regular lesson. All computations take the current instant as an explicit
//! argument and work in local wall-clock time.
//!
//! ## Modules
//!
//! - [`calendar`] -- Excluded and special dates, year-independent
//! - [`schedule`] -- The immutable timetable (weekday, time, exceptions, end of term)
//! - [`resolver`] -- Next lesson strictly after a given instant
//! - [`counter`] -- Regular lessons remaining up to the end of term
//! - [`countdown`] -- Days/hours/minutes/seconds until a lesson
//! - [`error`] -- Error types

pub mod calendar;
pub mod countdown;
pub mod counter;
pub mod error;
pub mod resolver;
pub mod schedule;

pub use calendar::{ExceptionCalendar, MonthDay};
pub use countdown::Countdown;
pub use counter::{count_remaining, count_remaining_in_term};
pub use error::ScheduleError;
pub use resolver::{resolve_next, ResolvedOccurrence};
pub use schedule::{LessonSchedule, OccurrenceSpec};
