//! WASM bindings for lesson-clock.
//!
//! Exposes next-lesson resolution, the countdown and the remaining-lesson count
//! to a web page via `wasm-bindgen`. The page passes its own local wall-clock
//! time as an ISO 8601 string (no offset) and receives JSON strings back; it
//! owns the DOM and the once-per-second refresh.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p lesson-clock-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir www/pkg/ \
//!   target/wasm32-unknown-unknown/release/lesson_clock_wasm.wasm
//! ```

use chrono::{Datelike, NaiveDateTime};
use lesson_clock::{Countdown, LessonSchedule, ResolvedOccurrence};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct NextLessonDto {
    start: String,
    is_test: bool,
}

impl From<&ResolvedOccurrence> for NextLessonDto {
    fn from(r: &ResolvedOccurrence) -> Self {
        Self {
            start: r.instant.format("%Y-%m-%dT%H:%M:%S").to_string(),
            is_test: r.is_special,
        }
    }
}

#[derive(Serialize)]
struct CountdownDto {
    next: NextLessonDto,
    started: bool,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
}

#[derive(Serialize)]
struct RemainingDto {
    end: Option<String>,
    remaining: u32,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a local ISO 8601 datetime such as "2025-01-09T12:00:00".
///
/// Fractional seconds (as produced by JavaScript) are accepted.
fn parse_local(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|e| format!("Invalid datetime '{}': {}", s, e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn next_lesson_json(now: &str) -> Result<String, String> {
    let now = parse_local(now)?;
    let next = lesson_clock::resolve_next(&LessonSchedule::default(), now);
    to_json(&NextLessonDto::from(&next))
}

fn countdown_json(now: &str) -> Result<String, String> {
    let now = parse_local(now)?;
    let next = lesson_clock::resolve_next(&LessonSchedule::default(), now);

    let (started, days, hours, minutes, seconds) = match Countdown::between(now, next.instant) {
        Countdown::Upcoming {
            days,
            hours,
            minutes,
            seconds,
        } => (false, days, hours, minutes, seconds),
        Countdown::Started => (true, 0, 0, 0, 0),
    };

    to_json(&CountdownDto {
        next: NextLessonDto::from(&next),
        started,
        days,
        hours,
        minutes,
        seconds,
    })
}

fn remaining_lessons_json(now: &str) -> Result<String, String> {
    let now = parse_local(now)?;
    let schedule = LessonSchedule::default();
    to_json(&RemainingDto {
        end: schedule.end_date_in(now.year()).map(|d| d.to_string()),
        remaining: lesson_clock::count_remaining_in_term(&schedule, now),
    })
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Resolve the next lesson after `now`.
///
/// Returns a JSON string `{start, is_test}`.
#[wasm_bindgen(js_name = "nextLesson")]
pub fn next_lesson(now: &str) -> Result<String, JsValue> {
    next_lesson_json(now).map_err(|e| JsValue::from_str(&e))
}

/// Countdown from `now` to the next lesson.
///
/// Returns a JSON string `{next, started, days, hours, minutes, seconds}`;
/// `started` is true (and all units 0) when the lesson is in progress or over.
#[wasm_bindgen(js_name = "countdown")]
pub fn countdown(now: &str) -> Result<String, JsValue> {
    countdown_json(now).map_err(|e| JsValue::from_str(&e))
}

/// Regular lessons left from `now` until the end of term.
///
/// Returns a JSON string `{end, remaining}`.
#[wasm_bindgen(js_name = "remainingLessons")]
pub fn remaining_lessons(now: &str) -> Result<String, JsValue> {
    remaining_lessons_json(now).map_err(|e| JsValue::from_str(&e))
}
