//! Tests for next-lesson resolution.
//!
//! Dates are taken from 2025, when 10 January and 14 February were Fridays.

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use lesson_clock::{resolve_next, LessonSchedule, ResolvedOccurrence};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

fn lesson(y: i32, m: u32, d: u32) -> NaiveDateTime {
    at(y, m, d, 7, 50, 0)
}

fn regular(instant: NaiveDateTime) -> ResolvedOccurrence {
    ResolvedOccurrence {
        instant,
        is_special: false,
    }
}

// ── Plain weekly recurrence ─────────────────────────────────────────────────

#[test]
fn monday_resolves_to_same_week_friday() {
    let schedule = LessonSchedule::default();
    let next = resolve_next(&schedule, at(2025, 10, 13, 12, 0, 0));
    assert_eq!(next, regular(lesson(2025, 10, 17)));
}

#[test]
fn saturday_resolves_six_days_ahead() {
    let schedule = LessonSchedule::default();
    let next = resolve_next(&schedule, at(2025, 10, 18, 9, 0, 0));
    assert_eq!(next, regular(lesson(2025, 10, 24)));
}

#[test]
fn friday_before_lesson_time_resolves_to_today() {
    let schedule = LessonSchedule::default();
    let next = resolve_next(&schedule, at(2025, 10, 17, 7, 49, 59));
    assert_eq!(next, regular(lesson(2025, 10, 17)));
}

#[test]
fn friday_exactly_at_lesson_time_rolls_to_next_week() {
    let schedule = LessonSchedule::default();
    let next = resolve_next(&schedule, at(2025, 10, 17, 7, 50, 0));
    assert_eq!(next, regular(lesson(2025, 10, 24)));
}

#[test]
fn friday_after_lesson_time_rolls_to_next_week() {
    let schedule = LessonSchedule::default();
    let next = resolve_next(&schedule, at(2025, 10, 17, 23, 59, 59));
    assert_eq!(next, regular(lesson(2025, 10, 24)));
}

#[test]
fn resolution_crosses_year_boundary() {
    // 2025-12-31 is a Wednesday; 2026-01-02 is the next Friday.
    let schedule = LessonSchedule::default();
    let next = resolve_next(&schedule, at(2025, 12, 31, 18, 0, 0));
    assert_eq!(next, regular(lesson(2026, 1, 2)));
}

// ── Excluded dates ──────────────────────────────────────────────────────────

#[test]
fn friday_after_lesson_on_excluded_date_skips_to_following_week() {
    let schedule = LessonSchedule::default();
    let next = resolve_next(&schedule, at(2025, 2, 14, 8, 0, 0));
    assert_eq!(next, regular(lesson(2025, 2, 21)));
}

#[test]
fn excluded_friday_morning_is_skipped() {
    let schedule = LessonSchedule::default();
    let next = resolve_next(&schedule, at(2025, 2, 14, 6, 0, 0));
    assert_eq!(next, regular(lesson(2025, 2, 21)));
}

#[test]
fn thursday_before_excluded_friday_skips_a_week() {
    let schedule = LessonSchedule::default();
    assert_eq!(
        resolve_next(&schedule, at(2025, 3, 13, 10, 0, 0)),
        regular(lesson(2025, 3, 21))
    );
    assert_eq!(
        resolve_next(&schedule, at(2025, 3, 27, 10, 0, 0)),
        regular(lesson(2025, 4, 4))
    );
    assert_eq!(
        resolve_next(&schedule, at(2025, 5, 1, 10, 0, 0)),
        regular(lesson(2025, 5, 9))
    );
}

#[test]
fn consecutive_excluded_weeks_are_all_skipped() {
    let schedule =
        LessonSchedule::from_parts(Weekday::Fri, 7, 50, &[(3, 7), (3, 14)], (1, 10), (7, 5))
            .unwrap();
    let next = resolve_next(&schedule, at(2025, 3, 6, 12, 0, 0));
    assert_eq!(next, regular(lesson(2025, 3, 21)));
}

#[test]
fn exclusions_apply_in_every_year() {
    // 2031-02-14 is a Friday as well.
    let schedule = LessonSchedule::default();
    let next = resolve_next(&schedule, at(2031, 2, 12, 12, 0, 0));
    assert_eq!(next, regular(lesson(2031, 2, 21)));
}

// ── Special date ────────────────────────────────────────────────────────────

#[test]
fn special_date_before_lesson_time_is_flagged() {
    let schedule = LessonSchedule::default();
    let next = resolve_next(&schedule, at(2025, 1, 10, 7, 30, 0));
    assert_eq!(
        next,
        ResolvedOccurrence {
            instant: lesson(2025, 1, 10),
            is_special: true,
        }
    );
}

#[test]
fn special_date_seen_from_earlier_in_week_is_flagged() {
    let schedule = LessonSchedule::default();
    let next = resolve_next(&schedule, at(2025, 1, 4, 15, 0, 0));
    assert_eq!(next.instant, lesson(2025, 1, 10));
    assert!(next.is_special);
}

#[test]
fn after_special_lesson_next_one_is_regular() {
    let schedule = LessonSchedule::default();
    let next = resolve_next(&schedule, at(2025, 1, 10, 9, 0, 0));
    assert_eq!(next, regular(lesson(2025, 1, 17)));
}

#[test]
fn special_date_on_non_lesson_weekday_is_never_reported() {
    // 2026-01-10 is a Saturday.
    let schedule = LessonSchedule::default();
    let next = resolve_next(&schedule, at(2026, 1, 8, 12, 0, 0));
    assert_eq!(next, regular(lesson(2026, 1, 9)));
}

#[test]
fn exclusion_wins_over_special_on_the_same_date() {
    let schedule =
        LessonSchedule::from_parts(Weekday::Fri, 7, 50, &[(2, 14)], (2, 14), (7, 5)).unwrap();
    let next = resolve_next(&schedule, at(2025, 2, 13, 12, 0, 0));
    assert_eq!(next, regular(lesson(2025, 2, 21)));
}

// ── Other timetables ────────────────────────────────────────────────────────

#[test]
fn custom_weekday_and_time() {
    let schedule =
        LessonSchedule::from_parts(Weekday::Tue, 14, 15, &[], (12, 24), (7, 5)).unwrap();
    // 2025-10-16 is a Thursday.
    let next = resolve_next(&schedule, at(2025, 10, 16, 12, 0, 0));
    assert_eq!(next, regular(at(2025, 10, 21, 14, 15, 0)));
}

#[test]
fn resolve_is_idempotent_for_a_frozen_instant() {
    let schedule = LessonSchedule::default();
    let now = at(2025, 3, 12, 16, 45, 12);
    assert_eq!(resolve_next(&schedule, now), resolve_next(&schedule, now));
}

#[test]
fn resolved_occurrence_serializes_to_json() {
    let schedule = LessonSchedule::default();
    let next = resolve_next(&schedule, at(2025, 1, 9, 12, 0, 0));
    let json = serde_json::to_value(next).unwrap();
    assert_eq!(json["instant"], "2025-01-10T07:50:00");
    assert_eq!(json["is_special"], true);
}
