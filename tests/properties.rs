//! Property-based tests for the attendance calculators using proptest.
//!
//! These tests check invariants that hold for any course and any set of
//! records, not just the worked examples in the unit tests.

use std::collections::HashSet;

use attendance_engine::calculation::{
    DEFAULT_TOTAL_WEEKS, calculate_course_attendance, calculate_semester_progress, classify_usage,
};
use attendance_engine::models::{
    AttendanceRecord, AttendanceStatus, Course, RiskStatus, SEMESTER_LENGTH_WEEKS, ScheduleSlot,
    SemesterConfig, SessionType,
};
use attendance_engine::reconciliation::plan_backfill;
use chrono::{Duration, NaiveDate, Weekday};
use proptest::prelude::*;
use rust_decimal::Decimal;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_session_type() -> impl Strategy<Value = SessionType> {
    prop_oneof![Just(SessionType::Theory), Just(SessionType::Practice)]
}

fn arb_status() -> impl Strategy<Value = AttendanceStatus> {
    prop_oneof![
        Just(AttendanceStatus::Pending),
        Just(AttendanceStatus::Present),
        Just(AttendanceStatus::Absent),
        Just(AttendanceStatus::Cancelled),
        Just(AttendanceStatus::Report),
    ]
}

fn arb_weekday() -> impl Strategy<Value = Weekday> {
    prop_oneof![
        Just(Weekday::Mon),
        Just(Weekday::Tue),
        Just(Weekday::Wed),
        Just(Weekday::Thu),
        Just(Weekday::Fri),
        Just(Weekday::Sat),
        Just(Weekday::Sun),
    ]
}

/// Half-hour steps between 0.5 and 4.
fn arb_hours() -> impl Strategy<Value = Decimal> {
    (1i64..=8).prop_map(|halves| Decimal::new(halves * 5, 1))
}

/// Dates across autumn 2025 and spring 2026.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..240).prop_map(|offset| base_date() + Duration::days(offset))
}

fn arb_course() -> impl Strategy<Value = Course> {
    (
        0u32..=6,
        0u32..=6,
        0u32..=100,
        0u32..=100,
        prop::collection::vec((arb_weekday(), arb_session_type(), arb_hours()), 0..4),
    )
        .prop_map(|(theory, practice, theory_limit, practice_limit, slots)| Course {
            id: "bil101".to_string(),
            name: "Programlama".to_string(),
            course_code: None,
            weekly_theory_hours: theory,
            weekly_practice_hours: practice,
            theory_limit_percent: Decimal::from(theory_limit),
            practice_limit_percent: Decimal::from(practice_limit),
            is_active: true,
            schedule: slots
                .into_iter()
                .map(|(weekday, session_type, hours)| ScheduleSlot {
                    weekday,
                    session_type,
                    hours,
                })
                .collect(),
        })
}

fn arb_records() -> impl Strategy<Value = Vec<AttendanceRecord>> {
    prop::collection::vec(
        (
            prop_oneof![Just("bil101"), Just("fiz101")],
            arb_date(),
            arb_session_type(),
            arb_hours(),
            arb_status(),
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (course_id, date, session_type, hours, status))| AttendanceRecord {
                id: format!("log_{}", i),
                course_id: course_id.to_string(),
                date,
                session_type,
                hours,
                status,
                auto_marked: false,
                note: None,
            })
            .collect()
    })
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

// ---------------------------------------------------------------------------
// Calculator properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn remaining_is_never_negative(course in arb_course(), records in arb_records()) {
        let result = calculate_course_attendance(&course, &records, DEFAULT_TOTAL_WEEKS);

        for budget in [&result.theory, &result.practice] {
            prop_assert!(budget.remaining_hours >= Decimal::ZERO);
            let expected = (budget.max_absent_hours - budget.current_absent_hours).max(Decimal::ZERO);
            prop_assert_eq!(budget.remaining_hours, expected);
        }
    }

    #[test]
    fn usage_is_not_clamped(course in arb_course(), records in arb_records()) {
        let result = calculate_course_attendance(&course, &records, DEFAULT_TOTAL_WEEKS);

        for budget in [&result.theory, &result.practice] {
            prop_assert!(budget.usage_percent >= Decimal::ZERO);
            if budget.max_absent_hours > Decimal::ZERO {
                prop_assert_eq!(
                    budget.usage_percent > Decimal::ONE_HUNDRED,
                    budget.current_absent_hours > budget.max_absent_hours
                );
            }
        }
    }

    #[test]
    fn status_follows_usage(course in arb_course(), records in arb_records()) {
        let result = calculate_course_attendance(&course, &records, DEFAULT_TOTAL_WEEKS);

        prop_assert_eq!(result.theory.status, classify_usage(result.theory.usage_percent));
        prop_assert_eq!(result.practice.status, classify_usage(result.practice.usage_percent));
        prop_assert_eq!(
            result.is_critical,
            result.theory.status == RiskStatus::Danger || result.practice.status == RiskStatus::Danger
        );
    }

    #[test]
    fn only_absences_count(course in arb_course(), records in arb_records()) {
        let absences: Vec<AttendanceRecord> = records
            .iter()
            .filter(|r| r.status == AttendanceStatus::Absent)
            .cloned()
            .collect();

        let all = calculate_course_attendance(&course, &records, DEFAULT_TOTAL_WEEKS);
        let only_absent = calculate_course_attendance(&course, &absences, DEFAULT_TOTAL_WEEKS);

        prop_assert_eq!(all.theory, only_absent.theory);
        prop_assert_eq!(all.practice, only_absent.practice);
    }

    #[test]
    fn calculation_is_idempotent(course in arb_course(), records in arb_records()) {
        let first = calculate_course_attendance(&course, &records, DEFAULT_TOTAL_WEEKS);
        let second = calculate_course_attendance(&course, &records, DEFAULT_TOTAL_WEEKS);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn zero_weekly_hours_is_always_safe(mut course in arb_course(), records in arb_records()) {
        course.weekly_theory_hours = 0;
        let result = calculate_course_attendance(&course, &records, DEFAULT_TOTAL_WEEKS);

        prop_assert_eq!(result.theory.max_absent_hours, Decimal::ZERO);
        prop_assert_eq!(result.theory.usage_percent, Decimal::ZERO);
        prop_assert_eq!(result.theory.status, RiskStatus::Safe);
    }
}

// ---------------------------------------------------------------------------
// Semester progress properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn progress_stays_in_range(start in arb_date(), today in arb_date()) {
        let progress = calculate_semester_progress(&SemesterConfig::starting(start), today);

        prop_assert!(progress.current_week <= SEMESTER_LENGTH_WEEKS);
        prop_assert!(progress.progress_percent <= 100);
        prop_assert_eq!(progress.total_weeks, SEMESTER_LENGTH_WEEKS);
        prop_assert_eq!(progress.has_started, today >= start);
        if progress.has_started {
            prop_assert!(progress.current_week >= 1);
            prop_assert_eq!(progress.weeks_remaining, SEMESTER_LENGTH_WEEKS - progress.current_week);
        } else {
            prop_assert_eq!(progress.current_week, 0);
            prop_assert!(progress.days_until_start > 0);
        }
    }
}

// ---------------------------------------------------------------------------
// Backfill properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn backfill_creates_at_most_one_record_per_slot(
        course in arb_course(),
        existing in arb_records(),
        since in arb_date(),
        span in 0i64..60,
    ) {
        let today = since + Duration::days(span);
        let planned = plan_backfill(
            std::slice::from_ref(&course),
            &existing,
            since,
            today,
            &SemesterConfig::default(),
            "auto",
        );

        let mut seen = HashSet::new();
        for record in &planned {
            prop_assert!(seen.insert((record.session_type, record.date)));
            prop_assert!(record.date >= since && record.date < today);
            prop_assert!(record.auto_marked);
            prop_assert!(!existing
                .iter()
                .any(|e| e.occupies(&course.id, record.session_type, record.date)));
        }
    }

    #[test]
    fn backfill_stays_inside_semester(
        course in arb_course(),
        start in arb_date(),
        since in arb_date(),
        span in 0i64..120,
    ) {
        let semester = SemesterConfig::starting(start);
        let planned = plan_backfill(
            std::slice::from_ref(&course),
            &[],
            since,
            since + Duration::days(span),
            &semester,
            "auto",
        );

        prop_assert!(planned.iter().all(|r| semester.contains(r.date)));
    }

    #[test]
    fn backfill_replay_plans_nothing(course in arb_course(), since in arb_date(), span in 0i64..60) {
        let today = since + Duration::days(span);
        let semester = SemesterConfig::default();
        let first = plan_backfill(std::slice::from_ref(&course), &[], since, today, &semester, "auto");
        let second = plan_backfill(std::slice::from_ref(&course), &first, since, today, &semester, "auto");
        prop_assert!(second.is_empty());
    }
}
