//! Semester progress calculation.
//!
//! Positions a date within the fixed 14-week semester window anchored at the
//! configured start date. All comparisons are made on calendar dates.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::absence_budget::round_half_up;
use crate::models::{SEMESTER_LENGTH_WEEKS, SemesterConfig, SemesterProgress};

/// Calculates semester progress for the given day.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_semester_progress;
/// use attendance_engine::models::SemesterConfig;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
/// let progress = calculate_semester_progress(&SemesterConfig::starting(start), start);
///
/// assert!(progress.has_started);
/// assert_eq!(progress.current_week, 1);
/// assert_eq!(progress.progress_percent, 7);
/// ```
pub fn calculate_semester_progress(config: &SemesterConfig, today: NaiveDate) -> SemesterProgress {
    let total_weeks = SEMESTER_LENGTH_WEEKS;

    let (Some(start), Some(end)) = (config.semester_start, config.semester_end()) else {
        return SemesterProgress {
            total_weeks,
            current_week: 0,
            weeks_remaining: total_weeks,
            is_completed: false,
            has_started: false,
            progress_percent: 0,
            days_until_start: 0,
            semester_end: None,
        };
    };

    let has_started = today >= start;
    let is_completed = today > end;

    let days_until_start = if has_started {
        0
    } else {
        u32::try_from((start - today).num_days()).unwrap_or(u32::MAX)
    };

    let current_week = if !has_started {
        0
    } else if is_completed {
        total_weeks
    } else {
        let elapsed_weeks = (today - start).num_days() / 7;
        // Clamp covers the end date itself, which is day 98 (week 15).
        u32::try_from(elapsed_weeks + 1)
            .unwrap_or(total_weeks)
            .clamp(1, total_weeks)
    };

    let progress_percent = if has_started {
        percent_of(current_week, total_weeks).min(100)
    } else {
        0
    };

    SemesterProgress {
        total_weeks,
        current_week,
        weeks_remaining: total_weeks.saturating_sub(current_week),
        is_completed,
        has_started,
        progress_percent,
        days_until_start,
        semester_end: Some(end),
    }
}

/// Calculates semester progress for a timestamp, ignoring its time of day.
pub fn calculate_semester_progress_at(
    config: &SemesterConfig,
    now: NaiveDateTime,
) -> SemesterProgress {
    calculate_semester_progress(config, now.date())
}

fn percent_of(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let percent = Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole);
    round_half_up(percent).to_u32().unwrap_or(100)
}
