//! Per-course absence calculation.
//!
//! This module combines the theory and practice budgets of a course into an
//! [`AttendanceCalculation`].

use crate::models::{
    AttendanceCalculation, AttendanceRecord, Course, RiskStatus, SEMESTER_LENGTH_WEEKS,
    SessionType,
};

use super::session_budget::{SessionBudgetResult, calculate_session_budget, sum_absent_hours};

/// Semester length used when the account has no semester configured.
pub const DEFAULT_TOTAL_WEEKS: u32 = SEMESTER_LENGTH_WEEKS;

/// Calculates the absence budgets of a course.
///
/// `records` may contain records of other courses; only those whose
/// `course_id` matches `course.id` are considered, so callers can pass an
/// unfiltered list. Only `Absent` records consume budget.
///
/// Callers should pass a positive `total_weeks`. With zero weeks every budget
/// is empty and every status is safe.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::{calculate_course_attendance, DEFAULT_TOTAL_WEEKS};
/// use attendance_engine::models::{
///     AttendanceRecord, AttendanceStatus, Course, RiskStatus, SessionType,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let course = Course {
///     id: "bil101".to_string(),
///     name: "Programlamaya Giris".to_string(),
///     course_code: None,
///     weekly_theory_hours: 3,
///     weekly_practice_hours: 0,
///     theory_limit_percent: Decimal::from(30),
///     practice_limit_percent: Decimal::from(20),
///     is_active: true,
///     schedule: vec![],
/// };
///
/// let records: Vec<AttendanceRecord> = (1..=3)
///     .map(|week| AttendanceRecord {
///         id: format!("log_{}", week),
///         course_id: "bil101".to_string(),
///         date: NaiveDate::from_ymd_opt(2025, 10, 7 * week).unwrap(),
///         session_type: SessionType::Theory,
///         hours: Decimal::from(3),
///         status: AttendanceStatus::Absent,
///         auto_marked: false,
///         note: None,
///     })
///     .collect();
///
/// let result = calculate_course_attendance(&course, &records, DEFAULT_TOTAL_WEEKS);
/// assert_eq!(result.theory.max_absent_hours, Decimal::from(13));
/// assert_eq!(result.theory.remaining_hours, Decimal::from(4));
/// assert_eq!(result.theory.status, RiskStatus::Warning);
/// assert!(!result.is_critical);
/// ```
pub fn calculate_course_attendance(
    course: &Course,
    records: &[AttendanceRecord],
    total_weeks: u32,
) -> AttendanceCalculation {
    let theory = budget_for(course, records, SessionType::Theory, total_weeks, 1);
    let practice = budget_for(course, records, SessionType::Practice, total_weeks, 2);

    let is_critical =
        theory.budget.status == RiskStatus::Danger || practice.budget.status == RiskStatus::Danger;

    AttendanceCalculation {
        course_id: course.id.clone(),
        total_weeks,
        theory: theory.budget,
        practice: practice.budget,
        is_critical,
        audit_steps: vec![theory.audit_step, practice.audit_step],
    }
}

fn budget_for(
    course: &Course,
    records: &[AttendanceRecord],
    session_type: SessionType,
    total_weeks: u32,
    step_number: u32,
) -> SessionBudgetResult {
    calculate_session_budget(
        session_type,
        course.weekly_hours(session_type),
        course.limit_percent(session_type),
        sum_absent_hours(records, &course.id, session_type),
        total_weeks,
        step_number,
    )
}
