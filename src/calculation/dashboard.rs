//! Dashboard aggregation.
//!
//! Combines semester progress with the calculation and session tally of every
//! active course.

use chrono::NaiveDate;

use crate::models::{AttendanceRecord, Course, CourseOverview, Dashboard, SemesterConfig};

use super::course_attendance::calculate_course_attendance;
use super::semester_progress::calculate_semester_progress;
use super::session_tally::tally_sessions;

/// Builds the dashboard for the given day.
///
/// Inactive courses are left out. Budgets use the semester's week count.
pub fn build_dashboard(
    courses: &[Course],
    records: &[AttendanceRecord],
    semester: &SemesterConfig,
    today: NaiveDate,
) -> Dashboard {
    let progress = calculate_semester_progress(semester, today);

    let overviews: Vec<CourseOverview> = courses
        .iter()
        .filter(|c| c.is_active)
        .map(|course| CourseOverview {
            course: course.clone(),
            calculation: calculate_course_attendance(course, records, progress.total_weeks),
            tally: tally_sessions(course, records),
        })
        .collect();

    let critical_courses = overviews
        .iter()
        .filter(|o| o.calculation.is_critical)
        .map(|o| o.course.id.clone())
        .collect();

    Dashboard {
        generated_for: today,
        semester: progress,
        courses: overviews,
        critical_courses,
    }
}
