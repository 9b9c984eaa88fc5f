//! Dashboard models: per-course session tallies and the aggregated overview.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AttendanceCalculation, Course, SemesterProgress};

/// Counts of recorded sessions for a course, by outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTally {
    /// Sessions that took place (`attended + missed + excused`).
    pub held: u32,
    /// Sessions marked present.
    pub attended: u32,
    /// Sessions marked absent.
    pub missed: u32,
    /// Sessions with a medical report.
    pub excused: u32,
    /// Sessions that were cancelled.
    pub cancelled: u32,
    /// Sessions still pending.
    pub pending: u32,
    /// Hours of absent sessions, both types.
    pub missed_hours: Decimal,
}

/// One course on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseOverview {
    /// The course.
    pub course: Course,
    /// Its absence calculation.
    pub calculation: AttendanceCalculation,
    /// Its session counts.
    pub tally: SessionTally,
}

/// Semester progress plus every active course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// The date the dashboard was computed for.
    pub generated_for: NaiveDate,
    /// Semester position on that date.
    pub semester: SemesterProgress,
    /// Active courses in input order.
    pub courses: Vec<CourseOverview>,
    /// Ids of courses in danger on either session type.
    pub critical_courses: Vec<String>,
}
