//! Request types for the Attendance Budget Engine API.
//!
//! Bodies are deserialized into these shapes and converted into domain
//! types before anything reaches the calculators or the repository.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ConfigLoader;
use crate::models::{AttendanceRecord, AttendanceStatus, Course, ScheduleSlot, SessionType};
use crate::repository::AttendanceMark;

/// Request body for the stateless `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The course to calculate.
    pub course: Course,
    /// Attendance records. Records of other courses are ignored.
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
    /// Semester length in weeks. Defaults to 14.
    #[serde(default)]
    pub total_weeks: Option<u32>,
}

/// Request body for the stateless `/semester/progress` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SemesterProgressRequest {
    /// The semester start date, if configured.
    #[serde(default)]
    pub semester_start: Option<NaiveDate>,
    /// The date to evaluate. Defaults to the server's current date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Request body for creating a course.
///
/// Limit percents that are left out come from the policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRequest {
    /// Unique course identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional catalogue code.
    #[serde(default)]
    pub course_code: Option<String>,
    /// Weekly theory hours.
    #[serde(default)]
    pub weekly_theory_hours: u32,
    /// Weekly practice hours.
    #[serde(default)]
    pub weekly_practice_hours: u32,
    /// Theory absence limit override.
    #[serde(default)]
    pub theory_limit_percent: Option<Decimal>,
    /// Practice absence limit override.
    #[serde(default)]
    pub practice_limit_percent: Option<Decimal>,
    /// Whether the course is followed.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Weekly timetable.
    #[serde(default)]
    pub schedule: Vec<ScheduleSlot>,
}

fn default_active() -> bool {
    true
}

impl CourseRequest {
    /// Builds the course, filling missing limits from the policy.
    pub fn into_course(self, config: &ConfigLoader) -> Course {
        Course {
            id: self.id,
            name: self.name,
            course_code: self.course_code,
            weekly_theory_hours: self.weekly_theory_hours,
            weekly_practice_hours: self.weekly_practice_hours,
            theory_limit_percent: self
                .theory_limit_percent
                .unwrap_or_else(|| config.default_limit_percent(SessionType::Theory)),
            practice_limit_percent: self
                .practice_limit_percent
                .unwrap_or_else(|| config.default_limit_percent(SessionType::Practice)),
            is_active: self.is_active,
            schedule: self.schedule,
        }
    }
}

/// Request body for marking attendance on a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// The session date.
    pub date: NaiveDate,
    /// Theory or practice.
    pub session_type: SessionType,
    /// Hours covered.
    pub hours: Decimal,
    /// The outcome.
    pub status: AttendanceStatus,
    /// Optional note.
    #[serde(default)]
    pub note: Option<String>,
}

impl AttendanceRequest {
    /// Attaches the course id taken from the path.
    pub fn into_mark(self, course_id: String) -> AttendanceMark {
        AttendanceMark {
            course_id,
            date: self.date,
            session_type: self.session_type,
            hours: self.hours,
            status: self.status,
            note: self.note,
        }
    }
}

/// Request body for `PUT /semester`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterRequest {
    /// First day of the semester.
    pub semester_start: NaiveDate,
}

/// Query parameters accepted by date-dependent endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateQuery {
    /// Overrides the server's current date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}
