//! Attendance record model.
//!
//! An attendance record is one observed or declared event for a course on a
//! date. Only records with [`AttendanceStatus::Absent`] consume absence budget.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SessionType;
use crate::error::{EngineError, EngineResult};

/// Upper bound on the hours a single session may cover.
pub const MAX_SESSION_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// The outcome recorded for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Not yet decided.
    Pending,
    /// The student attended.
    Present,
    /// The student missed the session. Counts against the limit.
    Absent,
    /// The session did not take place (holiday, cancellation).
    Cancelled,
    /// Medically excused absence.
    Report,
}

impl AttendanceStatus {
    /// Returns true if the status consumes absence budget.
    pub fn counts_against_limit(&self) -> bool {
        matches!(self, AttendanceStatus::Absent)
    }
}

/// One attendance event for a course.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceRecord, AttendanceStatus, SessionType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord {
///     id: "log_001".to_string(),
///     course_id: "bil101".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 9, 22).unwrap(),
///     session_type: SessionType::Theory,
///     hours: Decimal::new(2, 0),
///     status: AttendanceStatus::Absent,
///     auto_marked: false,
///     note: None,
/// };
/// assert!(record.is_absence());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The course this record belongs to.
    pub course_id: String,
    /// The calendar date of the session.
    pub date: NaiveDate,
    /// Which weekly allotment the record applies against.
    pub session_type: SessionType,
    /// Hours this record represents. May differ from the weekly default.
    pub hours: Decimal,
    /// The recorded outcome.
    pub status: AttendanceStatus,
    /// True if the record was created by backfill reconciliation.
    #[serde(default)]
    pub auto_marked: bool,
    /// Optional free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AttendanceRecord {
    /// Returns true if this record consumes absence budget.
    pub fn is_absence(&self) -> bool {
        self.status.counts_against_limit()
    }

    /// Returns true if the record belongs to the given course.
    pub fn belongs_to(&self, course_id: &str) -> bool {
        self.course_id == course_id
    }

    /// Returns true if this record occupies the given `(course, type, date)` slot.
    ///
    /// At most one record may exist per slot.
    pub fn occupies(&self, course_id: &str, session_type: SessionType, date: NaiveDate) -> bool {
        self.course_id == course_id && self.session_type == session_type && self.date == date
    }

    /// Checks the record before it is stored.
    pub fn validate(&self) -> EngineResult<()> {
        if self.course_id.trim().is_empty() {
            return Err(EngineError::InvalidAttendance {
                field: "course_id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.hours <= Decimal::ZERO {
            return Err(EngineError::InvalidAttendance {
                field: "hours".to_string(),
                message: format!("{} must be greater than zero", self.hours),
            });
        }
        if self.hours > MAX_SESSION_HOURS {
            return Err(EngineError::InvalidAttendance {
                field: "hours".to_string(),
                message: format!("{} exceeds {} hours", self.hours, MAX_SESSION_HOURS),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_test_record(status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: "log_001".to_string(),
            course_id: "bil101".to_string(),
            date: make_date("2025-09-22"),
            session_type: SessionType::Theory,
            hours: Decimal::new(3, 0),
            status,
            auto_marked: false,
            note: None,
        }
    }

    /// AR-001: only absent counts against the limit
    #[test]
    fn test_only_absent_counts_against_limit() {
        assert!(AttendanceStatus::Absent.counts_against_limit());
        assert!(!AttendanceStatus::Present.counts_against_limit());
        assert!(!AttendanceStatus::Pending.counts_against_limit());
        assert!(!AttendanceStatus::Cancelled.counts_against_limit());
        assert!(!AttendanceStatus::Report.counts_against_limit());
    }

    #[test]
    fn test_occupies_matches_course_type_and_date() {
        let record = create_test_record(AttendanceStatus::Present);
        let date = make_date("2025-09-22");

        assert!(record.occupies("bil101", SessionType::Theory, date));
        assert!(!record.occupies("bil101", SessionType::Practice, date));
        assert!(!record.occupies("fiz101", SessionType::Theory, date));
        assert!(!record.occupies("bil101", SessionType::Theory, make_date("2025-09-23")));
    }

    /// AR-002: zero hours rejected
    #[test]
    fn test_zero_hours_is_rejected() {
        let mut record = create_test_record(AttendanceStatus::Absent);
        record.hours = Decimal::ZERO;

        match record.validate() {
            Err(EngineError::InvalidAttendance { field, .. }) => assert_eq!(field, "hours"),
            other => panic!("Expected InvalidAttendance error, got {:?}", other),
        }
    }

    /// AR-003: a session cannot last longer than a day
    #[test]
    fn test_hours_above_a_day_are_rejected() {
        let mut record = create_test_record(AttendanceStatus::Absent);
        record.hours = MAX_SESSION_HOURS;
        assert!(record.validate().is_ok());

        record.hours = Decimal::from_str_exact("50000000000000000000000000000").unwrap();
        match record.validate() {
            Err(EngineError::InvalidAttendance { field, .. }) => assert_eq!(field, "hours"),
            other => panic!("Expected InvalidAttendance, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_session_hours_are_valid() {
        let mut record = create_test_record(AttendanceStatus::Absent);
        record.hours = Decimal::new(15, 1);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_record_deserialization() {
        let json = r#"{
            "id": "log_002",
            "course_id": "bil101",
            "date": "2025-10-06",
            "session_type": "U",
            "hours": 2,
            "status": "cancelled"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.session_type, SessionType::Practice);
        assert_eq!(record.status, AttendanceStatus::Cancelled);
        assert!(!record.auto_marked);
        assert!(record.note.is_none());
        assert!(!record.is_absence());
    }

    #[test]
    fn test_note_is_skipped_when_absent() {
        let record = create_test_record(AttendanceStatus::Report);
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("note"));
        assert!(json.contains("\"status\":\"report\""));
    }
}
