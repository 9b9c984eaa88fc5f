//! Storage interface for courses, attendance records and account settings.
//!
//! The calculators never touch a repository. Callers read plain data out of
//! it and pass that data in, so calculations stay testable in isolation.

mod memory;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, AttendanceStatus, Course, SemesterConfig, SessionType};

pub use memory::InMemoryRepository;

/// A user's attendance entry for one session.
///
/// Marking the same `(course, session type, date)` again replaces the
/// earlier entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceMark {
    /// The course the entry is for.
    pub course_id: String,
    /// The session date.
    pub date: NaiveDate,
    /// Theory or practice.
    pub session_type: SessionType,
    /// Hours the entry covers.
    pub hours: Decimal,
    /// The recorded outcome.
    pub status: AttendanceStatus,
    /// Optional free-text note.
    #[serde(default)]
    pub note: Option<String>,
}

/// Access to the stored courses, records and settings of one account.
///
/// Implementations hand out owned copies, so a caller never observes a
/// half-applied write.
pub trait AttendanceRepository: Send + Sync {
    /// Returns all courses in insertion order.
    fn courses(&self) -> Vec<Course>;

    /// Returns one course.
    fn course(&self, course_id: &str) -> EngineResult<Course>;

    /// Stores a new course. Fails if the id is taken.
    fn insert_course(&self, course: Course) -> EngineResult<()>;

    /// Deletes a course and all of its records, returning how many records went with it.
    fn delete_course(&self, course_id: &str) -> EngineResult<usize>;

    /// Returns all records.
    fn records(&self) -> Vec<AttendanceRecord>;

    /// Returns the records of one course.
    fn records_for_course(&self, course_id: &str) -> Vec<AttendanceRecord>;

    /// Creates or replaces the record for the mark's `(course, type, date)` slot.
    fn mark_attendance(&self, mark: AttendanceMark) -> EngineResult<AttendanceRecord>;

    /// Stores the record unless its slot is already taken.
    ///
    /// Returns true if the record was stored.
    fn insert_if_absent(&self, record: AttendanceRecord) -> EngineResult<bool>;

    /// Deletes one record.
    fn delete_record(&self, record_id: &str) -> EngineResult<()>;

    /// Returns the semester setting.
    fn semester(&self) -> SemesterConfig;

    /// Sets the semester start date.
    fn set_semester_start(&self, start: NaiveDate);

    /// Returns the date backfill reconciliation last ran up to.
    fn reconciled_until(&self) -> Option<NaiveDate>;

    /// Advances the reconciliation watermark.
    fn set_reconciled_until(&self, date: NaiveDate);
}
