//! In-memory repository.

use chrono::NaiveDate;
use parking_lot::RwLock;
use uuid::Uuid;

use super::{AttendanceMark, AttendanceRepository};
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Course, SemesterConfig};

#[derive(Debug, Default)]
struct State {
    courses: Vec<Course>,
    records: Vec<AttendanceRecord>,
    semester: SemesterConfig,
    reconciled_until: Option<NaiveDate>,
}

impl State {
    fn require_course(&self, course_id: &str) -> EngineResult<()> {
        if self.courses.iter().any(|c| c.id == course_id) {
            Ok(())
        } else {
            Err(EngineError::CourseNotFound {
                course_id: course_id.to_string(),
            })
        }
    }
}

/// Repository holding everything in process memory.
///
/// # Example
///
/// ```
/// use attendance_engine::repository::{AttendanceRepository, InMemoryRepository};
/// use chrono::NaiveDate;
///
/// let repository = InMemoryRepository::new();
/// repository.set_semester_start(NaiveDate::from_ymd_opt(2025, 9, 15).unwrap());
/// assert!(repository.semester().semester_start.is_some());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    state: RwLock<State>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttendanceRepository for InMemoryRepository {
    fn courses(&self) -> Vec<Course> {
        self.state.read().courses.clone()
    }

    fn course(&self, course_id: &str) -> EngineResult<Course> {
        self.state
            .read()
            .courses
            .iter()
            .find(|c| c.id == course_id)
            .cloned()
            .ok_or_else(|| EngineError::CourseNotFound {
                course_id: course_id.to_string(),
            })
    }

    fn insert_course(&self, course: Course) -> EngineResult<()> {
        course.validate()?;

        let mut state = self.state.write();
        if state.courses.iter().any(|c| c.id == course.id) {
            return Err(EngineError::DuplicateCourse {
                course_id: course.id,
            });
        }
        state.courses.push(course);
        Ok(())
    }

    fn delete_course(&self, course_id: &str) -> EngineResult<usize> {
        let mut state = self.state.write();
        state.require_course(course_id)?;

        state.courses.retain(|c| c.id != course_id);
        let before = state.records.len();
        state.records.retain(|r| !r.belongs_to(course_id));
        Ok(before - state.records.len())
    }

    fn records(&self) -> Vec<AttendanceRecord> {
        self.state.read().records.clone()
    }

    fn records_for_course(&self, course_id: &str) -> Vec<AttendanceRecord> {
        self.state
            .read()
            .records
            .iter()
            .filter(|r| r.belongs_to(course_id))
            .cloned()
            .collect()
    }

    fn mark_attendance(&self, mark: AttendanceMark) -> EngineResult<AttendanceRecord> {
        let mut state = self.state.write();
        state.require_course(&mark.course_id)?;

        if let Some(existing) = state
            .records
            .iter_mut()
            .find(|r| r.occupies(&mark.course_id, mark.session_type, mark.date))
        {
            let mut updated = existing.clone();
            updated.hours = mark.hours;
            updated.status = mark.status;
            updated.note = mark.note;
            updated.auto_marked = false;
            updated.validate()?;
            *existing = updated.clone();
            return Ok(updated);
        }

        let record = AttendanceRecord {
            id: Uuid::new_v4().to_string(),
            course_id: mark.course_id,
            date: mark.date,
            session_type: mark.session_type,
            hours: mark.hours,
            status: mark.status,
            auto_marked: false,
            note: mark.note,
        };
        record.validate()?;
        state.records.push(record.clone());
        Ok(record)
    }

    fn insert_if_absent(&self, record: AttendanceRecord) -> EngineResult<bool> {
        record.validate()?;

        let mut state = self.state.write();
        state.require_course(&record.course_id)?;

        let taken = state
            .records
            .iter()
            .any(|r| r.occupies(&record.course_id, record.session_type, record.date));
        if taken {
            return Ok(false);
        }
        state.records.push(record);
        Ok(true)
    }

    fn delete_record(&self, record_id: &str) -> EngineResult<()> {
        let mut state = self.state.write();
        let before = state.records.len();
        state.records.retain(|r| r.id != record_id);
        if state.records.len() == before {
            return Err(EngineError::RecordNotFound {
                record_id: record_id.to_string(),
            });
        }
        Ok(())
    }

    fn semester(&self) -> SemesterConfig {
        self.state.read().semester
    }

    fn set_semester_start(&self, start: NaiveDate) {
        self.state.write().semester = SemesterConfig::starting(start);
    }

    fn reconciled_until(&self) -> Option<NaiveDate> {
        self.state.read().reconciled_until
    }

    fn set_reconciled_until(&self, date: NaiveDate) {
        self.state.write().reconciled_until = Some(date);
    }
}
