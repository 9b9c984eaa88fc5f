//! Session counts per course.

use crate::models::{AttendanceRecord, AttendanceStatus, Course, SessionTally};

/// Counts the recorded sessions of a course by outcome.
///
/// Records of other courses are skipped, as in the absence calculation.
pub fn tally_sessions(course: &Course, records: &[AttendanceRecord]) -> SessionTally {
    let mut tally = records
        .iter()
        .filter(|r| r.belongs_to(&course.id))
        .fold(SessionTally::default(), |mut tally, record| {
            match record.status {
                AttendanceStatus::Present => tally.attended += 1,
                AttendanceStatus::Absent => {
                    tally.missed += 1;
                    tally.missed_hours = tally.missed_hours.saturating_add(record.hours);
                }
                AttendanceStatus::Report => tally.excused += 1,
                AttendanceStatus::Cancelled => tally.cancelled += 1,
                AttendanceStatus::Pending => tally.pending += 1,
            }
            tally
        });

    tally.held = tally.attended + tally.missed + tally.excused;
    tally
}
