//! Passive backfill of elapsed sessions.
//!
//! Sessions that took place without an attendance entry are marked absent
//! the next time reconciliation runs. A watermark records how far the last
//! run got, and each `(course, session type, date)` slot receives at most
//! one record, so running reconciliation again never duplicates anything.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, AttendanceStatus, Course, SEMESTER_LENGTH_WEEKS, SemesterConfig, SessionType,
};
use crate::repository::AttendanceRepository;

/// What a reconciliation run did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// First date examined, None when nothing was examined.
    pub checked_from: Option<NaiveDate>,
    /// The watermark after the run (exclusive upper bound of the dates examined).
    pub checked_until: NaiveDate,
    /// Records that were created.
    pub created: Vec<AttendanceRecord>,
}

/// Plans auto-absent records for the dates in `[since, today)`.
///
/// For every active course and every schedule slot falling on a date, one
/// `Absent` record is proposed unless the slot already has a record in
/// `existing` or earlier in the plan. Today is never included because its
/// sessions may still be ahead.
///
/// The window is clamped to the configured semester. Without one, only the
/// last 14 weeks before `today` are examined, so a far-off `today` cannot
/// make the plan walk the calendar.
///
/// # Examples
///
/// ```
/// use attendance_engine::models::{Course, ScheduleSlot, SemesterConfig, SessionType};
/// use attendance_engine::reconciliation::plan_backfill;
/// use chrono::{NaiveDate, Weekday};
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
///     schedule: vec![ScheduleSlot {
///         weekday: Weekday::Mon,
///         session_type: SessionType::Theory,
///         hours: Decimal::from(3),
///     }],
/// };
///
/// // 2025-09-22 and 2025-09-29 are Mondays
/// let planned = plan_backfill(
///     &[course],
///     &[],
///     NaiveDate::from_ymd_opt(2025, 9, 20).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
///     &SemesterConfig::default(),
///     "auto",
/// );
/// assert_eq!(planned.len(), 2);
/// assert!(planned.iter().all(|r| r.auto_marked));
/// ```
pub fn plan_backfill(
    courses: &[Course],
    existing: &[AttendanceRecord],
    since: NaiveDate,
    today: NaiveDate,
    semester: &SemesterConfig,
    note: &str,
) -> Vec<AttendanceRecord> {
    let (from, until) = backfill_window(since, today, semester);
    let mut occupied: HashSet<(&str, SessionType, NaiveDate)> = existing
        .iter()
        .map(|r| (r.course_id.as_str(), r.session_type, r.date))
        .collect();
    let mut planned: Vec<AttendanceRecord> = Vec::new();

    for date in from.iter_days().take_while(|d| *d < until) {
        let weekday = date.weekday();
        for course in courses.iter().filter(|c| c.is_active) {
            for slot in course.slots_on(weekday) {
                if !occupied.insert((course.id.as_str(), slot.session_type, date)) {
                    continue;
                }

                planned.push(AttendanceRecord {
                    id: format!("auto-{}-{}-{}", course.id, slot.session_type.as_str(), date),
                    course_id: course.id.clone(),
                    date,
                    session_type: slot.session_type,
                    hours: slot.hours,
                    status: AttendanceStatus::Absent,
                    auto_marked: true,
                    note: Some(note.to_string()),
                });
            }
        }
    }

    planned
}

/// Returns the half-open range of dates backfill may examine.
fn backfill_window(
    since: NaiveDate,
    today: NaiveDate,
    semester: &SemesterConfig,
) -> (NaiveDate, NaiveDate) {
    match (semester.semester_start, semester.semester_end()) {
        (Some(start), Some(end)) => {
            let after_end = end.succ_opt().unwrap_or(end);
            (since.max(start), today.min(after_end))
        }
        _ => {
            let floor = today
                .checked_sub_signed(Duration::weeks(i64::from(SEMESTER_LENGTH_WEEKS)))
                .unwrap_or(NaiveDate::MIN);
            (since.max(floor), today)
        }
    }
}

/// Runs backfill reconciliation against a repository up to `today`.
///
/// The first run only sets the watermark. Later runs examine every date from
/// the watermark up to yesterday, insert the planned records with a
/// lookup-before-insert, and advance the watermark to `today`.
pub fn reconcile_absences(
    repository: &dyn AttendanceRepository,
    today: NaiveDate,
    note: &str,
) -> EngineResult<ReconciliationReport> {
    let Some(since) = repository.reconciled_until() else {
        repository.set_reconciled_until(today);
        info!(watermark = %today, "Reconciliation watermark initialised");
        return Ok(ReconciliationReport {
            checked_from: None,
            checked_until: today,
            created: vec![],
        });
    };

    if since >= today {
        debug!(watermark = %since, "Reconciliation already up to date");
        return Ok(ReconciliationReport {
            checked_from: None,
            checked_until: since,
            created: vec![],
        });
    }

    let planned = plan_backfill(
        &repository.courses(),
        &repository.records(),
        since,
        today,
        &repository.semester(),
        note,
    );

    let mut created = Vec::with_capacity(planned.len());
    for record in planned {
        if repository.insert_if_absent(record.clone())? {
            created.push(record);
        }
    }

    repository.set_reconciled_until(today);
    info!(
        checked_from = %since,
        checked_until = %today,
        created = created.len(),
        "Reconciliation completed"
    );

    Ok(ReconciliationReport {
        checked_from: Some(since),
        checked_until: today,
        created,
    })
}
