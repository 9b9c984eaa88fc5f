//! Semester configuration and progress models.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Length of every semester in weeks. Not user-configurable.
pub const SEMESTER_LENGTH_WEEKS: u32 = 14;

/// Account-wide semester setting.
///
/// Only the start date is stored; the end date is always derived from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterConfig {
    /// First day of the semester, if configured.
    #[serde(default)]
    pub semester_start: Option<NaiveDate>,
}

impl SemesterConfig {
    /// Creates a config starting on the given date.
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            semester_start: Some(start),
        }
    }

    /// Returns `semester_start + 14 weeks`, or None when unset.
    ///
    /// Saturates at `NaiveDate::MAX` for starts near the end of the calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::SemesterConfig;
    /// use chrono::NaiveDate;
    ///
    /// let config = SemesterConfig::starting(NaiveDate::from_ymd_opt(2025, 9, 15).unwrap());
    /// assert_eq!(config.semester_end(), NaiveDate::from_ymd_opt(2025, 12, 22));
    /// ```
    pub fn semester_end(&self) -> Option<NaiveDate> {
        self.semester_start.map(|start| {
            start
                .checked_add_signed(Duration::weeks(i64::from(SEMESTER_LENGTH_WEEKS)))
                .unwrap_or(NaiveDate::MAX)
        })
    }

    /// Returns true if the date lies within `[start, end]`.
    ///
    /// An unconfigured semester contains every date.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.semester_start, self.semester_end()) {
            (Some(start), Some(end)) => date >= start && date <= end,
            _ => true,
        }
    }
}

/// Calendar-derived position of a date within the semester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterProgress {
    /// Semester length in weeks (always 14).
    pub total_weeks: u32,
    /// 1-indexed current week, 0 before the start.
    pub current_week: u32,
    /// Weeks left after the current one.
    pub weeks_remaining: u32,
    /// True once the date is past the semester end.
    pub is_completed: bool,
    /// True once the date is on or after the start.
    pub has_started: bool,
    /// Rounded share of weeks elapsed, 0-100.
    pub progress_percent: u32,
    /// Days until the start, 0 once started.
    pub days_until_start: u32,
    /// Derived end date, None when the start is unset.
    pub semester_end: Option<NaiveDate>,
}
