//! Course model and related types.
//!
//! This module defines the Course struct with its weekly theory (T) and
//! practice (U) allotments, their absence limits, and the weekly schedule
//! used by backfill reconciliation.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MAX_SESSION_HOURS;
use crate::error::{EngineError, EngineResult};

/// The two weekly session categories a course may schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// Theory hours ("T", teorik).
    #[serde(alias = "T")]
    Theory,
    /// Practice hours ("U", uygulama).
    #[serde(alias = "U")]
    Practice,
}

impl SessionType {
    /// Returns the snake_case name used in audit output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Theory => "theory",
            SessionType::Practice => "practice",
        }
    }
}

/// A weekly recurring session of a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    /// The day of the week the session takes place.
    pub weekday: Weekday,
    /// Which weekly allotment the session belongs to.
    pub session_type: SessionType,
    /// Hours the session lasts.
    pub hours: Decimal,
}

fn default_active() -> bool {
    true
}

/// A course with its weekly hour allotments and absence policy.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{Course, SessionType};
/// use rust_decimal::Decimal;
///
/// let course = Course {
///     id: "bil101".to_string(),
///     name: "Programlamaya Giris".to_string(),
///     course_code: Some("BIL101".to_string()),
///     weekly_theory_hours: 3,
///     weekly_practice_hours: 2,
///     theory_limit_percent: Decimal::new(30, 0),
///     practice_limit_percent: Decimal::new(20, 0),
///     is_active: true,
///     schedule: vec![],
/// };
/// assert_eq!(course.weekly_hours(SessionType::Practice), 2);
/// assert!(course.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier for the course.
    pub id: String,
    /// Display name of the course.
    pub name: String,
    /// Optional institutional course code.
    #[serde(default)]
    pub course_code: Option<String>,
    /// Scheduled theory hours per week.
    pub weekly_theory_hours: u32,
    /// Scheduled practice hours per week.
    pub weekly_practice_hours: u32,
    /// Share of total theory hours that may be missed, 0-100.
    pub theory_limit_percent: Decimal,
    /// Share of total practice hours that may be missed, 0-100.
    pub practice_limit_percent: Decimal,
    /// Inactive courses are left off the dashboard.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Weekly sessions, consumed only by backfill reconciliation.
    #[serde(default)]
    pub schedule: Vec<ScheduleSlot>,
}

impl Course {
    /// Returns the weekly hours scheduled for a session type.
    pub fn weekly_hours(&self, session_type: SessionType) -> u32 {
        match session_type {
            SessionType::Theory => self.weekly_theory_hours,
            SessionType::Practice => self.weekly_practice_hours,
        }
    }

    /// Returns the absence limit percentage for a session type.
    pub fn limit_percent(&self, session_type: SessionType) -> Decimal {
        match session_type {
            SessionType::Theory => self.theory_limit_percent,
            SessionType::Practice => self.practice_limit_percent,
        }
    }

    /// Returns the schedule slots falling on the given weekday.
    pub fn slots_on(&self, weekday: Weekday) -> impl Iterator<Item = &ScheduleSlot> {
        self.schedule.iter().filter(move |slot| slot.weekday == weekday)
    }

    /// Checks the invariants a course must satisfy before it is stored.
    ///
    /// The calculators never call this; they are defined over any input.
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(invalid("id", "must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(invalid("name", "must not be empty"));
        }
        if self.weekly_theory_hours == 0 && self.weekly_practice_hours == 0 {
            return Err(invalid(
                "weekly_hours",
                "at least one of theory or practice hours must be greater than zero",
            ));
        }

        let hundred = Decimal::ONE_HUNDRED;
        for (field, percent) in [
            ("theory_limit_percent", self.theory_limit_percent),
            ("practice_limit_percent", self.practice_limit_percent),
        ] {
            if percent < Decimal::ZERO || percent > hundred {
                return Err(invalid(
                    field,
                    &format!("{} is outside the range 0-100", percent),
                ));
            }
        }

        if let Some(slot) = self.schedule.iter().find(|s| s.hours <= Decimal::ZERO) {
            return Err(invalid(
                "schedule",
                &format!(
                    "{} {} slot must last more than zero hours",
                    slot.weekday,
                    slot.session_type.as_str()
                ),
            ));
        }
        if let Some(slot) = self.schedule.iter().find(|s| s.hours > MAX_SESSION_HOURS) {
            return Err(invalid(
                "schedule",
                &format!(
                    "{} {} slot cannot last more than {} hours",
                    slot.weekday,
                    slot.session_type.as_str(),
                    MAX_SESSION_HOURS
                ),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidCourse {
        field: field.to_string(),
        message: message.to_string(),
    }
}
