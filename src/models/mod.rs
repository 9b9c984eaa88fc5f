//! Core data models for the Attendance Budget Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calculation_result;
mod course;
mod dashboard;
mod semester;

pub use attendance::{AttendanceRecord, AttendanceStatus, MAX_SESSION_HOURS};
pub use calculation_result::{AttendanceCalculation, AuditStep, RiskStatus, SessionBudget};
pub use course::{Course, ScheduleSlot, SessionType};
pub use dashboard::{CourseOverview, Dashboard, SessionTally};
pub use semester::{SEMESTER_LENGTH_WEEKS, SemesterConfig, SemesterProgress};
