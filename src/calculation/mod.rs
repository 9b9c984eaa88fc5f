//! Calculation logic for the Attendance Budget Engine.
//!
//! This module contains the pure calculation functions: absence budget
//! rounding, risk classification, per-session and per-course budgets,
//! semester progress, session tallies and the dashboard aggregate. None of
//! them perform I/O or fail.

mod absence_budget;
mod course_attendance;
mod dashboard;
mod risk_status;
mod semester_progress;
mod session_budget;
mod session_tally;

pub use absence_budget::{max_absent_hours, round_half_up, total_session_hours};
pub use course_attendance::{DEFAULT_TOTAL_WEEKS, calculate_course_attendance};
pub use dashboard::build_dashboard;
pub use risk_status::{DANGER_THRESHOLD_PERCENT, WARNING_THRESHOLD_PERCENT, classify_usage};
pub use semester_progress::{calculate_semester_progress, calculate_semester_progress_at};
pub use session_budget::{SessionBudgetResult, calculate_session_budget, sum_absent_hours};
pub use session_tally::tally_sessions;
