//! HTTP API module for the Attendance Budget Engine.
//!
//! Exposes the calculators over REST, together with course, attendance and
//! semester management backed by an [`AttendanceRepository`](crate::repository::AttendanceRepository).

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceRequest, CalculationRequest, CourseRequest, DateQuery, SemesterProgressRequest,
    SemesterRequest,
};
pub use response::{ApiError, ApiErrorResponse, CourseDeleted, ReconcileOutcome};
pub use state::AppState;
