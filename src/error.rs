//! Error types for the Attendance Budget Engine.
//!
//! The calculators themselves never fail. These errors come from the layers
//! around them: configuration loading, input validation and the repository.

use thiserror::Error;

/// The main error type for the Attendance Budget Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A course definition was invalid.
    #[error("Invalid course field '{field}': {message}")]
    InvalidCourse {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An attendance record was invalid.
    #[error("Invalid attendance field '{field}': {message}")]
    InvalidAttendance {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No course exists with the given id.
    #[error("Course not found: {course_id}")]
    CourseNotFound {
        /// The course id that was not found.
        course_id: String,
    },

    /// A course with the given id already exists.
    #[error("Course already exists: {course_id}")]
    DuplicateCourse {
        /// The conflicting course id.
        course_id: String,
    },

    /// No attendance record exists with the given id.
    #[error("Attendance record not found: {record_id}")]
    RecordNotFound {
        /// The record id that was not found.
        record_id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
