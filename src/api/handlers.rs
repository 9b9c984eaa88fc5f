//! HTTP request handlers for the Attendance Budget Engine API.
//!
//! Handlers are thin adapters: they decode the request, read plain data out
//! of the repository, call the calculators and encode the result.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    DEFAULT_TOTAL_WEEKS, build_dashboard, calculate_course_attendance, calculate_semester_progress,
};
use crate::error::EngineError;
use crate::models::SemesterConfig;
use crate::reconciliation::reconcile_absences;

use super::request::{
    AttendanceRequest, CalculationRequest, CourseRequest, DateQuery, SemesterProgressRequest,
    SemesterRequest,
};
use super::response::{ApiError, ApiErrorResponse, CourseDeleted, ReconcileOutcome};
use super::state::AppState;

type HandlerResult = Result<Response, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/semester/progress", post(semester_progress_handler))
        .route("/semester", put(set_semester_handler))
        .route(
            "/courses",
            get(list_courses_handler).post(create_course_handler),
        )
        .route("/courses/:id", delete(delete_course_handler))
        .route("/courses/:id/attendance", post(mark_attendance_handler))
        .route("/courses/:id/calculation", get(course_calculation_handler))
        .route("/attendance/:record_id", delete(delete_record_handler))
        .route("/dashboard", get(dashboard_handler))
        .route("/reconcile", post(reconcile_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Unwraps a JSON body or turns the rejection into a 400.
fn decode_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Serde's detail sits in the body text, not the top-level message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error))
}

/// Resolves the `?today=` override, falling back to the current UTC date.
fn resolve_today(
    correlation_id: Uuid,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<NaiveDate, ApiErrorResponse> {
    match query {
        Ok(Query(DateQuery { today })) => Ok(today.unwrap_or_else(|| Utc::now().date_naive())),
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid query string"
            );
            Err(ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            )))
        }
    }
}

fn engine_failure(correlation_id: Uuid, error: EngineError) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request failed"
    );
    error.into()
}

/// Handler for POST /calculate.
///
/// Stateless: the course and its records come in the body.
async fn calculate_handler(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = decode_body(correlation_id, payload)?;
    let total_weeks = request.total_weeks.unwrap_or(DEFAULT_TOTAL_WEEKS);

    let start_time = Instant::now();
    let result = calculate_course_attendance(&request.course, &request.records, total_weeks);
    info!(
        correlation_id = %correlation_id,
        course_id = %result.course_id,
        records_count = request.records.len(),
        theory_status = result.theory.status.as_str(),
        practice_status = result.practice.status.as_str(),
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    Ok(json_response(StatusCode::OK, result))
}

/// Handler for POST /semester/progress.
async fn semester_progress_handler(
    payload: Result<Json<SemesterProgressRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let request = decode_body(correlation_id, payload)?;

    let config = SemesterConfig {
        semester_start: request.semester_start,
    };
    let today = request.today.unwrap_or_else(|| Utc::now().date_naive());
    let progress = calculate_semester_progress(&config, today);
    info!(
        correlation_id = %correlation_id,
        current_week = progress.current_week,
        progress_percent = progress.progress_percent,
        "Semester progress calculated"
    );

    Ok(json_response(StatusCode::OK, progress))
}

/// Handler for PUT /semester.
async fn set_semester_handler(
    State(state): State<AppState>,
    payload: Result<Json<SemesterRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let request = decode_body(correlation_id, payload)?;

    state.repository().set_semester_start(request.semester_start);
    info!(
        correlation_id = %correlation_id,
        semester_start = %request.semester_start,
        "Semester start updated"
    );

    Ok(json_response(StatusCode::OK, state.repository().semester()))
}

/// Handler for GET /courses.
async fn list_courses_handler(State(state): State<AppState>) -> HandlerResult {
    Ok(json_response(StatusCode::OK, state.repository().courses()))
}

/// Handler for POST /courses.
async fn create_course_handler(
    State(state): State<AppState>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let request = decode_body(correlation_id, payload)?;

    let course = request.into_course(state.config());
    state
        .repository()
        .insert_course(course.clone())
        .map_err(|e| engine_failure(correlation_id, e))?;
    info!(
        correlation_id = %correlation_id,
        course_id = %course.id,
        "Course created"
    );

    Ok(json_response(StatusCode::CREATED, course))
}

/// Handler for DELETE /courses/{id}.
async fn delete_course_handler(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();

    let removed_records = state
        .repository()
        .delete_course(&course_id)
        .map_err(|e| engine_failure(correlation_id, e))?;
    info!(
        correlation_id = %correlation_id,
        course_id = %course_id,
        removed_records,
        "Course deleted"
    );

    Ok(json_response(
        StatusCode::OK,
        CourseDeleted {
            course_id,
            removed_records,
        },
    ))
}

/// Handler for POST /courses/{id}/attendance.
///
/// Marking a slot that already has an entry replaces it.
async fn mark_attendance_handler(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let request = decode_body(correlation_id, payload)?;

    let record = state
        .repository()
        .mark_attendance(request.into_mark(course_id))
        .map_err(|e| engine_failure(correlation_id, e))?;
    info!(
        correlation_id = %correlation_id,
        course_id = %record.course_id,
        record_id = %record.id,
        date = %record.date,
        "Attendance marked"
    );

    Ok(json_response(StatusCode::OK, record))
}

/// Handler for DELETE /attendance/{record_id}.
async fn delete_record_handler(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();

    state
        .repository()
        .delete_record(&record_id)
        .map_err(|e| engine_failure(correlation_id, e))?;
    info!(correlation_id = %correlation_id, record_id = %record_id, "Record deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Handler for GET /courses/{id}/calculation.
async fn course_calculation_handler(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let repository = state.repository();

    let course = repository
        .course(&course_id)
        .map_err(|e| engine_failure(correlation_id, e))?;
    let records = repository.records_for_course(&course_id);

    let start_time = Instant::now();
    let result = calculate_course_attendance(&course, &records, DEFAULT_TOTAL_WEEKS);
    info!(
        correlation_id = %correlation_id,
        course_id = %course_id,
        records_count = records.len(),
        is_critical = result.is_critical,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    Ok(json_response(StatusCode::OK, result))
}

/// Handler for GET /dashboard.
async fn dashboard_handler(
    State(state): State<AppState>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let today = resolve_today(correlation_id, query)?;
    let repository = state.repository();

    let start_time = Instant::now();
    let dashboard = build_dashboard(
        &repository.courses(),
        &repository.records(),
        &repository.semester(),
        today,
    );
    info!(
        correlation_id = %correlation_id,
        today = %today,
        courses = dashboard.courses.len(),
        critical = dashboard.critical_courses.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Dashboard built"
    );

    Ok(json_response(StatusCode::OK, dashboard))
}

/// Handler for POST /reconcile.
///
/// Does nothing when backfill is disabled in the policy. A `?today=` in the
/// future is rejected because the watermark would move past dates that have
/// not happened yet.
async fn reconcile_handler(
    State(state): State<AppState>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let today = resolve_today(correlation_id, query)?;

    let now = Utc::now().date_naive();
    if today > now {
        warn!(
            correlation_id = %correlation_id,
            today = %today,
            "Reconciliation date lies in the future"
        );
        return Err(ApiErrorResponse::bad_request(ApiError::validation_error(
            format!("today {} is after the current date {}", today, now),
        )));
    }

    let backfill = state.config().backfill();
    if !backfill.enabled {
        info!(correlation_id = %correlation_id, "Backfill disabled, skipping reconciliation");
        return Ok(json_response(
            StatusCode::OK,
            ReconcileOutcome {
                enabled: false,
                report: None,
            },
        ));
    }

    let report = reconcile_absences(state.repository(), today, &backfill.note)
        .map_err(|e| engine_failure(correlation_id, e))?;
    info!(
        correlation_id = %correlation_id,
        created = report.created.len(),
        "Reconciliation request completed"
    );

    Ok(json_response(
        StatusCode::OK,
        ReconcileOutcome {
            enabled: true,
            report: Some(report),
        },
    ))
}
