//! HTTP request handlers for the Time Metrics Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate, calculate_batch};
use crate::models::{RawPunchPair, Schedule};

use super::request::{BatchCalculationRequest, CalculationRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/batch", post(calculate_batch_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a single punch pair with an optional schedule and returns the
/// calculated time metrics.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let schedule = match resolve_schedule(request.schedule.clone(), &state) {
        Ok(schedule) => schedule,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid schedule");
            let api_error: ApiErrorResponse = err.into();
            return error_response(api_error);
        }
    };

    let record = RawPunchPair {
        punch_in: request.punch_in,
        punch_out: request.punch_out,
    };
    let pair = match record.resolve() {
        Ok(pair) => pair,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid punch data");
            let api_error: ApiErrorResponse = err.into();
            return error_response(api_error);
        }
    };

    let start_time = Instant::now();
    match calculate(&pair, &schedule) {
        Ok(metrics) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                total_worked_minutes = metrics.total_worked_minutes,
                night_diff_minutes = metrics.night_diff_minutes,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(metrics),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Calculation failed");
            let api_error: ApiErrorResponse = err.into();
            error_response(api_error)
        }
    }
}

/// Handler for POST /calculate/batch endpoint.
///
/// Calculates every record independently. Per-record failures are reported
/// inline in the entry list; the batch itself always succeeds once the
/// request body and schedule are valid.
async fn calculate_batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch calculation request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let schedule = match resolve_schedule(request.schedule.clone(), &state) {
        Ok(schedule) => schedule,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid schedule");
            let api_error: ApiErrorResponse = err.into();
            return error_response(api_error);
        }
    };

    let records: Vec<RawPunchPair> = request.records.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    let entries = calculate_batch(&records, &schedule);
    let failed = entries.iter().filter(|e| e.error.is_some()).count();
    info!(
        correlation_id = %correlation_id,
        records_count = entries.len(),
        failed_count = failed,
        duration_us = start_time.elapsed().as_micros(),
        "Batch calculation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(entries),
    )
        .into_response()
}

/// Unwraps a JSON payload, mapping rejections to 400 responses.
fn parse_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, axum::response::Response> {
    match payload {
        Ok(Json(req)) => Ok(req),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

/// Resolves the request schedule, falling back to the configured default.
fn resolve_schedule(
    schedule: Option<super::request::ScheduleRequest>,
    state: &AppState,
) -> Result<Schedule, crate::error::EngineError> {
    match schedule {
        Some(req) => req.try_into(),
        None => Ok(state.config().schedule().clone()),
    }
}

fn error_response(api_error: ApiErrorResponse) -> axum::response::Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
