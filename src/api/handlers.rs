//! HTTP request handlers for the Payroll Engine API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::Timesheet;

use super::response::{ApiError, ApiErrorResponse, PayrollResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .with_state(state)
}

/// Handler for `POST /payroll`.
///
/// Accepts a timesheet record and returns the priced result. Structural
/// problems with the body are reported as 400; values that fail validation
/// are reported as 422.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<Timesheet>, JsonRejection>,
) -> Response {
    // Correlation ID doubles as the calculation ID in the response
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let timesheet = match payload {
        Ok(Json(timesheet)) => timesheet,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "Timesheet data error"
                    );
                    ApiError::malformed_timesheet(body_text)
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
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let start_time = Instant::now();
    match state.engine().run_with_audit(&timesheet) {
        Ok(calculation) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %calculation.result.employee_id,
                entries = timesheet.entries.len(),
                gross_pay = %calculation.result.gross_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll calculated"
            );
            let body = PayrollResponse {
                calculation_id: correlation_id,
                result: calculation.result,
                audit_trace: calculation.audit_trace,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
