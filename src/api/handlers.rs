//! HTTP request handlers for the overtime tracker API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_overtime;

use super::request::OvertimeRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/overtime", post(overtime_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Handler for POST /overtime endpoint.
///
/// Accepts the raw timesheet values and returns the overtime report.
async fn overtime_handler(
    State(state): State<AppState>,
    payload: Result<Json<OvertimeRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overtime request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Request body rejected"
            );
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(rejection_error(rejection)),
            )
                .into_response();
        }
    };

    let result = request
        .into_input()
        .and_then(|input| calculate_overtime(&input, state.config().policy()));

    match result {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                calculation_id = %report.calculation_id,
                overtime = %report.overtime,
                duration_us = report.audit_trace.duration_us,
                "Overtime calculated successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Overtime calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Maps a body rejection to an API error.
///
/// Missing timesheet fields are not rejections: they deserialize as absent
/// and are reported as `MISSING_FIELD` by the calculation path.
fn rejection_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        other => ApiError::malformed_json(other.body_text()),
    }
}
