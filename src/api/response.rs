//! Response types for the overtime tracker API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<TrackerError> for ApiErrorResponse {
    fn from(error: TrackerError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            TrackerError::MalformedDuration { input, .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "MALFORMED_DURATION",
                    message,
                    format!("'{}' is not a duration of the form HH:MM", input),
                ),
            ),
            TrackerError::InvalidDayCount { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_DAY_COUNT", message),
            ),
            TrackerError::MissingInput { field } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "MISSING_FIELD",
                    message,
                    format!("Required field '{}' was not provided", field),
                ),
            ),
            TrackerError::AttendanceParse { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_ATTENDANCE", message),
            ),
            TrackerError::CalculationError { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Calculation failed",
                    message,
                ),
            ),
            TrackerError::AttendanceFetch { .. } => (
                StatusCode::BAD_GATEWAY,
                ApiError::new("ATTENDANCE_UNAVAILABLE", message),
            ),
            TrackerError::AttendanceAlreadySet
            | TrackerError::ReadinessTimeout { .. }
            | TrackerError::ConfigNotFound { .. }
            | TrackerError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("INTERNAL_ERROR", "Internal error", message),
            ),
        };

        ApiErrorResponse { status, error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_malformed_duration_is_bad_request() {
        let response: ApiErrorResponse = TrackerError::MalformedDuration {
            input: "8h".to_string(),
            message: "expected HH:MM".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "MALFORMED_DURATION");
        assert!(response.error.details.unwrap().contains("8h"));
    }

    #[test]
    fn test_calculation_error_is_unprocessable() {
        let response: ApiErrorResponse = TrackerError::CalculationError {
            message: "too many exceptions".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "CALCULATION_ERROR");
    }

    #[test]
    fn test_fetch_error_is_bad_gateway() {
        let response: ApiErrorResponse = TrackerError::AttendanceFetch {
            url: "http://localhost".to_string(),
            message: "refused".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    }
}
