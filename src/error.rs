//! Error types for the overtime tracker.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while reading timesheet inputs,
//! fetching attendance data, or calculating overtime.

use thiserror::Error;

/// The main error type for the overtime tracker.
///
/// Every read from the host, every calculation and every configuration
/// load returns this error type, so a missing or malformed input always
/// surfaces as a distinct diagnostic instead of a silent hang.
///
/// # Example
///
/// ```
/// use overtime_tracker::error::TrackerError;
///
/// let error = TrackerError::MalformedDuration {
///     input: "8h15".to_string(),
///     message: "expected HH:MM".to_string(),
/// };
/// assert_eq!(error.to_string(), "Malformed duration '8h15': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum TrackerError {
    /// A duration string was not of the form `H:MM` or `HH:MM`.
    #[error("Malformed duration '{input}': {message}")]
    MalformedDuration {
        /// The text that failed to parse.
        input: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A worked-day count was not a valid non-negative integer.
    #[error("Invalid worked day count '{input}'")]
    InvalidDayCount {
        /// The text that failed to parse.
        input: String,
    },

    /// A required input was not exposed by the timesheet source.
    #[error("Missing input: {field}")]
    MissingInput {
        /// The name of the missing input.
        field: String,
    },

    /// The attendance sheet could not be fetched.
    #[error("Failed to fetch attendance from '{url}': {message}")]
    AttendanceFetch {
        /// The URL that was requested.
        url: String,
        /// A description of the transport or status failure.
        message: String,
    },

    /// The attendance payload was not valid JSON of the expected shape.
    #[error("Failed to parse attendance payload: {message}")]
    AttendanceParse {
        /// A description of the parse failure.
        message: String,
    },

    /// The attendance slot was written more than once.
    #[error("Attendance sheet has already been stored")]
    AttendanceAlreadySet,

    /// The timesheet source did not become ready in time.
    #[error("Timesheet source not ready after {waited_ms}ms")]
    ReadinessTimeout {
        /// How long the wait lasted, in milliseconds.
        waited_ms: u64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or holds invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The inputs were inconsistent and no overtime could be derived.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return TrackerError.
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_duration_displays_input_and_message() {
        let error = TrackerError::MalformedDuration {
            input: "abc".to_string(),
            message: "expected two colon-separated fields".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed duration 'abc': expected two colon-separated fields"
        );
    }

    #[test]
    fn test_invalid_day_count_displays_input() {
        let error = TrackerError::InvalidDayCount {
            input: "five".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid worked day count 'five'");
    }

    #[test]
    fn test_missing_input_displays_field() {
        let error = TrackerError::MissingInput {
            field: "today_worked".to_string(),
        };
        assert_eq!(error.to_string(), "Missing input: today_worked");
    }

    #[test]
    fn test_attendance_fetch_displays_url_and_message() {
        let error = TrackerError::AttendanceFetch {
            url: "http://localhost/attendance".to_string(),
            message: "status 503".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to fetch attendance from 'http://localhost/attendance': status 503"
        );
    }

    #[test]
    fn test_readiness_timeout_displays_wait() {
        let error = TrackerError::ReadinessTimeout { waited_ms: 3000 };
        assert_eq!(error.to_string(), "Timesheet source not ready after 3000ms");
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = TrackerError::ConfigNotFound {
            path: "/missing/overtime.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/overtime.yaml"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = TrackerError::CalculationError {
            message: "more exceptions than worked days".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Calculation error: more exceptions than worked days"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<TrackerError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_input() -> TrackerResult<()> {
            Err(TrackerError::MissingInput {
                field: "total_worked".to_string(),
            })
        }

        fn propagates_error() -> TrackerResult<()> {
            returns_missing_input()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
