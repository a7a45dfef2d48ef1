//! Expected working time.
//!
//! This module computes how much time the counted worked days should add up
//! to under a fixed daily expectation.

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{AuditStep, Duration};

/// Standard expected working hours per day.
pub const STANDARD_HOURS_PER_DAY: u32 = 8;

/// The result of computing expected time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedTimeResult {
    /// Expected time for the counted days.
    pub expected: Duration,
    /// The audit step recording the computation.
    pub audit_step: AuditStep,
}

/// Computes the expected time for `days` worked days.
///
/// # Errors
///
/// Returns [`TrackerError::CalculationError`] if the expected hours do not
/// fit in 32 bits.
///
/// # Example
///
/// ```
/// use overtime_tracker::calculation::{calculate_expected_time, STANDARD_HOURS_PER_DAY};
///
/// let result = calculate_expected_time(5, STANDARD_HOURS_PER_DAY, 1).unwrap();
/// assert_eq!(result.expected.to_string(), "+40:00");
/// ```
pub fn calculate_expected_time(
    days: u32,
    hours_per_day: u32,
    step_number: u32,
) -> TrackerResult<ExpectedTimeResult> {
    let hours = days
        .checked_mul(hours_per_day)
        .ok_or_else(|| TrackerError::CalculationError {
            message: format!(
                "{} days at {} hours per day exceed the supported range",
                days, hours_per_day
            ),
        })?;
    let expected = Duration::new(hours, 0);

    let audit_step = AuditStep {
        step_number,
        rule_id: "expected_time".to_string(),
        rule_name: "Expected Time".to_string(),
        input: serde_json::json!({
            "days": days,
            "hours_per_day": hours_per_day
        }),
        output: serde_json::json!({
            "expected": expected.to_string()
        }),
        reasoning: format!(
            "{} days at {} hours per day are expected to total {}",
            days, hours_per_day, expected
        ),
    };

    Ok(ExpectedTimeResult {
        expected,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_constant() {
        assert_eq!(STANDARD_HOURS_PER_DAY, 8);
    }

    #[test]
    fn test_five_days_standard() {
        let result = calculate_expected_time(5, STANDARD_HOURS_PER_DAY, 1).unwrap();
        assert_eq!(result.expected, Duration::new(40, 0));
        assert_eq!(result.audit_step.output["expected"], "+40:00");
    }

    #[test]
    fn test_zero_days_expect_nothing() {
        let result = calculate_expected_time(0, STANDARD_HOURS_PER_DAY, 1).unwrap();
        assert!(result.expected.is_zero());
    }

    #[test]
    fn test_custom_daily_hours() {
        let result = calculate_expected_time(4, 7, 3).unwrap();
        assert_eq!(result.expected.to_string(), "+28:00");
        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.input["hours_per_day"], 7);
    }

    #[test]
    fn test_overflowing_expectation_is_error() {
        match calculate_expected_time(600_000_000, STANDARD_HOURS_PER_DAY, 1) {
            Err(TrackerError::CalculationError { message }) => {
                assert!(message.contains("600000000 days"));
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }
}
