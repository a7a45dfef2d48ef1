//! Worked day counting.
//!
//! This module turns the host's worked-day label into the number of days
//! that carry an hours expectation: today is dropped while it is still in
//! progress, and days worked on non-working days are removed when
//! attendance data is available.

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{AuditStep, Duration};

/// The result of counting worked days for the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkedDaysResult {
    /// Worked days after excluding an in-progress today.
    pub days_counted: u32,
    /// The audit step recording the decision.
    pub audit_step: AuditStep,
}

/// The result of removing non-working-day exceptions from the day count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonWorkingDayAdjustment {
    /// Days that carry the standard expectation.
    pub weekday_days: u32,
    /// The audit step recording the adjustment.
    pub audit_step: AuditStep,
}

/// Parses the worked-day label text.
///
/// Leading whitespace is ignored and the leading run of digits is read, so
/// `"5"` and `"5 days"` both yield 5.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidDayCount`] when the text does not start
/// with a digit.
///
/// # Example
///
/// ```
/// use overtime_tracker::calculation::parse_day_count;
///
/// assert_eq!(parse_day_count("6").unwrap(), 6);
/// assert_eq!(parse_day_count(" 12 days").unwrap(), 12);
/// assert!(parse_day_count("n/a").is_err());
/// ```
pub fn parse_day_count(text: &str) -> TrackerResult<u32> {
    let trimmed = text.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    trimmed[..digits_end]
        .parse()
        .map_err(|_| TrackerError::InvalidDayCount {
            input: text.to_string(),
        })
}

/// Counts the worked days that should already meet the daily expectation.
///
/// When today has no recorded time the host's count is used as-is; a day is
/// assumed to always have a row once rendered. When today has time on it,
/// today is still in progress and is excluded from the count.
///
/// # Errors
///
/// Returns [`TrackerError::CalculationError`] if today has recorded time but
/// the host reports zero worked days.
///
/// # Example
///
/// ```
/// use overtime_tracker::calculation::count_worked_days;
/// use overtime_tracker::models::Duration;
///
/// let idle = count_worked_days(5, &Duration::ZERO, 1).unwrap();
/// assert_eq!(idle.days_counted, 5);
///
/// let in_progress = count_worked_days(6, &Duration::new(2, 30), 1).unwrap();
/// assert_eq!(in_progress.days_counted, 5);
/// ```
pub fn count_worked_days(
    raw_days: u32,
    today_worked: &Duration,
    step_number: u32,
) -> TrackerResult<WorkedDaysResult> {
    let today_in_progress = !today_worked.is_zero();

    let (days_counted, reasoning) = if today_in_progress {
        let days = raw_days
            .checked_sub(1)
            .ok_or_else(|| TrackerError::CalculationError {
                message: format!(
                    "today has {} recorded but the worked day count is 0",
                    today_worked
                ),
            })?;
        (
            days,
            format!(
                "Today has {} recorded and is still in progress, so {} reported days count as {}",
                today_worked, raw_days, days
            ),
        )
    } else {
        (
            raw_days,
            format!(
                "Today has no recorded time, so all {} reported days count",
                raw_days
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "worked_days".to_string(),
        rule_name: "Worked Day Count".to_string(),
        input: serde_json::json!({
            "raw_days_worked": raw_days,
            "today_worked": today_worked.to_string()
        }),
        output: serde_json::json!({
            "days_counted": days_counted,
            "today_in_progress": today_in_progress
        }),
        reasoning,
    };

    Ok(WorkedDaysResult {
        days_counted,
        audit_step,
    })
}

/// Removes days worked on non-working days from the day count.
///
/// Work on a weekend or holiday carries no expectation, so it counts
/// entirely as overtime.
///
/// # Errors
///
/// Returns [`TrackerError::CalculationError`] if there are more exceptions
/// than counted days.
///
/// # Example
///
/// ```
/// use overtime_tracker::calculation::apply_non_working_day_exceptions;
///
/// let adjusted = apply_non_working_day_exceptions(5, 1, 2).unwrap();
/// assert_eq!(adjusted.weekday_days, 4);
/// ```
pub fn apply_non_working_day_exceptions(
    days_counted: u32,
    non_working_days: u32,
    step_number: u32,
) -> TrackerResult<NonWorkingDayAdjustment> {
    let weekday_days = days_counted.checked_sub(non_working_days).ok_or_else(|| {
        TrackerError::CalculationError {
            message: format!(
                "{} non-working-day exceptions exceed {} counted days",
                non_working_days, days_counted
            ),
        }
    })?;

    let reasoning = if non_working_days == 0 {
        format!("No days worked on non-working days; {} days remain", weekday_days)
    } else {
        format!(
            "{} of {} days were worked on non-working days and carry no expectation",
            non_working_days, days_counted
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "non_working_day_exceptions".to_string(),
        rule_name: "Non-Working Day Exceptions".to_string(),
        input: serde_json::json!({
            "days_counted": days_counted,
            "non_working_days": non_working_days
        }),
        output: serde_json::json!({
            "weekday_days": weekday_days
        }),
        reasoning,
    };

    Ok(NonWorkingDayAdjustment {
        weekday_days,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_count() {
        assert_eq!(parse_day_count("5").unwrap(), 5);
    }

    #[test]
    fn test_parse_ignores_trailing_text() {
        assert_eq!(parse_day_count("21 days").unwrap(), 21);
    }

    #[test]
    fn test_parse_rejects_empty_and_text() {
        assert!(parse_day_count("").is_err());
        assert!(parse_day_count("days").is_err());
        assert!(parse_day_count("-3").is_err());
    }

    #[test]
    fn test_parse_error_keeps_input() {
        match parse_day_count("abc") {
            Err(TrackerError::InvalidDayCount { input }) => assert_eq!(input, "abc"),
            other => panic!("Expected InvalidDayCount, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_today_keeps_all_days() {
        let result = count_worked_days(5, &Duration::ZERO, 1).unwrap();
        assert_eq!(result.days_counted, 5);
        assert_eq!(result.audit_step.output["today_in_progress"], false);
    }

    #[test]
    fn test_negative_zero_today_keeps_all_days() {
        let result = count_worked_days(5, &Duration::with_sign(0, 0, false), 1).unwrap();
        assert_eq!(result.days_counted, 5);
    }

    #[test]
    fn test_nonzero_today_excludes_today() {
        let result = count_worked_days(6, &Duration::new(0, 1), 1).unwrap();
        assert_eq!(result.days_counted, 5);
        assert_eq!(result.audit_step.output["today_in_progress"], true);
        assert_eq!(result.audit_step.input["today_worked"], "+00:01");
    }

    #[test]
    fn test_nonzero_today_with_zero_days_is_error() {
        let result = count_worked_days(0, &Duration::new(1, 0), 1);
        assert!(matches!(result, Err(TrackerError::CalculationError { .. })));
    }

    #[test]
    fn test_zero_days_zero_today_is_zero() {
        let result = count_worked_days(0, &Duration::ZERO, 1).unwrap();
        assert_eq!(result.days_counted, 0);
    }

    #[test]
    fn test_step_number_passed_through() {
        let result = count_worked_days(3, &Duration::ZERO, 7).unwrap();
        assert_eq!(result.audit_step.step_number, 7);
        assert_eq!(result.audit_step.rule_id, "worked_days");
    }

    #[test]
    fn test_exceptions_reduce_days() {
        let result = apply_non_working_day_exceptions(5, 1, 2).unwrap();
        assert_eq!(result.weekday_days, 4);
        assert!(result.audit_step.reasoning.contains("non-working days"));
    }

    #[test]
    fn test_no_exceptions_keep_days() {
        let result = apply_non_working_day_exceptions(5, 0, 2).unwrap();
        assert_eq!(result.weekday_days, 5);
    }

    #[test]
    fn test_too_many_exceptions_is_error() {
        let result = apply_non_working_day_exceptions(2, 3, 2);
        assert!(matches!(result, Err(TrackerError::CalculationError { .. })));
    }
}
