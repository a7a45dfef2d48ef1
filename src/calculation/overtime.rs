//! Overtime derivation.
//!
//! Overtime is the time worked up to the end of yesterday minus the time
//! expected for the days counted so far:
//!
//! ```text
//! worked_until_yesterday = total_worked - today_worked
//! expected               = weekday_days * hours_per_day
//! overtime               = worked_until_yesterday - expected
//! ```

use std::time::Instant;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::PolicyConfig;
use crate::error::TrackerResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, Duration, OvertimeBreakdown, OvertimeReport,
};

use super::{apply_non_working_day_exceptions, calculate_expected_time, count_worked_days};

/// The values read from a timesheet that overtime is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeInput {
    /// Total time worked in the period, including today.
    pub total_worked: Duration,
    /// Time recorded for today so far.
    pub today_worked: Duration,
    /// The worked-day count reported by the host.
    pub raw_days_worked: u32,
    /// Days worked on non-working days, if attendance data is available.
    #[serde(default)]
    pub non_working_days: Option<u32>,
}

/// Calculates overtime for the current period.
///
/// Non-working-day exceptions are applied only when `input.non_working_days`
/// is present and the policy enables them.
///
/// # Errors
///
/// Returns [`crate::error::TrackerError::CalculationError`] when the day
/// counts are inconsistent (today has time but no day is reported, or more
/// exceptions than counted days).
///
/// # Examples
///
/// ```
/// use overtime_tracker::calculation::{calculate_overtime, OvertimeInput};
/// use overtime_tracker::config::PolicyConfig;
/// use overtime_tracker::models::Duration;
///
/// let input = OvertimeInput {
///     total_worked: Duration::new(42, 30),
///     today_worked: Duration::new(2, 30),
///     raw_days_worked: 6,
///     non_working_days: Some(1),
/// };
///
/// let report = calculate_overtime(&input, &PolicyConfig::default()).unwrap();
/// assert_eq!(report.overtime.to_string(), "+08:00");
/// assert_eq!(report.breakdown.weekday_days, 4);
/// ```
pub fn calculate_overtime(
    input: &OvertimeInput,
    policy: &PolicyConfig,
) -> TrackerResult<OvertimeReport> {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let worked_until_yesterday = input.total_worked.subtract(&input.today_worked);
    if !worked_until_yesterday.is_positive() && !worked_until_yesterday.is_zero() {
        warnings.push(AuditWarning {
            code: "TODAY_EXCEEDS_TOTAL".to_string(),
            message: format!(
                "Today's time {} is greater than the period total {}",
                input.today_worked, input.total_worked
            ),
        });
    }
    steps.push(AuditStep {
        step_number,
        rule_id: "worked_until_yesterday".to_string(),
        rule_name: "Worked Until Yesterday".to_string(),
        input: serde_json::json!({
            "total_worked": input.total_worked.to_string(),
            "today_worked": input.today_worked.to_string()
        }),
        output: serde_json::json!({
            "worked_until_yesterday": worked_until_yesterday.to_string()
        }),
        reasoning: format!(
            "{} total minus {} today leaves {}",
            input.total_worked, input.today_worked, worked_until_yesterday
        ),
    });
    step_number += 1;

    let worked_days = count_worked_days(input.raw_days_worked, &input.today_worked, step_number)?;
    let days_counted = worked_days.days_counted;
    steps.push(worked_days.audit_step);
    step_number += 1;

    let non_working_days = input
        .non_working_days
        .filter(|_| policy.exclude_non_working_days);

    let weekday_days = match non_working_days {
        Some(non_working) => {
            let adjustment =
                apply_non_working_day_exceptions(days_counted, non_working, step_number)?;
            steps.push(adjustment.audit_step);
            step_number += 1;
            adjustment.weekday_days
        }
        None => days_counted,
    };

    let expected_result = calculate_expected_time(weekday_days, policy.hours_per_day, step_number)?;
    let expected = expected_result.expected;
    steps.push(expected_result.audit_step);
    step_number += 1;

    let overtime = worked_until_yesterday.subtract(&expected);
    steps.push(AuditStep {
        step_number,
        rule_id: "overtime".to_string(),
        rule_name: "Overtime".to_string(),
        input: serde_json::json!({
            "worked_until_yesterday": worked_until_yesterday.to_string(),
            "expected": expected.to_string()
        }),
        output: serde_json::json!({
            "overtime": overtime.to_string()
        }),
        reasoning: format!(
            "{} worked against {} expected gives {}",
            worked_until_yesterday, expected, overtime
        ),
    });

    let duration_us = start_time.elapsed().as_micros() as u64;
    debug!(
        overtime = %overtime,
        weekday_days,
        warnings = warnings.len(),
        "Overtime calculated"
    );

    Ok(OvertimeReport {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        overtime,
        overtime_hours: overtime.to_decimal_hours(),
        breakdown: OvertimeBreakdown {
            total_worked: input.total_worked,
            today_worked: input.today_worked,
            worked_until_yesterday,
            raw_days_worked: input.raw_days_worked,
            days_counted,
            non_working_days,
            weekday_days,
            expected,
        },
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}
