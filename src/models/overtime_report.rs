//! Overtime report models.
//!
//! This module contains the [`OvertimeReport`] type and its associated
//! structures that capture every output of an overtime calculation: the
//! intermediate durations and day counts, the final overtime and the audit
//! trace explaining how it was reached.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Duration;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs that look inconsistent but still yield a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Intermediate values of an overtime calculation.
///
/// # Example
///
/// ```
/// use overtime_tracker::models::{Duration, OvertimeBreakdown};
///
/// let breakdown = OvertimeBreakdown {
///     total_worked: Duration::new(42, 30),
///     today_worked: Duration::new(2, 30),
///     worked_until_yesterday: Duration::new(40, 0),
///     raw_days_worked: 6,
///     days_counted: 5,
///     non_working_days: Some(1),
///     weekday_days: 4,
///     expected: Duration::new(32, 0),
/// };
/// assert_eq!(breakdown.worked_until_yesterday.subtract(&breakdown.expected).to_string(), "+08:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeBreakdown {
    /// Total time worked in the period, including today.
    pub total_worked: Duration,
    /// Time recorded for today so far.
    pub today_worked: Duration,
    /// Total worked time excluding today.
    pub worked_until_yesterday: Duration,
    /// The worked-day count as reported by the host.
    pub raw_days_worked: u32,
    /// Worked days after excluding an in-progress today.
    pub days_counted: u32,
    /// Days worked on non-working days, when attendance data was used.
    pub non_working_days: Option<u32>,
    /// Days that carry the standard expectation.
    pub weekday_days: u32,
    /// Expected time for the counted days.
    pub expected: Duration,
}

/// The complete result of an overtime calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the tracker that performed the calculation.
    pub engine_version: String,
    /// The signed overtime, formatted as `±HH:MM` when serialized.
    pub overtime: Duration,
    /// The signed overtime in decimal hours.
    pub overtime_hours: Decimal,
    /// Intermediate values the overtime was derived from.
    pub breakdown: OvertimeBreakdown,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
