//! Attendance sheet models.
//!
//! This module contains the [`AttendanceSheet`] and [`AttendanceRecord`] types
//! deserialized from the host's attendance endpoint for the current period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Exception flags attached to a single attendance day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceExceptions {
    /// Whether the employee worked on a day not normally scheduled
    /// (weekend or holiday).
    #[serde(default)]
    pub worked_on_non_working_day: bool,
}

/// One day of attendance within a sheet period.
///
/// Only the exception flags are used by the calculator; any other fields the
/// host sends are ignored.
///
/// # Example
///
/// ```
/// use overtime_tracker::models::AttendanceRecord;
///
/// let record: AttendanceRecord = serde_json::from_str(
///     r#"{"date": "2026-01-17", "exceptions": {"workedOnNonWorkingDay": true}}"#,
/// ).unwrap();
/// assert!(record.worked_on_non_working_day());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The calendar day of the record, when the host provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Exception flags for the day.
    #[serde(default)]
    pub exceptions: AttendanceExceptions,
}

impl AttendanceRecord {
    /// Returns `true` if the day was worked on a non-working day.
    pub fn worked_on_non_working_day(&self) -> bool {
        self.exceptions.worked_on_non_working_day
    }
}

/// The attendance payload for a sheet period.
///
/// # Example
///
/// ```
/// use overtime_tracker::models::AttendanceSheet;
///
/// let sheet = AttendanceSheet::from_json(r#"{
///     "attendance": [
///         {"exceptions": {"workedOnNonWorkingDay": false}},
///         {"exceptions": {"workedOnNonWorkingDay": true}},
///         {}
///     ]
/// }"#).unwrap();
/// assert_eq!(sheet.non_working_day_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSheet {
    /// One record per day in the period.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

impl AttendanceSheet {
    /// Creates a sheet from its records.
    pub fn new(attendance: Vec<AttendanceRecord>) -> Self {
        Self { attendance }
    }

    /// Parses a sheet from its JSON representation.
    pub fn from_json(json: &str) -> TrackerResult<Self> {
        serde_json::from_str(json).map_err(|e| TrackerError::AttendanceParse {
            message: e.to_string(),
        })
    }

    /// Counts the records flagged as worked on a non-working day.
    pub fn non_working_day_count(&self) -> usize {
        self.attendance
            .iter()
            .filter(|record| record.worked_on_non_working_day())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(flagged: bool) -> AttendanceRecord {
        AttendanceRecord {
            date: None,
            exceptions: AttendanceExceptions {
                worked_on_non_working_day: flagged,
            },
        }
    }

    #[test]
    fn test_count_only_flagged_records() {
        let sheet = AttendanceSheet::new(vec![record(false), record(true), record(true)]);
        assert_eq!(sheet.non_working_day_count(), 2);
    }

    #[test]
    fn test_empty_sheet_counts_zero() {
        assert_eq!(AttendanceSheet::default().non_working_day_count(), 0);
    }

    #[test]
    fn test_missing_exceptions_default_to_false() {
        let sheet = AttendanceSheet::from_json(r#"{"attendance": [{"date": "2026-01-15"}]}"#)
            .unwrap();
        assert_eq!(sheet.attendance.len(), 1);
        assert_eq!(
            sheet.attendance[0].date,
            Some(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap())
        );
        assert!(!sheet.attendance[0].worked_on_non_working_day());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{
            "attendance": [
                {
                    "date": "2026-01-17",
                    "totalHours": 480,
                    "exceptions": {"workedOnNonWorkingDay": true, "lateArrival": false}
                }
            ],
            "sheetId": 42
        }"#;
        let sheet = AttendanceSheet::from_json(json).unwrap();
        assert_eq!(sheet.non_working_day_count(), 1);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        match AttendanceSheet::from_json("{not json") {
            Err(TrackerError::AttendanceParse { .. }) => {}
            other => panic!("Expected AttendanceParse error, got {:?}", other),
        }
    }

    #[test]
    fn test_serializes_with_camel_case_flag() {
        let sheet = AttendanceSheet::new(vec![record(true)]);
        let json = serde_json::to_string(&sheet).unwrap();
        assert!(json.contains("\"workedOnNonWorkingDay\":true"));
        assert!(!json.contains("date"));
    }
}
