//! Request types for the overtime tracker API.
//!
//! This module defines the JSON request structure for the `/overtime` endpoint.

use serde::{Deserialize, Serialize};

use crate::adapter::{AttendanceSlot, SnapshotSource, TimesheetSnapshot, read_input};
use crate::calculation::OvertimeInput;
use crate::error::TrackerResult;
use crate::models::{AttendanceRecord, AttendanceSheet};

/// The worked-day count, given either as a number or as the raw label text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DaysWorked {
    /// A plain count.
    Count(u32),
    /// Label text such as `"6"` or `"6 days"`.
    Label(String),
}

impl DaysWorked {
    fn into_label(self) -> String {
        match self {
            DaysWorked::Count(count) => count.to_string(),
            DaysWorked::Label(label) => label,
        }
    }
}

/// Request body for the `/overtime` endpoint.
///
/// Carries the raw timesheet values as shown by the host, plus the optional
/// attendance records for the period. Absent values are reported by
/// [`OvertimeRequest::into_input`] as missing inputs.
///
/// # Example
///
/// ```
/// use overtime_tracker::api::OvertimeRequest;
///
/// let request: OvertimeRequest = serde_json::from_str(r#"{
///     "total_worked": "42:30",
///     "today_worked": "02:30",
///     "days_worked": 6
/// }"#).unwrap();
/// assert!(request.attendance.is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OvertimeRequest {
    /// Total time worked in the period, as `HH:MM`.
    #[serde(default)]
    pub total_worked: Option<String>,
    /// Time recorded today, as `HH:MM`.
    #[serde(default)]
    pub today_worked: Option<String>,
    /// Days worked in the period.
    #[serde(default)]
    pub days_worked: Option<DaysWorked>,
    /// Attendance records for the period, if available.
    #[serde(default)]
    pub attendance: Option<Vec<AttendanceRecord>>,
}

impl OvertimeRequest {
    /// Converts the request into calculator input, validating every field.
    pub fn into_input(self) -> TrackerResult<OvertimeInput> {
        let snapshot = TimesheetSnapshot {
            total_worked: self.total_worked,
            today_worked: self.today_worked,
            days_worked: self.days_worked.map(DaysWorked::into_label),
        };

        let mut source = SnapshotSource::new(snapshot);
        if let Some(records) = self.attendance {
            source = source.with_attendance(AttendanceSlot::filled(AttendanceSheet::new(records)));
        }

        read_input(&source)
    }
}
