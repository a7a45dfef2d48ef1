//! Timesheet input sources.
//!
//! This module defines the [`TimesheetSource`] trait through which the
//! calculator reads the host's timesheet values, and [`SnapshotSource`], a
//! source backed by raw label text captured from the host.

use serde::{Deserialize, Serialize};

use crate::calculation::parse_day_count;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Duration;

use super::AttendanceSlot;

/// The values a timesheet host exposes to the overtime calculator.
///
/// Each read returns an explicit result so a missing or malformed value
/// is reported instead of being propagated into the calculation.
pub trait TimesheetSource {
    /// Number of days worked in the current period.
    fn worked_days_count(&self) -> TrackerResult<u32>;

    /// Total time worked in the current period, including today.
    fn total_worked(&self) -> TrackerResult<Duration>;

    /// Time recorded for today so far.
    fn today_worked(&self) -> TrackerResult<Duration>;

    /// Number of days worked on non-working days.
    ///
    /// Returns `Ok(None)` when the source has no attendance data at all.
    fn attendance_exceptions(&self) -> TrackerResult<Option<u32>>;

    /// Whether every value the source needs is available.
    fn is_ready(&self) -> bool;
}

/// Raw label text captured from a timesheet page.
///
/// # Example
///
/// ```
/// use overtime_tracker::adapter::TimesheetSnapshot;
///
/// let snapshot: TimesheetSnapshot = serde_json::from_str(
///     r#"{"total_worked": "42:30", "today_worked": "02:30", "days_worked": "6"}"#,
/// ).unwrap();
/// assert_eq!(snapshot.days_worked.as_deref(), Some("6"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetSnapshot {
    /// The "hours worked" label, as `HH:MM`.
    #[serde(default)]
    pub total_worked: Option<String>,
    /// Today's total hours cell, as `HH:MM`.
    #[serde(default)]
    pub today_worked: Option<String>,
    /// The "days worked" label.
    #[serde(default)]
    pub days_worked: Option<String>,
}

impl TimesheetSnapshot {
    /// Creates a snapshot with every label present.
    pub fn new(
        total_worked: impl Into<String>,
        today_worked: impl Into<String>,
        days_worked: impl Into<String>,
    ) -> Self {
        Self {
            total_worked: Some(total_worked.into()),
            today_worked: Some(today_worked.into()),
            days_worked: Some(days_worked.into()),
        }
    }
}

/// A [`TimesheetSource`] backed by a [`TimesheetSnapshot`].
///
/// When an [`AttendanceSlot`] is attached the source is only ready once the
/// slot has been filled, and attendance exceptions are read from it.
///
/// # Example
///
/// ```
/// use overtime_tracker::adapter::{SnapshotSource, TimesheetSnapshot, TimesheetSource};
///
/// let source = SnapshotSource::new(TimesheetSnapshot::new("40:00", "00:00", "5"));
/// assert!(source.is_ready());
/// assert_eq!(source.worked_days_count().unwrap(), 5);
/// assert_eq!(source.attendance_exceptions().unwrap(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    snapshot: TimesheetSnapshot,
    attendance: Option<AttendanceSlot>,
}

impl SnapshotSource {
    /// Creates a source without attendance data.
    pub fn new(snapshot: TimesheetSnapshot) -> Self {
        Self {
            snapshot,
            attendance: None,
        }
    }

    /// Attaches an attendance slot to read exceptions from.
    pub fn with_attendance(mut self, slot: AttendanceSlot) -> Self {
        self.attendance = Some(slot);
        self
    }

    fn field<'a>(value: &'a Option<String>, name: &str) -> TrackerResult<&'a str> {
        value.as_deref().ok_or_else(|| TrackerError::MissingInput {
            field: name.to_string(),
        })
    }
}

impl TimesheetSource for SnapshotSource {
    fn worked_days_count(&self) -> TrackerResult<u32> {
        parse_day_count(Self::field(&self.snapshot.days_worked, "days_worked")?)
    }

    fn total_worked(&self) -> TrackerResult<Duration> {
        Duration::parse(Self::field(&self.snapshot.total_worked, "total_worked")?)
    }

    fn today_worked(&self) -> TrackerResult<Duration> {
        Duration::parse(Self::field(&self.snapshot.today_worked, "today_worked")?)
    }

    fn attendance_exceptions(&self) -> TrackerResult<Option<u32>> {
        let Some(slot) = &self.attendance else {
            return Ok(None);
        };

        let sheet = slot.get().ok_or_else(|| TrackerError::MissingInput {
            field: "attendance".to_string(),
        })?;

        day_count(sheet.non_working_day_count()).map(Some)
    }

    fn is_ready(&self) -> bool {
        let labels_present = self.snapshot.total_worked.is_some()
            && self.snapshot.today_worked.is_some()
            && self.snapshot.days_worked.is_some();
        let attendance_ready = self
            .attendance
            .as_ref()
            .is_none_or(|slot| slot.is_filled());

        labels_present && attendance_ready
    }
}

fn day_count(count: usize) -> TrackerResult<u32> {
    u32::try_from(count).map_err(|_| TrackerError::CalculationError {
        message: format!("{} non-working days exceed the supported range", count),
    })
}
