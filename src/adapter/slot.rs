//! Write-once holder for the fetched attendance sheet.

use std::sync::{Arc, OnceLock};

use crate::error::{TrackerError, TrackerResult};
use crate::models::AttendanceSheet;

/// Shared slot that transitions once from empty to holding a sheet.
///
/// Clones share the same slot: the fetcher keeps one handle to fill it and
/// the timesheet source keeps another to read it. The value is never reset.
///
/// # Example
///
/// ```
/// use overtime_tracker::adapter::AttendanceSlot;
/// use overtime_tracker::models::AttendanceSheet;
///
/// let slot = AttendanceSlot::new();
/// let reader = slot.clone();
/// assert!(!reader.is_filled());
///
/// slot.set(AttendanceSheet::default()).unwrap();
/// assert!(reader.is_filled());
/// assert!(slot.set(AttendanceSheet::default()).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttendanceSlot {
    inner: Arc<OnceLock<AttendanceSheet>>,
}

impl AttendanceSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot that already holds `sheet`.
    pub fn filled(sheet: AttendanceSheet) -> Self {
        let slot = Self::new();
        // A fresh slot is always empty.
        let _ = slot.inner.set(sheet);
        slot
    }

    /// Stores the sheet.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::AttendanceAlreadySet`] if a sheet was stored before.
    pub fn set(&self, sheet: AttendanceSheet) -> TrackerResult<()> {
        self.inner
            .set(sheet)
            .map_err(|_| TrackerError::AttendanceAlreadySet)
    }

    /// Returns the stored sheet, if any.
    pub fn get(&self) -> Option<&AttendanceSheet> {
        self.inner.get()
    }

    /// Returns `true` once a sheet has been stored.
    pub fn is_filled(&self) -> bool {
        self.inner.get().is_some()
    }
}
