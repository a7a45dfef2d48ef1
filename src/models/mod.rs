//! Core data models for the overtime tracker.
//!
//! This module contains all the domain models used throughout the tracker.

mod attendance;
mod duration;
mod overtime_report;

pub use attendance::{AttendanceExceptions, AttendanceRecord, AttendanceSheet};
pub use duration::Duration;
pub use overtime_report::{AuditStep, AuditTrace, AuditWarning, OvertimeBreakdown, OvertimeReport};
