//! Host adapter for the overtime tracker.
//!
//! The timesheet host is reached only through the traits in this module:
//! [`TimesheetSource`] for the values the calculator needs and
//! [`ResultSink`] for the summary area the result is published into. The
//! attendance sheet is fetched by [`AttendanceClient`] into an injected
//! [`AttendanceSlot`], and [`run`] waits for the source with a bounded
//! timeout before calculating once. [`run_with_attendance`] additionally
//! drives the fetch and stops on its first error.

mod client;
mod runner;
mod sink;
mod slot;
mod source;

pub use client::AttendanceClient;
pub use runner::{read_input, run, run_once, run_with_attendance, wait_until_ready};
pub use sink::{ResultSink, SummaryElement, SummaryPanel, publish_overtime};
pub use slot::AttendanceSlot;
pub use source::{SnapshotSource, TimesheetSnapshot, TimesheetSource};
