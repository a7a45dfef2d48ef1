//! Calculation logic for the overtime tracker.
//!
//! This module contains the calculation functions for deriving overtime:
//! worked day counting, non-working-day exceptions, expected time, and the
//! overtime derivation that combines them into an [`crate::models::OvertimeReport`].

mod expected_time;
mod overtime;
mod worked_days;

pub use expected_time::{ExpectedTimeResult, STANDARD_HOURS_PER_DAY, calculate_expected_time};
pub use overtime::{OvertimeInput, calculate_overtime};
pub use worked_days::{
    NonWorkingDayAdjustment, WorkedDaysResult, apply_non_working_day_exceptions,
    count_worked_days, parse_day_count,
};
