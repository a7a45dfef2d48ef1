//! Overtime tracking for HR timesheet periods.
//!
//! This crate computes accumulated overtime for the current timesheet period
//! from the values a timesheet host exposes (total worked time, today's time,
//! worked-day count and attendance exceptions) and publishes the signed
//! `±HH:MM` result back into the host's summary area.

#![warn(missing_docs)]

pub mod adapter;
pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
