//! Configuration types for the overtime tracker.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section and
//! field has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::calculation::STANDARD_HOURS_PER_DAY;

/// Overtime policy settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Expected working hours per counted day.
    pub hours_per_day: u32,
    /// Whether days worked on non-working days are removed from the
    /// expectation when attendance data is available.
    pub exclude_non_working_days: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            hours_per_day: STANDARD_HOURS_PER_DAY,
            exclude_non_working_days: true,
        }
    }
}

/// Readiness polling settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Delay between readiness checks, in milliseconds.
    pub interval_ms: u64,
    /// Give up after this many milliseconds.
    pub timeout_ms: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            timeout_ms: 60_000,
        }
    }
}

/// How the result is published into the summary area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Reserved identifier of the published element.
    pub element_id: String,
    /// Caption shown under the overtime value.
    pub caption: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            element_id: "overtime".to_string(),
            caption: "Overtime".to_string(),
        }
    }
}

/// Where the attendance sheet is fetched from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceConfig {
    /// Full URL of the attendance sheet for the current period.
    pub url: Option<String>,
}

/// The complete tracker configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Overtime policy.
    pub policy: PolicyConfig,
    /// Readiness polling.
    pub polling: PollingConfig,
    /// Result display.
    pub display: DisplayConfig,
    /// Attendance source.
    pub attendance: AttendanceConfig,
}
