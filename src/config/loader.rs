//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tracker
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{TrackerError, TrackerResult};

use super::types::{AttendanceConfig, DisplayConfig, PolicyConfig, PollingConfig, TrackerConfig};

/// Loads and provides access to tracker configuration.
///
/// # File Format
///
/// ```text
/// policy:
///   hours_per_day: 8
///   exclude_non_working_days: true
/// polling:
///   interval_ms: 1000
///   timeout_ms: 60000
/// display:
///   element_id: overtime
///   caption: Overtime
/// attendance:
///   url: https://timesheets.example.com/api/attendance/current
/// ```
///
/// Omitted sections and fields take their defaults.
///
/// # Example
///
/// ```no_run
/// use overtime_tracker::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/overtime.yaml").unwrap();
/// println!("Hours per day: {}", loader.policy().hours_per_day);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: TrackerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - `hours_per_day` or `interval_ms` is zero
    pub fn load<P: AsRef<Path>>(path: P) -> TrackerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TrackerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            TrackerError::ConfigParseError { message, .. } => TrackerError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml(content: &str) -> TrackerResult<Self> {
        // An empty document deserializes to unit, not to a mapping.
        let config: TrackerConfig = if content.trim().is_empty() {
            TrackerConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| TrackerError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?
        };

        Self::from_config(config)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: TrackerConfig) -> TrackerResult<Self> {
        let invalid = |message: &str| TrackerError::ConfigParseError {
            path: "<inline>".to_string(),
            message: message.to_string(),
        };

        if config.policy.hours_per_day == 0 {
            return Err(invalid("policy.hours_per_day must be greater than 0"));
        }
        if config.polling.interval_ms == 0 {
            return Err(invalid("polling.interval_ms must be greater than 0"));
        }

        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Returns the overtime policy.
    pub fn policy(&self) -> &PolicyConfig {
        &self.config.policy
    }

    /// Returns the readiness polling settings.
    pub fn polling(&self) -> &PollingConfig {
        &self.config.polling
    }

    /// Returns the display settings.
    pub fn display(&self) -> &DisplayConfig {
        &self.config.display
    }

    /// Returns the attendance source settings.
    pub fn attendance(&self) -> &AttendanceConfig {
        &self.config.attendance
    }
}
