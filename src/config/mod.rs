//! Configuration loading and management for the overtime tracker.
//!
//! This module provides functionality to load the tracker configuration from
//! a YAML file: the overtime policy, readiness polling, result display and
//! attendance source.
//!
//! # Example
//!
//! ```no_run
//! use overtime_tracker::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/overtime.yaml").unwrap();
//! println!("Caption: {}", config.display().caption);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AttendanceConfig, DisplayConfig, PolicyConfig, PollingConfig, TrackerConfig};
