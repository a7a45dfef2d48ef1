//! HTTP API module for the overtime tracker.
//!
//! This module provides the REST API endpoints for calculating overtime
//! from raw timesheet values.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DaysWorked, OvertimeRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
