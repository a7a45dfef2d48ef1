//! HTTP client for the attendance endpoint.

use reqwest::header::ACCEPT;
use tracing::{debug, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::models::AttendanceSheet;

use super::AttendanceSlot;

/// Fetches the attendance sheet for the current period.
///
/// # Example
///
/// ```no_run
/// use overtime_tracker::adapter::{AttendanceClient, AttendanceSlot};
///
/// # async fn example() -> overtime_tracker::error::TrackerResult<()> {
/// let client = AttendanceClient::new("https://timesheets.example.com/api/attendance/current");
/// let slot = AttendanceSlot::new();
/// client.fetch_into(&slot).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AttendanceClient {
    http: reqwest::Client,
    url: String,
}

impl AttendanceClient {
    /// Creates a client with a default HTTP client.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Creates a client reusing an existing HTTP client (cookies, proxies, timeouts).
    pub fn with_client(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// Returns the attendance URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issues one GET request and parses the attendance sheet.
    ///
    /// # Errors
    ///
    /// - [`TrackerError::AttendanceFetch`] on transport failure or a non-success status
    /// - [`TrackerError::AttendanceParse`] if the body is not an attendance sheet
    pub async fn fetch(&self) -> TrackerResult<AttendanceSheet> {
        debug!(url = %self.url, "Fetching attendance sheet");

        let response = self
            .http
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = %status, "Attendance request rejected");
            return Err(self.fetch_error(format!("unexpected status {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.fetch_error(e.to_string()))?;

        let sheet = AttendanceSheet::from_json(&body)?;
        debug!(
            url = %self.url,
            records = sheet.attendance.len(),
            non_working_days = sheet.non_working_day_count(),
            "Attendance sheet fetched"
        );
        Ok(sheet)
    }

    /// Fetches the sheet and stores it in `slot`.
    pub async fn fetch_into(&self, slot: &AttendanceSlot) -> TrackerResult<()> {
        let sheet = self.fetch().await?;
        slot.set(sheet)
    }

    fn fetch_error(&self, message: String) -> TrackerError {
        TrackerError::AttendanceFetch {
            url: self.url.clone(),
            message,
        }
    }
}
