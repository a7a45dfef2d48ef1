//! Running the overtime calculation against a timesheet source.

use std::time::Duration as StdDuration;

use tokio::time::{Instant, sleep};
use tracing::{info, warn};

use crate::calculation::{OvertimeInput, calculate_overtime};
use crate::config::{ConfigLoader, PollingConfig};
use crate::error::{TrackerError, TrackerResult};
use crate::models::OvertimeReport;

use super::{AttendanceClient, AttendanceSlot, ResultSink, TimesheetSource, publish_overtime};

/// Waits until `source` reports it is ready.
///
/// The source is checked immediately and then once per polling interval.
///
/// # Errors
///
/// Returns [`TrackerError::ReadinessTimeout`] once `polling.timeout_ms` has
/// elapsed without the source becoming ready.
pub async fn wait_until_ready<S: TimesheetSource + ?Sized>(
    source: &S,
    polling: &PollingConfig,
) -> TrackerResult<()> {
    let interval = StdDuration::from_millis(polling.interval_ms);
    let deadline = Instant::now() + StdDuration::from_millis(polling.timeout_ms);

    loop {
        if source.is_ready() {
            return Ok(());
        }
        if Instant::now() >= deadline {
            warn!(
                timeout_ms = polling.timeout_ms,
                "Timesheet source did not become ready"
            );
            return Err(TrackerError::ReadinessTimeout {
                waited_ms: polling.timeout_ms,
            });
        }
        sleep(interval).await;
    }
}

/// Reads every calculator input from `source`.
pub fn read_input<S: TimesheetSource + ?Sized>(source: &S) -> TrackerResult<OvertimeInput> {
    Ok(OvertimeInput {
        total_worked: source.total_worked()?,
        today_worked: source.today_worked()?,
        raw_days_worked: source.worked_days_count()?,
        non_working_days: source.attendance_exceptions()?,
    })
}

/// Reads the inputs, calculates overtime and publishes it into `sink`.
pub fn run_once<S, R>(source: &S, sink: &mut R, config: &ConfigLoader) -> TrackerResult<OvertimeReport>
where
    S: TimesheetSource + ?Sized,
    R: ResultSink + ?Sized,
{
    let input = read_input(source)?;
    let report = calculate_overtime(&input, config.policy())?;
    publish_overtime(sink, config.display(), &report.overtime);

    info!(
        calculation_id = %report.calculation_id,
        overtime = %report.overtime,
        weekday_days = report.breakdown.weekday_days,
        duration_us = report.audit_trace.duration_us,
        "Overtime published"
    );

    Ok(report)
}

/// Waits for `source` to become ready, then runs the calculation once.
pub async fn run<S, R>(source: &S, sink: &mut R, config: &ConfigLoader) -> TrackerResult<OvertimeReport>
where
    S: TimesheetSource + ?Sized,
    R: ResultSink + ?Sized,
{
    wait_until_ready(source, config.polling()).await?;
    run_once(source, sink, config)
}

/// Fetches the attendance sheet into `slot` while waiting for `source`, then
/// runs the calculation once.
///
/// `source` is expected to read its attendance from `slot`.
///
/// # Errors
///
/// A failed fetch is returned as soon as it happens, without waiting for the
/// polling timeout.
pub async fn run_with_attendance<S, R>(
    source: &S,
    sink: &mut R,
    config: &ConfigLoader,
    client: &AttendanceClient,
    slot: &AttendanceSlot,
) -> TrackerResult<OvertimeReport>
where
    S: TimesheetSource + ?Sized,
    R: ResultSink + ?Sized,
{
    tokio::try_join!(
        async {
            client.fetch_into(slot).await.inspect_err(|err| {
                warn!(url = %client.url(), error = %err, "Attendance fetch failed");
            })
        },
        wait_until_ready(source, config.polling()),
    )?;
    run_once(source, sink, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{AttendanceSlot, SnapshotSource, SummaryPanel, TimesheetSnapshot};
    use crate::config::TrackerConfig;
    use crate::models::{AttendanceExceptions, AttendanceRecord, AttendanceSheet};

    fn fast_config() -> ConfigLoader {
        let config = TrackerConfig {
            polling: PollingConfig {
                interval_ms: 5,
                timeout_ms: 2000,
            },
            ..TrackerConfig::default()
        };
        ConfigLoader::from_config(config).unwrap()
    }

    fn one_weekend_day() -> AttendanceSheet {
        AttendanceSheet::new(vec![
            AttendanceRecord::default(),
            AttendanceRecord {
                date: None,
                exceptions: AttendanceExceptions {
                    worked_on_non_working_day: true,
                },
            },
        ])
    }

    #[test]
    fn test_run_once_publishes_overtime() {
        let source = SnapshotSource::new(TimesheetSnapshot::new("40:00", "00:00", "5"));
        let mut panel = SummaryPanel::new();

        let report = run_once(&source, &mut panel, &ConfigLoader::default()).unwrap();

        assert_eq!(report.overtime.to_string(), "+00:00");
        assert_eq!(panel.render(), "+00:00\nOvertime");
    }

    #[test]
    fn test_run_once_twice_replaces_result() {
        let source = SnapshotSource::new(TimesheetSnapshot::new("42:30", "02:30", "6"));
        let mut panel = SummaryPanel::new();
        let config = ConfigLoader::default();

        run_once(&source, &mut panel, &config).unwrap();
        run_once(&source, &mut panel, &config).unwrap();

        assert_eq!(panel.elements().len(), 1);
    }

    #[test]
    fn test_run_once_with_attendance() {
        let source = SnapshotSource::new(TimesheetSnapshot::new("42:30", "02:30", "6"))
            .with_attendance(AttendanceSlot::filled(one_weekend_day()));
        let mut panel = SummaryPanel::new();

        let report = run_once(&source, &mut panel, &ConfigLoader::default()).unwrap();

        assert_eq!(report.breakdown.non_working_days, Some(1));
        assert_eq!(panel.find("overtime").unwrap().value, "+08:00");
    }

    #[test]
    fn test_run_once_malformed_input_publishes_nothing() {
        let source = SnapshotSource::new(TimesheetSnapshot::new("NaN", "00:00", "5"));
        let mut panel = SummaryPanel::new();

        let result = run_once(&source, &mut panel, &ConfigLoader::default());

        assert!(matches!(result, Err(TrackerError::MalformedDuration { .. })));
        assert!(panel.elements().is_empty());
    }

    #[tokio::test]
    async fn test_wait_returns_when_slot_filled() {
        let slot = AttendanceSlot::new();
        let source = SnapshotSource::new(TimesheetSnapshot::new("42:30", "02:30", "6"))
            .with_attendance(slot.clone());

        tokio::spawn(async move {
            sleep(StdDuration::from_millis(20)).await;
            slot.set(one_weekend_day()).unwrap();
        });

        let mut panel = SummaryPanel::new();
        let report = run(&source, &mut panel, &fast_config()).await.unwrap();
        assert_eq!(report.overtime.to_string(), "+08:00");
    }

    #[tokio::test]
    async fn test_unreachable_attendance_fails_fast() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = ConfigLoader::from_config(TrackerConfig {
            polling: PollingConfig {
                interval_ms: 10,
                timeout_ms: 5000,
            },
            ..TrackerConfig::default()
        })
        .unwrap();
        let slot = AttendanceSlot::new();
        let source = SnapshotSource::new(TimesheetSnapshot::new("40:00", "00:00", "5"))
            .with_attendance(slot.clone());
        let client = AttendanceClient::new(format!("http://{}/attendance", addr));
        let mut panel = SummaryPanel::new();

        let started = Instant::now();
        let result = run_with_attendance(&source, &mut panel, &config, &client, &slot).await;

        assert!(matches!(result, Err(TrackerError::AttendanceFetch { .. })));
        assert!(started.elapsed() < StdDuration::from_millis(5000));
        assert!(panel.elements().is_empty());
    }

    #[tokio::test]
    async fn test_run_with_attendance_uses_fetched_sheet() {
        use axum::{Router, routing::get};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = Router::new().route(
            "/attendance",
            get(|| async { r#"{"attendance": [{"exceptions": {"workedOnNonWorkingDay": true}}]}"# }),
        );
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let slot = AttendanceSlot::new();
        let source = SnapshotSource::new(TimesheetSnapshot::new("42:30", "02:30", "6"))
            .with_attendance(slot.clone());
        let client = AttendanceClient::new(format!("http://{}/attendance", addr));
        let mut panel = SummaryPanel::new();

        let report = run_with_attendance(&source, &mut panel, &fast_config(), &client, &slot)
            .await
            .unwrap();

        assert_eq!(report.overtime.to_string(), "+08:00");
    }

    #[tokio::test]
    async fn test_wait_times_out_when_never_ready() {
        let source = SnapshotSource::new(TimesheetSnapshot::default());
        let polling = PollingConfig {
            interval_ms: 5,
            timeout_ms: 30,
        };

        let result = wait_until_ready(&source, &polling).await;

        match result {
            Err(TrackerError::ReadinessTimeout { waited_ms }) => assert_eq!(waited_ms, 30),
            other => panic!("Expected ReadinessTimeout, got {:?}", other),
        }
    }
}
