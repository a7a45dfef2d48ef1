use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

use overtime_tracker::adapter::{
    AttendanceClient, AttendanceSlot, SnapshotSource, SummaryPanel, TimesheetSnapshot, run,
    run_with_attendance,
};
use overtime_tracker::api::{AppState, create_router};
use overtime_tracker::config::ConfigLoader;

#[derive(Parser)]
#[command(name = "overtime-tracker", version, about = "Timesheet overtime calculator")]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate overtime from a captured timesheet snapshot.
    Compute {
        /// JSON file with `total_worked`, `today_worked` and `days_worked`.
        snapshot: PathBuf,
        /// Attendance sheet URL, overriding the configured one.
        #[arg(long)]
        attendance_url: Option<String>,
        /// Print the full report as JSON instead of the summary.
        #[arg(long)]
        json: bool,
    },
    /// Serve the HTTP API.
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Compute {
            snapshot,
            attendance_url,
            json,
        } => compute(&config, &snapshot, attendance_url, json).await,
        Commands::Serve { addr } => serve(config, &addr).await,
    }
}

fn load_config(path: Option<&Path>) -> Result<ConfigLoader> {
    match path {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(ConfigLoader::default()),
    }
}

async fn compute(
    config: &ConfigLoader,
    snapshot_path: &Path,
    attendance_url: Option<String>,
    json: bool,
) -> Result<()> {
    let raw = std::fs::read_to_string(snapshot_path)
        .with_context(|| format!("reading snapshot {}", snapshot_path.display()))?;
    let snapshot: TimesheetSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("parsing snapshot {}", snapshot_path.display()))?;

    let source = SnapshotSource::new(snapshot);
    let mut panel = SummaryPanel::new();

    let attendance_url = attendance_url.or_else(|| config.attendance().url.clone());
    let report = match attendance_url {
        Some(url) => {
            let slot = AttendanceSlot::new();
            let source = source.with_attendance(slot.clone());
            let client = AttendanceClient::new(url);
            run_with_attendance(&source, &mut panel, config, &client, &slot).await?
        }
        None => run(&source, &mut panel, config).await?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", panel.render());
    }

    Ok(())
}

async fn serve(config: ConfigLoader, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(addr = %listener.local_addr()?, "Serving overtime API");

    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}
