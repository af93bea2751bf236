//! sm2-review CLI
//!
//! Applies one study session to a stored review state and prints the next schedule.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::Parser;
use sm2_scheduler::export::json::{export_state_to_path, import_config, import_state};
use sm2_scheduler::{ReviewState, SchedulerConfig, transition_with};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Computes the next SM-2 review schedule for one item after a study session
#[derive(Debug, Parser)]
#[command(name = "sm2-review")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = "Set RUST_LOG (e.g. debug, info, warn) to control logging on stderr.")]
struct Cli {
    /// Prior review state as JSON
    #[arg(long, conflicts_with = "new", required_unless_present = "new")]
    state: Option<PathBuf>,

    /// Start a never-reviewed item with this id
    #[arg(long, conflicts_with = "state", required_unless_present = "state")]
    new: Option<i64>,

    /// Recall quality of the session (0-5)
    #[arg(long, value_parser = clap::value_parser!(u8))]
    quality: u8,

    /// Session completion time as RFC 3339 (default: now)
    #[arg(long, value_parser = parse_completed_at)]
    completed_at: Option<DateTime<Utc>>,

    /// Scheduler configuration as JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the next state here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn parse_completed_at(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp: {}", e))
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => import_config(path)?,
        None => SchedulerConfig::default(),
    };
    let completed_at = cli.completed_at.unwrap_or_else(Utc::now);

    let prior = match (&cli.state, cli.new) {
        (Some(path), _) => import_state(path)?.with_session(cli.quality, completed_at),
        (None, Some(id)) => ReviewState::new_item(id, cli.quality, completed_at),
        (None, None) => return Err("one of --state or --new is required".into()),
    };

    let next = transition_with(&prior, &config)?;
    info!(
        id = next.id(),
        interval_days = next.interval_days(),
        due_date = %next.due_date(),
        "next review scheduled"
    );

    match &cli.output {
        Some(path) => export_state_to_path(&next, path)?,
        None => println!("{}", serde_json::to_string_pretty(&next)?),
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries the JSON result
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
