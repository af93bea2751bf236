//! Error types for scheduling and configuration.

use thiserror::Error;

/// Failures of a single review transition.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Quality score outside 0..=5 while the `reject` policy is active
    #[error("invalid quality score {0}: expected 0-5")]
    InvalidQuality(u8),
    #[error("due date {interval_days} days after completion is out of range")]
    DueDateOutOfRange { interval_days: i32 },
    #[error("invalid scheduler configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Failures loading or validating a [`crate::config::SchedulerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Invalid(String),
}
