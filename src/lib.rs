pub mod config;
pub mod error;
pub mod export;
pub mod models;

pub use config::{QualityPolicy, SchedulerConfig};
pub use error::{ConfigError, ScheduleError};
pub use models::{ReviewState, transition, transition_with};
