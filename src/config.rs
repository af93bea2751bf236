//! Tunable SM-2 parameters.
//!
//! The defaults reproduce classic SM-2 exactly: easiness factor clamped to
//! [1.3, 2.5], intervals of 1 and 6 days for the first two successful reviews,
//! and any score below 3 counted as a failure.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const MAX_QUALITY: u8 = 5;

/// What to do with a quality score outside 0-5.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityPolicy {
    /// Fail the transition with `ScheduleError::InvalidQuality`
    #[default]
    Reject,
    /// Treat anything above 5 as 5
    Clamp,
    /// Run the formulas on the raw score
    PassThrough,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
    pub min_easiness_factor: f64,
    pub max_easiness_factor: f64,
    pub first_interval_days: i32,
    pub second_interval_days: i32,
    pub failure_interval_days: i32,
    /// Scores strictly below this reset the repetition count
    pub passing_quality: u8,
    pub quality_policy: QualityPolicy,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            min_easiness_factor: 1.3,
            max_easiness_factor: 2.5,
            first_interval_days: 1,
            second_interval_days: 6,
            failure_interval_days: 1,
            passing_quality: 3,
            quality_policy: QualityPolicy::Reject,
        }
    }
}

impl SchedulerConfig {
    /// Checks that the bounds and intervals describe a usable schedule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_easiness_factor.is_finite() || !self.max_easiness_factor.is_finite() {
            return Err(ConfigError::Invalid(
                "easiness factor bounds must be finite".to_string(),
            ));
        }
        if self.min_easiness_factor <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_easiness_factor must be positive, got {}",
                self.min_easiness_factor
            )));
        }
        if self.min_easiness_factor > self.max_easiness_factor {
            return Err(ConfigError::Invalid(format!(
                "min_easiness_factor {} exceeds max_easiness_factor {}",
                self.min_easiness_factor, self.max_easiness_factor
            )));
        }

        let intervals = [
            ("first_interval_days", self.first_interval_days),
            ("second_interval_days", self.second_interval_days),
            ("failure_interval_days", self.failure_interval_days),
        ];
        for (name, days) in intervals {
            if days < 1 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be at least 1, got {}",
                    name, days
                )));
            }
        }

        if self.passing_quality > MAX_QUALITY {
            return Err(ConfigError::Invalid(format!(
                "passing_quality {} is above the maximum score {}",
                self.passing_quality, MAX_QUALITY
            )));
        }

        Ok(())
    }
}
