//! SM-2 (SuperMemo 2) spaced repetition algorithm implementation.
//!
//! One review session moves an item's schedule forward:
//! - The easiness factor (EF) is recomputed from the quality score and clamped to [1.3, 2.5]
//! - The provisional interval is the previous interval times the new EF, rounded up
//! - The first and second consecutive successes always get 1 and 6 days
//! - A score below 3 resets the repetition count and brings the item back the next day
//!
//! The due date is the session completion time plus the interval in whole days.

use super::ReviewState;
use crate::config::{MAX_QUALITY, QualityPolicy, SchedulerConfig};
use crate::error::ScheduleError;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

/// Advances `state` by one session using the classic SM-2 parameters.
pub fn transition(state: &ReviewState) -> Result<ReviewState, ScheduleError> {
    transition_with(state, &SchedulerConfig::default())
}

/// Advances `state` by one session. `id`, `quality` and `completed_at` are
/// carried over untouched.
pub fn transition_with(
    state: &ReviewState,
    config: &SchedulerConfig,
) -> Result<ReviewState, ScheduleError> {
    config.validate()?;
    let quality = effective_quality(state.quality(), config.quality_policy)?;

    let new_ef = next_easiness_factor(state.easiness_factor(), quality, config);

    let mut new_interval = (state.interval_days() as f64 * new_ef).ceil() as i32;
    let mut new_repetitions = state.repetitions().saturating_add(1);

    if new_repetitions == 1 {
        new_interval = config.first_interval_days;
    }
    if new_repetitions == 2 {
        new_interval = config.second_interval_days;
    }

    // Failure wins over the milestones above
    if quality < config.passing_quality {
        new_repetitions = 0;
        new_interval = config.failure_interval_days;
    }

    let due_date = due_date_after(state.completed_at(), new_interval)?;

    debug!(
        id = state.id(),
        quality,
        ef = new_ef,
        interval_days = new_interval,
        repetitions = new_repetitions,
        %due_date,
        "rescheduled review item"
    );

    Ok(state.rescheduled(new_ef, new_interval, new_repetitions, due_date))
}

/// EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)), clamped to the configured bounds.
pub fn next_easiness_factor(easiness_factor: f64, quality: u8, config: &SchedulerConfig) -> f64 {
    let distance = MAX_QUALITY as f64 - quality as f64;
    let mut new_ef = easiness_factor + (0.1 - distance * (0.08 + distance * 0.02));

    if new_ef < config.min_easiness_factor {
        new_ef = config.min_easiness_factor;
    }
    if new_ef > config.max_easiness_factor {
        new_ef = config.max_easiness_factor;
    }

    new_ef
}

/// Completion time plus `interval_days` whole days of 86400 seconds.
pub fn due_date_after(
    completed_at: DateTime<Utc>,
    interval_days: i32,
) -> Result<DateTime<Utc>, ScheduleError> {
    completed_at
        .checked_add_signed(Duration::days(i64::from(interval_days)))
        .ok_or(ScheduleError::DueDateOutOfRange { interval_days })
}

fn effective_quality(quality: u8, policy: QualityPolicy) -> Result<u8, ScheduleError> {
    if quality <= MAX_QUALITY {
        return Ok(quality);
    }

    match policy {
        QualityPolicy::Reject => Err(ScheduleError::InvalidQuality(quality)),
        QualityPolicy::Clamp => Ok(MAX_QUALITY),
        QualityPolicy::PassThrough => {
            warn!(quality, "quality score above 5 passed through unchecked");
            Ok(quality)
        }
    }
}
