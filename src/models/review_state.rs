//! Scheduling state of one learning item around a single review session.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EASINESS_FACTOR: f64 = 2.5;

/// Prior scheduling values plus the inputs of the session just completed.
///
/// Built fresh from stored values before each session, advanced once with
/// [`crate::models::sm2::transition`], then read back out for storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewState {
    id: i64,
    easiness_factor: f64,
    interval_days: i32,
    repetitions: i32,
    quality: u8,
    completed_at: DateTime<Utc>,
    due_date: DateTime<Utc>,
}

impl ReviewState {
    pub fn new(
        due_date: DateTime<Utc>,
        easiness_factor: f64,
        interval_days: i32,
        repetitions: i32,
        quality: u8,
        id: i64,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            easiness_factor,
            interval_days,
            repetitions,
            quality,
            completed_at,
            due_date,
        }
    }

    /// State for an item that has never been reviewed.
    pub fn new_item(id: i64, quality: u8, completed_at: DateTime<Utc>) -> Self {
        Self::new(
            completed_at,
            DEFAULT_EASINESS_FACTOR,
            0,
            0,
            quality,
            id,
            completed_at,
        )
    }

    /// Same scheduling values, new session inputs.
    pub fn with_session(&self, quality: u8, completed_at: DateTime<Utc>) -> Self {
        Self {
            quality,
            completed_at,
            ..self.clone()
        }
    }

    /// Copy carrying the outputs of a transition; session inputs are kept.
    pub(crate) fn rescheduled(
        &self,
        easiness_factor: f64,
        interval_days: i32,
        repetitions: i32,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            easiness_factor,
            interval_days,
            repetitions,
            due_date,
            ..self.clone()
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn easiness_factor(&self) -> f64 {
        self.easiness_factor
    }

    pub fn interval_days(&self) -> i32 {
        self.interval_days
    }

    pub fn repetitions(&self) -> i32 {
        self.repetitions
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    pub fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }
}
