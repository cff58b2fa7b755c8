use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

/// One bookable language turn on one calendar date ("turno").
/// At most one row exists per (date, language) pair.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Slot {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub language: String,
    pub is_available: bool,
    pub is_blocked: bool,
    pub block_reason: Option<String>,
    pub max_capacity: i32,
    pub quotas_closed: bool,
    pub created_at: DateTime<Utc>,
}

impl Slot {
    pub fn new(date: NaiveDate, start_time: NaiveTime, language: &str, max_capacity: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            start_time,
            language: language.to_string(),
            is_available: true,
            is_blocked: false,
            block_reason: None,
            max_capacity,
            quotas_closed: false,
            created_at: Utc::now(),
        }
    }

    /// Remaining quota after bookings. Blocked, closed or disabled turns
    /// book as zero regardless of raw capacity.
    pub fn effective_remaining(&self, reserved_guests: i32) -> i32 {
        if self.is_blocked || self.quotas_closed || !self.is_available {
            return 0;
        }
        (self.max_capacity - reserved_guests).max(0)
    }
}

/// Per-turn availability snapshot derived from a `Slot` plus the day's
/// reservations. This is a view, never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TurnStatus {
    pub id: String,
    pub start_time: NaiveTime,
    pub language: String,
    pub is_available: bool,
    pub is_blocked: bool,
    pub quotas_closed: bool,
    pub block_reason: Option<String>,
    pub max_capacity: i32,
    pub reserved_guests: i32,
    pub remaining_capacity: i32,
}

pub const LANGUAGES: [&str; 3] = ["es", "en", "pt"];
