use serde::{Deserialize, Serialize};
use chrono::NaiveTime;
use sqlx::FromRow;

use crate::domain::models::slot::LANGUAGES;

/// Single key/value tuning entry. Known keys are `start_time_{lang}` and
/// `default_capacity_{lang}`.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Setting {
    pub key: String,
    pub value: String,
}

pub fn is_known_setting_key(key: &str) -> bool {
    LANGUAGES.iter().any(|lang| {
        key == format!("start_time_{lang}") || key == format!("default_capacity_{lang}")
    })
}

pub const DEFAULT_MAX_CAPACITY: i32 = 20;

/// Per-language defaults applied when generating new slots. Values come
/// from the settings table, with built-in fallbacks when unset.
#[derive(Debug, Clone)]
pub struct SlotDefaults {
    entries: Vec<Setting>,
}

impl SlotDefaults {
    pub fn from_settings(entries: Vec<Setting>) -> Self {
        Self { entries }
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.value.as_str())
    }

    pub fn start_time_for(&self, language: &str) -> NaiveTime {
        self.lookup(&format!("start_time_{language}"))
            .and_then(parse_start_time)
            .unwrap_or_else(|| fallback_start_time(language))
    }

    pub fn capacity_for(&self, language: &str) -> i32 {
        self.lookup(&format!("default_capacity_{language}"))
            .and_then(|v| v.parse::<i32>().ok())
            .filter(|c| *c >= 0)
            .unwrap_or(DEFAULT_MAX_CAPACITY)
    }
}

/// Accepts "HH:MM" as entered in the dashboard and "HH:MM:SS" as stored.
pub fn parse_start_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

fn fallback_start_time(language: &str) -> NaiveTime {
    let (hour, minute) = match language {
        "pt" => (18, 30),
        "en" => (19, 30),
        _ => (19, 0),
    };
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}
