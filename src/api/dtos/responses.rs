use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::models::slot::TurnStatus;

#[derive(Serialize)]
pub struct ValidationResponse {
    pub permitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_capacity: Option<i32>,
}

impl ValidationResponse {
    pub fn permitted(remaining_capacity: i32) -> Self {
        Self {
            permitted: true,
            reason: None,
            remaining_capacity: Some(remaining_capacity),
        }
    }

    pub fn denied(reason: impl Into<String>) -> Self {
        Self {
            permitted: false,
            reason: Some(reason.into()),
            remaining_capacity: None,
        }
    }
}

#[derive(Serialize)]
pub struct DayStatusResponse {
    pub date: NaiveDate,
    pub turns: Vec<TurnStatus>,
}

#[derive(Serialize)]
pub struct GeneratedSlotsResponse {
    pub created: u64,
}
