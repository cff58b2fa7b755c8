use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize)]
pub struct ValidateReservationRequest {
    pub date: Option<String>,
    pub language: Option<String>,
    pub excluded_reservation_id: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateReservationRequest {
    pub date: String,
    pub language: String,
    pub first_name: String,
    pub last_name: String,
    pub hotel: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub guest_count: i32,
    pub notes: Option<String>,
    pub created_by: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateReservationRequest {
    pub language: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub hotel: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub guest_count: Option<i32>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct GenerateSlotsRequest {
    pub days: i64,
}

#[derive(Deserialize)]
pub struct UpdateSlotRequest {
    pub max_capacity: Option<i32>,
    pub quotas_closed: Option<bool>,
    pub is_available: Option<bool>,
}

#[derive(Deserialize)]
pub struct BlockDayRequest {
    pub reason: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateSettingsRequest {
    pub entries: HashMap<String, String>,
}
