use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Reservation {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub language: String,
    pub first_name: String,
    pub last_name: String,
    pub hotel: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub guest_count: i32,
    pub status: String,
    pub notes: Option<String>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewReservationParams {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
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

impl Reservation {
    pub fn new(params: NewReservationParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            date: params.date,
            start_time: params.start_time,
            language: params.language,
            first_name: params.first_name,
            last_name: params.last_name,
            hotel: params.hotel,
            email: params.email,
            phone: params.phone,
            guest_count: params.guest_count,
            status: "confirmed".to_string(),
            notes: params.notes,
            created_by: params.created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Cancelled bookings release their quota; every other status holds it.
    pub fn occupies_quota(&self) -> bool {
        self.status != "cancelled"
    }
}

pub const HOTELS: [&str; 4] = ["Sheraton", "Huentala", "Hualta", "Externo"];
pub const RESERVATION_STATUSES: [&str; 3] = ["pending", "confirmed", "cancelled"];

/// Walk-in guests have no room number to charge back to, so we insist on
/// direct contact details for them.
pub fn requires_contact_details(hotel: &str) -> bool {
    hotel == "Externo"
}
