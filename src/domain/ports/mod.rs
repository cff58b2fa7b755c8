use crate::domain::models::{
    reservation::Reservation, settings::Setting, slot::Slot,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

#[async_trait]
pub trait SlotRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Slot>, AppError>;
    async fn find_by_date_and_language(&self, date: NaiveDate, language: &str) -> Result<Option<Slot>, AppError>;
    async fn list_by_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Slot>, AppError>;
    async fn update(&self, slot: &Slot) -> Result<Slot, AppError>;
    /// Inserts the given slots, skipping any whose (date, language) pair
    /// already exists. Returns the number of rows actually inserted.
    async fn insert_missing(&self, slots: &[Slot]) -> Result<u64, AppError>;
    /// Flips the blocked flag on every slot of the given date. Returns the
    /// number of rows touched.
    async fn set_blocked(&self, date: NaiveDate, blocked: bool, reason: Option<String>) -> Result<u64, AppError>;
    /// Rewrites start time and/or capacity for one language on every slot
    /// dated `from` or later. Returns the number of rows touched.
    async fn apply_defaults(&self, language: &str, start_time: Option<NaiveTime>, max_capacity: Option<i32>, from: NaiveDate) -> Result<u64, AppError>;
}

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn create(&self, reservation: &Reservation) -> Result<Reservation, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, AppError>;
    async fn list_by_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Reservation>, AppError>;
    /// Non-cancelled reservations holding quota on one turn. `exclude_id`
    /// leaves a single reservation out so an edit does not count its own
    /// guests against itself.
    async fn list_active_for_turn(&self, date: NaiveDate, language: &str, exclude_id: Option<&str>) -> Result<Vec<Reservation>, AppError>;
    async fn update(&self, reservation: &Reservation) -> Result<Reservation, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Setting>, AppError>;
    async fn upsert(&self, setting: &Setting) -> Result<(), AppError>;
}
