use crate::domain::{models::reservation::Reservation, ports::ReservationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub struct SqliteReservationRepo {
    pool: SqlitePool,
}

impl SqliteReservationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for SqliteReservationRepo {
    async fn create(&self, reservation: &Reservation) -> Result<Reservation, AppError> {
        sqlx::query_as::<_, Reservation>(
            "INSERT INTO reservations (id, date, start_time, language, first_name, last_name, hotel, email, phone, guest_count, status, notes, created_by, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&reservation.id).bind(reservation.date).bind(reservation.start_time).bind(&reservation.language)
            .bind(&reservation.first_name).bind(&reservation.last_name).bind(&reservation.hotel)
            .bind(&reservation.email).bind(&reservation.phone).bind(reservation.guest_count)
            .bind(&reservation.status).bind(&reservation.notes).bind(&reservation.created_by)
            .bind(reservation.created_at).bind(reservation.updated_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE date >= ? AND date <= ? ORDER BY created_at DESC").bind(start).bind(end).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_active_for_turn(&self, date: NaiveDate, language: &str, exclude_id: Option<&str>) -> Result<Vec<Reservation>, AppError> {
        match exclude_id {
            Some(exclude) => sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE date = ? AND language = ? AND status != 'cancelled' AND id != ?").bind(date).bind(language).bind(exclude).fetch_all(&self.pool).await.map_err(AppError::Database),
            None => sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE date = ? AND language = ? AND status != 'cancelled'").bind(date).bind(language).fetch_all(&self.pool).await.map_err(AppError::Database),
        }
    }
    async fn update(&self, reservation: &Reservation) -> Result<Reservation, AppError> {
        sqlx::query_as::<_, Reservation>(
            "UPDATE reservations SET start_time=?, language=?, first_name=?, last_name=?, hotel=?, email=?, phone=?, guest_count=?, status=?, notes=?, updated_at=?
             WHERE id=?
             RETURNING *"
        )
            .bind(reservation.start_time).bind(&reservation.language).bind(&reservation.first_name)
            .bind(&reservation.last_name).bind(&reservation.hotel).bind(&reservation.email)
            .bind(&reservation.phone).bind(reservation.guest_count).bind(&reservation.status)
            .bind(&reservation.notes).bind(reservation.updated_at)
            .bind(&reservation.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = ?").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Reservation not found".into())); }
        Ok(())
    }
}
