use crate::domain::{models::slot::Slot, ports::SlotRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;

pub struct PostgresSlotRepo {
    pool: PgPool,
}

impl PostgresSlotRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotRepository for PostgresSlotRepo {
    async fn find_by_id(&self, id: &str) -> Result<Option<Slot>, AppError> {
        sqlx::query_as::<_, Slot>("SELECT * FROM slots WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_date_and_language(&self, date: NaiveDate, language: &str) -> Result<Option<Slot>, AppError> {
        sqlx::query_as::<_, Slot>("SELECT * FROM slots WHERE date = $1 AND language = $2").bind(date).bind(language).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Slot>, AppError> {
        sqlx::query_as::<_, Slot>("SELECT * FROM slots WHERE date >= $1 AND date <= $2 ORDER BY date ASC, start_time ASC").bind(start).bind(end).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update(&self, slot: &Slot) -> Result<Slot, AppError> {
        sqlx::query_as::<_, Slot>("UPDATE slots SET start_time=$1, is_available=$2, is_blocked=$3, block_reason=$4, max_capacity=$5, quotas_closed=$6 WHERE id=$7 RETURNING *").bind(slot.start_time).bind(slot.is_available).bind(slot.is_blocked).bind(&slot.block_reason).bind(slot.max_capacity).bind(slot.quotas_closed).bind(&slot.id).fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn insert_missing(&self, slots: &[Slot]) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let mut inserted = 0;
        for slot in slots {
            let result = sqlx::query("INSERT INTO slots (id, date, start_time, language, is_available, is_blocked, block_reason, max_capacity, quotas_closed, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) ON CONFLICT (date, language) DO NOTHING").bind(&slot.id).bind(slot.date).bind(slot.start_time).bind(&slot.language).bind(slot.is_available).bind(slot.is_blocked).bind(&slot.block_reason).bind(slot.max_capacity).bind(slot.quotas_closed).bind(slot.created_at).execute(&mut *tx).await.map_err(AppError::Database)?;
            inserted += result.rows_affected();
        }
        tx.commit().await.map_err(AppError::Database)?;
        Ok(inserted)
    }
    async fn set_blocked(&self, date: NaiveDate, blocked: bool, reason: Option<String>) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE slots SET is_blocked = $1, block_reason = $2 WHERE date = $3").bind(blocked).bind(&reason).bind(date).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }
    async fn apply_defaults(&self, language: &str, start_time: Option<NaiveTime>, max_capacity: Option<i32>, from: NaiveDate) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE slots SET start_time = COALESCE($1, start_time), max_capacity = COALESCE($2, max_capacity) WHERE language = $3 AND date >= $4").bind(start_time).bind(max_capacity).bind(language).bind(from).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }
}
