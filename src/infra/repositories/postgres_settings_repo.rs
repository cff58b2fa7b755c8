use crate::domain::{models::settings::Setting, ports::SettingsRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresSettingsRepo {
    pool: PgPool,
}

impl PostgresSettingsRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PostgresSettingsRepo {
    async fn get_all(&self) -> Result<Vec<Setting>, AppError> {
        sqlx::query_as::<_, Setting>("SELECT * FROM settings ORDER BY key ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn upsert(&self, setting: &Setting) -> Result<(), AppError> {
        sqlx::query("INSERT INTO settings (key, value) VALUES ($1, $2) ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value").bind(&setting.key).bind(&setting.value).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }
}
