use reservas_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    domain::services::admission::AdmissionService,
    infra::repositories::{
        sqlite_reservation_repo::SqliteReservationRepo,
        sqlite_settings_repo::SqliteSettingsRepo,
        sqlite_slot_repo::SqliteSlotRepo,
    },
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use axum::Router;
use chrono::Utc;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
        };

        let slot_repo = Arc::new(SqliteSlotRepo::new(pool.clone()));
        let reservation_repo = Arc::new(SqliteReservationRepo::new(pool.clone()));
        let admission_service = Arc::new(AdmissionService::new(
            slot_repo.clone(),
            reservation_repo.clone(),
        ));

        let state = Arc::new(AppState {
            config,
            slot_repo,
            reservation_repo,
            settings_repo: Arc::new(SqliteSettingsRepo::new(pool.clone())),
            admission_service,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Seeds one slot row directly. The HTTP surface only lays out slots
    /// from today forward, so tests that need a specific date insert here.
    pub async fn insert_slot(&self, date: &str, start_time: &str, language: &str, max_capacity: i32) -> String {
        let id = Uuid::new_v4().to_string();
        sqlx::query(
            "INSERT INTO slots (id, date, start_time, language, is_available, is_blocked, block_reason, max_capacity, quotas_closed, created_at) VALUES (?, ?, ?, ?, TRUE, FALSE, NULL, ?, FALSE, ?)"
        )
            .bind(&id)
            .bind(date)
            .bind(start_time)
            .bind(language)
            .bind(max_capacity)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .expect("Failed to seed slot");
        id
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
