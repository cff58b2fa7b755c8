use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::UpdateSettingsRequest;
use crate::domain::models::settings::{is_known_setting_key, parse_start_time, Setting};
use crate::domain::models::slot::LANGUAGES;
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tracing::info;

pub async fn get_settings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let settings = state.settings_repo.get_all().await?;
    Ok(Json(settings))
}

/// Saves tuning entries and rewrites the matching fields on every turn
/// from today forward. Past turns keep what they were sold with.
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<impl IntoResponse, AppError> {
    for (key, value) in &payload.entries {
        if !is_known_setting_key(key) {
            return Err(AppError::Validation(format!("Unknown setting '{}'", key)));
        }
        if key.starts_with("start_time_") && parse_start_time(value).is_none() {
            return Err(AppError::Validation(format!("Invalid time value for '{}'", key)));
        }
        if key.starts_with("default_capacity_")
            && value.parse::<i32>().ok().filter(|c| *c >= 0).is_none()
        {
            return Err(AppError::Validation(format!("Invalid capacity value for '{}'", key)));
        }
    }

    for (key, value) in &payload.entries {
        state
            .settings_repo
            .upsert(&Setting { key: key.clone(), value: value.clone() })
            .await?;
    }

    let today = Utc::now().date_naive();
    let mut touched = 0;
    for language in LANGUAGES {
        let start_time = payload
            .entries
            .get(&format!("start_time_{language}"))
            .and_then(|v| parse_start_time(v));
        let max_capacity = payload
            .entries
            .get(&format!("default_capacity_{language}"))
            .and_then(|v| v.parse::<i32>().ok());

        if start_time.is_some() || max_capacity.is_some() {
            touched += state
                .slot_repo
                .apply_defaults(language, start_time, max_capacity, today)
                .await?;
        }
    }

    info!("update_settings: saved {} entries, rewrote {} turns", payload.entries.len(), touched);
    Ok(Json(serde_json::json!({ "status": "saved", "turns_updated": touched })))
}
