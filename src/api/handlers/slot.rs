use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{GenerateSlotsRequest, UpdateSlotRequest};
use crate::api::dtos::responses::GeneratedSlotsResponse;
use crate::domain::models::settings::SlotDefaults;
use crate::domain::models::slot::{Slot, LANGUAGES};
use crate::error::AppError;
use std::sync::Arc;
use chrono::{Duration, Utc};
use tracing::info;

/// Lays out one slot per language for every day of the horizon, starting
/// today. Days that already carry a slot for a language keep theirs.
pub async fn generate_slots(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateSlotsRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.days < 1 {
        return Err(AppError::Validation("days must be at least 1".into()));
    }

    let settings = state.settings_repo.get_all().await?;
    let defaults = SlotDefaults::from_settings(settings);

    let today = Utc::now().date_naive();
    let end_date = today + Duration::days(payload.days - 1);

    let mut candidates = Vec::new();
    let mut current_date = today;
    while current_date <= end_date {
        for language in LANGUAGES {
            candidates.push(Slot::new(
                current_date,
                defaults.start_time_for(language),
                language,
                defaults.capacity_for(language),
            ));
        }
        current_date += Duration::days(1);
    }

    let created = state.slot_repo.insert_missing(&candidates).await?;
    info!("generate_slots: created {} of {} candidate turns", created, candidates.len());

    Ok(Json(GeneratedSlotsResponse { created }))
}

pub async fn update_slot(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateSlotRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut slot = state
        .slot_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Slot not found".into()))?;

    if let Some(max_capacity) = payload.max_capacity {
        if max_capacity < 0 {
            return Err(AppError::Validation("max_capacity cannot be negative".into()));
        }
        slot.max_capacity = max_capacity;
    }
    if let Some(quotas_closed) = payload.quotas_closed {
        slot.quotas_closed = quotas_closed;
    }
    if let Some(is_available) = payload.is_available {
        slot.is_available = is_available;
    }

    let updated = state.slot_repo.update(&slot).await?;
    Ok(Json(updated))
}
