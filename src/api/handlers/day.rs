use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::BlockDayRequest;
use crate::api::dtos::responses::DayStatusResponse;
use crate::domain::services::availability::project_day;
use crate::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use chrono::{Duration, NaiveDate};
use serde_json::json;
use tracing::info;

pub async fn get_day_status(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    let slots = state.slot_repo.list_by_range(date, date).await?;
    let reservations = state.reservation_repo.list_by_range(date, date).await?;

    let exclude = params.get("exclude_reservation").map(|s| s.as_str());
    let turns = project_day(date, &slots, &reservations, exclude);

    Ok(Json(DayStatusResponse { date, turns }))
}

pub async fn list_day_statuses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let start_str = params.get("start").ok_or(AppError::Validation("start required".into()))?;
    let end_str = params.get("end").ok_or(AppError::Validation("end required".into()))?;

    let start_date = NaiveDate::parse_from_str(start_str, "%Y-%m-%d").map_err(|_| AppError::Validation("Invalid start".into()))?;
    let end_date = NaiveDate::parse_from_str(end_str, "%Y-%m-%d").map_err(|_| AppError::Validation("Invalid end".into()))?;

    if end_date < start_date {
        return Err(AppError::Validation("end must not precede start".into()));
    }

    let slots = state.slot_repo.list_by_range(start_date, end_date).await?;
    let reservations = state.reservation_repo.list_by_range(start_date, end_date).await?;

    let mut days = Vec::new();
    let mut current_date = start_date;

    while current_date <= end_date {
        let turns = project_day(current_date, &slots, &reservations, None);
        days.push(DayStatusResponse { date: current_date, turns });
        current_date += Duration::days(1);
    }

    Ok(Json(days))
}

pub async fn block_day(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
    Json(payload): Json<BlockDayRequest>,
) -> Result<impl IntoResponse, AppError> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    let reason = payload.reason.filter(|r| !r.trim().is_empty());
    let touched = state.slot_repo.set_blocked(date, true, reason).await?;

    if touched == 0 {
        return Err(AppError::NotFound("No slots configured for this date".into()));
    }

    info!("block_day: blocked {} turns on {}", touched, date);
    Ok(Json(json!({ "status": "blocked", "turns": touched })))
}

pub async fn unblock_day(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    let touched = state.slot_repo.set_blocked(date, false, None).await?;

    if touched == 0 {
        return Err(AppError::NotFound("No slots configured for this date".into()));
    }

    info!("unblock_day: unblocked {} turns on {}", touched, date);
    Ok(Json(json!({ "status": "unblocked", "turns": touched })))
}
