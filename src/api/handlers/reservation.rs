use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateReservationRequest, UpdateReservationRequest};
use crate::domain::models::reservation::{
    requires_contact_details, NewReservationParams, Reservation, HOTELS, RESERVATION_STATUSES,
};
use crate::domain::models::slot::LANGUAGES;
use crate::domain::services::admission::AdmissionDecision;
use crate::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use chrono::{NaiveDate, Utc};
use serde_json::json;
use tracing::info;

fn validate_language(language: &str) -> Result<(), AppError> {
    if LANGUAGES.contains(&language) {
        Ok(())
    } else {
        Err(AppError::Validation(format!("Invalid language '{}'", language)))
    }
}

fn validate_hotel(hotel: &str) -> Result<(), AppError> {
    if HOTELS.contains(&hotel) {
        Ok(())
    } else {
        Err(AppError::Validation(format!("Invalid hotel '{}'", hotel)))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateReservationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let date = NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    validate_language(&payload.language)?;
    validate_hotel(&payload.hotel)?;

    if payload.guest_count < 1 {
        return Err(AppError::Validation("guest_count must be at least 1".into()));
    }
    if payload.first_name.trim().is_empty() || payload.last_name.trim().is_empty() {
        return Err(AppError::Validation("Guest name is required".into()));
    }

    let email = non_empty(payload.email);
    let phone = non_empty(payload.phone);
    if requires_contact_details(&payload.hotel) && (email.is_none() || phone.is_none()) {
        return Err(AppError::Validation(
            "Email and phone are required for external guests".into(),
        ));
    }

    match state
        .admission_service
        .check(date, &payload.language, None)
        .await?
    {
        AdmissionDecision::Denied { reason, .. } => return Err(AppError::Conflict(reason)),
        AdmissionDecision::Permitted { .. } => {}
    }

    let slot = state
        .slot_repo
        .find_by_date_and_language(date, &payload.language)
        .await?
        .ok_or_else(|| AppError::Conflict("This slot does not exist.".to_string()))?;

    let reservation = Reservation::new(NewReservationParams {
        date,
        start_time: slot.start_time,
        language: payload.language,
        first_name: payload.first_name.trim().to_string(),
        last_name: payload.last_name.trim().to_string(),
        hotel: payload.hotel.clone(),
        email: if requires_contact_details(&payload.hotel) { email } else { None },
        phone: if requires_contact_details(&payload.hotel) { phone } else { None },
        guest_count: payload.guest_count,
        notes: non_empty(payload.notes),
        created_by: non_empty(payload.created_by),
    });

    let created = state.reservation_repo.create(&reservation).await?;
    info!("Reservation confirmed: {} for {} {}", created.id, created.date, created.language);
    Ok(Json(created))
}

pub async fn list_reservations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let (start_date, end_date) = if let Some(date_str) = params.get("date") {
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid date".into()))?;
        (date, date)
    } else {
        let start_str = params.get("start").ok_or(AppError::Validation("start or date required".into()))?;
        let end_str = params.get("end").ok_or(AppError::Validation("end required".into()))?;
        let start = NaiveDate::parse_from_str(start_str, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid start".into()))?;
        let end = NaiveDate::parse_from_str(end_str, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid end".into()))?;
        (start, end)
    };

    if end_date < start_date {
        return Err(AppError::Validation("end must not precede start".into()));
    }

    let mut reservations = state.reservation_repo.list_by_range(start_date, end_date).await?;

    if let Some(language) = params.get("language") {
        reservations.retain(|r| &r.language == language);
    }
    if let Some(hotel) = params.get("hotel") {
        reservations.retain(|r| &r.hotel == hotel);
    }
    if let Some(status) = params.get("status") {
        reservations.retain(|r| &r.status == status);
    }

    Ok(Json(reservations))
}

pub async fn get_reservation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = state
        .reservation_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Reservation not found".into()))?;
    Ok(Json(reservation))
}

pub async fn update_reservation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateReservationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut reservation = state
        .reservation_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Reservation not found".into()))?;

    if let Some(language) = payload.language {
        validate_language(&language)?;
        reservation.language = language;
    }
    if let Some(first_name) = payload.first_name {
        if first_name.trim().is_empty() {
            return Err(AppError::Validation("Guest name is required".into()));
        }
        reservation.first_name = first_name.trim().to_string();
    }
    if let Some(last_name) = payload.last_name {
        if last_name.trim().is_empty() {
            return Err(AppError::Validation("Guest name is required".into()));
        }
        reservation.last_name = last_name.trim().to_string();
    }
    if let Some(hotel) = payload.hotel {
        validate_hotel(&hotel)?;
        reservation.hotel = hotel;
    }
    if let Some(email) = payload.email {
        reservation.email = non_empty(Some(email));
    }
    if let Some(phone) = payload.phone {
        reservation.phone = non_empty(Some(phone));
    }
    if let Some(guest_count) = payload.guest_count {
        if guest_count < 1 {
            return Err(AppError::Validation("guest_count must be at least 1".into()));
        }
        reservation.guest_count = guest_count;
    }
    if let Some(status) = payload.status {
        if !RESERVATION_STATUSES.contains(&status.as_str()) {
            return Err(AppError::Validation(format!("Invalid status '{}'", status)));
        }
        reservation.status = status;
    }
    if let Some(notes) = payload.notes {
        reservation.notes = non_empty(Some(notes));
    }

    if requires_contact_details(&reservation.hotel) {
        if reservation.email.is_none() || reservation.phone.is_none() {
            return Err(AppError::Validation(
                "Email and phone are required for external guests".into(),
            ));
        }
    } else {
        reservation.email = None;
        reservation.phone = None;
    }

    // Edits that keep the reservation active re-pass the admission gate,
    // with its own guests left out of the count.
    if reservation.occupies_quota() {
        match state
            .admission_service
            .check(reservation.date, &reservation.language, Some(&reservation.id))
            .await?
        {
            AdmissionDecision::Denied { reason, .. } => return Err(AppError::Conflict(reason)),
            AdmissionDecision::Permitted { .. } => {}
        }

        let slot = state
            .slot_repo
            .find_by_date_and_language(reservation.date, &reservation.language)
            .await?
            .ok_or_else(|| AppError::Conflict("This slot does not exist.".to_string()))?;
        reservation.start_time = slot.start_time;
    }

    reservation.updated_at = Utc::now();
    let updated = state.reservation_repo.update(&reservation).await?;
    info!("Reservation updated: {} ({})", updated.id, updated.status);
    Ok(Json(updated))
}

pub async fn delete_reservation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.reservation_repo.delete(&id).await?;
    info!("Reservation deleted: {}", id);
    Ok(Json(json!({ "status": "deleted" })))
}
