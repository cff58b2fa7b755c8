use axum::{extract::State, http::StatusCode, Json};
use crate::api::dtos::requests::ValidateReservationRequest;
use crate::api::dtos::responses::ValidationResponse;
use crate::domain::services::admission::{AdmissionDecision, DenialCategory};
use crate::state::AppState;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{error, info};

/// Pre-flight admission check. Policy denials answer 200 with
/// `permitted: false`; only transport problems (bad input, unknown turn,
/// store faults) use error status codes.
pub async fn validate_reservation(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ValidateReservationRequest>,
) -> (StatusCode, Json<ValidationResponse>) {
    let (Some(date_str), Some(language)) = (payload.date.as_deref(), payload.language.as_deref())
    else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ValidationResponse::denied("Missing required fields.")),
        );
    };

    let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ValidationResponse::denied("Invalid date format.")),
        );
    };

    let decision = state
        .admission_service
        .check(date, language, payload.excluded_reservation_id.as_deref())
        .await;

    match decision {
        Ok(AdmissionDecision::Permitted { remaining_capacity }) => {
            info!("validate_reservation: permitted {} {} ({} seats left)", date, language, remaining_capacity);
            (StatusCode::OK, Json(ValidationResponse::permitted(remaining_capacity)))
        }
        Ok(AdmissionDecision::Denied { category, reason }) => {
            let status = if category == DenialCategory::NotFound {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::OK
            };
            (status, Json(ValidationResponse::denied(reason)))
        }
        Err(e) => {
            error!("validate_reservation: availability check failed: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ValidationResponse::denied("Could not verify availability.")),
            )
        }
    }
}
