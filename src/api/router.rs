use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{day, health, reservation, settings, slot, validation};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Admission gate
        .route("/api/v1/reservations/validate", post(validation::validate_reservation))

        // Reservations
        .route("/api/v1/reservations", post(reservation::create_reservation).get(reservation::list_reservations))
        .route("/api/v1/reservations/{id}", get(reservation::get_reservation).put(reservation::update_reservation).delete(reservation::delete_reservation))

        // Day availability & blocking
        .route("/api/v1/days", get(day::list_day_statuses))
        .route("/api/v1/days/{date}", get(day::get_day_status))
        .route("/api/v1/days/{date}/block", post(day::block_day))
        .route("/api/v1/days/{date}/unblock", post(day::unblock_day))

        // Slot administration
        .route("/api/v1/slots/generate", post(slot::generate_slots))
        .route("/api/v1/slots/{id}", put(slot::update_slot))

        // Settings
        .route("/api/v1/settings", get(settings::get_settings).put(settings::update_settings))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
