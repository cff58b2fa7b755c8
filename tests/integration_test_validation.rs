mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, Utc};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_json(app: &TestApp, uri: &str, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

async fn put_json(app: &TestApp, uri: &str, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("PUT").uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

fn future_date(days: i64) -> String {
    (Utc::now() + Duration::days(days)).format("%Y-%m-%d").to_string()
}

fn reservation_payload(date: &str, language: &str, guest_count: i32) -> Value {
    json!({
        "date": date,
        "language": language,
        "first_name": "Lucia",
        "last_name": "Perez",
        "hotel": "Sheraton",
        "guest_count": guest_count
    })
}

#[tokio::test]
async fn test_validate_permits_empty_turn() {
    let app = TestApp::new().await;
    let date = future_date(30);
    app.insert_slot(&date, "19:00:00", "es", 20).await;

    let res = post_json(&app, "/api/v1/reservations/validate", json!({
        "date": date, "language": "es"
    })).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["permitted"], true);
    assert_eq!(body["remaining_capacity"], 20);
}

#[tokio::test]
async fn test_validate_counts_existing_guests() {
    let app = TestApp::new().await;
    let date = future_date(31);
    app.insert_slot(&date, "19:00:00", "es", 20).await;

    post_json(&app, "/api/v1/reservations", reservation_payload(&date, "es", 15)).await;
    post_json(&app, "/api/v1/reservations", reservation_payload(&date, "es", 3)).await;

    let res = post_json(&app, "/api/v1/reservations/validate", json!({
        "date": date, "language": "es"
    })).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["permitted"], true);
    assert_eq!(body["remaining_capacity"], 2);
}

#[tokio::test]
async fn test_validate_denies_full_turn() {
    let app = TestApp::new().await;
    let date = future_date(32);
    app.insert_slot(&date, "19:00:00", "es", 5).await;

    post_json(&app, "/api/v1/reservations", reservation_payload(&date, "es", 2)).await;
    post_json(&app, "/api/v1/reservations", reservation_payload(&date, "es", 3)).await;

    let res = post_json(&app, "/api/v1/reservations/validate", json!({
        "date": date, "language": "es"
    })).await;

    assert_eq!(res.status(), StatusCode::OK, "policy denials still answer 200");
    let body = parse_body(res).await;
    assert_eq!(body["permitted"], false);
    assert_eq!(body["reason"], "No remaining capacity.");
    assert!(body.get("remaining_capacity").is_none());
}

#[tokio::test]
async fn test_validate_permits_last_seat_regardless_of_party_size() {
    let app = TestApp::new().await;
    let date = future_date(33);
    app.insert_slot(&date, "19:00:00", "es", 5).await;

    post_json(&app, "/api/v1/reservations", reservation_payload(&date, "es", 4)).await;

    let res = post_json(&app, "/api/v1/reservations/validate", json!({
        "date": date, "language": "es"
    })).await;

    let body = parse_body(res).await;
    assert_eq!(body["permitted"], true);
    assert_eq!(body["remaining_capacity"], 1);
}

#[tokio::test]
async fn test_validate_denies_blocked_day_with_reason() {
    let app = TestApp::new().await;
    let date = future_date(34);
    app.insert_slot(&date, "19:00:00", "es", 20).await;

    let block = post_json(&app, &format!("/api/v1/days/{}/block", date), json!({
        "reason": "mantenimiento"
    })).await;
    assert_eq!(block.status(), StatusCode::OK);

    let res = post_json(&app, "/api/v1/reservations/validate", json!({
        "date": date, "language": "es"
    })).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["permitted"], false);
    assert_eq!(body["reason"], "mantenimiento");
}

#[tokio::test]
async fn test_validate_blocked_day_without_reason_uses_fallback() {
    let app = TestApp::new().await;
    let date = future_date(35);
    app.insert_slot(&date, "19:00:00", "es", 20).await;

    post_json(&app, &format!("/api/v1/days/{}/block", date), json!({})).await;

    let res = post_json(&app, "/api/v1/reservations/validate", json!({
        "date": date, "language": "es"
    })).await;

    let body = parse_body(res).await;
    assert_eq!(body["permitted"], false);
    assert_eq!(body["reason"], "This day is blocked.");
}

#[tokio::test]
async fn test_validate_denies_closed_quotas() {
    let app = TestApp::new().await;
    let date = future_date(36);
    let slot_id = app.insert_slot(&date, "19:00:00", "es", 20).await;

    put_json(&app, &format!("/api/v1/slots/{}", slot_id), json!({
        "quotas_closed": true
    })).await;

    let res = post_json(&app, "/api/v1/reservations/validate", json!({
        "date": date, "language": "es"
    })).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["permitted"], false);
    assert_eq!(body["reason"], "Quotas are closed.");
}

#[tokio::test]
async fn test_validate_denies_disabled_turn() {
    let app = TestApp::new().await;
    let date = future_date(37);
    let slot_id = app.insert_slot(&date, "19:00:00", "es", 20).await;

    put_json(&app, &format!("/api/v1/slots/{}", slot_id), json!({
        "is_available": false
    })).await;

    let res = post_json(&app, "/api/v1/reservations/validate", json!({
        "date": date, "language": "es"
    })).await;

    let body = parse_body(res).await;
    assert_eq!(body["permitted"], false);
    assert_eq!(body["reason"], "This slot is not available.");
}

#[tokio::test]
async fn test_validate_unknown_turn_is_not_found() {
    let app = TestApp::new().await;
    let date = future_date(38);
    app.insert_slot(&date, "19:00:00", "es", 20).await;

    let res = post_json(&app, "/api/v1/reservations/validate", json!({
        "date": date, "language": "en"
    })).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = parse_body(res).await;
    assert_eq!(body["permitted"], false);
    assert_eq!(body["reason"], "This slot does not exist.");
}

#[tokio::test]
async fn test_validate_missing_fields_is_bad_request() {
    let app = TestApp::new().await;

    let res = post_json(&app, "/api/v1/reservations/validate", json!({})).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["permitted"], false);
    assert_eq!(body["reason"], "Missing required fields.");
}

#[tokio::test]
async fn test_validate_malformed_date_is_bad_request() {
    let app = TestApp::new().await;

    let res = post_json(&app, "/api/v1/reservations/validate", json!({
        "date": "01/06/2025", "language": "es"
    })).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["permitted"], false);
}

#[tokio::test]
async fn test_validate_excluding_own_reservation_frees_its_seats() {
    let app = TestApp::new().await;
    let date = future_date(39);
    app.insert_slot(&date, "19:00:00", "es", 5).await;

    let created = post_json(&app, "/api/v1/reservations", reservation_payload(&date, "es", 5)).await;
    let reservation_id = parse_body(created).await["id"].as_str().unwrap().to_string();

    let denied = post_json(&app, "/api/v1/reservations/validate", json!({
        "date": date, "language": "es"
    })).await;
    assert_eq!(parse_body(denied).await["permitted"], false);

    let res = post_json(&app, "/api/v1/reservations/validate", json!({
        "date": date, "language": "es", "excluded_reservation_id": reservation_id
    })).await;

    let body = parse_body(res).await;
    assert_eq!(body["permitted"], true);
    assert_eq!(body["remaining_capacity"], 5);
}

#[tokio::test]
async fn test_validate_ignores_cancelled_reservations() {
    let app = TestApp::new().await;
    let date = future_date(40);
    app.insert_slot(&date, "19:00:00", "es", 5).await;

    let created = post_json(&app, "/api/v1/reservations", reservation_payload(&date, "es", 5)).await;
    let reservation_id = parse_body(created).await["id"].as_str().unwrap().to_string();

    put_json(&app, &format!("/api/v1/reservations/{}", reservation_id), json!({
        "status": "cancelled"
    })).await;

    let res = post_json(&app, "/api/v1/reservations/validate", json!({
        "date": date, "language": "es"
    })).await;

    let body = parse_body(res).await;
    assert_eq!(body["permitted"], true);
    assert_eq!(body["remaining_capacity"], 5);
}

#[tokio::test]
async fn test_validate_languages_do_not_share_quota() {
    let app = TestApp::new().await;
    let date = future_date(41);
    app.insert_slot(&date, "19:00:00", "es", 5).await;
    app.insert_slot(&date, "19:30:00", "en", 5).await;

    post_json(&app, "/api/v1/reservations", reservation_payload(&date, "es", 5)).await;

    let es_res = post_json(&app, "/api/v1/reservations/validate", json!({
        "date": date, "language": "es"
    })).await;
    let en_res = post_json(&app, "/api/v1/reservations/validate", json!({
        "date": date, "language": "en"
    })).await;

    assert_eq!(parse_body(es_res).await["permitted"], false);
    let en_body = parse_body(en_res).await;
    assert_eq!(en_body["permitted"], true);
    assert_eq!(en_body["remaining_capacity"], 5);
}
