use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use appointment_cell::AppointmentBookingService;
use assistant_cell::api::RuleBasedEngine;
use assistant_cell::localization::{localize, Message};
use assistant_cell::{assistant_routes, AssistantState};
use doctor_cell::services::DoctorDirectory;
use shared_database::MemoryStore;
use shared_models::Language;

fn create_test_app() -> (Router, AppointmentBookingService) {
    let bookings = AppointmentBookingService::new(Arc::new(MemoryStore::new()));
    let state = AssistantState::new(
        Arc::new(RuleBasedEngine::new()),
        Arc::new(DoctorDirectory::seeded()),
        bookings.clone(),
    );
    (assistant_routes(state), bookings)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_resolve_matches_without_booking() {
    let (app, bookings) = create_test_app();

    let (status, body) = post(
        &app,
        "/resolve",
        json!({ "transcript": "I want to see Dr. Evelyn Reed", "language": "en-US" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isError"], false);
    assert_eq!(body["matchedDoctorId"], "1");
    assert!(bookings.list_appointments().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_resolve_error_omits_doctor_id() {
    let (app, _) = create_test_app();

    let (status, body) = post(&app, "/resolve", json!({ "transcript": "hello there" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isError"], true);
    assert!(body.get("matchedDoctorId").is_none());
}

#[tokio::test]
async fn test_voice_booking_records_appointment() {
    let (app, bookings) = create_test_app();

    let (status, body) = post(
        &app,
        "/voice-booking",
        json!({
            "transcript": "I need to see a dermatologist",
            "language": "hi-IN",
            "sessionId": "kiosk-1"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isError"], false);
    assert_eq!(body["matchedDoctorId"], "3");
    assert_eq!(body["appointment"]["doctorName"], "Dr. Olivia Chen");
    assert_eq!(body["appointment"]["status"], "Pending Confirmation");
    assert_eq!(
        body["message"],
        localize(Message::BookingConfirmed { doctor_name: "Dr. Olivia Chen" }, Language::Hindi)
    );

    let stored = bookings.list_appointments().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].doctor_id, "3");
}

#[tokio::test]
async fn test_voice_booking_failure_records_nothing() {
    let (app, bookings) = create_test_app();

    let (status, body) = post(
        &app,
        "/voice-booking",
        json!({ "transcript": "what's the weather like", "language": "kn-IN" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isError"], true);
    assert!(body.get("appointment").is_none());
    assert_eq!(body["message"], localize(Message::Clarification, Language::Kannada));
    assert!(bookings.list_appointments().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_suggestions_validation_error() {
    let (app, _) = create_test_app();

    let (status, body) = post(
        &app,
        "/suggestions",
        json!({ "name": "Asha", "contactDetails": "", "appointmentDetails": "Chest pain" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "All patient information fields are required for AI suggestions.");
}

#[tokio::test]
async fn test_suggestions_length_rules() {
    let (app, _) = create_test_app();

    let (status, body) = post(
        &app,
        "/suggestions",
        json!({ "name": "A", "contactDetails": "asha@example.com", "appointmentDetails": "Chest pain on stairs" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name must be at least 2 characters.");
}

#[tokio::test]
async fn test_suggestions_success() {
    let (app, _) = create_test_app();

    let (status, body) = post(
        &app,
        "/suggestions",
        json!({
            "name": "Asha",
            "contactDetails": "asha@example.com",
            "appointmentDetails": "Chest pain and a family history of cardiology issues",
            "language": "en-US"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let text = body["suggestedServices"].as_str().unwrap();
    assert!(text.starts_with(&localize(Message::SuggestionsHeader, Language::English)));
    assert!(text.contains("Dr. Evelyn Reed (Cardiology)"));
}

#[tokio::test]
async fn test_language_tag_must_match_exactly() {
    let (app, _) = create_test_app();

    let (status, body) = post(
        &app,
        "/resolve",
        json!({ "transcript": "hello there", "language": " hi-IN" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], localize(Message::Clarification, Language::English));

    let (_, body) = post(
        &app,
        "/resolve",
        json!({ "transcript": "hello there", "language": "" }),
    )
    .await;
    assert_eq!(body["message"], localize(Message::Clarification, Language::English));
}
