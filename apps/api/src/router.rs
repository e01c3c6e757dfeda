use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::{appointment_routes, AppointmentBookingService, AppointmentState};
use assistant_cell::api::MatchingEngine;
use assistant_cell::{assistant_routes, AssistantState};
use doctor_cell::router::doctor_routes;
use doctor_cell::services::DoctorDirectory;

pub fn create_router(
    directory: Arc<DoctorDirectory>,
    bookings: AppointmentBookingService,
    engine: Arc<dyn MatchingEngine>,
) -> Router {
    let appointments = AppointmentState {
        bookings: bookings.clone(),
        directory: Arc::clone(&directory),
    };
    let assistant = AssistantState::new(engine, Arc::clone(&directory), bookings);

    Router::new()
        .route("/", get(|| async { "HealthDesk API is running!" }))
        .nest("/doctors", doctor_routes(directory))
        .nest("/appointments", appointment_routes(appointments))
        .nest("/assistant", assistant_routes(assistant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use assistant_cell::api::RuleBasedEngine;
    use shared_database::MemoryStore;

    fn app() -> Router {
        create_router(
            Arc::new(DoctorDirectory::seeded()),
            AppointmentBookingService::new(Arc::new(MemoryStore::new())),
            Arc::new(RuleBasedEngine::new()),
        )
    }

    async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let request = match body {
            Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn root_reports_liveness() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn voice_booking_shows_up_in_appointments_and_can_be_confirmed() {
        let app = app();

        let (status, body) = call(
            &app,
            "POST",
            "/assistant/voice-booking",
            Some(json!({ "transcript": "Book me with Dr. Marcus Kane", "sessionId": "front-desk" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchedDoctorId"], "4");
        let appointment_id = body["appointment"]["id"].as_str().unwrap().to_string();

        let (status, body) = call(&app, "GET", "/appointments", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["appointments"][0]["doctorName"], "Dr. Marcus Kane");

        let (status, body) = call(
            &app,
            "PATCH",
            &format!("/appointments/{}/status", appointment_id),
            Some(json!({ "status": "Confirmed" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["appointment"]["status"], "Confirmed");
    }

    #[tokio::test]
    async fn doctors_are_served_under_prefix() {
        let (status, body) = call(&app(), "GET", "/doctors/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["specialty"], "Pediatrics");
    }
}
