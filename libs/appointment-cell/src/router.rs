use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch},
};

use doctor_cell::services::DoctorDirectory;

use crate::handlers;
use crate::services::AppointmentBookingService;

#[derive(Clone)]
pub struct AppointmentState {
    pub bookings: AppointmentBookingService,
    pub directory: Arc<DoctorDirectory>,
}

pub fn appointment_routes(state: AppointmentState) -> Router {
    Router::new()
        .route("/", get(handlers::list_appointments).post(handlers::request_appointment))
        .route("/{appointment_id}/status", patch(handlers::update_appointment_status))
        .with_state(state)
}
