use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{AppointmentError, CreateAppointmentRequest, UpdateStatusRequest};
use crate::router::AppointmentState;

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound(_) => AppError::NotFound("Appointment not found".to_string()),
            AppointmentError::DoctorNotFound(_) => AppError::NotFound("Doctor not found".to_string()),
            AppointmentError::InvalidStatusTransition { .. } => AppError::Conflict(err.to_string()),
            AppointmentError::Storage(msg) => AppError::Storage(msg),
        }
    }
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<AppointmentState>,
) -> Result<Json<Value>, AppError> {
    let appointments = state.bookings.list_appointments().await?;

    Ok(Json(json!({
        "appointments": appointments,
        "total": appointments.len()
    })))
}

#[axum::debug_handler]
pub async fn request_appointment(
    State(state): State<AppointmentState>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let doctor = state
        .directory
        .get(&request.doctor_id)
        .map_err(|_| AppointmentError::DoctorNotFound(request.doctor_id.clone()))?;

    let appointment = state.bookings.request_appointment(doctor).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "appointment": appointment,
            "message": format!(
                "Your request to book an appointment with {} has been sent. We will contact you shortly to confirm the details.",
                doctor.name
            )
        })),
    ))
}

#[axum::debug_handler]
pub async fn update_appointment_status(
    State(state): State<AppointmentState>,
    Path(appointment_id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = state
        .bookings
        .update_status(&appointment_id, request.status)
        .await?;

    Ok(Json(json!({
        "appointment": appointment,
        "message": format!(
            "The appointment has been successfully {}.",
            appointment.status.to_string().to_lowercase()
        )
    })))
}
