use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use appointment_cell::services::AppointmentBookingService;
use doctor_cell::services::DoctorDirectory;
use shared_models::Language;

use crate::localization::{localize, Message};
use crate::models::{ResolutionResult, VoiceBookingResponse};
use crate::services::resolver::IntentResolver;
use crate::services::session::CaptureSessionGate;

#[derive(Debug, Error)]
pub enum VoiceBookingError {
    #[error("A voice request for session {0} is already being processed")]
    SessionBusy(String),
}

/// Resolves a transcript against the whole directory and records the
/// appointment when a doctor is matched.
#[derive(Clone)]
pub struct VoiceBookingService {
    resolver: IntentResolver,
    bookings: AppointmentBookingService,
    directory: Arc<DoctorDirectory>,
    sessions: CaptureSessionGate,
}

impl VoiceBookingService {
    pub fn new(
        resolver: IntentResolver,
        bookings: AppointmentBookingService,
        directory: Arc<DoctorDirectory>,
    ) -> Self {
        Self {
            resolver,
            bookings,
            directory,
            sessions: CaptureSessionGate::new(),
        }
    }

    pub async fn book_by_voice(
        &self,
        session_id: Option<&str>,
        transcript: &str,
        language_tag: Option<&str>,
    ) -> Result<VoiceBookingResponse, VoiceBookingError> {
        let _permit = match session_id {
            Some(id) => Some(
                self.sessions
                    .try_acquire(id)
                    .ok_or_else(|| VoiceBookingError::SessionBusy(id.to_string()))?,
            ),
            None => None,
        };

        let resolution = self
            .resolver
            .resolve(transcript, language_tag, self.directory.list())
            .await;

        let doctor_id = match (&resolution.result.matched_doctor_id, resolution.result.is_error) {
            (Some(id), false) => id.clone(),
            _ => {
                return Ok(VoiceBookingResponse {
                    result: resolution.result,
                    appointment: None,
                })
            }
        };

        let recorded = match self.directory.get(&doctor_id) {
            Ok(doctor) => self
                .bookings
                .request_appointment(doctor)
                .await
                .map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match recorded {
            Ok(appointment) => {
                info!("Voice request booked appointment {}", appointment.id);
                Ok(VoiceBookingResponse {
                    result: resolution.result,
                    appointment: Some(appointment),
                })
            }
            Err(e) => {
                error!("Failed to record voice appointment with doctor {}: {}", doctor_id, e);
                let language = Language::from_tag(language_tag);
                Ok(VoiceBookingResponse {
                    result: ResolutionResult::error(localize(Message::ProcessingFailed, language)),
                    appointment: None,
                })
            }
        }
    }
}
