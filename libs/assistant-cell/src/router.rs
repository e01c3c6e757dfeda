use std::sync::Arc;

use axum::{routing::post, Router};

use appointment_cell::services::AppointmentBookingService;
use doctor_cell::services::DoctorDirectory;

use crate::handlers;
use crate::services::engine::MatchingEngine;
use crate::services::resolver::IntentResolver;
use crate::services::suggestion::SuggestionService;
use crate::services::voice_booking::VoiceBookingService;

#[derive(Clone)]
pub struct AssistantState {
    pub resolver: IntentResolver,
    pub voice_booking: VoiceBookingService,
    pub suggestions: SuggestionService,
    pub directory: Arc<DoctorDirectory>,
}

impl AssistantState {
    pub fn new(
        engine: Arc<dyn MatchingEngine>,
        directory: Arc<DoctorDirectory>,
        bookings: AppointmentBookingService,
    ) -> Self {
        let resolver = IntentResolver::new(Arc::clone(&engine));
        Self {
            voice_booking: VoiceBookingService::new(resolver.clone(), bookings, Arc::clone(&directory)),
            suggestions: SuggestionService::new(engine, Arc::clone(&directory)),
            resolver,
            directory,
        }
    }
}

pub fn assistant_routes(state: AssistantState) -> Router {
    Router::new()
        .route("/resolve", post(handlers::resolve_intent))
        .route("/voice-booking", post(handlers::book_by_voice))
        .route("/suggestions", post(handlers::suggest_services))
        .with_state(state)
}
