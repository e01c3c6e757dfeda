use std::sync::Arc;

use tracing::{info, warn};

use doctor_cell::models::Doctor;
use shared_models::Language;

use crate::localization::{localize, Message};
use crate::models::{Resolution, ResolutionOutcome, ResolutionResult};
use crate::services::engine::{
    EngineBookingReply, EngineBookingRequest, MatchOutcomeKind, MatchingEngine,
};

/// Turns a spoken request into a booking decision against a candidate list.
///
/// Whatever engine sits behind it, the resolver owns the policy: an empty
/// candidate list never reaches the engine, engine faults become a localised
/// error, and a matched id must belong to the candidates it was given.
#[derive(Clone)]
pub struct IntentResolver {
    engine: Arc<dyn MatchingEngine>,
}

impl IntentResolver {
    pub fn new(engine: Arc<dyn MatchingEngine>) -> Self {
        Self { engine }
    }

    pub async fn resolve(
        &self,
        transcript: &str,
        language_tag: Option<&str>,
        candidates: &[Doctor],
    ) -> Resolution {
        let language = Language::from_tag(language_tag);

        if candidates.is_empty() {
            info!("Voice request with no candidate doctors; skipping engine");
            return Resolution::new(
                ResolutionResult::error(localize(Message::NoDoctorsAvailable, language)),
                ResolutionOutcome::EmptyCandidateSet,
            );
        }

        let request = EngineBookingRequest {
            transcript: transcript.to_string(),
            language_tag: language_tag.map(str::to_string),
            language,
            candidates: candidates.to_vec(),
        };

        let reply = match self.engine.resolve_booking(&request).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Matching engine {} failed: {}", self.engine.name(), e);
                return Resolution::new(
                    ResolutionResult::error(localize(Message::ProcessingFailed, language)),
                    ResolutionOutcome::EngineFailure,
                );
            }
        };

        let resolution = normalize_reply(reply, language, candidates);
        info!(
            "Resolved voice request via {} engine: {:?}",
            self.engine.name(),
            resolution.outcome
        );
        resolution
    }
}

/// Applies the decision policy to whatever the engine answered.
fn normalize_reply(
    reply: EngineBookingReply,
    language: Language,
    candidates: &[Doctor],
) -> Resolution {
    let message = reply.booking_confirmation_message.trim().to_string();
    let doctor_id = reply
        .booked_doctor_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty());

    if reply.is_error {
        let outcome = match reply.outcome {
            Some(MatchOutcomeKind::NotFound) => ResolutionOutcome::NoMatch,
            Some(MatchOutcomeKind::Ambiguous) => ResolutionOutcome::AmbiguousMatch,
            _ => ResolutionOutcome::Unintelligible,
        };
        let message = if message.is_empty() {
            localize(fallback_message(outcome), language)
        } else {
            message
        };
        return Resolution::new(ResolutionResult::error(message), outcome);
    }

    let Some(doctor_id) = doctor_id else {
        return Resolution::new(
            ResolutionResult::error(localize(Message::Clarification, language)),
            ResolutionOutcome::Unintelligible,
        );
    };

    let Some(doctor) = candidates.iter().find(|d| d.id == doctor_id) else {
        warn!("Matching engine returned unknown doctor id {}", doctor_id);
        return Resolution::new(
            ResolutionResult::error(localize(
                Message::DoctorNotInRecords { doctor_id: &doctor_id },
                language,
            )),
            ResolutionOutcome::StaleMatch,
        );
    };

    let message = if message.is_empty() {
        localize(Message::BookingConfirmed { doctor_name: &doctor.name }, language)
    } else {
        message
    };

    Resolution::new(
        ResolutionResult::matched(message, doctor.id.clone()),
        ResolutionOutcome::Matched,
    )
}

fn fallback_message(outcome: ResolutionOutcome) -> Message<'static> {
    match outcome {
        ResolutionOutcome::NoMatch => Message::DoctorNotFound,
        ResolutionOutcome::AmbiguousMatch => Message::Ambiguous { specialty: None },
        _ => Message::Clarification,
    }
}
