use async_trait::async_trait;
use tracing::debug;

use doctor_cell::models::Doctor;
use shared_utils::text::{contains_word, mentions_specialty, name_words, normalize, words};

use crate::localization::{localize, Message};
use crate::services::engine::{
    EngineBookingReply, EngineBookingRequest, EngineError, EngineSuggestionRequest,
    MatchOutcomeKind, MatchingEngine,
};

const BOOKING_WORDS: &[&str] = &[
    "doctor", "dr", "appointment", "book", "booking", "see", "visit", "consult",
    "consultation", "specialist", "checkup", "meet",
];

const TITLES: &[&str] = &["dr", "doctor"];

// Words that can follow "doctor" without being a name.
const NOT_NAMES: &[&str] = &[
    "a", "an", "the", "about", "for", "with", "who", "that", "please", "to", "in", "at", "on",
    "and", "or", "is", "my", "me", "appointment", "today", "tomorrow", "now", "visit",
];

/// Finds a "Dr. <name>" mention that names none of the candidates.
fn names_unknown_doctor(transcript_words: &[String], candidates: &[Doctor]) -> bool {
    let known: Vec<String> = candidates.iter().flat_map(|d| name_words(&d.name)).collect();

    transcript_words.windows(2).any(|pair| {
        let (title, name) = (&pair[0], &pair[1]);
        TITLES.contains(&title.as_str())
            && !TITLES.contains(&name.as_str())
            && !NOT_NAMES.contains(&name.as_str())
            && !known.contains(name)
            && !candidates
                .iter()
                .any(|d| mentions_specialty(name, &d.specialty))
    })
}

#[derive(Debug, PartialEq)]
enum Classification<'a> {
    Matched(&'a Doctor),
    Ambiguous { specialty: Option<String> },
    NotFound,
    Unintelligible,
}

/// Deterministic keyword matcher. Works offline and backs the test suite;
/// it only understands transcripts that spell names or specialties in
/// Latin script.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedEngine;

impl RuleBasedEngine {
    pub fn new() -> Self {
        Self
    }

    fn classify<'a>(&self, transcript: &str, candidates: &'a [Doctor]) -> Classification<'a> {
        let transcript_words = words(transcript);
        let normalized = normalize(transcript);

        // By surname first; a full-name mention settles shared surnames.
        let named: Vec<&Doctor> = candidates
            .iter()
            .filter(|d| {
                name_words(&d.name)
                    .last()
                    .map(|surname| contains_word(&transcript_words, surname))
                    .unwrap_or(false)
            })
            .collect();

        match named.len() {
            0 => {}
            1 => return Classification::Matched(named[0]),
            _ => {
                let fully_named: Vec<&Doctor> = named
                    .iter()
                    .copied()
                    .filter(|d| {
                        name_words(&d.name)
                            .iter()
                            .all(|w| contains_word(&transcript_words, w))
                    })
                    .collect();
                if fully_named.len() == 1 {
                    return Classification::Matched(fully_named[0]);
                }
                return Classification::Ambiguous { specialty: None };
            }
        }

        // A named doctor we do not have is not found, even next to a known specialty.
        if names_unknown_doctor(&transcript_words, candidates) {
            return Classification::NotFound;
        }

        let by_specialty: Vec<&Doctor> = candidates
            .iter()
            .filter(|d| mentions_specialty(&normalized, &d.specialty))
            .collect();

        match by_specialty.as_slice() {
            [] => {}
            [only] => return Classification::Matched(only),
            [first, rest @ ..] => {
                let same_specialty = rest.iter().all(|d| d.has_specialty(&first.specialty));
                return Classification::Ambiguous {
                    specialty: same_specialty.then(|| first.specialty.clone()),
                };
            }
        }

        let asks_for_booking = transcript_words.iter().any(|w| {
            BOOKING_WORDS.contains(&w.as_str()) || w.ends_with("ologist") || w.ends_with("ician")
        });

        if asks_for_booking {
            Classification::NotFound
        } else {
            Classification::Unintelligible
        }
    }
}

#[async_trait]
impl MatchingEngine for RuleBasedEngine {
    fn name(&self) -> &'static str {
        "rules"
    }

    async fn resolve_booking(
        &self,
        request: &EngineBookingRequest,
    ) -> Result<EngineBookingReply, EngineError> {
        let language = request.language;
        let classification = self.classify(&request.transcript, &request.candidates);
        debug!("Rule engine classified transcript as {:?}", classification);

        let reply = match classification {
            Classification::Matched(doctor) => EngineBookingReply::matched(
                localize(Message::BookingConfirmed { doctor_name: &doctor.name }, language),
                &doctor.id,
            ),
            Classification::Ambiguous { specialty } => EngineBookingReply::rejected(
                localize(Message::Ambiguous { specialty: specialty.as_deref() }, language),
                MatchOutcomeKind::Ambiguous,
            ),
            Classification::NotFound => EngineBookingReply::rejected(
                localize(Message::DoctorNotFound, language),
                MatchOutcomeKind::NotFound,
            ),
            Classification::Unintelligible => EngineBookingReply::rejected(
                localize(Message::Clarification, language),
                MatchOutcomeKind::Unintelligible,
            ),
        };

        Ok(reply)
    }

    async fn suggest_services(
        &self,
        request: &EngineSuggestionRequest,
    ) -> Result<String, EngineError> {
        let details = normalize(&request.appointment_details);

        let mut lines = vec![localize(Message::SuggestionsHeader, request.language)];
        let relevant: Vec<&Doctor> = request
            .doctors
            .iter()
            .filter(|d| mentions_specialty(&details, &d.specialty))
            .collect();

        if relevant.is_empty() {
            lines.push(format!("- {}", localize(Message::GeneralConsultation, request.language)));
        } else {
            for doctor in relevant {
                if doctor.availability.is_empty() {
                    lines.push(format!("- {} ({})", doctor.name, doctor.specialty));
                } else {
                    lines.push(format!(
                        "- {} ({}): {}",
                        doctor.name,
                        doctor.specialty,
                        doctor.availability.join(", ")
                    ));
                }
            }
        }

        Ok(lines.join("\n"))
    }
}
