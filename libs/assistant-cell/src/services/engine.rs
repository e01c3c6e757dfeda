use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use doctor_cell::models::Doctor;
use shared_config::{AppConfig, MatchingEngineKind};
use shared_models::Language;

use crate::services::openai::OpenAiEngine;
use crate::services::rules::RuleBasedEngine;

/// Input to a booking match.
///
/// `language_tag` is the tag exactly as the capture layer reported it;
/// `language` is what it resolves to for output.
#[derive(Debug, Clone)]
pub struct EngineBookingRequest {
    pub transcript: String,
    pub language_tag: Option<String>,
    pub language: Language,
    pub candidates: Vec<Doctor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcomeKind {
    Matched,
    NotFound,
    Ambiguous,
    Unintelligible,
}

/// An engine's verdict, in the wire shape the hosted model is asked for.
/// Nothing here is trusted until the resolver has checked it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineBookingReply {
    #[serde(default, alias = "message")]
    pub booking_confirmation_message: String,
    #[serde(default)]
    pub booked_doctor_id: Option<String>,
    #[serde(default)]
    pub is_error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<MatchOutcomeKind>,
}

impl EngineBookingReply {
    pub fn matched(message: String, doctor_id: &str) -> Self {
        Self {
            booking_confirmation_message: message,
            booked_doctor_id: Some(doctor_id.to_string()),
            is_error: false,
            outcome: Some(MatchOutcomeKind::Matched),
        }
    }

    pub fn rejected(message: String, outcome: MatchOutcomeKind) -> Self {
        Self {
            booking_confirmation_message: message,
            booked_doctor_id: None,
            is_error: true,
            outcome: Some(outcome),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineSuggestionRequest {
    pub name: String,
    pub contact_details: String,
    pub appointment_details: String,
    pub language_tag: Option<String>,
    pub language: Language,
    pub doctors: Vec<Doctor>,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("matching engine is not configured: {0}")]
    NotConfigured(String),

    #[error("request to matching engine failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("matching engine returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed engine response: {0}")]
    MalformedResponse(String),
}

/// Natural-language understanding behind the voice resolver and the
/// suggestion generator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MatchingEngine: Send + Sync {
    fn name(&self) -> &'static str;

    async fn resolve_booking(
        &self,
        request: &EngineBookingRequest,
    ) -> Result<EngineBookingReply, EngineError>;

    async fn suggest_services(
        &self,
        request: &EngineSuggestionRequest,
    ) -> Result<String, EngineError>;
}

pub fn build_engine(config: &AppConfig) -> Result<Arc<dyn MatchingEngine>, EngineError> {
    let engine: Arc<dyn MatchingEngine> = match config.matching_engine {
        MatchingEngineKind::OpenAi => Arc::new(OpenAiEngine::new(config)?),
        MatchingEngineKind::Rules => Arc::new(RuleBasedEngine::new()),
    };

    info!("Using {} matching engine", engine.name());
    Ok(engine)
}
