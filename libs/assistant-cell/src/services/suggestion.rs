use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use doctor_cell::services::DoctorDirectory;
use shared_models::Language;

use crate::models::{PatientInfo, SuggestionResponse};
use crate::services::engine::{EngineError, EngineSuggestionRequest, MatchingEngine};

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("{}", .0.join(" "))]
    Validation(Vec<String>),

    #[error("Failed to get AI suggestions: {0}")]
    Engine(#[from] EngineError),

    #[error("Failed to get AI suggestions: the engine returned no suggestions")]
    EmptySuggestions,
}

/// Free-text service suggestions for the patient intake form.
#[derive(Clone)]
pub struct SuggestionService {
    engine: Arc<dyn MatchingEngine>,
    directory: Arc<DoctorDirectory>,
}

impl SuggestionService {
    pub fn new(engine: Arc<dyn MatchingEngine>, directory: Arc<DoctorDirectory>) -> Self {
        Self { engine, directory }
    }

    pub async fn suggest(&self, info: &PatientInfo) -> Result<SuggestionResponse, SuggestionError> {
        info.validate().map_err(SuggestionError::Validation)?;

        let language_tag = info
            .language
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        let request = EngineSuggestionRequest {
            name: info.name.trim().to_string(),
            contact_details: info.contact_details.trim().to_string(),
            appointment_details: info.appointment_details.trim().to_string(),
            language: Language::from_tag(language_tag.as_deref()),
            language_tag,
            doctors: self.directory.list().to_vec(),
        };

        let text = self.engine.suggest_services(&request).await.map_err(|e| {
            warn!("Suggestion engine {} failed: {}", self.engine.name(), e);
            SuggestionError::Engine(e)
        })?;

        let text = text.trim();
        if text.is_empty() {
            return Err(SuggestionError::EmptySuggestions);
        }

        info!("Generated suggestions in {}", request.language.display_name());
        Ok(SuggestionResponse {
            suggested_services: text.to_string(),
        })
    }
}
