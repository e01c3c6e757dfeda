use axum::{extract::State, Json};

use shared_models::error::AppError;

use crate::models::{
    PatientInfo, ResolutionRequest, ResolutionResult, SuggestionResponse, VoiceBookingRequest,
    VoiceBookingResponse,
};
use crate::router::AssistantState;
use crate::services::suggestion::SuggestionError;
use crate::services::voice_booking::VoiceBookingError;

impl From<SuggestionError> for AppError {
    fn from(err: SuggestionError) -> Self {
        match err {
            SuggestionError::Validation(_) => AppError::ValidationError(err.to_string()),
            SuggestionError::Engine(_) | SuggestionError::EmptySuggestions => {
                AppError::ExternalService(err.to_string())
            }
        }
    }
}

impl From<VoiceBookingError> for AppError {
    fn from(err: VoiceBookingError) -> Self {
        match err {
            VoiceBookingError::SessionBusy(_) => AppError::Conflict(err.to_string()),
        }
    }
}

/// Empty strings count as absent; anything else is passed on untouched.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Classifies a transcript against the directory without booking anything.
#[axum::debug_handler]
pub async fn resolve_intent(
    State(state): State<AssistantState>,
    Json(request): Json<ResolutionRequest>,
) -> Result<Json<ResolutionResult>, AppError> {
    let resolution = state
        .resolver
        .resolve(
            &request.transcript,
            present(&request.language),
            state.directory.list(),
        )
        .await;

    Ok(Json(resolution.result))
}

#[axum::debug_handler]
pub async fn book_by_voice(
    State(state): State<AssistantState>,
    Json(request): Json<VoiceBookingRequest>,
) -> Result<Json<VoiceBookingResponse>, AppError> {
    let response = state
        .voice_booking
        .book_by_voice(
            present(&request.session_id),
            &request.transcript,
            present(&request.language),
        )
        .await?;

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn suggest_services(
    State(state): State<AssistantState>,
    Json(info): Json<PatientInfo>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let response = state.suggestions.suggest(&info).await?;
    Ok(Json(response))
}
