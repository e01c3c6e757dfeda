pub mod handlers;
pub mod localization;
pub mod models;
pub mod prompts;
pub mod router;
pub mod services;

pub use models::*;
pub use router::{assistant_routes, AssistantState};

pub mod api {
    pub use crate::services::engine::{build_engine, MatchingEngine};
    pub use crate::services::openai::OpenAiEngine;
    pub use crate::services::resolver::IntentResolver;
    pub use crate::services::rules::RuleBasedEngine;
    pub use crate::services::suggestion::SuggestionService;
    pub use crate::services::voice_booking::VoiceBookingService;
}
