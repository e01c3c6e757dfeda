use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PORT: u16 = 3000;

/// Which engine backs the voice resolver and the suggestion generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchingEngineKind {
    OpenAi,
    Rules,
}

impl MatchingEngineKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "openai" | "llm" => Some(Self::OpenAi),
            "rules" | "rule" | "rule-based" => Some(Self::Rules),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub ai_request_timeout_secs: u64,
    pub matching_engine: MatchingEngineKind,
    pub data_dir: PathBuf,
    pub doctors_file: Option<PathBuf>,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            ai_request_timeout_secs: DEFAULT_AI_TIMEOUT_SECS,
            matching_engine: MatchingEngineKind::Rules,
            data_dir: PathBuf::from("./data"),
            doctors_file: None,
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let openai_api_key = env::var("OPENAI_API_KEY")
            .unwrap_or_else(|_| {
                warn!("OPENAI_API_KEY not set, using empty value");
                String::new()
            });

        let matching_engine = match env::var("MATCHING_ENGINE") {
            Ok(raw) => MatchingEngineKind::parse(&raw).unwrap_or_else(|| {
                warn!("Unknown MATCHING_ENGINE '{}', falling back to rules", raw);
                MatchingEngineKind::Rules
            }),
            Err(_) if openai_api_key.is_empty() => MatchingEngineKind::Rules,
            Err(_) => MatchingEngineKind::OpenAi,
        };

        let config = Self {
            openai_api_key,
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            ai_request_timeout_secs: env::var("AI_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| {
                    warn!("AI_REQUEST_TIMEOUT_SECS not set or invalid, using default");
                    DEFAULT_AI_TIMEOUT_SECS
                }),
            matching_engine,
            data_dir: env::var("HEALTHDESK_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    warn!("HEALTHDESK_DATA_DIR not set, using ./data");
                    PathBuf::from("./data")
                }),
            doctors_file: env::var("HEALTHDESK_DOCTORS_FILE").ok().map(PathBuf::from),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        };

        if config.matching_engine == MatchingEngineKind::OpenAi && !config.is_ai_configured() {
            warn!("OpenAI engine selected but no API key configured - AI calls will fail");
        }

        config
    }

    pub fn is_ai_configured(&self) -> bool {
        !self.openai_api_key.is_empty() && !self.openai_base_url.is_empty()
    }

    pub fn ai_request_timeout(&self) -> Duration {
        Duration::from_secs(self.ai_request_timeout_secs)
    }
}
