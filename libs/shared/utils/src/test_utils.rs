use std::path::PathBuf;

use serde_json::{json, Value};

use shared_config::{AppConfig, MatchingEngineKind};

pub struct TestConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub data_dir: PathBuf,
    pub matching_engine: MatchingEngineKind,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            openai_api_key: "test-openai-key".to_string(),
            openai_base_url: "http://localhost:54321/v1".to_string(),
            openai_model: "gpt-4o".to_string(),
            data_dir: std::env::temp_dir().join("healthdesk-test"),
            matching_engine: MatchingEngineKind::Rules,
        }
    }
}

impl TestConfig {
    /// Config pointing the OpenAI engine at a mock server.
    pub fn with_openai(base_url: &str) -> Self {
        Self {
            openai_base_url: base_url.to_string(),
            matching_engine: MatchingEngineKind::OpenAi,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            openai_api_key: self.openai_api_key.clone(),
            openai_base_url: self.openai_base_url.clone(),
            openai_model: self.openai_model.clone(),
            ai_request_timeout_secs: 2,
            matching_engine: self.matching_engine,
            data_dir: self.data_dir.clone(),
            doctors_file: None,
            port: 0,
        }
    }
}

pub struct MockOpenAiResponses;

impl MockOpenAiResponses {
    /// A chat-completions body whose single choice carries `content`.
    pub fn chat_completion(content: &str) -> Value {
        json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "gpt-4o",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        })
    }

    /// A chat-completions body whose content is the JSON encoding of `reply`.
    pub fn chat_completion_json(reply: Value) -> Value {
        Self::chat_completion(&reply.to_string())
    }

    pub fn booking_reply(message: &str, doctor_id: Option<&str>, is_error: bool) -> Value {
        let mut reply = json!({
            "bookingConfirmationMessage": message,
            "isError": is_error
        });
        if let Some(id) = doctor_id {
            reply["bookedDoctorId"] = json!(id);
        }
        Self::chat_completion_json(reply)
    }

    pub fn suggestion_reply(text: &str) -> Value {
        Self::chat_completion_json(json!({ "suggestedServices": text }))
    }

    pub fn api_error(message: &str) -> Value {
        json!({
            "error": {
                "message": message,
                "type": "insufficient_quota",
                "code": "insufficient_quota"
            }
        })
    }
}
