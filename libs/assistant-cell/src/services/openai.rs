use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::prompts::{booking_prompt, suggestion_prompt, BOOKING_SYSTEM_PROMPT, SUGGESTION_SYSTEM_PROMPT};
use crate::services::engine::{
    EngineBookingReply, EngineBookingRequest, EngineError, EngineSuggestionRequest, MatchingEngine,
};

/// Hosted chat-completions engine (OpenAI or any compatible endpoint).
pub struct OpenAiEngine {
    api_key: String,
    base_url: String,
    model: String,
    http_client: Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SuggestionReply {
    #[serde(default)]
    suggested_services: String,
}

impl OpenAiEngine {
    pub fn new(config: &AppConfig) -> Result<Self, EngineError> {
        if config.openai_api_key.is_empty() {
            return Err(EngineError::NotConfigured(
                "OPENAI_API_KEY environment variable not set".to_string(),
            ));
        }

        let http_client = Client::builder()
            .timeout(config.ai_request_timeout())
            .build()?;

        Ok(Self {
            api_key: config.openai_api_key.clone(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            model: config.openai_model.clone(),
            http_client,
        })
    }

    /// Sends one system + user exchange in JSON mode and decodes the reply
    /// content as `T`.
    async fn complete_json<T>(&self, system: &str, user: &str) -> Result<T, EngineError>
    where
        T: DeserializeOwned,
    {
        let prompt = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user }
            ],
            "temperature": 0.2,
            "response_format": { "type": "json_object" }
        });

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&prompt)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("OpenAI API error ({}): {}", status, error_text);
            return Err(EngineError::Api {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let ai_response: Value = response
            .json()
            .await
            .map_err(|e| EngineError::MalformedResponse(e.to_string()))?;
        let content = ai_response["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| EngineError::MalformedResponse("Invalid OpenAI response format".to_string()))?;

        debug!("OpenAI replied with {} bytes", content.len());

        serde_json::from_str(strip_code_fence(content))
            .map_err(|e| EngineError::MalformedResponse(format!("reply is not the expected JSON: {}", e)))
    }
}

/// Models sometimes wrap JSON in a markdown fence even in JSON mode.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[async_trait]
impl MatchingEngine for OpenAiEngine {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn resolve_booking(
        &self,
        request: &EngineBookingRequest,
    ) -> Result<EngineBookingReply, EngineError> {
        debug!(
            "Resolving voice booking with {} candidates, language tag {:?}",
            request.candidates.len(),
            request.language_tag
        );
        self.complete_json(BOOKING_SYSTEM_PROMPT, &booking_prompt(request)).await
    }

    async fn suggest_services(
        &self,
        request: &EngineSuggestionRequest,
    ) -> Result<String, EngineError> {
        debug!("Generating service suggestions, language tag {:?}", request.language_tag);
        let reply: SuggestionReply = self
            .complete_json(SUGGESTION_SYSTEM_PROMPT, &suggestion_prompt(request))
            .await?;
        Ok(reply.suggested_services)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markdown_fences() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
    }
}
