//! Narrative Service Client
//!
//! HTTP client for the remote narrative-generation service. The service
//! speaks the OpenAI-compatible chat-completions protocol; authentication is
//! an environment-supplied bearer credential.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Chat completions endpoint.
const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Remote call timeout (seconds).
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Narrative call failures. Connectivity is checked before the call is ever
/// attempted, so these are genuine service failures, not offline conditions.
#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("network error: {0}")]
    Network(String),

    #[error("service error ({status}): {detail}")]
    Service { status: u16, detail: String },

    #[error("malformed response: {0}")]
    Parse(String),
}

/// Single-call narrative generation seam.
#[async_trait]
pub trait NarrativeClient: Send + Sync {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, NarrativeError>;
}

// Request/Response types

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Groq-backed narrative client.
pub struct GroqClient {
    http_client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GroqClient {
    pub fn new(api_key: String, model: String) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl NarrativeClient for GroqClient {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, NarrativeError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
        };

        tracing::debug!(model = %self.model, "calling narrative service");

        let response = self
            .http_client
            .post(GROQ_CHAT_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| NarrativeError::Network(e.to_string()))?;

        if response.status().is_success() {
            let completion: ChatCompletionResponse = response
                .json()
                .await
                .map_err(|e| NarrativeError::Parse(e.to_string()))?;

            completion
                .choices
                .into_iter()
                .next()
                .map(|choice| choice.message.content)
                .ok_or_else(|| NarrativeError::Parse("no choices in completion".to_string()))
        } else {
            let status = response.status().as_u16();
            let detail = response.text().await.unwrap_or_default();
            Err(NarrativeError::Service { status, detail })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_completion_content() {
        let raw = r#"{
            "id": "chatcmpl-123",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Take a slow breath."}}
            ]
        }"#;

        let completion: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap();

        assert_eq!(content, "Take a slow breath.");
    }

    #[test]
    fn empty_choices_has_no_content() {
        let raw = r#"{"choices": []}"#;
        let completion: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert!(completion.choices.is_empty());
    }
}
