//! Client for the hosted chat-completion service.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::CompletionSettings;
use crate::error::CompletionError;

// ---- OpenAI-style API Structures ----

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Serialize, Debug)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Deserialize, Debug)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    pub usage: Option<ChatUsage>,
}

#[derive(Deserialize, Debug)]
pub struct ChatChoice {
    pub message: Option<ChoiceMessage>,
    pub finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ChatUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if the model produced any.
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Sends one prompt, gets back the model's raw text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        params: CompletionParams,
    ) -> Result<String, CompletionError>;
}

pub struct HttpCompletionClient {
    http: Client,
    settings: CompletionSettings,
}

impl HttpCompletionClient {
    pub fn new(settings: CompletionSettings) -> Result<Self, CompletionError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(HttpCompletionClient { http, settings })
    }

    async fn generate_chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        params: CompletionParams,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        let request = ChatCompletionRequest {
            model: self.settings.model.clone(),
            messages,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        };

        let response = self
            .http
            .post(&self.settings.endpoint)
            .header("customerId", &self.settings.customer_id)
            .header(
                "Authorization",
                format!("Bearer {}", self.settings.api_key.expose_secret()),
            )
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "Completion request rejected");
            return Err(CompletionError::Status(status.as_u16()));
        }

        let result: ChatCompletionResponse = response.json().await?;
        if let Some(usage) = &result.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Completion usage"
            );
        }
        Ok(result)
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(
        &self,
        prompt: &str,
        params: CompletionParams,
    ) -> Result<String, CompletionError> {
        let messages = vec![ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        }];

        let response = self.generate_chat_completion(messages, params).await?;
        tracing::debug!(
            id = response.id.as_deref().unwrap_or("-"),
            finish_reason = response
                .choices
                .first()
                .and_then(|c| c.finish_reason.as_deref())
                .unwrap_or("-"),
            "Completion received"
        );

        response.first_content().ok_or(CompletionError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_content_reads_first_choice() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "cmpl-1",
            "choices": [
                { "message": { "role": "assistant", "content": "Bonjour" }, "finish_reason": "stop" },
                { "message": { "role": "assistant", "content": "Ignoré" } }
            ]
        }))
        .unwrap();

        assert_eq!(response.first_content().as_deref(), Some("Bonjour"));
    }

    #[test]
    fn first_content_is_none_for_empty_or_missing_content() {
        for body in [
            json!({ "choices": [] }),
            json!({}),
            json!({ "choices": [{ "message": { "content": null } }] }),
            json!({ "choices": [{ "message": { "content": "" } }] }),
        ] {
            let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();
            assert!(response.first_content().is_none());
        }
    }
}
