//! OpenAI client implementing the language model port.

use std::time::Duration;

use async_trait::async_trait;
use hireflow_core::assistant::ports::{ChatTurn, LanguageModel};
use hireflow_domain::constants::LLM_TIMEOUT_SECS;
use hireflow_domain::{AssistantConfig, HireflowError, MessageRole, Result};
use reqwest::Method;
use tracing::debug;

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat};
use crate::http::HttpClient;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MAX_TOKENS: u32 = 1024;
const DEFAULT_TEMPERATURE: f32 = 0.3;

/// OpenAI chat-completions client.
///
/// Calls are single-shot: the assistant surfaces model failures to the
/// caller instead of retrying.
pub struct OpenAiClient {
    http: HttpClient,
    api_key: String,
    model: String,
    api_url: String,
}

impl OpenAiClient {
    pub fn new(config: &AssistantConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(LLM_TIMEOUT_SECS))
            .max_attempts(1)
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            api_url: OPENAI_API_URL.to_string(),
        })
    }

    /// Point the client at a different endpoint (for testing).
    #[cfg(test)]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    fn build_request(&self, system_prompt: &str, turns: &[ChatTurn]) -> ChatCompletionRequest {
        let mut messages = Vec::with_capacity(turns.len() + 1);
        messages
            .push(ChatMessage { role: "system".to_string(), content: system_prompt.to_string() });
        for turn in turns {
            let role = match turn.role {
                MessageRole::User => "user",
                MessageRole::Assistant => "assistant",
            };
            messages.push(ChatMessage { role: role.to_string(), content: turn.content.clone() });
        }

        ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            response_format: ResponseFormat { format_type: "json_object".to_string() },
        }
    }
}

#[async_trait]
impl LanguageModel for OpenAiClient {
    async fn generate(&self, system_prompt: &str, turns: &[ChatTurn]) -> Result<String> {
        let payload = self.build_request(system_prompt, turns);

        let request = self
            .http
            .request(Method::POST, &self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&payload);

        let response = self.http.send(request).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "unknown error".to_string());
            return Err(HireflowError::Network(format!("model API error ({status}): {body}")));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| HireflowError::LlmResponse(format!("unparseable completion: {e}")))?;

        if let Some(usage) = &completion.usage {
            debug!(
                total_tokens = usage.total_tokens,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "model call complete"
            );
        }

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| HireflowError::LlmResponse("completion contained no choices".into()))?;

        Ok(choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_client(api_url: String) -> OpenAiClient {
        let config = AssistantConfig {
            api_key: "sk-test".to_string(),
            model: "gpt-4o-mini".to_string(),
            default_timezone: "America/New_York".to_string(),
        };
        OpenAiClient::new(&config).expect("client built").with_api_url(api_url)
    }

    fn turns() -> Vec<ChatTurn> {
        vec![ChatTurn { role: MessageRole::User, content: "sometime next week?".to_string() }]
    }

    #[tokio::test]
    async fn returns_raw_completion_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "response_format": { "type": "json_object" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{
                    "message": { "content": "{\"message\": \"Monday works\", \"suggestedSlots\": []}" }
                }],
                "usage": { "total_tokens": 120, "prompt_tokens": 100, "completion_tokens": 20 }
            })))
            .mount(&server)
            .await;

        let client = test_client(format!("{}/v1/chat/completions", server.uri()));
        let content = client.generate("system prompt", &turns()).await.expect("content");

        assert!(content.contains("Monday works"));
    }

    #[tokio::test]
    async fn fenced_or_prose_content_is_passed_through_unparsed() {
        // Content extraction is downstream's concern; the client returns
        // whatever the model produced.
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{
                    "message": { "content": "```json\n{\"message\": \"hi\"}\n```" }
                }]
            })))
            .mount(&server)
            .await;

        let client = test_client(format!("{}/v1/chat/completions", server.uri()));
        let content = client.generate("system prompt", &turns()).await.expect("content");

        assert!(content.starts_with("```json"));
    }

    #[tokio::test]
    async fn system_and_history_turns_are_sent_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(json!({
                "messages": [
                    { "role": "system", "content": "system prompt" },
                    { "role": "user", "content": "first" },
                    { "role": "assistant", "content": "reply" },
                    { "role": "user", "content": "second" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "content": "ok" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let history = vec![
            ChatTurn { role: MessageRole::User, content: "first".to_string() },
            ChatTurn { role: MessageRole::Assistant, content: "reply".to_string() },
            ChatTurn { role: MessageRole::User, content: "second".to_string() },
        ];

        let client = test_client(format!("{}/v1/chat/completions", server.uri()));
        client.generate("system prompt", &history).await.expect("content");
    }

    #[tokio::test]
    async fn error_status_maps_to_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let client = test_client(format!("{}/v1/chat/completions", server.uri()));
        let result = client.generate("system prompt", &turns()).await;

        match result {
            Err(HireflowError::Network(msg)) => assert!(msg.contains("401")),
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_choices_maps_to_llm_response_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let client = test_client(format!("{}/v1/chat/completions", server.uri()));
        let result = client.generate("system prompt", &turns()).await;

        assert!(matches!(result, Err(HireflowError::LlmResponse(_))));
    }
}
