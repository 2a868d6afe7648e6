//! Live adapter for the `LlmClient` port using the OpenAI chat-completions API.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;
use crate::ports::llm::{ChatFuture, ChatRequest, ChatResponse, LlmClient};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Live LLM client that calls the OpenAI chat-completions API.
///
/// The credential is injected at construction rather than read from the
/// environment at call time, so commands that never reach the network
/// are not coupled to it.
pub struct LiveLlmClient {
    client: Client,
    api_key: String,
}

impl LiveLlmClient {
    /// Creates a new live LLM client from the given configuration.
    #[must_use]
    pub fn new(config: &LlmConfig) -> Self {
        Self { client: Client::new(), api_key: config.api_key.clone() }
    }
}

/// Request body sent to the chat-completions endpoint.
#[derive(Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: &'a [crate::ports::llm::ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

/// Top-level response from the chat-completions endpoint.
#[derive(Deserialize)]
struct OpenAiResponse {
    choices: Vec<Choice>,
}

/// A single completion choice.
#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

/// The message inside a completion choice.
#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Error response from the OpenAI API.
#[derive(Deserialize)]
struct OpenAiError {
    error: OpenAiErrorDetail,
}

/// Detail inside an OpenAI error response.
#[derive(Deserialize)]
struct OpenAiErrorDetail {
    message: String,
}

impl LlmClient for LiveLlmClient {
    fn complete(&self, request: &ChatRequest) -> ChatFuture<'_> {
        let request = request.clone();

        Box::pin(async move {
            let body = OpenAiRequest {
                model: &request.model,
                messages: &request.messages,
                temperature: request.temperature,
                max_tokens: request.max_tokens,
            };

            let response = self
                .client
                .post(OPENAI_API_URL)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("OpenAI API request failed: {e}").into()
                })?;

            let status = response.status();
            let response_text =
                response.text().await.map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("Failed to read OpenAI API response: {e}").into()
                })?;

            if !status.is_success() {
                let msg = serde_json::from_str::<OpenAiError>(&response_text)
                    .map(|e| e.error.message)
                    .unwrap_or(response_text);
                return Err(format!("OpenAI API error ({}): {msg}", status.as_u16()).into());
            }

            let api_response: OpenAiResponse = serde_json::from_str(&response_text).map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("Failed to parse OpenAI API response: {e}").into()
                },
            )?;

            let text = api_response
                .choices
                .into_iter()
                .next()
                .map(|choice| choice.message.content)
                .ok_or_else(|| -> Box<dyn std::error::Error + Send + Sync> {
                    "OpenAI API response contained no choices".into()
                })?;

            Ok(ChatResponse { text })
        })
    }
}
