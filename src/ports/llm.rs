//! LLM client port for chat completions.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

/// Boxed future type alias used by [`LlmClient`] to keep the trait dyn-compatible.
pub type ChatFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ChatResponse, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// A single message in a chat-completion conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The speaker role (`"system"`, `"user"`, or `"assistant"`).
    pub role: String,
    /// The message text.
    pub content: String,
}

impl ChatMessage {
    /// Creates a `system` message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".into(), content: content.into() }
    }

    /// Creates a `user` message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".into(), content: content.into() }
    }

    /// Creates an `assistant` message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: "assistant".into(), content: content.into() }
    }
}

/// A request to generate a chat completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The model identifier (e.g. `"gpt-4o-mini"`).
    pub model: String,
    /// The message sequence to send.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum number of tokens to generate.
    pub max_tokens: u32,
}

/// The response from a chat-completion call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The generated text.
    pub text: String,
}

/// Sends chat-completion requests to a language model.
pub trait LlmClient: Send + Sync {
    /// Generates a completion for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails (network, auth, rate-limit, etc.).
    fn complete(&self, request: &ChatRequest) -> ChatFuture<'_>;
}
