//! Environment-backed configuration for the external model call.

use std::env;

/// Default model used when `OPENAI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Configuration for the LLM client, resolved once at command start and
/// passed explicitly into the adapter that issues the external call.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API credential for the chat-completions endpoint.
    pub api_key: String,
    /// Model identifier to request.
    pub model: String,
}

impl LlmConfig {
    /// Resolves the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `OPENAI_API_KEY` is unset or empty. Commands
    /// that never reach the network (`--read`, `--restore`) must not call
    /// this.
    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            return Err(
                "Error: Missing OpenAI API key. Set OPENAI_API_KEY in your .env file.".to_string()
            );
        }
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self { api_key, model })
    }
}
