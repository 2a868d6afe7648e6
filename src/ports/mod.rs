//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (filesystem, LLM). Implementations live in
//! `src/adapters/`.

pub mod filesystem;
pub mod llm;

pub use filesystem::FileSystem;
pub use llm::{ChatFuture, ChatMessage, ChatRequest, ChatResponse, LlmClient};
