//! Service context bundling the port trait objects.

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::llm::LiveLlmClient;
use crate::config::LlmConfig;
use crate::ports::filesystem::FileSystem;
use crate::ports::llm::LlmClient;

/// Bundles the port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter combinations depending on whether the
/// command needs the network.
pub struct ServiceContext {
    /// Filesystem for file I/O.
    pub fs: Box<dyn FileSystem>,
    /// LLM client for chat completions.
    pub llm: Box<dyn LlmClient>,
}

impl ServiceContext {
    /// Creates a context for commands that never reach the network.
    ///
    /// The LLM port uses a panicking stub; reaching it from `--read` or
    /// `--restore` is a programming error, not a runtime condition.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem), llm: Box::new(PanickingLlmClient) }
    }

    /// Creates a context with the real chat client for `--analyze` and
    /// `--summarize`.
    #[must_use]
    pub fn live_with_llm(config: &LlmConfig) -> Self {
        Self { fs: Box::new(LiveFileSystem), llm: Box::new(LiveLlmClient::new(config)) }
    }

    /// Creates a context from explicit port implementations (test doubles).
    #[must_use]
    pub fn from_ports(fs: Box<dyn FileSystem>, llm: Box<dyn LlmClient>) -> Self {
        Self { fs, llm }
    }
}

/// LLM stub for contexts that must never issue an external call.
struct PanickingLlmClient;

impl LlmClient for PanickingLlmClient {
    fn complete(
        &self,
        _request: &crate::ports::llm::ChatRequest,
    ) -> crate::ports::llm::ChatFuture<'_> {
        panic!("LlmClient port not configured — this command must not call the model");
    }
}
