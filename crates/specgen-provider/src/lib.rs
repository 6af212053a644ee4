pub mod anthropic;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

pub use anthropic::AnthropicProvider;
pub use mock::MockProvider;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// A text-generation backend.
///
/// One call, one complete answer: implementations do not stream, retry or
/// cache. Prompt assembly happens before this seam (see `specgen-prompts`).
#[async_trait]
pub trait SpecProvider: Send + Sync {
    /// Human-readable provider name for logging.
    fn name(&self) -> &str;

    /// Generate a document from a system instruction and a single user turn.
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, ProviderError>;
}
