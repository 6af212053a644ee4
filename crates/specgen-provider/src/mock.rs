use std::sync::Mutex;

use async_trait::async_trait;

use crate::{ProviderError, SpecProvider};

enum Outcome {
    Text(String),
    Status { status: u16, body: String },
    MissingApiKey,
    Transport(String),
}

/// A provider for tests that returns a preconfigured outcome and records
/// every prompt pair it was called with.
pub struct MockProvider {
    outcome: Outcome,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockProvider {
    /// Create a mock that answers with the given text.
    pub fn success(text: &str) -> Self {
        Self::with_outcome(Outcome::Text(text.to_string()))
    }

    /// Create a mock that fails as if the provider returned `status`.
    pub fn failure(status: u16, body: &str) -> Self {
        Self::with_outcome(Outcome::Status {
            status,
            body: body.to_string(),
        })
    }

    /// Create a mock that behaves like an unconfigured credential.
    pub fn missing_key() -> Self {
        Self::with_outcome(Outcome::MissingApiKey)
    }

    /// Create a mock that fails before any response arrives.
    pub fn unreachable(msg: &str) -> Self {
        Self::with_outcome(Outcome::Transport(msg.to_string()))
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Prompt pairs received so far, as `(system, user)`.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

#[async_trait]
impl SpecProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((system_prompt.to_string(), user_prompt.to_string()));
        }
        match &self.outcome {
            Outcome::Text(text) => Ok(text.clone()),
            Outcome::Status { status, body } => Err(ProviderError::Status {
                status: *status,
                body: body.clone(),
            }),
            Outcome::MissingApiKey => Err(ProviderError::MissingApiKey),
            Outcome::Transport(msg) => Err(ProviderError::Transport(msg.clone())),
        }
    }
}
