//! Generation provider trait definition

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Output of a single completion call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutput {
    pub text: String,
}

impl GenerationOutput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Trait for text generation providers (Ollama, OpenAI, etc.)
///
/// The provider receives a single flattened prompt string; no structured
/// message format is involved.
#[async_trait]
pub trait GenerationProvider: Send + Sync + Debug {
    /// Complete the given prompt into an answer
    async fn complete(&self, prompt: &str) -> Result<GenerationOutput, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// Get the model identifier this provider is configured with
    fn model(&self) -> &str;
}
