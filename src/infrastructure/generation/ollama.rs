//! Ollama generation provider implementation

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::generation::{GenerationOutput, GenerationProvider};
use crate::domain::DomainError;
use crate::infrastructure::HttpClientTrait;

/// Ollama generation provider, backed by `POST /api/generate`
#[derive(Debug)]
pub struct OllamaGenerationProvider<C: HttpClientTrait> {
    client: C,
    model: String,
    base_url: String,
}

impl<C: HttpClientTrait> OllamaGenerationProvider<C> {
    pub fn new(client: C, model: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![("Content-Type", "application/json")]
    }
}

#[async_trait]
impl<C: HttpClientTrait> GenerationProvider for OllamaGenerationProvider<C> {
    async fn complete(&self, prompt: &str) -> Result<GenerationOutput, DomainError> {
        let body = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
        });

        let json = self
            .client
            .post_json(&self.generate_url(), self.headers(), &body)
            .await?;

        let response: OllamaGenerateResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider(
                "ollama",
                format!("Failed to parse generate response: {}", e),
            )
        })?;

        Ok(GenerationOutput::new(response.response))
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}
