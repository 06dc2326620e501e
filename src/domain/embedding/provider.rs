//! Embedding provider trait definition

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for embedding providers (Ollama, OpenAI, etc.)
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Generate an embedding vector for the given text.
    ///
    /// An empty vector means the provider produced no usable embedding for
    /// this input; callers treat that as a soft retrieval failure rather
    /// than a transport error.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// Get the model identifier this provider is configured with
    fn model(&self) -> &str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    pub struct MockEmbeddingProvider {
        model: String,
        vector: Vec<f32>,
        error: Option<String>,
        call_count: AtomicUsize,
    }

    impl MockEmbeddingProvider {
        pub fn new(model: impl Into<String>) -> Self {
            Self {
                model: model.into(),
                vector: vec![0.1, 0.2, 0.3, 0.4, 0.5],
                error: None,
                call_count: AtomicUsize::new(0),
            }
        }

        /// Return a fixed vector from every `embed` call
        pub fn with_vector(mut self, vector: Vec<f32>) -> Self {
            self.vector = vector;
            self
        }

        /// Return an empty vector, simulating a failed embedding
        pub fn with_empty_vector(mut self) -> Self {
            self.vector = Vec::new();
            self
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EmbeddingProvider for MockEmbeddingProvider {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>, DomainError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);

            if let Some(ref error) = self.error {
                return Err(DomainError::provider(self.provider_name(), error));
            }

            Ok(self.vector.clone())
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }

        fn model(&self) -> &str {
            &self.model
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_provider_fixed_vector() {
            let provider =
                MockEmbeddingProvider::new("test-embed").with_vector(vec![1.0, 2.0, 3.0]);

            let vector = provider.embed("hello").await.unwrap();

            assert_eq!(vector, vec![1.0, 2.0, 3.0]);
            assert_eq!(provider.call_count(), 1);
        }

        #[tokio::test]
        async fn test_mock_provider_empty_vector() {
            let provider = MockEmbeddingProvider::new("test-embed").with_empty_vector();

            let vector = provider.embed("hello").await.unwrap();

            assert!(vector.is_empty());
        }

        #[tokio::test]
        async fn test_mock_provider_error() {
            let provider = MockEmbeddingProvider::new("test-embed").with_error("API error");

            let result = provider.embed("hello").await;

            assert!(result.is_err());
            assert_eq!(provider.call_count(), 1);
        }
    }
}
