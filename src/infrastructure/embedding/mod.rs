//! Embedding provider implementations

mod ollama;

pub use ollama::OllamaEmbeddingProvider;
