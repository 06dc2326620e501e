//! Generation provider implementations

mod ollama;

pub use ollama::OllamaGenerationProvider;
