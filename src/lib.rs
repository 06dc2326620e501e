//! Grounded support answering service
//!
//! Answers natural-language support questions by retrieving relevant
//! passages from a vector store and synthesizing a cited answer with an
//! LLM. The core is the query pipeline in
//! [`infrastructure::QueryPipeline`]; the embedding model, vector index
//! and generation model are external services behind narrow trait
//! contracts.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::AppState;
use infrastructure::embedding::OllamaEmbeddingProvider;
use infrastructure::generation::OllamaGenerationProvider;
use infrastructure::vector_store::WeaviateVectorStore;
use infrastructure::{HttpClient, QueryPipeline};

/// Wire up provider handles and the pipeline from configuration.
///
/// Handles are constructed once at startup and shared read-only across
/// requests; each pipeline invocation opens its own vector store session.
pub fn create_app_state(config: &AppConfig) -> AppState {
    let http = HttpClient::with_timeout(Duration::from_secs(
        config.providers.request_timeout_secs,
    ));

    let embedding = OllamaEmbeddingProvider::new(
        http.clone(),
        config.providers.embedding_model.clone(),
        config.providers.ollama_endpoint.clone(),
    );

    let generation = OllamaGenerationProvider::new(
        http.clone(),
        config.providers.generation_model.clone(),
        config.providers.ollama_endpoint.clone(),
    );

    let store = WeaviateVectorStore::new(
        http,
        config.providers.weaviate_url.clone(),
        config.providers.collection.clone(),
    );

    let pipeline = QueryPipeline::new(
        Arc::new(embedding),
        Arc::new(store),
        Arc::new(generation),
        config.retrieval.clone(),
    );

    AppState::new(Arc::new(pipeline))
}
