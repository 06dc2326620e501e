//! Domain layer - Core business logic and entities

pub mod embedding;
pub mod error;
pub mod generation;
pub mod query;
pub mod vector_store;

pub use embedding::EmbeddingProvider;
pub use error::DomainError;
pub use generation::{GenerationOutput, GenerationProvider};
pub use query::{
    build_context, build_prompt, system_prompt, Citation, CitationSource, LlmResponse, QueryTrace,
    RelevanceFilter, RetrievalConfig,
};
pub use vector_store::{SearchHit, VectorStore, VectorStoreSession};
