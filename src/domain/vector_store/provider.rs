//! Vector store provider traits

use async_trait::async_trait;
use std::fmt::Debug;

use super::SearchHit;
use crate::domain::DomainError;

/// A vector store backend able to open query sessions.
///
/// Handles are long-lived and shared across requests; every pipeline
/// invocation opens its own session so that a non-concurrency-safe
/// backend client is never shared between in-flight requests.
#[async_trait]
pub trait VectorStore: Send + Sync + Debug {
    /// Open a session against the configured collection
    async fn connect(&self) -> Result<Box<dyn VectorStoreSession>, DomainError>;

    /// Get the provider type name
    fn provider_type(&self) -> &'static str;
}

/// One open query session.
///
/// Callers must drive `close` on every path reachable after the session
/// was opened, before returning.
#[async_trait]
pub trait VectorStoreSession: Send + Sync {
    /// Return the `limit` nearest passages to `vector`, with distance
    /// metadata, ordered by ascending distance.
    async fn near_vector(
        &self,
        vector: &[f32],
        limit: u32,
    ) -> Result<Vec<SearchHit>, DomainError>;

    /// Release the session
    async fn close(self: Box<Self>) -> Result<(), DomainError>;
}
