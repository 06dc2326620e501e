//! Query pipeline implementation
//!
//! The sequential chain at the heart of the service: embed the question,
//! search the vector store, filter candidates for relevance, assemble a
//! grounded prompt, generate an answer and return a structured trace.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::embedding::EmbeddingProvider;
use crate::domain::generation::GenerationProvider;
use crate::domain::query::{
    build_context, build_prompt, Citation, LlmResponse, QueryTrace, RelevanceFilter,
    RetrievalConfig,
};
use crate::domain::vector_store::VectorStore;
use crate::domain::DomainError;

/// Orchestrates embed → search → filter → generate for one query
#[derive(Debug)]
pub struct QueryPipeline {
    embedding: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStore>,
    generation: Arc<dyn GenerationProvider>,
    retrieval: RetrievalConfig,
}

impl QueryPipeline {
    pub fn new(
        embedding: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorStore>,
        generation: Arc<dyn GenerationProvider>,
        retrieval: RetrievalConfig,
    ) -> Self {
        Self {
            embedding,
            store,
            generation,
            retrieval,
        }
    }

    pub fn retrieval(&self) -> &RetrievalConfig {
        &self.retrieval
    }

    /// Answer a query, or return `None` when no grounded answer exists.
    ///
    /// Every provider error is caught here, logged with its detail and
    /// collapsed to `None`; callers see the same absent result for "no
    /// evidence" and "dependency failed" and must treat it as a valid
    /// no-answer outcome, never a crash.
    pub async fn ask(&self, query_text: &str) -> Option<QueryTrace> {
        match self.execute(query_text).await {
            Ok(trace) => trace,
            Err(e) => {
                error!(error = %e, query = %query_text, "query pipeline failed");
                None
            }
        }
    }

    async fn execute(&self, query_text: &str) -> Result<Option<QueryTrace>, DomainError> {
        info!(query = %query_text, "executing query");

        debug!("generating query embedding");
        let embedding = self.embedding.embed(query_text).await?;

        if embedding.is_empty() {
            warn!("embedding provider returned no vector, aborting query");
            return Ok(None);
        }

        debug!("performing semantic vector search");
        let session = self.store.connect().await?;
        let searched = session.near_vector(&embedding, self.retrieval.top_k).await;

        // The session is released before any filtering or generation, so
        // both the success path and every failure path past this point
        // run against a closed session.
        if let Err(e) = session.close().await {
            warn!(error = %e, "failed to close vector store session");
        }

        let hits = searched?;
        debug!(count = hits.len(), "retrieved candidate passages");

        let filter = RelevanceFilter::new(&self.retrieval);
        let surviving = filter.filter(hits);

        if surviving.is_empty() {
            info!("no passages passed the relevance filter, not answering");
            return Ok(None);
        }

        let citations: Vec<Citation> = surviving.iter().map(Citation::from_hit).collect();

        // Context carries the full passage texts, not the excerpts
        let context = build_context(surviving.iter().filter_map(|hit| hit.text()));
        let prompt = build_prompt(&context, query_text);

        debug!(citations = citations.len(), "generating grounded answer");
        let output = self.generation.complete(&prompt).await?;

        Ok(Some(QueryTrace {
            query: query_text.to_string(),
            citations: Some(citations),
            llm_response: Some(LlmResponse {
                model: self.generation.model().to_string(),
                output: Some(output.text),
            }),
        }))
    }
}
