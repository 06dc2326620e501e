//! Weaviate vector store implementation
//!
//! Talks to Weaviate's GraphQL endpoint with `nearVector` queries and
//! requests `_additional { distance }` alongside the stored properties.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::domain::vector_store::{SearchHit, VectorStore, VectorStoreSession};
use crate::domain::DomainError;
use crate::infrastructure::HttpClientTrait;

/// Properties requested for every passage
const PASSAGE_FIELDS: &str = "text docTitle pageNumber";

/// Weaviate-backed vector store for a single named collection
#[derive(Debug, Clone)]
pub struct WeaviateVectorStore<C: HttpClientTrait + Clone> {
    client: C,
    base_url: String,
    collection: String,
}

impl<C: HttpClientTrait + Clone + 'static> WeaviateVectorStore<C> {
    pub fn new(client: C, base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            collection: collection.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }
}

#[async_trait]
impl<C: HttpClientTrait + Clone + 'static> VectorStore for WeaviateVectorStore<C> {
    async fn connect(&self) -> Result<Box<dyn VectorStoreSession>, DomainError> {
        debug!(collection = %self.collection, "opening weaviate session");

        Ok(Box::new(WeaviateSession {
            client: self.client.clone(),
            graphql_url: format!("{}/v1/graphql", self.base_url),
            collection: self.collection.clone(),
        }))
    }

    fn provider_type(&self) -> &'static str {
        "weaviate"
    }
}

struct WeaviateSession<C: HttpClientTrait> {
    client: C,
    graphql_url: String,
    collection: String,
}

impl<C: HttpClientTrait> WeaviateSession<C> {
    fn build_query(&self, vector: &[f32], limit: u32) -> Result<Value, DomainError> {
        let vector_json = serde_json::to_string(vector)
            .map_err(|e| DomainError::internal(format!("Failed to serialize vector: {}", e)))?;

        let query = format!(
            "{{ Get {{ {}(nearVector: {{vector: {}}}, limit: {}) \
             {{ {} _additional {{ distance }} }} }} }}",
            self.collection, vector_json, limit, PASSAGE_FIELDS
        );

        Ok(serde_json::json!({ "query": query }))
    }

    fn parse_response(&self, json: Value) -> Result<Vec<SearchHit>, DomainError> {
        if let Some(errors) = json.get("errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                let message = errors[0]
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown GraphQL error");
                return Err(DomainError::vector_store(format!(
                    "GraphQL query failed: {}",
                    message
                )));
            }
        }

        let objects = json
            .pointer(&format!("/data/Get/{}", self.collection))
            .and_then(Value::as_array)
            .ok_or_else(|| {
                DomainError::vector_store(format!(
                    "Malformed search response for collection '{}'",
                    self.collection
                ))
            })?;

        Ok(objects.iter().map(object_to_hit).collect())
    }
}

fn object_to_hit(object: &Value) -> SearchHit {
    let distance = object
        .pointer("/_additional/distance")
        .and_then(Value::as_f64);

    let properties: HashMap<String, Value> = object
        .as_object()
        .map(|map| {
            map.iter()
                .filter(|(key, _)| key.as_str() != "_additional")
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
        .unwrap_or_default();

    SearchHit {
        properties,
        distance,
    }
}

#[async_trait]
impl<C: HttpClientTrait> VectorStoreSession for WeaviateSession<C> {
    async fn near_vector(
        &self,
        vector: &[f32],
        limit: u32,
    ) -> Result<Vec<SearchHit>, DomainError> {
        let body = self.build_query(vector, limit)?;
        let headers = vec![("Content-Type", "application/json")];

        let json = self.client.post_json(&self.graphql_url, headers, &body).await?;

        self.parse_response(json)
    }

    async fn close(self: Box<Self>) -> Result<(), DomainError> {
        // The GraphQL transport holds no server-side state; closing is
        // logged so the session lifecycle stays observable.
        debug!(collection = %self.collection, "weaviate session closed");
        Ok(())
    }
}
