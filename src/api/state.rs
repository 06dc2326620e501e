//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::QueryPipeline;

/// Shared handles, constructed once at startup and cloned per request
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<QueryPipeline>,
}

impl AppState {
    pub fn new(pipeline: Arc<QueryPipeline>) -> Self {
        Self { pipeline }
    }
}
