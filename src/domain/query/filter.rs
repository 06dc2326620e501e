//! Relevance filtering policy
//!
//! The one piece of tunable business logic in the pipeline. The policy
//! deliberately over-filters: returning no answer beats returning a
//! loosely-related one.

use super::RetrievalConfig;
use crate::domain::vector_store::SearchHit;

/// Filters search hits down to the ones usable as grounding evidence
#[derive(Debug, Clone)]
pub struct RelevanceFilter {
    distance_threshold: f64,
    min_text_length: usize,
}

impl RelevanceFilter {
    pub fn new(config: &RetrievalConfig) -> Self {
        Self {
            distance_threshold: config.distance_threshold,
            min_text_length: config.min_text_length,
        }
    }

    /// A hit survives only if its distance is present and strictly below
    /// the threshold, and its text is present, textual, and strictly
    /// longer than the minimum. An exact-threshold hit is excluded.
    pub fn accepts(&self, hit: &SearchHit) -> bool {
        let close_enough = match hit.distance {
            Some(distance) => distance < self.distance_threshold,
            None => false,
        };

        let meaningful_text = hit
            .text()
            .map(|text| text.chars().count() > self.min_text_length)
            .unwrap_or(false);

        close_enough && meaningful_text
    }

    /// Retain surviving hits, preserving the store's ranking order
    pub fn filter(&self, hits: Vec<SearchHit>) -> Vec<SearchHit> {
        hits.into_iter().filter(|hit| self.accepts(hit)).collect()
    }
}
