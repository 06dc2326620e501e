//! Retrieval tuning parameters

use serde::{Deserialize, Serialize};

/// Tunable retrieval parameters.
///
/// These vary per deployment: a strict support corpus runs a 0.5 distance
/// cutoff with `top_k` 2, while recall-oriented corpora loosen the cutoff
/// to 0.8 and fan out to 5 before filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Number of nearest passages requested from the vector store
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    /// Passages at or above this distance are discarded (strict less-than)
    #[serde(default = "default_distance_threshold")]
    pub distance_threshold: f64,
    /// Passages whose text is not strictly longer than this are discarded
    #[serde(default = "default_min_text_length")]
    pub min_text_length: usize,
}

fn default_top_k() -> u32 {
    2
}

fn default_distance_threshold() -> f64 {
    0.5
}

fn default_min_text_length() -> usize {
    10
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            distance_threshold: default_distance_threshold(),
            min_text_length: default_min_text_length(),
        }
    }
}

impl RetrievalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_distance_threshold(mut self, threshold: f64) -> Self {
        self.distance_threshold = threshold;
        self
    }

    pub fn with_min_text_length(mut self, length: usize) -> Self {
        self.min_text_length = length;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RetrievalConfig::default();
        assert_eq!(config.top_k, 2);
        assert_eq!(config.distance_threshold, 0.5);
        assert_eq!(config.min_text_length, 10);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: RetrievalConfig =
            serde_json::from_str(r#"{"top_k": 5, "distance_threshold": 0.8}"#).unwrap();
        assert_eq!(config.top_k, 5);
        assert_eq!(config.distance_threshold, 0.8);
        assert_eq!(config.min_text_length, 10);
    }
}
