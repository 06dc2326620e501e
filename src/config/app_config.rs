use serde::Deserialize;

use crate::domain::query::RetrievalConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Endpoints and model identifiers for the external collaborators
#[derive(Debug, Clone, Deserialize)]
pub struct ProvidersConfig {
    /// Ollama endpoint serving both embedding and generation models
    pub ollama_endpoint: String,
    pub embedding_model: String,
    pub generation_model: String,
    /// Weaviate base URL
    pub weaviate_url: String,
    /// Collection holding the ingested passages
    pub collection: String,
    /// Per-call timeout for all remote providers
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            ollama_endpoint: "http://localhost:11434".to_string(),
            embedding_model: "nomic-embed-text".to_string(),
            generation_model: "llama3.2".to_string(),
            weaviate_url: "http://localhost:8080".to_string(),
            collection: "KnowledgeBase".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.providers.collection, "KnowledgeBase");
        assert_eq!(config.providers.embedding_model, "nomic-embed-text");
        assert_eq!(config.providers.generation_model, "llama3.2");
        assert_eq!(config.retrieval.top_k, 2);
        assert_eq!(config.retrieval.distance_threshold, 0.5);
    }

    #[test]
    fn test_deserialize_partial_overrides() {
        let json = r#"{
            "retrieval": { "distance_threshold": 0.8, "top_k": 5 },
            "providers": {
                "ollama_endpoint": "http://host.docker.internal:11434",
                "embedding_model": "nomic-embed-text",
                "generation_model": "llama3.2",
                "weaviate_url": "http://weaviate:8080",
                "collection": "MovieReviews",
                "request_timeout_secs": 10
            }
        }"#;

        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.retrieval.distance_threshold, 0.8);
        assert_eq!(config.retrieval.top_k, 5);
        assert_eq!(config.providers.collection, "MovieReviews");
        // Untouched sections keep their defaults
        assert_eq!(config.server.port, 3000);
    }
}
