//! Query trace output types
//!
//! The externally visible result of one pipeline execution. Field names
//! follow the serialized wire shape consumed by callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::vector_store::SearchHit;

/// Citation excerpts are capped at this many characters
pub const EXCERPT_MAX_CHARS: usize = 200;

/// Complete output of one pipeline execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryTrace {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<Citation>>,
    #[serde(rename = "llmResponse", skip_serializing_if = "Option::is_none")]
    pub llm_response: Option<LlmResponse>,
}

/// A user-facing reference to a passage that grounded the answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub source: CitationSource,
    pub excerpt: String,
}

/// Provenance of a cited passage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationSource {
    pub document: String,
    #[serde(rename = "pageNumber")]
    pub page_number: i64,
}

/// Generation result attached to a trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmResponse {
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl Citation {
    /// Build a citation from a filter-surviving hit.
    ///
    /// The distance is copied verbatim; the title and page number are
    /// coerced so the output never carries nulls; the excerpt is the
    /// first [`EXCERPT_MAX_CHARS`] characters of the passage text.
    pub fn from_hit(hit: &SearchHit) -> Self {
        let text = hit.text().unwrap_or_default();

        Self {
            distance: hit.distance,
            source: CitationSource {
                document: coerce_document(hit.property("docTitle")),
                page_number: coerce_page_number(hit.property("pageNumber")),
            },
            excerpt: text.chars().take(EXCERPT_MAX_CHARS).collect(),
        }
    }
}

/// Absent or null titles become an empty string; anything else is
/// rendered as text.
fn coerce_document(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Numeric strings are parsed; a parse failure or absence yields 0.
/// Fractional values are truncated toward zero.
fn coerce_page_number(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}
