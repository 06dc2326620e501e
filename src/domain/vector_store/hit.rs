//! Search hit returned by a vector store query

use std::collections::HashMap;

use serde_json::Value;

/// One nearest-neighbor result: stored passage properties plus the
/// distance reported by the store (lower = more similar).
///
/// Properties are kept loosely typed because stores return whatever was
/// ingested; `pageNumber` in particular is known to arrive both as a
/// number and as a string.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub properties: HashMap<String, Value>,
    pub distance: Option<f64>,
}

impl SearchHit {
    pub fn new(distance: Option<f64>) -> Self {
        Self {
            properties: HashMap::new(),
            distance,
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_property("text", Value::String(text.into()))
    }

    pub fn with_doc_title(self, title: impl Into<String>) -> Self {
        self.with_property("docTitle", Value::String(title.into()))
    }

    pub fn with_page_number(self, page: i64) -> Self {
        self.with_property("pageNumber", Value::from(page))
    }

    /// The passage text, if present and textual
    pub fn text(&self) -> Option<&str> {
        match self.properties.get("text") {
            Some(Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}
