//! Vector store implementations

mod weaviate;

pub use weaviate::WeaviateVectorStore;
