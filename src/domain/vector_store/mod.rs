//! Vector store domain models and traits

mod hit;
mod provider;

pub use hit::SearchHit;
pub use provider::{VectorStore, VectorStoreSession};

#[cfg(test)]
pub use provider::mock::MockVectorStore;
