//! Generation provider domain models and traits

mod provider;

pub use provider::{GenerationOutput, GenerationProvider};

#[cfg(test)]
pub use provider::mock::MockGenerationProvider;
