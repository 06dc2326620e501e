//! Query pipeline implementation

mod pipeline;

pub use pipeline::QueryPipeline;
