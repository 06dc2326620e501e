//! Query pipeline domain models: trace output, filtering policy, prompt
//! assembly and retrieval tuning.

mod config;
mod filter;
mod prompt;
mod trace;

pub use config::RetrievalConfig;
pub use filter::RelevanceFilter;
pub use prompt::{build_context, build_prompt, system_prompt};
pub use trace::{Citation, CitationSource, LlmResponse, QueryTrace, EXCERPT_MAX_CHARS};
