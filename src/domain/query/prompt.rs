//! Prompt assembly
//!
//! The generation provider receives a single flattened string; the exact
//! layout (`Context:` / `User Query:` / `Answer:` labels) is load-bearing
//! and covered by tests.

/// Static system instruction block. Never user-influenced.
pub fn system_prompt() -> &'static str {
    "You are an AI support assistant helping internal support agents at B2B companies. \
     Answer user questions clearly, accurately, and concisely using the provided company \
     documentation and internal knowledge. Always cite your sources to build trust. \
     If a question is unclear or outside the provided context, ask clarifying questions \
     or respond honestly about the limitations. Your tone should be helpful, professional, \
     and friendly. Avoid speculation. Do not fabricate answers or invent sources."
}

/// Join full passage texts with a double line break, preserving order
pub fn build_context<'a>(texts: impl IntoIterator<Item = &'a str>) -> String {
    texts.into_iter().collect::<Vec<_>>().join("\n\n")
}

/// Assemble the single prompt string handed to the generation provider
pub fn build_prompt(context: &str, query: &str) -> String {
    format!(
        "{} Context: {} User Query: {} Answer:",
        system_prompt(),
        context,
        query
    )
}
