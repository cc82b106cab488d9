//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use std::future::Future;

/// Trait for the text-completion capability of a language model runtime
///
/// Implemented by the infrastructure layer (stratex-llm). Calls may take
/// seconds and may fail; the answer is free-form text with no guaranteed
/// structure.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Complete `prompt` with the model identified by `model`
    fn complete(
        &self,
        model: &str,
        prompt: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
