//! Stratex LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `stratex-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Scripted, deterministic mock for testing
//! - `OllamaProvider`: Local Ollama chat API integration
//!
//! # Examples
//!
//! ```
//! use stratex_llm::MockProvider;
//! use stratex_domain::LlmProvider;
//!
//! # async fn example() {
//! let provider = MockProvider::new("• Cloud migration");
//! let answer = provider.complete("qwen3:8b", "test prompt").await.unwrap();
//! assert_eq!(answer, "• Cloud migration");
//! # }
//! ```

#![warn(missing_docs)]

pub mod ollama;

use stratex_domain::LlmProvider;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use ollama::OllamaProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// A call recorded by [`MockProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Model identifier the caller asked for
    pub model: String,
    /// Prompt text sent
    pub prompt: String,
}

#[derive(Debug, Clone)]
enum Scripted {
    Answer(String),
    Fail(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns scripted outcomes in call order without making any network calls.
/// Once the script runs out, every call gets the default response.
///
/// # Examples
///
/// ```
/// use stratex_llm::MockProvider;
///
/// let provider = MockProvider::new("fallback");
/// provider.push_response("• Data platform");
/// provider.push_error("connection reset");
/// assert_eq!(provider.remaining(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    script: Arc<Mutex<VecDeque<Scripted>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all unscripted calls
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue an answer for the next unanswered call
    pub fn push_response(&self, response: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Answer(response.into()));
    }

    /// Queue a failure for the next unanswered call
    pub fn push_error(&self, message: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Fail(message.into()));
    }

    /// Number of scripted outcomes not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.lock().unwrap().len()
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All calls made so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProvider for MockProvider {
    type Error = LlmError;

    async fn complete(&self, model: &str, prompt: &str) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.to_string(),
            prompt: prompt.to_string(),
        });

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Answer(answer)) => Ok(answer),
            Some(Scripted::Fail(message)) => Err(LlmError::Other(message)),
            None => Ok(self.default_response.clone()),
        }
    }
}
