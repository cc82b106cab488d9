//! Ollama Provider Implementation
//!
//! Provides integration with Ollama's local chat API.
//!
//! # Features
//!
//! - Async HTTP communication with `/api/chat`
//! - Configurable endpoint and request timeout
//! - Model chosen per call
//!
//! No retries: a failed call is reported to the caller as-is.
//!
//! # Examples
//!
//! ```no_run
//! use stratex_llm::OllamaProvider;
//! use stratex_domain::LlmProvider;
//!
//! # async fn example() -> Result<(), stratex_llm::LlmError> {
//! let provider = OllamaProvider::new("http://localhost:11434")?;
//! let answer = provider.complete("qwen3:8b", "List three colours.").await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```

use crate::LlmError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stratex_domain::LlmProvider;
use tracing::debug;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default timeout for a single chat request (10 minutes)
///
/// Local models on modest hardware routinely need minutes for a 4000 character chunk.
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Ollama API provider for local LLM inference
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    endpoint: String,
    timeout: Duration,
    client: reqwest::Client,
}

/// Request body for the Ollama chat API
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response from the Ollama chat API
#[derive(Deserialize)]
struct ChatResponse {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl OllamaProvider {
    /// Create a new Ollama provider with the default request timeout
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Other` if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, LlmError> {
        Self::with_timeout(endpoint, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new Ollama provider with an explicit request timeout
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Other` if the HTTP client cannot be built.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        let endpoint = endpoint.into().trim_end_matches('/').to_string();

        Ok(Self {
            endpoint,
            timeout,
            client,
        })
    }

    /// Create a new Ollama provider against `http://localhost:11434`
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Other` if the HTTP client cannot be built.
    pub fn default_endpoint() -> Result<Self, LlmError> {
        Self::new(DEFAULT_ENDPOINT)
    }

    /// Endpoint this provider talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request timeout applied to every call
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send one user message to `model` and return the assembled answer
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Ollama is not running or the request times out (`Communication`)
    /// - The model is not pulled (`ModelNotAvailable`)
    /// - The response body is not a chat response (`InvalidResponse`)
    pub async fn chat(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/api/chat", self.endpoint);

        let request_body = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
        };

        debug!("POST {} model={} prompt_chars={}", url, model, prompt.len());

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(model.to_string()));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let chat_response = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(chat_response.message.content)
    }
}

impl LlmProvider for OllamaProvider {
    type Error = LlmError;

    async fn complete(&self, model: &str, prompt: &str) -> Result<String, Self::Error> {
        self.chat(model, prompt).await
    }
}
