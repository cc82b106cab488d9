//! Per-chunk LLM extraction

use crate::error::{ExtractorError, TimedOut};
use crate::prompt::PromptBuilder;
use std::time::Duration;
use stratex_domain::LlmProvider;
use tokio::time::timeout;
use tracing::debug;

/// Sends one chunk at a time to the LLM with the extraction prompt
///
/// The answer is returned as-is; checking that it follows the requested
/// bullet format is left to the aggregator's parser.
pub struct Extractor<L>
where
    L: LlmProvider,
{
    llm_provider: L,
    prompt: PromptBuilder,
    timeout: Option<Duration>,
}

impl<L> Extractor<L>
where
    L: LlmProvider,
{
    /// Create a new Extractor
    pub fn new(llm_provider: L, prompt: PromptBuilder) -> Self {
        Self {
            llm_provider,
            prompt,
            timeout: None,
        }
    }

    /// Give up on a call after `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The underlying provider
    pub fn provider(&self) -> &L {
        &self.llm_provider
    }

    /// Extract line items from one chunk, returning the raw answer
    ///
    /// # Errors
    ///
    /// Returns `ExtractionFailed` when the provider errors or the call exceeds
    /// the configured timeout. Never retries.
    pub async fn extract(
        &self,
        chunk_text: &str,
        subject_label: &str,
        model_id: &str,
    ) -> Result<String, ExtractorError> {
        let prompt = self.prompt.build(chunk_text, subject_label);

        debug!("Prompt length: {} chars", prompt.len());

        let call = self.llm_provider.complete(model_id, &prompt);
        let answer = match self.timeout {
            Some(limit) => timeout(limit, call)
                .await
                .map_err(|_| ExtractorError::extraction_failed(TimedOut(limit)))?,
            None => call.await,
        }
        .map_err(ExtractorError::extraction_failed)?;

        debug!("LLM response length: {} chars", answer.len());

        Ok(answer)
    }
}
