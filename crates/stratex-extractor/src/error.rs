//! Error types for the Extractor

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The LLM call for a chunk failed; carries the provider's error
    #[error("Extraction failed: {0}")]
    ExtractionFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    /// Wrap a provider error as `ExtractionFailed`
    pub fn extraction_failed<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ExtractorError::ExtractionFailed(Box::new(cause))
    }
}

/// The LLM did not answer within the configured extraction timeout
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no answer within {0:?}")]
pub struct TimedOut(pub Duration);
