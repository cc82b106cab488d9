//! Request and response types for extraction

use crate::aggregator::AggregatedResult;
use crate::config::ExtractorConfig;
use std::fmt;
use stratex_domain::Document;

/// Request to run the pipeline over one document
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    /// Document to extract from
    pub document: Document,

    /// Model identifier for every chunk call
    pub model: String,

    /// Maximum chunk size (characters)
    pub chunk_size: usize,
}

impl ExtractionRequest {
    /// Request using the model and chunk size from `config`
    pub fn new(document: Document, config: &ExtractorConfig) -> Self {
        Self {
            document,
            model: config.model.clone(),
            chunk_size: config.chunk_size,
        }
    }

    /// Override the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the chunk size
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }
}

/// A chunk whose LLM call failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkFailure {
    /// Zero-based index of the chunk
    pub chunk_index: usize,

    /// Character offset where the chunk starts
    pub offset: usize,

    /// Reason for failure
    pub reason: String,
}

/// Result of running the pipeline over one document
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Subject label of the document
    pub subject: String,

    /// Unique line items in first-seen order
    pub items: AggregatedResult,

    /// Chunks that contributed nothing because their call failed
    pub failures: Vec<ChunkFailure>,

    /// Metadata about the run
    pub metadata: ExtractionMetadata,
}

impl ExtractionReport {
    /// Whether every chunk was extracted successfully
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Metadata about an extraction run
#[derive(Debug, Clone)]
pub struct ExtractionMetadata {
    /// Name of the LLM model used
    pub model_name: String,

    /// Number of chunks the document was split into
    pub chunk_count: usize,

    /// Chunk size the document was split with
    pub chunk_size: usize,

    /// Timestamp when the run finished (seconds since the Unix epoch)
    pub timestamp: u64,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Outcome of one document in a batch
#[derive(Debug, Clone)]
pub enum DocumentOutcome {
    /// The document was read and every chunk was attempted
    Completed(ExtractionReport),

    /// The document could not be read; no chunk was attempted
    Failed {
        /// Why the document was unreadable
        reason: String,
    },
}

/// Stage of the pipeline for the document being processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Nothing has happened yet
    Pending,
    /// Splitting the document text
    Chunking,
    /// Waiting on the LLM for chunk `i`
    ExtractingChunk(usize),
    /// Folding chunk `i`'s line items into the result
    Merging(usize),
    /// All chunks attempted
    Done,
    /// The document could not be read
    Failed,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineState::Pending => write!(f, "pending"),
            PipelineState::Chunking => write!(f, "chunking"),
            PipelineState::ExtractingChunk(i) => write!(f, "extracting chunk {}", i),
            PipelineState::Merging(i) => write!(f, "merging chunk {}", i),
            PipelineState::Done => write!(f, "done"),
            PipelineState::Failed => write!(f, "failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_config() {
        let config = ExtractorConfig::default();
        let request = ExtractionRequest::new(Document::new("BEC", "text"), &config)
            .with_chunk_size(1200);

        assert_eq!(request.model, "qwen3:8b");
        assert_eq!(request.chunk_size, 1200);

        let request = request.with_model("llama3.1");
        assert_eq!(request.model, "llama3.1");
    }

    #[test]
    fn test_state_display() {
        assert_eq!(PipelineState::ExtractingChunk(2).to_string(), "extracting chunk 2");
        assert_eq!(PipelineState::Done.to_string(), "done");
    }
}
