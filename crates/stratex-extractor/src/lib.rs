//! Stratex Extractor
//!
//! Chunked document extraction: split a long document into bounded-size
//! segments, ask an LLM once per segment for a bounded category of facts, and
//! fold the answers into one deduplicated, ordered list.
//!
//! # Architecture
//!
//! ```text
//! Document → TextChunker → Extractor → LLM → parse_lines → merge → ExtractionReport
//! ```
//!
//! # Key Features
//!
//! - **Word-boundary chunking**: chunk ends back off to whitespace
//! - **Configurable prompt**: persona, focus, languages, bullet marker or a custom template
//! - **Permissive parsing**: any non-blank line is a candidate item
//! - **Fault isolation**: a failing chunk is recorded and skipped
//! - **Deterministic order**: chunks run sequentially; first occurrence wins
//!
//! # Example Usage
//!
//! ```no_run
//! use stratex_domain::Document;
//! use stratex_extractor::{ExtractionRequest, ExtractorConfig, Pipeline};
//! use stratex_llm::OllamaProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractorConfig::default();
//! let pipeline = Pipeline::new(OllamaProvider::default_endpoint()?, config)?;
//!
//! let document = Document::new("BEC", "… annual report text …");
//! let report = pipeline
//!     .run(ExtractionRequest::new(document, pipeline.config()))
//!     .await;
//!
//! for item in &report.items {
//!     println!("• {}", item);
//! }
//! println!("Failed chunks: {}", report.failures.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod aggregator;
mod chunking;
mod config;
mod error;
mod extractor;
mod pipeline;
mod prompt;
mod types;


pub use aggregator::{merge, parse_lines, AggregatedResult};
pub use chunking::TextChunker;
pub use config::{ExtractorConfig, DEFAULT_CHUNK_SIZE, DEFAULT_MODEL};
pub use error::{ExtractorError, TimedOut};
pub use extractor::Extractor;
pub use pipeline::Pipeline;
pub use prompt::{PromptBuilder, PromptConfig};
pub use types::{
    ChunkFailure, DocumentOutcome, ExtractionMetadata, ExtractionReport, ExtractionRequest,
    PipelineState,
};
