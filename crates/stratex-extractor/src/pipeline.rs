//! Pipeline driver: chunk, extract and aggregate one document

use crate::aggregator::{merge, parse_lines, AggregatedResult};
use crate::chunking::TextChunker;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::extractor::Extractor;
use crate::prompt::PromptBuilder;
use crate::types::{
    ChunkFailure, DocumentOutcome, ExtractionMetadata, ExtractionReport, ExtractionRequest,
    PipelineState,
};
use std::fmt::Display;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use stratex_domain::LlmProvider;
use tracing::{debug, info, warn};

/// Runs Chunker → Extractor → Aggregator over documents, one at a time
///
/// Chunks are processed strictly in order and each call is awaited before the
/// next one starts, so the result order is reproducible for identical answers.
/// A failing chunk is recorded and skipped; it never aborts the document.
pub struct Pipeline<L>
where
    L: LlmProvider,
{
    extractor: Extractor<L>,
    config: ExtractorConfig,
}

impl<L> Pipeline<L>
where
    L: LlmProvider,
{
    /// Create a new pipeline
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError::Config` if `config` does not validate.
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        let extractor = Extractor::new(llm_provider, PromptBuilder::new(config.prompt.clone()))
            .with_timeout(config.extraction_timeout());

        Ok(Self { extractor, config })
    }

    /// Configuration this pipeline runs with
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// The per-chunk extractor
    pub fn extractor(&self) -> &Extractor<L> {
        &self.extractor
    }

    /// Run the pipeline over one document
    pub async fn run(&self, request: ExtractionRequest) -> ExtractionReport {
        self.run_with_observer(request, |_| {}).await
    }

    /// Run the pipeline over one document, reporting every state change
    pub async fn run_with_observer<F>(
        &self,
        request: ExtractionRequest,
        mut observer: F,
    ) -> ExtractionReport
    where
        F: FnMut(PipelineState),
    {
        let started = Instant::now();
        let subject = request.document.label().to_string();
        let mut enter = |state: PipelineState| {
            debug!("[{}] {}", subject, state);
            observer(state);
        };

        enter(PipelineState::Pending);

        info!(
            "Starting extraction for '{}' with model '{}', text length {} chars",
            subject,
            request.model,
            request.document.char_len()
        );

        enter(PipelineState::Chunking);
        let chunks = TextChunker::new(request.chunk_size).chunk(request.document.text());

        info!("Split '{}' into {} chunks", subject, chunks.len());

        let mut items = AggregatedResult::new();
        let mut failures = Vec::new();

        for chunk in &chunks {
            enter(PipelineState::ExtractingChunk(chunk.index));

            let answer = match self
                .extractor
                .extract(&chunk.text, &subject, &request.model)
                .await
            {
                Ok(answer) => answer,
                Err(e) => {
                    warn!(
                        "Chunk {}/{} of '{}' failed: {}",
                        chunk.index + 1,
                        chunks.len(),
                        subject,
                        e
                    );
                    failures.push(ChunkFailure {
                        chunk_index: chunk.index,
                        offset: chunk.start,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            enter(PipelineState::Merging(chunk.index));
            let lines = parse_lines(&answer, &self.config.bullet_markers);
            let before = items.len();
            items = merge(items, lines);
            debug!(
                "Chunk {} added {} new items ({} total)",
                chunk.index,
                items.len() - before,
                items.len()
            );
        }

        enter(PipelineState::Done);

        let metadata = ExtractionMetadata {
            model_name: request.model.clone(),
            chunk_count: chunks.len(),
            chunk_size: request.chunk_size,
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            processing_time_ms: started.elapsed().as_millis() as u64,
        };

        info!(
            "Extraction complete for '{}': {} items, {} of {} chunks failed",
            subject,
            items.len(),
            failures.len(),
            chunks.len()
        );

        ExtractionReport {
            subject,
            items,
            failures,
            metadata,
        }
    }

    /// Run the pipeline over a document that may have failed to load
    ///
    /// An unreadable source moves straight from `Pending` to `Failed` without
    /// chunking.
    pub async fn run_source<E, F>(
        &self,
        source: Result<ExtractionRequest, E>,
        mut observer: F,
    ) -> DocumentOutcome
    where
        E: Display,
        F: FnMut(PipelineState),
    {
        match source {
            Ok(request) => {
                DocumentOutcome::Completed(self.run_with_observer(request, observer).await)
            }
            Err(e) => {
                observer(PipelineState::Pending);
                warn!("Document unreadable: {}", e);
                observer(PipelineState::Failed);
                DocumentOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratex_domain::Document;
    use stratex_llm::MockProvider;

    fn pipeline(llm: MockProvider, chunk_size: usize) -> Pipeline<MockProvider> {
        let config = ExtractorConfig {
            chunk_size,
            ..ExtractorConfig::default()
        };
        Pipeline::new(llm, config).unwrap()
    }

    fn request(p: &Pipeline<MockProvider>, text: &str) -> ExtractionRequest {
        ExtractionRequest::new(Document::new("Acme", text), p.config())
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExtractorConfig {
            chunk_size: 0,
            ..ExtractorConfig::default()
        };
        let result = Pipeline::new(MockProvider::default(), config);
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    #[tokio::test]
    async fn test_empty_document_makes_no_calls() {
        let llm = MockProvider::new("• Never");
        let p = pipeline(llm.clone(), 100);

        let report = p.run(request(&p, "")).await;
        assert!(report.items.is_empty());
        assert!(report.is_complete());
        assert_eq!(report.metadata.chunk_count, 0);
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_one_call_per_chunk_in_order() {
        let llm = MockProvider::new("");
        let p = pipeline(llm.clone(), 6);

        p.run(request(&p, "alpha beta gamma")).await;

        let prompts: Vec<String> = llm.calls().into_iter().map(|c| c.prompt).collect();
        assert_eq!(prompts.len(), 3);
        assert!(prompts[0].contains("\nalpha\n"));
        assert!(prompts[1].contains("\nbeta\n"));
        assert!(prompts[2].contains("\ngamma\n"));
    }

    #[tokio::test]
    async fn test_middle_chunk_failure_is_isolated() {
        let llm = MockProvider::default();
        llm.push_response("• Cloud migration\n• Data platform");
        llm.push_error("model crashed");
        llm.push_response("• Data platform\n• Zero trust");
        let p = pipeline(llm.clone(), 6);

        let report = p.run(request(&p, "alpha beta gamma")).await;

        assert_eq!(
            report.items.to_strings(),
            vec!["Cloud migration", "Data platform", "Zero trust"]
        );
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].chunk_index, 1);
        assert_eq!(report.failures[0].offset, 5);
        assert!(report.failures[0].reason.contains("model crashed"));
        assert_eq!(llm.call_count(), 3);
    }

    #[tokio::test]
    async fn test_state_transitions() {
        let llm = MockProvider::default();
        llm.push_response("• A");
        llm.push_error("boom");
        let p = pipeline(llm, 6);

        let mut states = Vec::new();
        p.run_with_observer(request(&p, "alpha beta"), |s| states.push(s))
            .await;

        assert_eq!(
            states,
            vec![
                PipelineState::Pending,
                PipelineState::Chunking,
                PipelineState::ExtractingChunk(0),
                PipelineState::Merging(0),
                PipelineState::ExtractingChunk(1),
                PipelineState::Done,
            ]
        );
    }

    #[tokio::test]
    async fn test_unreadable_source_fails_without_calls() {
        let llm = MockProvider::new("• Never");
        let p = pipeline(llm.clone(), 100);

        let mut states = Vec::new();
        let source: Result<ExtractionRequest, String> = Err("not a PDF".to_string());
        let outcome = p.run_source(source, |s| states.push(s)).await;

        assert!(matches!(outcome, DocumentOutcome::Failed { ref reason } if reason == "not a PDF"));
        assert_eq!(states, vec![PipelineState::Pending, PipelineState::Failed]);
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_request_overrides_model() {
        let llm = MockProvider::new("• A");
        let p = pipeline(llm.clone(), 100);

        let report = p.run(request(&p, "text").with_model("llama3.1")).await;
        assert_eq!(report.metadata.model_name, "llama3.1");
        assert_eq!(llm.calls()[0].model, "llama3.1");
    }
}
