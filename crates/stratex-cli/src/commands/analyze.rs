//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use stratex_document::{discover, load_document};
use stratex_domain::LlmProvider;
use stratex_extractor::{DocumentOutcome, ExtractionRequest, Pipeline, PipelineState};
use stratex_llm::OllamaProvider;
use tracing::info;

/// Counts for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Documents whose chunks were all attempted
    pub succeeded: usize,
    /// Documents that could not be read
    pub failed: usize,
}

/// Execute the analyze command.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<BatchSummary> {
    let mut extractor_config = config.extractor.clone();
    if let Some(model) = args.model {
        extractor_config.model = model;
    }
    if let Some(chunk_size) = args.chunk_size {
        extractor_config.chunk_size = chunk_size;
    }
    if let Some(secs) = args.timeout {
        extractor_config.extraction_timeout_secs = Some(secs);
    }

    let inputs = resolve_inputs(&args.path, args.subject.as_deref())?;

    let endpoint = args
        .endpoint
        .unwrap_or_else(|| config.ollama.endpoint.clone());
    let provider = OllamaProvider::with_timeout(
        endpoint,
        Duration::from_secs(config.ollama.request_timeout_secs),
    )?;
    let pipeline = Pipeline::new(provider, extractor_config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = run_batch(
        &pipeline,
        &inputs,
        args.subject.as_deref(),
        config.settings.max_file_size,
        formatter,
        &mut out,
    )
    .await?;

    if formatter.format() == OutputFormat::Table {
        writeln!(out, "{}", formatter.summary(summary.succeeded, summary.failed))?;
    }

    Ok(summary)
}

/// Expand `path` into the documents to analyze.
///
/// A directory yields its loadable files in name order. `subject` only makes
/// sense for a single file.
pub fn resolve_inputs(path: &Path, subject: Option<&str>) -> Result<Vec<PathBuf>> {
    if path.is_dir() {
        if subject.is_some() {
            return Err(CliError::InvalidInput(
                "--subject can only be used with a single file".to_string(),
            ));
        }

        let paths = discover(path)?;
        if paths.is_empty() {
            return Err(CliError::InvalidInput(format!(
                "No PDF or text documents in '{}'",
                path.display()
            )));
        }
        Ok(paths)
    } else if path.exists() {
        Ok(vec![path.to_path_buf()])
    } else {
        Err(CliError::InvalidInput(format!(
            "'{}' does not exist",
            path.display()
        )))
    }
}

/// Run the pipeline over every document in `inputs`, writing each outcome.
///
/// An unreadable document is reported and the batch moves on.
pub async fn run_batch<L, W>(
    pipeline: &Pipeline<L>,
    inputs: &[PathBuf],
    subject: Option<&str>,
    max_file_size: u64,
    formatter: &Formatter,
    out: &mut W,
) -> Result<BatchSummary>
where
    L: LlmProvider,
    W: Write,
{
    let mut summary = BatchSummary::default();
    let show_progress = formatter.format() == OutputFormat::Table;

    for path in inputs {
        if show_progress {
            eprintln!("{}", formatter.info(&format!("Analyzing {}", path.display())));
        }

        let owned_path = path.clone();
        let owned_subject = subject.map(str::to_string);
        let loaded = tokio::task::spawn_blocking(move || {
            load_document(&owned_path, owned_subject.as_deref(), max_file_size)
        })
        .await
        .map_err(io::Error::other)?;

        let source = loaded.map(|document| ExtractionRequest::new(document, pipeline.config()));

        let outcome = pipeline
            .run_source(source, |state| {
                if show_progress {
                    if let PipelineState::ExtractingChunk(i) = state {
                        eprintln!("{}", formatter.info(&format!("  chunk {}", i)));
                    }
                }
            })
            .await;

        match &outcome {
            DocumentOutcome::Completed(_) => summary.succeeded += 1,
            DocumentOutcome::Failed { .. } => summary.failed += 1,
        }

        let rendered = formatter.format_outcome(path, &outcome)?;
        if !rendered.is_empty() {
            writeln!(out, "{}", rendered)?;
        }
    }

    info!(
        "Batch finished: {} succeeded, {} unreadable",
        summary.succeeded, summary.failed
    );

    Ok(summary)
}
