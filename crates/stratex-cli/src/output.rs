//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use std::path::Path;
use stratex_domain::Chunk;
use stratex_extractor::{DocumentOutcome, ExtractionReport};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Characters of chunk text shown by `chunks`.
const PREVIEW_CHARS: usize = 48;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the outcome of one document.
    pub fn format_outcome(&self, path: &Path, outcome: &DocumentOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_outcome_json(path, outcome),
            OutputFormat::Table => Ok(self.format_outcome_table(path, outcome)),
            OutputFormat::Quiet => Ok(self.format_outcome_quiet(outcome)),
        }
    }

    /// One compact JSON object, so a batch prints as JSON lines.
    fn format_outcome_json(&self, path: &Path, outcome: &DocumentOutcome) -> Result<String> {
        let value = match outcome {
            DocumentOutcome::Completed(report) => serde_json::json!({
                "path": path.display().to_string(),
                "subject": report.subject,
                "status": "completed",
                "items": report.items.to_strings(),
                "failures": report.failures.iter().map(|f| serde_json::json!({
                    "chunk_index": f.chunk_index,
                    "offset": f.offset,
                    "reason": f.reason,
                })).collect::<Vec<_>>(),
                "model": report.metadata.model_name,
                "chunk_count": report.metadata.chunk_count,
                "chunk_size": report.metadata.chunk_size,
                "timestamp": report.metadata.timestamp,
                "processing_time_ms": report.metadata.processing_time_ms,
            }),
            DocumentOutcome::Failed { reason } => serde_json::json!({
                "path": path.display().to_string(),
                "status": "failed",
                "reason": reason,
            }),
        };

        Ok(serde_json::to_string(&value)?)
    }

    fn format_outcome_table(&self, path: &Path, outcome: &DocumentOutcome) -> String {
        match outcome {
            DocumentOutcome::Completed(report) => self.format_report_table(report),
            DocumentOutcome::Failed { reason } => {
                self.error(&format!("{}: {}", path.display(), reason))
            }
        }
    }

    fn format_report_table(&self, report: &ExtractionReport) -> String {
        let heading = self.colorize(
            &format!(
                "{} ({}, {} chunks, {} ms)",
                report.subject,
                report.metadata.model_name,
                report.metadata.chunk_count,
                report.metadata.processing_time_ms
            ),
            "cyan",
        );

        let mut lines = vec![heading];

        if report.items.is_empty() {
            lines.push(self.colorize("No items found.", "yellow"));
        } else {
            let mut builder = Builder::default();
            builder.push_record(["#", "Item"]);
            for (i, item) in report.items.iter().enumerate() {
                builder.push_record([(i + 1).to_string(), item.to_string()]);
            }

            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            lines.push(table.to_string());
        }

        for failure in &report.failures {
            lines.push(self.warning(&format!(
                "Chunk {} (offset {}) failed: {}",
                failure.chunk_index, failure.offset, failure.reason
            )));
        }

        lines.join("\n")
    }

    /// Bullets only; unreadable documents print nothing.
    fn format_outcome_quiet(&self, outcome: &DocumentOutcome) -> String {
        match outcome {
            DocumentOutcome::Completed(report) => report
                .items
                .iter()
                .map(|item| format!("• {}", item))
                .collect::<Vec<_>>()
                .join("\n"),
            DocumentOutcome::Failed { .. } => String::new(),
        }
    }

    /// Format chunk boundaries.
    pub fn format_chunks(&self, chunks: &[Chunk]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = chunks
                    .iter()
                    .map(|c| {
                        serde_json::json!({
                            "index": c.index,
                            "start": c.start,
                            "end": c.end,
                            "chars": c.text.chars().count(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Quiet => Ok(chunks
                .iter()
                .map(|c| format!("{}\t{}\t{}", c.index, c.start, c.end))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if chunks.is_empty() {
                    return Ok(self.colorize("No chunks (document is empty).", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Start", "End", "Chars", "Preview"]);
                for chunk in chunks {
                    builder.push_record([
                        chunk.index.to_string(),
                        chunk.start.to_string(),
                        chunk.end.to_string(),
                        chunk.text.chars().count().to_string(),
                        preview(&chunk.text),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format the batch summary line.
    pub fn summary(&self, succeeded: usize, failed: usize) -> String {
        let msg = format!(
            "{} document(s) analyzed, {} unreadable",
            succeeded, failed
        );
        if failed == 0 {
            self.success(&msg)
        } else {
            self.warning(&msg)
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// First line of `text`, cut to `PREVIEW_CHARS` characters.
fn preview(text: &str) -> String {
    let line = text.lines().next().unwrap_or("");
    let mut out: String = line.chars().take(PREVIEW_CHARS).collect();
    if line.chars().count() > PREVIEW_CHARS || text.lines().nth(1).is_some() {
        out.push('…');
    }
    out
}
