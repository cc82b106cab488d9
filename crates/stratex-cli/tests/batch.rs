//! Batch runs over a directory with a scripted provider.

use std::fs;
use std::path::PathBuf;
use stratex_cli::commands::{resolve_inputs, run_batch, BatchSummary};
use stratex_cli::config::OutputFormat;
use stratex_cli::Formatter;
use stratex_document::DEFAULT_MAX_FILE_SIZE;
use stratex_extractor::{ExtractorConfig, Pipeline};
use stratex_llm::MockProvider;

fn write_reports(dir: &std::path::Path) {
    fs::write(dir.join("ACME_Annual_Report.pdf"), b"not really a pdf").unwrap();
    fs::write(
        dir.join("BEC_Annual_Report.txt"),
        "We moved the core banking platform to the cloud this year.",
    )
    .unwrap();
    fs::write(dir.join("readme.docx"), "ignored").unwrap();
}

async fn run(
    llm: MockProvider,
    inputs: &[PathBuf],
    subject: Option<&str>,
    format: OutputFormat,
) -> (BatchSummary, String) {
    let pipeline = Pipeline::new(llm, ExtractorConfig::default()).unwrap();
    let formatter = Formatter::new(format, false);
    let mut out = Vec::new();

    let summary = run_batch(
        &pipeline,
        inputs,
        subject,
        DEFAULT_MAX_FILE_SIZE,
        &formatter,
        &mut out,
    )
    .await
    .unwrap();

    (summary, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_batch_continues_after_unreadable_document() {
    let dir = tempfile::tempdir().unwrap();
    write_reports(dir.path());

    let llm = MockProvider::new("• Cloud migration\n• Cloud migration\n- Core banking");
    let inputs = resolve_inputs(dir.path(), None).unwrap();
    assert_eq!(inputs.len(), 2);

    let (summary, out) = run(llm.clone(), &inputs, None, OutputFormat::Json).await;

    assert_eq!(
        summary,
        BatchSummary {
            succeeded: 1,
            failed: 1
        }
    );

    let lines: Vec<serde_json::Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);

    assert_eq!(lines[0]["status"], "failed");
    assert!(lines[0]["path"]
        .as_str()
        .unwrap()
        .ends_with("ACME_Annual_Report.pdf"));

    assert_eq!(lines[1]["status"], "completed");
    assert_eq!(lines[1]["subject"], "BEC");
    assert_eq!(
        lines[1]["items"],
        serde_json::json!(["Cloud migration", "Core banking"])
    );

    // Only the readable document reached the model
    assert_eq!(llm.call_count(), 1);
    assert!(llm.calls()[0].prompt.contains("BEC"));
}

#[tokio::test]
async fn test_subject_override_for_single_file() {
    let dir = tempfile::tempdir().unwrap();
    write_reports(dir.path());

    let file = dir.path().join("BEC_Annual_Report.txt");
    let inputs = resolve_inputs(&file, Some("Bank of Example")).unwrap();

    let llm = MockProvider::new("• Data platform");
    let (summary, out) = run(
        llm.clone(),
        &inputs,
        Some("Bank of Example"),
        OutputFormat::Quiet,
    )
    .await;

    assert_eq!(summary.succeeded, 1);
    assert_eq!(out, "• Data platform\n");
    assert!(llm.calls()[0].prompt.contains("Bank of Example"));
}

#[tokio::test]
async fn test_chunk_failures_do_not_fail_the_document() {
    let dir = tempfile::tempdir().unwrap();
    write_reports(dir.path());

    let file = dir.path().join("BEC_Annual_Report.txt");
    let llm = MockProvider::new("• unused");
    llm.push_error("model crashed");

    let (summary, out) = run(llm, &[file], None, OutputFormat::Table).await;

    assert_eq!(
        summary,
        BatchSummary {
            succeeded: 1,
            failed: 0
        }
    );
    assert!(out.contains("No items found"));
    assert!(out.contains("Chunk 0 (offset 0) failed"));
}
