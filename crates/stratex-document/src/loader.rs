//! Loading documents from PDF and plain-text files

use crate::discover::subject_label;
use crate::error::DocumentError;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use stratex_domain::Document;
use tracing::{debug, info};

/// Default maximum file size: 50 MiB
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Kind of source file, decided by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Portable Document Format
    Pdf,
    /// Plain text or markdown
    Text,
}

impl DocumentKind {
    /// Detect the kind from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" | "md" | "markdown" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Join per-page text in page order
///
/// Pages with no text are skipped; every kept page is followed by `\n`.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for page in pages {
        let page = page.as_ref();
        if page.is_empty() {
            continue;
        }
        text.push_str(page);
        text.push('\n');
    }
    text
}

/// Read a document from disk
///
/// `label` overrides the subject label derived from the file name.
///
/// # Errors
///
/// - `UnsupportedFormat` for unknown extensions
/// - `FileTooLarge` above `max_file_size`
/// - `Io` when the file cannot be read
/// - `Unreadable` when PDF text extraction fails
pub fn load_document(
    path: &Path,
    label: Option<&str>,
    max_file_size: u64,
) -> Result<Document, DocumentError> {
    let kind = DocumentKind::from_path(path)
        .ok_or_else(|| DocumentError::UnsupportedFormat(path.to_path_buf()))?;

    let meta = fs::metadata(path)?;
    if meta.len() > max_file_size {
        return Err(DocumentError::FileTooLarge(meta.len()));
    }

    let text = match kind {
        DocumentKind::Pdf => read_pdf(path)?,
        DocumentKind::Text => fs::read_to_string(path)?,
    };

    let label = label
        .map(str::to_string)
        .unwrap_or_else(|| subject_label(path));

    info!(
        "Loaded {} ({:?}, {} chars) as '{}'",
        path.display(),
        kind,
        text.chars().count(),
        label
    );

    Ok(Document::new(label, text))
}

fn read_pdf(path: &Path) -> Result<String, DocumentError> {
    let bytes = fs::read(path)?;

    // pdf-extract panics on some malformed inputs instead of returning an error
    let pages = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(&bytes)
    }))
    .map_err(|_| DocumentError::Unreadable {
        path: path.to_path_buf(),
        reason: "PDF parser panicked".to_string(),
    })?
    .map_err(|e| DocumentError::Unreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    debug!("{}: {} pages", path.display(), pages.len());

    Ok(join_pages(pages))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_detection() {
        assert_eq!(
            DocumentKind::from_path(Path::new("BEC_Report.PDF")),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("notes.md")),
            Some(DocumentKind::Text)
        );
        assert_eq!(DocumentKind::from_path(Path::new("image.png")), None);
        assert_eq!(DocumentKind::from_path(Path::new("no_extension")), None);
    }

    #[test]
    fn test_join_pages_skips_empty_pages() {
        let text = join_pages(["Page one", "", "Page three"]);
        assert_eq!(text, "Page one\nPage three\n");
    }

    #[test]
    fn test_join_pages_empty_input() {
        let pages: Vec<String> = Vec::new();
        assert_eq!(join_pages(pages), "");
    }

    #[test]
    fn test_load_text_document() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("Acme_Annual_Report_2024.txt");
        fs::write(&file, "We are moving to the cloud.").unwrap();

        let doc = load_document(&file, None, DEFAULT_MAX_FILE_SIZE).unwrap();
        assert_eq!(doc.label(), "Acme");
        assert_eq!(doc.text(), "We are moving to the cloud.");
    }

    #[test]
    fn test_label_override() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("report.txt");
        fs::write(&file, "text").unwrap();

        let doc = load_document(&file, Some("Contoso"), DEFAULT_MAX_FILE_SIZE).unwrap();
        assert_eq!(doc.label(), "Contoso");
    }

    #[test]
    fn test_unsupported_format() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("slides.pptx");
        fs::write(&file, "binary").unwrap();

        let result = load_document(&file, None, DEFAULT_MAX_FILE_SIZE);
        assert!(matches!(result, Err(DocumentError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_file_too_large() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("big.txt");
        fs::write(&file, "0123456789").unwrap();

        let result = load_document(&file, None, 5);
        assert!(matches!(result, Err(DocumentError::FileTooLarge(10))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_document(Path::new("/nonexistent/x.txt"), None, DEFAULT_MAX_FILE_SIZE);
        assert!(matches!(result, Err(DocumentError::Io(_))));
    }

    #[test]
    fn test_garbage_pdf_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("Broken_Report.pdf");
        fs::write(&file, b"this is not a pdf at all").unwrap();

        let result = load_document(&file, None, DEFAULT_MAX_FILE_SIZE);
        assert!(matches!(result, Err(DocumentError::Unreadable { .. })));
    }
}
