//! Stratex Document Sources
//!
//! Turns files on disk into [`Document`]s for the extraction pipeline.
//!
//! - PDF files are read page by page; empty pages are skipped and the rest are
//!   joined in page order, each followed by a newline.
//! - Plain text and markdown files are read verbatim.
//! - Directory batches are discovered non-recursively and sorted by file name.
//! - The subject label defaults to the file name up to the first `_`.
//!
//! [`Document`]: stratex_domain::Document

#![warn(missing_docs)]

mod discover;
mod error;
mod loader;

pub use discover::{discover, subject_label};
pub use error::DocumentError;
pub use loader::{join_pages, load_document, DocumentKind, DEFAULT_MAX_FILE_SIZE};
