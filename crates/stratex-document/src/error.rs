//! Error types for document loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a source document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file exists but its text could not be extracted
    #[error("Document unreadable: {}: {reason}", path.display())]
    Unreadable {
        /// Path of the offending file
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// The file extension is not one we know how to read
    #[error("Unsupported format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The file is larger than the configured limit
    #[error("File too large: {0} bytes")]
    FileTooLarge(u64),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
