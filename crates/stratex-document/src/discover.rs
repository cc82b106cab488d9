//! Directory discovery and subject labels

use crate::error::DocumentError;
use crate::loader::DocumentKind;
use std::fs;
use std::path::{Path, PathBuf};

/// List loadable documents in `dir`, sorted by file name
///
/// Non-recursive. Files whose extension is not a known [`DocumentKind`] are
/// skipped.
///
/// # Errors
///
/// Returns `Io` if the directory cannot be listed.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, DocumentError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && DocumentKind::from_path(&path).is_some() {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Derive the subject label from a file name
///
/// `BEC_Annual_Report_2024.pdf` becomes `BEC`. Names without `_` keep their
/// whole stem; a leading `_` falls back to the stem as well.
pub fn subject_label(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    match stem.split('_').next() {
        Some(head) if !head.is_empty() => head.to_string(),
        _ => stem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_label_from_prefix() {
        assert_eq!(
            subject_label(Path::new("/in/BEC_Aarsrapport_2024.pdf")),
            "BEC"
        );
    }

    #[test]
    fn test_subject_label_without_underscore() {
        assert_eq!(subject_label(Path::new("Contoso.pdf")), "Contoso");
    }

    #[test]
    fn test_subject_label_leading_underscore() {
        assert_eq!(subject_label(Path::new("_draft.txt")), "_draft");
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b_report.pdf", "a_report.PDF", "notes.txt", "image.png"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.pdf")).unwrap();

        let found: Vec<String> = discover(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(found, vec!["a_report.PDF", "b_report.pdf", "notes.txt"]);
    }

    #[test]
    fn test_discover_missing_dir() {
        let result = discover(Path::new("/definitely/not/here"));
        assert!(matches!(result, Err(DocumentError::Io(_))));
    }
}
