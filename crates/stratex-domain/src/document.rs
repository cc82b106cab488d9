//! Documents and the chunks derived from them

/// Extracted text of one source, labelled with the subject it describes
///
/// Immutable once read. The label is free-form (usually a company name taken
/// from the source file name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    label: String,
    text: String,
}

impl Document {
    /// Create a new document
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }

    /// Subject label of the document
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Full extracted text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the document has no text at all
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A contiguous slice of a document
///
/// `start` and `end` are character offsets of the untrimmed span in the
/// source text; consecutive chunks share a boundary (`prev.end == next.start`).
/// `text` is the span with surrounding whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Zero-based position of the chunk in document order
    pub index: usize,

    /// Character offset where the untrimmed span starts
    pub start: usize,

    /// Character offset where the untrimmed span ends (exclusive)
    pub end: usize,

    /// Trimmed chunk text
    pub text: String,
}

impl Chunk {
    /// Width of the untrimmed span in characters
    pub fn span_len(&self) -> usize {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_accessors() {
        let doc = Document::new("BEC", "Annual report text");
        assert_eq!(doc.label(), "BEC");
        assert_eq!(doc.text(), "Annual report text");
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_char_len_counts_characters_not_bytes() {
        let doc = Document::new("Ørsted", "årsrapport");
        assert_eq!(doc.char_len(), 10);
        assert!(doc.text().len() > 10);
    }

    #[test]
    fn test_chunk_span_len() {
        let chunk = Chunk {
            index: 0,
            start: 4,
            end: 10,
            text: "words".to_string(),
        };
        assert_eq!(chunk.span_len(), 6);
    }
}
