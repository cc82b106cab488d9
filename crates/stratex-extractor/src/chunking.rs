//! Word-boundary text chunking for long documents

use stratex_domain::Chunk;

/// Splits text into bounded-size chunks that avoid cutting words
///
/// Sizes and offsets are counted in characters, not bytes.
#[derive(Debug, Clone, Copy)]
pub struct TextChunker {
    chunk_size: usize,
}

impl TextChunker {
    /// Create a new text chunker
    ///
    /// A `chunk_size` of 0 is treated as 1.
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// Maximum characters per chunk
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Chunk the given text
    ///
    /// Spans that hold nothing but whitespace are consumed without producing
    /// a chunk.
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        let chars: Vec<char> = text.chars().collect();
        let mut chunks = Vec::new();
        let mut start = 0;

        while start < chars.len() {
            let end = self.boundary(&chars, start);
            let span: String = chars[start..end].iter().collect();
            let trimmed = span.trim();

            if !trimmed.is_empty() {
                chunks.push(Chunk {
                    index: chunks.len(),
                    start,
                    end,
                    text: trimmed.to_string(),
                });
            }

            start = end;
        }

        chunks
    }

    /// End of the chunk starting at `start`
    ///
    /// Always greater than `start`, so every iteration makes progress.
    fn boundary(&self, chars: &[char], start: usize) -> usize {
        let tentative = (start + self.chunk_size).min(chars.len());
        if tentative == chars.len() || chars[tentative].is_whitespace() {
            return tentative;
        }

        // Back off to the nearest whitespace after `start`; a single word longer
        // than the chunk size is cut at the tentative end instead.
        (start + 1..tentative)
            .rev()
            .find(|&i| chars[i].is_whitespace())
            .unwrap_or(tentative)
    }
}
