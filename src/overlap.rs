//! Paragraph-window splitting with overlap.
//!
//! The general-purpose strategy for text without useful Markdown
//! structure: pack paragraphs up to a size budget, then seed each new
//! chunk with the tail of the previous one.
//!
//! ```text
//! chunk_size = 6, overlap = 2, separator = "\n\n"
//!
//! "P1\n\nP2\n\nP3"
//!
//! Chunk 0: "P1\n\nP2"
//! Chunk 1: "P2\n\nP3"   <- starts with the last 2 chars of chunk 0
//! ```
//!
//! Natural paragraph boundaries are respected over raw character cuts; a
//! single paragraph larger than the budget is emitted whole (callers that
//! need to break those too use [`RecursiveChunker`](crate::RecursiveChunker)).

use crate::error::validate_bounds;
use crate::normalize::{char_suffix, count_chars, normalize};
use crate::{Chunk, Chunker, Result};

/// Paragraph-aware splitter with trailing-overlap carry.
///
/// ## Example
///
/// ```rust
/// use strata::OverlapChunker;
///
/// let chunker = OverlapChunker::new(6, 2).unwrap();
/// let chunks = chunker.split("P1\n\nP2\n\nP3");
/// assert_eq!(chunks, ["P1\n\nP2", "P2\n\nP3"]);
/// ```
#[derive(Debug, Clone)]
pub struct OverlapChunker {
    chunk_size: usize,
    overlap: usize,
    separator: String,
}

impl Default for OverlapChunker {
    /// The defaults of [`ChunkConfig`](crate::ChunkConfig): 1500-char
    /// windows with a 200-char overlap.
    fn default() -> Self {
        Self {
            chunk_size: 1500,
            overlap: 200,
            separator: "\n\n".to_string(),
        }
    }
}

impl OverlapChunker {
    /// Create a splitter with the `"\n\n"` paragraph separator.
    ///
    /// # Errors
    ///
    /// Fails fast when `chunk_size == 0` or `overlap >= chunk_size`.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        validate_bounds(chunk_size, overlap)?;
        Ok(Self {
            chunk_size,
            overlap,
            separator: "\n\n".to_string(),
        })
    }

    /// Replace the paragraph separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Split text into overlapping paragraph windows.
    ///
    /// Each emitted chunk is trimmed; whitespace-only accumulations are
    /// dropped. Empty input yields an empty vec.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let text = normalize(text);
        let sep_len = count_chars(&self.separator);

        let mut chunks = Vec::new();
        let mut acc = String::new();
        let mut acc_len = 0usize;

        for paragraph in text.split(self.separator.as_str()) {
            let para_len = count_chars(paragraph);

            if acc_len + para_len + sep_len > self.chunk_size && !acc.is_empty() {
                let trimmed = acc.trim();
                if !trimmed.is_empty() {
                    chunks.push(trimmed.to_string());
                }
                // Seed the next chunk with the tail of the one just
                // emitted (pre-trim, so the tail is exactly what the
                // accumulator held).
                if self.overlap > 0 && acc_len > self.overlap {
                    let seed = char_suffix(&acc, self.overlap).to_string();
                    acc_len = self.overlap + sep_len + para_len;
                    acc = seed;
                    acc.push_str(&self.separator);
                    acc.push_str(paragraph);
                } else {
                    acc = paragraph.to_string();
                    acc_len = para_len;
                }
            } else if acc.is_empty() {
                acc = paragraph.to_string();
                acc_len = para_len;
            } else {
                acc.push_str(&self.separator);
                acc.push_str(paragraph);
                acc_len += sep_len + para_len;
            }
        }

        let trimmed = acc.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }

        chunks
    }
}

impl Chunker for OverlapChunker {
    fn chunk(&self, text: &str) -> Vec<Chunk> {
        self.split(text).into_iter().map(Chunk::new).collect()
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        (text_len / self.chunk_size).max(1)
    }
}
