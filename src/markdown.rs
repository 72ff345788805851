//! Markdown-structured chunking: outline, sections, size-bounded packing.
//!
//! The pipeline strategy for documents with headers:
//!
//! ```text
//! normalize -> extract_outline -> segment -> pack
//! ```
//!
//! Packing is a greedy left-to-right merge. Adjacent small sections fold
//! into one chunk up to `max_length`; a section that alone busts the limit
//! is handed to the recursive splitter and emitted as `(part n)` pieces.
//! A merged chunk keeps the title and level of the first section folded
//! into it, so every chunk still names where in the document it came from.
//!
//! `min_length` is merge guidance, not a hard floor: a lone small section
//! at the end of a document yields a small last chunk. Downstream
//! consumers treat that as normal.

use crate::normalize::{count_chars, normalize};
use crate::outline::extract_outline;
use crate::recursive::RecursiveChunker;
use crate::section::{segment, Section};
use crate::{Chunk, Chunker, Error, Result};

/// Default minimum packed length, in characters.
pub const DEFAULT_MIN_LENGTH: usize = 1500;
/// Default maximum packed length, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 2000;

/// Header-aware chunker packing sections to a size budget.
///
/// ## Example
///
/// ```rust
/// use strata::{Chunker, MarkdownChunker};
///
/// let chunker = MarkdownChunker::new(10, 100).unwrap();
/// let chunks = chunker.chunk("# A\ntext1\n## B\ntext2");
///
/// // both sections are small enough to merge under the first title
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].title, "A");
/// assert_eq!(chunks[0].level, 1);
/// ```
#[derive(Debug, Clone)]
pub struct MarkdownChunker {
    min_length: usize,
    max_length: usize,
    splitter: RecursiveChunker,
}

impl MarkdownChunker {
    /// Create a chunker with the given packing bounds, in characters.
    ///
    /// Oversized sections are split with `max_length` as the budget and
    /// `min(200, max_length / 10)` as the overlap.
    ///
    /// # Errors
    ///
    /// Fails fast when `max_length == 0` or `min_length > max_length`.
    pub fn new(min_length: usize, max_length: usize) -> Result<Self> {
        if max_length == 0 {
            return Err(Error::InvalidChunkSize(max_length));
        }
        if min_length > max_length {
            return Err(Error::MinExceedsMax {
                min: min_length,
                max: max_length,
            });
        }
        // max_length / 10 < max_length, so the bounds always hold
        let overlap = (max_length / 10).min(200);
        Ok(Self {
            min_length,
            max_length,
            splitter: RecursiveChunker::with_valid_bounds(max_length, overlap),
        })
    }

    /// The advisory minimum chunk length.
    #[must_use]
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// The maximum chunk length.
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Merge and split sections into the final ordered chunk sequence.
    #[must_use]
    pub fn pack(&self, sections: Vec<Section>) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut acc = String::new();
        let mut acc_len = 0usize;
        let mut acc_title = String::new();
        let mut acc_level = 0usize;

        for section in sections {
            let content_len = count_chars(&section.content);

            if content_len > self.max_length {
                if !acc.is_empty() {
                    push_trimmed(&mut chunks, &acc, &acc_title, acc_level);
                    acc.clear();
                    acc_len = 0;
                }
                self.split_oversized(&mut chunks, &section);
                continue;
            }

            if acc_len + content_len <= self.max_length {
                if acc.is_empty() {
                    acc = section.content;
                    acc_len = content_len;
                    acc_title = section.title;
                    acc_level = section.level;
                } else {
                    acc.push_str("\n\n");
                    acc.push_str(&section.content);
                    acc_len += 2 + content_len;
                }
            } else {
                push_trimmed(&mut chunks, &acc, &acc_title, acc_level);
                acc = section.content;
                acc_len = content_len;
                acc_title = section.title;
                acc_level = section.level;
            }
        }

        if !acc.is_empty() {
            push_trimmed(&mut chunks, &acc, &acc_title, acc_level);
        }

        chunks
    }

    /// Split a section that alone exceeds `max_length` into `(part n)`
    /// pieces via the recursive splitter.
    fn split_oversized(&self, chunks: &mut Vec<Chunk>, section: &Section) {
        let pieces = self.splitter.split(&section.content);
        let multi = pieces.len() > 1;
        for (i, piece) in pieces.iter().enumerate() {
            let trimmed = piece.trim();
            if trimmed.is_empty() {
                continue;
            }
            let mut chunk = Chunk::with_heading(trimmed, section.title.clone(), section.level);
            if multi {
                chunk.summary = format!("{} (part {})", section.title, i + 1);
            }
            chunks.push(chunk);
        }
    }
}

impl Default for MarkdownChunker {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            splitter: RecursiveChunker::with_valid_bounds(DEFAULT_MAX_LENGTH, 200),
        }
    }
}

impl Chunker for MarkdownChunker {
    fn chunk(&self, text: &str) -> Vec<Chunk> {
        let text = normalize(text);
        let outline = extract_outline(&text);
        let sections = segment(&text, &outline);
        tracing::debug!(
            headers = outline.len(),
            sections = sections.len(),
            "packing sections"
        );
        self.pack(sections)
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        (text_len / self.max_length).max(1)
    }
}

fn push_trimmed(chunks: &mut Vec<Chunk>, acc: &str, title: &str, level: usize) {
    let trimmed = acc.trim();
    if !trimmed.is_empty() {
        chunks.push(Chunk::with_heading(trimmed, title, level));
    }
}
