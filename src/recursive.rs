//! Recursive multi-separator splitting.
//!
//! Tries progressively finer separators until every piece fits the size
//! budget.
//!
//! ## The Algorithm
//!
//! Given the default separators `["\n\n", "\n", ". ", " ", ""]` and a
//! 100-char budget:
//!
//! ```text
//! 1. Split on "\n\n" and greedily re-pack the paragraphs.
//! 2. A single paragraph over 100 chars? Split that paragraph on "\n".
//! 3. A single line still over? Split it on ". " (sentences).
//! 4. A sentence still over? Split on " " (words).
//! 5. "" is the last resort: raw character windows.
//! ```
//!
//! Recursion depth is bounded by the separator list (at most 5 levels), so
//! no explicit stack management is needed.
//!
//! ## Overlap
//!
//! A non-zero overlap seeds each new piece with the trailing characters of
//! the piece just emitted: always exactly the tail of what a reader just
//! saw, not a slice of the original text. The seed means a piece can run
//! up to `overlap + separator` characters past the budget; callers that
//! need a hard ceiling use `overlap = 0`.
//!
//! All lengths are character counts, so emoji and CJK text split at the
//! same boundaries as ASCII.

use crate::error::validate_bounds;
use crate::normalize::{char_suffix, count_chars, normalize};
use crate::{Chunk, Chunker, Result};

/// Default separator hierarchy: paragraph, line, sentence, word, character.
pub const DEFAULT_SEPARATORS: [&str; 5] = ["\n\n", "\n", ". ", " ", ""];

/// Recursive multi-separator splitter.
///
/// ## Example
///
/// ```rust
/// use strata::RecursiveChunker;
///
/// let chunker = RecursiveChunker::new(20, 0).unwrap();
/// let pieces = chunker.split("First part.\n\nSecond part here.");
/// assert_eq!(pieces, ["First part.", "Second part here."]);
/// ```
#[derive(Debug, Clone)]
pub struct RecursiveChunker {
    chunk_size: usize,
    overlap: usize,
    separators: Vec<String>,
}

impl Default for RecursiveChunker {
    /// The defaults of [`ChunkConfig`](crate::ChunkConfig): a 1500-char
    /// budget with a 200-char overlap.
    fn default() -> Self {
        Self::with_valid_bounds(1500, 200)
    }
}

impl RecursiveChunker {
    /// Create a splitter with the default separator hierarchy.
    ///
    /// # Errors
    ///
    /// Fails fast on a configuration that could not make forward progress:
    /// `chunk_size == 0` or `overlap >= chunk_size`.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        validate_bounds(chunk_size, overlap)?;
        Ok(Self::with_valid_bounds(chunk_size, overlap))
    }

    /// Bounds already validated (or statically known) by the caller.
    pub(crate) fn with_valid_bounds(chunk_size: usize, overlap: usize) -> Self {
        Self {
            chunk_size,
            overlap,
            separators: DEFAULT_SEPARATORS.iter().map(|&s| s.to_string()).collect(),
        }
    }

    /// Replace the separator hierarchy, coarsest first. An empty string
    /// means character-level splitting; anything after it is unreachable.
    #[must_use]
    pub fn with_separators(mut self, separators: &[&str]) -> Self {
        self.separators = separators.iter().map(|&s| s.to_string()).collect();
        self
    }

    /// Split text into budget-sized pieces.
    ///
    /// Normalizes first, then recurses through the separator hierarchy.
    /// Empty input yields no pieces; input within budget yields one.
    /// Deterministic: identical input produces identical output.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        let text = normalize(text);
        self.split_from(&text, 0)
    }

    /// Split `text` using separators from `sep_index` onward.
    fn split_from(&self, text: &str, sep_index: usize) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        if count_chars(text) <= self.chunk_size {
            return vec![text.to_string()];
        }

        let Some(sep) = self.separators.get(sep_index) else {
            return self.char_windows(text);
        };
        if sep.is_empty() {
            return self.char_windows(text);
        }

        let units: Vec<&str> = text.split(sep.as_str()).collect();
        if units.len() == 1 {
            // Separator not present, try the next one
            return self.split_from(text, sep_index + 1);
        }

        let sep_len = count_chars(sep);
        let mut pieces = Vec::new();
        let mut acc = String::new();
        let mut acc_len = 0usize;

        for unit in units {
            let unit_len = count_chars(unit);
            let joined_len = if acc.is_empty() {
                unit_len
            } else {
                acc_len + sep_len + unit_len
            };

            if joined_len <= self.chunk_size {
                if !acc.is_empty() {
                    acc.push_str(sep);
                }
                acc.push_str(unit);
                acc_len = joined_len;
                continue;
            }

            // The accumulator is full: emit it, keeping its tail as the
            // overlap seed for whatever comes next.
            let prev = std::mem::take(&mut acc);
            let prev_len = std::mem::take(&mut acc_len);
            let seed = if unit_len <= self.chunk_size
                && self.overlap > 0
                && prev_len > self.overlap
            {
                Some(char_suffix(&prev, self.overlap).to_string())
            } else {
                None
            };
            if !prev.is_empty() {
                pieces.push(prev);
            }

            if unit_len > self.chunk_size {
                // The unit alone busts the budget: recurse with a finer
                // separator and splice the results in place.
                pieces.extend(self.split_from(unit, sep_index + 1));
            } else if let Some(seed) = seed {
                acc_len = self.overlap + sep_len + unit_len;
                acc = seed;
                acc.push_str(sep);
                acc.push_str(unit);
            } else {
                acc.push_str(unit);
                acc_len = unit_len;
            }
        }

        if !acc.is_empty() {
            pieces.push(acc);
        }

        pieces
    }

    /// Last-resort character windows: `chunk_size` chars per window,
    /// advancing `chunk_size - overlap` each step. Stops once a window
    /// reaches the end of the text.
    fn char_windows(&self, text: &str) -> Vec<String> {
        let mut bounds: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
        bounds.push(text.len());
        let total = bounds.len() - 1;

        let step = if self.overlap > 0 {
            self.chunk_size - self.overlap
        } else {
            self.chunk_size
        };

        let mut pieces = Vec::new();
        let mut start = 0;
        while start < total {
            let end = (start + self.chunk_size).min(total);
            pieces.push(text[bounds[start]..bounds[end]].to_string());
            if end == total {
                break;
            }
            start += step;
        }
        pieces
    }
}

impl Chunker for RecursiveChunker {
    fn chunk(&self, text: &str) -> Vec<Chunk> {
        self.split(text).into_iter().map(Chunk::new).collect()
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        (text_len / self.chunk_size).max(1)
    }
}
