//! Single-delimiter splitting.
//!
//! The simplest strategy: a literal (non-regex) split on one delimiter,
//! with optional whitespace trimming. No recursion and no size bound;
//! callers that need one run the pieces through a size-bounded splitter
//! afterwards.

use crate::normalize::normalize;
use crate::{Chunk, Chunker};

/// Literal delimiter splitter.
///
/// ## Example
///
/// ```rust
/// use strata::DelimiterChunker;
///
/// let chunker = DelimiterChunker::new("|||");
/// assert_eq!(chunker.split("a|||b|||  |||c"), ["a", "b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct DelimiterChunker {
    delimiter: String,
    strip_whitespace: bool,
}

impl DelimiterChunker {
    /// Create a splitter that trims each piece and drops the ones that are
    /// empty or whitespace-only.
    #[must_use]
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            strip_whitespace: true,
        }
    }

    /// Create a splitter that keeps pieces raw, dropping only pieces that
    /// are empty strings outright.
    #[must_use]
    pub fn preserve_whitespace(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            strip_whitespace: false,
        }
    }

    /// Split normalized text on the delimiter.
    ///
    /// A delimiter that never matches (including the empty delimiter)
    /// yields the whole text as a single piece; absent structure is never
    /// an error.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        let text = normalize(text);

        if self.delimiter.is_empty() {
            let piece = if self.strip_whitespace {
                text.trim()
            } else {
                text.as_ref()
            };
            return if piece.is_empty() {
                Vec::new()
            } else {
                vec![piece.to_string()]
            };
        }

        text.split(self.delimiter.as_str())
            .filter_map(|piece| {
                if self.strip_whitespace {
                    let trimmed = piece.trim();
                    (!trimmed.is_empty()).then(|| trimmed.to_string())
                } else {
                    (!piece.is_empty()).then(|| piece.to_string())
                }
            })
            .collect()
    }
}

impl Chunker for DelimiterChunker {
    fn chunk(&self, text: &str) -> Vec<Chunk> {
        self.split(text).into_iter().map(Chunk::new).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_literal_delimiter() {
        let chunker = DelimiterChunker::new("|||");
        assert_eq!(
            chunker.split("Part 1|||Part 2|||Part 3"),
            ["Part 1", "Part 2", "Part 3"]
        );
    }

    #[test]
    fn drops_empty_and_whitespace_pieces() {
        let chunker = DelimiterChunker::new("|||");
        assert_eq!(chunker.split("a|||b|||  |||c"), ["a", "b", "c"]);
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let chunker = DelimiterChunker::new("|");
        assert_eq!(chunker.split("Part 1|Part 2|Part 3").len(), 3);
        let chunker = DelimiterChunker::new(".*");
        assert_eq!(chunker.split("a.*b"), ["a", "b"]);
    }

    #[test]
    fn preserve_whitespace_keeps_raw_pieces() {
        let chunker = DelimiterChunker::preserve_whitespace("|");
        assert_eq!(chunker.split(" a |  | b "), [" a ", "  ", " b "]);
        // outright-empty pieces are still dropped
        assert_eq!(chunker.split("a||b"), ["a", "b"]);
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(DelimiterChunker::new("|||").split("").is_empty());
    }

    #[test]
    fn unmatched_delimiter_yields_whole_text() {
        let chunker = DelimiterChunker::new("|||");
        assert_eq!(chunker.split("no delimiter here"), ["no delimiter here"]);
        let chunker = DelimiterChunker::new("");
        assert_eq!(chunker.split("  abc  "), ["abc"]);
    }

    #[test]
    fn normalizes_before_splitting() {
        let chunker = DelimiterChunker::new("\n");
        assert_eq!(chunker.split("a\r\nb\rc"), ["a", "b", "c"]);
    }

    #[test]
    fn preserves_multibyte_pieces() {
        let chunker = DelimiterChunker::new("、");
        assert_eq!(chunker.split("一つ、二つ、三つ"), ["一つ", "二つ", "三つ"]);
    }
}
