//! The Chunk type: a bounded piece of document text with heading metadata.

use serde::{Deserialize, Serialize};

use crate::normalize::count_chars;

/// A bounded piece of document text, the unit handed to downstream
/// question/answer generation.
///
/// Chunks carry the heading they fell under so prompts can cite where in
/// the document the text came from. Identity and ordering indexes belong to
/// the persistence layer; a `Chunk` is immutable content plus metadata.
///
/// ## Sizes Are Character Counts
///
/// `size` is the number of Unicode scalar values in `content`, not bytes.
/// `"中文"` has size 2. This matches how chunk limits are configured and
/// keeps multilingual documents from being cut to a fraction of the
/// intended length:
///
/// ```rust
/// use strata::Chunk;
///
/// let chunk = Chunk::new("مرحبا");
/// assert_eq!(chunk.size, 5);
/// assert_eq!(chunk.content.len(), 10); // bytes, for comparison
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// The chunk text, trimmed of surrounding whitespace.
    pub content: String,
    /// Title of the first section folded into this chunk ("" when the
    /// source had no headers).
    pub title: String,
    /// Header level of that section (0 = no header).
    pub level: usize,
    /// Short human-readable label; the title, or `"{title} (part {n})"`
    /// when an oversized section was split.
    pub summary: String,
    /// Character count of `content` (Unicode scalars, not bytes).
    pub size: usize,
}

impl Chunk {
    /// Create an untitled chunk from plain text.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_heading(content, "", 0)
    }

    /// Create a chunk under a heading. The summary defaults to the title.
    #[must_use]
    pub fn with_heading(content: impl Into<String>, title: impl Into<String>, level: usize) -> Self {
        let content = content.into();
        let title = title.into();
        Self {
            size: count_chars(&content),
            summary: title.clone(),
            content,
            title,
            level,
        }
    }

    /// The length of this chunk in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether this chunk is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ title: {:?}, level: {}, size: {} }}",
            self.title, self.level, self.size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_counts_chars_not_bytes() {
        let chunk = Chunk::new("中文 text");
        assert_eq!(chunk.size, 7);
        assert_eq!(chunk.len(), 7);
    }

    #[test]
    fn summary_defaults_to_title() {
        let chunk = Chunk::with_heading("body", "Intro", 2);
        assert_eq!(chunk.summary, "Intro");
        assert_eq!(chunk.level, 2);
    }

    #[test]
    fn untitled_chunk_is_level_zero() {
        let chunk = Chunk::new("plain");
        assert_eq!(chunk.title, "");
        assert_eq!(chunk.level, 0);
        assert_eq!(chunk.summary, "");
    }

    #[test]
    fn serializes_all_fields() {
        let chunk = Chunk::with_heading("body", "T", 1);
        let json = serde_json::to_value(&chunk).unwrap();
        assert_eq!(json["content"], "body");
        assert_eq!(json["size"], 4);
        assert_eq!(json["summary"], "T");
    }
}
