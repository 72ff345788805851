//! Markdown header detection.
//!
//! Produces the flat, offset-ordered outline that drives both section
//! segmentation and TOC construction. Two header styles are recognized:
//!
//! ```text
//! ## ATX style          Setext style
//! ## Title              Title
//!                       =====
//! ```
//!
//! ATX gives levels 1-6 from the `#` count; a Setext `=` underline is
//! level 1 and a `-` underline is level 2. Both detectors run in one pass
//! and the result is stably sorted by character offset, so the two styles
//! interleave in document order regardless of which detector fired first.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::normalize::count_chars;

/// `1-6 leading '#', whitespace, then title`, matched against the line
/// after trimming surrounding whitespace.
static ATX_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());

/// A detected Markdown header.
///
/// Offsets index the *normalized* text (see [`normalize`](crate::normalize))
/// and count Unicode scalars, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Header level, 1-6.
    pub level: usize,
    /// Header title with surrounding whitespace and marker stripped.
    pub title: String,
    /// Zero-based index of the header line (for Setext, the title line).
    pub line: usize,
    /// Character offset of the header line within the normalized text.
    pub offset: usize,
}

/// Scan normalized text for Markdown headers.
///
/// Returns entries ordered by character offset; text with no headers yields
/// an empty vec, never an error.
///
/// ```rust
/// use strata::extract_outline;
///
/// let outline = extract_outline("# One\ntext\n## Two\nmore");
/// assert_eq!(outline.len(), 2);
/// assert_eq!(outline[0].title, "One");
/// assert_eq!(outline[1].level, 2);
/// ```
#[must_use]
pub fn extract_outline(text: &str) -> Vec<OutlineEntry> {
    let lines: Vec<&str> = text.split('\n').collect();

    // Char offset of each line start: accumulate len(line) + 1 for the
    // removed '\n'.
    let mut offsets = Vec::with_capacity(lines.len());
    let mut offset = 0;
    for line in &lines {
        offsets.push(offset);
        offset += count_chars(line) + 1;
    }

    let mut entries = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if let Some(caps) = ATX_HEADER.captures(trimmed) {
            entries.push(OutlineEntry {
                level: caps[1].len(),
                title: caps[2].trim().to_string(),
                line: i,
                offset: offsets[i],
            });
            continue;
        }

        // A '=' or '-' underline promotes the preceding line to a header,
        // unless that line is blank or itself a header/underline.
        if i > 0 {
            if let Some(level) = setext_level(trimmed) {
                let prev = lines[i - 1].trim();
                if !prev.is_empty()
                    && setext_level(prev).is_none()
                    && !ATX_HEADER.is_match(prev)
                {
                    entries.push(OutlineEntry {
                        level,
                        title: prev.to_string(),
                        line: i - 1,
                        offset: offsets[i - 1],
                    });
                }
            }
        }
    }

    // ATX and Setext matches must interleave in document order; the sort is
    // stable, so same-offset entries keep detection order.
    entries.sort_by_key(|entry| entry.offset);
    entries
}

fn setext_level(trimmed: &str) -> Option<usize> {
    if trimmed.is_empty() {
        None
    } else if trimmed.chars().all(|ch| ch == '=') {
        Some(1)
    } else if trimmed.chars().all(|ch| ch == '-') {
        Some(2)
    } else {
        None
    }
}
