//! Section segmentation: cut text into contiguous header-delimited spans.
//!
//! Sections are the intermediate between the outline and the packer. Each
//! one runs from its header line up to (not including) the next header
//! line, with the header line kept in the content so chunks stay
//! self-describing. Segmentation is exhaustive: joining all section
//! contents with `"\n"` reproduces the input exactly, which the property
//! tests pin down.

use crate::outline::OutlineEntry;

/// A contiguous span of text under one header (or the whole document when
/// no headers exist). Scoped to a single packing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The span's text, header line included, without a trailing newline.
    pub content: String,
    /// Title of the governing header ("" for the headerless/preamble case).
    pub title: String,
    /// Level of the governing header (0 for the headerless/preamble case).
    pub level: usize,
    /// Character offset of the span within the normalized text.
    pub offset: usize,
}

/// Cut normalized text into sections along the outline.
///
/// An empty outline yields one whole-document section. Text before the
/// first header becomes a preamble section with level 0 and no title, so
/// no input is ever dropped.
#[must_use]
pub fn segment(text: &str, outline: &[OutlineEntry]) -> Vec<Section> {
    if outline.is_empty() {
        return vec![Section {
            content: text.to_string(),
            title: String::new(),
            level: 0,
            offset: 0,
        }];
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let mut sections = Vec::with_capacity(outline.len() + 1);

    let first_line = outline[0].line.min(lines.len());
    if first_line > 0 {
        sections.push(Section {
            content: lines[..first_line].join("\n"),
            title: String::new(),
            level: 0,
            offset: 0,
        });
    }

    for (i, entry) in outline.iter().enumerate() {
        // Clamped so a stale outline cannot index past the text
        let start = entry.line.min(lines.len());
        let end = outline
            .get(i + 1)
            .map_or(lines.len(), |next| next.line)
            .clamp(start, lines.len());
        sections.push(Section {
            content: lines[start..end].join("\n"),
            title: entry.title.clone(),
            level: entry.level,
            offset: entry.offset,
        });
    }

    sections
}
