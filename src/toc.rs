//! Table-of-contents tree construction and rendering.
//!
//! Rebuilds the document hierarchy from the flat outline: each header
//! nests under the nearest preceding header of strictly lower level.
//! A document that opens below level 1, or has several level-1 headers,
//! produces a forest; multiple roots are a normal outcome, not an error.
//!
//! Independent of chunk packing; used for navigation and export.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;
use crate::outline::{extract_outline, OutlineEntry};

/// A node in the table-of-contents tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Header title.
    pub title: String,
    /// Header level, 1-6.
    pub level: usize,
    /// Character offset of the header within the normalized text.
    pub offset: usize,
    /// Nested sub-headers, in document order.
    pub children: Vec<TocEntry>,
}

/// Build a TOC forest from an offset-ordered outline.
///
/// Single left-to-right pass with a parent stack: each entry pops stack
/// nodes of level >= its own, attaches to the remaining top (or becomes a
/// root), and is pushed.
///
/// ```rust
/// use strata::{build_toc, extract_outline};
///
/// let outline = extract_outline("# A\n## B\n## C\n# D");
/// let toc = build_toc(&outline);
/// assert_eq!(toc.len(), 2);
/// assert_eq!(toc[0].children.len(), 2);
/// assert!(toc[1].children.is_empty());
/// ```
#[must_use]
pub fn build_toc(outline: &[OutlineEntry]) -> Vec<TocEntry> {
    let mut roots: Vec<TocEntry> = Vec::new();
    // Index path from roots to the current rightmost branch; levels only
    // ever increase along it.
    let mut stack: Vec<(usize, usize)> = Vec::new(); // (level, child index)

    for entry in outline {
        while stack
            .last()
            .is_some_and(|&(level, _)| level >= entry.level)
        {
            stack.pop();
        }

        let node = TocEntry {
            title: entry.title.clone(),
            level: entry.level,
            offset: entry.offset,
            children: Vec::new(),
        };

        // Walk the index path to the current parent's child list.
        let mut siblings = &mut roots;
        for &(_, idx) in &stack {
            siblings = &mut siblings[idx].children;
        }
        siblings.push(node);
        stack.push((entry.level, siblings.len() - 1));
    }

    roots
}

/// Extract the TOC straight from Markdown text (normalize + outline +
/// build).
#[must_use]
pub fn extract_toc(text: &str) -> Vec<TocEntry> {
    let text = normalize(text);
    build_toc(&extract_outline(&text))
}

/// Render a TOC as an indented Markdown bullet list.
///
/// With `nested`, indentation follows tree depth; otherwise it follows
/// `level - 1`, which keeps sparse hierarchies (e.g. level 1 straight to
/// level 4) visually honest. Either way every title appears exactly once,
/// in document order.
///
/// ```rust
/// use strata::{extract_toc, toc_to_markdown};
///
/// let toc = extract_toc("# A\n## B\n# C");
/// assert_eq!(toc_to_markdown(&toc, true), "- A\n  - B\n- C");
/// ```
#[must_use]
pub fn toc_to_markdown(toc: &[TocEntry], nested: bool) -> String {
    let mut lines = Vec::new();
    for entry in toc {
        render_entry(entry, 0, nested, &mut lines);
    }
    lines.join("\n")
}

fn render_entry(entry: &TocEntry, depth: usize, nested: bool, lines: &mut Vec<String>) {
    let indent = if nested {
        depth
    } else {
        entry.level.saturating_sub(1)
    };
    lines.push(format!("{}- {}", "  ".repeat(indent), entry.title));
    for child in &entry.children {
        render_entry(child, depth + 1, nested, lines);
    }
}
