//! # strata
//!
//! Markdown-aware document chunking for LLM dataset pipelines.
//!
//! ## The Problem
//!
//! Question/answer generation prompts want bounded, self-describing pieces
//! of a document. Documents arrive as one long extracted text. Splitting
//! every N characters fragments sentences and loses the section a passage
//! belongs to; splitting only on headers produces chunks from three words
//! to thirty pages. And real corpora are multilingual: a splitter that
//! counts bytes cuts Arabic and CJK documents to a fraction of the
//! intended size, and one that indexes carelessly tears emoji in half.
//!
//! This crate is the deterministic middle ground: structural splitting
//! where structure exists, length-bounded packing everywhere, graceful
//! fallbacks when neither headers nor delimiters are present. All sizes
//! are Unicode scalar counts; all slicing is char-boundary safe. No I/O,
//! no model calls: chunking a document twice gives identical output.
//!
//! ## Strategies
//!
//! ### Markdown ([`MarkdownChunker`])
//!
//! Detects ATX (`## Title`) and Setext (`Title\n---`) headers, cuts the
//! text into sections, then greedily packs adjacent small sections up to a
//! size budget. Oversized sections fall through to the recursive splitter
//! and come back as `(part n)` pieces. Every chunk keeps the title and
//! level of its first section.
//!
//! **When to use**: documents with real heading structure.
//!
//! ### Delimiter ([`DelimiterChunker`])
//!
//! A literal split on one separator, with optional trimming. No size
//! bound; the caller owns downstream limits.
//!
//! **When to use**: pre-structured exports, transcripts, Q&A dumps.
//!
//! ### Overlap windows ([`OverlapChunker`])
//!
//! Packs paragraphs up to a budget and seeds each new chunk with the tail
//! of the previous one, so local context survives the boundary.
//!
//! **When to use**: plain text with no usable markers; the default.
//!
//! ### Recursive ([`RecursiveChunker`])
//!
//! Tries paragraph breaks, then line breaks, then sentence breaks, then
//! words, then raw character windows, recursing into any piece that still
//! exceeds the budget. The workhorse behind oversized-section splitting,
//! also usable on its own.
//!
//! ## Quick Start
//!
//! ```rust
//! use strata::{chunk_document, ChunkConfig, Strategy};
//!
//! let text = "# Guide\n\nFirst paragraph.\n\nSecond paragraph.";
//!
//! let config = ChunkConfig {
//!     strategy: Strategy::Markdown,
//!     ..ChunkConfig::default()
//! };
//! let chunks = chunk_document(text, &config).unwrap();
//!
//! assert_eq!(chunks[0].title, "Guide");
//! assert!(chunks[0].size <= 2000);
//! ```
//!
//! Or drive a strategy directly:
//!
//! ```rust
//! use strata::{Chunker, OverlapChunker};
//!
//! let chunker = OverlapChunker::new(1500, 200).unwrap();
//! let chunks = chunker.chunk("long plain text…");
//! assert_eq!(chunks.len(), 1);
//! ```
//!
//! The table of contents is independent of chunking:
//!
//! ```rust
//! use strata::{extract_toc, toc_to_markdown};
//!
//! let toc = extract_toc("# A\n## B\n# C");
//! assert_eq!(toc_to_markdown(&toc, true), "- A\n  - B\n- C");
//! ```

mod chunk;
mod config;
mod delimiter;
mod error;
mod markdown;
mod normalize;
mod outline;
mod overlap;
mod recursive;
mod section;
mod toc;

pub use chunk::Chunk;
pub use config::{ChunkConfig, Strategy};
pub use delimiter::DelimiterChunker;
pub use error::{Error, Result};
pub use markdown::{MarkdownChunker, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
pub use normalize::{count_chars, count_graphemes, is_rtl, normalize, substring};
pub use outline::{extract_outline, OutlineEntry};
pub use overlap::OverlapChunker;
pub use recursive::{RecursiveChunker, DEFAULT_SEPARATORS};
pub use section::{segment, Section};
pub use toc::{build_toc, extract_toc, toc_to_markdown, TocEntry};

/// A document chunking strategy.
///
/// All strategies implement this trait, so pipelines can pick one at
/// runtime and hold it as `Box<dyn Chunker>`:
///
/// ```rust
/// use strata::{Chunk, Chunker, DelimiterChunker, OverlapChunker};
///
/// fn chunk_with(chunker: &dyn Chunker, text: &str) -> Vec<Chunk> {
///     chunker.chunk(text)
/// }
///
/// let text = "one\n\ntwo";
/// let by_delimiter = chunk_with(&DelimiterChunker::new("\n\n"), text);
/// let by_window = chunk_with(&OverlapChunker::new(100, 10).unwrap(), text);
/// assert_eq!(by_delimiter.len(), 2);
/// assert_eq!(by_window.len(), 1);
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into ordered chunks.
    ///
    /// Normalizes internally; never fails. Absent structure degrades to a
    /// well-defined fallback, empty input yields no chunks.
    fn chunk(&self, text: &str) -> Vec<Chunk>;

    /// Estimate the number of chunks for a given text length, for
    /// pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize {
        (text_len / 500).max(1)
    }
}

/// Chunk a document according to a [`ChunkConfig`].
///
/// The orchestration entry point used by file-processing pipelines:
/// validates the configuration, constructs the strategy, and runs it. The
/// caller owns identity and ordering of the returned chunks.
///
/// # Errors
///
/// Fails fast on an invalid configuration (`chunk_size == 0` or
/// `chunk_overlap >= chunk_size`); splitting itself never fails.
///
/// ```rust
/// use strata::{chunk_document, ChunkConfig, Strategy};
///
/// let config = ChunkConfig {
///     strategy: Strategy::Delimiter,
///     delimiter: "|".to_string(),
///     ..ChunkConfig::default()
/// };
/// let chunks = chunk_document("a|b", &config).unwrap();
/// assert_eq!(chunks.len(), 2);
/// ```
pub fn chunk_document(text: &str, config: &ChunkConfig) -> Result<Vec<Chunk>> {
    config.validate()?;

    let chunker: Box<dyn Chunker> = match config.strategy {
        Strategy::Markdown => Box::new(MarkdownChunker::default()),
        Strategy::Delimiter => Box::new(DelimiterChunker::new(config.delimiter.clone())),
        Strategy::Auto => Box::new(
            OverlapChunker::new(config.chunk_size, config.chunk_overlap)?
                .with_separator(config.delimiter.clone()),
        ),
    };

    let chunks = chunker.chunk(text);
    tracing::debug!(
        strategy = ?config.strategy,
        chunks = chunks.len(),
        "document chunked"
    );
    Ok(chunks)
}
