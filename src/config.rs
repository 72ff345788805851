//! Chunking configuration.
//!
//! One explicit record listing every recognized option and its default:
//! the whole surface callers can tune, enumerated once. Arrives as data
//! (e.g. JSON from an upload request), so unknown strategies fail at
//! deserialization and missing fields fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::error::{validate_bounds, Result};

/// Which splitting strategy [`chunk_document`](crate::chunk_document) runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Split on Markdown headers, packing sections to a size budget.
    Markdown,
    /// Split on a literal delimiter, no size bound.
    Delimiter,
    /// Paragraph-window splitting with overlap; works on any text.
    #[default]
    Auto,
}

/// Configuration for document chunking.
///
/// ```rust
/// use strata::{ChunkConfig, Strategy};
///
/// let config = ChunkConfig::default();
/// assert_eq!(config.strategy, Strategy::Auto);
/// assert_eq!(config.chunk_size, 1500);
/// assert_eq!(config.chunk_overlap, 200);
/// assert_eq!(config.delimiter, "\n\n");
///
/// // Partial JSON deserializes against the defaults
/// let config: ChunkConfig = serde_json::from_str(r#"{"chunk_size": 800}"#).unwrap();
/// assert_eq!(config.chunk_size, 800);
/// assert_eq!(config.chunk_overlap, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkConfig {
    /// Splitting strategy (default: [`Strategy::Auto`]).
    pub strategy: Strategy,
    /// Target chunk size in characters (default: 1500).
    pub chunk_size: usize,
    /// Trailing characters repeated at the start of the next chunk
    /// (default: 200). Must be smaller than `chunk_size`.
    pub chunk_overlap: usize,
    /// Separator for the delimiter strategy and the auto strategy's
    /// paragraph boundary (default: `"\n\n"`).
    pub delimiter: String,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            chunk_size: 1500,
            chunk_overlap: 200,
            delimiter: "\n\n".to_string(),
        }
    }
}

impl ChunkConfig {
    /// Check the configuration before any splitting loop runs.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidChunkSize`](crate::Error::InvalidChunkSize) when
    /// `chunk_size == 0`,
    /// [`Error::OverlapExceedsSize`](crate::Error::OverlapExceedsSize) when
    /// `chunk_overlap >= chunk_size`.
    pub fn validate(&self) -> Result<()> {
        validate_bounds(self.chunk_size, self.chunk_overlap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ChunkConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_overlap_reaching_chunk_size() {
        let config = ChunkConfig {
            chunk_size: 100,
            chunk_overlap: 100,
            ..ChunkConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn strategy_names_are_lowercase_in_json() {
        let json = serde_json::to_string(&Strategy::Markdown).unwrap();
        assert_eq!(json, r#""markdown""#);
        let parsed: Strategy = serde_json::from_str(r#""delimiter""#).unwrap();
        assert_eq!(parsed, Strategy::Delimiter);
    }

    #[test]
    fn unknown_strategy_fails_deserialization() {
        let result: std::result::Result<ChunkConfig, _> =
            serde_json::from_str(r#"{"strategy": "semantic"}"#);
        assert!(result.is_err());
    }
}
