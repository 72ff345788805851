//! Error types for strata.

/// Errors that can occur when configuring a chunker.
///
/// Splitting itself never fails: malformed or absent structure always
/// degrades to a well-defined fallback. The only error-worthy condition is
/// a configuration that would make forward progress impossible.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size (must be > 0).
    #[error("invalid configuration: chunk size {0} (must be > 0)")]
    InvalidChunkSize(usize),

    /// Overlap must be strictly smaller than the chunk size, otherwise the
    /// character-level fallback could not advance.
    #[error("invalid configuration: overlap {overlap} must be smaller than chunk size {size}")]
    OverlapExceedsSize {
        /// The chunk size.
        size: usize,
        /// The overlap that was too large.
        overlap: usize,
    },

    /// Minimum packed length exceeds the maximum.
    #[error("invalid configuration: min length {min} exceeds max length {max}")]
    MinExceedsMax {
        /// The minimum chunk length.
        min: usize,
        /// The maximum chunk length.
        max: usize,
    },
}

/// Result type for strata operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Reject size/overlap pairs that could not make forward progress.
pub(crate) fn validate_bounds(chunk_size: usize, overlap: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(Error::InvalidChunkSize(chunk_size));
    }
    if overlap >= chunk_size {
        return Err(Error::OverlapExceedsSize {
            size: chunk_size,
            overlap,
        });
    }
    Ok(())
}
