//! Error types for stickfig-normalize

use thiserror::Error;

/// Errors that can occur while normalizing a sketch
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] stickfig_core::Error),
}

/// Result type for normalization operations
pub type NormalizeResult<T> = Result<T, NormalizeError>;
