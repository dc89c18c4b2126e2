//! Error types for stickfig-classify

use thiserror::Error;

/// Errors that can occur while scoring or training
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] stickfig_core::Error),

    /// Feature extraction error
    #[error("feature error: {0}")]
    Feature(#[from] stickfig_features::FeatureError),

    /// Input length does not match the model
    #[error("input length mismatch: model expects {expected}, got {actual}")]
    InputLength { expected: usize, actual: usize },

    /// Weight vectors of different lengths, or out-of-range weights
    #[error("invalid weights: {0}")]
    InvalidWeights(String),
}

/// Result type for classifier operations
pub type ClassifyResult<T> = Result<T, ClassifyError>;
