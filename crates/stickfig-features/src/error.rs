//! Error types for stickfig-features

use thiserror::Error;

/// Errors that can occur during feature extraction
#[derive(Debug, Error)]
pub enum FeatureError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] stickfig_core::Error),

    /// Normalization error
    #[error("normalize error: {0}")]
    Normalize(#[from] stickfig_normalize::NormalizeError),

    /// Rasterization error
    #[error("raster error: {0}")]
    Raster(#[from] stickfig_raster::RasterError),
}

/// Result type for feature extraction
pub type FeatureResult<T> = Result<T, FeatureError>;
