//! Error types for stickfig-raster

use thiserror::Error;

/// Errors that can occur during rasterization
#[derive(Debug, Error)]
pub enum RasterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] stickfig_core::Error),

    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Nothing to rasterize
    #[error("empty point set: nothing to rasterize")]
    EmptyInput,
}

/// Result type for raster operations
pub type RasterResult<T> = Result<T, RasterError>;
