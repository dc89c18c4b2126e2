//! Error types for stickfig-core
//!
//! The numeric pipeline never fails on degenerate geometry; these errors
//! only arise at interface boundaries, when a caller hands over a collection
//! that cannot be a sketch or a configuration that cannot be used.
//!
//! # See also
//!
//! [`crate::params::AnalysisParams::validate`] for parameter checks.

use thiserror::Error;

/// Stickfig core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// More slots than a sketch may hold
    #[error("point set capacity exceeded: {len} > {capacity}")]
    CapacityExceeded { len: usize, capacity: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for stickfig core operations
pub type Result<T> = std::result::Result<T, Error>;
