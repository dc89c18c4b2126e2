//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building fixtures or comparing results
#[derive(Debug, Error)]
pub enum TestError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] stickfig_core::Error),

    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Vector lengths differ
    #[error("length mismatch at index {index}: expected {expected}, got {actual}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
