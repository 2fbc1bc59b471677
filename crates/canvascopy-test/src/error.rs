//! Error types for the test framework

use thiserror::Error;

/// Errors describing a failed regression check
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TestError {
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

    /// Buffers have different dimensions
    #[error("buffer comparison failed at index {index}: {expected:?} vs {actual:?}")]
    DimensionMismatch {
        index: usize,
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Buffers differ at a pixel
    #[error(
        "buffer comparison failed at index {index}: pixel ({x}, {y}) expected {expected:?}, got {actual:?}"
    )]
    PixelMismatch {
        index: usize,
        x: u32,
        y: u32,
        expected: [u8; 4],
        actual: [u8; 4],
    },

    /// Pixel missing (out of bounds) or not uniform
    #[error("pixel check failed at index {index}: {message}")]
    PixelCheck { index: usize, message: String },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
