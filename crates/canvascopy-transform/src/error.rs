//! Error types for canvascopy-transform

use thiserror::Error;

/// Errors that can occur during resampling
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    /// Core library error (buffer shape)
    #[error("core error: {0}")]
    Core(#[from] canvascopy_core::Error),

    /// Destination has a zero dimension
    #[error("invalid destination size: {width}x{height}")]
    InvalidDestination { width: u32, height: u32 },

    /// Source has a zero dimension
    #[error("invalid source size: {width}x{height}")]
    InvalidSource { width: u32, height: u32 },

    /// Invalid resampling parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
