//! Error types for oxpal

use thiserror::Error;

/// Result type for oxpal operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxpal operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Failed to parse a hex color string
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    /// Pixel buffer contains no pixels
    #[error("Image has no pixel data")]
    EmptyImage,

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Too few colors for a multi-color operation
    #[error("At least {required} colors required, got {actual}")]
    TooFewColors { required: usize, actual: usize },

    /// Ratio list does not match the color list
    #[error("Ratio count mismatch: {colors} colors, {ratios} ratios")]
    RatioMismatch { colors: usize, ratios: usize },

    /// Color already present in the collection
    #[error("Duplicate color: {hex}")]
    DuplicateColor { hex: String },

    /// Unknown project id
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// Unknown batch job id
    #[error("Batch job not found: {0}")]
    JobNotFound(String),
}
