//! Error types for the extraction pipeline.

use thiserror::Error;

/// Errors surfaced by the extraction pipeline.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Grayscale buffer length does not match the declared dimensions.
    #[error("image buffer of {len} bytes does not match {width}x{height}")]
    ImageSize {
        width: usize,
        height: usize,
        len: usize,
    },

    /// Column placement x-coordinates must be strictly increasing.
    #[error("column placement not strictly increasing at index {index}: {value} after {previous}")]
    PlacementOrder {
        index: usize,
        previous: i32,
        value: i32,
    },

    /// The external text recognizer failed.
    #[error("text detection failed: {reason}")]
    Detection { reason: String },
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
