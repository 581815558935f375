//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur during rendering operations.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Failed to decode an image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// Image dimensions are invalid (zero width or height).
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A path could not be tessellated.
    #[error("path tessellation failed: {0}")]
    Tessellation(String),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
