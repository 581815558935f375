//! CPU-side image storage for widget rendering.
//!
//! Images are decoded to RGBA8 once and shared between widgets cheaply
//! via reference counting.

use std::path::Path;
use std::sync::Arc;

use image::RgbaImage;

use crate::error::{RenderError, RenderResult};
use crate::types::Size;

/// A decoded RGBA image.
///
/// Cloning an `Image` is cheap; the pixel data is shared.
#[derive(Clone)]
pub struct Image {
    pixels: Arc<RgbaImage>,
}

impl Image {
    /// Load an image from a file on disk.
    pub fn open(path: impl AsRef<Path>) -> RenderResult<Self> {
        let decoded = image::open(path)?;
        Self::from_rgba(decoded.to_rgba8())
    }

    /// Decode an image from a byte buffer.
    pub fn from_bytes(bytes: &[u8]) -> RenderResult<Self> {
        let decoded = image::load_from_memory(bytes)?;
        Self::from_rgba(decoded.to_rgba8())
    }

    /// Wrap an already-decoded RGBA buffer.
    pub fn from_rgba(pixels: RgbaImage) -> RenderResult<Self> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(RenderError::InvalidDimensions {
                width: pixels.width(),
                height: pixels.height(),
            });
        }
        Ok(Self {
            pixels: Arc::new(pixels),
        })
    }

    /// Create a solid-color test image.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Self::from_rgba(RgbaImage::from_pixel(width, height, image::Rgba(rgba)))
    }

    /// Get the width of the image in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Get the height of the image in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Get the size of the image.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width() as f32, self.height() as f32)
    }

    /// Access the raw pixel data.
    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

/// Filtering used when an image is drawn at a size other than its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageInterpolation {
    /// Nearest-neighbor sampling.
    Nearest,
    /// Bilinear filtering.
    #[default]
    Bilinear,
    /// Bicubic filtering, the slowest and smoothest option.
    HighQualityBicubic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_image() {
        let img = Image::solid(24, 24, [255, 0, 0, 255]).unwrap();
        assert_eq!(img.width(), 24);
        assert_eq!(img.height(), 24);
        assert_eq!(img.size(), Size::new(24.0, 24.0));
        assert_eq!(img.pixels().get_pixel(0, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            Image::solid(0, 24, [0, 0, 0, 0]),
            Err(RenderError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_clone_shares_pixels() {
        let img = Image::solid(4, 4, [1, 2, 3, 4]).unwrap();
        let copy = img.clone();
        assert_eq!(img, copy);
    }
}
