//! Core renderer trait defining the 2D drawing interface.
//!
//! This module defines the [`Renderer`] trait which provides a high-level
//! API for the drawing operations widgets need. Implementations can target
//! any backend; the crate ships a recording implementation for tests and
//! display-list capture.

use crate::font::Font;
use crate::image::{Image, ImageInterpolation};
use crate::paint::{Paint, Stroke};
use crate::path::Path;
use crate::types::{Color, Point, Rect, Size};

/// The core 2D rendering trait.
///
/// A renderer holds a small amount of mutable state: quality settings and
/// an optional clip path. Drawing calls outside the clip area must have no
/// effect. `reset_clip` returns to unclipped drawing.
pub trait Renderer {
    // =========================================================================
    // Quality State
    // =========================================================================

    /// Enable or disable anti-aliased geometry rendering.
    fn set_anti_alias(&mut self, enabled: bool);

    /// Set the filtering used when drawing scaled images.
    fn set_image_interpolation(&mut self, interpolation: ImageInterpolation);

    // =========================================================================
    // Clipping
    // =========================================================================

    /// Clip subsequent drawing to the filled area of a path.
    ///
    /// Calls replace any previous clip rather than intersecting with it.
    fn clip_path(&mut self, path: &Path);

    /// Remove the current clip.
    fn reset_clip(&mut self);

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Fill the area of a path with a paint.
    fn fill_path(&mut self, path: &Path, paint: &Paint);

    /// Stroke the outline of a path.
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);

    /// Draw an image scaled into the destination rectangle.
    fn draw_image(&mut self, image: &Image, dest: Rect);

    // =========================================================================
    // Text
    // =========================================================================

    /// Measure the size a string would occupy in the given font.
    fn measure_text(&self, text: &str, font: &Font) -> Size;

    /// Draw a string with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, font: &Font, origin: Point, color: Color);
}
