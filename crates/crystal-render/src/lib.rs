//! Drawing primitives and the rendering abstraction for Crystal.
//!
//! This crate provides the geometry, paint, and path types widgets draw
//! with, plus the [`Renderer`] trait they draw through. No backend is
//! bundled; the [`RecordingRenderer`] captures draw calls as a display
//! list, which is what the test suite inspects and what a real backend
//! would replay.
//!
//! # Building Paths
//!
//! ```
//! use crystal_render::{CornerRadii, Path, Rect};
//!
//! let body = Path::rounded_rect(Rect::new(0.0, 0.0, 100.0, 40.0), CornerRadii::uniform(3.0));
//! assert!(!body.is_empty());
//! ```
//!
//! # Drawing
//!
//! ```
//! use crystal_render::{Color, Paint, Path, Rect, RecordingRenderer, Renderer, Stroke};
//!
//! let mut renderer = RecordingRenderer::new();
//! let path = Path::rect(Rect::new(0.0, 0.0, 100.0, 40.0));
//!
//! renderer.fill_path(&path, &Paint::solid(Color::from_rgb8(236, 233, 216)));
//! renderer.stroke_path(&path, &Stroke::new(Color::from_rgb8(172, 168, 153), 1.0));
//!
//! assert_eq!(renderer.commands().len(), 2);
//! ```

mod error;
mod font;
mod image;
mod paint;
mod path;
mod recording;
mod region;
mod renderer;
mod types;

pub use error::{RenderError, RenderResult};
pub use font::{Font, FontFamily};
pub use image::{Image, ImageInterpolation};
pub use paint::{
    FillRule, GradientStop, LineCap, LineJoin, LinearGradient, Paint, RadialGradient, Stroke,
};
pub use path::{
    tessellate_fill, tessellate_stroke, Path, PathCommand, TessellatedPath, DEFAULT_TOLERANCE,
};
pub use recording::{DrawCommand, RecordingRenderer};
pub use region::Region;
pub use renderer::Renderer;
pub use types::{Color, CornerRadii, Point, Rect, RoundedRect, Size};
