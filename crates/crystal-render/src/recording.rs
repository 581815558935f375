//! A renderer that records draw calls instead of rasterizing them.
//!
//! The recorded command list doubles as a display list for backends that
//! replay it, and as the observable output in widget tests.

use crate::font::Font;
use crate::image::{Image, ImageInterpolation};
use crate::paint::{Paint, Stroke};
use crate::path::Path;
use crate::renderer::Renderer;
use crate::types::{Color, Point, Rect, Size};

/// A single recorded draw call.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Anti-aliasing toggled.
    SetAntiAlias(bool),
    /// Image filtering changed.
    SetImageInterpolation(ImageInterpolation),
    /// Clip replaced with the filled area of a path.
    ClipPath(Path),
    /// Clip removed.
    ResetClip,
    /// Path filled with a paint.
    FillPath { path: Path, paint: Paint },
    /// Path outline stroked.
    StrokePath { path: Path, stroke: Stroke },
    /// Image drawn into a destination rectangle.
    DrawImage { image: Image, dest: Rect },
    /// Text drawn at an origin.
    DrawText {
        text: String,
        font: Font,
        origin: Point,
        color: Color,
    },
}

/// A [`Renderer`] that appends every call to a command list.
///
/// Text metrics are synthetic but deterministic: each character advances
/// by 60% of the font size and lines are 120% of the font size tall, so
/// layout code can be tested without a font stack.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    clipped: bool,
}

impl RecordingRenderer {
    /// Create a new empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Discard all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clipped = false;
    }

    /// Whether a clip is currently in effect.
    pub fn is_clipped(&self) -> bool {
        self.clipped
    }

    /// Count recorded fill operations.
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillPath { .. }))
            .count()
    }

    /// Count recorded stroke operations.
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokePath { .. }))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn set_anti_alias(&mut self, enabled: bool) {
        self.commands.push(DrawCommand::SetAntiAlias(enabled));
    }

    fn set_image_interpolation(&mut self, interpolation: ImageInterpolation) {
        self.commands
            .push(DrawCommand::SetImageInterpolation(interpolation));
    }

    fn clip_path(&mut self, path: &Path) {
        self.clipped = true;
        self.commands.push(DrawCommand::ClipPath(path.clone()));
    }

    fn reset_clip(&mut self) {
        self.clipped = false;
        self.commands.push(DrawCommand::ResetClip);
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            paint: paint.clone(),
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
        });
    }

    fn draw_image(&mut self, image: &Image, dest: Rect) {
        self.commands.push(DrawCommand::DrawImage {
            image: image.clone(),
            dest,
        });
    }

    fn measure_text(&self, text: &str, font: &Font) -> Size {
        let advance = font.size * 0.6;
        Size::new(text.chars().count() as f32 * advance, font.size * 1.2)
    }

    fn draw_text(&mut self, text: &str, font: &Font, origin: Point, color: Color) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_owned(),
            font: font.clone(),
            origin,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CornerRadii;

    #[test]
    fn test_records_in_call_order() {
        let mut renderer = RecordingRenderer::new();
        let path = Path::rect(Rect::new(0.0, 0.0, 10.0, 10.0));

        renderer.fill_path(&path, &Paint::solid(Color::RED));
        renderer.stroke_path(&path, &Stroke::new(Color::BLACK, 1.0));

        assert_eq!(renderer.commands().len(), 2);
        assert!(matches!(
            renderer.commands()[0],
            DrawCommand::FillPath { .. }
        ));
        assert!(matches!(
            renderer.commands()[1],
            DrawCommand::StrokePath { .. }
        ));
        assert_eq!(renderer.fill_count(), 1);
        assert_eq!(renderer.stroke_count(), 1);
    }

    #[test]
    fn test_clip_state_tracking() {
        let mut renderer = RecordingRenderer::new();
        assert!(!renderer.is_clipped());

        let clip = Path::rounded_rect(Rect::new(1.0, 1.0, 97.0, 37.0), CornerRadii::uniform(3.0));
        renderer.clip_path(&clip);
        assert!(renderer.is_clipped());

        renderer.reset_clip();
        assert!(!renderer.is_clipped());
    }

    #[test]
    fn test_text_metrics_deterministic() {
        let renderer = RecordingRenderer::new();
        let font = Font::default();

        let size = renderer.measure_text("OK", &font);
        assert_eq!(size.width, 2.0 * font.size * 0.6);
        assert_eq!(size.height, font.size * 1.2);

        let empty = renderer.measure_text("", &font);
        assert_eq!(empty.width, 0.0);
    }

    #[test]
    fn test_clear() {
        let mut renderer = RecordingRenderer::new();
        renderer.set_anti_alias(true);
        renderer.clip_path(&Path::rect(Rect::new(0.0, 0.0, 1.0, 1.0)));
        renderer.clear();
        assert!(renderer.commands().is_empty());
        assert!(!renderer.is_clipped());
    }
}
