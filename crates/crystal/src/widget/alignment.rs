//! Content alignment within a widget rectangle.

use crystal_render::{Point, Rect, Size};

/// Horizontal placement of content within a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    /// Against the left edge.
    Near,
    /// Horizontally centered.
    Center,
    /// Against the right edge.
    Far,
}

/// Vertical placement of content within a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    /// Against the top edge.
    Near,
    /// Vertically centered.
    Center,
    /// Against the bottom edge.
    Far,
}

/// The nine-position alignment grid for text and images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentAlignment {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    #[default]
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ContentAlignment {
    /// Decompose into independent horizontal and vertical anchors.
    pub fn anchors(self) -> (HorizontalAnchor, VerticalAnchor) {
        use ContentAlignment::*;
        use HorizontalAnchor as H;
        use VerticalAnchor as V;

        match self {
            TopLeft => (H::Near, V::Near),
            TopCenter => (H::Center, V::Near),
            TopRight => (H::Far, V::Near),
            MiddleLeft => (H::Near, V::Center),
            MiddleCenter => (H::Center, V::Center),
            MiddleRight => (H::Far, V::Center),
            BottomLeft => (H::Near, V::Far),
            BottomCenter => (H::Center, V::Far),
            BottomRight => (H::Far, V::Far),
        }
    }

    /// Position content of `size` inside `bounds` with the given margin.
    ///
    /// The margin insets the near and far edges; centered placement
    /// ignores it.
    pub fn position(self, size: Size, bounds: Rect, margin: f32) -> Point {
        let (h, v) = self.anchors();

        let x = match h {
            HorizontalAnchor::Near => bounds.left() + margin,
            HorizontalAnchor::Center => bounds.left() + (bounds.width() - size.width) / 2.0,
            HorizontalAnchor::Far => bounds.right() - size.width - margin,
        };
        let y = match v {
            VerticalAnchor::Near => bounds.top() + margin,
            VerticalAnchor::Center => bounds.top() + (bounds.height() - size.height) / 2.0,
            VerticalAnchor::Far => bounds.bottom() - size.height - margin,
        };

        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 100.0, 60.0);
    const SIZE: Size = Size::new(24.0, 24.0);

    #[test]
    fn test_anchor_decomposition() {
        assert_eq!(
            ContentAlignment::BottomCenter.anchors(),
            (HorizontalAnchor::Center, VerticalAnchor::Far)
        );
        assert_eq!(
            ContentAlignment::TopRight.anchors(),
            (HorizontalAnchor::Far, VerticalAnchor::Near)
        );
    }

    #[test]
    fn test_corner_positions_respect_margin() {
        let p = ContentAlignment::TopLeft.position(SIZE, BOUNDS, 8.0);
        assert_eq!(p, Point::new(8.0, 8.0));

        let p = ContentAlignment::BottomRight.position(SIZE, BOUNDS, 8.0);
        assert_eq!(p, Point::new(100.0 - 24.0 - 8.0, 60.0 - 24.0 - 8.0));
    }

    #[test]
    fn test_center_ignores_margin() {
        let p = ContentAlignment::MiddleCenter.position(SIZE, BOUNDS, 8.0);
        assert_eq!(p, Point::new(38.0, 18.0));
    }

    #[test]
    fn test_mixed_alignment() {
        let p = ContentAlignment::BottomCenter.position(SIZE, BOUNDS, 8.0);
        assert_eq!(p, Point::new(38.0, 60.0 - 24.0 - 8.0));
    }
}
