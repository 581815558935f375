//! Layout geometry helpers.

use crystal_render::Size;

/// Size hint containing the preferred, minimum, and maximum sizes for a widget.
///
/// Layout code uses this to decide how to size and position widgets. Each
/// widget provides a hint based on its content and styling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeHint {
    /// The preferred size for the widget to display optimally.
    pub preferred: Size,

    /// The minimum acceptable size. `None` means no minimum constraint.
    pub minimum: Option<Size>,

    /// The maximum size the widget should be. `None` means no maximum.
    pub maximum: Option<Size>,
}

impl SizeHint {
    /// Create a new size hint with the specified preferred size.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: None,
            maximum: None,
        }
    }

    /// Create a size hint with explicit width and height.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    /// Create a fixed size hint (preferred = minimum = maximum).
    pub fn fixed(size: Size) -> Self {
        Self {
            preferred: size,
            minimum: Some(size),
            maximum: Some(size),
        }
    }

    /// Set the minimum size.
    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Set the maximum size.
    pub fn with_maximum(mut self, maximum: Size) -> Self {
        self.maximum = Some(maximum);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_hint() {
        let hint = SizeHint::fixed(Size::new(100.0, 40.0));
        assert_eq!(hint.preferred, Size::new(100.0, 40.0));
        assert_eq!(hint.minimum, Some(Size::new(100.0, 40.0)));
        assert_eq!(hint.maximum, Some(Size::new(100.0, 40.0)));
    }

    #[test]
    fn test_builder() {
        let hint = SizeHint::from_dimensions(100.0, 40.0).with_minimum(Size::new(20.0, 20.0));
        assert_eq!(hint.minimum, Some(Size::new(20.0, 20.0)));
        assert_eq!(hint.maximum, None);
    }
}
