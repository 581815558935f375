//! Font descriptions.
//!
//! Text shaping and rasterization belong to the backend; the render
//! crate only describes which face and size a widget wants.

/// A font description: family, size, and style flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Font family.
    pub family: FontFamily,
    /// Point size.
    pub size: f32,
    /// Bold weight.
    pub bold: bool,
    /// Italic slant.
    pub italic: bool,
}

impl Font {
    /// Create a font with the given family and size.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            bold: false,
            italic: false,
        }
    }

    /// Set the bold flag.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set the italic flag.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 12.0)
    }
}

/// A font family, either generic or named.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontFamily {
    /// The platform's default UI sans-serif face.
    #[default]
    SansSerif,
    /// A serif face.
    Serif,
    /// A fixed-width face.
    Monospace,
    /// A specific named family.
    Named(String),
}
