//! Font style types

use super::{float_key, Color};

/// A concrete font record, one entry of the fonts table
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontStyle {
    /// Font family name (e.g., "Calibri", "Arial")
    pub name: String,
    /// Font size in points
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub underline: Underline,
    pub color: Color,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            name: "Calibri".to_string(),
            size: 11.0,
            bold: false,
            italic: false,
            underline: Underline::None,
            color: Color::Auto,
        }
    }
}

impl FontStyle {
    /// Create a new default font
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Set font size
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set underline
    pub fn with_underline(mut self, underline: Underline) -> Self {
        self.underline = underline;
        self
    }

    /// Set color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

// Sizes are compared through `float_key` so that Eq stays reflexive and agrees with Hash.
impl PartialEq for FontStyle {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && float_key(self.size) == float_key(other.size)
            && self.bold == other.bold
            && self.italic == other.italic
            && self.underline == other.underline
            && self.color == other.color
    }
}

impl std::hash::Hash for FontStyle {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        float_key(self.size).hash(state);
        self.bold.hash(state);
        self.italic.hash(state);
        self.underline.hash(state);
        self.color.hash(state);
    }
}

impl Eq for FontStyle {}

/// Underline style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Underline {
    #[default]
    None,
    Single,
}

impl From<bool> for Underline {
    fn from(underlined: bool) -> Self {
        if underlined {
            Underline::Single
        } else {
            Underline::None
        }
    }
}
