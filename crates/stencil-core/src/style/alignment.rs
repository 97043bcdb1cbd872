//! Text alignment types

use super::float_key;

/// Alignment sub-record of a cell format
///
/// Not interned on its own: it is part of the cell format's identity. Fields
/// hold the values a style declared, so two styles that differ in any
/// alignment attribute never share a cell format. The host encoding
/// ([`text_rotation`](Self::text_rotation), [`indent_level`](Self::indent_level))
/// is derived when the record is written.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    pub horizontal: Option<HorizontalAlignment>,
    pub vertical: Option<VerticalAlignment>,
    pub wrapping: Option<TextWrapping>,
    /// Indent level as declared
    pub indent: Option<u32>,
    /// Text rotation in degrees as declared, counter-clockwise
    pub rotation: Option<f64>,
}

impl Alignment {
    /// Create an alignment that sets nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set horizontal alignment
    pub fn with_horizontal(mut self, align: HorizontalAlignment) -> Self {
        self.horizontal = Some(align);
        self
    }

    /// Set vertical alignment
    pub fn with_vertical(mut self, align: VerticalAlignment) -> Self {
        self.vertical = Some(align);
        self
    }

    /// Set text wrapping
    pub fn with_wrapping(mut self, wrapping: TextWrapping) -> Self {
        self.wrapping = Some(wrapping);
        self
    }

    /// Set indent level
    pub fn with_indent(mut self, indent: u32) -> Self {
        self.indent = Some(indent);
        self
    }

    /// Set rotation angle in degrees
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    /// Check if no attribute is set
    pub fn is_empty(&self) -> bool {
        self.horizontal.is_none()
            && self.vertical.is_none()
            && self.wrapping.is_none()
            && self.indent.is_none()
            && self.rotation.is_none()
    }

    /// Whether `wrapText` is set
    pub fn wraps(&self) -> bool {
        self.wrapping.is_some_and(TextWrapping::wraps)
    }

    /// Rotation in whole degrees, clamped to -90..=90 (NaN is 0)
    pub fn text_rotation(&self) -> i16 {
        self.rotation
            .map_or(0, |degrees| degrees.round().clamp(-90.0, 90.0) as i16)
    }

    /// Indent level, capped at 250
    pub fn indent_level(&self) -> u8 {
        self.indent.map_or(0, |indent| indent.min(250) as u8)
    }
}

// Rotation is compared through `float_key` so that Eq stays reflexive and agrees with Hash.
impl PartialEq for Alignment {
    fn eq(&self, other: &Self) -> bool {
        self.horizontal == other.horizontal
            && self.vertical == other.vertical
            && self.wrapping == other.wrapping
            && self.indent == other.indent
            && self.rotation.map(float_key) == other.rotation.map(float_key)
    }
}

impl std::hash::Hash for Alignment {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.horizontal.hash(state);
        self.vertical.hash(state);
        self.wrapping.hash(state);
        self.indent.hash(state);
        self.rotation.map(float_key).hash(state);
    }
}

impl Eq for Alignment {}

/// Horizontal alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    /// General alignment (text left, numbers right)
    #[default]
    General,
    Left,
    Center,
    Right,
    /// Fill (repeat content to fill cell width)
    Fill,
    Justify,
    /// Center across selection
    CenterContinuous,
    Distributed,
}

/// Vertical alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
    Top,
    Center,
    /// Bottom aligned (default)
    #[default]
    Bottom,
    Justify,
    Distributed,
}

/// How a template asks text to wrap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextWrapping {
    #[default]
    NoWrap,
    Wrap,
    WrapWithOverflow,
}

impl TextWrapping {
    /// Whether the cell format should set `wrapText`
    pub fn wraps(self) -> bool {
        !matches!(self, TextWrapping::NoWrap)
    }
}
