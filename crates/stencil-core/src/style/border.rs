//! Border style types

use super::{float_key, Color};

/// Border thickness per side, in points
///
/// This is what templates describe; the border table stores line styles,
/// see [`BorderLineStyle::from_thickness`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thickness {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Thickness {
    /// Create a thickness from the four sides
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same thickness on every side
    pub const fn uniform(width: f64) -> Self {
        Self::new(width, width, width, width)
    }
}

/// A concrete border record, one entry of the borders table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderStyle {
    pub left: Option<BorderEdge>,
    pub right: Option<BorderEdge>,
    pub top: Option<BorderEdge>,
    pub bottom: Option<BorderEdge>,
}

impl BorderStyle {
    /// Build the edges a style's border attributes describe
    ///
    /// Returns `None` when neither attribute is set. Otherwise every side
    /// gets an edge carrying the declared width and color, so different
    /// declarations never produce equal records even when they draw the
    /// same line (a color without a thickness draws nothing).
    pub fn declared(thickness: Option<Thickness>, color: Option<Color>) -> Option<Self> {
        if thickness.is_none() && color.is_none() {
            return None;
        }
        let edge = |side: fn(&Thickness) -> f64| {
            let width = thickness.as_ref().map(side);
            Some(BorderEdge {
                style: width.map_or(BorderLineStyle::None, BorderLineStyle::from_thickness),
                color,
                width,
            })
        };
        Some(Self {
            left: edge(|t| t.left),
            right: edge(|t| t.right),
            top: edge(|t| t.top),
            bottom: edge(|t| t.bottom),
        })
    }
}

/// A single border edge
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderEdge {
    /// Line weight drawn for this side
    pub style: BorderLineStyle,
    /// `None` draws in the automatic color
    pub color: Option<Color>,
    /// Thickness in points as declared
    pub width: Option<f64>,
}

impl BorderEdge {
    /// Create an edge drawn from a thickness in points
    pub fn new(width: f64, color: Option<Color>) -> Self {
        Self {
            style: BorderLineStyle::from_thickness(width),
            color,
            width: Some(width),
        }
    }

    /// Check if the edge draws a line
    pub fn is_drawn(&self) -> bool {
        self.style != BorderLineStyle::None
    }
}

// Widths are compared through `float_key` so that Eq stays reflexive and agrees with Hash.
impl PartialEq for BorderEdge {
    fn eq(&self, other: &Self) -> bool {
        self.style == other.style
            && self.color == other.color
            && self.width.map(float_key) == other.width.map(float_key)
    }
}

impl std::hash::Hash for BorderEdge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.style.hash(state);
        self.color.hash(state);
        self.width.map(float_key).hash(state);
    }
}

impl Eq for BorderEdge {}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderLineStyle {
    #[default]
    None,
    /// Hair line (very thin)
    Hair,
    Thin,
    Medium,
    Thick,
}

impl BorderLineStyle {
    /// Map a side's thickness in points onto the closest line weight
    ///
    /// Zero, negative and NaN widths draw nothing.
    pub fn from_thickness(width: f64) -> Self {
        if width.is_nan() || width <= 0.0 {
            BorderLineStyle::None
        } else if width <= 0.5 {
            BorderLineStyle::Hair
        } else if width <= 1.0 {
            BorderLineStyle::Thin
        } else if width <= 2.0 {
            BorderLineStyle::Medium
        } else {
            BorderLineStyle::Thick
        }
    }
}
