//! Fill/background style types

use super::Color;

/// A concrete fill record, one entry of the fills table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillStyle {
    /// No fill (transparent)
    #[default]
    None,

    /// 12.5% gray pattern, reserved at fill index 1 of every styles part
    Gray125,

    /// Solid color fill
    Solid { color: Color },
}

impl FillStyle {
    /// Create a solid fill with the given color
    pub fn solid(color: Color) -> Self {
        FillStyle::Solid { color }
    }
}
