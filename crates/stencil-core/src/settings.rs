//! Settings for a style manager

use crate::style::FontStyle;

/// ID the host format assigns to the first custom number format
pub const FIRST_CUSTOM_NUMBER_FORMAT_ID: u32 = 164;

/// Style manager settings
///
/// These describe the defaults of the document being generated: what the
/// reserved entries of the style tables contain and how partially specified
/// styles are completed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleSettings {
    /// Font at index 0 of the fonts table
    ///
    /// Fonts built from a style take any attribute the style leaves unset
    /// from here.
    pub default_font: FontStyle,
    /// Number format ID given to the first custom format code
    ///
    /// IDs below [`FIRST_CUSTOM_NUMBER_FORMAT_ID`] belong to built-in formats;
    /// a lower value is treated as that constant.
    pub first_custom_number_format_id: u32,
    /// Treat a fully transparent background as "no fill"
    pub transparent_fill_is_none: bool,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            default_font: FontStyle::default(),
            first_custom_number_format_id: FIRST_CUSTOM_NUMBER_FORMAT_ID,
            transparent_fill_is_none: true,
        }
    }
}

impl StyleSettings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default font
    pub fn with_default_font(mut self, font: FontStyle) -> Self {
        self.default_font = font;
        self
    }

    /// Set the ID of the first custom number format
    pub fn with_first_custom_number_format_id(mut self, id: u32) -> Self {
        self.first_custom_number_format_id = id.max(FIRST_CUSTOM_NUMBER_FORMAT_ID);
        self
    }

    /// Host ID of the custom number format at `index`, `None` past `u32::MAX`
    pub fn custom_number_format_id(&self, index: u32) -> Option<u32> {
        self.first_custom_number_format_id
            .max(FIRST_CUSTOM_NUMBER_FORMAT_ID)
            .checked_add(index)
    }

    /// Choose whether transparent backgrounds produce a fill
    pub fn with_transparent_fill_is_none(mut self, value: bool) -> Self {
        self.transparent_fill_is_none = value;
        self
    }
}
