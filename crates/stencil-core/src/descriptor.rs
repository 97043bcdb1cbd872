//! Style descriptors and the cascade merge rules
//!
//! A [`StyleDescriptor`] is what a template's style section declares: a key,
//! an optional `based_on` parent and a set of optional attributes. Styles come
//! in two kinds (see [`StyleKind`]): generic styles that only know about
//! background and border, and cell styles that additionally carry font,
//! alignment and number-format attributes.
//!
//! Descriptors are combined with [`StyleDescriptor::merge_over`], which lets
//! every attribute the overlay sets win and inherits the rest from the base.

use crate::error::{Error, Result};
use crate::style::{Color, HorizontalAlignment, TextWrapping, Thickness, VerticalAlignment};

/// A style as declared by a template
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleDescriptor {
    /// Unique key within a registry
    pub key: String,
    /// Key of the style this one inherits from
    pub based_on: Option<String>,
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_thickness: Option<Thickness>,
    /// Generic or cell style, with the cell-only attributes
    pub kind: StyleKind,
}

/// The two kinds of style a template can declare
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StyleKind {
    /// Non-cell style (shapes, chart areas)
    #[default]
    Generic,
    /// Cell style with its richer attribute set
    Cell(CellAttributes),
}

/// Attributes only a cell style carries
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CellAttributes {
    pub font_family: Option<String>,
    /// Font size in points
    pub font_size: Option<f64>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub font_color: Option<Color>,
    pub text_alignment: Option<HorizontalAlignment>,
    pub vertical_alignment: Option<VerticalAlignment>,
    pub text_wrapping: Option<TextWrapping>,
    /// Rotation in degrees, counter-clockwise
    pub rotation_angle: Option<f64>,
    pub indentation: Option<u32>,
    pub number_format_code: Option<String>,
}

impl CellAttributes {
    /// True when no attribute is set
    pub fn is_empty(&self) -> bool {
        self == &CellAttributes::default()
    }

    /// True when any attribute that ends up in a font record is set
    pub fn has_font(&self) -> bool {
        non_empty(&self.font_family).is_some()
            || self.font_size.is_some()
            || self.bold.is_some()
            || self.italic.is_some()
            || self.underline.is_some()
            || self.font_color.is_some()
    }

    /// True when any attribute that ends up in the alignment record is set
    pub fn has_alignment(&self) -> bool {
        self.text_alignment.is_some()
            || self.vertical_alignment.is_some()
            || self.text_wrapping.is_some()
            || self.rotation_angle.is_some()
            || self.indentation.is_some()
    }

    fn merge(base: &CellAttributes, overlay: &CellAttributes) -> CellAttributes {
        CellAttributes {
            font_family: merge_text(&base.font_family, &overlay.font_family),
            font_size: overlay.font_size.or(base.font_size),
            bold: overlay.bold.or(base.bold),
            italic: overlay.italic.or(base.italic),
            underline: overlay.underline.or(base.underline),
            font_color: overlay.font_color.or(base.font_color),
            text_alignment: overlay.text_alignment.or(base.text_alignment),
            vertical_alignment: overlay.vertical_alignment.or(base.vertical_alignment),
            text_wrapping: overlay.text_wrapping.or(base.text_wrapping),
            rotation_angle: overlay.rotation_angle.or(base.rotation_angle),
            indentation: overlay.indentation.or(base.indentation),
            number_format_code: merge_text(&base.number_format_code, &overlay.number_format_code),
        }
    }
}

/// Treats `Some("")` like `None`
fn non_empty(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|s| !s.is_empty())
}

fn merge_text(base: &Option<String>, overlay: &Option<String>) -> Option<String> {
    non_empty(overlay).or_else(|| non_empty(base)).cloned()
}

impl StyleDescriptor {
    /// Create an empty generic style
    pub fn generic<S: Into<String>>(key: S) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Create an empty cell style
    pub fn cell<S: Into<String>>(key: S) -> Self {
        Self {
            key: key.into(),
            kind: StyleKind::Cell(CellAttributes::default()),
            ..Default::default()
        }
    }

    /// The parent key, if one is set and non-empty
    pub fn base_key(&self) -> Option<&str> {
        non_empty(&self.based_on).map(String::as_str)
    }

    /// Check if this is a cell style
    pub fn is_cell(&self) -> bool {
        matches!(self.kind, StyleKind::Cell(_))
    }

    /// Cell-only attributes, `None` for generic styles
    pub fn cell_attributes(&self) -> Option<&CellAttributes> {
        match &self.kind {
            StyleKind::Generic => None,
            StyleKind::Cell(attrs) => Some(attrs),
        }
    }

    /// Mutable cell attributes
    ///
    /// A generic style is turned into a cell style first.
    pub fn cell_attributes_mut(&mut self) -> &mut CellAttributes {
        if let StyleKind::Generic = self.kind {
            self.kind = StyleKind::Cell(CellAttributes::default());
        }
        match &mut self.kind {
            StyleKind::Cell(attrs) => attrs,
            StyleKind::Generic => unreachable!("generic style was promoted above"),
        }
    }

    /// Merge `overlay` over `base`
    ///
    /// Every attribute set on the overlay wins, the rest is inherited from the
    /// base. The result carries the overlay's key and parent. A generic overlay
    /// cannot be based on a cell style: it would lose the base's cell attributes.
    pub fn merge_over(
        base: &StyleDescriptor,
        overlay: &StyleDescriptor,
    ) -> Result<StyleDescriptor> {
        let kind = match (&base.kind, &overlay.kind) {
            (StyleKind::Generic, StyleKind::Generic) => StyleKind::Generic,
            (StyleKind::Cell(base_attrs), StyleKind::Cell(overlay_attrs)) => {
                StyleKind::Cell(CellAttributes::merge(base_attrs, overlay_attrs))
            }
            (StyleKind::Generic, StyleKind::Cell(overlay_attrs)) => {
                StyleKind::Cell(overlay_attrs.clone())
            }
            (StyleKind::Cell(_), StyleKind::Generic) => {
                return Err(Error::IncompatibleBaseKind {
                    key: overlay.key.clone(),
                    base: base.key.clone(),
                });
            }
        };

        Ok(StyleDescriptor {
            key: overlay.key.clone(),
            based_on: overlay.based_on.clone(),
            background_color: overlay.background_color.or(base.background_color),
            border_color: overlay.border_color.or(base.border_color),
            border_thickness: overlay.border_thickness.or(base.border_thickness),
            kind,
        })
    }

    /// Set the parent style key
    pub fn based_on<S: Into<String>>(mut self, key: S) -> Self {
        self.based_on = Some(key.into());
        self
    }

    /// Set background color
    pub fn background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Set border color
    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Set border thickness
    pub fn border_thickness(mut self, thickness: Thickness) -> Self {
        self.border_thickness = Some(thickness);
        self
    }

    /// Set font family
    pub fn font_family<S: Into<String>>(mut self, family: S) -> Self {
        self.cell_attributes_mut().font_family = Some(family.into());
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.cell_attributes_mut().font_size = Some(size);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.cell_attributes_mut().bold = Some(bold);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.cell_attributes_mut().italic = Some(italic);
        self
    }

    pub fn underline(mut self, underline: bool) -> Self {
        self.cell_attributes_mut().underline = Some(underline);
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.cell_attributes_mut().font_color = Some(color);
        self
    }

    /// Set horizontal alignment
    pub fn text_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.cell_attributes_mut().text_alignment = Some(align);
        self
    }

    /// Set vertical alignment
    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.cell_attributes_mut().vertical_alignment = Some(align);
        self
    }

    pub fn text_wrapping(mut self, wrapping: TextWrapping) -> Self {
        self.cell_attributes_mut().text_wrapping = Some(wrapping);
        self
    }

    /// Set text rotation in degrees
    pub fn rotation(mut self, degrees: f64) -> Self {
        self.cell_attributes_mut().rotation_angle = Some(degrees);
        self
    }

    pub fn indentation(mut self, level: u32) -> Self {
        self.cell_attributes_mut().indentation = Some(level);
        self
    }

    /// Set number format code
    pub fn number_format<S: Into<String>>(mut self, code: S) -> Self {
        self.cell_attributes_mut().number_format_code = Some(code.into());
        self
    }
}

/// Per-element override applied on top of a resolved style
///
/// The layout walk evaluates data-bound attributes (e.g. a red background for
/// negative rows) and hands the concrete values over in this shape.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleOverride {
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_thickness: Option<Thickness>,
    pub cell: CellAttributes,
}

impl StyleOverride {
    /// Create an empty override
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the override would change nothing
    pub fn is_empty(&self) -> bool {
        self.background_color.is_none()
            && self.border_color.is_none()
            && self.border_thickness.is_none()
            && self.cell.is_empty()
    }

    /// Apply the override to a resolved style
    ///
    /// A cell style stays a cell style and a generic style only becomes one
    /// when the override sets cell attributes, so this never hits the
    /// incompatible-kind case of [`StyleDescriptor::merge_over`].
    pub fn apply_to(&self, resolved: &StyleDescriptor) -> Result<StyleDescriptor> {
        let kind = if resolved.is_cell() || !self.cell.is_empty() {
            StyleKind::Cell(self.cell.clone())
        } else {
            StyleKind::Generic
        };
        let overlay = StyleDescriptor {
            key: resolved.key.clone(),
            based_on: resolved.based_on.clone(),
            background_color: self.background_color,
            border_color: self.border_color,
            border_thickness: self.border_thickness,
            kind,
        };
        StyleDescriptor::merge_over(resolved, &overlay)
    }

    /// Set background color
    pub fn background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Set border color
    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Set border thickness
    pub fn border_thickness(mut self, thickness: Thickness) -> Self {
        self.border_thickness = Some(thickness);
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.cell.font_color = Some(color);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.cell.bold = Some(bold);
        self
    }

    /// Set number format code
    pub fn number_format<S: Into<String>>(mut self, code: S) -> Self {
        self.cell.number_format_code = Some(code.into());
        self
    }

    /// Replace all cell attributes at once
    pub fn with_cell(mut self, cell: CellAttributes) -> Self {
        self.cell = cell;
        self
    }
}
