//! Output style tables and cell-format interning
//!
//! A resolved style is split into the records a spreadsheet styles part
//! stores separately (font, fill, border, number format), each deduplicated
//! in its own [`Interner`]. The resulting indices, together with the
//! alignment, form a [`CellFormat`] which is deduplicated the same way.
//!
//! Index 0 of every table holds the host format's default entry, so a
//! style that sets nothing maps to cell format 0.

use std::fmt::Debug;
use std::hash::Hash;

use crate::descriptor::{CellAttributes, StyleDescriptor};
use crate::intern::Interner;
use crate::settings::StyleSettings;
use crate::error::{Error, Result};
use crate::style::{Alignment, BorderStyle, FillStyle, FontStyle, NumberFormat, Underline};

/// Composite cell format, one entry of the cell-format table
///
/// `None` ids mean "no explicit record" and are written as index 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellFormat {
    pub font_id: Option<u32>,
    pub fill_id: Option<u32>,
    pub border_id: Option<u32>,
    /// Host number format ID (built-in or custom)
    pub number_format_id: Option<u32>,
    /// `None` when the style sets no alignment attribute
    pub alignment: Option<Alignment>,
}

/// The five deduplicated tables of one document
#[derive(Debug, Clone)]
pub struct StyleTables {
    settings: StyleSettings,
    fonts: Interner<FontStyle>,
    fills: Interner<FillStyle>,
    borders: Interner<BorderStyle>,
    /// Custom format codes; built-in codes never get an entry
    number_formats: Interner<String>,
    cell_formats: Interner<CellFormat>,
}

impl StyleTables {
    /// Create tables holding only the reserved default entries
    pub fn new(settings: StyleSettings) -> Self {
        Self {
            fonts: Interner::with_reserved([settings.default_font.clone()]),
            fills: Interner::with_reserved([FillStyle::None, FillStyle::Gray125]),
            borders: Interner::with_reserved([BorderStyle::default()]),
            number_formats: Interner::new(),
            cell_formats: Interner::with_reserved([CellFormat::default()]),
            settings,
        }
    }

    /// Drop every interned entry, keeping the reserved defaults
    pub fn reset(&mut self) {
        *self = Self::new(self.settings.clone());
    }

    /// Intern the cell format a resolved style describes
    ///
    /// Generic styles only contribute their fill and border.
    pub fn intern_cell_format(&mut self, style: &StyleDescriptor) -> Result<u32> {
        let format = self.build_cell_format(style)?;
        Ok(intern_traced(&mut self.cell_formats, "cell format", format))
    }

    /// Intern the sub-records of `style` and assemble its cell format
    ///
    /// The cell format itself is not interned.
    pub fn build_cell_format(&mut self, style: &StyleDescriptor) -> Result<CellFormat> {
        let empty = CellAttributes::default();
        let attrs = style.cell_attributes().unwrap_or(&empty);

        let font_id = self
            .font_for(attrs)
            .map(|font| intern_traced(&mut self.fonts, "font", font));
        let fill_id = self
            .fill_for(style)
            .map(|fill| intern_traced(&mut self.fills, "fill", fill));
        let border_id =
            border_for(style).map(|border| intern_traced(&mut self.borders, "border", border));
        let number_format_id = match attrs.number_format_code.as_deref() {
            Some(code) => self.number_format_id(code)?,
            None => None,
        };

        Ok(CellFormat {
            font_id,
            fill_id,
            border_id,
            number_format_id,
            alignment: alignment_for(attrs),
        })
    }

    /// Host ID for a number format code
    ///
    /// Returns `None` for the general format. Built-in codes map to their
    /// fixed ID; custom codes are interned and numbered from
    /// [`StyleSettings::first_custom_number_format_id`]. A code is only
    /// interned once it has a valid ID.
    pub fn number_format_id(&mut self, code: &str) -> Result<Option<u32>> {
        match NumberFormat::from_code(code) {
            NumberFormat::General => Ok(None),
            NumberFormat::BuiltIn(id) => Ok(Some(id)),
            NumberFormat::Custom(code) => {
                let index = self
                    .number_formats
                    .position(&code)
                    .unwrap_or(self.number_formats.len() as u32);
                let id = self
                    .settings
                    .custom_number_format_id(index)
                    .ok_or_else(|| Error::NumberFormatIdOverflow(code.clone()))?;
                intern_traced(&mut self.number_formats, "number format", code);
                Ok(Some(id))
            }
        }
    }

    /// Font record for a style, `None` if it sets no font attribute
    fn font_for(&self, attrs: &CellAttributes) -> Option<FontStyle> {
        if !attrs.has_font() {
            return None;
        }
        let default = &self.settings.default_font;
        Some(FontStyle {
            name: attrs
                .font_family
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| default.name.clone()),
            size: attrs.font_size.unwrap_or(default.size),
            bold: attrs.bold.unwrap_or(default.bold),
            italic: attrs.italic.unwrap_or(default.italic),
            underline: attrs.underline.map(Underline::from).unwrap_or(default.underline),
            color: attrs.font_color.unwrap_or(default.color),
        })
    }

    fn fill_for(&self, style: &StyleDescriptor) -> Option<FillStyle> {
        let color = style.background_color?;
        if self.settings.transparent_fill_is_none && color.is_transparent() {
            return None;
        }
        Some(FillStyle::solid(color))
    }

    /// Settings the tables were built with
    pub fn settings(&self) -> &StyleSettings {
        &self.settings
    }

    /// Fonts table
    pub fn fonts(&self) -> &Interner<FontStyle> {
        &self.fonts
    }

    /// Fills table
    pub fn fills(&self) -> &Interner<FillStyle> {
        &self.fills
    }

    /// Borders table
    pub fn borders(&self) -> &Interner<BorderStyle> {
        &self.borders
    }

    /// Custom number format codes, by table index
    pub fn number_formats(&self) -> &Interner<String> {
        &self.number_formats
    }

    /// Custom number formats with their host IDs
    pub fn custom_number_formats(&self) -> impl Iterator<Item = (u32, &str)> {
        self.number_formats.iter().filter_map(|(index, code)| {
            let id = self.settings.custom_number_format_id(index)?;
            Some((id, code.as_str()))
        })
    }

    /// Cell-format table
    pub fn cell_formats(&self) -> &Interner<CellFormat> {
        &self.cell_formats
    }
}

impl Default for StyleTables {
    fn default() -> Self {
        Self::new(StyleSettings::default())
    }
}

fn border_for(style: &StyleDescriptor) -> Option<BorderStyle> {
    BorderStyle::declared(style.border_thickness, style.border_color)
}

fn alignment_for(attrs: &CellAttributes) -> Option<Alignment> {
    let alignment = Alignment {
        horizontal: attrs.text_alignment,
        vertical: attrs.vertical_alignment,
        wrapping: attrs.text_wrapping,
        indent: attrs.indentation,
        rotation: attrs.rotation_angle,
    };
    (!alignment.is_empty()).then_some(alignment)
}

fn intern_traced<T>(table: &mut Interner<T>, what: &str, value: T) -> u32
where
    T: Hash + Eq + Clone + Debug,
{
    let before = table.len();
    let index = table.intern(value);
    if table.len() > before {
        log::trace!("new {what} #{index}: {:?}", table.get(index));
    }
    index
}
