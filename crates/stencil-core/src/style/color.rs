//! Color representation

use std::fmt;

/// Color of a fill, border edge or font
///
/// Template colors arrive already evaluated; the variants mirror the ways a
/// spreadsheet styles part can refer to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Automatic/default color
    #[default]
    Auto,

    /// RGB color (opaque)
    Rgb { r: u8, g: u8, b: u8 },

    /// ARGB color with alpha channel
    Argb { a: u8, r: u8, g: u8, b: u8 },

    /// Theme color with tint (stored as a signed percentage)
    Theme { index: u8, tint: i8 },

    /// Indexed color (legacy palette)
    Indexed(u8),
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create an ARGB color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    /// Create a theme color
    pub const fn theme(index: u8, tint: i8) -> Self {
        Color::Theme { index, tint }
    }

    /// Parse `#RRGGBB` / `#AARRGGBB` (the `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();

        match hex.len() {
            6 => Some(Color::Rgb {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
            }),
            8 => Some(Color::Argb {
                a: byte(0)?,
                r: byte(2)?,
                g: byte(4)?,
                b: byte(6)?,
            }),
            _ => None,
        }
    }

    /// ARGB hex string as written into `rgb="..."` attributes
    ///
    /// Returns `None` for colors that are not expressed as RGB values.
    pub fn to_argb_hex(&self) -> Option<String> {
        match self {
            Color::Rgb { r, g, b } => Some(format!("FF{:02X}{:02X}{:02X}", r, g, b)),
            Color::Argb { a, r, g, b } => Some(format!("{:02X}{:02X}{:02X}{:02X}", a, r, g, b)),
            Color::Auto | Color::Theme { .. } | Color::Indexed(_) => None,
        }
    }

    /// Check if color is automatic/default
    pub fn is_auto(&self) -> bool {
        matches!(self, Color::Auto)
    }

    /// Fully transparent ARGB colors paint nothing
    pub fn is_transparent(&self) -> bool {
        matches!(self, Color::Argb { a: 0, .. })
    }

    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const RED: Color = Color::Rgb { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color::Rgb { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color::Rgb { r: 0, g: 0, b: 255 };
    pub const YELLOW: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 0,
    };
    pub const GRAY: Color = Color::Rgb {
        r: 128,
        g: 128,
        b: 128,
    };
    pub const TRANSPARENT: Color = Color::Argb {
        a: 0,
        r: 255,
        g: 255,
        b: 255,
    };
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => write!(f, "auto"),
            Color::Rgb { r, g, b } => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            Color::Argb { a, r, g, b } => write!(f, "#{:02X}{:02X}{:02X}{:02X}", a, r, g, b),
            Color::Theme { index, tint } => write!(f, "theme({}, {}%)", index, tint),
            Color::Indexed(i) => write!(f, "indexed({})", i),
        }
    }
}
