//! Concrete style records
//!
//! These are the values the output tables store:
//! - [`FontStyle`] - Font settings
//! - [`FillStyle`] - Background fill
//! - [`BorderStyle`] - Cell borders, built from a [`Thickness`]
//! - [`Alignment`] - Text alignment
//! - [`NumberFormat`] - Number format classification
//! - [`Color`] - Color representation

mod alignment;
mod border;
mod color;
mod fill;
mod font;
mod number_format;

pub use alignment::{Alignment, HorizontalAlignment, TextWrapping, VerticalAlignment};
pub use border::{BorderEdge, BorderLineStyle, BorderStyle, Thickness};
pub use color::Color;
pub use fill::FillStyle;
pub use font::{FontStyle, Underline};
pub use number_format::NumberFormat;

/// Identity of a float field in `Eq`/`Hash`: its bit pattern, with both zeros folded together
pub(crate) fn float_key(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}
