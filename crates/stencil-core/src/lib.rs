//! # stencil-core
//!
//! Style resolution and interning for template-driven spreadsheet generation.
//!
//! Templates declare styles that may be based on other styles. This crate:
//! - merges each style over its base as it is registered ([`StyleRegistry`])
//! - resolves a key plus an optional per-element override ([`StyleResolver`])
//! - splits the result into font, fill, border and number-format records and
//!   stores each distinct record once ([`StyleTables`], [`Interner`])
//! - hands out one stable cell-format index per distinct combination
//!   ([`StyleManager::get_or_create_cell_format`])
//!
//! ## Example
//!
//! ```rust
//! use stencil_core::{Color, StyleDescriptor, StyleManager, Thickness};
//!
//! let mut manager = StyleManager::default();
//! manager.initialise(&[
//!     StyleDescriptor::cell("Body").font_family("Arial").font_size(10.0),
//!     StyleDescriptor::cell("Total")
//!         .based_on("Body")
//!         .bold(true)
//!         .border_thickness(Thickness::new(0.0, 1.0, 0.0, 0.0)),
//! ])?;
//!
//! let body = manager.get_or_create_cell_format(Some("Body"), None)?;
//! let total = manager.get_or_create_cell_format(Some("Total"), None)?;
//! assert_ne!(body, total);
//! assert_eq!(manager.get_or_create_cell_format(Some("Body"), None)?, body);
//! # Ok::<(), stencil_core::Error>(())
//! ```

pub mod context;
pub mod descriptor;
pub mod error;
pub mod intern;
pub mod manager;
pub mod registry;
pub mod resolver;
pub mod settings;
pub mod style;
pub mod tables;

pub use context::{ResourceContext, StyleLibrary};
pub use descriptor::{CellAttributes, StyleDescriptor, StyleKind, StyleOverride};
pub use error::{Error, Result};
pub use intern::Interner;
pub use manager::{ManagerState, StyleManager};
pub use registry::StyleRegistry;
pub use resolver::StyleResolver;
pub use settings::{StyleSettings, FIRST_CUSTOM_NUMBER_FORMAT_ID};
pub use tables::{CellFormat, StyleTables};

// Re-export all style types for convenience
pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, FillStyle, FontStyle,
    HorizontalAlignment, NumberFormat, TextWrapping, Thickness, Underline,
    VerticalAlignment,
};
