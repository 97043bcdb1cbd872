//! # stencil-xlsx
//!
//! Writes the `xl/styles.xml` part of an XLSX package from the tables a
//! [`StyleManager`](stencil_core::StyleManager) built.
//!
//! ## Example
//!
//! ```rust
//! use stencil_core::{StyleDescriptor, StyleManager};
//!
//! let mut manager = StyleManager::default();
//! manager.initialise(&[StyleDescriptor::cell("Header").bold(true)])?;
//! let index = manager.get_or_create_cell_format(Some("Header"), None)?;
//!
//! let xml = stencil_xlsx::render_styles_xml(manager.tables());
//! assert_eq!(index, 1);
//! assert!(xml.contains("<cellXfs count=\"2\">"));
//! # Ok::<(), stencil_core::Error>(())
//! ```

pub mod error;
mod styles;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use stencil_core::StyleTables;

pub use error::{XlsxError, XlsxResult};

/// Render the styles part as a string
pub fn render_styles_xml(tables: &StyleTables) -> String {
    styles::styles_xml(tables)
}

/// Write the styles part to a writer
pub fn write_styles_xml<W: Write>(tables: &StyleTables, mut writer: W) -> XlsxResult<()> {
    let xml = styles::styles_xml(tables);
    writer.write_all(xml.as_bytes())?;
    writer.flush()?;
    log::debug!(
        "wrote styles part: {} fonts, {} fills, {} borders, {} cell formats",
        tables.fonts().len(),
        tables.fills().len(),
        tables.borders().len(),
        tables.cell_formats().len()
    );
    Ok(())
}

/// Write the styles part to a file
pub fn save_styles_xml<P: AsRef<Path>>(tables: &StyleTables, path: P) -> XlsxResult<()> {
    let file = File::create(path)?;
    write_styles_xml(tables, BufWriter::new(file))
}
