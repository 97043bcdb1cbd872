//! Stencil CLI - resolve template styles and inspect the resulting tables

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use stencil_core::{
    FontStyle, StyleDescriptor, StyleManager, StyleOverride, StyleSettings, StyleTables,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "stencil")]
#[command(author, version, about = "Template style resolution and interning tool")]
struct Cli {
    /// Font family of the default font (font 0)
    #[arg(long, global = true)]
    default_font: Option<String>,

    /// Size in points of the default font
    #[arg(long, global = true)]
    default_font_size: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn settings(&self) -> StyleSettings {
        let mut font = FontStyle::new();
        if let Some(name) = &self.default_font {
            font = font.with_name(name.as_str());
        }
        if let Some(size) = self.default_font_size {
            font = font.with_size(size);
        }
        StyleSettings::new().with_default_font(font)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cell-format index of every request and the table sizes
    Summary {
        /// Style definitions (JSON with `shared` and `local` lists)
        styles: PathBuf,

        /// Cell requests (JSON list of `{ "style", "override" }`)
        #[arg(short, long)]
        cells: Option<PathBuf>,
    },

    /// Write the styles part built from the requests
    StylesXml {
        /// Style definitions (JSON with `shared` and `local` lists)
        styles: PathBuf,

        /// Cell requests (JSON list of `{ "style", "override" }`)
        #[arg(short, long)]
        cells: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Contents of a styles file
#[derive(Debug, Default, Deserialize)]
struct StyleSheet {
    #[serde(default)]
    shared: Vec<StyleDescriptor>,
    #[serde(default)]
    local: Vec<StyleDescriptor>,
}

/// One styled element of the layout walk
#[derive(Debug, Default, Deserialize)]
struct CellRequest {
    #[serde(default)]
    style: Option<String>,
    #[serde(default, rename = "override")]
    runtime: Option<StyleOverride>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings();

    match cli.command {
        Commands::Summary { styles, cells } => summary(settings, &styles, cells.as_deref()),
        Commands::StylesXml {
            styles,
            cells,
            output,
        } => styles_xml(settings, &styles, cells.as_deref(), output.as_deref()),
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse '{}'", path.display()))
}

fn load(styles: &Path, cells: Option<&Path>) -> Result<(StyleSheet, Vec<CellRequest>)> {
    let sheet: StyleSheet = read_json(styles)?;
    let requests = match cells {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };
    Ok((sheet, requests))
}

/// Run every request through a fresh manager
fn build(
    settings: StyleSettings,
    sheet: &StyleSheet,
    requests: &[CellRequest],
) -> Result<(Vec<u32>, StyleTables)> {
    let mut manager = StyleManager::new(settings);
    manager
        .initialise(&sheet.shared)
        .context("Failed to load shared styles")?;
    if !sheet.local.is_empty() {
        manager
            .set_current_overrides(&sheet.local)
            .context("Failed to load local styles")?;
    }

    let indices = requests
        .iter()
        .enumerate()
        .map(|(i, request)| {
            manager
                .get_or_create_cell_format(request.style.as_deref(), request.runtime.as_ref())
                .with_context(|| format!("Cell request {} failed", i))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((indices, manager.into_tables()))
}

fn summary(settings: StyleSettings, styles: &Path, cells: Option<&Path>) -> Result<()> {
    let (sheet, requests) = load(styles, cells)?;
    let (indices, tables) = build(settings, &sheet, &requests)?;

    let mut out = io::stdout().lock();
    write_summary(&mut out, &requests, &indices, &tables).context("Failed to write to stdout")
}

fn write_summary<W: Write>(
    out: &mut W,
    requests: &[CellRequest],
    indices: &[u32],
    tables: &StyleTables,
) -> io::Result<()> {
    for (i, (request, index)) in requests.iter().zip(indices).enumerate() {
        let style = request.style.as_deref().unwrap_or("-");
        let runtime = if request.runtime.as_ref().is_some_and(|r| !r.is_empty()) {
            " +override"
        } else {
            ""
        };
        writeln!(out, "{}\t{}{}\t{}", i, style, runtime, index)?;
    }

    writeln!(out)?;
    writeln!(out, "Fonts: {}", tables.fonts().len())?;
    writeln!(out, "Fills: {}", tables.fills().len())?;
    writeln!(out, "Borders: {}", tables.borders().len())?;
    writeln!(out, "Number formats: {}", tables.number_formats().len())?;
    writeln!(out, "Cell formats: {}", tables.cell_formats().len())?;
    Ok(())
}

fn styles_xml(
    settings: StyleSettings,
    styles: &Path,
    cells: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let (sheet, requests) = load(styles, cells)?;
    let (_, tables) = build(settings, &sheet, &requests)?;

    if let Some(output_path) = output {
        stencil_xlsx::save_styles_xml(&tables, output_path)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!(
            "Wrote {} cell formats to '{}'",
            tables.cell_formats().len(),
            output_path.display()
        );
    } else {
        stencil_xlsx::write_styles_xml(&tables, io::stdout().lock())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STYLES: &str = r#"{
        "shared": [
            {"key": "Default", "kind": {"Cell": {"font_size": 10.0}}},
            {"key": "Header", "based_on": "Default", "kind": {"Cell": {"bold": true}}}
        ],
        "local": [
            {"key": "Alert", "based_on": "Default",
             "background_color": {"Rgb": {"r": 255, "g": 0, "b": 0}},
             "kind": {"Cell": {}}}
        ]
    }"#;

    const CELLS: &str = r#"[
        {"style": "Default"},
        {"style": "Default"},
        {"style": "Header"},
        {"style": "Alert"},
        {},
        {"style": "Default", "override": {"background_color": {"Rgb": {"r": 0, "g": 0, "b": 255}}}}
    ]"#;

    fn parsed() -> (StyleSheet, Vec<CellRequest>) {
        (
            serde_json::from_str(STYLES).unwrap(),
            serde_json::from_str(CELLS).unwrap(),
        )
    }

    #[test]
    fn test_build_indices() {
        let (sheet, requests) = parsed();
        let (indices, tables) = build(StyleSettings::default(), &sheet, &requests).unwrap();

        assert_eq!(indices, vec![1, 1, 2, 3, 0, 4]);
        assert_eq!(tables.cell_formats().len(), 5);
    }

    #[test]
    fn test_unknown_style_is_reported() {
        let (sheet, _) = parsed();
        let requests = vec![CellRequest {
            style: Some("Footer".to_string()),
            runtime: None,
        }];

        let err = build(StyleSettings::default(), &sheet, &requests).unwrap_err();
        assert_eq!(err.to_string(), "Cell request 0 failed");
        assert!(format!("{:#}", err).contains("Footer"));
    }

    #[test]
    fn test_write_summary() {
        let (sheet, requests) = parsed();
        let (indices, tables) = build(StyleSettings::default(), &sheet, &requests).unwrap();

        let mut out = Vec::new();
        write_summary(&mut out, &requests, &indices, &tables).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("0\tDefault\t1\n1\tDefault\t1\n"));
        assert!(text.contains("4\t-\t0\n"));
        assert!(text.contains("5\tDefault +override\t4\n"));
        assert!(text.contains("Cell formats: 5\n"));
    }

    #[test]
    fn test_default_font_flags() {
        let cli = Cli::parse_from([
            "stencil",
            "summary",
            "styles.json",
            "--default-font",
            "Arial",
            "--default-font-size",
            "9",
        ]);
        let settings = cli.settings();

        assert_eq!(settings.default_font.name, "Arial");
        assert_eq!(settings.default_font.size, 9.0);

        let (sheet, requests) = parsed();
        let (_, tables) = build(settings, &sheet, &requests).unwrap();
        let header = tables.fonts().get(2).unwrap();
        assert_eq!(header.name, "Arial");
        assert_eq!(header.size, 10.0);
        assert!(header.bold);
    }

    #[test]
    fn test_load_files() {
        let dir = tempfile::tempdir().unwrap();
        let styles = dir.path().join("styles.json");
        std::fs::write(&styles, STYLES).unwrap();

        let (sheet, requests) = load(&styles, None).unwrap();
        assert_eq!(sheet.shared.len(), 2);
        assert_eq!(sheet.local.len(), 1);
        assert!(requests.is_empty());

        let missing = dir.path().join("missing.json");
        let err = load(&missing, None).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
