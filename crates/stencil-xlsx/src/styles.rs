//! styles.xml serialization of interned style tables

use stencil_core::style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, FillStyle, FontStyle,
    HorizontalAlignment, Underline, VerticalAlignment,
};
use stencil_core::{CellFormat, StyleTables};

/// Render the complete `xl/styles.xml` part
///
/// Table indices are written unchanged, so every index the style manager
/// handed out is a valid `s="..."` attribute for a cell.
pub(crate) fn styles_xml(tables: &StyleTables) -> String {
    let mut xml = String::new();
    xml.push_str(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    );

    let numfmts: Vec<(u32, &str)> = tables.custom_number_formats().collect();
    if !numfmts.is_empty() {
        xml.push_str(&format!("\n  <numFmts count=\"{}\">", numfmts.len()));
        for (id, code) in &numfmts {
            xml.push_str(&format!(
                "\n    <numFmt numFmtId=\"{}\" formatCode=\"{}\"/>",
                id,
                escape_xml_attr(code)
            ));
        }
        xml.push_str("\n  </numFmts>");
    }

    xml.push_str(&format!("\n  <fonts count=\"{}\">", tables.fonts().len()));
    for (_, font) in tables.fonts().iter() {
        xml.push_str("\n    ");
        xml.push_str(&write_font(font));
    }
    xml.push_str("\n  </fonts>");

    xml.push_str(&format!("\n  <fills count=\"{}\">", tables.fills().len()));
    for (_, fill) in tables.fills().iter() {
        xml.push_str("\n    ");
        xml.push_str(&write_fill(fill));
    }
    xml.push_str("\n  </fills>");

    xml.push_str(&format!("\n  <borders count=\"{}\">", tables.borders().len()));
    for (_, border) in tables.borders().iter() {
        xml.push_str("\n    ");
        xml.push_str(&write_border(border));
    }
    xml.push_str("\n  </borders>");

    xml.push_str(
        r#"
  <cellStyleXfs count="1">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
  </cellStyleXfs>"#,
    );

    xml.push_str(&format!(
        "\n  <cellXfs count=\"{}\">",
        tables.cell_formats().len()
    ));
    for (_, format) in tables.cell_formats().iter() {
        xml.push_str("\n    ");
        xml.push_str(&write_xf(format));
    }
    xml.push_str("\n  </cellXfs>");

    xml.push_str(
        r#"
  <cellStyles count="1">
    <cellStyle name="Normal" xfId="0" builtinId="0"/>
  </cellStyles>
  <dxfs count="0"/>
  <tableStyles count="0" defaultTableStyle="TableStyleMedium9" defaultPivotStyle="PivotStyleLight16"/>
</styleSheet>"#,
    );
    xml
}

fn escape_xml_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Attributes naming a color, e.g. ` rgb="FFFF0000"`
fn color_attrs(color: &Color) -> String {
    match color {
        Color::Auto => " indexed=\"64\"".to_string(),
        Color::Rgb { .. } | Color::Argb { .. } => {
            format!(" rgb=\"{}\"", color.to_argb_hex().unwrap_or_default())
        }
        Color::Indexed(i) => format!(" indexed=\"{}\"", i),
        Color::Theme { index, tint } => {
            if *tint == 0 {
                format!(" theme=\"{}\"", index)
            } else {
                format!(" theme=\"{}\" tint=\"{}\"", index, (*tint as f64) / 100.0)
            }
        }
    }
}

fn write_font(font: &FontStyle) -> String {
    let mut s = String::from("<font>");
    if font.bold {
        s.push_str("<b/>");
    }
    if font.italic {
        s.push_str("<i/>");
    }
    match font.underline {
        Underline::None => {}
        Underline::Single => s.push_str("<u/>"),
    }
    s.push_str(&format!("<sz val=\"{}\"/>", font.size));
    if !font.color.is_auto() {
        s.push_str(&format!("<color{}/>", color_attrs(&font.color)));
    }
    s.push_str(&format!("<name val=\"{}\"/>", escape_xml_attr(&font.name)));
    s.push_str("</font>");
    s
}

fn write_fill(fill: &FillStyle) -> String {
    match fill {
        FillStyle::None => "<fill><patternFill patternType=\"none\"/></fill>".to_string(),
        FillStyle::Solid { color } => format!(
            "<fill><patternFill patternType=\"solid\"><fgColor{}/><bgColor indexed=\"64\"/></patternFill></fill>",
            color_attrs(color)
        ),
        FillStyle::Gray125 => "<fill><patternFill patternType=\"gray125\"/></fill>".to_string(),
    }
}

fn border_style_to_str(s: BorderLineStyle) -> &'static str {
    match s {
        BorderLineStyle::None => "none",
        BorderLineStyle::Hair => "hair",
        BorderLineStyle::Thin => "thin",
        BorderLineStyle::Medium => "medium",
        BorderLineStyle::Thick => "thick",
    }
}

/// Undrawn edges (colour only, or zero width) are written empty
fn write_border_edge(tag: &str, edge: &Option<BorderEdge>) -> String {
    let Some(edge) = edge.as_ref().filter(|e| e.is_drawn()) else {
        return format!("<{tag}/>");
    };
    format!(
        "<{tag} style=\"{}\"><color{}/></{tag}>",
        border_style_to_str(edge.style),
        color_attrs(edge.color.as_ref().unwrap_or(&Color::Auto))
    )
}

fn write_border(border: &BorderStyle) -> String {
    let mut s = String::from("<border>");
    s.push_str(&write_border_edge("left", &border.left));
    s.push_str(&write_border_edge("right", &border.right));
    s.push_str(&write_border_edge("top", &border.top));
    s.push_str(&write_border_edge("bottom", &border.bottom));
    s.push_str("<diagonal/>");
    s.push_str("</border>");
    s
}

fn horiz_to_str(h: HorizontalAlignment) -> &'static str {
    match h {
        HorizontalAlignment::General => "general",
        HorizontalAlignment::Left => "left",
        HorizontalAlignment::Center => "center",
        HorizontalAlignment::Right => "right",
        HorizontalAlignment::Fill => "fill",
        HorizontalAlignment::Justify => "justify",
        HorizontalAlignment::CenterContinuous => "centerContinuous",
        HorizontalAlignment::Distributed => "distributed",
    }
}

fn vert_to_str(v: VerticalAlignment) -> &'static str {
    match v {
        VerticalAlignment::Top => "top",
        VerticalAlignment::Center => "center",
        VerticalAlignment::Bottom => "bottom",
        VerticalAlignment::Justify => "justify",
        VerticalAlignment::Distributed => "distributed",
    }
}

/// `textRotation` encodes -1..-90 degrees as 91..180
fn text_rotation(degrees: i16) -> u16 {
    if degrees < 0 {
        (90 - degrees) as u16
    } else {
        degrees as u16
    }
}

fn write_alignment(al: &Alignment) -> String {
    let mut s = String::from("<alignment");
    if let Some(horizontal) = al.horizontal {
        s.push_str(&format!(" horizontal=\"{}\"", horiz_to_str(horizontal)));
    }
    if let Some(vertical) = al.vertical {
        s.push_str(&format!(" vertical=\"{}\"", vert_to_str(vertical)));
    }
    if al.wraps() {
        s.push_str(" wrapText=\"1\"");
    }
    let indent = al.indent_level();
    if indent != 0 {
        s.push_str(&format!(" indent=\"{}\"", indent));
    }
    let rotation = al.text_rotation();
    if rotation != 0 {
        s.push_str(&format!(" textRotation=\"{}\"", text_rotation(rotation)));
    }
    s.push_str("/>");
    s
}

fn write_xf(format: &CellFormat) -> String {
    let mut attrs = String::new();
    if format.number_format_id.is_some() {
        attrs.push_str(" applyNumberFormat=\"1\"");
    }
    if format.font_id.is_some() {
        attrs.push_str(" applyFont=\"1\"");
    }
    if format.fill_id.is_some() {
        attrs.push_str(" applyFill=\"1\"");
    }
    if format.border_id.is_some() {
        attrs.push_str(" applyBorder=\"1\"");
    }
    if format.alignment.is_some() {
        attrs.push_str(" applyAlignment=\"1\"");
    }

    let mut s = format!(
        "<xf numFmtId=\"{}\" fontId=\"{}\" fillId=\"{}\" borderId=\"{}\" xfId=\"0\"{}",
        format.number_format_id.unwrap_or(0),
        format.font_id.unwrap_or(0),
        format.fill_id.unwrap_or(0),
        format.border_id.unwrap_or(0),
        attrs
    );

    match &format.alignment {
        None => s.push_str("/>"),
        Some(alignment) => {
            s.push('>');
            s.push_str(&write_alignment(alignment));
            s.push_str("</xf>");
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stencil_core::style::TextWrapping;

    #[test]
    fn test_write_font() {
        let font = FontStyle::new()
            .with_name("Arial & Co")
            .with_size(10.0)
            .with_bold(true)
            .with_underline(Underline::Single)
            .with_color(Color::RED);

        assert_eq!(
            write_font(&font),
            "<font><b/><u/><sz val=\"10\"/><color rgb=\"FFFF0000\"/><name val=\"Arial &amp; Co\"/></font>"
        );
    }

    #[test]
    fn test_write_fill() {
        assert_eq!(
            write_fill(&FillStyle::Gray125),
            "<fill><patternFill patternType=\"gray125\"/></fill>"
        );
        assert_eq!(
            write_fill(&FillStyle::solid(Color::theme(4, 40))),
            "<fill><patternFill patternType=\"solid\"><fgColor theme=\"4\" tint=\"0.4\"/><bgColor indexed=\"64\"/></patternFill></fill>"
        );
    }

    #[test]
    fn test_write_border() {
        let border = BorderStyle {
            top: Some(BorderEdge::new(0.0, Some(Color::RED))),
            bottom: Some(BorderEdge::new(2.0, None)),
            ..Default::default()
        };

        assert_eq!(
            write_border(&border),
            "<border><left/><right/><top/><bottom style=\"medium\"><color indexed=\"64\"/></bottom><diagonal/></border>"
        );
    }

    #[test]
    fn test_colored_edge() {
        let border = BorderStyle {
            left: Some(BorderEdge::new(0.4, Some(Color::BLUE))),
            ..Default::default()
        };

        assert_eq!(
            write_border_edge("left", &border.left),
            "<left style=\"hair\"><color rgb=\"FF0000FF\"/></left>"
        );
    }

    #[test]
    fn test_text_rotation() {
        assert_eq!(text_rotation(0), 0);
        assert_eq!(text_rotation(45), 45);
        assert_eq!(text_rotation(-45), 135);
        assert_eq!(text_rotation(-90), 180);
    }

    #[test]
    fn test_write_xf() {
        let plain = CellFormat {
            font_id: Some(1),
            ..Default::default()
        };
        assert_eq!(
            write_xf(&plain),
            "<xf numFmtId=\"0\" fontId=\"1\" fillId=\"0\" borderId=\"0\" xfId=\"0\" applyFont=\"1\"/>"
        );

        let aligned = CellFormat {
            number_format_id: Some(164),
            alignment: Some(Alignment::new().with_wrapping(TextWrapping::Wrap)),
            ..Default::default()
        };
        assert_eq!(
            write_xf(&aligned),
            "<xf numFmtId=\"164\" fontId=\"0\" fillId=\"0\" borderId=\"0\" xfId=\"0\" applyNumberFormat=\"1\" applyAlignment=\"1\"><alignment wrapText=\"1\"/></xf>"
        );
    }

    #[test]
    fn test_empty_alignment_node() {
        assert_eq!(write_alignment(&Alignment::default()), "<alignment/>");
        let overflow = Alignment::new().with_wrapping(TextWrapping::WrapWithOverflow);
        assert_eq!(write_alignment(&overflow), "<alignment wrapText=\"1\"/>");
    }

    #[test]
    fn test_write_alignment_host_encoding() {
        let al = Alignment::new()
            .with_horizontal(HorizontalAlignment::Right)
            .with_vertical(VerticalAlignment::Top)
            .with_indent(400)
            .with_rotation(-44.6);

        assert_eq!(
            write_alignment(&al),
            "<alignment horizontal=\"right\" vertical=\"top\" indent=\"250\" textRotation=\"135\"/>"
        );
    }
}
