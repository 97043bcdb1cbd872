//! Number format types

/// Number format of a cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberFormat {
    /// General format (default)
    #[default]
    General,

    /// Built-in format by ID
    BuiltIn(u32),

    /// Custom format string
    Custom(String),
}

/// Built-in formats every spreadsheet application knows by ID
const BUILTIN_FORMATS: &[(u32, &str)] = &[
    (1, "0"),
    (2, "0.00"),
    (3, "#,##0"),
    (4, "#,##0.00"),
    (9, "0%"),
    (10, "0.00%"),
    (11, "0.00E+00"),
    (12, "# ?/?"),
    (13, "# ??/??"),
    (14, "mm-dd-yy"),
    (15, "d-mmm-yy"),
    (16, "d-mmm"),
    (17, "mmm-yy"),
    (18, "h:mm AM/PM"),
    (19, "h:mm:ss AM/PM"),
    (20, "h:mm"),
    (21, "h:mm:ss"),
    (22, "m/d/yy h:mm"),
    (37, "#,##0 ;(#,##0)"),
    (38, "#,##0 ;[Red](#,##0)"),
    (39, "#,##0.00;(#,##0.00)"),
    (40, "#,##0.00;[Red](#,##0.00)"),
    (45, "mm:ss"),
    (46, "[h]:mm:ss"),
    (47, "mmss.0"),
    (48, "##0.0E+0"),
    (49, "@"),
];

impl NumberFormat {
    /// Classify a format code
    ///
    /// Codes that match a built-in format are mapped to its ID so they never
    /// take a slot in the custom format table.
    pub fn from_code(code: &str) -> Self {
        if code.is_empty() || code.eq_ignore_ascii_case("General") {
            return NumberFormat::General;
        }
        BUILTIN_FORMATS
            .iter()
            .find(|(_, builtin)| *builtin == code)
            .map(|(id, _)| NumberFormat::BuiltIn(*id))
            .unwrap_or_else(|| NumberFormat::Custom(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(NumberFormat::from_code(""), NumberFormat::General);
        assert_eq!(NumberFormat::from_code("general"), NumberFormat::General);
        assert_eq!(NumberFormat::from_code("0.00%"), NumberFormat::BuiltIn(10));
        assert_eq!(NumberFormat::from_code("@"), NumberFormat::BuiltIn(49));
        assert_eq!(
            NumberFormat::from_code("yyyy-mm-dd"),
            NumberFormat::Custom("yyyy-mm-dd".to_string())
        );
    }
}
