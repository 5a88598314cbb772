use chrono::NaiveDate;
use serde::Serialize;

/// Display number formats used across the workbook.
pub mod num_format {
    /// Integer with thousands separator.
    pub const INTEGER: &str = "#,##0";
    /// Whole percentage, used for allocation ratios.
    pub const PERCENT: &str = "0%";
    /// Percentage with one decimal, used for margins.
    pub const PERCENT_1DP: &str = "0.0%";
    /// Calendar date.
    pub const DATE: &str = "yyyy/mm/dd";
}

/// Content of a cell: a literal or a formula, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    /// Formula text including the leading `=`.
    Formula(String),
}

/// Presentation attributes of a cell.
///
/// Colours are `0xRRGGBB`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CellStyle {
    pub bold: bool,
    pub font_size: Option<u8>,
    pub font_color: Option<u32>,
    pub fill: Option<u32>,
    pub border: bool,
    pub centered: bool,
}

impl CellStyle {
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            bold: false,
            font_size: None,
            font_color: None,
            fill: None,
            border: false,
            centered: false,
        }
    }

    #[must_use]
    pub const fn bold() -> Self {
        let mut style = Self::plain();
        style.bold = true;
        style
    }

    /// Same style with a fill colour.
    #[must_use]
    pub const fn with_fill(mut self, color: u32) -> Self {
        self.fill = Some(color);
        self
    }

    #[must_use]
    pub const fn with_font_color(mut self, color: u32) -> Self {
        self.font_color = Some(color);
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: u8) -> Self {
        self.font_size = Some(size);
        self
    }

    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Self::plain()
    }
}

/// A single written cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub value: CellValue,
    #[serde(skip_serializing_if = "CellStyle::is_plain")]
    pub style: CellStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_format: Option<String>,
}

impl Cell {
    fn from_value(value: CellValue) -> Self {
        Self {
            value,
            style: CellStyle::plain(),
            num_format: None,
        }
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::from_value(CellValue::Text(text.into()))
    }

    #[must_use]
    pub fn number(number: f64) -> Self {
        Self::from_value(CellValue::Number(number))
    }

    #[must_use]
    pub fn date(date: NaiveDate) -> Self {
        Self::from_value(CellValue::Date(date)).with_format(num_format::DATE)
    }

    /// Formula cell; a leading `=` is added when missing.
    #[must_use]
    pub fn formula(formula: impl Into<String>) -> Self {
        let formula = formula.into();
        let formula = if formula.starts_with('=') {
            formula
        } else {
            format!("={formula}")
        };
        Self::from_value(CellValue::Formula(formula))
    }

    #[must_use]
    pub fn styled(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_format(mut self, num_format: impl Into<String>) -> Self {
        self.num_format = Some(num_format.into());
        self
    }

    /// Formula text, if this is a formula cell.
    #[must_use]
    pub fn formula_text(&self) -> Option<&str> {
        match &self.value {
            CellValue::Formula(f) => Some(f),
            _ => None,
        }
    }

    /// Literal text, if this is a text cell.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            CellValue::Text(t) => Some(t),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self.value {
            CellValue::Number(n) => Some(n),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_gets_leading_equals() {
        assert_eq!(Cell::formula("SUM(B8:B13)").formula_text(), Some("=SUM(B8:B13)"));
        assert_eq!(Cell::formula("=B5-B4").formula_text(), Some("=B5-B4"));
    }

    #[test]
    fn test_date_cell_carries_date_format() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).expect("valid date");
        let cell = Cell::date(date);
        assert_eq!(cell.num_format.as_deref(), Some(num_format::DATE));
        assert_eq!(cell.value, CellValue::Date(date));
    }

    #[test]
    fn test_style_builders() {
        let style = CellStyle::bold().with_fill(0x0036_6092).with_font_color(0x00FF_FFFF);
        assert!(style.bold);
        assert_eq!(style.fill, Some(0x0036_6092));
        assert!(!style.is_plain());
        assert!(CellStyle::default().is_plain());
    }
}
