//! One module per worksheet.
//!
//! Each module adds a `build_*_sheet` method to [`super::TemplateBuilder`]
//! and exposes the row/column positions other sheets reference in their
//! formulas.

pub(super) mod cash;
pub(super) mod cash_flow;
pub(super) mod dashboard;
pub(super) mod expense;
pub(super) mod labor;
pub(super) mod master;
pub(super) mod profit_loss;
pub(super) mod sales;
pub(super) mod vehicle;

use super::super::traits::{GeneratorError, GeneratorResult};
use super::cast;
use super::generator::TemplateBuilder;
use super::palette::Palette;
use crate::locale::SampleDate;
use crate::model::reference::{qualified, whole_column};
use crate::model::{Cell, CellRange, CellStyle, Sheet};
use chrono::NaiveDate;

/// Validation list names shared between sheets.
pub(super) mod lists {
    pub const PARTNER_NAMES: &str = "partner_names";
    pub const VEHICLE_CODES: &str = "vehicle_codes";
    pub const DRIVER_NAMES: &str = "driver_names";
    pub const EXPENSE_CATEGORIES: &str = "expense_categories";
    pub const CASH_DIRECTIONS: &str = "cash_directions";
    pub const CASH_CATEGORIES: &str = "cash_categories";
}

/// Row of every sheet title.
pub(super) const TITLE_ROW: u32 = 0;
/// Header row of input and summary tables (Excel row 3).
pub(super) const HEADER_ROW: u32 = 2;
/// First record row below the header (Excel row 4).
pub(super) const DATA_START_ROW: u32 = 3;

/// Budgeted monthly revenue placeholder.
pub(super) const MONTHLY_BUDGET: f64 = 500_000.0;
/// Cash balance at the start of month 1.
pub(super) const OPENING_BALANCE: f64 = 1_000_000.0;
/// Closing balances below this are flagged.
pub const CASH_ALERT_THRESHOLD: u32 = 500_000;

/// Write a title into A1 and merge it across `last_col`.
pub(super) fn write_title(
    sheet: &mut Sheet,
    title: &str,
    last_col: u16,
    style: CellStyle,
) -> GeneratorResult<()> {
    sheet.put(TITLE_ROW, 0, Cell::text(title).styled(style))?;
    sheet.merge(CellRange::row_span(TITLE_ROW, 0, last_col))
}

/// Write `headers` left to right in the header style.
pub(super) fn write_headers(
    sheet: &mut Sheet,
    row: u32,
    first_col: u16,
    headers: &[&str],
    palette: &Palette,
) -> GeneratorResult<()> {
    sheet.put_row(
        row,
        first_col,
        headers
            .iter()
            .map(|header| Cell::text(*header).styled(palette.header)),
    )
}

/// Apply the same width to consecutive columns starting at A.
pub(super) fn set_widths(sheet: &mut Sheet, widths: &[f64]) -> GeneratorResult<()> {
    for (col, width) in widths.iter().enumerate() {
        sheet.set_column_width(cast::usize_to_u16_column(col)?, *width)?;
    }
    Ok(())
}

/// Zero-based row of the `index`-th record below `first_row`.
pub(super) fn record_row(first_row: u32, index: usize) -> GeneratorResult<u32> {
    let offset = cast::usize_to_u32_row(index)?;
    first_row
        .checked_add(offset)
        .ok_or_else(|| GeneratorError::Generation(format!("Record {index} is out of range")))
}

pub(super) fn sample_date((year, month, day): SampleDate) -> GeneratorResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        GeneratorError::Generation(format!("Invalid sample date {year}-{month:02}-{day:02}"))
    })
}

/// Look up a label by index, failing with context instead of panicking.
pub(super) fn pick<'a, T>(items: &'a [T], index: usize, what: &str) -> GeneratorResult<&'a T> {
    items.get(index).ok_or_else(|| {
        GeneratorError::Generation(format!(
            "Sample refers to {what} #{index}, but only {} exist",
            items.len()
        ))
    })
}

impl TemplateBuilder {
    /// Last zero-based row an input sheet prepares for `samples` records.
    ///
    /// Sample rows only in the source layout, otherwise the configured
    /// number of entry rows.
    pub(super) fn last_entry_row(&self, samples: usize) -> GeneratorResult<u32> {
        let rows = if self.entry_rows_enabled() {
            cast::usize_to_u32_row(samples)?.max(self.entry_rows)
        } else {
            cast::usize_to_u32_row(samples)?
        };
        record_row(DATA_START_ROW, rows.saturating_sub(1) as usize)
    }

    /// Rows after the samples that only get guarded formulas.
    pub(super) fn blank_entry_rows(
        &self,
        samples: usize,
    ) -> GeneratorResult<std::ops::RangeInclusive<u32>> {
        let first = record_row(DATA_START_ROW, samples)?;
        Ok(first..=self.last_entry_row(samples)?)
    }

    /// Gridlines and header freezing shared by all input sheets.
    pub(super) fn finish_input_sheet(&self, sheet: &mut Sheet) {
        sheet.hide_gridlines();
        if self.freeze_headers() {
            sheet.freeze_panes(DATA_START_ROW, 0);
        }
    }
}

/// Whole-column reference into another sheet, e.g. `売上入力!E:E`.
pub(super) fn column_of(sheet: &str, col: u16) -> String {
    qualified(sheet, &whole_column(col))
}

/// Month of the date in column A of a sample row.
pub(super) fn month_of_date(row: u32) -> Cell {
    Cell::formula(format!("MONTH(A{})", row + 1))
}

/// Month formula for a blank entry row; stays empty until a date is typed.
pub(super) fn guarded_month_of_date(row: u32) -> Cell {
    let n = row + 1;
    Cell::formula(format!("IF(A{n}=\"\",\"\",MONTH(A{n}))"))
}

/// Quote text for use as a string literal inside a formula.
pub(super) fn string_literal(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_literal_escapes_quotes() {
        assert_eq!(string_literal("入金"), "\"入金\"");
        assert_eq!(string_literal("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_month_formulas() {
        assert_eq!(month_of_date(3).formula_text(), Some("=MONTH(A4)"));
        assert_eq!(
            guarded_month_of_date(10).formula_text(),
            Some("=IF(A11=\"\",\"\",MONTH(A11))")
        );
        assert_eq!(column_of("売上入力", 4), "売上入力!E:E");
        assert_eq!(column_of("Sales-Input", 1), "'Sales-Input'!B:B");
    }

    #[test]
    fn test_sample_date_rejects_impossible_dates() {
        assert!(sample_date((2025, 1, 5)).is_ok());
        assert!(sample_date((2025, 2, 30)).is_err());
    }

    #[test]
    fn test_pick_reports_bad_index() {
        let items = ["a", "b"];
        assert_eq!(pick(&items, 1, "vehicle").ok(), Some(&"b"));
        let err = pick(&items, 5, "vehicle").expect_err("out of range");
        assert!(err.to_string().contains("vehicle #5"));
    }

    #[test]
    fn test_entry_rows_follow_layout() {
        let builder = TemplateBuilder::new();
        assert_eq!(builder.last_entry_row(3).ok(), Some(102));
        assert_eq!(builder.blank_entry_rows(3).ok(), Some(6..=102));

        let builder = builder.with_entry_rows(None);
        assert_eq!(builder.last_entry_row(3).ok(), Some(5));
        assert!(builder.blank_entry_rows(3).map(|r| r.is_empty()).unwrap_or(false));
    }

    #[test]
    fn test_title_is_merged() {
        let mut sheet = Sheet::new("x");
        write_title(&mut sheet, "Title", 5, CellStyle::bold()).expect("title");
        assert_eq!(sheet.merges(), &[CellRange::row_span(0, 0, 5)]);
        assert_eq!(sheet.cell_at("A1").and_then(Cell::as_text), Some("Title"));
    }
}
