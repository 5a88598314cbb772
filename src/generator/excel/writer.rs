//! Serialise a [`Document`] with `rust_xlsxwriter`.

use super::super::traits::{GeneratorError, GeneratorResult};
use crate::model::{
    Cell, CellRef, CellStyle, CellValue, Comparison, Document, Highlight, ListSource, Sheet,
    num_format,
};
use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{
    Color, ConditionalFormatCell, ConditionalFormatCellRule, DataValidation, DocProperties,
    ExcelDateTime, Format, FormatAlign, FormatBorder, FormatPattern, Formula, Workbook, Worksheet,
};
use std::collections::{BTreeSet, HashMap};

/// Creation date stamped into the document properties. Fixed so identical
/// documents serialise to identical bytes.
const CREATION_DATE: (u16, u8, u8) = (2025, 1, 1);

/// Render the document as xlsx bytes.
///
/// # Errors
///
/// Returns [`GeneratorError::Generation`] if the document cannot be mapped
/// onto a workbook.
pub(super) fn write_document(doc: &Document) -> GeneratorResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    let (year, month, day) = CREATION_DATE;
    let created = ExcelDateTime::from_ymd(year, month, day)?;
    workbook.set_properties(&DocProperties::new().set_creation_datetime(&created));

    let validations = build_validations(doc)?;

    for sheet in doc.sheets() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name()).map_err(|e| {
            GeneratorError::Generation(format!("Invalid sheet name '{}': {e}", sheet.name()))
        })?;
        write_sheet(worksheet, sheet, &validations)?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| GeneratorError::Generation(format!("Failed to save workbook: {e}")))
}

/// One `DataValidation` per named list, shared by every range it is attached to.
fn build_validations(doc: &Document) -> GeneratorResult<HashMap<&str, DataValidation>> {
    let mut built = HashMap::new();
    for list in doc.validation_lists() {
        let validation = match &list.source {
            ListSource::Inline(options) => {
                DataValidation::new()
                    .allow_list_strings(options.as_slice())
                    .map_err(|e| {
                        GeneratorError::Generation(format!(
                            "Validation list '{}' is invalid: {e}",
                            list.name
                        ))
                    })?
            }
            ListSource::Range { formula, .. } => {
                DataValidation::new().allow_list_formula(Formula::new(formula))
            }
        };
        built.insert(list.name.as_str(), validation);
    }
    Ok(built)
}

fn write_sheet(
    worksheet: &mut Worksheet,
    sheet: &Sheet,
    validations: &HashMap<&str, DataValidation>,
) -> GeneratorResult<()> {
    let anchors: BTreeSet<CellRef> = sheet.merges().iter().map(|m| m.first).collect();

    // Merged ranges carry the text of their top-left cell.
    for range in sheet.merges() {
        let (text, format) = match sheet.cell(range.first.row, range.first.col) {
            Some(cell) => (
                cell.as_text().unwrap_or_default(),
                cell_format(&cell.style, cell.num_format.as_deref()),
            ),
            None => ("", Format::new()),
        };
        worksheet.merge_range(
            range.first.row,
            range.first.col,
            range.last.row,
            range.last.col,
            text,
            &format,
        )?;
    }

    for (at, cell) in sheet.cells() {
        if anchors.contains(&at) {
            continue;
        }
        write_cell(worksheet, at, cell)?;
    }

    for (col, width) in sheet.column_widths() {
        worksheet.set_column_width(col, width)?;
    }

    if !sheet.shows_gridlines() {
        worksheet.set_screen_gridlines(false);
    }

    if let Some(at) = sheet.frozen_at() {
        worksheet.set_freeze_panes(at.row, at.col)?;
    }

    for target in sheet.validations() {
        let validation = validations.get(target.list.as_str()).ok_or_else(|| {
            GeneratorError::Generation(format!(
                "Sheet '{}' attaches unknown validation list '{}'",
                sheet.name(),
                target.list
            ))
        })?;
        let range = target.range;
        worksheet.add_data_validation(
            range.first.row,
            range.first.col,
            range.last.row,
            range.last.col,
            validation,
        )?;
    }

    for rule in sheet.conditional_rules() {
        let threshold = rule.threshold;
        let condition = match rule.comparison {
            Comparison::LessThan => ConditionalFormatCellRule::LessThan(threshold),
            Comparison::LessThanOrEqual => ConditionalFormatCellRule::LessThanOrEqualTo(threshold),
            Comparison::GreaterThan => ConditionalFormatCellRule::GreaterThan(threshold),
            Comparison::GreaterThanOrEqual => {
                ConditionalFormatCellRule::GreaterThanOrEqualTo(threshold)
            }
            Comparison::EqualTo => ConditionalFormatCellRule::EqualTo(threshold),
            Comparison::NotEqualTo => ConditionalFormatCellRule::NotEqualTo(threshold),
        };
        let conditional = ConditionalFormatCell::new()
            .set_rule(condition)
            .set_format(highlight_format(rule.highlight));
        let range = rule.range;
        worksheet.add_conditional_format(
            range.first.row,
            range.first.col,
            range.last.row,
            range.last.col,
            &conditional,
        )?;
    }

    Ok(())
}

fn write_cell(worksheet: &mut Worksheet, at: CellRef, cell: &Cell) -> GeneratorResult<()> {
    let format = cell_format(&cell.style, cell.num_format.as_deref());
    let (row, col) = (at.row, at.col);

    match &cell.value {
        CellValue::Text(text) if cell.style.is_plain() && cell.num_format.is_none() => {
            worksheet.write_string(row, col, text)?;
        }
        CellValue::Text(text) => {
            worksheet.write_string_with_format(row, col, text, &format)?;
        }
        CellValue::Number(number) => {
            worksheet.write_number_with_format(row, col, *number, &format)?;
        }
        CellValue::Date(date) => {
            let format = if cell.num_format.is_some() {
                format
            } else {
                format.set_num_format(num_format::DATE)
            };
            worksheet.write_datetime_with_format(row, col, &excel_date(*date)?, &format)?;
        }
        CellValue::Formula(formula) => {
            worksheet.write_formula_with_format(row, col, formula.as_str(), &format)?;
        }
    }
    Ok(())
}

fn excel_date(date: NaiveDate) -> GeneratorResult<ExcelDateTime> {
    let out_of_range = || GeneratorError::Generation(format!("Date {date} cannot be stored"));
    let year = u16::try_from(date.year()).map_err(|_| out_of_range())?;
    let month = u8::try_from(date.month()).map_err(|_| out_of_range())?;
    let day = u8::try_from(date.day()).map_err(|_| out_of_range())?;
    Ok(ExcelDateTime::from_ymd(year, month, day)?)
}

fn cell_format(style: &CellStyle, num_format: Option<&str>) -> Format {
    let mut format = Format::new();
    if style.bold {
        format = format.set_bold();
    }
    if let Some(size) = style.font_size {
        format = format.set_font_size(size);
    }
    if let Some(color) = style.font_color {
        format = format.set_font_color(Color::RGB(color));
    }
    if let Some(fill) = style.fill {
        format = format.set_background_color(Color::RGB(fill));
    }
    if style.border {
        format = format.set_border(FormatBorder::Thin);
    }
    if style.centered {
        format = format.set_align(FormatAlign::Center);
    }
    if let Some(num_format) = num_format {
        format = format.set_num_format(num_format);
    }
    format
}

fn highlight_format(highlight: Highlight) -> Format {
    match highlight {
        Highlight::FontColor(color) => Format::new().set_font_color(Color::RGB(color)),
        Highlight::Fill(color) => Format::new()
            .set_foreground_color(Color::RGB(color))
            .set_background_color(Color::RGB(color))
            .set_pattern(FormatPattern::Solid),
    }
}
