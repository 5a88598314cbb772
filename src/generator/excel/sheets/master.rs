use super::super::generator::TemplateBuilder;
use super::super::palette::Palette;
use super::{lists, record_row, write_headers, write_title};
use crate::generator::traits::GeneratorResult;
use crate::locale::MasterTable;
use crate::model::{Cell, CellRange, Document, Sheet, ValidationList};
use tracing::debug;

/// Caption row above each lookup table (Excel row 3).
const CAPTION_ROW: u32 = 2;
/// Header row of each lookup table (Excel row 4).
const TABLE_HEADER_ROW: u32 = 3;
/// First record row (Excel row 5).
const FIRST_RECORD_ROW: u32 = 4;

const PARTNER_COL: u16 = 0;
const VEHICLE_COL: u16 = 3;
const DRIVER_COL: u16 = 6;

/// Rows covered by a table with `len` records.
fn record_span(col: u16, len: usize) -> GeneratorResult<CellRange> {
    let last = record_row(FIRST_RECORD_ROW, len.saturating_sub(1))?;
    Ok(CellRange::column_span(col, FIRST_RECORD_ROW, last))
}

impl TemplateBuilder {
    /// Build the master sheet and register the lists sourced from it.
    pub(crate) fn build_master_sheet(
        &self,
        doc: &mut Document,
        palette: &Palette,
    ) -> GeneratorResult<()> {
        let labels = &self.labels.master;
        let name = self.labels.sheet_names.master;
        let mut sheet = Sheet::new(name);
        sheet.hide_gridlines();

        write_title(&mut sheet, labels.title, 5, palette.title)?;

        for (col, table) in [
            (PARTNER_COL, &labels.partners),
            (VEHICLE_COL, &labels.vehicles),
            (DRIVER_COL, &labels.drivers),
        ] {
            write_table(&mut sheet, col, table, palette)?;
            sheet.set_column_width(col, 15.0)?;
            sheet.set_column_width(col + 1, 20.0)?;
        }

        // Partner and driver dropdowns show names; vehicles are picked by code.
        doc.define_validation(ValidationList::range(
            lists::PARTNER_NAMES,
            name,
            record_span(PARTNER_COL + 1, labels.partners.rows.len())?,
        ))?;
        doc.define_validation(ValidationList::range(
            lists::VEHICLE_CODES,
            name,
            record_span(VEHICLE_COL, labels.vehicles.rows.len())?,
        ))?;
        doc.define_validation(ValidationList::range(
            lists::DRIVER_NAMES,
            name,
            record_span(DRIVER_COL + 1, labels.drivers.rows.len())?,
        ))?;

        debug!(sheet = name, cells = sheet.cell_count(), "Built master sheet");
        doc.add_sheet(sheet)
    }
}

fn write_table(
    sheet: &mut Sheet,
    col: u16,
    table: &MasterTable,
    palette: &Palette,
) -> GeneratorResult<()> {
    sheet.put(CAPTION_ROW, col, Cell::text(table.caption).styled(palette.subtitle))?;
    write_headers(
        sheet,
        TABLE_HEADER_ROW,
        col,
        &[table.code_header, table.name_header],
        palette,
    )?;
    for (index, (code, display)) in table.rows.iter().enumerate() {
        let row = record_row(FIRST_RECORD_ROW, index)?;
        sheet.put_row(row, col, [Cell::text(*code), Cell::text(*display)])?;
    }
    Ok(())
}
