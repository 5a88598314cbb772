use super::super::generator::TemplateBuilder;
use super::super::palette::Palette;
use super::{
    DATA_START_ROW, HEADER_ROW, lists, pick, record_row, set_widths, write_headers, write_title,
};
use crate::generator::traits::GeneratorResult;
use crate::model::{Cell, CellRange, Document, Sheet, num_format};
use tracing::debug;

const DRIVER_COL: u16 = 0;
pub(super) const VEHICLE_COL: u16 = 1;
pub(super) const MONTH_COL: u16 = 3;
pub(super) const ALLOCATED_COL: u16 = 5;

/// Paid amount times allocation ratio.
fn allocation(row: u32) -> Cell {
    let n = row + 1;
    Cell::formula(format!("E{n}*C{n}")).with_format(num_format::INTEGER)
}

fn guarded_allocation(row: u32) -> Cell {
    let n = row + 1;
    Cell::formula(format!("IF(E{n}=\"\",\"\",E{n}*C{n})")).with_format(num_format::INTEGER)
}

impl TemplateBuilder {
    /// Build the labor input sheet.
    ///
    /// A driver who covers several vehicles gets one row per vehicle with a
    /// partial ratio; the allocated column is what the summaries add up.
    pub(crate) fn build_labor_sheet(
        &self,
        doc: &mut Document,
        palette: &Palette,
    ) -> GeneratorResult<()> {
        let labels = &self.labels.labor;
        let master = &self.labels.master;
        let mut sheet = Sheet::new(self.labels.sheet_names.labor);

        write_title(&mut sheet, labels.title, 6, palette.title)?;
        write_headers(&mut sheet, HEADER_ROW, 0, &labels.headers, palette)?;

        for (index, sample) in labels.samples.iter().enumerate() {
            let row = record_row(DATA_START_ROW, index)?;
            let (_, driver) = pick(master.drivers.rows, sample.driver, "driver")?;
            let (vehicle, _) = pick(master.vehicles.rows, sample.vehicle, "vehicle")?;

            let mut cells = vec![
                Cell::text(*driver),
                Cell::text(*vehicle),
                Cell::number(f64::from(sample.ratio_percent) / 100.0)
                    .with_format(num_format::PERCENT),
                Cell::number(f64::from(sample.month)),
                Cell::number(sample.paid).with_format(num_format::INTEGER),
                allocation(row),
            ];
            if !sample.note.is_empty() {
                cells.push(Cell::text(sample.note));
            }
            sheet.put_row(row, 0, cells)?;
        }

        for row in self.blank_entry_rows(labels.samples.len())? {
            sheet.put(row, ALLOCATED_COL, guarded_allocation(row))?;
        }

        let last = self.last_entry_row(labels.samples.len())?;
        sheet.attach_validation(
            lists::DRIVER_NAMES,
            CellRange::column_span(DRIVER_COL, DATA_START_ROW, last),
        );
        sheet.attach_validation(
            lists::VEHICLE_CODES,
            CellRange::column_span(VEHICLE_COL, DATA_START_ROW, last),
        );

        set_widths(&mut sheet, &[15.0, 15.0, 12.0, 8.0, 15.0, 15.0, 20.0])?;
        self.finish_input_sheet(&mut sheet);

        debug!(
            sheet = sheet.name(),
            cells = sheet.cell_count(),
            "Built labor input sheet"
        );
        doc.add_sheet(sheet)
    }
}
