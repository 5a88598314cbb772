use super::super::generator::TemplateBuilder;
use super::super::palette::Palette;
use super::{
    DATA_START_ROW, HEADER_ROW, guarded_month_of_date, lists, month_of_date, pick, record_row,
    sample_date, set_widths, write_headers, write_title,
};
use crate::generator::traits::GeneratorResult;
use crate::model::{Cell, CellRange, Document, Sheet, ValidationList, num_format};
use tracing::debug;

pub(super) const MONTH_COL: u16 = 1;
pub(super) const VEHICLE_COL: u16 = 2;
pub(super) const CATEGORY_COL: u16 = 3;
pub(super) const AMOUNT_COL: u16 = 4;

impl TemplateBuilder {
    pub(crate) fn build_expense_sheet(
        &self,
        doc: &mut Document,
        palette: &Palette,
    ) -> GeneratorResult<()> {
        let labels = &self.labels.expense;
        let vehicles = self.labels.master.vehicles.rows;
        let mut sheet = Sheet::new(self.labels.sheet_names.expense);

        write_title(&mut sheet, labels.title, 5, palette.title)?;
        write_headers(&mut sheet, HEADER_ROW, 0, &labels.headers, palette)?;

        for (index, sample) in labels.samples.iter().enumerate() {
            let row = record_row(DATA_START_ROW, index)?;
            let (vehicle, _) = pick(vehicles, sample.vehicle, "vehicle")?;
            let category = pick(&labels.categories, sample.category, "expense category")?;

            let mut cells = vec![
                Cell::date(sample_date(sample.date)?),
                month_of_date(row),
                Cell::text(*vehicle),
                Cell::text(*category),
                Cell::number(sample.amount).with_format(num_format::INTEGER),
            ];
            if !sample.note.is_empty() {
                cells.push(Cell::text(sample.note));
            }
            sheet.put_row(row, 0, cells)?;
        }

        for row in self.blank_entry_rows(labels.samples.len())? {
            sheet.put(row, MONTH_COL, guarded_month_of_date(row))?;
        }

        doc.define_validation(ValidationList::inline(
            lists::EXPENSE_CATEGORIES,
            labels.categories,
        ))?;

        let last = self.last_entry_row(labels.samples.len())?;
        sheet.attach_validation(
            lists::VEHICLE_CODES,
            CellRange::column_span(VEHICLE_COL, DATA_START_ROW, last),
        );
        sheet.attach_validation(
            lists::EXPENSE_CATEGORIES,
            CellRange::column_span(CATEGORY_COL, DATA_START_ROW, last),
        );

        set_widths(&mut sheet, &[12.0, 8.0, 15.0, 15.0, 15.0, 20.0])?;
        self.finish_input_sheet(&mut sheet);

        debug!(
            sheet = sheet.name(),
            cells = sheet.cell_count(),
            "Built expense input sheet"
        );
        doc.add_sheet(sheet)
    }
}
