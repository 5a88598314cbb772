use super::super::generator::TemplateBuilder;
use super::super::palette::Palette;
use super::{
    DATA_START_ROW, HEADER_ROW, column_of, expense, labor, record_row, sales, write_headers,
    write_title,
};
use crate::generator::traits::GeneratorResult;
use crate::model::reference::column_name;
use crate::model::{Cell, CellRange, Document, Sheet, num_format};
use tracing::debug;

const CODE_COL: u16 = 0;
const PROFIT_COL: u16 = 4;
/// Distinct profit rank, one column right of the margin.
const RANK_COL: u16 = 6;

/// Vehicle codes of the first and last vehicle rows (`A4:A8` for five).
pub(super) fn code_range(vehicles: usize) -> GeneratorResult<CellRange> {
    table_column(CODE_COL, vehicles)
}

/// Per-vehicle profit cells (`E4:E8` for five).
pub(super) fn profit_range(vehicles: usize) -> GeneratorResult<CellRange> {
    table_column(PROFIT_COL, vehicles)
}

/// Per-vehicle profit ranks (`G4:G8` for five).
pub(super) fn rank_range(vehicles: usize) -> GeneratorResult<CellRange> {
    table_column(RANK_COL, vehicles)
}

fn table_column(col: u16, vehicles: usize) -> GeneratorResult<CellRange> {
    let last = record_row(DATA_START_ROW, vehicles.saturating_sub(1))?;
    Ok(CellRange::column_span(col, DATA_START_ROW, last))
}

fn amount(formula: String) -> Cell {
    Cell::formula(formula).with_format(num_format::INTEGER)
}

/// Rank of the profit in row `row`, 1 for the largest. Equal profits rank in
/// table order, so every vehicle gets its own rank.
fn profit_rank(row: u32, profits: &CellRange) -> Cell {
    let n = row + 1;
    let first = profits.first.to_absolute_a1();
    Cell::formula(format!(
        "COUNTIF({},\">\"&E{n})+COUNTIF({first}:E{n},E{n})",
        profits.to_absolute_a1()
    ))
}

fn ratio(row: u32) -> Cell {
    let n = row + 1;
    Cell::formula(format!("IF(B{n}=0,0,E{n}/B{n})")).with_format(num_format::PERCENT_1DP)
}

impl TemplateBuilder {
    /// Build the per-vehicle P&L: one row per master vehicle plus a totals
    /// row one blank row below.
    pub(crate) fn build_vehicle_sheet(
        &self,
        doc: &mut Document,
        palette: &Palette,
    ) -> GeneratorResult<()> {
        let labels = &self.labels.vehicle;
        let names = &self.labels.sheet_names;
        let vehicles = self.labels.master.vehicles.rows;
        let mut sheet = Sheet::new(names.vehicle_pl);
        sheet.hide_gridlines();

        write_title(&mut sheet, labels.title, 5, palette.title)?;
        write_headers(&mut sheet, HEADER_ROW, 0, &labels.headers, palette)?;

        let sales_vehicle = column_of(names.sales, sales::VEHICLE_COL);
        let sales_amount = column_of(names.sales, sales::AMOUNT_COL);
        let expense_vehicle = column_of(names.expense, expense::VEHICLE_COL);
        let expense_amount = column_of(names.expense, expense::AMOUNT_COL);
        let labor_vehicle = column_of(names.labor, labor::VEHICLE_COL);
        let labor_allocated = column_of(names.labor, labor::ALLOCATED_COL);

        for (index, (code, _)) in vehicles.iter().enumerate() {
            let row = record_row(DATA_START_ROW, index)?;
            let n = row + 1;
            sheet.put_row(
                row,
                CODE_COL,
                [
                    Cell::text(*code),
                    amount(format!("SUMIF({sales_vehicle},A{n},{sales_amount})")),
                    amount(format!("SUMIF({expense_vehicle},A{n},{expense_amount})")),
                    amount(format!("SUMIF({labor_vehicle},A{n},{labor_allocated})")),
                    amount(format!("B{n}-C{n}-D{n}")),
                    ratio(row),
                ],
            )?;
        }

        if self.vehicle_ranking() {
            sheet.put(HEADER_ROW, RANK_COL, Cell::text(labels.rank).styled(palette.header))?;
            let profits = profit_range(vehicles.len())?;
            for index in 0..vehicles.len() {
                let row = record_row(DATA_START_ROW, index)?;
                sheet.put(row, RANK_COL, profit_rank(row, &profits))?;
            }
            sheet.set_column_width(RANK_COL, 10.0)?;
        }

        let first = DATA_START_ROW + 1;
        let last = record_row(DATA_START_ROW, vehicles.len().saturating_sub(1))? + 1;
        let total_row = last + 1;
        sheet.put(total_row, 0, Cell::text(labels.total).styled(palette.label))?;
        for col in 1..PROFIT_COL + 1 {
            let x = column_name(col);
            sheet.put(total_row, col, amount(format!("SUM({x}{first}:{x}{last})")))?;
        }
        sheet.put(total_row, PROFIT_COL + 1, ratio(total_row))?;

        for col in 0..=PROFIT_COL + 1 {
            sheet.set_column_width(col, 15.0)?;
        }

        debug!(
            sheet = sheet.name(),
            vehicles = vehicles.len(),
            cells = sheet.cell_count(),
            "Built per-vehicle sheet"
        );
        doc.add_sheet(sheet)
    }
}
