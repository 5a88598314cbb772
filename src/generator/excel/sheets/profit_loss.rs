//! Monthly profit-and-loss statement.
//!
//! Every figure is a formula over the input sheets: revenue and expenses are
//! conditional sums keyed on the month column, labor on the allocated
//! amount. Column B is January, column M December, column N the annual total.

use super::super::generator::TemplateBuilder;
use super::super::palette::Palette;
use super::{
    HEADER_ROW, MONTHLY_BUDGET, column_of, expense, labor, pick, sales, string_literal,
    write_title,
};
use crate::generator::traits::GeneratorResult;
use crate::model::reference::column_name;
use crate::model::{Cell, CellRange, Comparison, ConditionalRule, Document, Sheet, num_format};
use tracing::debug;

const BUDGET_ROW: u32 = 3;
pub(super) const ACTUAL_ROW: u32 = 4;
const VARIANCE_ROW: u32 = 5;
const FUEL_ROW: u32 = 7;
const LABOR_ROW: u32 = 11;
const OTHER_ROW: u32 = 12;
const EXPENSE_TOTAL_ROW: u32 = 13;
pub(super) const PROFIT_ROW: u32 = 15;
pub(super) const MARGIN_ROW: u32 = 16;

/// Column holding the annual total.
const ANNUAL_COL: u16 = 13;

/// Expense category index per expense row; the labor row sits between lease
/// and other.
const EXPENSE_ROWS: [(u32, usize); 5] = [(7, 0), (8, 1), (9, 2), (10, 3), (OTHER_ROW, 4)];

impl TemplateBuilder {
    pub(crate) fn build_profit_loss_sheet(
        &self,
        doc: &mut Document,
        palette: &Palette,
    ) -> GeneratorResult<()> {
        let labels = &self.labels.profit_loss;
        let mut sheet = Sheet::new(self.labels.sheet_names.profit_loss);
        sheet.hide_gridlines();

        write_title(&mut sheet, labels.title, 15, palette.title)?;

        sheet.put(HEADER_ROW, 0, Cell::text(self.labels.item).styled(palette.header))?;
        for (col, month) in (1u16..).zip(self.labels.months) {
            sheet.put(HEADER_ROW, col, Cell::text(month).styled(palette.header))?;
        }
        sheet.put(
            HEADER_ROW,
            ANNUAL_COL,
            Cell::text(self.labels.annual_total).styled(palette.header),
        )?;

        let row_labels = [
            (BUDGET_ROW, labels.budget, false),
            (ACTUAL_ROW, labels.actual, true),
            (VARIANCE_ROW, labels.variance, false),
            (FUEL_ROW, labels.fuel, false),
            (8, labels.repair, false),
            (9, labels.insurance, false),
            (10, labels.lease, false),
            (LABOR_ROW, labels.labor, false),
            (OTHER_ROW, labels.other, false),
            (EXPENSE_TOTAL_ROW, labels.expense_total, true),
            (PROFIT_ROW, labels.operating_profit, true),
            (MARGIN_ROW, labels.operating_margin, false),
        ];
        for (row, text, emphasised) in row_labels {
            let cell = Cell::text(text);
            sheet.put(row, 0, if emphasised { cell.styled(palette.label) } else { cell })?;
        }

        for month in self.filled_months() {
            self.write_month_column(&mut sheet, month)?;
        }
        if self.all_months() {
            write_annual_column(&mut sheet)?;
        }

        sheet.add_conditional_rule(ConditionalRule {
            range: CellRange::row_span(PROFIT_ROW, 1, ANNUAL_COL),
            comparison: Comparison::LessThan,
            threshold: 0.0,
            highlight: palette.negative,
        });

        sheet.set_column_width(0, 20.0)?;
        for col in 1..=ANNUAL_COL {
            sheet.set_column_width(col, 12.0)?;
        }

        debug!(
            sheet = sheet.name(),
            cells = sheet.cell_count(),
            months = self.filled_months().count(),
            "Built profit and loss sheet"
        );
        doc.add_sheet(sheet)
    }

    /// Formulas for one month; `month` doubles as the column index.
    fn write_month_column(&self, sheet: &mut Sheet, month: u8) -> GeneratorResult<()> {
        let names = &self.labels.sheet_names;
        let col = u16::from(month);
        let x = column_name(col);

        let sales_amount = column_of(names.sales, sales::AMOUNT_COL);
        let sales_month = column_of(names.sales, sales::MONTH_COL);
        let expense_amount = column_of(names.expense, expense::AMOUNT_COL);
        let expense_month = column_of(names.expense, expense::MONTH_COL);
        let expense_category = column_of(names.expense, expense::CATEGORY_COL);
        let labor_allocated = column_of(names.labor, labor::ALLOCATED_COL);
        let labor_month = column_of(names.labor, labor::MONTH_COL);

        sheet.put(
            BUDGET_ROW,
            col,
            Cell::number(MONTHLY_BUDGET).with_format(num_format::INTEGER),
        )?;
        sheet.put(
            ACTUAL_ROW,
            col,
            amount(format!("SUMIFS({sales_amount},{sales_month},{month})")),
        )?;
        sheet.put(
            VARIANCE_ROW,
            col,
            amount(format!("{x}{}-{x}{}", ACTUAL_ROW + 1, BUDGET_ROW + 1)),
        )?;

        for (row, category) in EXPENSE_ROWS {
            let category = string_literal(pick(
                &self.labels.expense.categories,
                category,
                "expense category",
            )?);
            sheet.put(
                row,
                col,
                amount(format!(
                    "SUMIFS({expense_amount},{expense_month},{month},{expense_category},{category})"
                )),
            )?;
        }
        sheet.put(
            LABOR_ROW,
            col,
            amount(format!("SUMIFS({labor_allocated},{labor_month},{month})")),
        )?;
        sheet.put(
            EXPENSE_TOTAL_ROW,
            col,
            amount(format!("SUM({x}{}:{x}{})", FUEL_ROW + 1, OTHER_ROW + 1)),
        )?;
        sheet.put(
            PROFIT_ROW,
            col,
            amount(format!("{x}{}-{x}{}", ACTUAL_ROW + 1, EXPENSE_TOTAL_ROW + 1)),
        )?;
        sheet.put(MARGIN_ROW, col, margin(&x))
    }
}

fn amount(formula: String) -> Cell {
    Cell::formula(formula).with_format(num_format::INTEGER)
}

/// Zero-guarded operating margin of column `x`.
fn margin(x: &str) -> Cell {
    Cell::formula(format!(
        "IF({x}{revenue}=0,0,{x}{profit}/{x}{revenue})",
        revenue = ACTUAL_ROW + 1,
        profit = PROFIT_ROW + 1
    ))
    .with_format(num_format::PERCENT_1DP)
}

fn write_annual_column(sheet: &mut Sheet) -> GeneratorResult<()> {
    let first = column_name(1);
    let last = column_name(12);
    let summed = [BUDGET_ROW, ACTUAL_ROW, VARIANCE_ROW]
        .into_iter()
        .chain(EXPENSE_ROWS.iter().map(|(row, _)| *row))
        .chain([LABOR_ROW, EXPENSE_TOTAL_ROW, PROFIT_ROW]);

    for row in summed {
        let n = row + 1;
        sheet.put(row, ANNUAL_COL, amount(format!("SUM({first}{n}:{last}{n})")))?;
    }
    sheet.put(MARGIN_ROW, ANNUAL_COL, margin(&column_name(ANNUAL_COL)))
}
