use super::super::generator::TemplateBuilder;
use super::super::palette::Palette;
use super::{
    CASH_ALERT_THRESHOLD, HEADER_ROW, OPENING_BALANCE, cash, column_of, pick, string_literal,
    write_title,
};
use crate::generator::traits::GeneratorResult;
use crate::model::reference::column_name;
use crate::model::{Cell, CellRange, Comparison, ConditionalRule, Document, Sheet, num_format};
use tracing::debug;

const OPENING_ROW: u32 = 3;
const INFLOW_ROW: u32 = 4;
const OUTFLOW_ROW: u32 = 5;
pub(super) const CLOSING_ROW: u32 = 6;

const LAST_MONTH_COL: u16 = 12;

fn amount(formula: String) -> Cell {
    Cell::formula(formula).with_format(num_format::INTEGER)
}

impl TemplateBuilder {
    pub(crate) fn build_cash_flow_sheet(
        &self,
        doc: &mut Document,
        palette: &Palette,
    ) -> GeneratorResult<()> {
        let labels = &self.labels.cash_flow;
        let mut sheet = Sheet::new(self.labels.sheet_names.cash_flow);
        sheet.hide_gridlines();

        write_title(&mut sheet, labels.title, 13, palette.title)?;

        sheet.put(HEADER_ROW, 0, Cell::text(self.labels.item).styled(palette.header))?;
        for (col, month) in (1u16..).zip(self.labels.months) {
            sheet.put(HEADER_ROW, col, Cell::text(month).styled(palette.header))?;
        }

        for (row, text) in [
            (OPENING_ROW, labels.opening),
            (INFLOW_ROW, labels.inflow),
            (OUTFLOW_ROW, labels.outflow),
            (CLOSING_ROW, labels.closing),
        ] {
            sheet.put(row, 0, Cell::text(text).styled(palette.label))?;
        }

        for month in self.filled_months() {
            self.write_cash_month(&mut sheet, month)?;
        }

        sheet.add_conditional_rule(ConditionalRule {
            range: CellRange::row_span(CLOSING_ROW, 1, LAST_MONTH_COL),
            comparison: Comparison::LessThan,
            threshold: f64::from(CASH_ALERT_THRESHOLD),
            highlight: palette.alert,
        });

        sheet.set_column_width(0, 15.0)?;
        for col in 1..=LAST_MONTH_COL {
            sheet.set_column_width(col, 12.0)?;
        }

        debug!(
            sheet = sheet.name(),
            cells = sheet.cell_count(),
            "Built cash flow sheet"
        );
        doc.add_sheet(sheet)
    }

    /// Month 1 opens with the fixed balance; later months carry over the
    /// previous closing balance.
    fn write_cash_month(&self, sheet: &mut Sheet, month: u8) -> GeneratorResult<()> {
        let labels = &self.labels.cash;
        let input = self.labels.sheet_names.cash;
        let col = u16::from(month);
        let x = column_name(col);

        let opening = if month == 1 {
            Cell::number(OPENING_BALANCE).with_format(num_format::INTEGER)
        } else {
            amount(format!("{}{}", column_name(col - 1), CLOSING_ROW + 1))
        };
        sheet.put(OPENING_ROW, col, opening)?;

        let amounts = column_of(input, cash::AMOUNT_COL);
        let months = column_of(input, cash::MONTH_COL);
        let directions = column_of(input, cash::DIRECTION_COL);
        for (row, direction) in [(INFLOW_ROW, 0), (OUTFLOW_ROW, 1)] {
            let direction = string_literal(pick(&labels.directions, direction, "cash direction")?);
            sheet.put(
                row,
                col,
                amount(format!(
                    "SUMIFS({amounts},{months},{month},{directions},{direction})"
                )),
            )?;
        }

        sheet.put(
            CLOSING_ROW,
            col,
            amount(format!(
                "{x}{}+{x}{}-{x}{}",
                OPENING_ROW + 1,
                INFLOW_ROW + 1,
                OUTFLOW_ROW + 1
            )),
        )
    }
}
