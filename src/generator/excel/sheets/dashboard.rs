//! Dashboard sheet.
//!
//! Built last because every figure points into the summary sheets, then
//! pinned to the first tab. KPIs and warnings read the focus month column.

use super::super::generator::TemplateBuilder;
use super::super::palette::Palette;
use super::{
    CASH_ALERT_THRESHOLD, cash_flow, profit_loss, string_literal, vehicle, write_headers,
    write_title,
};
use crate::generator::traits::GeneratorResult;
use crate::model::reference::{column_name, qualified};
use crate::model::{Cell, CellRange, CellRef, Comparison, ConditionalRule, Document, Sheet, num_format};
use tracing::debug;

const STATUS_ROW: u32 = 2;
const REVENUE_ROW: u32 = 4;
const PROFIT_ROW: u32 = 5;
const MARGIN_ROW: u32 = 6;
const CASH_ROW: u32 = 7;
const RANKING_CAPTION_ROW: u32 = 10;
const RANKING_HEADER_ROW: u32 = 12;
const RANKED_VEHICLES: u32 = 3;

const VALUE_COL: u16 = 1;
const WARNING_COL: u16 = 3;
const CHART_COL: u16 = 5;

impl TemplateBuilder {
    pub(crate) fn build_dashboard_sheet(
        &self,
        doc: &mut Document,
        palette: &Palette,
    ) -> GeneratorResult<()> {
        let labels = &self.labels.dashboard;
        let names = &self.labels.sheet_names;
        let mut sheet = Sheet::new(names.dashboard);
        sheet.hide_gridlines();

        write_title(&mut sheet, labels.title, 7, palette.dashboard_title)?;
        sheet.put(
            STATUS_ROW,
            0,
            Cell::text(labels.status_caption).styled(palette.subtitle),
        )?;

        // KPI block
        let month = column_name(u16::from(self.focus_month));
        let pl_cell = |row: u32| qualified(names.profit_loss, &format!("{month}{}", row + 1));
        let closing_cash = qualified(
            names.cash_flow,
            &format!("{month}{}", cash_flow::CLOSING_ROW + 1),
        );
        let profit = pl_cell(profit_loss::PROFIT_ROW);
        let currency = self.labels.currency_format;

        let kpis = [
            (REVENUE_ROW, labels.revenue, pl_cell(profit_loss::ACTUAL_ROW), currency),
            (PROFIT_ROW, labels.profit, profit.clone(), currency),
            (
                MARGIN_ROW,
                labels.margin,
                pl_cell(profit_loss::MARGIN_ROW),
                num_format::PERCENT_1DP,
            ),
            (CASH_ROW, labels.cash, closing_cash.clone(), currency),
        ];
        for (row, label, reference, format) in kpis {
            sheet.put_row(
                row,
                0,
                [Cell::text(label), Cell::formula(reference).with_format(format)],
            )?;
        }

        sheet.add_conditional_rule(ConditionalRule {
            range: CellRange::single(CellRef::new(PROFIT_ROW, VALUE_COL)),
            comparison: Comparison::LessThan,
            threshold: 0.0,
            highlight: palette.negative,
        });
        sheet.add_conditional_rule(ConditionalRule {
            range: CellRange::single(CellRef::new(CASH_ROW, VALUE_COL)),
            comparison: Comparison::LessThan,
            threshold: f64::from(CASH_ALERT_THRESHOLD),
            highlight: palette.alert,
        });

        // Warning messages
        sheet.put(
            STATUS_ROW,
            WARNING_COL,
            Cell::text(labels.warnings_caption).styled(palette.notice_banner),
        )?;
        sheet.put(
            REVENUE_ROW,
            WARNING_COL,
            Cell::formula(format!(
                "IF({profit}<0,{},\"\")",
                string_literal(labels.loss_warning)
            ))
            .styled(palette.warning_text),
        )?;
        sheet.put(
            PROFIT_ROW,
            WARNING_COL,
            Cell::formula(format!(
                "IF({closing_cash}<{CASH_ALERT_THRESHOLD},{},\"\")",
                string_literal(labels.cash_warning)
            ))
            .styled(palette.warning_text),
        )?;

        self.write_ranking(&mut sheet, palette)?;

        // Chart callout; the charts themselves are inserted by hand.
        sheet.put(
            STATUS_ROW,
            CHART_COL,
            Cell::text(labels.charts_caption).styled(palette.subtitle),
        )?;
        sheet.put(REVENUE_ROW, CHART_COL, Cell::text(labels.charts_note))?;
        for (row, chart) in (PROFIT_ROW..).zip(labels.chart_names) {
            sheet.put(row, CHART_COL, Cell::text(chart))?;
        }

        for (col, width) in [(0, 20.0), (1, 20.0), (2, 15.0), (3, 35.0)] {
            sheet.set_column_width(col, width)?;
        }

        debug!(
            sheet = sheet.name(),
            focus_month = self.focus_month,
            cells = sheet.cell_count(),
            "Built dashboard sheet"
        );
        doc.insert_sheet(0, sheet)
    }

    /// Top vehicles by profit, looked up through the per-vehicle rank column.
    /// Equal profits are listed in table order.
    fn write_ranking(&self, sheet: &mut Sheet, palette: &Palette) -> GeneratorResult<()> {
        let labels = &self.labels.dashboard;
        sheet.put(
            RANKING_CAPTION_ROW,
            0,
            Cell::text(labels.ranking_caption).styled(palette.subtitle),
        )?;
        write_headers(sheet, RANKING_HEADER_ROW, 0, &labels.ranking_headers, palette)?;

        if !self.vehicle_ranking() {
            return Ok(());
        }

        let vehicles = self.labels.master.vehicles.rows.len();
        let per_vehicle = self.labels.sheet_names.vehicle_pl;
        let profits = qualified(per_vehicle, &vehicle::profit_range(vehicles)?.to_absolute_a1());
        let codes = qualified(per_vehicle, &vehicle::code_range(vehicles)?.to_absolute_a1());
        let ranked = qualified(per_vehicle, &vehicle::rank_range(vehicles)?.to_absolute_a1());

        let ranks = (1..=RANKED_VEHICLES).take(vehicles);
        for (rank, row) in ranks.zip(RANKING_HEADER_ROW + 1..) {
            let n = row + 1;
            sheet.put_row(
                row,
                0,
                [
                    Cell::number(f64::from(rank)),
                    Cell::formula(format!("INDEX({codes},MATCH(A{n},{ranked},0))")),
                    Cell::formula(format!("INDEX({profits},MATCH(A{n},{ranked},0))"))
                        .with_format(num_format::INTEGER),
                ],
            )?;
        }
        Ok(())
    }
}
