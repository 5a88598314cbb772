//! Label sets for the generated workbook.
//!
//! Every piece of text that ends up in a cell (sheet names, headers, sample
//! records, dashboard messages) lives here. Formulas on the summary sheets
//! filter on some of these strings, so the builder always takes them from
//! the same [`Labels`] value it used for the input sheets.

mod en;
mod ja;

use serde::Serialize;
use std::fmt;

/// Language of the generated workbook.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Japanese labels, matching the workbook the template was designed as.
    #[default]
    Japanese,
    English,
}

impl Locale {
    /// Full label set for this locale.
    #[must_use]
    pub fn labels(self) -> Labels {
        match self {
            Locale::Japanese => ja::labels(),
            Locale::English => en::labels(),
        }
    }

    /// Short code used on the command line.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::Japanese => "ja",
            Locale::English => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Names of the nine worksheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetNames {
    pub dashboard: &'static str,
    pub master: &'static str,
    pub sales: &'static str,
    pub expense: &'static str,
    pub labor: &'static str,
    pub cash: &'static str,
    pub profit_loss: &'static str,
    pub vehicle_pl: &'static str,
    pub cash_flow: &'static str,
}

impl SheetNames {
    /// Names in final tab order.
    #[must_use]
    pub fn tab_order(&self) -> [&'static str; 9] {
        [
            self.dashboard,
            self.master,
            self.sales,
            self.expense,
            self.labor,
            self.cash,
            self.profit_loss,
            self.vehicle_pl,
            self.cash_flow,
        ]
    }
}

/// One code → name lookup table on the master sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasterTable {
    pub caption: &'static str,
    pub code_header: &'static str,
    pub name_header: &'static str,
    pub rows: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasterLabels {
    pub title: &'static str,
    pub partners: MasterTable,
    pub vehicles: MasterTable,
    pub drivers: MasterTable,
}

/// Calendar date of a sample record.
pub type SampleDate = (i32, u32, u32);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalesSample {
    pub date: SampleDate,
    /// Index into the master partner table.
    pub partner: usize,
    /// Index into the master vehicle table.
    pub vehicle: usize,
    pub amount: f64,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesLabels {
    pub title: &'static str,
    /// Date, month, partner, vehicle, amount, note.
    pub headers: [&'static str; 6],
    pub samples: &'static [SalesSample],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExpenseSample {
    pub date: SampleDate,
    pub vehicle: usize,
    /// Index into [`ExpenseLabels::categories`].
    pub category: usize,
    pub amount: f64,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseLabels {
    pub title: &'static str,
    /// Date, month, vehicle, category, amount, note.
    pub headers: [&'static str; 6],
    /// Fuel, repair, insurance, lease, other.
    pub categories: [&'static str; 5],
    pub samples: &'static [ExpenseSample],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LaborSample {
    /// Index into the master driver table.
    pub driver: usize,
    pub vehicle: usize,
    /// Allocation ratio in whole percent.
    pub ratio_percent: u8,
    pub month: u8,
    pub paid: f64,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaborLabels {
    pub title: &'static str,
    /// Driver, vehicle, ratio, month, paid, allocated, note.
    pub headers: [&'static str; 7],
    pub samples: &'static [LaborSample],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CashSample {
    pub date: SampleDate,
    /// Index into [`CashLabels::directions`].
    pub direction: usize,
    /// Index into [`CashLabels::categories`].
    pub category: usize,
    pub amount: f64,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashLabels {
    pub title: &'static str,
    /// Date, month, direction, category, amount, note.
    pub headers: [&'static str; 6],
    /// Deposit, withdrawal.
    pub directions: [&'static str; 2],
    pub categories: [&'static str; 6],
    pub samples: &'static [CashSample],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfitLossLabels {
    pub title: &'static str,
    pub budget: &'static str,
    pub actual: &'static str,
    pub variance: &'static str,
    pub fuel: &'static str,
    pub repair: &'static str,
    pub insurance: &'static str,
    pub lease: &'static str,
    pub labor: &'static str,
    pub other: &'static str,
    pub expense_total: &'static str,
    pub operating_profit: &'static str,
    pub operating_margin: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleLabels {
    pub title: &'static str,
    /// Vehicle, revenue, expense, labor, profit, margin.
    pub headers: [&'static str; 6],
    pub total: &'static str,
    /// Header of the distinct profit rank the dashboard ranking looks up.
    pub rank: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashFlowLabels {
    pub title: &'static str,
    pub opening: &'static str,
    pub inflow: &'static str,
    pub outflow: &'static str,
    pub closing: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardLabels {
    pub title: &'static str,
    pub status_caption: &'static str,
    pub revenue: &'static str,
    pub profit: &'static str,
    pub margin: &'static str,
    pub cash: &'static str,
    pub warnings_caption: &'static str,
    pub loss_warning: &'static str,
    pub cash_warning: &'static str,
    pub ranking_caption: &'static str,
    /// Rank, vehicle, profit.
    pub ranking_headers: [&'static str; 3],
    pub charts_caption: &'static str,
    pub charts_note: &'static str,
    pub chart_names: [&'static str; 3],
}

/// Every string the workbook displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Labels {
    pub sheet_names: SheetNames,
    pub output_file_name: &'static str,
    pub done_message: &'static str,
    pub item: &'static str,
    pub months: [&'static str; 12],
    pub annual_total: &'static str,
    /// Number format for yen amounts on the dashboard.
    pub currency_format: &'static str,
    pub master: MasterLabels,
    pub sales: SalesLabels,
    pub expense: ExpenseLabels,
    pub labor: LaborLabels,
    pub cash: CashLabels,
    pub profit_loss: ProfitLossLabels,
    pub vehicle: VehicleLabels,
    pub cash_flow: CashFlowLabels,
    pub dashboard: DashboardLabels,
}
