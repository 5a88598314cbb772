use super::{
    CashFlowLabels, CashLabels, CashSample, DashboardLabels, ExpenseLabels, ExpenseSample,
    LaborLabels, LaborSample, Labels, MasterLabels, MasterTable, ProfitLossLabels, SalesLabels,
    SalesSample, SheetNames, VehicleLabels,
};

pub(super) fn labels() -> Labels {
    Labels {
        sheet_names: SheetNames {
            dashboard: "Dashboard",
            master: "Master",
            sales: "Sales-Input",
            expense: "Expense-Input",
            labor: "Labor-Input",
            cash: "Cash-Input",
            profit_loss: "Profit-and-Loss",
            vehicle_pl: "Per-Vehicle-P&L",
            cash_flow: "Cash-Flow-Table",
        },
        output_file_name: "transport_management_v1.0.xlsx",
        done_message: "✅ Workbook created",
        item: "Item",
        months: [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
        annual_total: "Annual Total",
        currency_format: "\"¥\"#,##0",
        master: MasterLabels {
            title: "Master Data",
            partners: MasterTable {
                caption: "Business Partners",
                code_header: "Partner Code",
                name_header: "Partner Name",
                rows: &[
                    ("C001", "A Transport Co., Ltd."),
                    ("C002", "B Logistics Center"),
                    ("C003", "C Manufacturing Plant"),
                    ("C004", "D Trading"),
                    ("C005", "E Warehouse"),
                ],
            },
            vehicles: MasterTable {
                caption: "Vehicles",
                code_header: "Vehicle No.",
                name_header: "Vehicle Type",
                rows: &[
                    ("V001", "2t truck"),
                    ("V002", "4t truck"),
                    ("V003", "4t truck"),
                    ("V004", "10t truck"),
                    ("V005", "10t truck"),
                ],
            },
            drivers: MasterTable {
                caption: "Drivers",
                code_header: "Employee No.",
                name_header: "Driver Name",
                rows: &[
                    ("D001", "Taro Tanaka"),
                    ("D002", "Jiro Sato"),
                    ("D003", "Saburo Suzuki"),
                    ("D004", "Shiro Takahashi"),
                    ("D005", "Goro Yamada"),
                ],
            },
        },
        sales: SalesLabels {
            title: "Sales Entry",
            headers: ["Date", "Month", "Partner", "Vehicle No.", "Sales Amount", "Note"],
            samples: &[
                SalesSample {
                    date: (2025, 1, 5),
                    partner: 0,
                    vehicle: 0,
                    amount: 150_000.0,
                    note: "Scheduled run",
                },
                SalesSample {
                    date: (2025, 1, 10),
                    partner: 1,
                    vehicle: 1,
                    amount: 200_000.0,
                    note: "Special run",
                },
                SalesSample {
                    date: (2025, 1, 15),
                    partner: 2,
                    vehicle: 2,
                    amount: 180_000.0,
                    note: "",
                },
            ],
        },
        expense: ExpenseLabels {
            title: "Expense Entry",
            headers: ["Date", "Month", "Vehicle No.", "Category", "Amount", "Note"],
            categories: ["Fuel", "Repair", "Insurance", "Lease", "Other"],
            samples: &[
                ExpenseSample {
                    date: (2025, 1, 5),
                    vehicle: 0,
                    category: 0,
                    amount: 25_000.0,
                    note: "Diesel",
                },
                ExpenseSample {
                    date: (2025, 1, 10),
                    vehicle: 1,
                    category: 1,
                    amount: 50_000.0,
                    note: "Tyre replacement",
                },
                ExpenseSample {
                    date: (2025, 1, 15),
                    vehicle: 0,
                    category: 2,
                    amount: 30_000.0,
                    note: "",
                },
            ],
        },
        labor: LaborLabels {
            title: "Labor Cost Entry",
            headers: [
                "Driver",
                "Vehicle No.",
                "Allocation (%)",
                "Month",
                "Paid Amount",
                "Allocated Amount",
                "Note",
            ],
            samples: &[
                LaborSample {
                    driver: 0,
                    vehicle: 0,
                    ratio_percent: 100,
                    month: 1,
                    paid: 300_000.0,
                    note: "",
                },
                LaborSample {
                    driver: 1,
                    vehicle: 1,
                    ratio_percent: 100,
                    month: 1,
                    paid: 280_000.0,
                    note: "",
                },
                LaborSample {
                    driver: 2,
                    vehicle: 2,
                    ratio_percent: 50,
                    month: 1,
                    paid: 260_000.0,
                    note: "Covers two vehicles",
                },
                LaborSample {
                    driver: 2,
                    vehicle: 3,
                    ratio_percent: 50,
                    month: 1,
                    paid: 260_000.0,
                    note: "Covers two vehicles",
                },
            ],
        },
        cash: CashLabels {
            title: "Cash Entry",
            headers: ["Date", "Month", "In/Out", "Account", "Amount", "Note"],
            directions: ["Deposit", "Withdrawal"],
            categories: [
                "Sales receipt",
                "Fuel payment",
                "Lease payment",
                "Loan repayment",
                "Interest",
                "Other",
            ],
            samples: &[
                CashSample {
                    date: (2025, 1, 1),
                    direction: 0,
                    category: 0,
                    amount: 500_000.0,
                    note: "Previous month receivables",
                },
                CashSample {
                    date: (2025, 1, 10),
                    direction: 1,
                    category: 1,
                    amount: 150_000.0,
                    note: "",
                },
                CashSample {
                    date: (2025, 1, 20),
                    direction: 1,
                    category: 2,
                    amount: 200_000.0,
                    note: "Vehicle lease",
                },
            ],
        },
        profit_loss: ProfitLossLabels {
            title: "Monthly Profit and Loss",
            budget: "Revenue (Budget)",
            actual: "Revenue (Actual)",
            variance: "Variance",
            fuel: "Fuel",
            repair: "Repair",
            insurance: "Insurance",
            lease: "Lease",
            labor: "Labor",
            other: "Other Expenses",
            expense_total: "Total Expenses",
            operating_profit: "Operating Profit",
            operating_margin: "Operating Margin",
        },
        vehicle: VehicleLabels {
            title: "Profit and Loss by Vehicle",
            headers: [
                "Vehicle No.",
                "Revenue",
                "Expenses",
                "Labor",
                "Profit",
                "Margin",
            ],
            total: "Total",
            rank: "Profit Rank",
        },
        cash_flow: CashFlowLabels {
            title: "Monthly Cash Flow",
            opening: "Opening Balance",
            inflow: "Total Inflow",
            outflow: "Total Outflow",
            closing: "Closing Balance",
        },
        dashboard: DashboardLabels {
            title: "Management Dashboard",
            status_caption: "Current Position",
            revenue: "Revenue this month:",
            profit: "Operating profit this month:",
            margin: "Operating margin this month:",
            cash: "Current cash balance:",
            warnings_caption: "Warnings",
            loss_warning: "⚠ Operating loss this month",
            cash_warning: "⚠ Cash balance is below ¥500,000",
            ranking_caption: "Top 3 Vehicles by Profit",
            ranking_headers: ["Rank", "Vehicle No.", "Profit"],
            charts_caption: "Charts",
            charts_note: "* Insert the following charts in Excel",
            chart_names: [
                "1. Monthly profit trend (line)",
                "2. Monthly cash balance trend (line)",
                "3. Profit by vehicle (bar)",
            ],
        },
    }
}
