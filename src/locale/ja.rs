use super::{
    CashFlowLabels, CashLabels, CashSample, DashboardLabels, ExpenseLabels, ExpenseSample,
    LaborLabels, LaborSample, Labels, MasterLabels, MasterTable, ProfitLossLabels, SalesLabels,
    SalesSample, SheetNames, VehicleLabels,
};

pub(super) fn labels() -> Labels {
    Labels {
        sheet_names: SheetNames {
            dashboard: "ダッシュボード",
            master: "マスタ",
            sales: "売上入力",
            expense: "経費入力",
            labor: "人件費入力",
            cash: "資金繰り入力",
            profit_loss: "損益計算表",
            vehicle_pl: "車両別収支",
            cash_flow: "資金繰り表",
        },
        output_file_name: "運送会社経営管理_v1.0.xlsx",
        done_message: "✅ Excelファイルを作成しました",
        item: "項目",
        months: [
            "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
        ],
        annual_total: "年間合計",
        currency_format: "#,##0\"円\"",
        master: MasterLabels {
            title: "マスタデータ管理",
            partners: MasterTable {
                caption: "取引先一覧",
                code_header: "取引先コード",
                name_header: "取引先名",
                rows: &[
                    ("C001", "A運送株式会社"),
                    ("C002", "B物流センター"),
                    ("C003", "C製造工場"),
                    ("C004", "D商事"),
                    ("C005", "E倉庫"),
                ],
            },
            vehicles: MasterTable {
                caption: "車両番号一覧",
                code_header: "車両番号",
                name_header: "車種",
                rows: &[
                    ("車両001", "2tトラック"),
                    ("車両002", "4tトラック"),
                    ("車両003", "4tトラック"),
                    ("車両004", "10tトラック"),
                    ("車両005", "10tトラック"),
                ],
            },
            drivers: MasterTable {
                caption: "ドライバー一覧",
                code_header: "社員番号",
                name_header: "ドライバー名",
                rows: &[
                    ("D001", "田中太郎"),
                    ("D002", "佐藤次郎"),
                    ("D003", "鈴木三郎"),
                    ("D004", "高橋四郎"),
                    ("D005", "山田五郎"),
                ],
            },
        },
        sales: SalesLabels {
            title: "売上データ入力",
            headers: ["日付", "月", "取引先名", "車両番号", "売上金額", "備考"],
            samples: &[
                SalesSample {
                    date: (2025, 1, 5),
                    partner: 0,
                    vehicle: 0,
                    amount: 150_000.0,
                    note: "定期便",
                },
                SalesSample {
                    date: (2025, 1, 10),
                    partner: 1,
                    vehicle: 1,
                    amount: 200_000.0,
                    note: "特別便",
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
            title: "経費データ入力",
            headers: ["日付", "月", "車両番号", "経費区分", "金額", "備考"],
            categories: ["燃料費", "修理費", "保険料", "リース料", "その他"],
            samples: &[
                ExpenseSample {
                    date: (2025, 1, 5),
                    vehicle: 0,
                    category: 0,
                    amount: 25_000.0,
                    note: "軽油",
                },
                ExpenseSample {
                    date: (2025, 1, 10),
                    vehicle: 1,
                    category: 1,
                    amount: 50_000.0,
                    note: "タイヤ交換",
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
            title: "人件費データ入力",
            headers: [
                "ドライバー名",
                "車両番号",
                "按分比率(%)",
                "月",
                "支給額",
                "按分額",
                "備考",
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
                    note: "複数車両担当",
                },
                LaborSample {
                    driver: 2,
                    vehicle: 3,
                    ratio_percent: 50,
                    month: 1,
                    paid: 260_000.0,
                    note: "複数車両担当",
                },
            ],
        },
        cash: CashLabels {
            title: "資金繰りデータ入力",
            headers: ["日付", "月", "入金/出金", "科目", "金額", "備考"],
            directions: ["入金", "出金"],
            categories: [
                "売上入金",
                "燃料費支払",
                "リース料支払",
                "借入返済",
                "利息",
                "その他",
            ],
            samples: &[
                CashSample {
                    date: (2025, 1, 1),
                    direction: 0,
                    category: 0,
                    amount: 500_000.0,
                    note: "前月売上回収",
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
                    note: "車両リース",
                },
            ],
        },
        profit_loss: ProfitLossLabels {
            title: "月次損益計算表",
            budget: "売上高（予算）",
            actual: "売上高（実績）",
            variance: "差異",
            fuel: "燃料費",
            repair: "修理費",
            insurance: "保険料",
            lease: "リース料",
            labor: "人件費",
            other: "その他経費",
            expense_total: "経費合計",
            operating_profit: "営業利益",
            operating_margin: "営業利益率",
        },
        vehicle: VehicleLabels {
            title: "車両別収支一覧",
            headers: ["車両番号", "売上高", "経費", "人件費", "利益", "利益率"],
            total: "合計",
            rank: "利益順位",
        },
        cash_flow: CashFlowLabels {
            title: "月次資金繰り表",
            opening: "月初残高",
            inflow: "入金合計",
            outflow: "出金合計",
            closing: "月末残高",
        },
        dashboard: DashboardLabels {
            title: "経営ダッシュボード",
            status_caption: "現在の経営状況",
            revenue: "当月売上高:",
            profit: "当月営業利益:",
            margin: "当月営業利益率:",
            cash: "現在資金残高:",
            warnings_caption: "警告・注意事項",
            loss_warning: "⚠ 当月は赤字です",
            cash_warning: "⚠ 資金残高が50万円を下回っています",
            ranking_caption: "車両別収支TOP3",
            ranking_headers: ["順位", "車両番号", "利益"],
            charts_caption: "グラフ表示エリア",
            charts_note: "※ Excel上でグラフを挿入してください",
            chart_names: [
                "1. 損益推移グラフ（月次）",
                "2. 資金残高推移グラフ（月次）",
                "3. 車両別収支グラフ（棒グラフ）",
            ],
        },
    }
}
