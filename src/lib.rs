//! # Transport Workbook
//!
//! Generates the management workbook of a small transport company: a master
//! sheet of partners, vehicles and drivers, four data-entry sheets, three
//! formula-driven reports and a dashboard.
//!
//! The workbook holds no business logic of its own beyond spreadsheet
//! formulas. Everything is computed by the spreadsheet application when the
//! file is opened, so the generator is a pure function of its options.
//!
//! ## Sheets
//!
//! | Tab | Content |
//! |---|---|
//! | Dashboard | KPIs, warnings and vehicle ranking for one month |
//! | Master | Partner, vehicle and driver lookup tables |
//! | Sales / Expense / Labor / Cash input | Sample rows plus dropdown-validated entry rows |
//! | Profit-and-Loss | Monthly statement with annual totals |
//! | Per-Vehicle P&L | Revenue, expense and labor per vehicle |
//! | Cash-Flow Table | Opening, inflow, outflow and closing balance per month |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use transport_workbook::{Locale, TemplateBuilder};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     TemplateBuilder::new()
//!         .with_locale(Locale::English)
//!         .with_focus_month(3)
//!         .generate_file(Path::new("transport_management_v1.0.xlsx"))?;
//!     Ok(())
//! }
//! ```
//!
//! [`TemplateBuilder::build`] returns the in-memory [`model::Document`]
//! instead, which is what the tests inspect.

pub mod cli;
pub mod generator;
pub mod locale;
pub mod model;

pub use generator::excel::DEFAULT_ENTRY_ROWS;
pub use generator::{Generator, GeneratorError, GeneratorResult, TemplateBuilder, TemplateFeatures};
pub use locale::{Labels, Locale};
pub use model::Document;
