//! In-memory document model.
//!
//! The builder fills a [`Document`] and the workbook writer serialises it.
//! Nothing here knows about the xlsx container; the model only records
//! sheets, cells, formulas, styles, validation lists and conditional rules.

mod cell;
mod document;
pub mod reference;
mod sheet;

pub use cell::{Cell, CellStyle, CellValue, num_format};
pub use document::{Document, ListSource, MAX_SHEET_NAME_LEN, ValidationList};
pub use reference::{CellRange, CellRef};
pub use sheet::{Comparison, ConditionalRule, Highlight, Sheet, ValidationTarget};
