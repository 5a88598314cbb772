//! Transport management workbook generator.
//!
//! [`TemplateBuilder`] fills a [`crate::model::Document`] one sheet at a
//! time (see `sheets`), and `writer` serialises the finished document with
//! `rust_xlsxwriter`.

mod cast;
mod features;
mod generator;
mod palette;
mod sheets;
mod workbook;
mod writer;

pub use features::TemplateFeatures;
pub use generator::{DEFAULT_ENTRY_ROWS, TemplateBuilder};
pub use palette::{ALERT_PINK, HEADER_FILL, NOTICE_AMBER, Palette, WARNING_RED};
pub use sheets::CASH_ALERT_THRESHOLD;
