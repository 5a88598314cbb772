//! Workbook generation.

pub mod excel;
pub mod traits;

pub use excel::{TemplateBuilder, TemplateFeatures};
pub use traits::{Generator, GeneratorError, GeneratorResult};
