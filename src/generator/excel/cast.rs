use super::super::traits::GeneratorError;
use crate::model::reference::{MAX_COLUMNS, MAX_ROWS};

/// Safely cast usize to u16 for Excel column indices.
/// Excel has a maximum of 16,384 columns (2^14).
pub(super) fn usize_to_u16_column(value: usize) -> Result<u16, GeneratorError> {
    if value >= usize::from(MAX_COLUMNS) {
        return Err(GeneratorError::Generation(format!(
            "Too many columns for Excel: {value} (max: {MAX_COLUMNS})"
        )));
    }

    u16::try_from(value)
        .map_err(|_| GeneratorError::Generation(format!("Column index {value} cannot fit in u16")))
}

/// Safely cast usize to u32 for Excel row indices.
pub(super) fn usize_to_u32_row(value: usize) -> Result<u32, GeneratorError> {
    u32::try_from(value)
        .ok()
        .filter(|row| *row < MAX_ROWS)
        .ok_or_else(|| {
            GeneratorError::Generation(format!("Too many rows for Excel: {value} (max: {MAX_ROWS})"))
        })
}
