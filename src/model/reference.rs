//! A1-style cell addressing.
//!
//! The model stores zero-based `(row, column)` pairs the same way
//! `rust_xlsxwriter` does. Formulas, on the other hand, are written in the
//! spreadsheet's own A1 notation, so every builder goes through these helpers
//! to turn coordinates into text.

use serde::Serialize;
use std::fmt;

/// Maximum number of columns in an xlsx worksheet.
pub const MAX_COLUMNS: u16 = 16_384;

/// Maximum number of rows in an xlsx worksheet.
pub const MAX_ROWS: u32 = 1_048_576;

/// Zero-based cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CellRef {
    /// Zero-based row index.
    pub row: u32,
    /// Zero-based column index.
    pub col: u16,
}

impl CellRef {
    #[must_use]
    pub const fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Relative A1 notation, e.g. `B5`.
    #[must_use]
    pub fn to_a1(self) -> String {
        format!("{}{}", column_name(self.col), self.row + 1)
    }

    /// Absolute A1 notation, e.g. `$B$5`.
    #[must_use]
    pub fn to_absolute_a1(self) -> String {
        format!("${}${}", column_name(self.col), self.row + 1)
    }

    /// Parse `B5` or `$B$5` into a coordinate.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let letters_end = text
            .char_indices()
            .find(|(_, c)| !(c.is_ascii_alphabetic() || *c == '$'))
            .map(|(i, _)| i)?;
        let letters: String = text[..letters_end].chars().filter(|c| *c != '$').collect();
        let digits = text[letters_end..].trim_start_matches('$');
        if letters.is_empty() || digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let col = column_index(&letters)?;
        let row: u32 = digits.parse().ok()?;
        if row == 0 || row > MAX_ROWS {
            return None;
        }
        Some(Self::new(row - 1, col))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1())
    }
}

/// Inclusive rectangular range of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellRange {
    pub first: CellRef,
    pub last: CellRef,
}

impl CellRange {
    /// Build a range, normalising the corners so `first` is top-left.
    #[must_use]
    pub fn new(first: CellRef, last: CellRef) -> Self {
        Self {
            first: CellRef::new(first.row.min(last.row), first.col.min(last.col)),
            last: CellRef::new(first.row.max(last.row), first.col.max(last.col)),
        }
    }

    /// Range covering a single cell.
    #[must_use]
    pub fn single(cell: CellRef) -> Self {
        Self::new(cell, cell)
    }

    /// Range spanning rows `first_row..=last_row` of one column.
    #[must_use]
    pub fn column_span(col: u16, first_row: u32, last_row: u32) -> Self {
        Self::new(CellRef::new(first_row, col), CellRef::new(last_row, col))
    }

    /// Range spanning columns `first_col..=last_col` of one row.
    #[must_use]
    pub fn row_span(row: u32, first_col: u16, last_col: u16) -> Self {
        Self::new(CellRef::new(row, first_col), CellRef::new(row, last_col))
    }

    #[must_use]
    pub fn contains(&self, cell: CellRef) -> bool {
        (self.first.row..=self.last.row).contains(&cell.row)
            && (self.first.col..=self.last.col).contains(&cell.col)
    }

    /// Number of rows covered.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.last.row - self.first.row + 1
    }

    /// Relative A1 notation; single cells collapse to `B5`.
    #[must_use]
    pub fn to_a1(&self) -> String {
        if self.first == self.last {
            self.first.to_a1()
        } else {
            format!("{}:{}", self.first.to_a1(), self.last.to_a1())
        }
    }

    /// Absolute A1 notation, e.g. `$D$5:$D$9`.
    #[must_use]
    pub fn to_absolute_a1(&self) -> String {
        if self.first == self.last {
            self.first.to_absolute_a1()
        } else {
            format!(
                "{}:{}",
                self.first.to_absolute_a1(),
                self.last.to_absolute_a1()
            )
        }
    }

    /// Parse `B5`, `B5:M5` or `$D$5:$D$9`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text.split_once(':') {
            Some((first, last)) => Some(Self::new(CellRef::parse(first)?, CellRef::parse(last)?)),
            None => CellRef::parse(text).map(Self::single),
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1())
    }
}

/// Convert a zero-based column index to its letter name (`0` → `A`, `26` → `AA`).
#[must_use]
pub fn column_name(col: u16) -> String {
    let mut col = i32::from(col);
    let mut letters = Vec::new();

    loop {
        let remainder = col % 26;
        // remainder is always 0..26
        letters.push(char::from(b'A' + remainder as u8));
        col = (col / 26) - 1;
        if col < 0 {
            break;
        }
    }

    letters.iter().rev().collect()
}

/// Convert a column name (`A`, `AA`) back to a zero-based index.
#[must_use]
pub fn column_index(name: &str) -> Option<u16> {
    if name.is_empty() {
        return None;
    }

    let mut index: u32 = 0;
    for c in name.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = u32::from(c.to_ascii_uppercase()) - u32::from('A') + 1;
        index = index * 26 + digit;
        if index > u32::from(MAX_COLUMNS) {
            return None;
        }
    }

    u16::try_from(index - 1).ok()
}

/// Whole-column reference such as `E:E`.
#[must_use]
pub fn whole_column(col: u16) -> String {
    let name = column_name(col);
    format!("{name}:{name}")
}

/// Sheet name as it must appear in front of `!` in a formula.
///
/// Names made only of letters, digits, `_` and `.` (including non-ASCII
/// letters such as `売上入力`) are used as-is; anything else is wrapped in
/// single quotes with embedded quotes doubled.
#[must_use]
pub fn sheet_prefix(sheet: &str) -> String {
    let plain = !sheet.is_empty()
        && !sheet.starts_with(|c: char| c.is_ascii_digit())
        && sheet
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '.');

    if plain {
        sheet.to_string()
    } else {
        format!("'{}'", sheet.replace('\'', "''"))
    }
}

/// `Sheet!Range` reference text.
#[must_use]
pub fn qualified(sheet: &str, range: &str) -> String {
    format!("{}!{range}", sheet_prefix(sheet))
}
