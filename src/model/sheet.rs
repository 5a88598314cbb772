use super::cell::Cell;
use super::reference::{CellRange, CellRef, MAX_COLUMNS, MAX_ROWS};
use crate::generator::traits::{GeneratorError, GeneratorResult};
use serde::Serialize;
use std::collections::BTreeMap;

/// Comparison operator of a conditional formatting rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    EqualTo,
    NotEqualTo,
}

/// What a conditional rule changes when it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    FontColor(u32),
    Fill(u32),
}

/// Display-time rule evaluated by the spreadsheet reader.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionalRule {
    pub range: CellRange,
    pub comparison: Comparison,
    pub threshold: f64,
    pub highlight: Highlight,
}

/// A named validation list applied to a range of this sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationTarget {
    pub list: String,
    pub range: CellRange,
}

/// One worksheet of the document.
#[derive(Debug, Clone, Serialize)]
pub struct Sheet {
    name: String,
    #[serde(serialize_with = "serialize_cells")]
    cells: BTreeMap<CellRef, Cell>,
    column_widths: BTreeMap<u16, f64>,
    merges: Vec<CellRange>,
    show_gridlines: bool,
    freeze_panes: Option<CellRef>,
    conditional_rules: Vec<ConditionalRule>,
    validations: Vec<ValidationTarget>,
}

impl Sheet {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
            column_widths: BTreeMap::new(),
            merges: Vec::new(),
            show_gridlines: true,
            freeze_panes: None,
            conditional_rules: Vec::new(),
            validations: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write a cell. Cells are write-once.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate is outside the worksheet grid or
    /// the cell has already been written.
    pub fn put(&mut self, row: u32, col: u16, cell: Cell) -> GeneratorResult<()> {
        let at = Self::checked_ref(row, col)?;
        if self.cells.contains_key(&at) {
            return Err(GeneratorError::Generation(format!(
                "Cell {}!{} written twice",
                self.name,
                at.to_a1()
            )));
        }
        self.cells.insert(at, cell);
        Ok(())
    }

    /// Write a run of cells left to right starting at `(row, first_col)`.
    ///
    /// # Errors
    ///
    /// Propagates the first failing [`Sheet::put`].
    pub fn put_row<I>(&mut self, row: u32, first_col: u16, cells: I) -> GeneratorResult<()>
    where
        I: IntoIterator<Item = Cell>,
    {
        for (offset, cell) in cells.into_iter().enumerate() {
            let offset = u16::try_from(offset).map_err(|_| {
                GeneratorError::Generation(format!("Row {row} of {} is too wide", self.name))
            })?;
            self.put(row, first_col + offset, cell)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.get(&CellRef::new(row, col))
    }

    /// Look up a cell by A1 notation.
    #[must_use]
    pub fn cell_at(&self, a1: &str) -> Option<&Cell> {
        CellRef::parse(a1).and_then(|at| self.cells.get(&at))
    }

    /// Formula text at an A1 address.
    #[must_use]
    pub fn formula_at(&self, a1: &str) -> Option<&str> {
        self.cell_at(a1).and_then(Cell::formula_text)
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellRef, &Cell)> {
        self.cells.iter().map(|(at, cell)| (*at, cell))
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Last row holding a cell, if any.
    #[must_use]
    pub fn max_row(&self) -> Option<u32> {
        self.cells.keys().map(|at| at.row).max()
    }

    /// # Errors
    ///
    /// Returns an error for a column outside the worksheet grid.
    pub fn set_column_width(&mut self, col: u16, width: f64) -> GeneratorResult<()> {
        Self::checked_ref(0, col)?;
        self.column_widths.insert(col, width);
        Ok(())
    }

    pub fn column_widths(&self) -> impl Iterator<Item = (u16, f64)> + '_ {
        self.column_widths.iter().map(|(col, width)| (*col, *width))
    }

    #[must_use]
    pub fn column_width(&self, col: u16) -> Option<f64> {
        self.column_widths.get(&col).copied()
    }

    /// Merge a range. The top-left cell must hold the text shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the range overlaps an existing merge.
    pub fn merge(&mut self, range: CellRange) -> GeneratorResult<()> {
        let overlaps = self.merges.iter().any(|m| {
            m.first.row <= range.last.row
                && range.first.row <= m.last.row
                && m.first.col <= range.last.col
                && range.first.col <= m.last.col
        });
        if overlaps {
            return Err(GeneratorError::Generation(format!(
                "Merged range {}!{} overlaps an existing merge",
                self.name,
                range.to_a1()
            )));
        }
        self.merges.push(range);
        Ok(())
    }

    #[must_use]
    pub fn merges(&self) -> &[CellRange] {
        &self.merges
    }

    pub fn hide_gridlines(&mut self) {
        self.show_gridlines = false;
    }

    #[must_use]
    pub fn shows_gridlines(&self) -> bool {
        self.show_gridlines
    }

    /// Freeze everything above `row` and left of `col`.
    pub fn freeze_panes(&mut self, row: u32, col: u16) {
        self.freeze_panes = Some(CellRef::new(row, col));
    }

    #[must_use]
    pub fn frozen_at(&self) -> Option<CellRef> {
        self.freeze_panes
    }

    pub fn add_conditional_rule(&mut self, rule: ConditionalRule) {
        self.conditional_rules.push(rule);
    }

    #[must_use]
    pub fn conditional_rules(&self) -> &[ConditionalRule] {
        &self.conditional_rules
    }

    /// Attach a document-level validation list to a range.
    ///
    /// The list name is resolved by [`crate::model::Document::add_sheet`].
    pub fn attach_validation(&mut self, list: impl Into<String>, range: CellRange) {
        self.validations.push(ValidationTarget {
            list: list.into(),
            range,
        });
    }

    #[must_use]
    pub fn validations(&self) -> &[ValidationTarget] {
        &self.validations
    }

    fn checked_ref(row: u32, col: u16) -> GeneratorResult<CellRef> {
        if row >= MAX_ROWS || col >= MAX_COLUMNS {
            return Err(GeneratorError::Generation(format!(
                "Cell ({row}, {col}) is outside the worksheet grid"
            )));
        }
        Ok(CellRef::new(row, col))
    }
}

fn serialize_cells<S>(cells: &BTreeMap<CellRef, Cell>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeMap;

    let mut map = serializer.serialize_map(Some(cells.len()))?;
    for (at, cell) in cells {
        map.serialize_entry(&at.to_a1(), cell)?;
    }
    map.end()
}
