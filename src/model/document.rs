use super::reference::CellRange;
use super::sheet::Sheet;
use crate::generator::traits::{GeneratorError, GeneratorResult};
use serde::Serialize;

/// Excel's limit on worksheet name length.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Where the allowed values of a validation list come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListSource {
    /// Literal options, e.g. `入金,出金`.
    Inline(Vec<String>),
    /// A range formula into another sheet, e.g. `=マスタ!$D$5:$D$9`.
    Range {
        sheet: String,
        range: CellRange,
        formula: String,
    },
}

/// A named dropdown definition shared by every range it is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationList {
    pub name: String,
    pub source: ListSource,
}

impl ValidationList {
    #[must_use]
    pub fn inline<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            source: ListSource::Inline(options.into_iter().map(Into::into).collect()),
        }
    }

    /// List sourced from an absolute range of `sheet`.
    #[must_use]
    pub fn range(name: impl Into<String>, sheet: &str, range: CellRange) -> Self {
        let formula = format!(
            "={}",
            super::reference::qualified(sheet, &range.to_absolute_a1())
        );
        Self {
            name: name.into(),
            source: ListSource::Range {
                sheet: sheet.to_string(),
                range,
                formula,
            },
        }
    }
}

/// Ordered set of sheets plus the validation lists they share.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    sheets: Vec<Sheet>,
    validation_lists: Vec<ValidationList>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a validation list before any sheet attaches it.
    ///
    /// # Errors
    ///
    /// Returns an error when a list of the same name already exists.
    pub fn define_validation(&mut self, list: ValidationList) -> GeneratorResult<()> {
        if self.validation(&list.name).is_some() {
            return Err(GeneratorError::Generation(format!(
                "Validation list '{}' defined twice",
                list.name
            )));
        }
        self.validation_lists.push(list);
        Ok(())
    }

    #[must_use]
    pub fn validation(&self, name: &str) -> Option<&ValidationList> {
        self.validation_lists.iter().find(|list| list.name == name)
    }

    #[must_use]
    pub fn validation_lists(&self) -> &[ValidationList] {
        &self.validation_lists
    }

    /// Append a sheet as the last tab.
    ///
    /// # Errors
    ///
    /// See [`Document::insert_sheet`].
    pub fn add_sheet(&mut self, sheet: Sheet) -> GeneratorResult<()> {
        let index = self.sheets.len();
        self.insert_sheet(index, sheet)
    }

    /// Insert a sheet at tab position `index`.
    ///
    /// # Errors
    ///
    /// Returns an error when the name is empty, too long, already used, or
    /// when the sheet attaches a validation list that was never defined.
    pub fn insert_sheet(&mut self, index: usize, sheet: Sheet) -> GeneratorResult<()> {
        let name = sheet.name();
        if name.is_empty() || name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(GeneratorError::Generation(format!(
                "Sheet name '{name}' must be 1 to {MAX_SHEET_NAME_LEN} characters"
            )));
        }
        if name.contains(['\\', '/', '?', '*', '[', ']', ':']) {
            return Err(GeneratorError::Generation(format!(
                "Sheet name '{name}' contains a character Excel does not allow"
            )));
        }
        if self.sheet(name).is_some() {
            return Err(GeneratorError::Generation(format!(
                "Sheet name '{name}' is already used"
            )));
        }
        if let Some(target) = sheet
            .validations()
            .iter()
            .find(|target| self.validation(&target.list).is_none())
        {
            return Err(GeneratorError::Generation(format!(
                "Sheet '{name}' attaches unknown validation list '{}'",
                target.list
            )));
        }
        if index > self.sheets.len() {
            return Err(GeneratorError::Generation(format!(
                "Tab position {index} is past the end of the workbook"
            )));
        }

        self.sheets.insert(index, sheet);
        Ok(())
    }

    #[must_use]
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name() == name)
    }

    /// Mutable access, e.g. to type records into an input sheet.
    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut Sheet> {
        self.sheets.iter_mut().find(|sheet| sheet.name() == name)
    }

    /// Sheets in tab order.
    #[must_use]
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Sheet names in tab order.
    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(Sheet::name).collect()
    }

    /// Pretty JSON rendering of the whole model.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn to_json(&self) -> GeneratorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
