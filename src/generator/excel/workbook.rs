use super::super::traits::{Generator, GeneratorError, GeneratorResult};
use super::generator::TemplateBuilder;
use super::palette::Palette;
use super::writer;
use crate::model::Document;
use std::path::Path;
use tracing::info;

impl TemplateBuilder {
    /// Build the complete document model.
    ///
    /// Sheets are added in dependency order and the dashboard is pinned to
    /// the first tab at the end.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or a model invariant is
    /// violated.
    pub fn build(&self) -> GeneratorResult<Document> {
        self.validate_options()?;

        let palette = Palette::standard();
        let mut doc = Document::new();

        self.build_master_sheet(&mut doc, &palette)?;
        self.build_sales_sheet(&mut doc, &palette)?;
        self.build_expense_sheet(&mut doc, &palette)?;
        self.build_labor_sheet(&mut doc, &palette)?;
        self.build_cash_sheet(&mut doc, &palette)?;
        self.build_profit_loss_sheet(&mut doc, &palette)?;
        self.build_vehicle_sheet(&mut doc, &palette)?;
        self.build_cash_flow_sheet(&mut doc, &palette)?;
        self.build_dashboard_sheet(&mut doc, &palette)?;

        Ok(doc)
    }

    /// Build the workbook and return the xlsx bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if building or serialising the workbook fails.
    pub fn generate_bytes(&self) -> GeneratorResult<Vec<u8>> {
        let doc = self.build()?;
        writer::write_document(&doc)
    }

    /// Build the workbook and write it to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Serialization`] if the file cannot be
    /// written, or any error from [`TemplateBuilder::generate_bytes`].
    pub fn generate_file(&self, path: &Path) -> GeneratorResult<()> {
        info!(
            locale = %self.locale(),
            month = self.focus_month,
            "Generating transport management workbook"
        );
        let content = self.generate_bytes()?;
        std::fs::write(path, &content).map_err(|e| GeneratorError::Serialization {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        info!(path = %path.display(), bytes = content.len(), "Workbook written");
        Ok(())
    }
}

impl Generator for TemplateBuilder {
    fn name(&self) -> &'static str {
        "transport-workbook"
    }

    fn description(&self) -> &'static str {
        "Generate the transport company management workbook"
    }

    fn file_extension(&self) -> &'static str {
        "xlsx"
    }

    fn generate(&self) -> GeneratorResult<Vec<u8>> {
        self.generate_bytes()
    }
}
