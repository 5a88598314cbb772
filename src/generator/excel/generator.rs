use super::super::traits::{GeneratorError, GeneratorResult};
use super::features::TemplateFeatures;
use crate::locale::{Labels, Locale};

/// Default number of data-entry rows prepared on each input sheet.
pub const DEFAULT_ENTRY_ROWS: u32 = 100;

/// Builder for the transport management workbook.
#[derive(Debug, Clone)]
pub struct TemplateBuilder {
    /// Enabled layout features.
    features: TemplateFeatures,
    /// Language of the generated text.
    locale: Locale,
    /// Every label written into the workbook.
    pub(super) labels: Labels,
    /// Month column the dashboard reports on (1-12).
    pub(super) focus_month: u8,
    /// Rows prepared for data entry on input sheets.
    pub(super) entry_rows: u32,
}

impl TemplateBuilder {
    /// Create a builder with the complete layout and Japanese labels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            features: TemplateFeatures::ALL,
            locale: Locale::Japanese,
            labels: Locale::Japanese.labels(),
            focus_month: 1,
            entry_rows: DEFAULT_ENTRY_ROWS,
        }
    }

    /// Switch locale; replaces any custom labels.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self.labels = locale.labels();
        self
    }

    /// Use a custom label set, e.g. a master table with more records.
    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Replace the whole feature set.
    #[must_use]
    pub fn with_features(mut self, features: TemplateFeatures) -> Self {
        self.features = features;
        self
    }

    /// Configure month-by-month formula propagation.
    #[must_use]
    pub fn with_all_months(mut self, enabled: bool) -> Self {
        self.features.set(TemplateFeatures::ALL_MONTHS, enabled);
        self
    }

    /// Configure the dashboard ranking formulas.
    #[must_use]
    pub fn with_vehicle_ranking(mut self, enabled: bool) -> Self {
        self.features.set(TemplateFeatures::VEHICLE_RANKING, enabled);
        self
    }

    /// Configure header freezing on input sheets.
    #[must_use]
    pub fn with_frozen_headers(mut self, enabled: bool) -> Self {
        self.features.set(TemplateFeatures::FREEZE_HEADERS, enabled);
        self
    }

    /// Configure blank entry rows; `rows` counts sample rows too.
    #[must_use]
    pub fn with_entry_rows(mut self, rows: Option<u32>) -> Self {
        match rows {
            Some(rows) => {
                self.features.insert(TemplateFeatures::ENTRY_ROWS);
                self.entry_rows = rows;
            }
            None => self.features.remove(TemplateFeatures::ENTRY_ROWS),
        }
        self
    }

    /// Month the dashboard KPIs and warnings point at.
    #[must_use]
    pub fn with_focus_month(mut self, month: u8) -> Self {
        self.focus_month = month;
        self
    }

    #[must_use]
    pub fn features(&self) -> TemplateFeatures {
        self.features
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Check if every month column gets formulas.
    #[must_use]
    pub fn all_months(&self) -> bool {
        self.features.contains(TemplateFeatures::ALL_MONTHS)
    }

    /// Check if the ranking table gets formulas.
    #[must_use]
    pub fn vehicle_ranking(&self) -> bool {
        self.features.contains(TemplateFeatures::VEHICLE_RANKING)
    }

    /// Check if blank entry rows are prepared.
    #[must_use]
    pub fn entry_rows_enabled(&self) -> bool {
        self.features.contains(TemplateFeatures::ENTRY_ROWS)
    }

    /// Check if header freezing is enabled.
    #[must_use]
    pub fn freeze_headers(&self) -> bool {
        self.features.contains(TemplateFeatures::FREEZE_HEADERS)
    }

    /// Month numbers that receive formulas on the summary sheets.
    pub(super) fn filled_months(&self) -> std::ops::RangeInclusive<u8> {
        if self.all_months() { 1..=12 } else { 1..=1 }
    }

    /// Reject option combinations that would produce a broken workbook.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Configuration`] describing the first problem.
    pub fn validate_options(&self) -> GeneratorResult<()> {
        if !(1..=12).contains(&self.focus_month) {
            return Err(GeneratorError::Configuration(format!(
                "Dashboard month must be between 1 and 12, got {}",
                self.focus_month
            )));
        }

        if self.focus_month != 1 && !self.all_months() {
            return Err(GeneratorError::Configuration(format!(
                "Dashboard month {} has no formulas without month propagation; \
                 only month 1 is filled in the source layout",
                self.focus_month
            )));
        }

        if self.entry_rows_enabled() {
            let labels = &self.labels;
            let largest_sample = [
                labels.sales.samples.len(),
                labels.expense.samples.len(),
                labels.labor.samples.len(),
                labels.cash.samples.len(),
            ]
            .into_iter()
            .max()
            .unwrap_or(0);

            if (self.entry_rows as usize) < largest_sample {
                return Err(GeneratorError::Configuration(format!(
                    "Entry rows ({}) must cover the {largest_sample} sample rows",
                    self.entry_rows
                )));
            }
        }

        let master = labels_master_sizes(&self.labels);
        if let Some((name, _)) = master.iter().find(|(_, len)| *len == 0) {
            return Err(GeneratorError::Configuration(format!(
                "Master table '{name}' needs at least one record"
            )));
        }

        Ok(())
    }
}

fn labels_master_sizes(labels: &Labels) -> [(&'static str, usize); 3] {
    [
        (labels.master.partners.caption, labels.master.partners.rows.len()),
        (labels.master.vehicles.caption, labels.master.vehicles.rows.len()),
        (labels.master.drivers.caption, labels.master.drivers.rows.len()),
    ]
}

impl Default for TemplateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
