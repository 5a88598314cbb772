//! CLI type definitions and enums

use crate::generator::excel::DEFAULT_ENTRY_ROWS;
use crate::generator::{TemplateBuilder, TemplateFeatures};
use crate::locale::Locale;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Transport management workbook generator
#[derive(Parser, Debug)]
#[command(
    name = "transport-workbook",
    version,
    about = "Generate the transport company management workbook"
)]
pub struct TemplateCli {
    /// Output file; defaults to the locale's file name in the current directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Language of sheet names, labels and sample data
    #[arg(short, long, value_enum, default_value = "ja")]
    pub locale: LocaleArg,

    /// Month (1-12) the dashboard reports on
    #[arg(short, long, default_value_t = 1)]
    pub month: u8,

    /// Layout variant
    #[arg(long, value_enum, default_value = "complete")]
    pub layout: Layout,

    /// Data-entry rows prepared on each input sheet
    #[arg(long, default_value_t = DEFAULT_ENTRY_ROWS)]
    pub entry_rows: u32,

    /// Print the document model as JSON instead of writing the workbook
    #[arg(long)]
    pub dump_model: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LocaleArg {
    /// Japanese
    Ja,
    /// English
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Ja => Locale::Japanese,
            LocaleArg::En => Locale::English,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// Every month filled, ranking formulas, entry rows and frozen headers
    Complete,
    /// January-only formulas and an empty ranking table
    Source,
}

impl TemplateCli {
    /// Builder configured from the parsed flags.
    #[must_use]
    pub fn builder(&self) -> TemplateBuilder {
        let builder = TemplateBuilder::new()
            .with_locale(self.locale.into())
            .with_focus_month(self.month);

        match self.layout {
            Layout::Complete => builder
                .with_features(TemplateFeatures::ALL)
                .with_entry_rows(Some(self.entry_rows)),
            Layout::Source => builder.with_features(TemplateFeatures::SOURCE_LAYOUT),
        }
    }

    /// Destination of the workbook.
    #[must_use]
    pub fn output_path(&self, builder: &TemplateBuilder) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(builder.labels().output_file_name))
    }
}
