//! Workbook generator CLI application.

use super::types::TemplateCli;
use crate::generator::GeneratorResult;
use clap::Parser;
use tracing::{error, info};

/// Runs one generation from parsed command-line flags.
pub struct TemplateApp {
    cli: TemplateCli,
}

impl TemplateApp {
    /// Create the application from the process arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::new(TemplateCli::parse())
    }

    #[must_use]
    pub fn new(cli: TemplateCli) -> Self {
        Self { cli }
    }

    /// Run the application
    ///
    /// # Errors
    ///
    /// Returns error if the options are invalid or the workbook cannot be written.
    pub fn run(self) -> GeneratorResult<()> {
        self.init_logging();
        info!("Starting transport workbook generator");

        match self.execute() {
            Ok(()) => {
                info!("Generation completed successfully");
                Ok(())
            }
            Err(err) => {
                error!("Generation failed: {}", err);
                if !self.cli.quiet {
                    eprintln!("Error: {err}");
                }
                Err(err)
            }
        }
    }

    /// Configure tracing subscriber based on CLI flags.
    ///
    /// Logs go to stderr so `--dump-model` output stays clean. A subscriber
    /// installed earlier in the process is kept.
    fn init_logging(&self) {
        let level = if self.cli.quiet {
            tracing::Level::ERROR
        } else if self.cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }

    fn execute(&self) -> GeneratorResult<()> {
        let builder = self.cli.builder();

        if self.cli.dump_model {
            let doc = builder.build()?;
            println!("{}", doc.to_json()?);
            return Ok(());
        }

        let path = self.cli.output_path(&builder);
        builder.generate_file(&path)?;

        if !self.cli.quiet {
            println!("{}: {}", builder.labels().done_message, path.display());
        }
        Ok(())
    }
}
