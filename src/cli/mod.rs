//! Command-line front end.

mod app;
mod types;

pub use app::TemplateApp;
pub use types::{Layout, LocaleArg, TemplateCli};

/// Parse the process arguments and run.
///
/// # Errors
///
/// Returns the error that stopped the build or the write.
pub fn run() -> crate::GeneratorResult<()> {
    TemplateApp::from_args().run()
}
