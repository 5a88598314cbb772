//! `transport-workbook` command-line interface
//!
//! Writes the transport company management workbook. Run without arguments
//! to produce the Japanese workbook in the current directory.

use transport_workbook::cli;

fn main() -> anyhow::Result<()> {
    cli::run()?;
    Ok(())
}
