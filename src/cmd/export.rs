//! Export command - write the breakdown to a document and/or spreadsheet

use super::SaleArgs;
use crate::export::{write_report, ExportFormat, Report};
use anyhow::Context;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum FormatArg {
    /// HTML document with formatted amounts
    Document,
    /// CSV spreadsheet with raw amounts
    Spreadsheet,
    /// Both files
    #[default]
    All,
}

impl FormatArg {
    fn formats(self) -> &'static [ExportFormat] {
        match self {
            FormatArg::Document => &[ExportFormat::Document],
            FormatArg::Spreadsheet => &[ExportFormat::Spreadsheet],
            FormatArg::All => &[ExportFormat::Document, ExportFormat::Spreadsheet],
        }
    }
}

#[derive(Args, Debug)]
pub struct ExportCommand {
    #[command(flatten)]
    sale: SaleArgs,

    /// Which file(s) to write
    #[arg(short, long, value_enum, default_value_t = FormatArg::All)]
    format: FormatArg,

    /// Directory to write into
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Open the document in the default viewer once written
    #[arg(long)]
    open: bool,
}

impl ExportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let (input, result) = self.sale.calculate()?;
        let report = Report::new(&input, &result);

        for &format in self.format.formats() {
            let path = write_report(&report, format, &self.output)?;
            println!("Report written to: {}", path.display());

            if self.open && format == ExportFormat::Document {
                opener::open(&path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
            }
        }
        Ok(())
    }
}
