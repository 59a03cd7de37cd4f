//! Export of a calculation as a document or spreadsheet file.

pub mod document;
pub mod format;
pub mod spreadsheet;

use crate::tax::{CalculationInput, CalculationResult};
use btctax_derive::ReportRows;
use rust_decimal::Decimal;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub const TITLE: &str = "Kalkulačka dane z predaja BTC";
pub const HEADER: [&str; 2] = ["Položka", "Hodnota"];
pub const YEAR_LABEL: &str = "Rok";

/// A labelled amount in an exported report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRow {
    pub label: &'static str,
    pub value: Decimal,
}

/// Everything written to an export: the entered amounts and their breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReportRows)]
pub struct Report {
    pub year: i32,
    #[report(label = "Predajná cena BTC (€)")]
    pub sale_proceeds: Decimal,
    #[report(label = "Nákupná cena (€)")]
    pub cost_basis: Decimal,
    #[report(label = "Zdaniteľný zisk (€)")]
    pub taxable_income: Decimal,
    #[report(label = "Daň z príjmu (€)")]
    pub income_tax: Decimal,
    #[report(label = "Zdravotné odvody (€)")]
    pub health_insurance: Decimal,
    #[report(label = "Spolu daň + odvody (€)")]
    pub total_tax: Decimal,
    #[report(label = "Čistý zisk (€)")]
    pub net_income: Decimal,
}

impl Report {
    pub fn new(input: &CalculationInput, result: &CalculationResult) -> Self {
        Report {
            year: input.year,
            sale_proceeds: input.sale_proceeds,
            cost_basis: input.cost_basis,
            taxable_income: result.taxable_income,
            income_tax: result.income_tax,
            health_insurance: result.health_insurance,
            total_tax: result.total_tax,
            net_income: result.net_income,
        }
    }

    /// File name for this report, e.g. `btc-tax-report-2025.html`
    pub fn file_name(&self, format: ExportFormat) -> String {
        format!("btc-tax-report-{}.{}", self.year, format.extension())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Formatted HTML document
    Document,
    /// CSV sheet with raw values
    Spreadsheet,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Document => "html",
            ExportFormat::Spreadsheet => "csv",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write spreadsheet {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Write the report into `dir` and return the path of the created file
pub fn write_report(
    report: &Report,
    format: ExportFormat,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(report.file_name(format));
    let io_err = |source: std::io::Error| ExportError::Io {
        path: path.clone(),
        source,
    };

    fs::create_dir_all(dir).map_err(io_err)?;
    let file = File::create(&path).map_err(io_err)?;

    match format {
        ExportFormat::Document => {
            let generated_on = chrono::Local::now().date_naive();
            document::write_document(report, generated_on, BufWriter::new(file)).map_err(io_err)?;
        }
        ExportFormat::Spreadsheet => {
            spreadsheet::write_spreadsheet(report, file).map_err(|source| ExportError::Csv {
                path: path.clone(),
                source,
            })?;
        }
    }

    log::info!("Wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    pub(crate) fn scenario_report() -> Report {
        let input = CalculationInput {
            sale_proceeds: dec!(100000),
            cost_basis: dec!(10000),
            year: 2025,
        };
        let result = crate::tax::calculate(&input).unwrap();
        Report::new(&input, &result)
    }

    #[test]
    fn file_names() {
        let report = scenario_report();
        assert_eq!(report.file_name(ExportFormat::Document), "btc-tax-report-2025.html");
        assert_eq!(report.file_name(ExportFormat::Spreadsheet), "btc-tax-report-2025.csv");
    }

    #[test]
    fn rows_in_order() {
        let rows = scenario_report().report_rows();
        let labels: Vec<_> = rows.iter().map(|r| r.label).collect();

        assert_eq!(
            labels,
            vec![
                "Predajná cena BTC (€)",
                "Nákupná cena (€)",
                "Zdaniteľný zisk (€)",
                "Daň z príjmu (€)",
                "Zdravotné odvody (€)",
                "Spolu daň + odvody (€)",
                "Čistý zisk (€)",
            ]
        );
    }

    #[test]
    fn rows_carry_values() {
        let values: Vec<_> = scenario_report()
            .report_rows()
            .into_iter()
            .map(|r| r.value)
            .collect();

        assert_eq!(
            values,
            vec![
                dec!(100000),
                dec!(10000),
                dec!(90000),
                dec!(19647.78),
                dec!(11793.60),
                dec!(31441.38),
                dec!(68558.62),
            ]
        );
    }

    #[test]
    fn write_both_formats() {
        let dir = std::env::temp_dir().join(format!("btctax-export-{}", std::process::id()));
        let report = scenario_report();

        let document = write_report(&report, ExportFormat::Document, &dir).unwrap();
        let spreadsheet = write_report(&report, ExportFormat::Spreadsheet, &dir).unwrap();

        assert_eq!(document, dir.join("btc-tax-report-2025.html"));
        assert_eq!(spreadsheet, dir.join("btc-tax-report-2025.csv"));
        assert!(fs::read_to_string(&document).unwrap().contains(TITLE));
        assert!(fs::read_to_string(&spreadsheet).unwrap().starts_with("Rok,2025"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn write_failure_reports_path() {
        let blocker = std::env::temp_dir().join(format!("btctax-blocker-{}", std::process::id()));
        fs::write(&blocker, b"not a directory").unwrap();

        let err = write_report(&scenario_report(), ExportFormat::Spreadsheet, &blocker).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
        assert!(err.to_string().contains("btc-tax-report-2025.csv"));

        fs::remove_file(&blocker).unwrap();
    }
}
