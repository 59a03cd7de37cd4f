//! Calc command - compute and display the tax breakdown for a sale

use super::SaleArgs;
use crate::export::format::{format_eur, format_plain};
use crate::export::{Report, YEAR_LABEL};
use crate::tax::{CalculationInput, CalculationResult};
use clap::Args;
use schemars::JsonSchema;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct CalcCommand {
    #[command(flatten)]
    sale: SaleArgs,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

/// Breakdown as printed by `calc --json`. Amounts have two decimal places.
#[derive(Debug, Serialize, JsonSchema)]
pub struct CalculationOutput {
    /// Tax year the limits were taken from
    pub year: i32,
    /// Parsed sale price in EUR
    pub sale_proceeds: String,
    /// Parsed purchase price / costs in EUR
    pub cost_basis: String,
    /// Sale proceeds minus cost basis, never negative
    pub taxable_income: String,
    /// Income tax at 19 % up to the year's limit and 25 % above it
    pub income_tax: String,
    /// 14 % of taxable income, capped at the year's maximum base
    pub health_insurance: String,
    /// Income tax plus health insurance
    pub total_tax: String,
    /// Sale proceeds minus total tax
    pub net_income: String,
}

impl CalculationOutput {
    pub fn new(input: &CalculationInput, result: &CalculationResult) -> Self {
        CalculationOutput {
            year: input.year,
            sale_proceeds: format_plain(input.sale_proceeds),
            cost_basis: format_plain(input.cost_basis),
            taxable_income: format_plain(result.taxable_income),
            income_tax: format_plain(result.income_tax),
            health_insurance: format_plain(result.health_insurance),
            total_tax: format_plain(result.total_tax),
            net_income: format_plain(result.net_income),
        }
    }
}

#[derive(Debug, Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Položka")]
    label: String,
    #[tabled(rename = "Hodnota")]
    value: String,
}

impl CalcCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let (input, result) = self.sale.calculate()?;

        if self.json {
            let output = CalculationOutput::new(&input, &result);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", breakdown_table(&Report::new(&input, &result)));
        }
        Ok(())
    }
}

fn breakdown_table(report: &Report) -> String {
    let mut rows = vec![BreakdownRow {
        label: YEAR_LABEL.to_string(),
        value: report.year.to_string(),
    }];
    rows.extend(report.report_rows().into_iter().map(|row| BreakdownRow {
        label: row.label.to_string(),
        value: format_eur(row.value),
    }));

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}
