//! Years command - list the supported tax years and their limits

use crate::export::format::{format_eur, format_plain};
use crate::tax::config::{HEALTH_INSURANCE_RATE, HIGH_TAX_RATE, LOW_TAX_RATE};
use crate::tax::YearConfig;
use clap::Args;
use rust_decimal_macros::dec;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct YearsCommand {
    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Tabled, Serialize)]
struct YearRow {
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Tax Limit")]
    tax_limit: String,
    #[tabled(rename = "Health Cap")]
    health_cap: String,
}

impl YearsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        if self.json {
            let rows: Vec<_> = YearConfig::all()
                .iter()
                .map(|c| YearRow {
                    year: c.year,
                    tax_limit: format_plain(c.tax_limit),
                    health_cap: format_plain(c.health_cap),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            self.print_table();
        }
        Ok(())
    }

    fn print_table(&self) {
        let rows = YearConfig::all().iter().map(|c| YearRow {
            year: c.year,
            tax_limit: format_eur(c.tax_limit),
            health_cap: format_eur(c.health_cap),
        });

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
        println!(
            "Income tax {:.0} % up to the limit, {:.0} % above. Health insurance {:.0} % up to the cap.",
            LOW_TAX_RATE * dec!(100),
            HIGH_TAX_RATE * dec!(100),
            HEALTH_INSURANCE_RATE * dec!(100)
        );
    }
}
