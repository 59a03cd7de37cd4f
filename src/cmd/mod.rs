pub mod calc;
pub mod export;
pub mod schema;
pub mod years;

use crate::tax::{self, parse_amount, CalculationInput, CalculationResult, YearConfig, DEFAULT_YEAR};
use clap::Args;

/// Amounts and year as typed by the user
#[derive(Args, Debug)]
pub struct SaleArgs {
    /// Sale price of the BTC in EUR (e.g. "100 000,50")
    #[arg(short, long, default_value = "")]
    price: String,

    /// Purchase price / costs in EUR
    #[arg(short, long, default_value = "")]
    cost: String,

    /// Tax year
    #[arg(short, long, default_value_t = DEFAULT_YEAR, value_parser = parse_year)]
    year: i32,
}

impl SaleArgs {
    pub fn input(&self) -> CalculationInput {
        CalculationInput {
            sale_proceeds: parse_amount(&self.price),
            cost_basis: parse_amount(&self.cost),
            year: self.year,
        }
    }

    /// Parse the amounts and run the calculation
    pub fn calculate(&self) -> anyhow::Result<(CalculationInput, CalculationResult)> {
        let input = self.input();
        log::debug!("Input: {:?}", input);
        let result = tax::calculate(&input)?;
        Ok((input, result))
    }
}

/// Only years present in the configuration table can be selected
fn parse_year(s: &str) -> Result<i32, String> {
    let year: i32 = s.trim().parse().map_err(|_| format!("'{s}' is not a year"))?;
    YearConfig::for_year(year).map_err(|e| e.to_string())?;
    Ok(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_supported_year() {
        assert_eq!(parse_year("2024"), Ok(2024));
        assert_eq!(parse_year(" 2023 "), Ok(2023));
    }

    #[test]
    fn parse_unsupported_year() {
        assert_eq!(
            parse_year("2019"),
            Err("unsupported tax year 2019 (supported: 2023, 2024, 2025)".to_string())
        );
    }

    #[test]
    fn parse_invalid_year() {
        assert_eq!(parse_year("twenty"), Err("'twenty' is not a year".to_string()));
    }
}
