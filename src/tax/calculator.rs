use super::config::{ConfigError, YearConfig, HEALTH_INSURANCE_RATE, HIGH_TAX_RATE, LOW_TAX_RATE};
use rust_decimal::Decimal;
use serde::Serialize;

/// Amounts entered for a single sale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationInput {
    pub sale_proceeds: Decimal,
    pub cost_basis: Decimal,
    pub year: i32,
}

/// Tax breakdown for a single sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    /// Proceeds minus cost basis, never negative
    pub taxable_income: Decimal,
    pub income_tax: Decimal,
    pub health_insurance: Decimal,
    /// Income tax plus health insurance
    pub total_tax: Decimal,
    /// Gross sale proceeds minus total tax
    pub net_income: Decimal,
}

/// Calculate tax for the input's year.
///
/// Fails only when the year has no configuration.
pub fn calculate(input: &CalculationInput) -> Result<CalculationResult, ConfigError> {
    let config = YearConfig::for_year(input.year)?;
    Ok(calculate_with(config, input.sale_proceeds, input.cost_basis))
}

/// Calculate tax against an explicit year configuration
pub fn calculate_with(
    config: &YearConfig,
    sale_proceeds: Decimal,
    cost_basis: Decimal,
) -> CalculationResult {
    let taxable_income = (sale_proceeds - cost_basis).max(Decimal::ZERO);

    // marginal: only the part above the limit gets the higher rate
    let income_tax = if taxable_income <= config.tax_limit {
        taxable_income * LOW_TAX_RATE
    } else {
        config.tax_limit * LOW_TAX_RATE + (taxable_income - config.tax_limit) * HIGH_TAX_RATE
    };

    let health_base = taxable_income.min(config.health_cap);
    let health_insurance = health_base * HEALTH_INSURANCE_RATE;

    let total_tax = income_tax + health_insurance;
    let net_income = sale_proceeds - total_tax;

    log::debug!(
        "{}: taxable {}, income tax {}, health base {}, health insurance {}",
        config.year,
        taxable_income,
        income_tax,
        health_base,
        health_insurance
    );

    CalculationResult {
        taxable_income,
        income_tax,
        health_insurance,
        total_tax,
        net_income,
    }
}
