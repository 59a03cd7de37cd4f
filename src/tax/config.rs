use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Income tax rate up to the year's tax limit
pub const LOW_TAX_RATE: Decimal = dec!(0.19);

/// Income tax rate on the portion above the tax limit
pub const HIGH_TAX_RATE: Decimal = dec!(0.25);

/// Health insurance levy rate on the capped base
pub const HEALTH_INSURANCE_RATE: Decimal = dec!(0.14);

/// Year selected when none is given
pub const DEFAULT_YEAR: i32 = 2025;

/// Per-year parameters for the Slovak income tax and health insurance levy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearConfig {
    pub year: i32,
    /// Income above this amount is taxed at the higher rate
    pub tax_limit: Decimal,
    /// Ceiling on the income base subject to health insurance
    pub health_cap: Decimal,
}

static YEAR_CONFIGS: &[YearConfig] = &[
    YearConfig {
        year: 2023,
        tax_limit: dec!(41000),
        health_cap: dec!(78000),
    },
    YearConfig {
        year: 2024,
        tax_limit: dec!(45000),
        health_cap: dec!(82000),
    },
    YearConfig {
        year: 2025,
        tax_limit: dec!(47537),
        health_cap: dec!(84240),
    },
];

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported tax year {year} (supported: {supported})")]
    UnsupportedYear { year: i32, supported: String },
}

impl YearConfig {
    /// Look up the configuration for a tax year.
    ///
    /// There is no fallback: an unknown year is an error, since using another
    /// year's limits would misreport the tax owed.
    pub fn for_year(year: i32) -> Result<&'static YearConfig, ConfigError> {
        YEAR_CONFIGS
            .iter()
            .find(|c| c.year == year)
            .ok_or_else(|| ConfigError::UnsupportedYear {
                year,
                supported: supported_years()
                    .map(|y| y.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    pub fn all() -> &'static [YearConfig] {
        YEAR_CONFIGS
    }
}

/// Years present in the configuration table, ascending
pub fn supported_years() -> impl Iterator<Item = i32> {
    YEAR_CONFIGS.iter().map(|c| c.year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_2023() {
        let config = YearConfig::for_year(2023).unwrap();
        assert_eq!(config.tax_limit, dec!(41000));
        assert_eq!(config.health_cap, dec!(78000));
    }

    #[test]
    fn config_2024() {
        let config = YearConfig::for_year(2024).unwrap();
        assert_eq!(config.tax_limit, dec!(45000));
        assert_eq!(config.health_cap, dec!(82000));
    }

    #[test]
    fn config_2025() {
        let config = YearConfig::for_year(2025).unwrap();
        assert_eq!(config.tax_limit, dec!(47537));
        assert_eq!(config.health_cap, dec!(84240));
    }

    #[test]
    fn unknown_year_is_rejected() {
        let err = YearConfig::for_year(2019).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnsupportedYear {
                year: 2019,
                supported: "2023, 2024, 2025".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "unsupported tax year 2019 (supported: 2023, 2024, 2025)"
        );
    }

    #[test]
    fn supported_years_ascending() {
        assert_eq!(supported_years().collect::<Vec<_>>(), vec![2023, 2024, 2025]);
    }

    #[test]
    fn default_year_is_supported() {
        assert!(YearConfig::for_year(DEFAULT_YEAR).is_ok());
    }

    #[test]
    fn rates() {
        assert_eq!(LOW_TAX_RATE, dec!(0.19));
        assert_eq!(HIGH_TAX_RATE, dec!(0.25));
        assert_eq!(HEALTH_INSURANCE_RATE, dec!(0.14));
    }
}
